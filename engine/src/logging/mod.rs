//! Log sinks for hosts embedding the crate.
//!
//! The crate itself only emits records through the `log` facade and never installs a logger.

mod channel;

pub use channel::{ChannelLogger, LogMessage};
