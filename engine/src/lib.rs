//! Entity allocation and spatial hashing for an entity-component runtime.
//!
//! - [`ecs`]: entity identifiers, the atomic entity allocator owned by a [`World`](ecs::World),
//!   the [`Hashable`](ecs::Hashable) component capability and the [`Store`](ecs::Store)
//!   collaborator trait with a couple of stores.
//! - [`spatial`]: pure functions mapping world-space positions onto a bounded integer grid
//!   (quantize, region, flatten, inbounds) and the [`Grid`](spatial::Grid) that composes them.
//! - [`logging`]: a channel-backed sink for the crate's `log` records.

// Lets derive macros refer to `::rusty_spatial` from inside this crate.
extern crate self as rusty_spatial;

pub mod ecs;
pub mod logging;
pub mod spatial;
