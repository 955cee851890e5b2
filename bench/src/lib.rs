//! Benchmark utilities for the spatial index and entity allocation.
//!
//! - **Spatial micro**: quantize, flatten, region enumeration and grid range queries.
//! - **Entity micro**: allocation (single, batched, contended) and spawning into stores.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_spatial_bench
//!
//! # Run one group
//! cargo bench -p rusty_spatial_bench -- range_query
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports for visualization.

pub mod components;
pub mod scatter;
