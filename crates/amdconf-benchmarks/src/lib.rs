//! amdconf benchmarking suite
//!
//! Decode and encode throughput across document sizes.

pub mod common;

pub use common::*;
