//! Number pool and the without-replacement draw primitive.
//!
//! The pool is the full set of numbers eligible for any draw (`1..=60`).
//! Both candidate games and the winning draw come out of the same
//! [`NumberPool::draw_unique`] call - there is exactly one place in the
//! crate that knows how to pick numbers.

pub mod sampler;

pub use sampler::NumberPool;
