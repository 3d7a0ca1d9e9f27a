//! Order domain module - the order catalogue and the case data it reads
//!
//! Orders are static catalogue entries; the case snapshot is consumed, never
//! mutated.

pub mod case_data;
pub mod order;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use case_data::*;
pub use order::*;
pub use types::*;
