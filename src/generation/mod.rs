//! Generation domain module - turns a case into a rendered order
//!
//! Each digitally generated order has one parameter generator and at most one
//! additional documents collector. The registry pairs them with order types,
//! the decorator stamps the fields every order shares, and the orchestrator
//! runs generation, decoration and rendering in that order.

pub mod collectors;
pub mod decorator;
pub mod generators;
pub mod orchestrator;
pub mod parameters;
pub mod registry;
pub mod traits;

pub use collectors::standard_collectors;
pub use decorator::*;
pub use generators::{GeneratorDependencies, generator_for, standard_generators};
pub use orchestrator::*;
pub use parameters::*;
pub use registry::*;
pub use traits::*;

#[cfg(test)]
pub(crate) mod test_support;
