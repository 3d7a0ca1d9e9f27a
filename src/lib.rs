//! Order document generation engine.
//!
//! Builds court orders from a case snapshot: a per-order parameter generator
//! supplies the order's wording, the common element decorator adds the fields
//! every order shares, and a renderer turns the result into a document. The
//! order creation service picks between generation and a manually uploaded
//! order and stores the outcome.
#![deny(unsafe_code)]

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod orders;
