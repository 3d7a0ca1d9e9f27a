//! Error handling for the order document generation engine.
//!
//! This module defines the main error type `OrderError` used throughout the
//! library, along with a convenient `Result` type alias. Errors fall into three
//! families that callers treat differently:
//!
//! - **Configuration**: a strategy is missing or registered twice for an order
//!   type. These indicate a deployment mismatch and are never retried.
//! - **Input**: the case snapshot lacks an answer a generator needs.
//! - **Collaborator**: a lookup, render, upload or sealing call failed.
//!
//! None of them are recovered inside the engine; a failed generation aborts the
//! whole request.
//!
//! # Examples
//!
//! ```
//! use order_docgen::core::error::{OrderError, Result};
//!
//! fn needs_title(title: Option<&str>) -> Result<&str> {
//!     title.ok_or_else(|| OrderError::missing("manageOrdersTitle"))
//! }
//!
//! assert!(needs_title(None).is_err());
//! ```

use thiserror::Error;

use crate::orders::Order;

/// Result type for order generation operations
pub type Result<T> = std::result::Result<T, OrderError>;

/// Main error type for order generation operations
#[derive(Debug, Error)]
pub enum OrderError {
    /// Two parameter generators claim the same order type
    #[error("Duplicate parameter generator registered for {0}")]
    DuplicateGenerator(Order),

    /// Two additional document collectors claim the same order type
    #[error("Duplicate additional documents collector registered for {0}")]
    DuplicateCollector(Order),

    /// A digitally generated order has no parameter generator
    #[error("No parameter generator registered for {0}")]
    MissingGenerator(Order),

    /// A manually uploaded order has a generation strategy registered against it
    #[error("Manually uploaded order {order} must not have a registered {strategy}")]
    UnexpectedStrategy {
        order: Order,
        strategy: &'static str,
    },

    /// The case data lacks an answer the order needs
    #[error("Missing required case data: {0}")]
    MissingField(String),

    /// The case data holds an answer the order cannot use
    #[error("Invalid case data: {0}")]
    InvalidInput(String),

    /// External lookup (court, venue) failed
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Document upload or download failed
    #[error("Document store error: {0}")]
    Store(String),

    /// Sealing an uploaded order failed
    #[error("Sealing error: {0}")]
    Sealing(String),

    /// Template engine error
    #[error("Template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrderError {
    /// Create a missing field error
    pub fn missing<S: Into<String>>(field: S) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid input error
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a lookup error
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        Self::Lookup(msg.into())
    }

    /// Whether this error comes from a strategy registration mismatch
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateGenerator(_)
                | Self::DuplicateCollector(_)
                | Self::MissingGenerator(_)
                | Self::UnexpectedStrategy { .. }
        )
    }
}
