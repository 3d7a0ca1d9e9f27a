//! Cross-cutting pieces shared by every layer: errors, configuration and
//! formatting helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{ConfigError, EngineConfig};
pub use error::{OrderError, Result};
