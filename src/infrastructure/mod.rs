//! Infrastructure layer - concrete implementations of domain ports

pub mod lookups;
pub mod rendering;
pub mod storage;

pub use lookups::*;
pub use rendering::*;
pub use storage::*;
