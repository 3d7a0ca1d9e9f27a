//! Application layer - the order creation use case and the ports it drives

pub mod order_creation;
pub mod traits;
pub mod uploaded_order;

pub use order_creation::*;
pub use traits::*;
pub use uploaded_order::*;
