//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod product_system;
pub mod telemetry;

pub use error::*;
pub use product_system::*;
pub use telemetry::*;
