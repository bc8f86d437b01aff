//! System orchestration, startup, and shutdown logic.

pub mod user_system;
pub mod telemetry;

pub use user_system::*;
pub use telemetry::*;
