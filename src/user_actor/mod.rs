//! User-specific domain logic: creation rules, renames and hour tracking.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
