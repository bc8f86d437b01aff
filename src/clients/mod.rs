//! Typed clients wrapping the generic resource handles.

mod user_client;

pub use user_client::UserClient;
