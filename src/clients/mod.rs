//! Type-safe wrappers around the store and navigator channels.

pub mod catalog_client;
pub mod navigator_client;

pub use catalog_client::*;
pub use navigator_client::*;
