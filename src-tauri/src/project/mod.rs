//! Projects and their power lines.
//!
//! - **Store**: `ProjectStore` trait with a SQLite implementation
//! - **Service**: request/response operations that take the store explicitly

pub mod service;
mod store;
mod types;

pub use store::{ProjectStore, SqliteProjectStore, StoreError};
pub use types::*;
