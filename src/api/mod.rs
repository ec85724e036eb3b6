//! Typed access to the queue backend.

pub mod client;
pub mod counters;
pub mod error;
pub mod roles;
pub mod users;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
