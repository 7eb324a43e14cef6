//! # Upstream API
//!
//! Wire-format records, the adapter into domain records, and the HTTP client.

pub mod adapter;
mod client;
pub mod dto;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
