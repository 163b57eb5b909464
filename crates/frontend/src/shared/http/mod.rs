//! Thin HTTP layer: bearer-token wrappers over a swappable transport.

pub mod client;
pub mod error;
#[cfg(test)]
pub mod mock;
pub mod transport;

pub use client::ApiClient;
pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, GlooTransport, HttpTransport, Method};
