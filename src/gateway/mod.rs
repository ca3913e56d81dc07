//! Gateway module for the form service's HTTP API

mod client;
mod error;
mod traits;

pub use client::{GatewayClient, DEFAULT_GATEWAY_URL};
pub use error::GatewayError;
pub use traits::GatewayApi;

#[cfg(test)]
pub use traits::MockGatewayApi;
