//! Gateway failure taxonomy

use crate::state::GatewayOp;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway answered with a non-2xx status
    #[error("gateway rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body could not be read
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Text for the user-facing alert.
    ///
    /// Rejections show the server's message when it sent one; everything
    /// else falls back to a fixed per-operation text.
    pub fn alert_text(&self, op: GatewayOp) -> String {
        match self {
            GatewayError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            GatewayError::Rejected { .. } => match op {
                GatewayOp::Register => "Registration failed.".to_string(),
                GatewayOp::Login => "Login failed.".to_string(),
            },
            _ => match op {
                GatewayOp::Register => "Registration error".to_string(),
                GatewayOp::Login => "Login error".to_string(),
            },
        }
    }
}
