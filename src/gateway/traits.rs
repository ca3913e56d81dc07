//! Trait abstraction for the gateway client to enable mocking in tests

use super::error::GatewayError;
use crate::state::forms::FormStructure;
use async_trait::async_trait;

/// Remote operations the login screen depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// Register a user (`POST /create-user`)
    async fn create_user(&self, roll_number: &str, name: &str) -> Result<(), GatewayError>;

    /// Fetch the form for a user (`GET /get-form`).
    ///
    /// `Ok(None)` means the gateway accepted the user but sent no form.
    async fn fetch_form(&self, roll_number: &str) -> Result<Option<FormStructure>, GatewayError>;
}
