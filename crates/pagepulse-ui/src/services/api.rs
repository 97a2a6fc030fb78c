//! HTTP client for the health endpoint.

use crate::core::health::{HealthCheckError, HealthReport};
use gloo_net::http::Request;

/// Client issuing the page's health probe.
#[derive(Clone, Debug)]
pub struct HealthClient {
    /// Path requested, resolved against the page origin.
    pub path: String,
}

impl HealthClient {
    /// Build a client for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// GET the health endpoint and decode its JSON body.
    ///
    /// The HTTP status is not inspected; the body alone decides the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`HealthCheckError::Transport`] when the request or body read
    /// fails and [`HealthCheckError::Decode`] when the body is not JSON.
    pub async fn fetch_health(&self) -> Result<HealthReport, HealthCheckError> {
        let response = Request::get(&self.path)
            .send()
            .await
            .map_err(|err| HealthCheckError::Transport(err.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|err| HealthCheckError::Transport(err.to_string()))?;
        HealthReport::from_body(&body)
    }
}
