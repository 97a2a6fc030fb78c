//! Health check outcome classification and reporting.
//!
//! # Design
//! - Transport stays in the browser service; body decoding and
//!   classification live here so every branch is testable without a network.
//! - The trigger listener is registered non-passive so its click handler can
//!   cancel the anchor's navigation.
//! - Failures end here: one danger notification plus one diagnostic entry.

use crate::core::notify::{Notifier, ToastSurface};
use crate::core::schedule::Scheduler;
use crate::models::{Severity, ToastId};
use gloo::events::EventListenerOptions;
use serde_json::Value;
use thiserror::Error;

/// Status value reported by a live application.
pub const HEALTHY_STATUS: &str = "healthy";

/// Notification text for a healthy application.
pub const HEALTHY_MESSAGE: &str = "✅ Application is healthy!";
/// Notification text for any other status.
pub const UNKNOWN_MESSAGE: &str = "⚠️ Application status unknown";
/// Notification text for a failed request.
pub const FAILED_MESSAGE: &str = "❌ Health check failed";
/// Prefix written with the diagnostic detail of a failed request.
pub const DIAGNOSTIC_CONTEXT: &str = "Health check error:";

/// Failure modes of the health request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthCheckError {
    /// The request never produced a response (network error, rejected promise).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body was not JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Decoded health response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    /// `status` member when the body is an object carrying a string status.
    pub status: Option<String>,
}

impl HealthReport {
    /// Decode a raw response body, whatever the HTTP status of the response.
    ///
    /// # Errors
    ///
    /// Returns [`HealthCheckError::Decode`] when `body` is not JSON.
    pub fn from_body(body: &str) -> Result<Self, HealthCheckError> {
        let value = serde_json::from_str::<Value>(body)
            .map_err(|err| HealthCheckError::Decode(err.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Extract the status from any JSON body; other shapes yield no status.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            status: value
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Interpretation of a completed health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthOutcome {
    /// The application reported `healthy`.
    Healthy,
    /// The body was readable but did not report `healthy`.
    Unrecognized {
        /// Reported status, when one was present.
        status: Option<String>,
    },
    /// The request or decoding failed.
    Failed(HealthCheckError),
}

impl HealthOutcome {
    /// Classify the result of a health request.
    #[must_use]
    pub fn from_result(result: Result<HealthReport, HealthCheckError>) -> Self {
        match result {
            Ok(report) if report.status.as_deref() == Some(HEALTHY_STATUS) => Self::Healthy,
            Ok(report) => Self::Unrecognized {
                status: report.status,
            },
            Err(err) => Self::Failed(err),
        }
    }

    /// Notification severity for this outcome.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Healthy => Severity::Success,
            Self::Unrecognized { .. } => Severity::Warning,
            Self::Failed(_) => Severity::Danger,
        }
    }

    /// Notification text for this outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Healthy => HEALTHY_MESSAGE,
            Self::Unrecognized { .. } => UNKNOWN_MESSAGE,
            Self::Failed(_) => FAILED_MESSAGE,
        }
    }
}

/// Listener options for the health trigger; `prevent_default` only works on non-passive listeners.
#[must_use]
pub fn trigger_listener_options() -> EventListenerOptions {
    EventListenerOptions::enable_prevent_default()
}

/// Error log receiving health check diagnostics.
pub trait Diagnostics {
    /// Record `detail` under `context`.
    fn record(&self, context: &str, detail: &str);
}

/// Surface `outcome` to the user, logging failures.
pub fn report_outcome<S, C, D>(
    outcome: &HealthOutcome,
    notifier: &Notifier<S, C>,
    diagnostics: &D,
) -> ToastId
where
    S: ToastSurface + 'static,
    C: Scheduler + 'static,
    C::Handle: 'static,
    D: Diagnostics + ?Sized,
{
    if let HealthOutcome::Failed(err) = outcome {
        diagnostics.record(DIAGNOSTIC_CONTEXT, &err.to_string());
    }
    notifier.show(outcome.message(), outcome.severity())
}
