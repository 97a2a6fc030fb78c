//! Health trigger binding.
//!
//! # Design
//! - One listener on the health anchor; it never navigates.
//! - Every click issues its own request; whichever resolves last owns the region.

use super::region::PageNotifier;
use crate::core::config::PageConfig;
use crate::core::health::{Diagnostics, HealthOutcome, report_outcome, trigger_listener_options};
use crate::services::api::HealthClient;
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// Diagnostics written to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn record(&self, context: &str, detail: &str) {
        console::error!(context, detail);
    }
}

/// Attach the health check to the trigger anchor, when the page has one.
pub(crate) fn bind_health_trigger(
    document: &Document,
    notifier: &PageNotifier,
    config: &PageConfig,
) -> bool {
    let Ok(Some(trigger)) = document.query_selector(&config.trigger_selector()) else {
        return false;
    };
    let client = HealthClient::new(config.health_path.clone());
    let notifier = notifier.clone();
    EventListener::new_with_options(
        &trigger,
        "click",
        trigger_listener_options(),
        move |event| {
            event.prevent_default();
            let client = client.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                check_health(&client, &notifier).await;
            });
        },
    )
    .forget();
    true
}

async fn check_health(client: &HealthClient, notifier: &PageNotifier) {
    let outcome = HealthOutcome::from_result(client.fetch_health().await);
    report_outcome(&outcome, notifier, &ConsoleDiagnostics);
}
