use crate::components::toast::{ToastHost, ToastHostProps};
use crate::core::config::PageConfig;
use anyhow::anyhow;
use gloo::console;
use gloo::events::EventListener;
use region::{GlooScheduler, PageNotifier, StoreSurface};
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentReadyState};
use yew::Callback;

mod cards;
mod health;
mod region;
mod styles;

const HOST_ID: &str = "pagepulse-notifications";

/// Boot the page script: styles now, page hooks once the document is ready.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = gloo::utils::document();
    if let Err(err) = styles::install_keyframes(&document) {
        console::error!("notification styles unavailable", err.to_string());
    }
    on_page_ready(&document, |document| {
        if let Err(err) = page_ready(&document) {
            console::error!("page hooks failed", err.to_string());
        }
    });
}

fn on_page_ready(document: &Document, hook: impl FnOnce(Document) + 'static) {
    if document.ready_state() != DocumentReadyState::Loading {
        hook(document.clone());
        return;
    }
    let target = document.clone();
    EventListener::once(document, "DOMContentLoaded", move |_event| hook(target)).forget();
}

fn page_ready(document: &Document) -> anyhow::Result<()> {
    let config = load_config(document);
    cards::animate_cards(document, &config);
    let notifier = mount_notifier(document, &config)?;
    health::bind_health_trigger(document, &notifier, &config);
    welcome_banner();
    Ok(())
}

fn load_config(document: &Document) -> PageConfig {
    let Some(body) = document.body() else {
        return PageConfig::default();
    };
    let dataset = body.dataset();
    PageConfig::from_lookup(|key| dataset.get(key))
}

fn mount_notifier(document: &Document, config: &PageConfig) -> anyhow::Result<PageNotifier> {
    let body = document
        .body()
        .ok_or_else(|| anyhow!("document has no <body>"))?;
    let host = document.create_element("div").map_err(js_error)?;
    host.set_id(HOST_ID);
    body.append_child(&host).map_err(js_error)?;

    let notifier = PageNotifier::new(StoreSurface::new(), GlooScheduler, config.timing);
    let on_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |id| notifier.close(id))
    };
    yew::Renderer::<ToastHost>::with_root_and_props(host, ToastHostProps { on_dismiss }).render();
    Ok(notifier)
}

fn welcome_banner() {
    console::log!(
        "%c🚀 FastAPI Static Website",
        "color: #007bff; font-size: 16px; font-weight: bold;"
    );
    console::log!(
        "%cBuilt for CI/CD practice with Jenkins and Docker",
        "color: #6c757d; font-size: 12px;"
    );
}

pub(crate) fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!("{err:?}")
}
