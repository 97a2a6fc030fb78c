//! DOM side of the card animator.

use crate::core::cards::{CardTarget, annotate_cards};
use crate::core::config::PageConfig;
use gloo::console;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

struct DomCard(HtmlElement);

impl CardTarget for DomCard {
    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            console::error!("card class update failed", err);
        }
    }

    fn set_animation_delay(&self, value: &str) {
        if let Err(err) = self.0.style().set_property("animation-delay", value) {
            console::error!("card animation delay failed", err);
        }
    }
}

/// Tag every card on the page with the loading class and its staggered delay.
pub(crate) fn animate_cards(document: &Document, config: &PageConfig) -> usize {
    let Ok(nodes) = document.query_selector_all(&config.card_selector) else {
        return 0;
    };
    let cards = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomCard);
    annotate_cards(cards, &config.loading_class, config.stagger_step)
}
