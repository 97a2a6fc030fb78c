use crate::core::store::ToastStore;
use crate::models::{Toast, ToastId};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub on_dismiss: Callback<ToastId>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let current = use_selector(|store: &ToastStore| store.current().cloned());

    match (*current).clone() {
        Some(toast) => render_toast(&toast, props.on_dismiss.clone()),
        None => html! {},
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<ToastId>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));

    html! {
        <div
            key={id.to_string()}
            class={toast.severity.banner_class()}
            style={toast.inline_style()}
            role="alert"
        >
            {toast.message.clone()}
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
