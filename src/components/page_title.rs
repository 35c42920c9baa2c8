//! Page Title Component
//!
//! Page heading that also names the browser tab.

use leptos::prelude::*;

#[component]
pub fn PageTitle(#[prop(into)] title: String) -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} | Foodgram", title));
    }

    view! { <h1 class="title">{title}</h1> }
}
