//! Notice Banner Component
//!
//! Inline banner for request failures and confirmations.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::FLASH_TIMEOUT_MS;

#[component]
pub fn Notice(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(default = "notice_error")] modifier: &'static str,
) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class=format!("notice {}", modifier) role="status">{text}</div>
        })}
    }
}

/// Show `text` in `target` for a few seconds
pub fn flash(target: RwSignal<Option<String>>, text: impl Into<String>) {
    let text = text.into();
    target.set(Some(text.clone()));
    spawn_local(async move {
        TimeoutFuture::new(FLASH_TIMEOUT_MS).await;
        // a newer message owns the banner now
        if target.try_get_untracked().flatten().as_deref() == Some(text.as_str()) {
            target.try_set(None);
        }
    });
}
