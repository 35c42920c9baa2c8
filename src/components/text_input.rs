//! Text Input Component
//!
//! Labelled input bound to one field of a [`FormState`].

use leptos::prelude::*;

use crate::form::FormState;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    name: &'static str,
    form: RwSignal<FormState>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(name).map(str::to_string));

    view! {
        <label class="input">
            <span class="input__label">{label}</span>
            <input
                class="input__field"
                type=input_type
                name=name
                required=true
                prop:value=move || form.with(|f| f.value(name).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.handle_change(name, value));
                }
            />
            {move || error().map(|text| view! { <span class="input__error">{text}</span> })}
        </label>
    }
}
