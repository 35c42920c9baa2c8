//! Sign In Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthState;
use crate::components::{Notice, PageTitle, TextInput};
use crate::form::sign_in_form;
use crate::models::Credentials;
use crate::routes::{navigate, Route};

/// `on_sign_in` receives the new session; the app owns where it is kept
#[component]
pub fn SignInPage(
    #[prop(into)] auth: Signal<AuthState>,
    on_sign_in: Callback<AuthState>,
) -> impl IntoView {
    let form = RwSignal::new(sign_in_form());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    Effect::new(move |_| {
        if auth.with(|a| a.is_authenticated()) {
            navigate(Route::Recipes);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || !form.with_untracked(|f| f.is_valid()) {
            return;
        }
        let credentials = form.with_untracked(Credentials::from_form);
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match api::sign_in(&credentials).await {
                Ok(session) => {
                    log::info!("[SignIn] signed in as {}", credentials.email);
                    on_sign_in.run(session);
                }
                Err(e) => {
                    log::warn!("[SignIn] rejected: {}", e);
                    error.try_set(Some(e.user_message()));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <main class="main">
            <div class="container">
                <PageTitle title="Sign in" />
                <Notice message=error />
                <form class="form" on:submit=on_submit>
                    <TextInput label="Email" name="email" input_type="email" form=form />
                    <TextInput label="Password" name="password" input_type="password" form=form />
                    <button
                        class="button button_style_dark-blue"
                        type="submit"
                        disabled=move || submitting.get() || !form.with(|f| f.is_valid())
                    >
                        "Sign in"
                    </button>
                </form>
            </div>
        </main>
    }
}
