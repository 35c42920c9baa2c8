//! Sign Up Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthState;
use crate::components::{Notice, PageTitle, TextInput};
use crate::form::sign_up_form;
use crate::models::SignUpData;
use crate::routes::{navigate, Route};

#[component]
pub fn SignUpPage(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let form = RwSignal::new(sign_up_form());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Members have nothing to do here
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
        let data = form.with_untracked(SignUpData::from_form);
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match api::sign_up(&data).await {
                Ok(user) => {
                    log::info!("[SignUp] created account {}", user.username);
                    form.try_update(|f| f.reset());
                    navigate(Route::SignIn);
                }
                Err(e) => {
                    log::warn!("[SignUp] rejected: {}", e);
                    error.try_set(Some(e.user_message()));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <main class="main">
            <div class="container">
                <PageTitle title="Sign up" />
                <Notice message=error />
                <form class="form" on:submit=on_submit>
                    <TextInput label="Name" name="first_name" form=form />
                    <TextInput label="Surname" name="last_name" form=form />
                    <TextInput label="Username" name="username" form=form />
                    <TextInput label="Email" name="email" input_type="email" form=form />
                    <TextInput label="Password" name="password" input_type="password" form=form />
                    <button
                        class="button button_style_dark-blue"
                        type="submit"
                        disabled=move || submitting.get() || !form.with(|f| f.is_valid())
                    >
                        "Add me"
                    </button>
                </form>
            </div>
        </main>
    }
}
