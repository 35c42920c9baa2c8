//! Change Password Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth::AuthState;
use crate::components::{flash, Notice, PageTitle, TextInput};
use crate::form::change_password_form;
use crate::models::PasswordChange;

#[component]
pub fn ChangePasswordPage(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let form = RwSignal::new(change_password_form());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() || !form.with_untracked(|f| f.is_valid()) {
            return;
        }
        let data = form.with_untracked(PasswordChange::from_form);
        let session = auth.get_untracked();
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match api::change_password(&session, &data).await {
                Ok(()) => {
                    log::info!("[ChangePassword] password updated");
                    form.try_update(|f| f.reset());
                    flash(success, "Password changed.");
                }
                Err(e) => {
                    log::warn!("[ChangePassword] rejected: {}", e);
                    error.try_set(Some(e.user_message()));
                }
            }
            submitting.try_set(false);
        });
    };

    view! {
        <main class="main">
            <div class="container">
                <PageTitle title="Change password" />
                <Notice message=error />
                <Notice message=success modifier="notice_success" />
                <form class="form" on:submit=on_submit>
                    <TextInput label="Current password" name="current_password" input_type="password" form=form />
                    <TextInput label="New password" name="new_password" input_type="password" form=form />
                    <TextInput label="Retype" name="repeat_password" input_type="password" form=form />
                    <button
                        class="button button_style_dark-blue"
                        type="submit"
                        disabled=move || submitting.get() || !form.with(|f| f.is_valid())
                    >
                        "OK"
                    </button>
                </form>
            </div>
        </main>
    }
}
