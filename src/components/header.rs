//! Header Component
//!
//! Brand, navigation links and the session controls.

use leptos::prelude::*;

use crate::auth::AuthState;
use crate::navigation::visible_links;
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header(
    #[prop(into)] auth: Signal<AuthState>,
    on_sign_out: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let authenticated = move || auth.with(|a| a.is_authenticated());

    view! {
        <header class="header">
            <div class="container header__container">
                <a class="header__brand" href=Route::Recipes.href()>"Foodgram"</a>
                <nav class="nav">
                    {move || visible_links(authenticated()).into_iter().map(|link| {
                        let active = move || store.route().get() == link.route;
                        view! {
                            <a
                                class=move || if active() { "nav__link nav__link_active" } else { "nav__link" }
                                href=link.route.href()
                            >
                                {link.title}
                                <Show when=move || { link.route == Route::Cart && store.orders().get() > 0 }>
                                    <span class="nav__badge">{move || store.orders().get()}</span>
                                </Show>
                            </a>
                        }
                    }).collect_view()}
                </nav>
                <div class="account">
                    <Show
                        when=authenticated
                        fallback=|| view! {
                            <a class="account__link" href=Route::SignIn.href()>"Sign in"</a>
                            <a class="button button_style_dark-blue" href=Route::SignUp.href()>"Create account"</a>
                        }
                    >
                        <span class="account__name">
                            {move || auth.with(|a| a.user().map(|u| u.display_name()).unwrap_or_default())}
                        </span>
                        <a class="account__link" href=Route::ChangePassword.href()>"Change password"</a>
                        <button class="account__link" on:click=move |_| on_sign_out.run(())>"Sign out"</button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
