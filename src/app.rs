//! Foodgram Frontend App
//!
//! Owns the session and the route, and swaps page containers.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::auth::AuthState;
use crate::components::{Footer, Header};
use crate::pages::{
    CartPage, ChangePasswordPage, NotFoundPage, RecipesPage, SignInPage, SignUpPage, SubscriptionsPage,
};
use crate::routes::{self, navigate, Route};
use crate::store::{store_set_orders, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);
    let auth = RwSignal::new(AuthState::guest());
    let session: Signal<AuthState> = auth.into();

    // Follow the location hash
    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        let route = routes::current();
        log::debug!("[App] route -> {:?}", route);
        *store.route().write() = route;
    });

    // Guests are sent to sign in from member-only pages
    Effect::new(move |_| {
        let route = store.route().get();
        if route.requires_auth() && !auth.with(|a| a.is_authenticated()) {
            navigate(Route::SignIn);
        }
    });

    let on_sign_in = Callback::new(move |new_session: AuthState| {
        auth.set(new_session.clone());
        spawn_local(async move {
            match api::cart_count(&new_session).await {
                Ok(count) => store_set_orders(&store, count),
                Err(e) => log::warn!("[App] could not load cart size: {}", e),
            }
        });
        navigate(Route::Recipes);
    });

    let on_sign_out = Callback::new(move |_: ()| {
        let old_session = auth.get_untracked();
        auth.set(AuthState::guest());
        store_set_orders(&store, 0);
        spawn_local(async move {
            if let Err(e) = api::sign_out(&old_session).await {
                log::warn!("[App] sign out request failed: {}", e);
            }
        });
        navigate(Route::SignIn);
    });

    let page = move || match store.route().get() {
        Route::Recipes => view! { <RecipesPage auth=session favorites_only=false /> }.into_any(),
        Route::Favorites => view! { <RecipesPage auth=session favorites_only=true /> }.into_any(),
        Route::Cart => view! { <CartPage auth=session /> }.into_any(),
        Route::Subscriptions => view! { <SubscriptionsPage auth=session /> }.into_any(),
        Route::ChangePassword => view! { <ChangePasswordPage auth=session /> }.into_any(),
        Route::SignUp => view! { <SignUpPage auth=session /> }.into_any(),
        Route::SignIn => view! { <SignInPage auth=session on_sign_in=on_sign_in /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="app">
            <Header auth=session on_sign_out=on_sign_out />
            {page}
            <Footer />
        </div>
    }
}
