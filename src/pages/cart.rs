//! Shopping Cart Page
//!
//! Lists every recipe in the cart and exports the shopping list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RecipeQuery};
use crate::auth::AuthState;
use crate::components::{Notice, PageTitle, PurchaseList};
use crate::list_state::PagedList;
use crate::models::Recipe;
use crate::store::{store_set_orders, use_app_store, AppStateStoreFields};

#[component]
pub fn CartPage(#[prop(into)] auth: Signal<AuthState>) -> impl IntoView {
    let store = use_app_store();
    let recipes = PagedList::<Recipe>::new();
    let error = RwSignal::new(None::<String>);
    let downloading = RwSignal::new(false);

    // Load on mount (and again if the session changes)
    recipes.watch(
        move |_| {
            let session = auth.get();
            session
                .is_authenticated()
                .then(move || async move { api::get_recipes(&session, &RecipeQuery::cart()).await })
        },
        error,
    );

    // The header badge follows the list once it has loaded
    Effect::new(move |_| {
        if recipes.is_loaded() {
            store_set_orders(&store, recipes.count());
        }
    });

    let on_remove = Callback::new(move |id: u32| {
        let session = auth.get_untracked();
        log::info!("[Cart] removing recipe {}", id);
        recipes.remove(id, async move { api::remove_from_cart(&session, id).await }, move |result| {
            if let Err(e) = result {
                error.try_set(Some(format!("Could not remove the recipe: {}", e.user_message())));
            }
        });
    });

    let download = move |_| {
        let session = auth.get_untracked();
        downloading.set(true);
        spawn_local(async move {
            if let Err(e) = api::download_file(&session).await {
                log::error!("[Cart] download failed: {}", e);
                error.try_set(Some(format!("Download failed: {}", e.user_message())));
            }
            downloading.try_set(false);
        });
    };

    view! {
        <main class="main">
            <div class="container cart">
                <PageTitle title="Shopping list" />
                <Notice message=error />
                <Show when=move || recipes.is_loading() && !recipes.is_loaded()>
                    <p class="loading">"Loading..."</p>
                </Show>
                <PurchaseList orders=Signal::derive(move || recipes.items()) on_remove=on_remove />
                <Show when=move || { store.orders().get() > 0 }>
                    <button
                        class="button button_style_dark-blue"
                        disabled=move || downloading.get()
                        on:click=download
                    >
                        "Download shopping list"
                    </button>
                </Show>
            </div>
        </main>
    }
}
