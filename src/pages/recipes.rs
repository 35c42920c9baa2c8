//! Recipe Feed Page
//!
//! Paged recipe list; doubles as the favourites page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RecipeQuery};
use crate::auth::AuthState;
use crate::components::{Notice, PageTitle, Pagination, RecipeCard};
use crate::config::PAGE_LIMIT;
use crate::list_state::PagedList;
use crate::models::Recipe;
use crate::store::{store_decrement_orders, store_increment_orders, use_app_store};

#[component]
pub fn RecipesPage(
    #[prop(into)] auth: Signal<AuthState>,
    favorites_only: bool,
) -> impl IntoView {
    let store = use_app_store();
    let recipes = PagedList::<Recipe>::new();
    let error = RwSignal::new(None::<String>);

    recipes.watch(
        move |page| {
            let session = auth.get();
            if favorites_only && !session.is_authenticated() {
                return None;
            }
            let query = if favorites_only { RecipeQuery::favorites(page) } else { RecipeQuery::page(page) };
            Some(async move { api::get_recipes(&session, &query).await })
        },
        error,
    );

    let on_toggle_cart = Callback::new(move |id: u32| {
        let Some(recipe) = recipes.find(id) else {
            return;
        };
        let session = auth.get_untracked();
        let adding = !recipe.is_in_shopping_cart;
        recipes.update_item(id, |r| r.is_in_shopping_cart = adding);
        if adding { store_increment_orders(&store) } else { store_decrement_orders(&store) }

        spawn_local(async move {
            let result = if adding {
                api::add_to_cart(&session, id).await
            } else {
                api::remove_from_cart(&session, id).await
            };
            if let Err(e) = result {
                log::warn!("[Recipes] cart toggle for {} failed, reverting: {}", id, e);
                recipes.update_item(id, |r| r.is_in_shopping_cart = !adding);
                if adding { store_decrement_orders(&store) } else { store_increment_orders(&store) }
                error.try_set(Some(e.user_message()));
            }
        });
    });

    let on_toggle_favorite = Callback::new(move |id: u32| {
        let Some(recipe) = recipes.find(id) else {
            return;
        };
        let session = auth.get_untracked();
        let adding = !recipe.is_favorited;

        // unfavouriting on the favourites page drops the card outright
        if favorites_only && !adding {
            recipes.remove(id, async move { api::remove_from_favorites(&session, id).await }, move |result| {
                if let Err(e) = result {
                    error.try_set(Some(e.user_message()));
                }
            });
            return;
        }

        recipes.update_item(id, |r| r.is_favorited = adding);
        spawn_local(async move {
            let result = if adding {
                api::add_to_favorites(&session, id).await
            } else {
                api::remove_from_favorites(&session, id).await
            };
            if let Err(e) = result {
                log::warn!("[Recipes] favourite toggle for {} failed, reverting: {}", id, e);
                recipes.update_item(id, |r| r.is_favorited = !adding);
                error.try_set(Some(e.user_message()));
            }
        });
    });

    let on_follow = Callback::new(move |author_id: u32| {
        let session = auth.get_untracked();
        if session.user().is_some_and(|me| me.id == author_id) {
            return;
        }
        let mark = move |following: bool| {
            recipes.update_all(|r| {
                if r.author.id == author_id {
                    r.author.is_subscribed = following;
                }
            })
        };
        mark(true);
        spawn_local(async move {
            if let Err(e) = api::subscribe(&session, author_id).await {
                log::warn!("[Recipes] subscribing to {} failed: {}", author_id, e);
                mark(false);
                error.try_set(Some(e.user_message()));
            }
        });
    });

    let title = if favorites_only { "Favourites" } else { "Recipes" };

    view! {
        <main class="main">
            <div class="container">
                <PageTitle title=title />
                <Notice message=error />
                <div class="card-list">
                    <For
                        each=move || recipes.items()
                        key=|recipe| (recipe.id, recipe.is_in_shopping_cart, recipe.is_favorited, recipe.author.is_subscribed)
                        children=move |recipe| view! {
                            <RecipeCard
                                recipe=recipe
                                authenticated=auth.with_untracked(|a| a.is_authenticated())
                                on_toggle_cart=on_toggle_cart
                                on_toggle_favorite=on_toggle_favorite
                                on_follow=on_follow
                            />
                        }
                    />
                </div>
                <Show when=move || recipes.is_loaded() && recipes.len() == 0>
                    <p class="card-list__empty">"Nothing here yet."</p>
                </Show>
                <Pagination
                    count=Signal::derive(move || recipes.count())
                    limit=PAGE_LIMIT
                    page=Signal::derive(move || recipes.page())
                    on_page_change=Callback::new(move |page: u32| recipes.set_page(page))
                />
            </div>
        </main>
    }
}
