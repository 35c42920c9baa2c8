//! Purchase List Component
//!
//! Recipes in the shopping cart, each with a remove button.

use leptos::prelude::*;

use crate::models::Recipe;

#[component]
pub fn PurchaseList(
    #[prop(into)] orders: Signal<Vec<Recipe>>,
    on_remove: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="purchase-list">
            <For
                each=move || orders.get()
                key=|recipe| recipe.id
                children=move |recipe| {
                    let id = recipe.id;
                    let name = recipe.name.clone();
                    view! {
                        <li class="purchase">
                            {recipe.image.clone().map(|src| view! {
                                <img class="purchase__image" src=src alt=name.clone() />
                            })}
                            <div class="purchase__content">
                                <h3 class="purchase__title">{recipe.name.clone()}</h3>
                                <p class="purchase__time">{format!("{} min.", recipe.cooking_time)}</p>
                            </div>
                            <button class="purchase__delete" on:click=move |_| on_remove.run(id)>
                                "Remove"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || orders.with(|o| o.is_empty())>
            <p class="purchase-list__empty">"Your shopping list is empty."</p>
        </Show>
    }
}
