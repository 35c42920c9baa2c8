//! Recipe Card Component

use leptos::prelude::*;

use crate::models::Recipe;

/// One recipe in the feed. Cart/favourite buttons only show for members.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    authenticated: bool,
    on_toggle_cart: Callback<u32>,
    on_toggle_favorite: Callback<u32>,
    on_follow: Callback<u32>,
) -> impl IntoView {
    let id = recipe.id;
    let author_id = recipe.author.id;
    let following = recipe.author.is_subscribed;
    let cart_label = if recipe.is_in_shopping_cart { "In shopping list" } else { "Add to shopping list" };
    let favorite_class = if recipe.is_favorited { "card__favorite card__favorite_active" } else { "card__favorite" };

    view! {
        <article class="card">
            {recipe.image.clone().map(|src| view! { <img class="card__image" src=src alt=recipe.name.clone() /> })}
            <div class="card__body">
                <h3 class="card__title">{recipe.name.clone()}</h3>
                <ul class="card__tags">
                    {recipe.tags.iter().map(|tag| view! {
                        <li class="card__tag" style=format!("color: {}", tag.color)>{tag.name.clone()}</li>
                    }).collect_view()}
                </ul>
                <p class="card__time">{format!("{} min.", recipe.cooking_time)}</p>
                <p class="card__author">
                    {recipe.author.display_name()}
                    <Show when=move || authenticated && !following>
                        <button class="card__follow" on:click=move |_| on_follow.run(author_id)>"Follow"</button>
                    </Show>
                </p>
            </div>
            <Show when=move || authenticated>
                <div class="card__footer">
                    <button class="button button_style_light-blue" on:click=move |_| on_toggle_cart.run(id)>
                        {cart_label}
                    </button>
                    <button class=favorite_class title="Favourite" on:click=move |_| on_toggle_favorite.run(id)>
                        "★"
                    </button>
                </div>
            </Show>
        </article>
    }
}
