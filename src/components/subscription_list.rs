//! Subscription List Component
//!
//! Followed authors with a preview of their latest recipes.

use leptos::prelude::*;

use crate::models::Subscription;

#[component]
pub fn SubscriptionList(
    #[prop(into)] subscriptions: Signal<Vec<Subscription>>,
    on_unsubscribe: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="subscriptions">
            <For
                each=move || subscriptions.get()
                key=|sub| sub.user.id
                children=move |sub| {
                    let id = sub.user.id;
                    let hidden = sub.recipes_count.saturating_sub(sub.recipes.len() as u32);
                    view! {
                        <article class="subscription">
                            <h2 class="subscription__author">{sub.user.display_name()}</h2>
                            <ul class="subscription__recipes">
                                {sub.recipes.iter().map(|recipe| view! {
                                    <li class="subscription__recipe">
                                        <span class="subscription__recipe-name">{recipe.name.clone()}</span>
                                        <span class="subscription__recipe-time">{format!("{} min.", recipe.cooking_time)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                            <Show when=move || { hidden > 0 }>
                                <p class="subscription__more">{format!("{} more recipes...", hidden)}</p>
                            </Show>
                            <button class="button button_style_light-blue" on:click=move |_| on_unsubscribe.run(id)>
                                "Unsubscribe"
                            </button>
                        </article>
                    }
                }
            />
            <Show when=move || subscriptions.with(|s| s.is_empty())>
                <p class="subscriptions__empty">"You are not following anyone yet."</p>
            </Show>
        </div>
    }
}
