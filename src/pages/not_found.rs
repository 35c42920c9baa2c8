use leptos::prelude::*;

use crate::components::PageTitle;
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="main">
            <div class="container">
                <PageTitle title="Page not found" />
                <a class="button button_style_dark-blue" href=Route::Recipes.href()>"Back to recipes"</a>
            </div>
        </main>
    }
}
