use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__container">
                <a class="footer__brand" href=Route::Recipes.href()>"Foodgram"</a>
            </div>
        </footer>
    }
}
