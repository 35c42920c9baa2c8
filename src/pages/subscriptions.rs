//! Subscriptions Page
//!
//! Paged list of followed authors.

use leptos::prelude::*;

use crate::api::{self, SubscriptionQuery};
use crate::auth::AuthState;
use crate::components::{Notice, PageTitle, Pagination, SubscriptionList};
use crate::config::PAGE_LIMIT;
use crate::list_state::PagedList;
use crate::models::Subscription;

#[component]
pub fn SubscriptionsPage(
    #[prop(into)] auth: Signal<AuthState>,
    #[prop(default = 1)] initial_page: u32,
) -> impl IntoView {
    let subscriptions = PagedList::<Subscription>::with_page(initial_page);
    let error = RwSignal::new(None::<String>);

    // One request per cursor value; older responses are dropped by the list
    subscriptions.watch(
        move |page| {
            let session = auth.get();
            session
                .is_authenticated()
                .then(move || async move { api::get_subscriptions(&session, &SubscriptionQuery::page(page)).await })
        },
        error,
    );

    let on_unsubscribe = Callback::new(move |id: u32| {
        let session = auth.get_untracked();
        log::info!("[Subscriptions] unsubscribing from {}", id);
        subscriptions.remove(id, async move { api::unsubscribe(&session, id).await }, move |result| match result {
            Ok(()) => {
                // an emptied page falls back to the previous one
                let page = subscriptions.page_untracked();
                if subscriptions.len_untracked() == 0 && page > 1 {
                    subscriptions.set_page(page - 1);
                }
            }
            Err(e) => {
                error.try_set(Some(format!("Could not unsubscribe: {}", e.user_message())));
            }
        });
    });

    view! {
        <main class="main">
            <div class="container">
                <PageTitle title="My subscriptions" />
                <Notice message=error />
                <SubscriptionList
                    subscriptions=Signal::derive(move || subscriptions.items())
                    on_unsubscribe=on_unsubscribe
                />
                <Pagination
                    count=Signal::derive(move || subscriptions.count())
                    limit=PAGE_LIMIT
                    page=Signal::derive(move || subscriptions.page())
                    on_page_change=Callback::new(move |page: u32| subscriptions.set_page(page))
                />
            </div>
        </main>
    }
}
