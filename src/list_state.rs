//! Paged List State
//!
//! Holds one page of a server collection plus its total count, guarded by
//! a request generation so only the latest fetch is ever applied.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::ApiError;
use crate::models::{Identified, Page};

/// Handle for exactly one fetch. Only the most recently issued ticket may
/// write into the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What an optimistic removal took out, for putting it back
#[derive(Debug, Clone, PartialEq)]
pub struct Removal<T> {
    generation: u64,
    item: T,
    decremented: bool,
}

impl<T> Removal<T> {
    pub fn item(&self) -> &T {
        &self.item
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    /// Ids in the order the server returned them
    order: Vec<u32>,
    count: u32,
    page: u32,
    generation: u64,
    loading: bool,
    loaded: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            order: Vec::new(),
            count: 0,
            page: 1,
            generation: 0,
            loading: false,
            loaded: false,
        }
    }
}

impl<T: Identified + Clone> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// At least one fetch has been applied
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Move the cursor. Page numbers are 1-based; 0 is treated as 1.
    /// Returns false when the cursor was already there.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Start a fetch for `page`, superseding any fetch still in flight
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.set_page(page);
        self.generation += 1;
        self.loading = true;
        FetchTicket { generation: self.generation, page: self.page }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace items and count together. Stale tickets are ignored.
    pub fn apply(&mut self, ticket: FetchTicket, page: Page<T>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.set_items(page.results);
        self.count = page.count;
        self.loading = false;
        self.loaded = true;
        true
    }

    /// A failed fetch keeps the previous items. Returns whether the
    /// failure belongs to the latest request.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.order = items.iter().map(|item| item.id()).collect();
        self.items = items;
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    pub fn push(&mut self, item: T) {
        self.order.push(item.id());
        self.items.push(item);
        self.count += 1;
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Mutate the item with `id` in place. Returns false when absent.
    pub fn update_item(&mut self, id: u32, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    /// Take the item out ahead of server confirmation
    pub fn remove_optimistic(&mut self, id: u32) -> Option<Removal<T>> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(index);
        let decremented = self.count > 0;
        self.count = self.count.saturating_sub(1);
        Some(Removal { generation: self.generation, item, decremented })
    }

    /// Undo a removal the server rejected. The item goes back to its place
    /// in server order. Any fetch begun since the removal wins.
    pub fn rollback(&mut self, removal: Removal<T>) {
        let id = removal.item.id();
        if removal.generation != self.generation || self.contains(id) {
            return;
        }
        let index = match self.order.iter().position(|o| *o == id) {
            Some(rank) => self
                .items
                .iter()
                .position(|item| self.order.iter().position(|o| *o == item.id()).map_or(true, |r| r > rank))
                .unwrap_or(self.items.len()),
            None => self.items.len(),
        };
        self.items.insert(index, removal.item);
        if removal.decremented {
            self.count += 1;
        }
    }
}

/// Reactive handle over a [`ListState`], scoped to the page that creates it
pub struct PagedList<T: 'static> {
    state: RwSignal<ListState<T>>,
    page: Memo<u32>,
}

impl<T: 'static> Clone for PagedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PagedList<T> {}

impl<T> PagedList<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_page(1)
    }

    pub fn with_page(page: u32) -> Self {
        let mut initial = ListState::new();
        initial.set_page(page);
        let state = RwSignal::new(initial);
        // effects keyed on the cursor must not rerun on every item change
        let page = Memo::new(move |_| state.with(|s| s.page()));
        Self { state, page }
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn count(&self) -> u32 {
        self.state.with(|s| s.count())
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.items().len())
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.with(|s| s.is_loaded())
    }

    pub fn page_untracked(&self) -> u32 {
        self.state.try_with_untracked(|s| s.page()).unwrap_or(1)
    }

    pub fn len_untracked(&self) -> usize {
        self.state.try_with_untracked(|s| s.items().len()).unwrap_or(0)
    }

    pub fn find(&self, id: u32) -> Option<T> {
        self.state
            .try_with_untracked(|s| s.items().iter().find(|item| item.id() == id).cloned())
            .flatten()
    }

    pub fn set_page(&self, page: u32) {
        if self.state.try_with_untracked(|s| s.page() == page.max(1)).unwrap_or(true) {
            return;
        }
        self.state.try_update(|s| s.set_page(page));
    }

    pub fn update_item(&self, id: u32, f: impl FnOnce(&mut T)) {
        self.state.try_update(|s| s.update_item(id, f));
    }

    /// Apply `f` to every loaded item
    pub fn update_all(&self, f: impl Fn(&mut T)) {
        self.state.try_update(|s| s.items.iter_mut().for_each(|item| f(item)));
    }

    /// Issue one fetch for `page`. The response is applied only if no newer
    /// fetch was started meanwhile; errors go to `error`.
    pub fn load<F, Fut>(&self, page: u32, fetch: F, error: RwSignal<Option<String>>)
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
    {
        let Some(ticket) = self.state.try_update(|s| s.begin_fetch(page)) else {
            return;
        };
        let request = fetch(ticket.page());
        let state = self.state;
        spawn_local(async move {
            match request.await {
                Ok(result) => {
                    let received = result.results.len();
                    let total = result.count;
                    match state.try_update(|s| s.apply(ticket, result)) {
                        Some(true) => {
                            log::debug!("[List] page {} applied: {} of {}", ticket.page(), received, total);
                            error.try_set(None);
                        }
                        _ => log::debug!("[List] discarded stale response for page {}", ticket.page()),
                    }
                }
                Err(e) => {
                    if state.try_update(|s| s.fail(ticket)).unwrap_or(false) {
                        log::error!("[List] loading page {} failed: {}", ticket.page(), e);
                        error.try_set(Some(e.user_message()));
                    }
                }
            }
        });
    }

    /// Fetch whenever the cursor, or any signal `fetch` reads, changes.
    /// `fetch` returning `None` skips that run.
    pub fn watch<F, Fut>(&self, fetch: F, error: RwSignal<Option<String>>)
    where
        F: Fn(u32) -> Option<Fut> + 'static,
        Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
    {
        let list = *self;
        Effect::new(move |_| {
            let page = list.page();
            if let Some(request) = fetch(page) {
                list.load(page, move |_| request, error);
            }
        });
    }

    /// Remove `id` immediately and confirm with `request`; the item comes
    /// back if the server refuses. `on_result` sees the outcome either way.
    pub fn remove<Fut>(&self, id: u32, request: Fut, on_result: impl FnOnce(Result<(), ApiError>) + 'static)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Some(Some(removal)) = self.state.try_update(|s| s.remove_optimistic(id)) else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = request.await;
            if let Err(e) = &result {
                log::warn!("[List] removing {} failed, restoring: {}", id, e);
                state.try_update(|s| s.rollback(removal));
            }
            on_result(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::recipe;
    use crate::models::Recipe;

    fn page_of(ids: &[u32], count: u32) -> Page<Recipe> {
        Page {
            count,
            next: None,
            previous: None,
            results: ids.iter().map(|id| recipe(*id)).collect(),
        }
    }

    fn ids(state: &ListState<Recipe>) -> Vec<u32> {
        state.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_apply_replaces_items_and_count() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        assert!(state.is_loading());
        assert!(!state.is_loaded());
        assert!(state.apply(ticket, page_of(&[1, 2], 2)));
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.count(), 2);
        assert!(!state.is_loading());
        assert!(state.is_loaded());
    }

    #[test]
    fn test_cart_scenario_remove_first() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2], 2));

        let removal = state.remove_optimistic(1).unwrap();
        assert_eq!(removal.item().id, 1);
        assert_eq!(ids(&state), vec![2]);
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn test_remove_from_middle_keeps_order() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[5, 3, 9, 1], 4));

        state.remove_optimistic(9).unwrap();
        assert_eq!(ids(&state), vec![5, 3, 1]);
        assert_eq!(state.count(), 3);
        assert!(state.remove_optimistic(42).is_none());
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn test_rollback_restores_position_and_count() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2, 3], 3));

        let removal = state.remove_optimistic(2).unwrap();
        state.rollback(removal);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.count(), 3);
    }

    #[test]
    fn test_rollback_skips_item_already_refetched() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2], 2));

        let removal = state.remove_optimistic(1).unwrap();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2], 2));
        state.rollback(removal);
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListState::new();
        let first = state.begin_fetch(1);
        let second = state.begin_fetch(2);
        assert_eq!(second.page(), 2);

        // page 2 answers first, then the slow page 1 response arrives
        assert!(state.apply(second, page_of(&[7, 8], 14)));
        assert!(!state.apply(first, page_of(&[1, 2], 14)));
        assert_eq!(ids(&state), vec![7, 8]);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_each_page_change_issues_one_ticket() {
        let mut state: ListState<Recipe> = ListState::new();
        assert!(state.set_page(2));
        assert!(!state.set_page(2));
        let ticket = state.begin_fetch(state.page());
        assert_eq!(ticket.page(), 2);
        assert!(state.is_current(ticket));
        let next = state.begin_fetch(3);
        assert!(!state.is_current(ticket));
        assert!(state.is_current(next));
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2], 2));

        let failing = state.begin_fetch(2);
        assert!(state.fail(failing));
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.count(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_page_zero_clamps_to_one() {
        let mut state: ListState<Recipe> = ListState::new();
        assert!(!state.set_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_set_items_and_count_directly() {
        let mut state = ListState::new();
        state.set_items(vec![recipe(4), recipe(2)]);
        state.set_count(10);
        assert_eq!(ids(&state), vec![4, 2]);
        assert_eq!(state.count(), 10);
        assert!(state.contains(2));
        assert!(!state.contains(3));
    }

    #[test]
    fn test_remove_with_zero_count_rolls_back_cleanly() {
        let mut state = ListState::new();
        state.set_items(vec![recipe(1)]);
        let removal = state.remove_optimistic(1).unwrap();
        assert_eq!(state.count(), 0);
        state.rollback(removal);
        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_rollback_after_page_change_is_dropped() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2, 3, 4, 5, 6], 12));
        let removal = state.remove_optimistic(1).unwrap();

        let ticket = state.begin_fetch(2);
        state.apply(ticket, page_of(&[7, 8, 9, 10, 11, 12], 12));
        state.rollback(removal);
        assert_eq!(state.page(), 2);
        assert_eq!(ids(&state), vec![7, 8, 9, 10, 11, 12]);
        assert_eq!(state.count(), 12);
    }

    #[test]
    fn test_two_rollbacks_restore_server_order() {
        let mut state = ListState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket, page_of(&[1, 2, 3], 3));

        let first = state.remove_optimistic(1).unwrap();
        let second = state.remove_optimistic(2).unwrap();
        assert_eq!(ids(&state), vec![3]);
        state.rollback(first);
        state.rollback(second);
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.count(), 3);

        let last = state.remove_optimistic(3).unwrap();
        let middle = state.remove_optimistic(2).unwrap();
        state.rollback(last);
        state.rollback(middle);
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_item_and_push() {
        let mut state = ListState::new();
        state.push(recipe(1));
        assert_eq!(state.count(), 1);
        assert!(state.update_item(1, |r| r.is_in_shopping_cart = false));
        assert!(!state.items()[0].is_in_shopping_cart);
        assert!(!state.update_item(2, |r| r.is_favorited = true));
    }

    mod reactive {
        use std::cell::RefCell;
        use std::rc::Rc;

        use any_spawner::Executor;

        use super::*;

        fn loaded_ids(list: &PagedList<Recipe>) -> Vec<u32> {
            list.state.with_untracked(ids)
        }

        #[test]
        fn test_cursor_change_fetches_once_per_page() {
            let _ = Executor::init_futures_executor();
            let owner = Owner::new();
            owner.with(|| {
                let requested = Rc::new(RefCell::new(Vec::new()));
                let list = PagedList::<Recipe>::with_page(2);
                let error = RwSignal::new(None);
                let seen = requested.clone();
                list.watch(
                    move |page| {
                        seen.borrow_mut().push(page);
                        Some(async move { Ok::<_, ApiError>(page_of(&[page * 10], 20)) })
                    },
                    error,
                );

                Executor::poll_local();
                assert_eq!(*requested.borrow(), vec![2]);
                assert_eq!(loaded_ids(&list), vec![20]);

                list.set_page(3);
                Executor::poll_local();
                assert_eq!(*requested.borrow(), vec![2, 3]);
                assert_eq!(loaded_ids(&list), vec![30]);

                // same cursor and item edits do not refetch
                list.set_page(3);
                list.update_item(30, |r| r.is_favorited = true);
                Executor::poll_local();
                assert_eq!(*requested.borrow(), vec![2, 3]);
                assert_eq!(error.get_untracked(), None);
            });
        }

        #[test]
        fn test_skipped_run_issues_no_request() {
            let _ = Executor::init_futures_executor();
            let owner = Owner::new();
            owner.with(|| {
                let signed_in = RwSignal::new(false);
                let requested = Rc::new(RefCell::new(Vec::new()));
                let list = PagedList::<Recipe>::new();
                let seen = requested.clone();
                list.watch(
                    move |page| {
                        if !signed_in.get() {
                            return None;
                        }
                        seen.borrow_mut().push(page);
                        Some(async move { Ok::<_, ApiError>(page_of(&[1, 2], 2)) })
                    },
                    RwSignal::new(None),
                );

                Executor::poll_local();
                assert!(requested.borrow().is_empty());
                assert!(!list.state.with_untracked(|s| s.is_loaded()));

                signed_in.set(true);
                Executor::poll_local();
                assert_eq!(*requested.borrow(), vec![1]);
                assert_eq!(loaded_ids(&list), vec![1, 2]);
            });
        }

        #[test]
        fn test_failed_remove_puts_item_back() {
            let _ = Executor::init_futures_executor();
            let owner = Owner::new();
            owner.with(|| {
                let list = PagedList::<Recipe>::new();
                let error = RwSignal::new(None);
                list.load(1, |_| async { Ok::<_, ApiError>(page_of(&[1, 2, 3], 3)) }, error);
                Executor::poll_local();
                assert_eq!(loaded_ids(&list), vec![1, 2, 3]);

                let outcome = Rc::new(RefCell::new(None));
                let seen = outcome.clone();
                list.remove(2, async { Err::<(), _>(ApiError::Network("offline".to_string())) }, move |result| {
                    *seen.borrow_mut() = Some(result.is_err());
                });
                assert_eq!(loaded_ids(&list), vec![1, 3]);
                assert_eq!(list.state.with_untracked(|s| s.count()), 2);

                Executor::poll_local();
                assert_eq!(loaded_ids(&list), vec![1, 2, 3]);
                assert_eq!(list.state.with_untracked(|s| s.count()), 3);
                assert_eq!(*outcome.borrow(), Some(true));
            });
        }

        #[test]
        fn test_failed_load_reports_error() {
            let _ = Executor::init_futures_executor();
            let owner = Owner::new();
            owner.with(|| {
                let list = PagedList::<Recipe>::new();
                let error = RwSignal::new(None);
                list.load(1, |_| async { Err::<Page<Recipe>, _>(ApiError::from_status(500, "")) }, error);
                Executor::poll_local();
                assert!(error.get_untracked().is_some());
                assert!(!list.state.with_untracked(|s| s.is_loading()));
            });
        }
    }
}
