use dioxus::prelude::*;

use std::collections::HashSet;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::{
    api::{
        types::{FetchedPage, PageResponse, PagedItem},
        ApiError,
    },
    utils::{async_sleep, log_error_ccstr, CCStr},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteScrollOptions {
    /// Visibility fraction of the sentinel that counts as intersecting.
    pub threshold: f64,
    /// Margin by which the observed viewport is expanded.
    pub root_margin: &'static str,
    pub initial_page: u32,
    pub items_per_page: u32,
    pub debounce_ms: u64,
}
impl Default for InfiniteScrollOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "100px",
            initial_page: 1,
            items_per_page: 12,
            debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

/// Paging state for one incrementally-loaded list.
///
/// Invariants:
/// - `items` holds each key at most once, in arrival order;
/// - `current_page` only advances after a page that contributed at least one
///   new unique item;
/// - once a fetch fails or a page comes back without new items, `has_more`
///   stays false until an explicit rewind.
///
/// All transitions are synchronous; the async plumbing lives in
/// [`UseInfiniteScroll`].
#[derive(Debug, Clone)]
pub struct LoaderState<T> {
    items: Vec<T>,
    current_page: u32,
    has_more: bool,
    is_loading: bool,
    total_items: u64,
    error: Option<CCStr>,
    initial_page: u32,
}

impl<T: PagedItem> LoaderState<T> {
    fn new(initial_page: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: initial_page,
            has_more: true,
            is_loading: false,
            total_items: 0,
            error: None,
            initial_page,
        }
    }

    /// Gate a load attempt. Returns the request to perform, or `None` when a
    /// load is already in flight or the list is exhausted (unless forced).
    fn begin(&mut self, force: bool, per_page: u32) -> Option<PageRequest> {
        if self.is_loading && !force {
            return None;
        }
        if !self.has_more && !force {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        Some(PageRequest {
            page: self.current_page,
            per_page,
        })
    }

    fn apply_page(&mut self, force: bool, page: FetchedPage<T>) {
        let FetchedPage { items, meta, total } = page;

        // Items without an id never enter the list
        let valid: Vec<T> = items
            .into_iter()
            .filter(|item| item.page_key().is_some())
            .collect();

        // A forced reload or a page-1 fetch replaces, everything else appends
        // the keys not already held
        let fresh_count;
        if force || self.current_page == 1 {
            fresh_count = valid.len();
            self.items = valid;
        } else {
            let held: HashSet<T::Key> = self
                .items
                .iter()
                .filter_map(|item| item.page_key())
                .collect();
            let mut fresh: Vec<T> = valid
                .into_iter()
                .filter(|item| item.page_key().is_some_and(|key| !held.contains(&key)))
                .collect();
            fresh_count = fresh.len();
            self.items.append(&mut fresh);
        }

        self.total_items = meta
            .total
            .or(total)
            .unwrap_or(self.items.len() as u64);

        let more_signaled = matches!(
            (meta.current_page, meta.last_page),
            (Some(current), Some(last)) if current < last
        ) || meta.has_more_pages.unwrap_or(false)
            || (self.items.len() as u64) < self.total_items;

        // A page without new unique items terminates paging no matter what the
        // metadata claims, duplicate or stale pages must not loop forever
        self.has_more = more_signaled && fresh_count > 0;

        if fresh_count > 0 {
            self.current_page += 1;
        }
        self.is_loading = false;
    }

    fn apply_error(&mut self, message: CCStr) {
        self.error = Some(if message.is_empty() {
            CCStr::from("Failed to load more items")
        } else {
            message
        });
        // No auto-retry after a failure
        self.has_more = false;
        self.is_loading = false;
    }

    /// Back to the initial state, items included.
    fn clear(&mut self) {
        self.items = Vec::new();
        self.current_page = self.initial_page;
        self.has_more = true;
        self.total_items = 0;
        self.error = None;
    }

    /// Back to the first page but keep the items on display, a forced reload
    /// will replace them.
    fn rewind(&mut self) {
        self.current_page = self.initial_page;
        self.has_more = true;
        self.error = None;
    }

    fn rewind_page(&mut self) {
        self.current_page = self.initial_page;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
    pub fn current_page(&self) -> u32 {
        self.current_page
    }
    pub fn has_more(&self) -> bool {
        self.has_more
    }
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
    pub fn total_items(&self) -> u64 {
        self.total_items
    }
    pub fn error(&self) -> Option<CCStr> {
        self.error.clone()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && !self.is_loading
    }
    pub fn is_first_load(&self) -> bool {
        self.current_page == self.initial_page && self.is_loading
    }
}

type PageFetcher = Callback<PageRequest, LocalBoxFuture<'static, Result<PageResponse, ApiError>>>;

/// Incremental list loader hook.
///
/// Owns the paging state, the single-slot debounce timer and (once a target
/// is attached) the host-side intersection observer. The fetch callback is
/// the only way it obtains data.
///
/// ```ignore
/// let loader = use_infinite_scroll(InfiniteScrollOptions::default(), move |request| async move {
///     api::blogs::list_blogs(&client, &query(request)).await
/// });
/// use_effect(move || loader.observe("blog-list-sentinel"));
/// ```
pub fn use_infinite_scroll<T, F, Fut>(
    options: InfiniteScrollOptions,
    fetch_page: F,
) -> UseInfiniteScroll<T>
where
    T: PagedItem + serde::de::DeserializeOwned + 'static,
    F: FnMut(PageRequest) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<PageResponse, ApiError>> + 'static,
{
    let state = use_signal(|| LoaderState::new(options.initial_page));
    let mut fetch_page = fetch_page;
    let fetch_page = use_callback(move |request: PageRequest| fetch_page(request).boxed_local());
    let debounce = use_signal(|| None::<Task>);
    let observed = use_signal(|| None::<CCStr>);

    // The observer lives on the host side, release it with the view. Pending
    // tasks are scope-owned and die on their own.
    use_drop(move || {
        if let Ok(observed) = observed.try_peek_unchecked() {
            if let Some(target_id) = observed.as_ref() {
                disconnect_observer(target_id);
            }
        }
    });

    UseInfiniteScroll {
        state,
        fetch_page,
        debounce,
        observed,
        options,
    }
}

pub struct UseInfiniteScroll<T: 'static> {
    state: Signal<LoaderState<T>>,
    fetch_page: PageFetcher,
    debounce: Signal<Option<Task>>,
    observed: Signal<Option<CCStr>>,
    options: InfiniteScrollOptions,
}
impl<T> PartialEq for UseInfiniteScroll<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
impl<T: 'static> Clone for UseInfiniteScroll<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: 'static> Copy for UseInfiniteScroll<T> {}

impl<T> UseInfiniteScroll<T>
where
    T: PagedItem + serde::de::DeserializeOwned + Clone + 'static,
{
    async fn run(self, force: bool) {
        let request = match self.state.try_write_unchecked() {
            Ok(mut state) => state.begin(force, self.options.items_per_page),
            Err(_) => return,
        };
        let Some(request) = request else { return };

        log::debug!("infinite_scroll - fetching page {}", request.page);
        let result = self.fetch_page.call(request).await;

        // The owning view may be gone by now, a late resolution is dropped
        let Ok(mut state) = self.state.try_write_unchecked() else {
            log::debug!("infinite_scroll - view torn down, dropping page result");
            return;
        };
        match result {
            Ok(response) => state.apply_page(force, response.into_page::<T>()),
            Err(e) => state.apply_error(log_error_ccstr(e)),
        }
    }

    /// Manual, guarded trigger for "load more" buttons.
    pub fn load_more(&self) {
        {
            let state = self.state.peek();
            if state.is_loading() || !state.has_more() {
                return;
            }
        }
        let this = *self;
        spawn(async move { this.run(false).await });
    }

    /// Full reset then forced reload. For when the underlying query changed.
    pub fn reset(&self) {
        let mut state = self.state;
        state.write().clear();
        let this = *self;
        spawn(async move { this.run(true).await });
    }

    /// Reload the first page without dropping the current items, the forced
    /// load swaps them out once it lands.
    pub fn refresh(&self) {
        let mut state = self.state;
        state.write().rewind();
        let this = *self;
        spawn(async move { this.run(true).await });
    }

    /// First mount load.
    pub fn load_initial(&self) {
        let mut state = self.state;
        state.write().rewind_page();
        let this = *self;
        spawn(async move { this.run(true).await });
    }

    /// Intersection events collapse into a single trailing-edge load per
    /// debounce window; rearming cancels the pending one.
    pub fn on_visibility(&self, is_intersecting: bool) {
        if !is_intersecting {
            return;
        }
        {
            let state = self.state.peek();
            if state.is_loading() || !state.has_more() {
                return;
            }
        }
        let mut slot = self.debounce;
        if let Some(pending) = slot.write().take() {
            pending.cancel();
        }
        let this = *self;
        let delay = self.options.debounce_ms;
        let task = spawn(async move {
            async_sleep(delay).await;
            this.run(false).await;
        });
        slot.set(Some(task));
    }

    /// Attach the viewport sentinel by DOM id. The observer is created lazily
    /// on first attachment and replaced when the target changes.
    pub fn observe(&self, target_id: &str) {
        let mut observed = self.observed;
        if observed.peek().as_deref() == Some(target_id) {
            return;
        }
        if let Some(previous) = observed.peek().clone() {
            disconnect_observer(&previous);
        }
        observed.set(Some(CCStr::from(target_id)));

        let js = format!(
            r#"
            const attach = () => {{
                const target = document.getElementById("{target_id}");
                if (!target) {{ setTimeout(attach, 100); return; }}
                const observer = new IntersectionObserver((entries) => {{
                    dioxus.send(entries[entries.length - 1].isIntersecting);
                }}, {{ threshold: {threshold}, rootMargin: "{root_margin}" }});
                observer.observe(target);
                window.__scribe_observers = window.__scribe_observers || {{}};
                window.__scribe_observers["{target_id}"] = observer;
            }};
            attach();
            "#,
            threshold = self.options.threshold,
            root_margin = self.options.root_margin,
        );
        let mut eval = document::eval(&js);
        let this = *self;
        spawn(async move {
            while let Ok(is_intersecting) = eval.recv::<bool>().await {
                this.on_visibility(is_intersecting);
            }
            log::debug!("infinite_scroll - observer channel closed");
        });
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().items().to_vec()
    }
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }
    pub fn has_more(&self) -> bool {
        self.state.read().has_more()
    }
    pub fn error(&self) -> Option<CCStr> {
        self.state.read().error()
    }
    pub fn current_page(&self) -> u32 {
        self.state.read().current_page()
    }
    pub fn total_items(&self) -> u64 {
        self.state.read().total_items()
    }
    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }
    pub fn is_first_load(&self) -> bool {
        self.state.read().is_first_load()
    }
}

fn disconnect_observer(target_id: &str) {
    document::eval(&format!(
        r#"
        const observers = window.__scribe_observers || {{}};
        if (observers["{target_id}"]) {{
            observers["{target_id}"].disconnect();
            delete observers["{target_id}"];
        }}
        "#
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PageMeta;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct TestItem {
        id: Option<u64>,
    }
    impl PagedItem for TestItem {
        type Key = u64;
        fn page_key(&self) -> Option<u64> {
            self.id
        }
    }

    fn item(id: u64) -> TestItem {
        TestItem { id: Some(id) }
    }

    fn page(ids: &[u64], meta: PageMeta) -> FetchedPage<TestItem> {
        FetchedPage {
            items: ids.iter().copied().map(item).collect(),
            meta,
            total: None,
        }
    }

    fn meta(current_page: u32, last_page: u32) -> PageMeta {
        PageMeta {
            current_page: Some(current_page),
            last_page: Some(last_page),
            ..Default::default()
        }
    }

    fn held_ids(state: &LoaderState<TestItem>) -> Vec<u64> {
        state.items().iter().filter_map(|i| i.id).collect()
    }

    #[test]
    fn test_dedup_across_pages() {
        let mut state = LoaderState::new(1);

        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(1, 3)));
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[2, 3], meta(2, 3)));
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[3, 1, 4], meta(3, 3)));

        assert_eq!(held_ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_page_advances_only_on_new_unique_items() {
        let mut state = LoaderState::new(1);

        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(1, 5)));
        assert_eq!(state.current_page(), 2);

        // Pure duplicates: paging stops where it is
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(2, 5)));
        assert_eq!(state.current_page(), 2);
        assert!(!state.has_more());
    }

    #[test]
    fn test_empty_page_terminates_despite_metadata() {
        let mut state = LoaderState::new(1);

        state.begin(false, 12).unwrap();
        state.apply_page(false, page(&[1], meta(1, 2)));
        assert!(state.has_more());

        let optimistic = PageMeta {
            has_more_pages: Some(true),
            ..meta(2, 9)
        };
        state.begin(false, 12).unwrap();
        state.apply_page(false, page(&[], optimistic));

        assert!(!state.has_more());
        assert_eq!(state.current_page(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_termination_preserves_items_and_page() {
        let mut state = LoaderState::new(1);

        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(1, 3)));

        state.begin(false, 2).unwrap();
        state.apply_error(CCStr::from("boom"));

        assert_eq!(state.error().as_deref(), Some("boom"));
        assert!(!state.has_more());
        assert_eq!(held_ids(&state), vec![1, 2]);
        assert_eq!(state.current_page(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_message_fallback() {
        let mut state = LoaderState::<TestItem>::new(1);
        state.begin(false, 2).unwrap();
        state.apply_error(CCStr::from(""));
        assert_eq!(state.error().as_deref(), Some("Failed to load more items"));
    }

    #[test]
    fn test_force_replaces_accumulated_items() {
        let mut state = LoaderState::new(1);

        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(1, 3)));
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[3, 4], meta(2, 3)));
        assert_eq!(held_ids(&state), vec![1, 2, 3, 4]);

        // Forced reload of page 1, as refresh() performs it
        state.rewind();
        state.begin(true, 2).unwrap();
        state.apply_page(true, page(&[9, 10], meta(1, 3)));

        assert_eq!(held_ids(&state), vec![9, 10]);
    }

    #[test]
    fn test_begin_guards() {
        let mut state = LoaderState::<TestItem>::new(1);

        // In-flight guard
        assert!(state.begin(false, 12).is_some());
        assert!(state.begin(false, 12).is_none());
        assert!(state.begin(true, 12).is_some());

        // Exhausted guard
        let mut state = LoaderState::<TestItem>::new(1);
        state.begin(false, 12).unwrap();
        state.apply_page(false, page(&[], PageMeta::default()));
        assert!(!state.has_more());
        assert!(state.begin(false, 12).is_none());
        assert!(state.begin(true, 12).is_some());
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = LoaderState::<TestItem>::new(1);
        state.begin(false, 12).unwrap();
        state.apply_error(CCStr::from("boom"));

        let request = state.begin(true, 12).unwrap();
        assert_eq!(request.page, 1);
        assert!(state.error().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_items_without_id_are_dropped() {
        let mut state = LoaderState::new(1);
        state.begin(false, 12).unwrap();
        state.apply_page(
            false,
            FetchedPage {
                items: vec![item(1), TestItem { id: None }, item(2)],
                meta: meta(1, 1),
                total: None,
            },
        );
        assert_eq!(held_ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_total_fallback_order() {
        // Pagination total wins
        let mut state = LoaderState::new(1);
        state.begin(false, 2).unwrap();
        state.apply_page(
            false,
            FetchedPage {
                items: vec![item(1)],
                meta: PageMeta {
                    total: Some(40),
                    ..Default::default()
                },
                total: Some(7),
            },
        );
        assert_eq!(state.total_items(), 40);

        // Then the response-level total
        let mut state = LoaderState::new(1);
        state.begin(false, 2).unwrap();
        state.apply_page(
            false,
            FetchedPage {
                items: vec![item(1)],
                meta: PageMeta::default(),
                total: Some(7),
            },
        );
        assert_eq!(state.total_items(), 7);

        // Then the local count
        let mut state = LoaderState::new(1);
        state.begin(false, 2).unwrap();
        state.apply_page(
            false,
            FetchedPage {
                items: vec![item(1)],
                meta: PageMeta::default(),
                total: None,
            },
        );
        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn test_spec_walkthrough_two_pages_with_duplicate() {
        // per_page=2, page 1 -> [1, 2] with last_page=2
        let mut state = LoaderState::new(1);
        let request = state.begin(false, 2).unwrap();
        assert_eq!((request.page, request.per_page), (1, 2));
        state.apply_page(false, page(&[1, 2], meta(1, 2)));
        assert_eq!(held_ids(&state), vec![1, 2]);
        assert_eq!(state.current_page(), 2);
        assert!(state.has_more());

        // page 2 -> [2, 3], duplicate id 2
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[2, 3], meta(2, 2)));
        assert_eq!(held_ids(&state), vec![1, 2, 3]);
        assert_eq!(state.current_page(), 3);
        assert!(!state.has_more());
    }

    #[test]
    fn test_derived_flags() {
        let mut state = LoaderState::<TestItem>::new(1);
        assert!(state.is_empty());

        state.begin(false, 12).unwrap();
        assert!(!state.is_empty());
        assert!(state.is_first_load());

        state.apply_page(false, page(&[1], meta(1, 2)));
        assert!(!state.is_first_load());
        assert!(!state.is_empty());
    }

    #[test]
    fn test_clear_restores_initial_state() {
        let mut state = LoaderState::new(3);
        state.begin(false, 2).unwrap();
        state.apply_page(false, page(&[1, 2], meta(3, 9)));
        state.begin(false, 2).unwrap();
        state.apply_error(CCStr::from("boom"));

        state.clear();
        assert!(state.items().is_empty());
        assert_eq!(state.current_page(), 3);
        assert!(state.has_more());
        assert_eq!(state.total_items(), 0);
        assert!(state.error().is_none());
    }
}
