//! State of a client-side list page: the visible slice plus the search,
//! filter and page that produced it.

use contracts::shared::pagination::{paginate, PageWindow};
use contracts::shared::search::Searchable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::config::config;
use crate::shared::api_client::Resource;

#[derive(Clone, Debug)]
pub struct ListState<T, F = ()> {
    pub items: Vec<T>,
    pub search_query: String,
    pub filter: F,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub is_loaded: bool,
}

impl<T, F: Default> ListState<T, F> {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            filter: F::default(),
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            is_loaded: false,
        }
    }
}

impl<T, F: Default> Default for ListState<T, F> {
    fn default() -> Self {
        Self::with_page_size(config().ui.page_size)
    }
}

impl<T: Searchable + Clone, F> ListState<T, F> {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.page_size, self.total_count)
    }

    /// Search, filter, pull the page back into range, slice.
    pub fn refresh(&mut self, all: &[T], keep: impl Fn(&F, &T) -> bool) {
        let filter = &self.filter;
        let query = self.search_query.as_str();
        let rows: Vec<T> = all
            .iter()
            .filter(|row| row.matches_search(query) && keep(filter, row))
            .cloned()
            .collect();
        self.total_count = rows.len();
        let window = self.window().clamped();
        self.page = window.page;
        self.items = paginate(&rows, &window);
    }

    pub fn set_search(&mut self, query: String) {
        self.search_query = query;
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }
}

/// Signals behind one list page: every fetched row, the visible state
/// derived from them, and the loading/error flags of the last fetch.
pub struct ListController<T, F = ()> {
    pub all_rows: RwSignal<Vec<T>>,
    pub state: RwSignal<ListState<T, F>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    keep: fn(&F, &T) -> bool,
}

impl<T: 'static, F: 'static> Clone for ListController<T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, F: 'static> Copy for ListController<T, F> {}

impl<T, F> ListController<T, F>
where
    T: Searchable + Clone + Send + Sync + 'static,
    F: Clone + Default + Send + Sync + 'static,
{
    pub fn new(state: RwSignal<ListState<T, F>>, keep: fn(&F, &T) -> bool) -> Self {
        Self {
            all_rows: RwSignal::new(Vec::new()),
            state,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            keep,
        }
    }

    /// Recompute the visible page from `all_rows`.
    pub fn refresh_view(&self) {
        let keep = self.keep;
        let all_rows = self.all_rows;
        self.state
            .update(|s| all_rows.with_untracked(|rows| s.refresh(rows, keep)));
    }

    pub fn set_rows(&self, rows: Vec<T>) {
        self.all_rows.set(rows);
        self.state.update(|s| s.is_loaded = true);
        self.refresh_view();
    }

    pub fn set_search(&self, query: String) {
        self.state.update(|s| s.set_search(query));
        self.refresh_view();
    }

    pub fn set_filter(&self, filter: F) {
        self.state.update(|s| s.set_filter(filter));
        self.refresh_view();
    }

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.page = page);
        self.refresh_view();
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.state.with(|s| s.items.is_empty())
    }

    pub fn search(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.search_query.clone()))
    }

    pub fn window(&self) -> Signal<PageWindow> {
        let state = self.state;
        Signal::derive(move || state.with(ListState::window))
    }

    /// Fetch the whole collection and rebuild the view.
    pub fn load(&self, resource: Resource)
    where
        T: DeserializeOwned,
    {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);
        spawn_local(async move {
            match resource.index::<T>().await {
                Ok(rows) => {
                    log::debug!("{}: {} rows", resource.route(), rows.len());
                    this.set_rows(rows);
                }
                Err(e) => {
                    log::error!("{}: {}", resource.route(), e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    /// Load once per page state, e.g. when a tab is reopened.
    pub fn load_once(&self, resource: Resource)
    where
        T: DeserializeOwned,
    {
        if !self.state.with_untracked(|s| s.is_loaded) {
            self.load(resource);
        }
    }
}

/// Fetch a collection used to fill form selects.
pub fn load_options<T>(resource: Resource, target: RwSignal<Vec<T>>)
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match resource.index::<T>().await {
            Ok(rows) => target.set(rows),
            Err(e) => log::warn!("{} options: {}", resource.route(), e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        active: bool,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Option<String>> {
            vec![Some(self.name.clone())]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                name: format!("Row {:02}", i),
                active: i % 2 == 0,
            })
            .collect()
    }

    fn only_active(active_only: &bool, row: &Row) -> bool {
        !*active_only || row.active
    }

    #[test]
    fn test_refresh_slices_current_page() {
        let all = rows(25);
        let mut state: ListState<Row, bool> = ListState::with_page_size(10);
        state.page = 3;
        state.refresh(&all, only_active);
        assert_eq!(state.total_count, 25);
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.items[0].name, "Row 21");
    }

    #[test]
    fn test_filter_resets_page_and_clamps() {
        let all = rows(25);
        let mut state: ListState<Row, bool> = ListState::with_page_size(10);
        state.page = 3;
        state.set_filter(true);
        assert_eq!(state.page, 1);
        state.refresh(&all, only_active);
        assert_eq!(state.total_count, 12);

        state.page = 9;
        state.refresh(&all, only_active);
        assert_eq!(state.page, 2);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let all = rows(25);
        let mut state: ListState<Row> = ListState::with_page_size(10);
        state.set_search("  row 1 ".to_string());
        state.refresh(&all, |_, _| true);
        assert_eq!(state.total_count, 10);
        assert_eq!(state.items[0].name, "Row 10");
    }

    #[test]
    fn test_empty_result() {
        let mut state: ListState<Row> = ListState::with_page_size(10);
        state.set_search("nothing".to_string());
        state.refresh(&rows(5), |_, _| true);
        assert_eq!(state.total_count, 0);
        assert_eq!(state.page, 1);
        assert!(state.items.is_empty());
    }
}
