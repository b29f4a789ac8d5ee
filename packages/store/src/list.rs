//! # List controller: the fetch / filter / paginate / act loop
//!
//! Every admin list screen keeps one [`ListController`] and drives it the
//! same way:
//!
//! 1. On mount and on every filter change, [`ListController::begin`] hands out
//!    a fresh [`Generation`] and marks the list as loading.
//! 2. The screen awaits its [`ListSource`].
//! 3. [`ListController::complete`] applies the result only if its generation is
//!    still the latest one. A slow response overtaken by a newer request is
//!    dropped instead of overwriting fresher data.
//!
//! Row actions go through [`dispatch`]: exactly one mutation, then exactly one
//! re-fetch whether the mutation succeeded or not. Bulk actions go through
//! [`dispatch_bulk`] and a [`Selection`].
//!
//! Sources and sinks are plain traits with `impl Future` returns, so the
//! `api` crate implements them for its HTTP clients and tests implement them
//! with in-memory recorders.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::future::Future;

use crate::commands::Command;
use crate::filters::ListQuery;
use crate::models::{Id, Page, PaginationMeta};

/// Anything that can produce one page of items for a filter value.
pub trait ListSource<F> {
    type Item;
    type Error: Display;

    fn fetch(&self, filters: &F) -> impl Future<Output = Result<Page<Self::Item>, Self::Error>>;
}

/// Anything that can apply a single-row command.
pub trait CommandSink<C> {
    type Error: Display;

    fn execute(&self, command: &C) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Anything that can apply one action to many rows at once.
pub trait BulkSink<A> {
    type Error: Display;

    fn execute_bulk(&self, action: A, ids: &[Id]) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Monotonically increasing request number of one controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// State of one list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListController<T, F> {
    pub filters: F,
    pub items: Vec<T>,
    pub meta: PaginationMeta,
    pub loading: bool,
    pub error: Option<String>,
    latest: Generation,
    error_message: &'static str,
}

impl<T, F: ListQuery> ListController<T, F> {
    /// `error_message` is the localized text shown when a fetch fails.
    pub fn new(filters: F, error_message: &'static str) -> Self {
        Self {
            filters,
            items: Vec::new(),
            meta: PaginationMeta::default(),
            loading: true,
            error: None,
            latest: Generation::default(),
            error_message,
        }
    }

    /// Replaces the filters. Returns `false` when nothing changed, so callers
    /// can skip a redundant fetch.
    pub fn set_filters(&mut self, filters: F) -> bool {
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        true
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let filters = self.filters.with_page(page);
        self.set_filters(filters)
    }

    pub fn reset_filters(&mut self) -> bool {
        let filters = self.filters.reset();
        self.set_filters(filters)
    }

    /// Starts a request for the current filters.
    pub fn begin(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.loading = true;
        self.error = None;
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }

    /// Applies the outcome of the request started as `generation`.
    ///
    /// Returns `false` if a newer request has been started since; the result
    /// is then discarded untouched.
    pub fn complete<E: Display>(
        &mut self,
        generation: Generation,
        result: Result<Page<T>, E>,
    ) -> bool {
        if !self.is_current(generation) {
            tracing::debug!(?generation, latest = ?self.latest, "discarding stale list response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.meta = page.meta;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("list fetch failed: {e}");
                self.error = Some(self.error_message.to_string());
            }
        }
        true
    }

    /// Fetches the current filters from `source` and applies the result.
    ///
    /// Convenience for callers that own the controller across the await.
    /// UI code holding the controller in a signal calls [`begin`](Self::begin)
    /// and [`complete`](Self::complete) itself.
    pub async fn refresh<S>(&mut self, source: &S)
    where
        S: ListSource<F, Item = T>,
    {
        let generation = self.begin();
        let filters = self.filters.clone();
        let result = source.fetch(&filters).await;
        self.complete(generation, result);
    }
}

/// Runs `command` through `sink`, then awaits `refetch` unconditionally.
///
/// The mutation's outcome is logged and returned; the list is never patched
/// locally, it is always re-read from the server.
pub async fn dispatch<S, C, R>(sink: &S, command: &C, refetch: R) -> Result<(), S::Error>
where
    S: CommandSink<C>,
    C: Command,
    R: Future<Output = ()>,
{
    tracing::debug!(action = command.name(), id = command.target(), "dispatching command");
    let outcome = sink.execute(command).await;
    if let Err(e) = &outcome {
        tracing::error!(action = command.name(), id = command.target(), "command failed: {e}");
    }
    refetch.await;
    outcome
}

/// Runs one bulk action over `ids`, then awaits `refetch`.
///
/// `ids` is the selection as it was when the action started; on success the
/// caller removes exactly those from its live [`Selection`] so rows ticked
/// while the request was in flight stay ticked. An empty list is a no-op:
/// no call, no re-fetch.
pub async fn dispatch_bulk<S, A, R>(sink: &S, action: A, ids: &[Id], refetch: R) -> Result<(), S::Error>
where
    S: BulkSink<A>,
    A: Copy + std::fmt::Debug,
    R: Future<Output = ()>,
{
    if ids.is_empty() {
        return Ok(());
    }
    let outcome = sink.execute_bulk(action, ids).await;
    if let Err(e) = &outcome {
        tracing::error!(?action, count = ids.len(), "bulk action failed: {e}");
    }
    refetch.await;
    outcome
}

/// Checkbox-driven set of selected row ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<Id>,
}

impl Selection {
    pub fn toggle(&mut self, id: Id) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Selects every id in `visible`, or clears them all if all were selected.
    pub fn toggle_all(&mut self, visible: &[Id]) {
        if !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id)) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(visible.iter().copied());
        }
    }

    pub fn contains(&self, id: Id) -> bool {
        self.ids.contains(&id)
    }

    pub fn all_selected(&self, visible: &[Id]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn ids(&self) -> Vec<Id> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Unselects `ids`, leaving any other selected rows alone.
    pub fn remove_all(&mut self, ids: &[Id]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    /// Drops ids that are no longer on screen, e.g. after a page or filter
    /// change.
    pub fn retain_visible(&mut self, visible: &[Id]) {
        self.ids.retain(|id| visible.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommentBulkAction, CommentCommand};
    use crate::filters::{query_string, ArticleFilters, CommentFilters};
    use std::cell::{Cell, RefCell};

    /// Records every call as a string, in order.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
        fail_mutations: Cell<bool>,
        total: u64,
    }

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl ListSource<ArticleFilters> for Recorder {
        type Item = u64;
        type Error = String;

        async fn fetch(&self, filters: &ArticleFilters) -> Result<Page<u64>, String> {
            self.calls
                .borrow_mut()
                .push(format!("fetch {}", query_string(&filters.to_query())));
            let per_page = filters.per_page.get();
            let first = u64::from((filters.page - 1) * per_page) + 1;
            let last = (first + u64::from(per_page) - 1).min(self.total);
            Ok(Page::new(
                (first..=last).collect(),
                PaginationMeta {
                    current_page: filters.page,
                    last_page: ((self.total + u64::from(per_page) - 1) / u64::from(per_page)) as u32,
                    per_page,
                    total: self.total,
                },
            ))
        }
    }

    impl ListSource<CommentFilters> for Recorder {
        type Item = u64;
        type Error = String;

        async fn fetch(&self, filters: &CommentFilters) -> Result<Page<u64>, String> {
            self.calls
                .borrow_mut()
                .push(format!("fetch {}", query_string(&filters.to_query())));
            Ok(Page::new(vec![42], PaginationMeta::default()))
        }
    }

    impl CommandSink<CommentCommand> for Recorder {
        type Error = String;

        async fn execute(&self, command: &CommentCommand) -> Result<(), String> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", command.name(), command.target()));
            if self.fail_mutations.get() {
                Err("server said no".to_string())
            } else {
                Ok(())
            }
        }
    }

    impl BulkSink<CommentBulkAction> for Recorder {
        type Error = String;

        async fn execute_bulk(&self, action: CommentBulkAction, ids: &[Id]) -> Result<(), String> {
            self.calls.borrow_mut().push(format!("bulk {action:?} {ids:?}"));
            if self.fail_mutations.get() {
                Err("server said no".to_string())
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_refresh_requests_page_and_stores_meta() {
        let source = Recorder { total: 47, ..Default::default() };
        let mut list = ListController::<u64, _>::new(ArticleFilters::default(), "Ошибка загрузки статей");
        assert!(list.go_to_page(4));
        list.refresh(&source).await;

        assert_eq!(source.calls(), vec!["fetch page=4&per_page=15"]);
        assert_eq!(list.items, vec![46, 47]);
        assert_eq!(list.meta.total, 47);
        assert!(!list.loading);
        assert_eq!(
            crate::pagination::summary(&list.meta, crate::pagination::Noun::ARTICLES),
            "Показано 46-47 из 47 статей"
        );
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut list = ListController::<u64, _>::new(ArticleFilters::default(), "err");
        let slow = list.begin();
        let fast = list.begin();

        let fresh = Page::new(vec![2], PaginationMeta::default());
        assert!(list.complete::<String>(fast, Ok(fresh)));
        let stale = Page::new(vec![1], PaginationMeta::default());
        assert!(!list.complete::<String>(slow, Ok(stale)));

        assert_eq!(list.items, vec![2]);
        assert!(!list.loading);
    }

    #[test]
    fn test_failure_sets_localized_error_and_stops_loading() {
        let mut list = ListController::<u64, _>::new(ArticleFilters::default(), "Ошибка загрузки статей");
        let generation = list.begin();
        list.complete(generation, Err::<Page<u64>, _>("connection reset"));
        assert_eq!(list.error.as_deref(), Some("Ошибка загрузки статей"));
        assert!(!list.loading);
    }

    #[test]
    fn test_unchanged_filters_report_no_change() {
        let mut list = ListController::<u64, _>::new(ArticleFilters::default(), "err");
        assert!(!list.set_filters(ArticleFilters::default()));
        assert!(!list.reset_filters());
        assert!(list.go_to_page(2));
        assert!(list.reset_filters());
    }

    async fn approve_then_refetch(fail: bool) -> (Vec<String>, Result<(), String>) {
        let source = Recorder::default();
        source.fail_mutations.set(fail);
        let list = RefCell::new(ListController::<u64, _>::new(CommentFilters::default(), "err"));

        let refetch = async {
            let generation = list.borrow_mut().begin();
            let filters = list.borrow().filters.clone();
            let result = source.fetch(&filters).await;
            list.borrow_mut().complete(generation, result);
        };
        let outcome = dispatch(&source, &CommentCommand::Approve(42), refetch).await;
        (source.calls(), outcome)
    }

    #[tokio::test]
    async fn test_action_then_single_refetch_on_success() {
        let (calls, outcome) = approve_then_refetch(false).await;
        assert!(outcome.is_ok());
        assert_eq!(calls, vec!["approve 42", "fetch page=1&per_page=20"]);
    }

    #[tokio::test]
    async fn test_action_then_single_refetch_on_failure() {
        let (calls, outcome) = approve_then_refetch(true).await;
        assert!(outcome.is_err());
        assert_eq!(calls, vec!["approve 42", "fetch page=1&per_page=20"]);
    }

    #[tokio::test]
    async fn test_bulk_unselects_sent_rows_only_on_success() {
        let source = Recorder::default();
        let refetches = Cell::new(0);

        let mut selection = Selection::default();
        selection.toggle_all(&[3, 1, 2]);
        selection.toggle(2);

        source.fail_mutations.set(true);
        let sent = selection.ids();
        let outcome = dispatch_bulk(&source, CommentBulkAction::Spam, &sent, async {
            refetches.set(refetches.get() + 1)
        })
        .await;
        assert!(outcome.is_err());
        assert_eq!(selection.ids(), vec![1, 3]);

        source.fail_mutations.set(false);
        let sent = selection.ids();
        let pending = dispatch_bulk(&source, CommentBulkAction::Spam, &sent, async {
            refetches.set(refetches.get() + 1)
        });
        // A row ticked while the request is in flight.
        selection.toggle(5);
        pending.await.unwrap();
        selection.remove_all(&sent);

        assert_eq!(selection.ids(), vec![5]);
        assert_eq!(refetches.get(), 2);
        assert_eq!(source.calls(), vec!["bulk Spam [1, 3]", "bulk Spam [1, 3]"]);
    }

    #[tokio::test]
    async fn test_empty_bulk_selection_is_noop() {
        let source = Recorder::default();
        let selection = Selection::default();
        dispatch_bulk(&source, CommentBulkAction::Approve, &selection.ids(), async {})
            .await
            .unwrap();
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_selection_keeps_only_visible_rows() {
        let mut selection = Selection::default();
        selection.toggle_all(&[1, 2, 3]);
        selection.retain_visible(&[2, 3, 4]);
        assert_eq!(selection.ids(), vec![2, 3]);
        selection.retain_visible(&[]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_flips_visible_rows() {
        let mut selection = Selection::default();
        selection.toggle_all(&[1, 2]);
        assert!(selection.all_selected(&[1, 2]));
        selection.toggle_all(&[1, 2]);
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }
}
