//! # `use_paginated_list`: the fetch-on-change hook of every list screen
//!
//! Wraps a [`ListController`] in a signal and wires it to Dioxus:
//!
//! - the filter value lives in its own signal; an effect re-fetches whenever
//!   it changes;
//! - each fetch takes a generation from the controller, and the controller
//!   drops responses that were overtaken by a newer request;
//! - a 401 that survived the token refresh ends the session.
//!
//! [`ListHandle::refetch`] returns the re-fetch as a future so command
//! dispatch can await it after the mutation.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use store::filters::ListQuery;
use store::ListController;
use store::ListSource;

use crate::auth::{expire_session, use_auth, AuthState};

pub struct ListHandle<T: 'static, F: 'static, S: 'static> {
    pub list: Signal<ListController<T, F>>,
    filters: Signal<F>,
    source: Signal<S>,
    auth: Signal<AuthState>,
}

impl<T: 'static, F: 'static, S: 'static> Clone for ListHandle<T, F, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, F: 'static, S: 'static> Copy for ListHandle<T, F, S> {}

impl<T: 'static, F: 'static, S: 'static> PartialEq for ListHandle<T, F, S> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

async fn fetch_into<T, F, S>(
    mut list: Signal<ListController<T, F>>,
    mut auth: Signal<AuthState>,
    source: S,
    filters: F,
) where
    F: ListQuery + 'static,
    S: ListSource<F, Item = T, Error = ApiError>,
    T: 'static,
{
    let generation = {
        let mut controller = list.write();
        controller.set_filters(filters.clone());
        controller.begin()
    };
    let result = source.fetch(&filters).await;
    if matches!(result, Err(ApiError::Unauthorized)) && list.peek().is_current(generation) {
        expire_session(&mut auth);
    }
    list.write().complete(generation, result);
}

impl<T, F, S> ListHandle<T, F, S>
where
    T: Clone + 'static,
    F: ListQuery + 'static,
    S: ListSource<F, Item = T, Error = ApiError> + Clone + 'static,
{
    pub fn filters(&self) -> F {
        self.filters.read().clone()
    }

    /// Replaces the filters; an unchanged value triggers no request.
    pub fn set_filters(&mut self, filters: F) {
        if *self.filters.peek() != filters {
            self.filters.set(filters);
        }
    }

    /// Applies `change` to the current filters.
    pub fn update(&mut self, change: impl FnOnce(&F) -> F) {
        let next = change(&self.filters.peek());
        self.set_filters(next);
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.update(|f| f.with_page(page));
    }

    pub fn reset(&mut self) {
        self.update(|f| f.reset());
    }

    /// A fetch of the current filters, applied when awaited.
    pub fn refetch(&self) -> impl Future<Output = ()> + 'static {
        let list = self.list;
        let auth = self.auth;
        let source = self.source.peek().clone();
        let filters = self.filters.peek().clone();
        fetch_into(list, auth, source, filters)
    }

    pub fn items(&self) -> Vec<T> {
        self.list.read().items.clone()
    }
}

/// List state bound to `source`, fetched on mount and on every filter change.
pub fn use_paginated_list<T, F, S>(
    source: S,
    initial: impl FnOnce() -> F,
    error_message: &'static str,
) -> ListHandle<T, F, S>
where
    T: Clone + 'static,
    F: ListQuery + 'static,
    S: ListSource<F, Item = T, Error = ApiError> + Clone + 'static,
{
    let auth = use_auth();
    let filters = use_signal(initial);
    let source = use_signal(move || source);
    let list = use_signal(|| ListController::new(filters.peek().clone(), error_message));

    use_effect(move || {
        let filters = filters();
        let source = source.peek().clone();
        spawn(fetch_into(list, auth, source, filters));
    });

    ListHandle {
        list,
        filters,
        source,
        auth,
    }
}
