//! Manual drag-and-drop reordering of small lists (categories, content blocks).
//!
//! The drop is applied locally first ([`move_item`]), then the full id order is
//! sent to the server ([`persist_order`]). If the server refuses, the local
//! order is thrown away and replaced by the canonical list re-read from the
//! server; there is no merge.

use std::fmt::Display;
use std::future::Future;

use crate::models::{Category, ContentBlock, Id};

/// Items that can be addressed by id inside an ordered list.
pub trait Keyed {
    fn key(&self) -> Id;
}

impl Keyed for Category {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for ContentBlock {
    fn key(&self) -> Id {
        self.id
    }
}

impl Keyed for Id {
    fn key(&self) -> Id {
        *self
    }
}

/// Moves `dragged` to the position currently held by `target`.
///
/// Returns `false` and leaves `items` untouched when either id is missing or
/// both are the same item.
pub fn move_item<T: Keyed>(items: &mut Vec<T>, dragged: Id, target: Id) -> bool {
    if dragged == target {
        return false;
    }
    let from = items.iter().position(|item| item.key() == dragged);
    let to = items.iter().position(|item| item.key() == target);
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };
    let item = items.remove(from);
    items.insert(to, item);
    true
}

pub fn order_ids<T: Keyed>(items: &[T]) -> Vec<Id> {
    items.iter().map(Keyed::key).collect()
}

/// Server side of a reorderable list.
pub trait OrderSink {
    type Item: Keyed;
    type Error: Display;

    /// Persists the full order, first id first.
    fn save_order(&self, ids: &[Id]) -> impl Future<Output = Result<(), Self::Error>>;

    /// Reads the canonical order.
    fn load(&self) -> impl Future<Output = Result<Vec<Self::Item>, Self::Error>>;
}

/// What happened to an optimistic reorder.
#[derive(Clone, Debug, PartialEq)]
pub enum ReorderOutcome<T> {
    /// The server accepted the new order; the optimistic list stands.
    Saved,
    /// The server refused; this is the canonical list to display instead.
    RolledBack(Vec<T>),
    /// The server refused and the canonical list could not be reloaded either.
    Failed,
}

impl<T> ReorderOutcome<T> {
    /// List to display instead of the optimistic one, given the order from
    /// before the drop. `None` when the optimistic order stands.
    pub fn replacement(self, before: Vec<T>) -> Option<Vec<T>> {
        match self {
            ReorderOutcome::Saved => None,
            ReorderOutcome::RolledBack(canonical) => Some(canonical),
            ReorderOutcome::Failed => Some(before),
        }
    }
}

/// Sends `ids` to `sink`; on refusal re-reads the canonical list.
pub async fn persist_order<S: OrderSink>(sink: &S, ids: &[Id]) -> ReorderOutcome<S::Item> {
    match sink.save_order(ids).await {
        Ok(()) => ReorderOutcome::Saved,
        Err(e) => {
            tracing::error!("reorder rejected: {e}");
            match sink.load().await {
                Ok(canonical) => ReorderOutcome::RolledBack(canonical),
                Err(e) => {
                    tracing::error!("reloading canonical order failed: {e}");
                    ReorderOutcome::Failed
                }
            }
        }
    }
}

/// Applies a drop to `items` and persists it.
///
/// Returns `None` for a no-op drop. After a rollback `items` holds the
/// canonical server order; when that could not be reloaded, the order from
/// before the drop.
pub async fn reorder<S>(
    sink: &S,
    items: &mut Vec<S::Item>,
    dragged: Id,
    target: Id,
) -> Option<ReorderOutcome<S::Item>>
where
    S: OrderSink,
    S::Item: Clone,
{
    let before = items.clone();
    if !move_item(items, dragged, target) {
        return None;
    }
    let ids = order_ids(items);
    let outcome = persist_order(sink, &ids).await;
    if let Some(shown) = outcome.clone().replacement(before) {
        *items = shown;
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeServer {
        order: RefCell<Vec<Id>>,
        reject: bool,
        offline_reads: bool,
        saves: RefCell<Vec<Vec<Id>>>,
    }

    impl FakeServer {
        fn new(order: Vec<Id>, reject: bool) -> Self {
            Self {
                order: RefCell::new(order),
                reject,
                offline_reads: false,
                saves: RefCell::new(Vec::new()),
            }
        }
    }

    impl OrderSink for FakeServer {
        type Item = Id;
        type Error = &'static str;

        async fn save_order(&self, ids: &[Id]) -> Result<(), &'static str> {
            self.saves.borrow_mut().push(ids.to_vec());
            if self.reject {
                return Err("422");
            }
            *self.order.borrow_mut() = ids.to_vec();
            Ok(())
        }

        async fn load(&self) -> Result<Vec<Id>, &'static str> {
            if self.offline_reads {
                return Err("503");
            }
            Ok(self.order.borrow().clone())
        }
    }

    #[test]
    fn test_move_forward_and_backward() {
        let mut items: Vec<Id> = vec![1, 2, 3, 4, 5];
        assert!(move_item(&mut items, 2, 4));
        assert_eq!(items, vec![1, 3, 4, 2, 5]);
        assert!(move_item(&mut items, 5, 1));
        assert_eq!(items, vec![5, 1, 3, 4, 2]);
    }

    #[test]
    fn test_missing_or_identical_ids_are_noops() {
        let mut items: Vec<Id> = vec![1, 2, 3];
        assert!(!move_item(&mut items, 2, 2));
        assert!(!move_item(&mut items, 9, 1));
        assert!(!move_item(&mut items, 1, 9));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_round_trip_restores_order() {
        let original: Vec<Id> = vec![10, 20, 30, 40, 50, 60];
        for i in 0..original.len() {
            for j in 0..original.len() {
                if i == j {
                    continue;
                }
                let mut items = original.clone();
                let (dragged, target) = (items[i], items[j]);
                assert!(move_item(&mut items, dragged, target));
                assert_eq!(items[j], dragged);
                let back_target = items[i];
                assert!(move_item(&mut items, dragged, back_target));
                assert_eq!(items, original, "i={i} j={j}");
            }
        }
    }

    #[tokio::test]
    async fn test_accepted_reorder_keeps_optimistic_order() {
        let server = FakeServer::new(vec![1, 2, 3], false);
        let mut items: Vec<Id> = vec![1, 2, 3];
        let outcome = reorder(&server, &mut items, 3, 1).await;
        assert_eq!(outcome, Some(ReorderOutcome::Saved));
        assert_eq!(items, vec![3, 1, 2]);
        assert_eq!(*server.saves.borrow(), vec![vec![3, 1, 2]]);
    }

    #[tokio::test]
    async fn test_rejected_reorder_rolls_back_to_canonical() {
        let server = FakeServer::new(vec![1, 2, 3, 4], true);
        let mut items: Vec<Id> = vec![1, 2, 3, 4];
        let outcome = reorder(&server, &mut items, 1, 4).await;
        assert!(matches!(outcome, Some(ReorderOutcome::RolledBack(_))));
        assert_eq!(items, *server.order.borrow());
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_failed_reload_restores_order_before_drop() {
        let mut server = FakeServer::new(vec![1, 2, 3, 4], true);
        server.offline_reads = true;
        let mut items: Vec<Id> = vec![1, 2, 3, 4];
        let outcome = reorder(&server, &mut items, 1, 4).await;
        assert_eq!(outcome, Some(ReorderOutcome::Failed));
        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(*server.saves.borrow(), vec![vec![2, 3, 4, 1]]);
    }

    #[test]
    fn test_replacement_per_outcome() {
        let before: Vec<Id> = vec![1, 2, 3];
        assert_eq!(ReorderOutcome::<Id>::Saved.replacement(before.clone()), None);
        assert_eq!(
            ReorderOutcome::RolledBack(vec![3, 2, 1]).replacement(before.clone()),
            Some(vec![3, 2, 1])
        );
        assert_eq!(ReorderOutcome::<Id>::Failed.replacement(before), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_noop_drop_sends_nothing() {
        let server = FakeServer::new(vec![1, 2], false);
        let mut items: Vec<Id> = vec![1, 2];
        assert_eq!(reorder(&server, &mut items, 2, 2).await, None);
        assert!(server.saves.borrow().is_empty());
    }
}
