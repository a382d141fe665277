// ── Reducer-constrained store ──

use std::marker::PhantomData;

use crate::config::StoreConfig;
use crate::reducer::Reducer;
use crate::store::{StateCell, Store};
use crate::stream::StateStream;

/// A store whose only write path is a typed [`Reducer`].
///
/// Wraps an owned [`StateCell`]; reads and subscriptions delegate to it
/// unchanged, but no raw value replacement is exposed at this layer. The `U`
/// type parameter pins the vocabulary of allowed transitions — with a closed
/// enum of updates, every possible mutation of this store is enumerable at
/// the type level.
pub struct ReducedStore<S, U> {
    cell: StateCell<S>,
    _updates: PhantomData<fn(U)>,
}

impl<S, U> ReducedStore<S, U>
where
    S: Clone + Send + 'static,
    U: Reducer<S>,
{
    /// Create a store over a fresh cell with the default configuration.
    pub fn new(initial: S) -> Self {
        Self::over(StateCell::new(initial))
    }

    /// Create a store over a fresh cell with an explicit configuration.
    pub fn with_config(initial: S, config: StoreConfig) -> Self {
        Self::over(StateCell::with_config(initial, config))
    }

    /// Wrap an existing cell. The cell is owned exclusively from here on;
    /// all further writes go through [`update`](Self::update).
    pub fn over(cell: StateCell<S>) -> Self {
        Self {
            cell,
            _updates: PhantomData,
        }
    }

    /// The current value.
    pub fn get(&self) -> S {
        self.cell.get()
    }

    /// Subscribe to updates accepted after this call.
    pub fn subscribe(&self) -> StateStream<S> {
        self.cell.subscribe()
    }

    /// Apply a reducer to the current state and publish the result.
    ///
    /// The reduction runs synchronously relative to this call; the published
    /// state is exactly `update.reduce(current)` for the value visible at
    /// call time. A panicking reducer propagates to the caller before
    /// anything is published, leaving the store's value unchanged.
    ///
    /// The read-then-publish pair is not locked: with concurrent writers, one
    /// update can be computed from a state another update has already
    /// superseded. Funnel writes through a single task where that matters.
    pub fn update(&self, update: U) {
        let next = update.reduce(self.cell.get());
        self.cell.set(next);
    }
}

impl<S, U> Store<S> for ReducedStore<S, U>
where
    S: Clone + Send + 'static,
    U: Reducer<S>,
{
    fn get(&self) -> S {
        ReducedStore::get(self)
    }

    fn subscribe(&self) -> StateStream<S> {
        ReducedStore::subscribe(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Counter {
        total: i64,
    }

    enum Updates {
        Add(i64),
        Boom,
    }

    impl Reducer<Counter> for Updates {
        fn reduce(&self, state: Counter) -> Counter {
            match self {
                Updates::Add(n) => Counter {
                    total: state.total + n,
                },
                Updates::Boom => panic!("reducer failure"),
            }
        }
    }

    #[test]
    fn update_publishes_the_reducer_output() {
        let store: ReducedStore<Counter, Updates> = ReducedStore::new(Counter { total: 0 });
        store.update(Updates::Add(3));
        assert_eq!(store.get(), Counter { total: 3 });
    }

    #[tokio::test]
    async fn updates_chain_over_previous_state() {
        let store: ReducedStore<Counter, Updates> = ReducedStore::new(Counter { total: 0 });
        let mut updates = store.subscribe();

        store.update(Updates::Add(1));
        store.update(Updates::Add(10));
        store.update(Updates::Add(100));

        assert_eq!(updates.recv().await, Ok(Counter { total: 1 }));
        assert_eq!(updates.recv().await, Ok(Counter { total: 11 }));
        assert_eq!(updates.recv().await, Ok(Counter { total: 111 }));
    }

    #[test]
    fn panicking_reducer_leaves_state_unchanged() {
        let store: ReducedStore<Counter, Updates> = ReducedStore::new(Counter { total: 5 });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.update(Updates::Boom);
        }));

        assert!(result.is_err());
        assert_eq!(store.get(), Counter { total: 5 });
    }

    #[tokio::test]
    async fn panicking_reducer_publishes_nothing() {
        let store: ReducedStore<Counter, Updates> = ReducedStore::new(Counter { total: 5 });
        let mut updates = store.subscribe();

        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.update(Updates::Boom);
        }));
        store.update(Updates::Add(1));

        // The failed update produced no notification; the next good one did.
        assert_eq!(updates.recv().await, Ok(Counter { total: 6 }));
    }

    #[test]
    fn over_wraps_an_existing_cell() {
        let cell = StateCell::new(Counter { total: 2 });
        let store: ReducedStore<Counter, Updates> = ReducedStore::over(cell);
        store.update(Updates::Add(2));
        assert_eq!(store.get(), Counter { total: 4 });
    }
}
