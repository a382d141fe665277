// ── Observable state container ──
//
// Single-value reactive storage: the current value lives in a `watch`
// channel, per-update fan-out goes through a bounded `broadcast` channel.
// The writer never blocks on subscribers.

use tokio::sync::{broadcast, watch};
use tracing::trace;

use crate::config::StoreConfig;
use crate::store::{Store, WritableStore};
use crate::stream::StateStream;

/// The default [`WritableStore`] implementation.
///
/// Holds exactly one current `T`, replaced wholesale on each update. Every
/// accepted update is delivered to live subscribers in acceptance order
/// through a bounded buffer; equal consecutive values are delivered, never
/// deduplicated.
///
/// Delivery policies (see the crate docs): no replay on subscribe, drop the
/// oldest buffered updates for a subscriber that falls behind.
pub struct StateCell<T> {
    /// Current value. `send_modify` updates unconditionally, even with zero
    /// receivers, so the cell itself is the only receiver we need.
    current: watch::Sender<T>,

    /// Per-update fan-out to subscribers.
    updates: broadcast::Sender<T>,
}

impl<T: Clone + Send + 'static> StateCell<T> {
    /// Create a cell with the default [`StoreConfig`].
    pub fn new(initial: T) -> Self {
        Self::with_config(initial, StoreConfig::default())
    }

    /// Create a cell with an explicit buffer configuration.
    pub fn with_config(initial: T, config: StoreConfig) -> Self {
        let (current, _) = watch::channel(initial);
        // broadcast requires a capacity of at least one.
        let (updates, _) = broadcast::channel(config.update_buffer.max(1));

        Self { current, updates }
    }

    /// The current value.
    pub fn get(&self) -> T {
        self.current.borrow().clone()
    }

    /// Replace the current value and publish it.
    pub fn set(&self, value: T) {
        self.current.send_modify(|cur| *cur = value.clone());
        // A send error only means there are no live subscribers.
        let _ = self.updates.send(value);
        trace!("state update published");
    }

    /// Replace the current value with a function of it.
    ///
    /// `update` runs exactly once against the value current at invocation.
    /// The read-then-set pair is not atomic across concurrent callers; see
    /// [`WritableStore::set_with`].
    pub fn set_with(&self, update: impl FnOnce(&T) -> T) {
        let next = update(&self.current.borrow());
        self.set(next);
    }

    /// Subscribe to updates accepted after this call.
    pub fn subscribe(&self) -> StateStream<T> {
        StateStream::new(self.updates.subscribe())
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }
}

impl<T: Clone + Send + 'static> Store<T> for StateCell<T> {
    fn get(&self) -> T {
        StateCell::get(self)
    }

    fn subscribe(&self) -> StateStream<T> {
        StateCell::subscribe(self)
    }
}

impl<T: Clone + Send + 'static> WritableStore<T> for StateCell<T> {
    fn set(&self, value: T) {
        StateCell::set(self, value);
    }

    fn set_with(&self, update: impl FnOnce(&T) -> T) {
        StateCell::set_with(self, update);
    }
}
