// ── Store contracts ──
//
// Read/subscribe and write contracts for observable state, plus the two
// provided implementations. Store variants compose: a wrapper owns its base
// container and forwards reads, overriding only the write path.

mod cell;
mod reduced;

pub use cell::StateCell;
pub use reduced::ReducedStore;

use crate::stream::StateStream;

/// The observable-state contract: current-value read plus subscription.
///
/// Expose only a `Store` to consumers that should observe state but never
/// mutate it.
pub trait Store<T> {
    /// The current value. Synchronous, O(1), never fails.
    ///
    /// Always reflects the most recently accepted update at the time of the
    /// call.
    fn get(&self) -> T;

    /// Subscribe to subsequent updates.
    ///
    /// The returned stream yields every update accepted after this call, in
    /// acceptance order. It does NOT replay the current value; pair with
    /// [`get`](Store::get) for an initial snapshot. A subscriber that falls
    /// behind the update buffer has its oldest pending updates dropped.
    fn subscribe(&self) -> StateStream<T>;
}

/// A [`Store`] that accepts raw value writes.
pub trait WritableStore<T>: Store<T> {
    /// Replace the current value and publish it to all live subscribers.
    fn set(&self, value: T);

    /// Replace the current value with a function of it.
    ///
    /// `update` is invoked exactly once with the value current at the time of
    /// invocation. No atomicity is provided across the read-then-set pair:
    /// two concurrent `set_with` calls can both observe the same prior value,
    /// and one result will overwrite the other. Callers needing stronger
    /// guarantees should funnel writes through a single task.
    fn set_with(&self, update: impl FnOnce(&T) -> T);
}
