//! Unidirectional state management for tokio applications.
//!
//! This crate provides a single source of truth for application state,
//! observable by multiple readers and mutable only through declared, typed
//! transitions:
//!
//! - **[`StateCell`]** — Observable state container holding one current value.
//!   Reads are synchronous and O(1); every accepted update is fanned out to
//!   subscribers through a bounded broadcast buffer.
//!
//! - **[`ReducedStore`]** — Store variant that routes every write through a
//!   typed [`Reducer`], giving calling code a closed, enumerable vocabulary
//!   of allowed state transitions.
//!
//! - **[`Action`]** / **[`Dispatcher`]** — Typed asynchronous operations
//!   executed against a caller-supplied context (a dependency bag of stores
//!   and clients). [`Dispatcher::dispatch`] schedules an action on a tokio
//!   runtime and returns immediately.
//!
//! - **[`StateStream`]** — Subscription handle vended by stores. Exposes
//!   `recv()` / `next()` and a [`futures_core::Stream`] adapter for
//!   combinator-based consumption.
//!
//! # Delivery semantics
//!
//! Two policies are fixed by design and pinned by tests:
//!
//! - **No replay on subscribe.** A new subscriber observes only updates
//!   accepted after `subscribe()`; the current value is always available
//!   synchronously via [`Store::get`].
//! - **Drop on backpressure.** A subscriber that falls behind the update
//!   buffer has its oldest pending updates dropped. The writer never blocks
//!   and never buffers unboundedly. See [`RecvError::Lagged`].

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod reducer;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Action, FnAction};
pub use config::StoreConfig;
pub use dispatcher::Dispatcher;
pub use error::RecvError;
pub use reducer::{FnReducer, Reducer};
pub use store::{ReducedStore, StateCell, Store, WritableStore};
pub use stream::{StateStream, UpdateStream};
