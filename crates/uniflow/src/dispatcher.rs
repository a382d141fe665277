// ── Action dispatcher ──
//
// Schedules typed actions onto a tokio runtime against a fixed context.
// The dispatcher itself is stateless beyond those two references.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::action::Action;

/// Runs typed [`Action`]s asynchronously against a fixed context.
///
/// Constructed once per logical execution context (a screen, a session) with
/// the context and a runtime handle — the concurrency scope the actions run
/// on. Cheaply cloneable, so a context can hold a dispatcher and actions can
/// dispatch follow-up actions; recursive dispatches are indistinguishable
/// from top-level ones.
///
/// The `A` type parameter pins the vocabulary of dispatchable actions,
/// mirroring [`ReducedStore`](crate::ReducedStore)'s update parameter.
///
/// # Failure semantics
///
/// A panic inside an action is captured by its tokio task; the dispatcher
/// neither observes nor reports it, and later dispatches are unaffected. The
/// panic surfaces only through the returned [`JoinHandle`] if the caller
/// chooses to await it. Cancelling an in-flight action is likewise the
/// scope's native mechanism: abort the handle or shut the runtime down.
pub struct Dispatcher<C, A> {
    inner: Arc<Inner<C>>,
    _actions: PhantomData<fn(A)>,
}

struct Inner<C> {
    context: Arc<C>,
    scope: Handle,
}

impl<C, A> Clone for Dispatcher<C, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _actions: PhantomData,
        }
    }
}

impl<C, A> Dispatcher<C, A>
where
    C: Send + Sync + 'static,
    A: Action<C>,
{
    /// Create a dispatcher on the current runtime.
    ///
    /// Panics outside a tokio runtime context; use
    /// [`with_scope`](Self::with_scope) to supply a handle explicitly.
    pub fn new(context: Arc<C>) -> Self {
        Self::with_scope(context, Handle::current())
    }

    /// Create a dispatcher on an explicit runtime handle.
    pub fn with_scope(context: Arc<C>, scope: Handle) -> Self {
        Self {
            inner: Arc::new(Inner { context, scope }),
            _actions: PhantomData,
        }
    }

    /// The context actions execute against.
    pub fn context(&self) -> &Arc<C> {
        &self.inner.context
    }

    /// Schedule `action.execute(context)` on the scope and return
    /// immediately.
    ///
    /// Dispatches are accepted in call order; on a current-thread runtime,
    /// actions that do not suspend therefore execute in dispatch order. On a
    /// multi-worker runtime no ordering between distinct actions is
    /// guaranteed — only that each action's own steps run in sequence.
    ///
    /// The returned handle may be ignored (fire-and-forget) or awaited for
    /// completion and panic observation.
    pub fn dispatch(&self, action: A) -> JoinHandle<()> {
        debug!(action = std::any::type_name::<A>(), "dispatching action");
        let context = Arc::clone(&self.inner.context);
        self.inner.scope.spawn(action.execute(context))
    }
}
