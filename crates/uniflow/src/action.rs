// ── Action contract ──
//
// The typed-message half of the effect path: named values carrying an
// asynchronous procedure, executed against a caller-supplied context.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

/// A typed, asynchronous unit of work.
///
/// An action is an immutable value carrying an async procedure plus captured
/// parameters. The procedure receives the context — the embedding
/// application's dependency bag of stores and clients — as an explicit
/// argument, which keeps an action's dependencies visible and makes it
/// testable by calling [`execute`](Action::execute) directly.
///
/// An action may perform I/O through the context, may update any store
/// reachable from it, and may dispatch follow-up actions; it must eventually
/// terminate. A failure inside `execute` is not intercepted by the
/// [`Dispatcher`](crate::Dispatcher) — see its docs for where panics end up.
pub trait Action<C>: Send + 'static {
    /// Run this action against the context.
    fn execute(self, context: Arc<C>) -> impl Future<Output = ()> + Send;
}

/// A one-off action built from an async closure.
///
/// Convenience for effects that do not warrant a named variant, mirroring
/// [`FnReducer`](crate::FnReducer) on the write path:
///
/// ```no_run
/// use std::sync::Arc;
/// use uniflow::FnAction;
///
/// struct Context { /* stores, clients */ }
///
/// let refresh = FnAction::new(|_ctx: Arc<Context>| async move {
///     // await clients, update stores
/// });
/// ```
pub struct FnAction<C> {
    run: Box<dyn FnOnce(Arc<C>) -> BoxFuture<'static, ()> + Send>,
}

impl<C> FnAction<C> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Arc<C>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            run: Box::new(move |context| f(context).boxed()),
        }
    }
}

impl<C: Send + Sync + 'static> Action<C> for FnAction<C> {
    fn execute(self, context: Arc<C>) -> impl Future<Output = ()> + Send {
        (self.run)(context)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    struct Context {
        hits: AtomicI64,
    }

    #[tokio::test]
    async fn fn_action_runs_against_the_context() {
        let context = Arc::new(Context {
            hits: AtomicI64::new(0),
        });

        let bump = FnAction::new(|ctx: Arc<Context>| async move {
            ctx.hits.fetch_add(1, Ordering::SeqCst);
        });
        bump.execute(Arc::clone(&context)).await;

        assert_eq!(context.hits.load(Ordering::SeqCst), 1);
    }
}
