// ── Subscription streams ──
//
// Consumption handles for store subscriptions. Lag (dropped updates for a
// slow subscriber) is surfaced explicitly by `recv()` and skipped silently
// by `next()` and the `Stream` adapter.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tracing::debug;

use crate::error::RecvError;

/// A subscription to a store's updates.
///
/// Yields every update accepted after the subscription was created, in
/// acceptance order, up to the store's buffer capacity. Nothing is replayed
/// on subscribe; read the current value from the store directly.
pub struct StateStream<T> {
    receiver: broadcast::Receiver<T>,
}

impl<T: Clone + Send + 'static> StateStream<T> {
    pub(crate) fn new(receiver: broadcast::Receiver<T>) -> Self {
        Self { receiver }
    }

    /// Wait for the next update.
    ///
    /// Returns [`RecvError::Lagged`] if this subscriber fell behind and
    /// updates were dropped (the subsequent call resumes with the oldest
    /// update still buffered), or [`RecvError::Closed`] once the store has
    /// been dropped and the buffer drained.
    pub async fn recv(&mut self) -> Result<T, RecvError> {
        match self.receiver.recv().await {
            Ok(value) => Ok(value),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!(skipped, "subscriber lagged; state updates dropped");
                Err(RecvError::Lagged { skipped })
            }
            Err(broadcast::error::RecvError::Closed) => Err(RecvError::Closed),
        }
    }

    /// Wait for the next update, silently skipping over lag.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            match self.recv().await {
                Ok(value) => return Some(value),
                Err(RecvError::Lagged { .. }) => {}
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Convert into a [`Stream`] for use with `StreamExt` combinators.
    pub fn into_stream(self) -> UpdateStream<T> {
        UpdateStream {
            inner: BroadcastStream::new(self.receiver),
        }
    }
}

/// [`Stream`] adapter over a store subscription.
///
/// Yields each update in acceptance order, skipping over lag like
/// [`StateStream::next`]; the stream ends when the store is dropped.
pub struct UpdateStream<T> {
    inner: BroadcastStream<T>,
}

impl<T: Clone + Send + 'static> Stream for UpdateStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            match Pin::new(&mut self.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(value))) => return Poll::Ready(Some(value)),
                // Lag is the documented drop policy; keep polling.
                Poll::Ready(Some(Err(BroadcastStreamRecvError::Lagged(_)))) => {}
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::config::StoreConfig;
    use crate::store::StateCell;
    use futures_util::StreamExt;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn next_skips_lag_and_resumes_with_buffered_updates() {
        let cell = StateCell::with_config(0, StoreConfig { update_buffer: 1 });
        let mut updates = cell.subscribe();

        cell.set(1);
        cell.set(2);
        cell.set(3);

        // Buffer of one: only the newest update survives; `next` skips the
        // lag report itself.
        assert_eq!(updates.next().await, Some(3));
    }

    #[tokio::test]
    async fn next_returns_none_after_close() {
        let cell = StateCell::new(0);
        let mut updates = cell.subscribe();
        cell.set(1);
        drop(cell);

        assert_eq!(updates.next().await, Some(1));
        assert_eq!(updates.next().await, None);
    }

    #[tokio::test]
    async fn into_stream_yields_updates_in_order() {
        let cell = StateCell::new(0);
        let updates = cell.subscribe().into_stream();

        cell.set(1);
        cell.set(2);
        cell.set(3);
        drop(cell);

        let collected: Vec<i32> = updates.collect().await;
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn into_stream_skips_lag_and_yields_the_surviving_tail() {
        let cell = StateCell::with_config(0, StoreConfig { update_buffer: 2 });
        let updates = cell.subscribe().into_stream();

        for n in 1..=5 {
            cell.set(n);
        }
        drop(cell);

        // Buffer of two: the oldest three updates are dropped; the adapter
        // swallows the lag and resumes with what is still buffered.
        let collected: Vec<i32> = updates.collect().await;
        assert_eq!(collected, vec![4, 5]);
    }

    #[test]
    fn recv_is_pending_until_an_update_is_published() {
        let cell = StateCell::new(0);
        let mut updates = cell.subscribe();

        let mut recv = tokio_test::task::spawn(updates.recv());
        tokio_test::assert_pending!(recv.poll());

        cell.set(1);
        assert!(recv.is_woken());
        tokio_test::assert_ready_eq!(recv.poll(), Ok(1));
    }
}
