// ── Subscription errors ──
//
// Consumers only ever see delivery-side failures: the container dropping
// its updates for a slow subscriber, or the container going away entirely.

use thiserror::Error;

/// Error returned by [`StateStream::recv`](crate::StateStream::recv).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecvError {
    /// The subscriber fell behind the update buffer and the oldest pending
    /// updates were dropped. This is the documented backpressure policy,
    /// not a bug: the writer never blocks on a slow consumer. The next
    /// `recv()` resumes from the oldest update still buffered.
    #[error("subscriber fell behind; {skipped} state updates were dropped")]
    Lagged {
        /// Number of updates this subscriber missed.
        skipped: u64,
    },

    /// The state container was dropped; no further updates will arrive.
    #[error("state container dropped; no further updates will be delivered")]
    Closed,
}
