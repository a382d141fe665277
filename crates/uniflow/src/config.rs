// ── Store configuration ──

/// Default capacity of the per-subscriber update buffer.
pub const DEFAULT_UPDATE_BUFFER: usize = 64;

/// Tuning knobs for a [`StateCell`](crate::StateCell).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Capacity of the broadcast buffer behind each subscription.
    ///
    /// A subscriber that falls more than this many updates behind has its
    /// oldest pending updates dropped (surfaced as
    /// [`RecvError::Lagged`](crate::RecvError::Lagged)); the writer never
    /// blocks. A value of zero is rounded up to one.
    pub update_buffer: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            update_buffer: DEFAULT_UPDATE_BUFFER,
        }
    }
}
