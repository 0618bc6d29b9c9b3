use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::watch;

/// Aggregate "saving" state across independent update requests.
///
/// Counts outstanding operations. The indicator is on while the count is
/// above zero. Observers can watch the on/off transitions through
/// [`SavingIndicator::subscribe`].
#[derive(Clone)]
pub struct SavingIndicator {
    inner: Arc<Inner>,
}

struct Inner {
    outstanding: AtomicUsize,
    state: watch::Sender<bool>,
}

impl Inner {
    /// Re-derives the flag from the counter under the channel's lock, so the
    /// last publisher always observes the latest count.
    fn publish(&self) {
        self.state.send_if_modified(|current| {
            let saving = self.outstanding.load(Ordering::SeqCst) > 0;
            if *current == saving {
                return false;
            }
            *current = saving;
            true
        });
    }
}

impl SavingIndicator {
    pub fn new() -> Self {
        let (state, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                outstanding: AtomicUsize::new(0),
                state,
            }),
        }
    }

    /// Registers one dispatched operation.
    ///
    /// The operation counts as outstanding until the returned guard is
    /// dropped.
    pub fn begin(&self) -> SavingGuard {
        self.inner.outstanding.fetch_add(1, Ordering::SeqCst);
        self.inner.publish();
        SavingGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.outstanding() > 0
    }

    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.state.subscribe()
    }
}

impl Default for SavingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks one operation as settled when dropped.
pub struct SavingGuard {
    inner: Arc<Inner>,
}

impl Drop for SavingGuard {
    fn drop(&mut self) {
        self.inner.outstanding.fetch_sub(1, Ordering::SeqCst);
        self.inner.publish();
    }
}
