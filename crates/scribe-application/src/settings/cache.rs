use scribe_core::error::Result;
use scribe_core::settings::{SettingsApi, SettingsSnapshot};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Client-side cache of the last fetched [`SettingsSnapshot`].
///
/// The snapshot is published as a whole `Arc` on a watch channel and is
/// replaced, never mutated, so readers always see a consistent snapshot.
///
/// Overlapping refreshes collapse: every refresh takes a ticket when it
/// starts, and a finished fetch is published only if no later-started fetch
/// has been published already.
pub struct SnapshotCache {
    api: Arc<dyn SettingsApi>,
    snapshot: watch::Sender<Option<Arc<SettingsSnapshot>>>,
    next_ticket: AtomicU64,
    published_ticket: Mutex<u64>,
    in_flight: AtomicUsize,
}

impl SnapshotCache {
    /// Creates an empty cache backed by `api`.
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        let (snapshot, _) = watch::channel(None);
        Self {
            api,
            snapshot,
            next_ticket: AtomicU64::new(0),
            published_ticket: Mutex::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Returns the most recently published snapshot, if any.
    pub fn current(&self) -> Option<Arc<SettingsSnapshot>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribes to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<SettingsSnapshot>>> {
        self.snapshot.subscribe()
    }

    /// Whether any fetch is currently running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Marks the cached snapshot stale and refetches it.
    ///
    /// Failures are logged and leave the previous snapshot in place.
    pub async fn invalidate(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!("[SnapshotCache] Refetch after invalidate failed: {}", e);
        }
    }

    /// Fetches the settings and publishes them.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: this fetch was published
    /// - `Ok(false)`: a later-started fetch was already published
    /// - `Err(_)`: the fetch failed; the cache is unchanged
    pub async fn refresh(&self) -> Result<bool> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("[SnapshotCache] Fetching settings (ticket {})", ticket);

        let fetched = {
            let _loading = InFlightGuard::enter(&self.in_flight);
            self.api.get_settings().await
        }?;

        let mut published = match self.published_ticket.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if ticket <= *published {
            tracing::debug!(
                "[SnapshotCache] Dropping ticket {}; ticket {} already published",
                ticket,
                *published
            );
            return Ok(false);
        }
        *published = ticket;
        self.snapshot.send_replace(fetched.map(Arc::new));
        tracing::debug!("[SnapshotCache] Published ticket {}", ticket);

        Ok(true)
    }
}

/// Counts one running fetch; released on drop so a cancelled fetch is not
/// reported as loading forever.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self { in_flight }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scribe_core::error::ScribeError;
    use scribe_core::settings::{ProfileInfoPatch, SocialLinksPatch, UserInfo, UserInfoPatch};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    /// Answers each fetch from a queue of pending replies.
    struct ScriptedApi {
        replies: Mutex<VecDeque<oneshot::Receiver<Result<Option<SettingsSnapshot>>>>>,
    }

    #[async_trait]
    impl SettingsApi for ScriptedApi {
        async fn get_settings(&self) -> Result<Option<SettingsSnapshot>> {
            let reply = self.replies.lock().unwrap().pop_front().unwrap();
            reply.await.unwrap()
        }

        async fn update_user(&self, _patch: &UserInfoPatch) -> Result<()> {
            Ok(())
        }

        async fn update_profile(&self, _patch: &ProfileInfoPatch) -> Result<()> {
            Ok(())
        }

        async fn update_social(&self, _patch: &SocialLinksPatch) -> Result<()> {
            Ok(())
        }
    }

    fn snapshot(username: &str) -> SettingsSnapshot {
        SettingsSnapshot {
            user: UserInfo {
                username: username.to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    type Reply = oneshot::Sender<Result<Option<SettingsSnapshot>>>;

    fn scripted(count: usize) -> (Arc<ScriptedApi>, Vec<Reply>) {
        let mut senders = Vec::new();
        let mut receivers = VecDeque::new();
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }
        (
            Arc::new(ScriptedApi {
                replies: Mutex::new(receivers),
            }),
            senders,
        )
    }

    #[tokio::test]
    async fn test_refresh_publishes_snapshot() {
        let (api, mut senders) = scripted(1);
        let cache = SnapshotCache::new(api);
        assert!(cache.current().is_none());

        senders.remove(0).send(Ok(Some(snapshot("alice")))).unwrap();
        assert!(cache.refresh().await.unwrap());

        assert_eq!(cache.current().unwrap().user.username, "alice");
        assert!(!cache.is_loading());
    }

    #[tokio::test]
    async fn test_latest_started_fetch_wins() {
        let (api, mut senders) = scripted(2);
        let cache = SnapshotCache::new(api);

        let first = cache.refresh();
        let second = cache.refresh();
        let second_tx = senders.pop().unwrap();
        let first_tx = senders.pop().unwrap();

        let (first_result, second_result) = tokio::join!(first, async {
            // The later fetch completes before the earlier one.
            second_tx.send(Ok(Some(snapshot("newer")))).unwrap();
            let published = second.await;
            first_tx.send(Ok(Some(snapshot("older")))).unwrap();
            published
        });

        assert!(second_result.unwrap());
        assert!(!first_result.unwrap());
        assert_eq!(cache.current().unwrap().user.username, "newer");
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_snapshot() {
        let (api, mut senders) = scripted(2);
        let cache = SnapshotCache::new(api);

        senders.remove(0).send(Ok(Some(snapshot("alice")))).unwrap();
        cache.refresh().await.unwrap();

        senders
            .remove(0)
            .send(Err(ScribeError::network("connection reset")))
            .unwrap();
        cache.invalidate().await;

        assert_eq!(cache.current().unwrap().user.username, "alice");
    }

    #[tokio::test]
    async fn test_subscribers_see_replacement() {
        let (api, mut senders) = scripted(1);
        let cache = SnapshotCache::new(api);
        let mut rx = cache.subscribe();
        assert!(!rx.has_changed().unwrap());

        senders.remove(0).send(Ok(Some(snapshot("alice")))).unwrap();
        cache.refresh().await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().as_ref().unwrap().user.username,
            "alice"
        );
    }

    #[tokio::test]
    async fn test_cancelled_fetch_stops_loading() {
        let (api, _senders) = scripted(1);
        let cache = SnapshotCache::new(api);

        {
            let pending = cache.refresh();
            tokio::pin!(pending);
            tokio::select! {
                biased;
                _ = &mut pending => panic!("fetch resolved without a reply"),
                _ = tokio::task::yield_now() => {}
            }
            assert!(cache.is_loading());
        }

        assert!(!cache.is_loading());
        assert!(cache.current().is_none());
    }
}
