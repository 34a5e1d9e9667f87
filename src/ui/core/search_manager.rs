//! Background search execution.
//!
//! Each debounced query is spawned as a tokio task against the host's block
//! index; the resolution comes back as an [`Action`] over an unbounded
//! channel drained by the surface each tick. Queries carry a monotonically
//! increasing sequence number so the toolbox can discard stale replies when
//! overlapping queries resolve out of order. In-flight queries are never
//! aborted; the debounce window upstream already coalesces bursts.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::actions::Action;
use crate::host::EditorHost;

pub struct SearchManager {
    host: Arc<dyn EditorHost>,
    next_seq: u64,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl SearchManager {
    pub fn new(host: Arc<dyn EditorHost>) -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                host,
                next_seq: 1,
                action_tx: tx,
            },
            rx,
        )
    }

    /// Number of the most recently issued query; 0 before any query.
    #[must_use]
    pub fn last_issued_seq(&self) -> u64 {
        self.next_seq - 1
    }

    /// Spawn one query against the host index. A rejected search is logged
    /// and delivered as zero results so the UI never hangs on a failure.
    pub fn spawn_query(&mut self, query: String) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let host = Arc::clone(&self.host);
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let results = match host.search(&query).await {
                Ok(results) => results,
                Err(e) => {
                    log::warn!("search query {seq} ({query:?}) failed: {e}");
                    Vec::new()
                }
            };
            let _ = action_tx.send(Action::SearchCompleted { seq, query, results });
        });
        seq
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::model::BlockDescriptor;

    #[tokio::test]
    async fn test_query_resolves_with_matching_blocks() {
        let host = Arc::new(RecordingHost::default());
        host.canned_results.lock().unwrap().extend([
            BlockDescriptor::new("repeat loop"),
            BlockDescriptor::new("while loop"),
            BlockDescriptor::new("show number"),
        ]);

        let (mut manager, mut rx) = SearchManager::new(host);
        let seq = manager.spawn_query("loop".to_string());

        match rx.recv().await {
            Some(Action::SearchCompleted { seq: got, query, results }) => {
                assert_eq!(got, seq);
                assert_eq!(query, "loop");
                assert_eq!(results.len(), 2);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_query_delivers_zero_results() {
        let host = Arc::new(RecordingHost::default());
        host.fail_search.store(true, Ordering::SeqCst);

        let (mut manager, mut rx) = SearchManager::new(host);
        manager.spawn_query("anything".to_string());

        match rx.recv().await {
            Some(Action::SearchCompleted { results, .. }) => assert!(results.is_empty()),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sequence_numbers_increase_per_query() {
        let host = Arc::new(RecordingHost::default());
        let (mut manager, _rx) = SearchManager::new(host);
        assert_eq!(manager.last_issued_seq(), 0);
        let a = manager.spawn_query("a".to_string());
        let b = manager.spawn_query("b".to_string());
        assert!(b > a);
        assert_eq!(manager.last_issued_seq(), b);
    }
}
