//! Host editor collaborator seam.
//!
//! The toolbox never renders flyout content or owns the block index; it calls
//! back into the editor surface through this trait. Flyout calls are
//! fire-and-forget; only the search is asynchronous.

use async_trait::async_trait;

use crate::model::{BlockDescriptor, Category};

/// Errors surfaced by the host collaborator. An empty search result is a
/// normal resolution, never an error.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("search index unavailable: {0}")]
    SearchUnavailable(String),

    #[error("host error: {0}")]
    Other(String),
}

/// The editor surface that owns the flyout and the block search index.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Open (or refresh) the content panel for a category.
    fn show_flyout(&self, category: &Category);

    /// Hide the content panel.
    fn close_flyout(&self);

    /// Move keyboard focus into the open content panel.
    fn move_focus_to_flyout(&self);

    /// Toolbox layout height changed; the host re-flows around it.
    fn resize(&self);

    /// Resolve a free-text query against the block index.
    async fn search(&self, query: &str) -> Result<Vec<BlockDescriptor>, HostError>;

    /// Whether the editor's accessible navigation mode is active, switching
    /// tree traversal to the W/A/S/D bindings.
    fn accessible_navigation(&self) -> bool {
        false
    }

    /// Session flag: has the entrance animation already played once?
    fn toolbox_animation_shown(&self) -> bool {
        false
    }

    /// Record that the entrance animation has played this session.
    fn set_toolbox_animation_shown(&self) {}
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fake host shared by the component tests.

    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::{EditorHost, HostError};
    use crate::model::{BlockDescriptor, Category};

    #[derive(Debug, Clone, PartialEq)]
    pub enum HostCall {
        ShowFlyout(String),
        CloseFlyout,
        MoveFocusToFlyout,
        Resize,
    }

    #[derive(Default)]
    pub struct RecordingHost {
        pub calls: Mutex<Vec<HostCall>>,
        pub canned_results: Mutex<Vec<BlockDescriptor>>,
        pub fail_search: AtomicBool,
        pub animation_shown: AtomicBool,
    }

    impl RecordingHost {
        pub fn calls(&self) -> Vec<HostCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Calls recorded so far, dropping resize notifications, which are
        /// incidental to most assertions.
        pub fn flyout_calls(&self) -> Vec<HostCall> {
            self.calls()
                .into_iter()
                .filter(|c| !matches!(c, HostCall::Resize))
                .collect()
        }

        pub fn clear_calls(&self) {
            self.calls.lock().unwrap().clear();
        }
    }

    #[async_trait]
    impl EditorHost for RecordingHost {
        fn show_flyout(&self, category: &Category) {
            self.calls
                .lock()
                .unwrap()
                .push(HostCall::ShowFlyout(category.selection_id()));
        }

        fn close_flyout(&self) {
            self.calls.lock().unwrap().push(HostCall::CloseFlyout);
        }

        fn move_focus_to_flyout(&self) {
            self.calls.lock().unwrap().push(HostCall::MoveFocusToFlyout);
        }

        fn resize(&self) {
            self.calls.lock().unwrap().push(HostCall::Resize);
        }

        async fn search(&self, query: &str) -> Result<Vec<BlockDescriptor>, HostError> {
            if self.fail_search.load(Ordering::SeqCst) {
                return Err(HostError::SearchUnavailable("index offline".to_string()));
            }
            let all = self.canned_results.lock().unwrap().clone();
            Ok(all
                .into_iter()
                .filter(|b| b.name.to_lowercase().contains(&query.to_lowercase()))
                .collect())
        }

        fn toolbox_animation_shown(&self) -> bool {
            self.animation_shown.load(Ordering::SeqCst)
        }

        fn set_toolbox_animation_shown(&self) {
            self.animation_shown.store(true, Ordering::SeqCst);
        }
    }
}
