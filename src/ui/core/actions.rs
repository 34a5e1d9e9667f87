use crate::model::{AdvancedBucket, BlockDescriptor};

/// Navigation intents and background results flowing between the components
/// and the root toolbox controller.
#[derive(Debug, Clone)]
pub enum Action {
    // Tree navigation
    ActivateCategory { index: usize, force: bool },
    NextItem,
    PreviousItem,
    SelectFirstItem,
    MoveFocusToFlyout,
    CloseFlyout,
    FocusSearch,

    // Advanced buckets
    ToggleBucket(AdvancedBucket),

    // Search resolution (already debounced; seq guards against stale replies)
    SearchCompleted {
        seq: u64,
        query: String,
        results: Vec<BlockDescriptor>,
    },

    // Toolbox state
    RecoverToolbox,

    // App control
    Quit,
    None,
}
