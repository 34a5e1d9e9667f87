//! Application constants and default values.

use std::time::Duration;

/// Trailing-edge debounce window for the search box.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Delay before the first top-level row appears when the entrance animation
/// runs.
pub const ANIMATION_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Additional stagger per top-level row.
pub const ANIMATION_STEP_DELAY: Duration = Duration::from_millis(150);

/// Background fade multiplier for hovered/selected rows in inverted mode.
pub const INVERTED_FADE_MULTIPLIER: f32 = 0.3;

/// Fallback color for categories without declared color metadata.
pub const DEFAULT_CATEGORY_COLOR: &str = "#4180ff";

/// Synthetic category id used for the search results row.
pub const SEARCH_CATEGORY_ID: &str = "search";

/// Template written on first run so the generated config file documents
/// itself.
pub const CONFIG_GENERATED: &str = r#"# blockpalette configuration
# This file was generated with default values. Uncomment and edit as needed.

[ui]
# Enable mouse support
# mouse_enabled = true
# Toolbox pane width in columns
# toolbox_width = 32

[toolbox]
# Inverted palette: rows take their category color as background
# inverted = false
# Colored palette: rows take their category color as foreground
# colored = true
# Background fade multiplier applied to hovered/selected rows in inverted mode
# inverted_fade = 0.3
# Right-to-left layout (flips the flyout focus arrow)
# rtl = false
# Staggered entrance animation on first show
# animate = true
# Show the search box above the tree
# show_search_box = true
# Trailing-edge debounce window for search input, in milliseconds
# search_debounce_ms = 300

[logging]
# Write a log file under the platform cache directory
# enabled = false
"#;
