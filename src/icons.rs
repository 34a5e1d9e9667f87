//! Icon and color defaults for well-known palette namespaces.
//!
//! Categories without declared icon/color metadata are defaulted silently
//! from these tables, never treated as an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::constants::DEFAULT_CATEGORY_COLOR;

static NAMESPACE_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("loops", "#107c10"),
        ("logic", "#006970"),
        ("variables", "#a80000"),
        ("math", "#712f9e"),
        ("functions", "#005a9e"),
        ("arrays", "#e2008a"),
        ("text", "#996600"),
        ("addpackage", "#717171"),
        ("search", "#000000"),
        ("topblocks", "#cb0fa0"),
        ("advanced", "#3c3c3c"),
    ])
});

/// Glyph rendering theme for the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconTheme {
    #[default]
    Unicode,
    Ascii,
}

/// Resolves per-namespace icon glyphs and default colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.theme
    }

    /// Default color for a namespace, falling back to the palette default.
    #[must_use]
    pub fn namespace_color(&self, id: &str) -> &'static str {
        NAMESPACE_COLORS
            .get(id)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }

    /// Icon glyph for a namespace. Unknown namespaces get the default glyph.
    #[must_use]
    pub fn namespace_icon(&self, id: &str) -> &'static str {
        match self.theme {
            IconTheme::Unicode => match id {
                "search" => "⌕",
                "more" => "⋯",
                "loops" => "↻",
                "logic" => "≠",
                "variables" => "𝑥",
                "math" => "∑",
                "functions" => "ƒ",
                "arrays" => "▤",
                "text" => "¶",
                "addpackage" => "+",
                "advancedcollapsed" => "▸",
                "advancedexpanded" => "▾",
                _ => "◆",
            },
            IconTheme::Ascii => match id {
                "search" => "?",
                "more" => "...",
                "addpackage" => "+",
                "advancedcollapsed" => ">",
                "advancedexpanded" => "v",
                _ => "*",
            },
        }
    }
}
