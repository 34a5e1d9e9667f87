//! Structural tree leaves: item wrapper, collapsible child group, and the
//! separator drawn above each advanced bucket.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// One tree entry: a row plus its (possibly hidden) child group.
pub struct TreeItem {
    pub row: Line<'static>,
    pub children: TreeGroup,
}

impl TreeItem {
    #[must_use]
    pub fn leaf(row: Line<'static>) -> Self {
        Self {
            row,
            children: TreeGroup::default(),
        }
    }

    /// Flatten into display order: the row, then children while visible.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let mut lines = vec![self.row];
        lines.extend(self.children.into_lines());
        lines
    }
}

/// Nested subcategory rows, rendered only while the parent is expanded.
#[derive(Default)]
pub struct TreeGroup {
    pub visible: bool,
    pub rows: Vec<Line<'static>>,
}

impl TreeGroup {
    #[must_use]
    pub fn into_lines(self) -> Vec<Line<'static>> {
        if self.visible {
            self.rows
        } else {
            Vec::new()
        }
    }
}

/// Horizontal rule between the main tree and an advanced bucket.
pub struct TreeSeparator;

impl TreeSeparator {
    #[must_use]
    pub fn line(width: u16) -> Line<'static> {
        Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(Color::DarkGray),
        ))
    }
}
