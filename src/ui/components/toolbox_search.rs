//! Debounced search box above the tree.
//!
//! Input edits arm a trailing-edge debounce timer; a keystroke burst shorter
//! than the window yields exactly one query, carrying the text present at
//! the last keystroke. The owning surface polls `take_due_query` each tick
//! and hands the query to the background search manager.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use tokio::time::{Duration, Instant};

use crate::constants::SEARCH_CATEGORY_ID;
use crate::icons::IconService;
use crate::model::Category;
use crate::ui::core::Action;

pub struct ToolboxSearch {
    input: String,
    focused: bool,
    announcement: Option<String>,
    debounce: Duration,
    deadline: Option<Instant>,
}

impl ToolboxSearch {
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            input: String::new(),
            focused: false,
            announcement: None,
            debounce: Duration::from_millis(debounce_ms),
            deadline: None,
        }
    }

    /// The synthetic category representing search results in the tree.
    #[must_use]
    pub fn search_tree_row(icons: &IconService) -> Category {
        let mut row = Category::new(SEARCH_CATEGORY_ID);
        row.name = Some("Search".to_string());
        row.color = Some(icons.namespace_color(SEARCH_CATEGORY_ID).to_string());
        row.icon = Some(icons.namespace_icon(SEARCH_CATEGORY_ID).to_string());
        row
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Down jumps to the first navigable category without waiting for
            // the pending query.
            KeyCode::Down => {
                self.blur();
                Action::SelectFirstItem
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.arm();
                Action::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.arm();
                Action::None
            }
            // Enter skips the remaining debounce window
            KeyCode::Enter => {
                self.deadline = Some(Instant::now());
                Action::None
            }
            _ => Action::None,
        }
    }

    fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.debounce);
    }

    /// Trailing-edge debounce: returns the query once the window has elapsed
    /// with no further edits, then disarms until the next edit.
    pub fn take_due_query(&mut self) -> Option<String> {
        let deadline = self.deadline?;
        if Instant::now() < deadline {
            return None;
        }
        self.deadline = None;
        Some(self.input.clone())
    }

    /// Record a query resolution for the result-count announcement.
    pub fn note_results(&mut self, query: &str, count: usize) {
        self.announcement = Some(if count == 0 {
            "No search results...".to_string()
        } else {
            format!("{} result matching '{}'", count, query.to_lowercase())
        });
    }

    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, icons: &IconService) {
        let border_color = if self.focused { Color::Yellow } else { Color::DarkGray };
        let glyph = icons.namespace_icon(SEARCH_CATEGORY_ID);
        let content = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                format!("{glyph} Search..."),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw(format!("{glyph} ")),
                Span::styled(self.input.clone(), Style::default().fg(Color::White)),
            ])
        };
        let search_box = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(search_box, rect);
    }
}
