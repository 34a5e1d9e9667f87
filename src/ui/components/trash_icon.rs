//! Drag-to-delete affordance overlay.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Trash icon shown while a block drag is in progress. Hidden by default;
/// `flyout_only` centers it over the flyout half of the area instead of the
/// whole surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolboxTrashIcon {
    pub visible: bool,
    pub flyout_only: bool,
}

impl ToolboxTrashIcon {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        if !self.visible || area.height == 0 {
            return;
        }
        let target = if self.flyout_only {
            Rect {
                x: area.x + area.width / 4,
                width: area.width / 2,
                ..area
            }
        } else {
            area
        };
        let icon = Paragraph::new(Line::from("🗑"))
            .style(Style::default().fg(Color::Red))
            .centered();
        let row = Rect {
            y: target.y + target.height.saturating_sub(1) / 2,
            height: 1,
            ..target
        };
        f.render_widget(icon, row);
    }
}
