//! Visual affordance for one category row.
//!
//! Pure mapping from category metadata to a styled line: border/background
//! from the declared color (or the namespace default), with inverted and
//! colored scheme variants. Hover only fades the background in inverted mode.

use std::time::Duration;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::config::ToolboxOptions;
use crate::constants::{ANIMATION_BASE_DELAY, ANIMATION_STEP_DELAY};
use crate::icons::IconService;
use crate::model::Category;
use crate::utils::color::{fade, to_terminal_color};

/// Entrance-animation delay for a top-level row: rows appear sequentially,
/// staggered by their position.
#[must_use]
pub fn entrance_delay(top_row_index: usize) -> Duration {
    ANIMATION_BASE_DELAY + ANIMATION_STEP_DELAY * top_row_index as u32
}

pub struct TreeRow<'a> {
    pub category: &'a Category,
    pub selected: bool,
    pub hovered: bool,
    /// Subcategory rows indent under their parent.
    pub indented: bool,
    pub options: &'a ToolboxOptions,
}

impl TreeRow<'_> {
    /// Effective row color: declared metadata, else the namespace default.
    #[must_use]
    pub fn meta_color(&self, icons: &IconService) -> String {
        self.category
            .color
            .clone()
            .unwrap_or_else(|| icons.namespace_color(&self.category.id).to_string())
    }

    #[must_use]
    pub fn style(&self, icons: &IconService) -> Style {
        let meta = self.meta_color(icons);
        if self.options.inverted {
            // Inverted palette: color is the background; hover and selection
            // fade it toward white.
            let bg = if self.selected || self.hovered {
                fade(&meta, self.options.inverted_fade, false)
            } else {
                meta
            };
            return Style::default().bg(to_terminal_color(&bg)).fg(Color::White);
        }
        if self.selected {
            return Style::default().bg(to_terminal_color(&meta)).fg(Color::White);
        }
        if self.options.colored {
            return Style::default().fg(to_terminal_color(&meta));
        }
        Style::default().fg(Color::White)
    }

    fn icon_glyph(&self, icons: &IconService) -> String {
        if self.category.subns.is_some() {
            return icons.namespace_icon("more").to_string();
        }
        self.category
            .icon
            .clone()
            .unwrap_or_else(|| icons.namespace_icon(&self.category.id).to_string())
    }

    /// Compose the row line. The colored border marker sits on the content
    /// side: leading in LTR, trailing in RTL.
    #[must_use]
    pub fn line(&self, icons: &IconService) -> Line<'static> {
        let meta = self.meta_color(icons);
        let marker_style = Style::default().fg(to_terminal_color(&meta));
        let style = self.style(icons);

        let indent = if self.indented { "  " } else { "" };
        let body = Span::styled(
            format!("{indent}{} {}", self.icon_glyph(icons), self.category.row_title()),
            style,
        );

        let spans = if self.options.rtl {
            vec![body, Span::styled("▐", marker_style)]
        } else {
            vec![Span::styled("▌", marker_style), body]
        };
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ToolboxOptions {
        ToolboxOptions::default()
    }

    fn row<'a>(category: &'a Category, options: &'a ToolboxOptions) -> TreeRow<'a> {
        TreeRow {
            category,
            selected: false,
            hovered: false,
            indented: false,
            options,
        }
    }

    #[test]
    fn test_meta_color_prefers_declared_color() {
        let icons = IconService::default();
        let mut cat = Category::new("loops");
        assert_eq!(row(&cat, &options()).meta_color(&icons), "#107c10");

        cat.color = Some("#123456".to_string());
        assert_eq!(row(&cat, &options()).meta_color(&icons), "#123456");
    }

    #[test]
    fn test_selected_row_takes_color_as_background() {
        let icons = IconService::default();
        let cat = Category::new("loops");
        let opts = options();
        let mut r = row(&cat, &opts);
        r.selected = true;
        let style = r.style(&icons);
        assert_eq!(style.bg, Some(to_terminal_color("#107c10")));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn test_hover_only_fades_in_inverted_mode() {
        let icons = IconService::default();
        let cat = Category::new("loops");

        let mut plain = options();
        plain.inverted = false;
        let mut r = row(&cat, &plain);
        r.hovered = true;
        // Colored (non-inverted) hover leaves the style alone
        assert_eq!(r.style(&icons).bg, None);

        let mut inverted = options();
        inverted.inverted = true;
        let mut r = row(&cat, &inverted);
        r.hovered = true;
        let faded = fade("#107c10", inverted.inverted_fade, false);
        assert_eq!(r.style(&icons).bg, Some(to_terminal_color(&faded)));
    }

    #[test]
    fn test_rtl_moves_border_marker_to_the_end() {
        let icons = IconService::default();
        let cat = Category::new("loops");
        let mut opts = options();

        let line = row(&cat, &opts).line(&icons);
        assert_eq!(line.spans[0].content, "▌");

        opts.rtl = true;
        let line = row(&cat, &opts).line(&icons);
        assert_eq!(line.spans.last().unwrap().content, "▐");
    }

    #[test]
    fn test_entrance_delay_staggers_by_row_index() {
        assert_eq!(entrance_delay(0), ANIMATION_BASE_DELAY);
        assert_eq!(
            entrance_delay(3),
            ANIMATION_BASE_DELAY + ANIMATION_STEP_DELAY * 3
        );
    }
}
