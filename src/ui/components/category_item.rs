//! Input routing for one category row.
//!
//! A category item never mutates state itself: clicks and key presses are
//! translated into [`Action`]s that the owning toolbox applies. It also
//! composes its tree row plus nested children group for rendering.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Line;

use crate::config::ToolboxOptions;
use crate::icons::IconService;
use crate::model::Category;
use crate::ui::components::tree::{TreeGroup, TreeItem};
use crate::ui::components::tree_row::TreeRow;
use crate::ui::core::Action;

/// Input facts the routing depends on, injected by the toolbox.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputContext {
    pub rtl: bool,
    /// Externally owned accessible-navigation mode: tree traversal switches
    /// to W/A/S/D while active, and stray keys stop routing to search.
    pub accessible_navigation: bool,
}

pub struct CategoryItem<'a> {
    pub category: &'a Category,
    /// Position in the flat navigation order.
    pub index: usize,
    pub children_visible: bool,
}

impl<'a> CategoryItem<'a> {
    #[must_use]
    pub fn new(category: &'a Category, index: usize) -> Self {
        Self {
            category,
            index,
            children_visible: false,
        }
    }

    /// Mouse click activates the row regardless of modifiers. The caller
    /// stops propagation so a parent row's handler never also fires.
    #[must_use]
    pub fn handle_click(&self) -> Action {
        Action::ActivateCategory {
            index: self.index,
            force: false,
        }
    }

    /// Translate a key press into a navigation intent.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent, ctx: &InputContext) -> Action {
        let code = key.code;
        if self.is_down(code, ctx) {
            return Action::NextItem;
        }
        if self.is_up(code, ctx) {
            return Action::PreviousItem;
        }
        if self.is_toward_flyout(code, ctx) {
            return Action::MoveFocusToFlyout;
        }
        match code {
            KeyCode::Esc => Action::CloseFlyout,
            KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateCategory {
                index: self.index,
                force: false,
            },
            // Swallowed: no default tab navigation, bare modifiers do nothing
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Modifier(_) => Action::None,
            KeyCode::Left | KeyCode::Right => Action::None,
            _ if ctx.accessible_navigation => Action::None,
            // Anything else starts a search
            _ => Action::FocusSearch,
        }
    }

    fn is_down(&self, code: KeyCode, ctx: &InputContext) -> bool {
        if ctx.accessible_navigation {
            matches!(code, KeyCode::Char('s') | KeyCode::Char('S'))
        } else {
            code == KeyCode::Down
        }
    }

    fn is_up(&self, code: KeyCode, ctx: &InputContext) -> bool {
        if ctx.accessible_navigation {
            matches!(code, KeyCode::Char('w') | KeyCode::Char('W'))
        } else {
            code == KeyCode::Up
        }
    }

    /// The arrow pointing at the flyout content: right in LTR, left in RTL.
    fn is_toward_flyout(&self, code: KeyCode, ctx: &InputContext) -> bool {
        let (toward, toward_accessible) = if ctx.rtl {
            (KeyCode::Left, 'a')
        } else {
            (KeyCode::Right, 'd')
        };
        if ctx.accessible_navigation {
            matches!(code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&toward_accessible))
        } else {
            code == toward
        }
    }

    /// Compose the row and its nested children for the tree.
    #[must_use]
    pub fn tree_item(
        &self,
        selected_id: Option<&str>,
        hovered: bool,
        options: &ToolboxOptions,
        icons: &IconService,
    ) -> TreeItem {
        let row = TreeRow {
            category: self.category,
            selected: selected_id == Some(self.category.selection_id().as_str()),
            hovered,
            indented: self.category.subns.is_some(),
            options,
        };
        let children: Vec<Line<'static>> = self
            .category
            .subcategories
            .iter()
            .map(|sub| {
                TreeRow {
                    category: sub,
                    selected: selected_id == Some(sub.selection_id().as_str()),
                    hovered: false,
                    indented: true,
                    options,
                }
                .line(icons)
            })
            .collect();
        TreeItem {
            row: row.line(icons),
            children: TreeGroup {
                visible: self.children_visible,
                rows: children,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item(category: &Category) -> CategoryItem<'_> {
        CategoryItem::new(category, 3)
    }

    #[test]
    fn test_arrows_move_focus() {
        let cat = Category::new("loops");
        let ctx = InputContext::default();
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Down), &ctx), Action::NextItem));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Up), &ctx), Action::PreviousItem));
    }

    #[test]
    fn test_content_arrow_respects_rtl() {
        let cat = Category::new("loops");
        let ltr = InputContext::default();
        assert!(matches!(
            item(&cat).handle_key(key(KeyCode::Right), &ltr),
            Action::MoveFocusToFlyout
        ));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Left), &ltr), Action::None));

        let rtl = InputContext { rtl: true, ..Default::default() };
        assert!(matches!(
            item(&cat).handle_key(key(KeyCode::Left), &rtl),
            Action::MoveFocusToFlyout
        ));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Right), &rtl), Action::None));
    }

    #[test]
    fn test_accessible_mode_uses_wasd() {
        let cat = Category::new("loops");
        let ctx = InputContext {
            accessible_navigation: true,
            ..Default::default()
        };
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Char('s')), &ctx), Action::NextItem));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Char('w')), &ctx), Action::PreviousItem));
        assert!(matches!(
            item(&cat).handle_key(key(KeyCode::Char('d')), &ctx),
            Action::MoveFocusToFlyout
        ));
        // Arrows are not the navigation keys in this mode, and stray keys
        // must not steal focus into search
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Down), &ctx), Action::None));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Char('z')), &ctx), Action::None));
    }

    #[test]
    fn test_enter_and_space_activate_like_a_click() {
        let cat = Category::new("loops");
        let ctx = InputContext::default();
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            match item(&cat).handle_key(key(code), &ctx) {
                Action::ActivateCategory { index, force } => {
                    assert_eq!(index, 3);
                    assert!(!force);
                }
                other => panic!("unexpected action: {other:?}"),
            }
        }
    }

    #[test]
    fn test_tab_and_escape_routing() {
        let cat = Category::new("loops");
        let ctx = InputContext::default();
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Tab), &ctx), Action::None));
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Esc), &ctx), Action::CloseFlyout));
    }

    #[test]
    fn test_other_keys_route_to_search() {
        let cat = Category::new("loops");
        let ctx = InputContext::default();
        assert!(matches!(item(&cat).handle_key(key(KeyCode::Char('l')), &ctx), Action::FocusSearch));
    }

    #[test]
    fn test_click_activates_without_force() {
        let cat = Category::new("loops");
        match item(&cat).handle_click() {
            Action::ActivateCategory { index: 3, force: false } => {}
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
