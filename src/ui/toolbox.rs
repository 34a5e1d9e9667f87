//! Root toolbox controller.
//!
//! Owns the category list, the selection/expansion state machine, the ten
//! advanced overflow buckets, search state, and entrance-animation
//! sequencing. All flyout work is delegated to the [`EditorHost`]
//! collaborator; a rendering fault in any descendant is caught here and
//! surfaced as a recoverable crash banner.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::config::ToolboxOptions;
use crate::constants::SEARCH_CATEGORY_ID;
use crate::host::EditorHost;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::model::{AdvancedBucket, AdvancedVisibility, BlockDescriptor, Category};
use crate::ui::components::tree::TreeSeparator;
use crate::ui::components::tree_row::entrance_delay;
use crate::ui::components::{CategoryItem, InputContext, ToolboxSearch};
use crate::ui::core::{Action, Component, SearchManager};
use crate::utils::color::to_terminal_color;

/// Top-level toolbox states. Selection and search-active are orthogonal
/// flags inside `Ready`, not separate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolboxState {
    Hidden,
    Loading,
    /// Terminal until `recover_toolbox`.
    Error,
    Ready,
}

/// What one rendered tree line maps back to for mouse dispatch.
#[derive(Debug, Clone)]
enum RowTarget {
    /// Index into the flat navigation order.
    Flat(usize),
    /// Advanced rows render outside the flat order; carry the category.
    Advanced(Box<Category>),
    BucketHeader(AdvancedBucket),
    Inert,
}

pub struct Toolbox {
    host: Arc<dyn EditorHost>,
    options: ToolboxOptions,
    icons: IconService,
    logger: Logger,

    state: ToolboxState,
    categories: Vec<Category>,

    // Selection state machine
    selected_id: Option<String>,
    expanded_id: Option<String>,
    focused_index: usize,
    selected_row: Option<Category>,
    visible_order: Vec<Category>,

    advanced_visibility: AdvancedVisibility,

    // Search state
    search_box: ToolboxSearch,
    search_active: bool,
    search_results: Vec<BlockDescriptor>,
    focus_search_requested: bool,
    last_applied_seq: u64,
    search_manager: SearchManager,
    background_rx: mpsc::UnboundedReceiver<Action>,

    // Entrance animation
    should_animate: bool,
    shown_at: Option<Instant>,

    // Mouse dispatch bookkeeping, rebuilt each render
    row_targets: Vec<RowTarget>,
    hovered_line: Option<usize>,
    tree_area: Option<Rect>,
    search_area: Option<Rect>,
}

impl Toolbox {
    pub fn new(host: Arc<dyn EditorHost>, options: ToolboxOptions, logger: Logger) -> Self {
        let should_animate = options.animate && !host.toolbox_animation_shown();
        let (search_manager, background_rx) = SearchManager::new(Arc::clone(&host));
        let search_box = ToolboxSearch::new(options.search_debounce_ms);
        Self {
            host,
            options,
            icons: IconService::default(),
            logger,
            state: ToolboxState::Hidden,
            categories: Vec::new(),
            selected_id: None,
            expanded_id: None,
            focused_index: 0,
            selected_row: None,
            visible_order: Vec::new(),
            advanced_visibility: AdvancedVisibility::default(),
            search_box,
            search_active: false,
            search_results: Vec::new(),
            focus_search_requested: false,
            last_applied_seq: 0,
            search_manager,
            background_rx,
            should_animate,
            shown_at: None,
            row_targets: Vec::new(),
            hovered_line: None,
            tree_area: None,
            search_area: None,
        }
    }

    // --- lifecycle ---------------------------------------------------------

    /// Replace the category list wholesale. Selection, expansion, and search
    /// state survive; resets are explicit.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.rebuild_visible_order();
        self.host.resize();
    }

    pub fn show(&mut self) {
        if self.state == ToolboxState::Error {
            return;
        }
        self.state = ToolboxState::Ready;
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
        self.host.resize();
    }

    pub fn hide(&mut self) {
        // The entrance animation plays once per session; leaving the surface
        // after it ran marks it shown on the host.
        if self.should_animate && self.shown_at.is_some() {
            self.host.set_toolbox_animation_shown();
            self.should_animate = false;
        }
        self.state = ToolboxState::Hidden;
        self.host.resize();
    }

    pub fn show_loading(&mut self) {
        if self.state != ToolboxState::Error {
            self.state = ToolboxState::Loading;
            self.host.resize();
        }
    }

    pub fn recover_toolbox(&mut self) {
        if self.state == ToolboxState::Error {
            self.logger.log("toolbox: recovered from render fault");
            self.state = ToolboxState::Ready;
        }
    }

    #[must_use]
    pub fn state(&self) -> ToolboxState {
        self.state
    }

    // --- selection state machine -------------------------------------------

    /// Activate a category row.
    ///
    /// Clicking the already-selected row with `force == false` toggles it
    /// off: selection cleared, flyout closed. A custom click handler that
    /// reports "handled" leaves all state untouched. Categories with a
    /// custom handler never open the default flyout.
    pub fn set_selection(&mut self, category: &Category, index: usize, force: bool) {
        let id = category.selection_id();
        self.logger.log(format!("toolbox: activate '{id}'"));

        if self.selected_id.as_deref() == Some(id.as_str()) && !force {
            self.clear_selection();
            self.host.close_flyout();
            return;
        }

        if let Some(custom_click) = &category.custom_click {
            if custom_click(self.host.as_ref()) {
                return;
            }
        }

        let expansion_changed = self.expanded_id.as_deref() != Some(category.id.as_str());
        self.selected_id = Some(id.clone());
        self.expanded_id = Some(category.id.clone());
        self.focused_index = index;
        self.focus_search_requested = false;
        self.search_box.blur();
        self.selected_row = Some(category.clone());
        self.rebuild_visible_order();
        // The activation may have collapsed a sibling's children; keep the
        // focus index pointing at the selected row in the rebuilt order.
        if let Some(pos) = self.visible_order.iter().position(|c| c.selection_id() == id) {
            self.focused_index = pos;
        }

        if category.custom_click.is_none() {
            self.host.show_flyout(category);
        }
        if expansion_changed {
            self.host.resize();
        }
    }

    /// Move focus to the next row in the flat order, clamped at the end.
    /// Keyboard selection always forces a flyout refresh.
    pub fn set_next_item(&mut self) {
        if self.focused_index + 1 < self.visible_order.len() {
            let index = self.focused_index + 1;
            let category = self.visible_order[index].clone();
            self.set_selection(&category, index, true);
        }
    }

    /// Move focus to the previous row; at the top, hand focus to the search
    /// box instead (when it is shown).
    pub fn set_previous_item(&mut self) {
        if self.focused_index > 0 {
            let index = self.focused_index - 1;
            let category = self.visible_order[index].clone();
            self.set_selection(&category, index, true);
        } else if self.options.show_search_box {
            self.set_search();
        }
    }

    /// Focus the search box.
    pub fn set_search(&mut self) {
        self.search_box.focus();
    }

    pub fn select_first_item(&mut self) {
        if let Some(first) = self.visible_order.first().cloned() {
            self.set_selection(&first, 0, true);
        }
    }

    /// Re-focus the current selection, or fall back to the first row.
    pub fn focus(&mut self) {
        match self.selected_row.clone() {
            Some(row) => {
                let id = row.selection_id();
                let index = self
                    .visible_order
                    .iter()
                    .position(|c| c.selection_id() == id)
                    .unwrap_or(0);
                self.set_selection(&row, index, true);
            }
            None => self.select_first_item(),
        }
    }

    pub fn clear(&mut self) {
        self.clear_selection();
        self.focused_index = 0;
        self.selected_row = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
        self.focus_search_requested = false;
        self.rebuild_visible_order();
    }

    pub fn clear_expanded_item(&mut self) {
        self.expanded_id = None;
        self.rebuild_visible_order();
        self.host.resize();
    }

    pub fn clear_search(&mut self) {
        let was_active = self.search_active;
        let search_selected = self.selected_id.as_deref() == Some(SEARCH_CATEGORY_ID);
        self.search_active = false;
        self.search_results.clear();
        self.focus_search_requested = false;
        self.rebuild_visible_order();
        if was_active {
            if search_selected {
                self.host.close_flyout();
            }
            self.host.resize();
        }
    }

    /// Re-invoke the flyout for the current selection without changing any
    /// state. Used when underlying content changed but selection persists.
    pub fn refresh_selection(&mut self) {
        if self.selected_id.is_none() {
            return;
        }
        let Some(row) = self.selected_row.clone() else {
            return;
        };
        match &row.custom_click {
            Some(handler) => {
                handler(self.host.as_ref());
            }
            None => self.host.show_flyout(&row),
        }
    }

    /// Re-open the search results flyout for the synthetic search row.
    pub fn refresh_search_item(&mut self) {
        let row = ToolboxSearch::search_tree_row(&self.icons);
        self.host.show_flyout(&row);
    }

    // --- advanced buckets --------------------------------------------------

    /// Toggle one bucket's visibility. Hiding the bucket that holds the
    /// current selection clears the selection and closes the flyout first.
    /// Other buckets' bookkeeping is never disturbed.
    pub fn toggle_advanced(&mut self, bucket: AdvancedBucket) {
        let hiding = self.advanced_visibility.is_visible(bucket);
        let selection_in_bucket =
            self.selected_row.as_ref().and_then(Category::bucket) == Some(bucket);
        if hiding && selection_in_bucket {
            self.clear();
            self.host.close_flyout();
        }
        let now_visible = self.advanced_visibility.toggle(bucket);
        self.logger.log(format!(
            "toolbox: bucket '{}' {}",
            bucket.display_name(),
            if now_visible { "shown" } else { "hidden" }
        ));
        self.rebuild_visible_order();
        self.host.resize();
    }

    #[must_use]
    pub fn is_bucket_visible(&self, bucket: AdvancedBucket) -> bool {
        self.advanced_visibility.is_visible(bucket)
    }

    #[must_use]
    pub fn has_advanced_categories(&self, bucket: AdvancedBucket) -> bool {
        self.categories.iter().any(|c| c.bucket() == Some(bucket))
    }

    #[must_use]
    pub fn advanced_categories(&self, bucket: AdvancedBucket) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.bucket() == Some(bucket))
            .collect()
    }

    #[must_use]
    pub fn non_advanced_categories(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| !c.advanced).collect()
    }

    // --- search ------------------------------------------------------------

    /// Apply a resolved query. Stale replies (sequence below one already
    /// applied) are discarded; overlapping queries therefore resolve
    /// newest-wins regardless of host ordering.
    pub fn apply_search_results(&mut self, seq: u64, query: &str, results: Vec<BlockDescriptor>) {
        if seq < self.last_applied_seq {
            log::debug!(
                "discarding stale search reply {seq}; already applied {}",
                self.last_applied_seq
            );
            return;
        }
        self.last_applied_seq = seq;

        let was_active = self.search_active;
        let has_search = !query.is_empty();
        self.search_box.note_results(query, results.len());
        self.search_active = has_search;
        self.search_results = results;
        self.focus_search_requested = true;

        if has_search {
            // Force the composite selection to the synthetic search row,
            // which opens the results flyout.
            self.selected_id = Some(SEARCH_CATEGORY_ID.to_string());
            self.selected_row = Some(ToolboxSearch::search_tree_row(&self.icons));
            self.focused_index = 0;
            self.rebuild_visible_order();
            self.refresh_search_item();
        } else {
            // Empty query deactivates search without forcing a selection
            // change; close the flyout only if it was showing results.
            let search_selected = self.selected_id.as_deref() == Some(SEARCH_CATEGORY_ID);
            self.rebuild_visible_order();
            if was_active && search_selected {
                self.host.close_flyout();
            }
        }
        if was_active != self.search_active {
            self.host.resize();
        }
    }

    #[must_use]
    pub fn search_results(&self) -> &[BlockDescriptor] {
        &self.search_results
    }

    #[must_use]
    pub fn search_active(&self) -> bool {
        self.search_active
    }

    /// Fire the pending debounced query, if its window has elapsed.
    pub fn poll_search(&mut self) {
        if let Some(query) = self.search_box.take_due_query() {
            let seq = self.search_manager.spawn_query(query.clone());
            self.logger.log(format!("toolbox: search #{seq} {query:?}"));
        }
    }

    /// Drain resolved background queries and apply them. Called every tick
    /// by the owning surface.
    pub fn tick(&mut self) {
        self.poll_search();
        let mut pending = Vec::new();
        while let Ok(action) = self.background_rx.try_recv() {
            pending.push(action);
        }
        for action in pending {
            self.update(action);
        }
    }

    // --- accessors ---------------------------------------------------------

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    #[must_use]
    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded_id.as_deref()
    }

    #[must_use]
    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    #[must_use]
    pub fn visible_order(&self) -> &[Category] {
        &self.visible_order
    }

    #[must_use]
    pub fn search_box(&self) -> &ToolboxSearch {
        &self.search_box
    }

    pub fn search_box_mut(&mut self) -> &mut ToolboxSearch {
        &mut self.search_box
    }

    // --- flat navigation order ---------------------------------------------

    /// Flat keyboard order: the search row while search is active, then each
    /// non-advanced category followed by its subcategories while expanded.
    /// Advanced rows render but never join this order.
    fn rebuild_visible_order(&mut self) {
        let mut order = Vec::new();
        if self.search_active {
            order.push(ToolboxSearch::search_tree_row(&self.icons));
        }
        for category in self.categories.iter().filter(|c| !c.advanced) {
            order.push(category.clone());
            if self.expanded_id.as_deref() == Some(category.id.as_str()) {
                order.extend(category.subcategories.iter().cloned());
            }
        }
        self.visible_order = order;
    }

    // --- rendering ---------------------------------------------------------

    fn render_loading(&self, f: &mut Frame, rect: Rect) {
        let loader = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(self.pane_block());
        f.render_widget(loader, rect);
    }

    fn render_crash_banner(&self, f: &mut Frame, rect: Rect) {
        let banner = Paragraph::new(vec![
            Line::from("Toolbox crashed.."),
            Line::from(""),
            Line::from(Span::styled("[r] Reload", Style::default().fg(Color::Yellow))),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title("Toolbox"),
        );
        f.render_widget(banner, rect);
    }

    fn pane_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Toolbox")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray))
    }

    fn row_revealed(&self, top_row_index: usize) -> bool {
        if !self.should_animate {
            return true;
        }
        match self.shown_at {
            Some(shown_at) => shown_at.elapsed() >= entrance_delay(top_row_index),
            None => true,
        }
    }

    fn render_tree(&mut self, f: &mut Frame, rect: Rect) {
        self.rebuild_visible_order();

        let (search_area, tree_area) = if self.options.show_search_box {
            let chunks =
                Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(rect);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, rect)
        };
        self.search_area = search_area;
        self.tree_area = Some(tree_area);

        if let Some(area) = search_area {
            self.search_box.render(f, area, &self.icons);
        }

        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut targets: Vec<RowTarget> = Vec::new();
        let mut flat_index = 0usize;
        let mut top_row_index = 0usize;
        let inner_width = tree_area.width.saturating_sub(2);

        if self.search_active {
            let search_row = ToolboxSearch::search_tree_row(&self.icons);
            let hovered = self.hovered_line == Some(targets.len());
            let item = CategoryItem::new(&search_row, flat_index);
            let tree_item =
                item.tree_item(self.selected_id.as_deref(), hovered, &self.options, &self.icons);
            for line in tree_item.into_lines() {
                lines.push(line);
                targets.push(RowTarget::Flat(flat_index));
            }
            flat_index += 1;
        }

        // Main tree: rows appear sequentially while the entrance animation
        // is running, so the first hidden row ends the pass.
        let non_advanced: Vec<Category> =
            self.categories.iter().filter(|c| !c.advanced).cloned().collect();
        let mut animation_cutoff = false;
        for category in &non_advanced {
            if !self.row_revealed(top_row_index) {
                animation_cutoff = true;
                break;
            }
            let expanded = self.expanded_id.as_deref() == Some(category.id.as_str());
            let hovered = self.hovered_line == Some(targets.len());
            let mut item = CategoryItem::new(category, flat_index);
            item.children_visible = expanded;
            let tree_item =
                item.tree_item(self.selected_id.as_deref(), hovered, &self.options, &self.icons);

            let child_count = if expanded { category.subcategories.len() } else { 0 };
            for (offset, line) in tree_item.into_lines().into_iter().enumerate() {
                lines.push(line);
                targets.push(RowTarget::Flat(flat_index + offset));
            }
            flat_index += 1 + child_count;
            top_row_index += 1;
        }

        // Advanced buckets: separator, colored header, then the bucket's
        // categories while toggled visible.
        if !animation_cutoff {
            for bucket in AdvancedBucket::ALL {
                if !self.has_advanced_categories(bucket) {
                    continue;
                }
                if !self.row_revealed(top_row_index) {
                    break;
                }
                top_row_index += 1;

                lines.push(TreeSeparator::line(inner_width));
                targets.push(RowTarget::Inert);

                let visible = self.advanced_visibility.is_visible(bucket);
                lines.push(self.bucket_header_line(bucket, visible));
                targets.push(RowTarget::BucketHeader(bucket));

                if !visible {
                    continue;
                }
                let bucket_rows: Vec<Category> =
                    self.advanced_categories(bucket).into_iter().cloned().collect();
                for category in bucket_rows {
                    let expanded = self.expanded_id.as_deref() == Some(category.id.as_str());
                    let mut item = CategoryItem::new(&category, 0);
                    item.children_visible = expanded;
                    let tree_item = item.tree_item(
                        self.selected_id.as_deref(),
                        self.hovered_line == Some(targets.len()),
                        &self.options,
                        &self.icons,
                    );
                    for line in tree_item.into_lines() {
                        lines.push(line);
                        targets.push(RowTarget::Advanced(Box::new(category.clone())));
                    }
                }
            }
        }

        self.row_targets = targets;
        let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
        let list = List::new(items).block(self.pane_block());
        f.render_widget(list, tree_area);
    }

    fn bucket_header_line(&self, bucket: AdvancedBucket, visible: bool) -> Line<'static> {
        let glyph = if visible {
            self.icons.namespace_icon("advancedexpanded")
        } else {
            self.icons.namespace_icon("advancedcollapsed")
        };
        Line::from(Span::styled(
            format!("{glyph} {}", bucket.display_name()),
            Style::default().fg(to_terminal_color(bucket.color())),
        ))
    }

    /// Map a mouse position inside the tree pane back to a rendered line.
    fn line_at(&self, mouse: &MouseEvent) -> Option<usize> {
        let area = self.tree_area?;
        if mouse.column < area.x
            || mouse.column >= area.x + area.width
            || mouse.row <= area.y
            || mouse.row + 1 >= area.y + area.height
        {
            return None;
        }
        let line = (mouse.row - area.y - 1) as usize;
        (line < self.row_targets.len()).then_some(line)
    }

    #[cfg(test)]
    pub(crate) fn note_render_fault(&mut self) {
        self.state = ToolboxState::Error;
    }
}

impl Component for Toolbox {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.state {
            ToolboxState::Error => {
                return match key.code {
                    KeyCode::Char('r') => Action::RecoverToolbox,
                    _ => Action::None,
                };
            }
            ToolboxState::Ready => {}
            _ => return Action::None,
        }

        // While search results are applied, keystrokes keep routing to the
        // search box even though the selection moved to the search row.
        if self.search_box.is_focused() || self.focus_search_requested {
            return self.search_box.handle_key(key);
        }

        let ctx = InputContext {
            rtl: self.options.rtl,
            accessible_navigation: self.host.accessible_navigation(),
        };
        match self.visible_order.get(self.focused_index) {
            Some(category) => {
                CategoryItem::new(category, self.focused_index).handle_key(key, &ctx)
            }
            None => match key.code {
                KeyCode::Char(_) => Action::FocusSearch,
                _ => Action::None,
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, _area: Rect) -> Action {
        if self.state != ToolboxState::Ready {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(area) = self.search_area {
                    let in_search = mouse.column >= area.x
                        && mouse.column < area.x + area.width
                        && mouse.row >= area.y
                        && mouse.row < area.y + area.height;
                    if in_search {
                        return Action::FocusSearch;
                    }
                }
                let Some(line) = self.line_at(&mouse) else {
                    return Action::None;
                };
                // Click activates exactly this row; it never bubbles to a
                // parent row's handler.
                match self.row_targets[line].clone() {
                    RowTarget::Flat(index) => {
                        let item_action = self
                            .visible_order
                            .get(index)
                            .map(|c| CategoryItem::new(c, index).handle_click());
                        item_action.unwrap_or(Action::None)
                    }
                    RowTarget::Advanced(category) => {
                        let index = self.focused_index;
                        self.set_selection(&category, index, false);
                        Action::None
                    }
                    RowTarget::BucketHeader(bucket) => Action::ToggleBucket(bucket),
                    RowTarget::Inert => Action::None,
                }
            }
            MouseEventKind::Moved => {
                self.hovered_line = self.line_at(&mouse);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ActivateCategory { index, force } => {
                if let Some(category) = self.visible_order.get(index).cloned() {
                    self.set_selection(&category, index, force);
                }
                Action::None
            }
            Action::NextItem => {
                self.set_next_item();
                Action::None
            }
            Action::PreviousItem => {
                self.set_previous_item();
                Action::None
            }
            Action::SelectFirstItem => {
                self.select_first_item();
                Action::None
            }
            Action::MoveFocusToFlyout => {
                self.host.move_focus_to_flyout();
                Action::None
            }
            Action::CloseFlyout => {
                self.host.close_flyout();
                Action::None
            }
            Action::FocusSearch => {
                self.set_search();
                Action::None
            }
            Action::ToggleBucket(bucket) => {
                self.toggle_advanced(bucket);
                Action::None
            }
            Action::SearchCompleted { seq, query, results } => {
                self.apply_search_results(seq, &query, results);
                Action::None
            }
            Action::RecoverToolbox => {
                self.recover_toolbox();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.state {
            ToolboxState::Hidden => return,
            ToolboxState::Loading => {
                self.render_loading(f, rect);
                return;
            }
            ToolboxState::Error => {
                self.render_crash_banner(f, rect);
                return;
            }
            ToolboxState::Ready => {}
        }

        // Error containment boundary: a fault anywhere in the tree render
        // moves the whole toolbox to the crash banner rather than leaving a
        // partially drawn, possibly inconsistent tree up.
        let fault = catch_unwind(AssertUnwindSafe(|| self.render_tree(f, rect))).is_err();
        if fault {
            log::error!("toolbox render fault; entering error state");
            self.state = ToolboxState::Error;
            self.render_crash_banner(f, rect);
        }
    }
}
