//! Demo surface: a terminal host for the toolbox.
//!
//! Stands in for the block editor around the toolbox pane. It owns the
//! flyout slot and a small block index for search, wired through the
//! [`EditorHost`] seam exactly the way an embedding editor would be.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::constants::SEARCH_CATEGORY_ID;
use crate::host::{EditorHost, HostError};
use crate::logger::Logger;
use crate::model::{BlockDescriptor, Category};
use crate::ui::components::{style_rules, CategoryStyleRule, ToolboxTrashIcon};
use crate::ui::core::{Action, Component, EventHandler, EventType};
use crate::ui::toolbox::Toolbox;
use crate::utils::color::to_terminal_color;

/// Editor stand-in. The flyout is a shared slot the toolbox writes through
/// the host trait and the render loop reads back.
pub struct DemoHost {
    flyout: Mutex<Option<Category>>,
    focus_in_flyout: AtomicBool,
    blocks: Vec<BlockDescriptor>,
    animation_shown: AtomicBool,
    status: Mutex<Option<String>>,
}

impl DemoHost {
    pub fn new(blocks: Vec<BlockDescriptor>) -> Self {
        Self {
            flyout: Mutex::new(None),
            focus_in_flyout: AtomicBool::new(false),
            blocks,
            animation_shown: AtomicBool::new(false),
            status: Mutex::new(None),
        }
    }

    pub fn current_flyout(&self) -> Option<Category> {
        self.flyout.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn set_status(&self, message: impl Into<String>) {
        if let Ok(mut status) = self.status.lock() {
            *status = Some(message.into());
        }
    }

    pub fn status(&self) -> Option<String> {
        self.status.lock().ok().and_then(|s| s.clone())
    }
}

#[async_trait]
impl EditorHost for DemoHost {
    fn show_flyout(&self, category: &Category) {
        if let Ok(mut slot) = self.flyout.lock() {
            *slot = Some(category.clone());
        }
        self.focus_in_flyout.store(false, Ordering::SeqCst);
    }

    fn close_flyout(&self) {
        if let Ok(mut slot) = self.flyout.lock() {
            *slot = None;
        }
        self.focus_in_flyout.store(false, Ordering::SeqCst);
    }

    fn move_focus_to_flyout(&self) {
        if self.current_flyout().is_some() {
            self.focus_in_flyout.store(true, Ordering::SeqCst);
        }
    }

    fn resize(&self) {
        // Layout is recomputed every frame; nothing to re-flow here.
    }

    async fn search(&self, query: &str) -> Result<Vec<BlockDescriptor>, HostError> {
        // Simulated index latency, so overlapping queries actually overlap.
        tokio::time::sleep(tokio::time::Duration::from_millis(80)).await;
        let needle = query.to_lowercase();
        Ok(self
            .blocks
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    fn toolbox_animation_shown(&self) -> bool {
        self.animation_shown.load(Ordering::SeqCst)
    }

    fn set_toolbox_animation_shown(&self) {
        self.animation_shown.store(true, Ordering::SeqCst);
    }
}

fn sample_blocks() -> Vec<BlockDescriptor> {
    [
        "repeat 4 times",
        "while true",
        "for index from 0 to 4",
        "forever",
        "if then else",
        "set variable to",
        "change variable by",
        "show string",
        "show number",
        "digital write pin",
        "analog read pin",
        "radio send number",
        "radio on received",
    ]
    .into_iter()
    .map(BlockDescriptor::new)
    .collect()
}

fn sample_categories(host: &Arc<DemoHost>) -> Vec<Category> {
    let colored = |id: &str, color: &str, blocks: &[&str]| {
        let mut c = Category::new(id);
        c.color = Some(color.to_string());
        c.blocks = blocks.iter().map(|b| BlockDescriptor::new(*b)).collect();
        c
    };

    let mut loops = colored(
        "loops",
        "#107c10",
        &["repeat 4 times", "while true", "for index from 0 to 4", "forever"],
    );
    loops.group_labels = vec!["Basic".to_string(), "Timing".to_string()];

    let logic = colored("logic", "#006970", &["if then else", "and", "or", "not"]);

    let mut variables =
        colored("variables", "#a80000", &["set variable to", "change variable by"]);
    variables.subcategories = vec![
        {
            let mut sub = Category::new("variables");
            sub.subns = Some("local".to_string());
            sub.color = variables.color.clone();
            sub.blocks = vec![BlockDescriptor::new("declare local")];
            sub
        },
        {
            let mut sub = Category::new("variables");
            sub.subns = Some("global".to_string());
            sub.color = variables.color.clone();
            sub.blocks = vec![BlockDescriptor::new("declare global")];
            sub
        },
    ];

    let math = colored("math", "#712f9e", &["plus", "minus", "remainder", "random"]);
    let text = colored("text", "#996600", &["show string", "join", "substring"]);

    // Extensions row opens a dialog instead of the flyout.
    let mut extensions = colored("addpackage", "#717171", &[]);
    extensions.name = Some("Extensions".to_string());
    let dialog_host = Arc::clone(host);
    extensions.custom_click = Some(Arc::new(move |_host| {
        dialog_host.set_status("Extensions dialog would open here");
        true
    }));

    let mut pins = colored("pins", "#c62f06", &["digital write pin", "analog read pin"]);
    pins.advanced = true;

    let mut serial = colored("serial", "#002050", &["serial write line"]);
    serial.advanced = true;

    let mut board = colored("radio", "#e3008c", &["radio send number", "radio on received"]);
    board.advanced = true;
    board.advanced_group = Some("1001".to_string());

    let mut crypto = colored("crypto", "#0fbc11", &["hash string", "encrypt message"]);
    crypto.advanced = true;
    crypto.advanced_group = Some("1008".to_string());

    vec![loops, logic, variables, math, text, extensions, pins, serial, board, crypto]
}

/// Run the demo surface until the user quits with Ctrl+C.
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let host = Arc::new(DemoHost::new(sample_blocks()));
    let categories = sample_categories(&host);
    let rules = style_rules(&categories);

    let mut toolbox = Toolbox::new(
        Arc::clone(&host) as Arc<dyn EditorHost>,
        config.toolbox.clone(),
        Logger::new(),
    );
    toolbox.set_categories(categories);
    toolbox.show();

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(
        &mut terminal,
        &mut toolbox,
        &host,
        &rules,
        &config,
        &mut event_handler,
    )
    .await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    toolbox: &mut Toolbox,
    host: &Arc<DemoHost>,
    rules: &[CategoryStyleRule],
    config: &Config,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut trash = ToolboxTrashIcon { visible: false, flyout_only: true };
    let mut needs_render = true;
    let toolbox_width = config.ui.toolbox_width;
    let rtl = config.toolbox.rtl;
    let mut toolbox_area = Rect::default();

    loop {
        if needs_render {
            terminal.draw(|f| {
                let full = f.area();
                let constraints = if rtl {
                    [Constraint::Min(0), Constraint::Length(toolbox_width)]
                } else {
                    [Constraint::Length(toolbox_width), Constraint::Min(0)]
                };
                let chunks = Layout::horizontal(constraints).split(full);
                let (tb_area, flyout_area) =
                    if rtl { (chunks[1], chunks[0]) } else { (chunks[0], chunks[1]) };
                toolbox_area = tb_area;

                toolbox.render(f, tb_area);
                render_flyout(f, flyout_area, host, toolbox, rules);
                trash.render(f, full);
            })?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                if key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }
                let mut action = toolbox.handle_key_events(key);
                loop {
                    match toolbox.update(action) {
                        Action::Quit => return Ok(()),
                        Action::None => break,
                        next => action = next,
                    }
                }
                needs_render = true;
            }
            EventType::Mouse(mouse) => {
                match mouse.kind {
                    MouseEventKind::Drag(_) => trash.visible = true,
                    MouseEventKind::Up(_) => trash.visible = false,
                    _ => {}
                }
                let action = toolbox.handle_mouse_events(mouse, toolbox_area);
                toolbox.update(action);
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                toolbox.tick();
                needs_render = true;
            }
            EventType::Other => {}
        }
    }
}

fn render_flyout(
    f: &mut Frame,
    area: Rect,
    host: &Arc<DemoHost>,
    toolbox: &Toolbox,
    rules: &[CategoryStyleRule],
) {
    let flyout = host.current_flyout();
    let (title, border_color) = match &flyout {
        Some(category) => {
            let color = rules
                .iter()
                .find(|r| r.category_id == category.id.to_lowercase())
                .map(|r| to_terminal_color(&r.border))
                .unwrap_or(Color::DarkGray);
            (category.row_title(), color)
        }
        None => ("Canvas".to_string(), Color::DarkGray),
    };

    let mut items: Vec<ListItem> = Vec::new();
    match &flyout {
        Some(category) if category.id == SEARCH_CATEGORY_ID => {
            if let Some(announcement) = toolbox.search_box().announcement() {
                items.push(ListItem::new(Line::from(Span::styled(
                    announcement.to_string(),
                    Style::default().fg(Color::DarkGray),
                ))));
            }
            for block in toolbox.search_results() {
                items.push(ListItem::new(Line::from(format!("  {}", block.name))));
            }
        }
        Some(category) => {
            for (i, label) in category.group_labels.iter().enumerate() {
                items.push(ListItem::new(Line::from(Span::styled(
                    label.clone(),
                    Style::default().fg(Color::DarkGray),
                ))));
                // Blocks are not grouped in the demo corpus; show labels as
                // section headers over the whole list once.
                if i + 1 == category.group_labels.len() {
                    items.push(ListItem::new(Line::from("")));
                }
            }
            for block in &category.blocks {
                items.push(ListItem::new(Line::from(format!("  {}", block.name))));
            }
        }
        None => {
            let hint = match host.status() {
                Some(status) => status,
                None => "Select a category to open its flyout".to_string(),
            };
            items.push(ListItem::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            ))));
        }
    }

    let focused = host.focus_in_flyout.load(Ordering::SeqCst);
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(border_color)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(border_style),
    );
    f.render_widget(list, area);
}
