use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

use super::actions::Action;

/// Input-to-intent contract shared by the toolbox surfaces. Components never
/// mutate global state from input handlers; they return an [`Action`] that
/// the owning controller applies through `update`.
pub trait Component {
    fn handle_events(&mut self, event: Option<Event>, area: Rect) -> Action {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Mouse(mouse)) => self.handle_mouse_events(mouse, area),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent, _area: Rect) -> Action {
        Action::None
    }

    /// Apply an action; unhandled actions pass through to the caller.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
