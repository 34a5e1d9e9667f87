//! Core UI plumbing: the component contract, navigation actions, terminal
//! event polling, and background search execution.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod search_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use search_manager::SearchManager;
