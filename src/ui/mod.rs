//! Toolbox UI: the controller, its building-block components, and the demo
//! surface that embeds them.

pub mod components;
pub mod core;
pub mod renderer;
pub mod toolbox;

pub use renderer::run_app;
pub use toolbox::{Toolbox, ToolboxState};
