//! Modular dashboard implementation
//!
//! Split into selector, state, update and rendering modules.

pub mod components;
pub mod renderer;
pub mod state;
pub mod tabs;
pub mod updaters;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{DashboardState, Modal};
pub use tabs::Tab;
