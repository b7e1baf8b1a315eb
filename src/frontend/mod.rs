//! Frontend abstraction layer
//!
//! The `Frontend` trait separates rendering concerns from navigation and
//! screen logic; the terminal frontend is the only implementation today,
//! but the core never depends on it directly.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Rendering/input seam between the core and a concrete UI runtime
pub trait Frontend {
    /// Poll for pending user input events (empty if none)
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state (one frame)
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal/window before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current rendering area size
    fn size(&self) -> (u16, u16);
}
