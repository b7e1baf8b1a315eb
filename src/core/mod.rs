//! Core application layer
//!
//! Wires navigation, screens, and configuration together and reacts to
//! semantic input actions. NO imports from frontend/ or rendering code;
//! frontends read this state and render it.

pub mod actions;
pub mod app_core;
pub mod input_router;

pub use actions::NavAction;
pub use app_core::AppCore;
