//! Screen navigation core
//!
//! This module owns routes, the back-stack, and deep-link handling.
//! NO imports from frontend/ or rendering code; frontends observe navigation
//! state through `Dispatcher::subscribe` and read accessors.

pub mod deep_link;
pub mod dispatcher;
pub mod error;
pub mod route;

pub use deep_link::DeepLinkSpec;
pub use dispatcher::{BackStackEntry, Dispatcher, NavChange, NavigationRequest, ScreenState};
pub use error::NavError;
pub use route::{ArgKind, ArgSpec, Destination, PathTemplate, RouteRegistry};
