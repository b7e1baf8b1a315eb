//! Back-stack ownership and single-top navigation.
//!
//! The dispatcher is the only mutator of the back-stack. All navigation is
//! synchronous and runs to completion; interested parties observe changes
//! through a channel handed out by `subscribe` instead of watching the stack
//! directly.

use crate::nav::error::NavError;
use crate::nav::route::{Destination, RouteRegistry};
use std::collections::HashMap;
use std::sync::mpsc;

/// Transient per-screen UI state, saved and restored across tab switches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    /// Index of the highlighted action row
    pub selected: usize,
    /// Vertical scroll offset of the body
    pub scroll: u16,
}

/// One live entry on the back-stack
#[derive(Debug, Clone)]
pub struct BackStackEntry {
    pub destination: Destination,
    pub arguments: HashMap<String, String>,
    pub state: ScreenState,
}

impl BackStackEntry {
    pub fn route(&self) -> &str {
        self.destination.route()
    }

    /// Bound value of a path argument, if present
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }
}

/// A single navigation operation, built per input event
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    /// Bare route or concrete path carrying argument segments
    pub target: String,
    pub launch_single_top: bool,
    pub pop_to_start: bool,
    pub save_state: bool,
    pub restore_state: bool,
}

impl NavigationRequest {
    /// Plain push, used for detail screens
    pub fn push(target: &str) -> Self {
        Self {
            target: target.to_string(),
            launch_single_top: false,
            pop_to_start: false,
            save_state: false,
            restore_state: false,
        }
    }

    /// Full tab semantics: prune to the start destination, save the pruned
    /// screens' state, avoid duplicate top entries, restore prior state.
    pub fn single_top(target: &str) -> Self {
        Self {
            target: target.to_string(),
            launch_single_top: true,
            pop_to_start: true,
            save_state: true,
            restore_state: true,
        }
    }
}

/// Notification that the current destination changed
#[derive(Debug, Clone, PartialEq)]
pub struct NavChange {
    pub route: String,
    pub depth: usize,
}

/// Owns the back-stack and the route registry.
///
/// The stack always holds at least the start entry; popping below it is
/// refused rather than an error.
pub struct Dispatcher {
    registry: RouteRegistry,
    stack: Vec<BackStackEntry>,
    saved: HashMap<String, ScreenState>,
    listeners: Vec<mpsc::Sender<NavChange>>,
}

impl Dispatcher {
    /// Create a dispatcher with the registry's default destination as the
    /// start entry.
    pub fn new(registry: RouteRegistry) -> Self {
        let start = BackStackEntry {
            destination: registry.default_destination().clone(),
            arguments: HashMap::new(),
            state: ScreenState::default(),
        };
        Self {
            registry,
            stack: vec![start],
            saved: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The entry currently on top of the stack
    pub fn current(&self) -> &BackStackEntry {
        self.stack.last().expect("stack always holds the start entry")
    }

    /// Mutable access to the top entry (selection, scroll)
    pub fn current_mut(&mut self) -> &mut BackStackEntry {
        self.stack.last_mut().expect("stack always holds the start entry")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Routes on the stack, bottom first
    pub fn routes(&self) -> Vec<&str> {
        self.stack.iter().map(|e| e.route()).collect()
    }

    /// Receive a `NavChange` whenever the top entry changes
    pub fn subscribe(&mut self) -> mpsc::Receiver<NavChange> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Execute a navigation request.
    ///
    /// The target is resolved before any mutation, so an unknown route
    /// leaves the stack exactly as it was.
    pub fn navigate(&mut self, request: NavigationRequest) -> Result<(), NavError> {
        let (destination, arguments) = {
            let (destination, arguments) = self.registry.match_path(&request.target)?;
            (destination.clone(), arguments)
        };
        let before = self.top_signature();

        if request.pop_to_start {
            // Prune everything above the start entry
            while self.stack.len() > 1 {
                let entry = self.stack.pop().expect("length checked above");
                if request.save_state {
                    self.saved
                        .insert(entry.destination.route().to_string(), entry.state);
                }
            }
        }

        let same_as_top = self.stack.last().is_some_and(|top| {
            top.destination.route() == destination.route() && top.arguments == arguments
        });

        if request.launch_single_top && same_as_top {
            // No duplicate entry; state restoration is the only effect
            if request.restore_state {
                if let Some(state) = self.saved.remove(destination.route()) {
                    self.current_mut().state = state;
                }
            }
        } else {
            let state = if request.restore_state {
                self.saved.remove(destination.route()).unwrap_or_default()
            } else {
                ScreenState::default()
            };
            self.stack.push(BackStackEntry {
                destination,
                arguments,
                state,
            });
        }

        tracing::debug!(target: "nav", "navigate '{}' -> stack {:?}", request.target, self.routes());
        self.notify_if_changed(before);
        Ok(())
    }

    /// Pop the top entry. Returns false when only the start entry remains.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let before = self.top_signature();
        self.stack.pop();
        tracing::debug!(target: "nav", "pop -> stack {:?}", self.routes());
        self.notify_if_changed(before);
        true
    }

    /// Pop every entry above the start destination
    pub fn pop_to_start(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let before = self.top_signature();
        self.stack.truncate(1);
        tracing::debug!(target: "nav", "pop_to_start -> stack {:?}", self.routes());
        self.notify_if_changed(before);
    }

    fn top_signature(&self) -> (String, HashMap<String, String>) {
        let top = self.current();
        (top.route().to_string(), top.arguments.clone())
    }

    fn notify_if_changed(&mut self, before: (String, HashMap<String, String>)) {
        if self.top_signature() == before {
            return;
        }
        let change = NavChange {
            route: self.current().route().to_string(),
            depth: self.depth(),
        };
        // Drop listeners whose receiver has gone away
        self.listeners.retain(|tx| tx.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::route::Destination;

    fn dispatcher() -> Dispatcher {
        let mut registry =
            RouteRegistry::new(Destination::new("overview", "Overview", '◉').unwrap().tab());
        registry
            .register(Destination::new("accounts", "Accounts", '◈').unwrap().tab())
            .unwrap();
        registry
            .register(Destination::new("bills", "Bills", '◇').unwrap().tab())
            .unwrap();
        registry
            .register(Destination::new("account/{account_type}", "Account", '◎').unwrap())
            .unwrap();
        Dispatcher::new(registry)
    }

    #[test]
    fn test_starts_at_default_destination() {
        let nav = dispatcher();
        assert_eq!(nav.current().route(), "overview");
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_single_top_is_idempotent() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("overview")).unwrap();
        nav.navigate(NavigationRequest::single_top("overview")).unwrap();

        let overview_entries = nav.routes().iter().filter(|r| **r == "overview").count();
        assert_eq!(overview_entries, 1);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_tab_switch_prunes_to_start() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        nav.navigate(NavigationRequest::single_top("bills")).unwrap();

        // The accounts entry was pruned on the way to bills
        assert_eq!(nav.routes(), vec!["overview", "bills"]);
    }

    #[test]
    fn test_pop_to_start_round_trip() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        nav.pop_to_start();

        assert_eq!(nav.current().route(), "overview");
        let tab = nav.registry().current_tab(Some(nav.current().route()));
        assert_eq!(tab.route(), "overview");
    }

    #[test]
    fn test_unknown_route_leaves_stack_unchanged() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        let before = nav.routes().join(",");

        let err = nav.navigate(NavigationRequest::single_top("nonexistent"));
        assert!(matches!(err, Err(NavError::NotFound { .. })));
        assert_eq!(nav.routes().join(","), before);
    }

    #[test]
    fn test_detail_push_binds_arguments() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::push("account/checking")).unwrap();

        let entry = nav.current();
        assert_eq!(entry.route(), "account/{account_type}");
        assert_eq!(entry.arg("account_type"), Some("checking"));
    }

    #[test]
    fn test_state_saved_and_restored_across_tabs() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        nav.current_mut().state.selected = 2;

        nav.navigate(NavigationRequest::single_top("overview")).unwrap();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();

        assert_eq!(nav.current().state.selected, 2);
        // Restoration consumes the snapshot
        assert!(!nav.saved.contains_key("accounts"));
    }

    #[test]
    fn test_plain_push_skips_save_and_restore() {
        let mut nav = dispatcher();
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        nav.current_mut().state.selected = 3;
        nav.navigate(NavigationRequest::single_top("overview")).unwrap();

        // A plain push must not consume the saved snapshot
        nav.navigate(NavigationRequest::push("accounts")).unwrap();
        assert_eq!(nav.current().state.selected, 0);
        assert!(nav.saved.contains_key("accounts"));
    }

    #[test]
    fn test_pop_refuses_to_drop_start_entry() {
        let mut nav = dispatcher();
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);

        nav.navigate(NavigationRequest::push("account/checking")).unwrap();
        assert!(nav.pop());
        assert!(!nav.pop());
        assert_eq!(nav.current().route(), "overview");
    }

    #[test]
    fn test_change_notifications_fire_on_top_change_only() {
        let mut nav = dispatcher();
        let rx = nav.subscribe();

        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        let change = rx.try_recv().unwrap();
        assert_eq!(change.route, "accounts");
        assert_eq!(change.depth, 2);

        // Re-navigating to the current top is a no-op, so no event
        nav.navigate(NavigationRequest::single_top("accounts")).unwrap();
        assert!(rx.try_recv().is_err());

        nav.pop_to_start();
        assert_eq!(rx.try_recv().unwrap().route, "overview");
    }
}
