//! Frontend-agnostic application state.
//!
//! AppCore wires the route registry, navigation dispatcher, and screen host
//! together and reacts to semantic input actions. Frontends read from it and
//! render; they never mutate navigation state directly.

use crate::config::Config;
use crate::core::actions::NavAction;
use crate::nav::{
    DeepLinkSpec, Destination, Dispatcher, NavChange, NavError, NavigationRequest, RouteRegistry,
};
use crate::screens::{
    AccountsScreen, BillsScreen, OverviewScreen, ScreenHost, ScreenView, SingleAccountScreen,
};
use crate::theme::{AppTheme, ThemePresets};
use anyhow::{Context, Result};
use std::sync::mpsc;

/// Route of the account detail screen
pub const SINGLE_ACCOUNT_ROUTE: &str = "account/{account_type}";

pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Owns the back-stack and the route registry
    pub dispatcher: Dispatcher,

    /// Screen content providers keyed by route
    pub screens: ScreenHost,

    /// Accepted scheme/host for external URIs
    pub deep_links: DeepLinkSpec,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,

    /// Transient status-bar message (errors, theme changes)
    pub status_text: String,

    nav_changes: mpsc::Receiver<NavChange>,
}

impl AppCore {
    pub fn new(config: Config) -> Result<Self> {
        let mut registry = Self::build_registry();
        registry
            .set_default_route(&config.navigation.start_route)
            .with_context(|| {
                format!(
                    "start_route '{}' is not a registered tab",
                    config.navigation.start_route
                )
            })?;

        let mut dispatcher = Dispatcher::new(registry);
        let nav_changes = dispatcher.subscribe();

        let deep_links = DeepLinkSpec::new(
            &config.navigation.deep_link_scheme,
            &config.navigation.deep_link_host,
        );

        Ok(Self {
            config,
            dispatcher,
            screens: Self::build_screens(),
            deep_links,
            running: true,
            needs_render: true,
            status_text: String::new(),
            nav_changes,
        })
    }

    /// The fixed navigation graph: three tabs plus the detail screen
    pub fn build_registry() -> RouteRegistry {
        let mut registry = RouteRegistry::new(
            Destination::new("overview", "Overview", '◉')
                .expect("static route")
                .tab(),
        );
        registry
            .register(
                Destination::new("accounts", "Accounts", '◈')
                    .expect("static route")
                    .tab(),
            )
            .expect("static route is unique");
        registry
            .register(
                Destination::new("bills", "Bills", '◇')
                    .expect("static route")
                    .tab(),
            )
            .expect("static route is unique");
        registry
            .register(
                Destination::new(SINGLE_ACCOUNT_ROUTE, "Account", '◎').expect("static route"),
            )
            .expect("static route is unique");
        registry
    }

    /// Provider wiring for every registered route
    pub fn build_screens() -> ScreenHost {
        let mut screens = ScreenHost::new();
        screens.register("overview", Box::new(OverviewScreen));
        screens.register("accounts", Box::new(AccountsScreen));
        screens.register("bills", Box::new(BillsScreen));
        screens.register(SINGLE_ACCOUNT_ROUTE, Box::new(SingleAccountScreen));
        screens
    }

    /// Build the view for the current top of the back-stack.
    ///
    /// A missing provider is a wiring bug and propagates, failing fast on
    /// the first render attempt.
    pub fn current_view(&self) -> Result<ScreenView, NavError> {
        self.screens.render(self.dispatcher.current())
    }

    /// The active color theme
    pub fn theme(&self) -> AppTheme {
        self.config.get_theme()
    }

    /// React to one semantic input action
    pub fn handle_action(&mut self, action: NavAction) -> Result<()> {
        match action {
            NavAction::None => {}
            NavAction::Quit => {
                self.running = false;
            }
            NavAction::NextTab => self.switch_tab_relative(1),
            NavAction::PrevTab => self.switch_tab_relative(-1),
            NavAction::SelectTab(index) => {
                let route = self
                    .dispatcher
                    .registry()
                    .tabs()
                    .get(index)
                    .map(|d| d.route().to_string());
                if let Some(route) = route {
                    self.dispatch(NavigationRequest::single_top(&route));
                }
            }
            NavAction::SelectionUp => self.move_selection(-1),
            NavAction::SelectionDown => self.move_selection(1),
            NavAction::Activate => self.activate_selected()?,
            NavAction::Back => {
                if !self.dispatcher.pop() {
                    self.set_status("Already at the start screen");
                }
            }
            NavAction::Home => self.dispatcher.pop_to_start(),
            NavAction::CycleTheme => self.cycle_theme(),
        }
        Ok(())
    }

    /// Drain pending destination-change notifications, scheduling a render
    /// for each one.
    pub fn drain_nav_changes(&mut self) {
        while let Ok(change) = self.nav_changes.try_recv() {
            tracing::info!("current destination: {} (depth {})", change.route, change.depth);
            self.needs_render = true;
        }
    }

    /// Navigate to an external URI (`app://<host>/...`)
    pub fn open_deep_link(&mut self, uri: &str) -> Result<(), NavError> {
        let path = self.deep_links.parse(uri)?;
        self.dispatcher.navigate(NavigationRequest::push(&path))
    }

    /// Dispatch a request, reporting failures in the status bar instead of
    /// aborting the event loop.
    fn dispatch(&mut self, request: NavigationRequest) {
        if let Err(e) = self.dispatcher.navigate(request) {
            tracing::warn!("navigation failed: {}", e);
            self.set_status(&e.to_string());
        }
    }

    fn switch_tab_relative(&mut self, offset: isize) {
        let registry = self.dispatcher.registry();
        let tabs = registry.tabs();
        if tabs.is_empty() {
            return;
        }
        let current = registry.current_tab(Some(self.dispatcher.current().route()));
        let position = tabs
            .iter()
            .position(|d| d.route() == current.route())
            .unwrap_or(0);
        let next = (position as isize + offset).rem_euclid(tabs.len() as isize) as usize;
        let route = tabs[next].route().to_string();
        self.dispatch(NavigationRequest::single_top(&route));
    }

    fn move_selection(&mut self, delta: isize) {
        let action_count = match self.current_view() {
            Ok(view) => view.actions.len(),
            Err(_) => return,
        };
        if action_count == 0 {
            return;
        }
        let entry = self.dispatcher.current_mut();
        let current = entry.state.selected as isize;
        let clamped = (current + delta).clamp(0, action_count as isize - 1) as usize;
        if clamped != entry.state.selected {
            entry.state.selected = clamped;
            self.needs_render = true;
        }
    }

    fn activate_selected(&mut self) -> Result<()> {
        let view = self.current_view()?;
        let selected = self.dispatcher.current().state.selected;
        if let Some(action) = view.actions.get(selected) {
            let request = if action.single_top {
                NavigationRequest::single_top(&action.target)
            } else {
                NavigationRequest::push(&action.target)
            };
            self.dispatch(request);
        }
        Ok(())
    }

    fn cycle_theme(&mut self) {
        let names = ThemePresets::names();
        let position = names
            .iter()
            .position(|n| *n == self.config.active_theme)
            .unwrap_or(0);
        let next = names[(position + 1) % names.len()].to_string();
        self.config.active_theme = next;
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
        let theme = self.config.get_theme();
        self.set_status(&format!("Theme: {} - {}", theme.name, theme.description));
    }

    fn set_status(&mut self, text: &str) {
        self.status_text = text.to_string();
        self.needs_render = true;
    }
}
