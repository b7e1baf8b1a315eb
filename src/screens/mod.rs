//! Screen content layer
//!
//! Screens build a plain `ScreenView` (title, styled lines, selectable
//! actions) from a back-stack entry. The view model carries no rendering
//! types, so screens are testable without a terminal; the TUI frontend
//! turns views into ratatui widgets.

pub mod accounts;
pub mod bills;
pub mod overview;
pub mod single_account;

use crate::nav::{BackStackEntry, NavError};
use std::collections::HashMap;

pub use accounts::AccountsScreen;
pub use bills::BillsScreen;
pub use overview::OverviewScreen;
pub use single_account::SingleAccountScreen;

/// Visual role of a content line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Body,
    Muted,
    /// Credit amounts (rendered in the positive accent color)
    Positive,
    /// Debit amounts (rendered in the negative accent color)
    Negative,
}

/// One non-interactive content line
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLine {
    pub text: String,
    pub kind: LineKind,
}

impl ViewLine {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Heading,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Body,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Muted,
        }
    }

    pub fn amount(text: impl Into<String>, negative: bool) -> Self {
        Self {
            text: text.into(),
            kind: if negative {
                LineKind::Negative
            } else {
                LineKind::Positive
            },
        }
    }

    pub fn blank() -> Self {
        Self::body("")
    }
}

/// A selectable row that triggers navigation when activated
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenAction {
    /// Left-hand label
    pub label: String,
    /// Right-hand detail column (amount, hint); may be empty
    pub detail: String,
    /// Concrete navigation path
    pub target: String,
    /// Whether activation uses tab semantics instead of a plain push
    pub single_top: bool,
}

/// Renderable content for one screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub title: String,
    pub lines: Vec<ViewLine>,
    pub actions: Vec<ScreenAction>,
}

/// Builds the view for one route
pub trait ScreenProvider {
    fn build(&self, entry: &BackStackEntry) -> ScreenView;
}

/// Provider registry keyed by route.
///
/// A registered route without a provider is a wiring bug, reported as
/// `MissingProvider` on first render rather than silently showing nothing.
pub struct ScreenHost {
    providers: HashMap<String, Box<dyn ScreenProvider>>,
}

impl ScreenHost {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register the content provider for a route
    pub fn register(&mut self, route: &str, provider: Box<dyn ScreenProvider>) {
        self.providers.insert(route.to_string(), provider);
    }

    pub fn has_provider(&self, route: &str) -> bool {
        self.providers.contains_key(route)
    }

    /// Build the view for the given back-stack entry
    pub fn render(&self, entry: &BackStackEntry) -> Result<ScreenView, NavError> {
        let provider =
            self.providers
                .get(entry.route())
                .ok_or_else(|| NavError::MissingProvider {
                    route: entry.route().to_string(),
                })?;
        Ok(provider.build(entry))
    }
}

impl Default for ScreenHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a dollar amount with thousands separators ("-$1,200.00")
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Destination, ScreenState};

    fn entry_for(route: &str) -> BackStackEntry {
        BackStackEntry {
            destination: Destination::new(route, "Test", '◉').unwrap(),
            arguments: HashMap::new(),
            state: ScreenState::default(),
        }
    }

    struct FixedScreen;

    impl ScreenProvider for FixedScreen {
        fn build(&self, _entry: &BackStackEntry) -> ScreenView {
            ScreenView {
                title: "Fixed".to_string(),
                lines: vec![ViewLine::body("hello")],
                actions: Vec::new(),
            }
        }
    }

    #[test]
    fn test_render_uses_registered_provider() {
        let mut host = ScreenHost::new();
        host.register("overview", Box::new(FixedScreen));

        let view = host.render(&entry_for("overview")).unwrap();
        assert_eq!(view.title, "Fixed");
    }

    #[test]
    fn test_render_without_provider_fails_fast() {
        let host = ScreenHost::new();
        let err = host.render(&entry_for("overview")).unwrap_err();
        assert_eq!(
            err,
            NavError::MissingProvider {
                route: "overview".to_string()
            }
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2215.13), "$2,215.13");
        assert_eq!(format_amount(-1200.0), "-$1,200.00");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(987.479), "$987.48");
        assert_eq!(format_amount(1234567.5), "$1,234,567.50");
    }
}
