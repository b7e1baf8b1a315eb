//! Account detail screen, reached by row selection or deep link.
//!
//! Not a tab; the tab row keeps the default tab highlighted while this
//! screen is on top.

use super::accounts::DEMO_ACCOUNTS;
use super::{format_amount, ScreenProvider, ScreenView, ViewLine};
use crate::nav::BackStackEntry;

/// Path parameter carrying the account name
pub const ACCOUNT_TYPE_ARG: &str = "account_type";

pub struct SingleAccountScreen;

impl ScreenProvider for SingleAccountScreen {
    fn build(&self, entry: &BackStackEntry) -> ScreenView {
        let account_type = entry.arg(ACCOUNT_TYPE_ARG).unwrap_or("");

        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(account_type));

        let (title, lines) = match account {
            Some(account) => (
                account.name.to_string(),
                vec![
                    ViewLine::muted(account.number),
                    ViewLine::blank(),
                    ViewLine::heading("Current balance"),
                    ViewLine::amount(format_amount(account.balance), account.balance < 0.0),
                    ViewLine::blank(),
                    ViewLine::muted("Esc returns to the previous screen"),
                ],
            ),
            None => (
                "Account".to_string(),
                vec![
                    ViewLine::body(format!("No account named '{}'.", account_type)),
                    ViewLine::blank(),
                    ViewLine::muted("Esc returns to the previous screen"),
                ],
            ),
        };

        ScreenView {
            title,
            lines,
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Destination, ScreenState};
    use std::collections::HashMap;

    fn entry_with_arg(value: &str) -> BackStackEntry {
        let mut arguments = HashMap::new();
        arguments.insert(ACCOUNT_TYPE_ARG.to_string(), value.to_string());
        BackStackEntry {
            destination: Destination::new("account/{account_type}", "Account", '◎').unwrap(),
            arguments,
            state: ScreenState::default(),
        }
    }

    #[test]
    fn test_renders_bound_account() {
        let view = SingleAccountScreen.build(&entry_with_arg("checking"));
        assert_eq!(view.title, "Checking");
        assert!(view.lines.iter().any(|l| l.text == "$2,215.13"));
    }

    #[test]
    fn test_unknown_account_gets_placeholder_body() {
        let view = SingleAccountScreen.build(&entry_with_arg("yacht"));
        assert_eq!(view.title, "Account");
        assert!(view.lines.iter().any(|l| l.text.contains("yacht")));
    }
}
