//! Overview tab: alert banner plus account and bill summaries.
//!
//! The "see all" rows mirror the tab row: activating them performs a full
//! single-top tab switch, not a plain push.

use super::accounts::{accounts_total, DEMO_ACCOUNTS};
use super::bills::bills_total;
use super::{format_amount, ScreenAction, ScreenProvider, ScreenView, ViewLine};
use crate::nav::BackStackEntry;

/// How many account rows the summary shows before "see all"
const SUMMARY_ROWS: usize = 3;

pub struct OverviewScreen;

impl ScreenProvider for OverviewScreen {
    fn build(&self, _entry: &BackStackEntry) -> ScreenView {
        let mut lines = vec![
            ViewLine::muted("Heads up: you've used up 90% of your Shopping budget this month."),
            ViewLine::blank(),
            ViewLine::heading(format!("Accounts  {}", format_amount(accounts_total()))),
        ];

        for account in DEMO_ACCOUNTS.iter().take(SUMMARY_ROWS) {
            lines.push(ViewLine::body(format!(
                "  {:<10} {}",
                account.name,
                format_amount(account.balance)
            )));
        }

        lines.push(ViewLine::blank());
        lines.push(ViewLine::heading(format!(
            "Bills  {}",
            format_amount(bills_total())
        )));

        let actions = vec![
            ScreenAction {
                label: "See all accounts".to_string(),
                detail: String::new(),
                target: "accounts".to_string(),
                single_top: true,
            },
            ScreenAction {
                label: "See all bills".to_string(),
                detail: String::new(),
                target: "bills".to_string(),
                single_top: true,
            },
        ];

        ScreenView {
            title: "Overview".to_string(),
            lines,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Destination, ScreenState};
    use std::collections::HashMap;

    #[test]
    fn test_see_all_rows_use_tab_semantics() {
        let entry = BackStackEntry {
            destination: Destination::new("overview", "Overview", '◉').unwrap(),
            arguments: HashMap::new(),
            state: ScreenState::default(),
        };
        let view = OverviewScreen.build(&entry);

        let targets: Vec<&str> = view.actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["accounts", "bills"]);
        assert!(view.actions.iter().all(|a| a.single_top));
    }
}
