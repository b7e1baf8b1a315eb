//! Accounts tab: demo account rows, each opening the detail screen.

use super::{format_amount, ScreenAction, ScreenProvider, ScreenView, ViewLine};
use crate::nav::BackStackEntry;

/// Static demo account (no real data model behind this application)
pub(crate) struct DemoAccount {
    pub name: &'static str,
    pub number: &'static str,
    pub balance: f64,
}

pub(crate) const DEMO_ACCOUNTS: [DemoAccount; 4] = [
    DemoAccount {
        name: "Checking",
        number: "•••• 1234",
        balance: 2215.13,
    },
    DemoAccount {
        name: "Savings",
        number: "•••• 5678",
        balance: 8676.88,
    },
    DemoAccount {
        name: "Car",
        number: "•••• 9012",
        balance: 987.48,
    },
    DemoAccount {
        name: "Vacation",
        number: "•••• 3456",
        balance: 253.30,
    },
];

pub(crate) fn accounts_total() -> f64 {
    DEMO_ACCOUNTS.iter().map(|a| a.balance).sum()
}

pub struct AccountsScreen;

impl ScreenProvider for AccountsScreen {
    fn build(&self, _entry: &BackStackEntry) -> ScreenView {
        let mut lines = vec![
            ViewLine::heading(format!("Total: {}", format_amount(accounts_total()))),
            ViewLine::muted("Select an account for details"),
            ViewLine::blank(),
        ];

        let actions = DEMO_ACCOUNTS
            .iter()
            .map(|account| ScreenAction {
                label: format!("{}  {}", account.name, account.number),
                detail: format_amount(account.balance),
                target: format!("account/{}", account.name),
                single_top: false,
            })
            .collect();

        lines.push(ViewLine::muted("Enter opens the highlighted account"));

        ScreenView {
            title: "Accounts".to_string(),
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
    fn test_every_row_targets_the_detail_route() {
        let entry = BackStackEntry {
            destination: Destination::new("accounts", "Accounts", '◈').unwrap(),
            arguments: HashMap::new(),
            state: ScreenState::default(),
        };
        let view = AccountsScreen.build(&entry);

        assert_eq!(view.actions.len(), DEMO_ACCOUNTS.len());
        for (action, account) in view.actions.iter().zip(DEMO_ACCOUNTS.iter()) {
            assert_eq!(action.target, format!("account/{}", account.name));
            assert!(!action.single_top);
        }
    }
}
