//! Bills tab: upcoming demo bills with due dates.

use super::{format_amount, ScreenProvider, ScreenView, ViewLine};
use crate::nav::BackStackEntry;

struct DemoBill {
    payee: &'static str,
    due: &'static str,
    amount: f64,
}

const DEMO_BILLS: [DemoBill; 4] = [
    DemoBill {
        payee: "RedPay Credit",
        due: "Jan 25",
        amount: -45.36,
    },
    DemoBill {
        payee: "Rent",
        due: "Feb 3",
        amount: -1200.00,
    },
    DemoBill {
        payee: "TabFine Credit",
        due: "Feb 5",
        amount: -87.33,
    },
    DemoBill {
        payee: "ABC Loans",
        due: "Feb 10",
        amount: -400.00,
    },
];

pub(crate) fn bills_total() -> f64 {
    DEMO_BILLS.iter().map(|b| b.amount).sum()
}

pub struct BillsScreen;

impl ScreenProvider for BillsScreen {
    fn build(&self, _entry: &BackStackEntry) -> ScreenView {
        let mut lines = vec![
            ViewLine::heading(format!("Due: {}", format_amount(bills_total()))),
            ViewLine::blank(),
        ];

        for bill in &DEMO_BILLS {
            lines.push(ViewLine::body(format!("{}  ({})", bill.payee, bill.due)));
            lines.push(ViewLine::amount(format_amount(bill.amount), true));
        }

        ScreenView {
            title: "Bills".to_string(),
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

    #[test]
    fn test_bills_screen_has_no_actions() {
        let entry = BackStackEntry {
            destination: Destination::new("bills", "Bills", '◇').unwrap(),
            arguments: HashMap::new(),
            state: ScreenState::default(),
        };
        let view = BillsScreen.build(&entry);

        assert!(view.actions.is_empty());
        assert!(view.lines.iter().any(|l| l.text.contains("Rent")));
    }
}
