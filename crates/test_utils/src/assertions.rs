//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for ledger actions that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_billing::{total_credits, total_debits, Direction, LedgerAction, Party};

/// Asserts that debits and credits of an action set are equal
///
/// # Panics
///
/// Panics with both totals if they differ, or if either overflows
pub fn assert_balanced(actions: &[LedgerAction]) {
    let debits = total_debits(actions).expect("debit total overflowed");
    let credits = total_credits(actions).expect("credit total overflowed");
    assert_eq!(
        debits, credits,
        "Unbalanced actions: debits={}, credits={}, actions={:?}",
        debits, credits, actions
    );
}

/// Asserts that a party has exactly one action with the given direction and amount
pub fn assert_action(actions: &[LedgerAction], who: Party, direction: Direction, amount: u64) {
    let matching: Vec<&LedgerAction> = actions.iter().filter(|a| a.who == who).collect();
    assert_eq!(
        matching.len(),
        1,
        "Expected one action for {}, found {}",
        who,
        matching.len()
    );
    assert_eq!(
        matching[0].direction, direction,
        "Wrong direction for {}",
        who
    );
    assert_eq!(
        matching[0].amount,
        Money::from_minor(amount),
        "Wrong amount for {}",
        who
    );
}

/// Asserts that an action set has the settlement layout: one driver debit
/// followed by owner, insurance, assistance and platform credits
pub fn assert_settlement_layout(actions: &[LedgerAction]) {
    let layout: Vec<(Party, Direction)> = actions.iter().map(|a| (a.who, a.direction)).collect();
    assert_eq!(
        layout,
        vec![
            (Party::Driver, Direction::Debit),
            (Party::Owner, Direction::Credit),
            (Party::Insurance, Direction::Credit),
            (Party::Assistance, Direction::Credit),
            (Party::Platform, Direction::Credit),
        ],
        "Unexpected settlement layout"
    );
}
