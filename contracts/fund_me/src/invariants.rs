#![allow(dead_code)]

extern crate std;

use soroban_sdk::{Address, Vec};

/// INV-1: The sum of all recorded contributions equals the balance the
/// contract holds in the funding token.
pub fn assert_book_matches_balance(recorded_total: i128, contract_balance: i128) {
    assert_eq!(
        recorded_total, contract_balance,
        "INV-1 violated: recorded contributions ({}) != held balance ({})",
        recorded_total, contract_balance
    );
}

/// INV-2: A funder appears in the list at most once, regardless of how many
/// times they contributed.
pub fn assert_no_duplicate_funders(funders: &Vec<Address>) {
    for i in 0..funders.len() {
        for j in (i + 1)..funders.len() {
            assert_ne!(
                funders.get_unchecked(i),
                funders.get_unchecked(j),
                "INV-2 violated: funder listed at both {} and {}",
                i,
                j
            );
        }
    }
}

/// INV-3: A successful drain leaves an empty funder list and a zero balance.
pub fn assert_drained(funders_len: u32, contract_balance: i128) {
    assert_eq!(
        funders_len, 0,
        "INV-3 violated: {} funders remain after drain",
        funders_len
    );
    assert_eq!(
        contract_balance, 0,
        "INV-3 violated: {} still held after drain",
        contract_balance
    );
}

/// INV-4: A successful `fund(amount)` increases the funder's recorded total
/// by exactly `amount`.
pub fn assert_fund_invariant(recorded_before: i128, recorded_after: i128, amount: i128) {
    assert_eq!(
        recorded_after,
        recorded_before + amount,
        "INV-4 violated: {} + {} != {}",
        recorded_before,
        amount,
        recorded_after
    );
}

/// INV-5: A rejected call leaves the ledger exactly as it was.
pub fn assert_unchanged(
    funders_before: &Vec<Address>,
    funders_after: &Vec<Address>,
    recorded_before: i128,
    recorded_after: i128,
) {
    assert_eq!(
        funders_before, funders_after,
        "INV-5 violated: funder list changed by a rejected call"
    );
    assert_eq!(
        recorded_before, recorded_after,
        "INV-5 violated: recorded amount changed by a rejected call"
    );
}
