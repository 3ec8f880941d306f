extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::invariants;
use crate::test::{collect_funders, fund_from_new_funder, setup, Setup, ONE};
use crate::Error;

fn assert_fully_drained(s: &Setup, funders: &[Address], expected_payout: i128) {
    invariants::assert_drained(collect_funders(s).len(), s.token.balance(&s.client.address));
    assert_eq!(s.client.try_get_funder(&0), Err(Ok(Error::IndexOutOfRange)));
    for funder in funders {
        assert_eq!(s.client.get_address_to_amount_refunded(funder), 0);
    }
    assert_eq!(s.token.balance(&s.owner), expected_payout);
}

#[test]
fn test_withdraw_single_funder() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);

    s.client.withdraw(&s.owner);

    assert_fully_drained(&s, &[funder], ONE);
}

#[test]
fn test_cheaper_withdraw_single_funder() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);

    s.client.cheaper_withdraw(&s.owner);

    assert_fully_drained(&s, &[funder], ONE);
}

#[test]
fn test_withdraw_multiple_funders() {
    let s = setup();
    let a = fund_from_new_funder(&s, ONE);
    let b = fund_from_new_funder(&s, 2 * ONE);
    let c = fund_from_new_funder(&s, 3 * ONE);

    s.client.withdraw(&s.owner);

    assert_fully_drained(&s, &[a, b, c], 6 * ONE);
}

#[test]
fn test_cheaper_withdraw_multiple_funders() {
    let s = setup();
    let a = fund_from_new_funder(&s, ONE);
    let b = fund_from_new_funder(&s, 2 * ONE);
    let c = fund_from_new_funder(&s, 3 * ONE);

    s.client.cheaper_withdraw(&s.owner);

    assert_fully_drained(&s, &[a, b, c], 6 * ONE);
}

/// Both variants must reach the same end state from the same start state.
#[test]
fn test_withdraw_variants_are_equivalent() {
    let run = |cheaper: bool| -> (Setup, std::vec::Vec<Address>) {
        let s = setup();
        let funders = std::vec![
            fund_from_new_funder(&s, ONE),
            fund_from_new_funder(&s, 5 * ONE),
        ];
        if cheaper {
            s.client.cheaper_withdraw(&s.owner);
        } else {
            s.client.withdraw(&s.owner);
        }
        (s, funders)
    };

    let (standard, standard_funders) = run(false);
    let (cheaper, cheaper_funders) = run(true);

    assert_fully_drained(&standard, &standard_funders, 6 * ONE);
    assert_fully_drained(&cheaper, &cheaper_funders, 6 * ONE);
}

#[test]
fn test_withdraw_requires_owner() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);
    let attacker = Address::generate(&s.env);

    let result = s.client.try_withdraw(&attacker);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    // The ledger is untouched.
    assert_eq!(s.client.get_address_to_amount_refunded(&funder), ONE);
    assert_eq!(s.client.get_funder(&0), funder);
    assert_eq!(s.token.balance(&s.client.address), ONE);
}

#[test]
fn test_cheaper_withdraw_requires_owner() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);
    let attacker = Address::generate(&s.env);

    let result = s.client.try_cheaper_withdraw(&attacker);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    assert_eq!(s.client.get_address_to_amount_refunded(&funder), ONE);
    assert_eq!(s.client.get_funder(&0), funder);
    assert_eq!(s.token.balance(&s.client.address), ONE);
}

/// A failed payout must leave the ledger exactly as it was: the zeroed
/// amounts and the cleared list are rolled back along with the transfer.
#[test]
fn test_failed_payout_rolls_back_withdraw() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);

    // Freeze the contract's token balance so the payout transfer fails.
    s.sac.set_authorized(&s.client.address, &false);

    let result = s.client.try_withdraw(&s.owner);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    assert_eq!(s.client.get_address_to_amount_refunded(&funder), ONE);
    assert_eq!(s.client.get_funder(&0), funder);
    assert_eq!(s.token.balance(&s.client.address), ONE);
    assert_eq!(s.token.balance(&s.owner), 0);
}

#[test]
fn test_failed_payout_rolls_back_cheaper_withdraw() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);

    s.sac.set_authorized(&s.client.address, &false);

    let result = s.client.try_cheaper_withdraw(&s.owner);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));

    assert_eq!(s.client.get_address_to_amount_refunded(&funder), ONE);
    assert_eq!(s.client.get_funder(&0), funder);
    assert_eq!(s.token.balance(&s.client.address), ONE);
    assert_eq!(s.token.balance(&s.owner), 0);
}

#[test]
fn test_withdraw_on_empty_ledger_succeeds() {
    let s = setup();

    s.client.withdraw(&s.owner);

    invariants::assert_drained(collect_funders(&s).len(), s.token.balance(&s.client.address));
    assert_eq!(s.token.balance(&s.owner), 0);
}

/// Drained is not terminal: the next accepted contribution reopens the ledger.
#[test]
fn test_fund_after_withdraw_reopens_the_ledger() {
    let s = setup();
    let funder = fund_from_new_funder(&s, ONE);
    s.client.withdraw(&s.owner);

    s.sac.mint(&funder, &(2 * ONE));
    s.client.fund(&funder, &(2 * ONE));

    assert_eq!(s.client.get_funder(&0), funder);
    assert_eq!(s.client.get_address_to_amount_refunded(&funder), 2 * ONE);
    invariants::assert_book_matches_balance(2 * ONE, s.token.balance(&s.client.address));
}
