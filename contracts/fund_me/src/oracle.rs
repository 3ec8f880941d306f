//! # Price Oracle Adapter
//!
//! Converts a raw token amount into its USD value using an external price
//! aggregator contract. The aggregator reports its latest answer together
//! with the decimal precision of that answer; dividing the product by the
//! answer's own scale leaves the result at the amount's 18-decimal scale.
//!
//! The aggregator is a trusted dependency: the latest answer is used as-is,
//! with no staleness or zero-price checks.

use soroban_sdk::{contractclient, Address, Env};

/// `10^18`, one whole unit at the 18-decimal scale shared by amounts and
/// USD values.
const PRECISION: i128 = 1_000_000_000_000_000_000;

/// Smallest accepted contribution: 50 USD at 18-decimal scale.
pub const MINIMUM_USD: i128 = 50 * PRECISION;

/// Interface of the external price aggregator.
///
/// `latest_answer` is the most recent reported price, expressed with
/// `decimals` fractional digits (e.g. `2000_00000000` with 8 decimals for
/// a price of 2000 USD).
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_answer(env: Env) -> i128;
    fn decimals(env: Env) -> u32;
}

/// USD value of `amount`, at the same 18-decimal scale as the amount.
///
/// `amount` is taken to be 18-decimal fixed point, so with a feed answer of
/// `2000e8` at 8 decimals, `convert_to_usd(1e18) = 1e18 * 2000e8 / 1e8 =
/// 2000e18`.
pub fn convert_to_usd(env: &Env, feed: &Address, amount: i128) -> i128 {
    let client = PriceFeedClient::new(env, feed);
    let price = client.latest_answer();
    let scale = 10_i128.pow(client.decimals());
    mul_div(amount, price, scale)
}

/// Floor of `a * b / denom`, dividing before multiplying so the
/// intermediate product stays in range whenever the result does.
///
/// A naive `a * b` overflows `i128` already for whole-token amounts at
/// realistic prices (`1e18 * 2000e8` is fine, but `1e18 * 2000e18` is not);
/// splitting `a` into quotient and remainder keeps each partial product
/// within `result + b` of the final value.
fn mul_div(a: i128, b: i128, denom: i128) -> i128 {
    a / denom * b + a % denom * b / denom
}
