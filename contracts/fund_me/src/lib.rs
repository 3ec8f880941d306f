//! # FundMe Contract
//!
//! A minimum-contribution crowdfunding ledger. Anonymous parties contribute
//! the configured token; contributions whose USD value (per an external price
//! feed) falls below [`MINIMUM_USD`] are rejected, and only the owner fixed
//! at initialisation may drain the accumulated balance.
//!
//! | Phase      | Entry Point(s)                                   |
//! |------------|--------------------------------------------------|
//! | Bootstrap  | [`FundMe::init`]                                 |
//! | Funding    | [`FundMe::fund`]                                 |
//! | Withdrawal | [`FundMe::withdraw`], [`FundMe::cheaper_withdraw`] |
//! | Queries    | `get_funder`, `get_address_to_amount_refunded`, `get_price_feed`, `get_owner`, `get_token` |
//!
//! ## Architecture
//!
//! Price conversion is fully delegated to [`oracle`], storage access to
//! [`storage`], event emission to [`events`]. This file contains only the
//! public entry points and the shared drain tail used by both withdrawal
//! variants.
//!
//! ## Atomicity
//!
//! Every entry point executes as one host invocation. Fallible entry points
//! return `Result<_, Error>`; an `Err` fails the invocation, which reverts
//! all storage writes and token movements — there is never an observable
//! partial state.
//!
//! ## Trust boundary
//!
//! The price feed is a trusted read-only dependency. Its latest answer is
//! taken as-is; staleness and zero-price conditions are deliberately not
//! validated here.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

mod events;
mod oracle;
mod storage;

#[cfg(any(test, feature = "testutils"))]
pub mod mock_feed;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_withdraw;

pub use oracle::MINIMUM_USD;

use storage::{
    clear_funders, has_owner, push_funder, read_amount_funded, read_funders, read_owner,
    read_price_feed, read_token, write_amount_funded, write_owner, write_price_feed, write_token,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientFunds = 1,
    Unauthorized = 2,
    IndexOutOfRange = 3,
    TransferFailed = 4,
    AlreadyInitialized = 5,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Initialise the ledger.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    ///
    /// - `owner` becomes the sole identity allowed to withdraw and must
    ///   sign the transaction.
    /// - `price_feed` is the aggregator contract consulted on every `fund`.
    /// - `token` is the asset contributions are denominated in.
    pub fn init(env: Env, owner: Address, price_feed: Address, token: Address) -> Result<(), Error> {
        owner.require_auth();
        if has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        write_owner(&env, &owner);
        write_price_feed(&env, &price_feed);
        write_token(&env, &token);
        Ok(())
    }

    /// Contribute `amount` of the funding token.
    ///
    /// The contribution is rejected with `Error::InsufficientFunds` when its
    /// USD value, computed via the price feed, is below [`MINIMUM_USD`].
    /// A first-time funder is appended to the funder list; repeat
    /// contributions only increase the recorded amount.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        let price_feed = read_price_feed(&env);
        if oracle::convert_to_usd(&env, &price_feed, amount) < MINIMUM_USD {
            return Err(Error::InsufficientFunds);
        }

        let token_client = token::Client::new(&env, &read_token(&env));
        token_client.transfer(&funder, &env.current_contract_address(), &amount);

        // "Already recorded" doubles as the list-membership check, so the
        // funder list never needs scanning on the hot path.
        let funded_before = read_amount_funded(&env, &funder);
        if funded_before == 0 {
            push_funder(&env, &funder);
        }
        write_amount_funded(&env, &funder, funded_before + amount);

        events::funded(&env, &funder, amount);
        Ok(())
    }

    /// Drain the ledger to the owner.
    ///
    /// Zeroes every funder's recorded amount, clears the funder list and
    /// transfers the full held balance to the owner. Only the owner may
    /// call this; anyone else gets `Error::Unauthorized`.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = require_owner(&env, &caller)?;

        // Re-reads the authoritative list on every step.
        let mut index: u32 = 0;
        while index < read_funders(&env).len() {
            let funder = read_funders(&env).get_unchecked(index);
            write_amount_funded(&env, &funder, 0);
            index += 1;
        }

        settle(&env, &owner)
    }

    /// Storage-access-optimised variant of [`FundMe::withdraw`].
    ///
    /// Identical gate and end state; the funder list is copied into a local
    /// working set once instead of being re-read per funder.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = require_owner(&env, &caller)?;

        let funders: Vec<Address> = read_funders(&env);
        for funder in funders.iter() {
            write_amount_funded(&env, &funder, 0);
        }

        settle(&env, &owner)
    }

    /// Return the funder at `index`, in order of first contribution.
    ///
    /// Fails with `Error::IndexOutOfRange` past the end of the list.
    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        read_funders(&env).get(index).ok_or(Error::IndexOutOfRange)
    }

    /// Cumulative amount contributed by `funder`; 0 for unknown identities.
    pub fn get_address_to_amount_refunded(env: Env, funder: Address) -> i128 {
        read_amount_funded(&env, &funder)
    }

    /// The price feed fixed at initialisation.
    pub fn get_price_feed(env: Env) -> Address {
        read_price_feed(&env)
    }

    /// The owner fixed at initialisation.
    pub fn get_owner(env: Env) -> Address {
        read_owner(&env)
    }

    /// The funding asset fixed at initialisation.
    pub fn get_token(env: Env) -> Address {
        read_token(&env)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    let owner = read_owner(env);
    if caller != &owner {
        return Err(Error::Unauthorized);
    }
    Ok(owner)
}

/// Shared drain tail: clear the funder list and pay the balance out.
///
/// A failed payout returns `Error::TransferFailed`, failing the invocation
/// and reverting the zeroing done by the caller along with the cleared list.
fn settle(env: &Env, owner: &Address) -> Result<(), Error> {
    clear_funders(env);

    let token_client = token::Client::new(env, &read_token(env));
    let contract = env.current_contract_address();
    let balance = token_client.balance(&contract);
    if token_client.try_transfer(&contract, owner, &balance).is_err() {
        return Err(Error::TransferFailed);
    }

    events::withdrawn(env, owner, balance);
    Ok(())
}
