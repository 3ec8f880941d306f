//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by FundMe:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key         | Type      | Description                              |
//! |-------------|-----------|------------------------------------------|
//! | `Owner`     | `Address` | Sole identity allowed to withdraw        |
//! | `PriceFeed` | `Address` | Aggregator consulted on every `fund`     |
//! | `Token`     | `Address` | Asset contributions are denominated in   |
//!
//! All three are written once at `init` and never change. Instance TTL is
//! bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type           | Description                         |
//! |------------------------|----------------|-------------------------------------|
//! | `Funders`              | `Vec<Address>` | Funders in first-contribution order |
//! | `AmountFunded(addr)`   | `i128`         | Cumulative contribution per funder  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. A missing `AmountFunded` entry reads as 0, so funders never
//! seen by the contract need no storage at all.

use soroban_sdk::{contracttype, Address, Env, Vec};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// Instance-tier keys (`Owner`, `PriceFeed`, `Token`) live as long as the
/// contract and are extended together. Persistent-tier keys (`Funders`,
/// `AmountFunded`) hold the mutable ledger with independent TTLs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Sole withdrawal authority, fixed at `init` (Instance).
    Owner,
    /// Price aggregator address, fixed at `init` (Instance).
    PriceFeed,
    /// Funding asset address, fixed at `init` (Instance).
    Token,
    /// Ordered list of distinct funders (Persistent).
    Funders,
    /// Cumulative contribution keyed by funder (Persistent).
    AmountFunded(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// `true` once `init` has run.
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Retrieve the owner. Panics if `init` has not run.
pub fn read_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("not initialised")
}

pub fn write_price_feed(env: &Env, feed: &Address) {
    env.storage().instance().set(&DataKey::PriceFeed, feed);
    bump_instance(env);
}

/// Retrieve the price feed. Panics if `init` has not run.
pub fn read_price_feed(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PriceFeed)
        .expect("not initialised")
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Retrieve the funding asset. Panics if `init` has not run.
pub fn read_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("not initialised")
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// The funder list; empty before the first contribution and after a drain.
pub fn read_funders(env: &Env) -> Vec<Address> {
    let key = DataKey::Funders;
    match env.storage().persistent().get(&key) {
        Some(funders) => {
            bump_persistent(env, &key);
            funders
        }
        None => Vec::new(env),
    }
}

/// Append a first-time funder to the list.
pub fn push_funder(env: &Env, funder: &Address) {
    let key = DataKey::Funders;
    let mut funders = read_funders(env);
    funders.push_back(funder.clone());
    env.storage().persistent().set(&key, &funders);
    bump_persistent(env, &key);
}

/// Reset the funder list to empty. Called exactly on successful drains.
pub fn clear_funders(env: &Env) {
    env.storage().persistent().remove(&DataKey::Funders);
}

/// Cumulative contribution of `funder`; 0 when no entry exists.
pub fn read_amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

/// Record the cumulative contribution of `funder`.
///
/// Writing 0 removes the entry so that drained funders cost no storage,
/// matching the "absence implies zero" read semantics.
pub fn write_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}
