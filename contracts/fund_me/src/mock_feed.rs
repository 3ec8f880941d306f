//! Mock price aggregator implementing the [`crate::oracle::PriceFeed`]
//! interface, for unit tests and local sandboxes only (gated behind
//! `test`/`testutils`). The answer is seeded at `init` and can be moved
//! with `update_answer` to simulate market changes.

use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FeedKey {
    Decimals,
    Answer,
}

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn init(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&FeedKey::Decimals, &decimals);
        env.storage()
            .instance()
            .set(&FeedKey::Answer, &initial_answer);
    }

    pub fn latest_answer(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&FeedKey::Answer)
            .expect("feed not initialised")
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&FeedKey::Decimals)
            .expect("feed not initialised")
    }

    pub fn update_answer(env: Env, answer: i128) {
        env.storage().instance().set(&FeedKey::Answer, &answer);
    }
}
