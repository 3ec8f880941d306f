//! Contract events.
//!
//! Topics use short symbols so off-chain consumers (see `backend/indexer`)
//! can filter without decoding the payload:
//!
//! | Topic                          | Payload       |
//! |--------------------------------|---------------|
//! | `("funded", funder)`           | [`Funded`]    |
//! | `("withdrawn",)`               | [`Withdrawn`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A contribution was accepted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub funder: Address,
    pub amount: i128,
}

/// The ledger was drained to the owner.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub to: Address,
    pub amount: i128,
}

pub fn funded(env: &Env, funder: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funded"), funder.clone()),
        Funded {
            funder: funder.clone(),
            amount,
        },
    );
}

pub fn withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"),),
        Withdrawn {
            to: to.clone(),
            amount,
        },
    );
}
