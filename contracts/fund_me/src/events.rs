//! Contract event payloads and publish helpers.
//!
//! Topic scheme: a short kind symbol, plus the funder address on
//! contribution events so indexers can filter per account.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Emitted for every accepted contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub funder: Address,
    /// Contributed amount in the funding asset.
    pub amount: i128,
    /// The amount's USD value at the quote the contribution was accepted at.
    pub usd_value: i128,
}

/// Emitted for every successful withdrawal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub owner: Address,
    /// Whole balance paid out.
    pub amount: i128,
    /// Number of funders whose ledger entries were reset.
    pub funders_reset: u32,
}

/// Topics: `("funded", funder)`.
pub fn contribution_received(env: &Env, funder: &Address, amount: i128, usd_value: i128) {
    env.events().publish(
        (symbol_short!("funded"), funder.clone()),
        ContributionReceived {
            funder: funder.clone(),
            amount,
            usd_value,
        },
    );
}

/// Topics: `("withdrawn",)`.
pub fn funds_withdrawn(env: &Env, owner: &Address, amount: i128, funders_reset: u32) {
    env.events().publish(
        (symbol_short!("withdrawn"),),
        FundsWithdrawn {
            owner: owner.clone(),
            amount,
            funders_reset,
        },
    );
}
