//! # Mock price feed
//!
//! A deployable stand-in for a live price oracle. Local networks get one of
//! these instead of a real feed: it is constructed with a decimal precision
//! and an initial answer, always reports that answer from `lastprice`, and
//! lets tests move the quote with `set_answer`.
//!
//! The interface is structurally compatible with what the FundMe ledger
//! consumes (`decimals` + `lastprice`); there is no compile-time coupling
//! between the two contracts.

#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Env, Symbol};

/// A single feed observation, mirroring the live oracles' record shape.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

const DECIMALS: Symbol = symbol_short!("DECIMALS");
const ANSWER: Symbol = symbol_short!("ANSWER");

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// - `decimals`: decimal precision of every reported price.
    /// - `initial_answer`: the quote the feed starts out with.
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        env.storage().instance().set(&DECIMALS, &decimals);
        env.storage().instance().set(&ANSWER, &initial_answer);
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&DECIMALS).unwrap_or(0)
    }

    /// The current answer, stamped with the current ledger time.
    pub fn lastprice(env: Env) -> Option<PriceData> {
        let price: i128 = env.storage().instance().get(&ANSWER)?;
        Some(PriceData {
            price,
            timestamp: env.ledger().timestamp(),
        })
    }

    /// Move the quote. Unrestricted: this contract only ever backs local
    /// networks and tests.
    pub fn set_answer(env: Env, answer: i128) {
        env.storage().instance().set(&ANSWER, &answer);
    }
}

#[cfg(test)]
mod test;
