//! # FundMe Contract
//!
//! A single-owner crowdfunding ledger. Anyone may contribute the funding
//! asset as long as the contribution is worth at least [`MINIMUM_USD`] at the
//! price feed's current quote; only the owner may withdraw, and a withdrawal
//! drains the whole balance and resets every funder's ledger entry.
//!
//! | Phase        | Entry Point(s)                                  |
//! |--------------|-------------------------------------------------|
//! | Funding      | [`FundMe::fund`]                                |
//! | Withdrawal   | [`FundMe::withdraw`], [`FundMe::cheaper_withdraw`] |
//! | Queries      | `get_owner`, `get_price_feed`, `get_funding_token`, `get_amount_funded`, `get_funder`, `get_funders_count`, `get_minimum_usd` |
//!
//! ## Architecture
//!
//! Price conversion is fully delegated to [`price_feed`], storage access to
//! [`storage`], and event emission to [`events`]. This file contains **only**
//! the public entry points and the error taxonomy.
//!
//! The price feed is an address, not a compile-time dependency: any contract
//! answering `decimals()` and `lastprice()` works. Production deployments
//! point at a live oracle; local deployments point at the `mock_price_feed`
//! stub from this workspace.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

mod events;
pub mod price_feed;
mod storage;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use price_feed::{PriceData, PriceFeed, PriceFeedClient};

/// Minimum accepted contribution value, in USD at the funding asset's
/// 7-decimal precision (i.e. 50 USD).
pub const MINIMUM_USD: i128 = 50 * 10_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Converted contribution value is below [`MINIMUM_USD`].
    InsufficientContribution = 1,
    /// Withdrawal attempted by an identity other than the owner.
    NotOwner = 2,
    /// The payout transfer to the owner did not complete.
    TransferFailed = 3,
    /// The price feed could not be read. Never retried or cached over.
    OracleUnavailable = 4,
    /// Funder registry index past the current registry length.
    IndexOutOfRange = 5,
}

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Deploy-time initialisation.
    ///
    /// - `owner` must sign the deployment and becomes the only identity
    ///   allowed to withdraw. Fixed for the contract's lifetime.
    /// - `price_feed` is the oracle contract contributions are valued against.
    /// - `funding_token` is the asset contract contributions are paid in
    ///   (the native asset's SAC in a standard deployment).
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, funding_token: Address) {
        owner.require_auth();
        storage::set_owner(&env, &owner);
        storage::set_price_feed(&env, &price_feed);
        storage::set_funding_token(&env, &funding_token);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the funding asset.
    ///
    /// The amount is valued in USD at the feed's current quote, truncating.
    /// Contributions worth less than [`MINIMUM_USD`] are rejected before any
    /// transfer takes place. A funder enters the registry on their first
    /// accepted contribution of the epoch; later contributions only grow
    /// their ledger entry.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), Error> {
        funder.require_auth();

        let feed = storage::get_price_feed(&env);
        let (price, decimals) = price_feed::latest_price(&env, &feed)?;
        let usd_value = price_feed::conversion_rate(amount, price, decimals)?;
        if usd_value < MINIMUM_USD {
            return Err(Error::InsufficientContribution);
        }

        let token = token::Client::new(&env, &storage::get_funding_token(&env));
        token.transfer(&funder, &env.current_contract_address(), &amount);

        let funded = storage::get_amount_funded(&env, &funder);
        storage::set_amount_funded(&env, &funder, funded + amount);
        // A funder's entry is nonzero exactly while they are registered, so a
        // zero previous entry means this is their first contribution this epoch.
        if funded == 0 {
            storage::push_funder(&env, &funder);
        }

        events::contribution_received(&env, &funder, amount, usd_value);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Withdrawal
    // ─────────────────────────────────────────────────────────

    /// Withdraw the whole balance to the owner and reset the funding epoch.
    ///
    /// Zeroes the ledger entry of every registered funder, empties the
    /// registry, then transfers the contract's full balance to the owner.
    /// Any failure rolls the entire operation back; no partial reset is
    /// observable.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = storage::get_owner(&env);
        if caller != owner {
            return Err(Error::NotOwner);
        }

        let count = storage::funders_count(&env);
        // Walks the persistent registry directly, one read per funder.
        let mut index = 0;
        while let Some(funder) = storage::funder_at(&env, index) {
            storage::clear_amount_funded(&env, &funder);
            index += 1;
        }
        storage::set_funders(&env, &Vec::new(&env));

        let amount = Self::drain_balance(&env, &owner)?;
        events::funds_withdrawn(&env, &owner, amount, count);
        Ok(())
    }

    /// [`FundMe::withdraw`] with a cheaper reset loop.
    ///
    /// Snapshots the funder registry into a local copy once instead of
    /// re-reading persistent storage on every iteration. Observable state
    /// transitions are identical to `withdraw`.
    pub fn cheaper_withdraw(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = storage::get_owner(&env);
        if caller != owner {
            return Err(Error::NotOwner);
        }

        let funders = storage::get_funders(&env);
        for funder in funders.iter() {
            storage::clear_amount_funded(&env, &funder);
        }
        storage::set_funders(&env, &Vec::new(&env));

        let amount = Self::drain_balance(&env, &owner)?;
        events::funds_withdrawn(&env, &owner, amount, funders.len());
        Ok(())
    }

    /// Transfer the contract's entire funding-asset balance to `owner`.
    fn drain_balance(env: &Env, owner: &Address) -> Result<i128, Error> {
        let token = token::Client::new(env, &storage::get_funding_token(env));
        let balance = token.balance(&env.current_contract_address());
        if balance > 0 {
            token
                .try_transfer(&env.current_contract_address(), owner, &balance)
                .map_err(|_| Error::TransferFailed)?
                .map_err(|_| Error::TransferFailed)?;
        }
        Ok(balance)
    }

    // ─────────────────────────────────────────────────────────
    // Read accessors
    // ─────────────────────────────────────────────────────────

    /// Identity allowed to withdraw.
    pub fn get_owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Price feed contract contributions are valued against.
    pub fn get_price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    /// Asset contract contributions are paid in.
    pub fn get_funding_token(env: Env) -> Address {
        storage::get_funding_token(&env)
    }

    /// Cumulative amount contributed by `funder` this epoch. Zero for
    /// identities that never contributed (or contributed in a past epoch).
    pub fn get_amount_funded(env: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&env, &funder)
    }

    /// Funder at `index` in registration order.
    pub fn get_funder(env: Env, index: u32) -> Result<Address, Error> {
        storage::funder_at(&env, index).ok_or(Error::IndexOutOfRange)
    }

    /// Number of distinct funders registered this epoch.
    pub fn get_funders_count(env: Env) -> u32 {
        storage::funders_count(&env)
    }

    /// The contribution threshold, in USD at the funding asset's precision.
    pub fn get_minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }
}
