//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by FundMe:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type      | Description                               |
//! |----------------|-----------|-------------------------------------------|
//! | `Owner`        | `Address` | Sole identity allowed to withdraw         |
//! | `PriceFeed`    | `Address` | Oracle contract contributions are valued against |
//! | `FundingToken` | `Address` | Asset contract contributions are paid in  |
//!
//! All three are written once by the constructor and never change.
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                    | Type           | Description                       |
//! |------------------------|----------------|-----------------------------------|
//! | `Funders`              | `Vec<Address>` | Distinct funders, registration order, current epoch |
//! | `AmountFunded(addr)`   | `i128`         | Cumulative contribution per funder |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. `AmountFunded` entries are removed outright when an epoch ends,
//! so a missing entry reads as zero.

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
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Contract owner (Instance).
    Owner,
    /// Price feed contract (Instance).
    PriceFeed,
    /// Funding asset contract (Instance).
    FundingToken,
    /// Funder registry for the current epoch (Persistent).
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

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Panics if the constructor never ran.
pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn set_price_feed(env: &Env, feed: &Address) {
    env.storage().instance().set(&DataKey::PriceFeed, feed);
    bump_instance(env);
}

pub fn get_price_feed(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::PriceFeed)
        .expect("price feed not set")
}

pub fn set_funding_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FundingToken, token);
    bump_instance(env);
}

pub fn get_funding_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundingToken)
        .expect("funding token not set")
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative contribution of `funder`, zero when no entry exists.
pub fn get_amount_funded(env: &Env, funder: &Address) -> i128 {
    let key = DataKey::AmountFunded(funder.clone());
    match env.storage().persistent().get(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_amount_funded(env: &Env, funder: &Address, amount: i128) {
    let key = DataKey::AmountFunded(funder.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

/// Drop a funder's ledger entry; subsequent reads return zero.
pub fn clear_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}

/// The funder registry, empty before the first contribution of an epoch.
pub fn get_funders(env: &Env) -> Vec<Address> {
    match env.storage().persistent().get(&DataKey::Funders) {
        Some(funders) => {
            bump_persistent(env, &DataKey::Funders);
            funders
        }
        None => Vec::new(env),
    }
}

pub fn set_funders(env: &Env, funders: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Funders, funders);
    bump_persistent(env, &DataKey::Funders);
}

/// Append `funder` to the registry. Callers only invoke this for a funder's
/// first contribution of the epoch, so no membership re-check happens here.
pub fn push_funder(env: &Env, funder: &Address) {
    let mut funders = get_funders(env);
    funders.push_back(funder.clone());
    set_funders(env, &funders);
}

pub fn funders_count(env: &Env) -> u32 {
    get_funders(env).len()
}

/// Funder at `index`, re-reading the registry from storage on every call.
pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    get_funders(env).get(index)
}
