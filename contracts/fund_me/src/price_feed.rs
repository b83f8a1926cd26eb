//! # Price feed boundary
//!
//! The ledger values every contribution against an external price feed that
//! quotes the funding asset in USD. The feed is held as a contract address
//! and queried on every contribution; there is no caching and no stale-price
//! fallback. Any contract answering [`PriceFeed`]'s two functions works —
//! a live oracle in production, the workspace's `mock_price_feed` stub
//! locally.

use soroban_sdk::{contractclient, contracttype, Address, Env};

use crate::Error;

/// A single feed observation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    /// Funding-asset price in USD at the feed's decimal scale.
    pub price: i128,
    /// Recording timestamp.
    pub timestamp: u64,
}

/// Consumed price-feed interface.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Number of decimals in every price the feed reports.
    fn decimals(env: Env) -> u32;

    /// The most recent quote, or `None` if the feed holds no answer.
    fn lastprice(env: Env) -> Option<PriceData>;
}

/// Read the current quote from the feed at `feed`.
///
/// Every failure mode of the cross-contract read — unreachable contract,
/// trapped invocation, malformed return value, absent answer — collapses to
/// [`Error::OracleUnavailable`].
pub fn latest_price(env: &Env, feed: &Address) -> Result<(i128, u32), Error> {
    let client = PriceFeedClient::new(env, feed);
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::OracleUnavailable),
    };
    match client.try_lastprice() {
        Ok(Ok(Some(data))) => Ok((data.price, decimals)),
        _ => Err(Error::OracleUnavailable),
    }
}

/// Value `amount` of the funding asset in USD: `amount * price / 10^decimals`,
/// truncating. The feed's scale cancels out, so the result carries the
/// amount's own decimal precision.
pub fn conversion_rate(amount: i128, price: i128, decimals: u32) -> Result<i128, Error> {
    let scale = 10i128.checked_pow(decimals).ok_or(Error::OracleUnavailable)?;
    Ok(amount * price / scale)
}
