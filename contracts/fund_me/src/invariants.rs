#![allow(dead_code)]

extern crate std;

use soroban_sdk::{token, Address};

use crate::FundMeClient;

/// INV-1: a funder's ledger entry never decreases while funding is open.
pub fn assert_entry_monotonic(entry_before: i128, entry_after: i128) {
    assert!(
        entry_after >= entry_before,
        "INV-1 violated: ledger entry decreased from {} to {}",
        entry_before,
        entry_after
    );
}

/// INV-2: the funder registry holds each identity at most once per epoch.
pub fn assert_registry_distinct(client: &FundMeClient) {
    let count = client.get_funders_count();
    let mut seen: std::vec::Vec<Address> = std::vec::Vec::new();
    for index in 0..count {
        let funder = client.get_funder(&index);
        assert!(
            !seen.contains(&funder),
            "INV-2 violated: funder {:?} registered twice",
            funder
        );
        seen.push(funder);
    }
}

/// INV-3: a single contribution grows the registry by at most one entry.
pub fn assert_registry_growth(count_before: u32, count_after: u32) {
    assert!(
        count_after == count_before || count_after == count_before + 1,
        "INV-3 violated: registry length jumped from {} to {}",
        count_before,
        count_after
    );
}

/// INV-4: after a withdrawal the epoch is fully reset — every previously
/// registered funder reads zero, the registry is empty, and the contract
/// holds no balance.
pub fn assert_epoch_reset(client: &FundMeClient, token: &token::Client, funders: &[Address]) {
    for funder in funders {
        assert_eq!(
            client.get_amount_funded(funder),
            0,
            "INV-4 violated: funder {:?} still has a ledger entry",
            funder
        );
    }
    assert_eq!(
        client.get_funders_count(),
        0,
        "INV-4 violated: registry not empty after withdrawal"
    );
    assert_eq!(
        token.balance(&client.address),
        0,
        "INV-4 violated: contract still holds a balance after withdrawal"
    );
}

/// INV-5: contributions are conserved — the contract's balance equals the
/// sum of all ledger entries.
pub fn assert_conservation(client: &FundMeClient, token: &token::Client, funders: &[Address]) {
    let mut ledger_total = 0i128;
    for funder in funders {
        ledger_total += client.get_amount_funded(funder);
    }
    assert_eq!(
        token.balance(&client.address),
        ledger_total,
        "INV-5 violated: contract balance diverged from the ledger total"
    );
}
