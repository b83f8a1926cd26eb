extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, TryIntoVal,
};

use mock_price_feed::MockPriceFeed;

use crate::events::{ContributionReceived, FundsWithdrawn};
use crate::{FundMe, FundMeClient};

const FEED_DECIMALS: u32 = 8;
const INITIAL_ANSWER: i128 = 200_000_000_000;
const ONE_UNIT: i128 = 10_000_000;

fn setup() -> (Env, FundMeClient<'static>, Address, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &sac.address());
    let feed = env.register(MockPriceFeed, (FEED_DECIMALS, INITIAL_ANSWER));
    let contract_id = env.register(FundMe, (owner.clone(), feed, token.address.clone()));
    let client = FundMeClient::new(&env, &contract_id);
    (env, client, owner, token)
}

fn mint(env: &Env, token: &token::Client, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, &token.address).mint(to, &amount);
}

#[test]
fn contribution_emits_funded_event() {
    let (env, client, _owner, token) = setup();
    let funder = Address::generate(&env);
    mint(&env, &token, &funder, ONE_UNIT);

    client.fund(&funder, &ONE_UNIT);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topics: ("funded", funder)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("funded").into_val(&env),
        funder.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ContributionReceived struct
    let event_data: ContributionReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionReceived {
            funder: funder.clone(),
            amount: ONE_UNIT,
            usd_value: 2_000 * ONE_UNIT,
        }
    );
}

#[test]
fn withdrawal_emits_withdrawn_event() {
    let (env, client, owner, token) = setup();
    for _ in 0..3 {
        let funder = Address::generate(&env);
        mint(&env, &token, &funder, ONE_UNIT);
        client.fund(&funder, &ONE_UNIT);
    }

    client.withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topics: ("withdrawn",)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("withdrawn").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: FundsWithdrawn struct
    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            owner: owner.clone(),
            amount: 3 * ONE_UNIT,
            funders_reset: 3,
        }
    );
}

#[test]
fn cheaper_withdraw_emits_the_same_event_shape() {
    let (env, client, owner, token) = setup();
    let funder = Address::generate(&env);
    mint(&env, &token, &funder, ONE_UNIT);
    client.fund(&funder, &ONE_UNIT);

    client.cheaper_withdraw(&owner);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![&env, symbol_short!("withdrawn").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: FundsWithdrawn = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        FundsWithdrawn {
            owner: owner.clone(),
            amount: ONE_UNIT,
            funders_reset: 1,
        }
    );
}
