extern crate std;

use soroban_sdk::{testutils::Ledger, Env};

use crate::{MockPriceFeed, MockPriceFeedClient};

const DECIMALS: u32 = 8;
const INITIAL_ANSWER: i128 = 200_000_000_000; // 2000 USD at 8 decimals

fn setup() -> (Env, MockPriceFeedClient<'static>) {
    let env = Env::default();
    let contract_id = env.register(MockPriceFeed, (DECIMALS, INITIAL_ANSWER));
    let client = MockPriceFeedClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn constructor_sets_decimals_and_answer() {
    let (_env, feed) = setup();

    assert_eq!(feed.decimals(), DECIMALS);

    let data = feed.lastprice().expect("feed has an initial answer");
    assert_eq!(data.price, INITIAL_ANSWER);
}

#[test]
fn set_answer_moves_the_quote() {
    let (_env, feed) = setup();

    feed.set_answer(&300_000_000_000);

    let data = feed.lastprice().expect("feed has an answer");
    assert_eq!(data.price, 300_000_000_000);
}

#[test]
fn lastprice_is_stamped_with_ledger_time() {
    let (env, feed) = setup();

    env.ledger().with_mut(|ledger| ledger.timestamp = 1_700_000_000);

    let data = feed.lastprice().expect("feed has an answer");
    assert_eq!(data.timestamp, 1_700_000_000);
}
