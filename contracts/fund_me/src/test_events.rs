extern crate std;

use soroban_sdk::{symbol_short, testutils::Events, vec, IntoVal, TryIntoVal};

use crate::events::{Funded, Withdrawn};
use crate::test::{fund_from_new_funder, setup, ONE};

#[test]
fn test_funded_event() {
    let s = setup();

    let funder = fund_from_new_funder(&s, ONE);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("no events found");

    // Topic: (symbol_short!("funded"), funder)
    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![
        &s.env,
        symbol_short!("funded").into_val(&s.env),
        funder.clone().into_val(&s.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: Funded struct
    let event_data: Funded = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        Funded {
            funder: funder.clone(),
            amount: ONE,
        }
    );
}

#[test]
fn test_withdrawn_event() {
    let s = setup();
    fund_from_new_funder(&s, ONE);

    s.client.withdraw(&s.owner);

    let all_events = s.env.events().all();
    let last_event = all_events.last().expect("no events found");

    // Topic: (symbol_short!("withdrawn"),)
    assert_eq!(last_event.0, s.client.address);
    let expected_topics = vec![&s.env, symbol_short!("withdrawn").into_val(&s.env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: Withdrawn struct
    let event_data: Withdrawn = last_event.2.try_into_val(&s.env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            to: s.owner.clone(),
            amount: ONE,
        }
    );
}
