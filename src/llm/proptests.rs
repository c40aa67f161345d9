//! Property-based tests for the request mapping layer
//!
//! Verifies the invariants of conversation-to-wire translation:
//! - exactly one request entry per committed turn
//! - roles translate user→"user", assistant→"model"
//! - text survives verbatim, including unicode and whitespace
//! - mapping is deterministic at the byte level

use super::wire::{to_remote_request, Role};
use crate::store::{MessageStore, Speaker};
use proptest::prelude::*;

/// Committed turn text: non-empty after trimming.
fn arb_turn_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.!?,éüß🎉]{0,60}[a-zA-Z0-9!?]"
}

fn arb_speaker() -> impl Strategy<Value = Speaker> {
    prop_oneof![Just(Speaker::User), Just(Speaker::Assistant)]
}

fn arb_conversation() -> impl Strategy<Value = Vec<(Speaker, String)>> {
    proptest::collection::vec((arb_speaker(), arb_turn_text()), 0..20)
}

fn store_from(turns: &[(Speaker, String)]) -> MessageStore {
    let mut store = MessageStore::new();
    for (speaker, text) in turns {
        store.append(*speaker, text.clone());
    }
    store
}

proptest! {
    #[test]
    fn one_entry_per_turn(turns in arb_conversation()) {
        let store = store_from(&turns);
        let request = to_remote_request(store.all());
        prop_assert_eq!(request.contents.len(), store.len());
    }

    #[test]
    fn roles_translate_and_text_survives(turns in arb_conversation()) {
        let store = store_from(&turns);
        let request = to_remote_request(store.all());

        for (turn, entry) in store.all().iter().zip(&request.contents) {
            let expected = match turn.speaker {
                Speaker::User => Role::User,
                Speaker::Assistant => Role::Model,
            };
            prop_assert_eq!(entry.role, expected);
            prop_assert_eq!(entry.parts.len(), 1);
            prop_assert_eq!(&entry.parts[0].text, &turn.text);
        }
    }

    #[test]
    fn mapping_is_byte_deterministic(turns in arb_conversation()) {
        let store = store_from(&turns);
        let first = serde_json::to_vec(&to_remote_request(store.all())).unwrap();
        let second = serde_json::to_vec(&to_remote_request(store.all())).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn static_config_is_always_present(turns in arb_conversation()) {
        let store = store_from(&turns);
        let json = serde_json::to_value(to_remote_request(store.all())).unwrap();
        prop_assert_eq!(
            json["generationConfig"]["responseMimeType"].as_str(),
            Some("text/plain")
        );
        prop_assert!(json["tools"][0]["googleSearch"].is_object());
    }
}
