//! Property tests for credential normalization.
//!
//! The central invariant is round-trip stability: serializing normalizer
//! output and feeding it back through the normalizer must change nothing,
//! whatever shape the original entries had.

use proptest::prelude::*;
use serde_json::{Map, Value};

use cred_ingest::normalize_licenses;

fn category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("state_license".to_string()),
        Just("STATE-LICENSE".to_string()),
        Just("controlled_substance_registration".to_string()),
        Just("board_certification".to_string()),
        Just("certification".to_string()),
        "[a-z_]{1,16}",
    ]
}

fn free_text() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

prop_compose! {
    fn raw_entry()(
        category in category(),
        issuer in proptest::option::of(free_text()),
        license_type in proptest::option::of(free_text()),
        number in proptest::option::of(free_text()),
        status in proptest::option::of(free_text()),
        expiration in proptest::option::of("[0-9]{4}-[0-9]{2}-[0-9]{2}"),
        board_actions in proptest::collection::vec(free_text(), 0..3),
        flagged in any::<bool>(),
        structured_actions in any::<bool>(),
        nest_in_details in any::<bool>(),
    ) -> Value {
        let mut fields = Map::new();
        if let Some(issuer) = issuer {
            fields.insert("issuer".to_string(), Value::String(issuer));
        }
        if let Some(license_type) = license_type {
            fields.insert("type".to_string(), Value::String(license_type));
        }
        if let Some(number) = number {
            fields.insert("number".to_string(), Value::String(number));
        }
        if let Some(status) = status {
            fields.insert("status".to_string(), Value::String(status));
        }
        if let Some(expiration) = expiration {
            fields.insert("expirationDate".to_string(), Value::String(expiration));
        }
        let actions = Value::Array(
            board_actions.into_iter().map(Value::String).collect(),
        );
        if structured_actions {
            let mut data = Map::new();
            data.insert("boardActionTexts".to_string(), actions);
            fields.insert("boardActionData".to_string(), Value::Object(data));
        } else {
            fields.insert("boardActions".to_string(), actions);
        }
        if flagged {
            fields.insert("hasBoardAction".to_string(), Value::Bool(true));
        }

        let mut entry = Map::new();
        entry.insert("category".to_string(), Value::String(category));
        if nest_in_details {
            entry.insert("details".to_string(), Value::Object(fields));
        } else {
            entry.append(&mut fields);
        }
        Value::Object(entry)
    }
}

proptest! {
    #[test]
    fn renormalization_is_identity(entries in proptest::collection::vec(raw_entry(), 0..8)) {
        let first = normalize_licenses(&entries);

        let serialized: Vec<Value> = first
            .iter()
            .map(|license| serde_json::to_value(license).expect("serialize license"))
            .collect();
        let second = normalize_licenses(&serialized);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_entries_all_survive(entries in proptest::collection::vec(raw_entry(), 0..8)) {
        let licenses = normalize_licenses(&entries);
        // Every generated entry is an object with a string category.
        prop_assert_eq!(licenses.len(), entries.len());
        for license in &licenses {
            prop_assert!(license.board_actions.is_empty() || license.has_board_action);
            prop_assert!(license.raw.is_some());
        }
    }

    #[test]
    fn flag_consistency_holds(entries in proptest::collection::vec(raw_entry(), 0..8)) {
        for license in normalize_licenses(&entries) {
            if !license.board_actions.is_empty() {
                prop_assert!(license.has_board_action);
            }
        }
    }
}
