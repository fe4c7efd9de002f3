//! Property-based tests.
//!
//! Data that uses neither the zero-state signal nor the omission policy must
//! encode exactly as serde_json encodes it, floats included. Non-finite floats
//! are left out: serde_json writes `null`, this crate reports an error.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use serde::Serialize;
use serde_omitjson::{omitempty, to_string, to_string_pretty, to_value, Timestamp};
use std::collections::BTreeMap;

fn same_as_serde_json<T: Serialize>(value: &T) -> bool {
    let ours = to_string(value);
    let theirs = serde_json::to_string(value);
    match (ours, theirs) {
        (Ok(ours), Ok(theirs)) if ours == theirs => {
            let pretty = to_string_pretty(value).ok();
            pretty.is_some() && pretty == serde_json::to_string_pretty(value).ok()
        }
        (ours, theirs) => {
            eprintln!("ours:   {:?}", ours);
            eprintln!("theirs: {:?}", theirs.map_err(|e| e.to_string()));
            false
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Account {
    id: u64,
    name: String,
    balance: i64,
    score: f64,
    active: bool,
    tags: Vec<String>,
    parent: Option<u32>,
    limits: BTreeMap<String, i32>,
    kind: Kind,
}

#[derive(Debug, Clone, Serialize)]
enum Kind {
    Personal,
    Shared(u8),
    Business { vat: String },
}

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Personal),
        any::<u8>().prop_map(Kind::Shared),
        ".{0,8}".prop_map(|vat| Kind::Business { vat }),
    ]
}

fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

prop_compose! {
    fn account()(
        id in any::<u64>(),
        name in ".{0,16}",
        balance in any::<i64>(),
        score in finite_f64(),
        active in any::<bool>(),
        tags in prop::collection::vec("[a-z]{0,6}", 0..4),
        parent in proptest::option::of(any::<u32>()),
        limits in prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 0..4),
        kind in kind(),
    ) -> Account {
        Account { id, name, balance, score, active, tags, parent, limits, kind }
    }
}

#[derive(Serialize)]
struct Tracked {
    #[serde(with = "omitempty")]
    at: Timestamp,
    history: Vec<Timestamp>,
}

fn timestamp() -> impl Strategy<Value = Timestamp> {
    proptest::option::of(0i64..4_000_000_000)
        .prop_map(|secs| Timestamp::from(secs.and_then(|s| Utc.timestamp_opt(s, 0).single())))
}

proptest! {
    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(same_as_serde_json(&n));
    }

    #[test]
    fn prop_u128(n in any::<u128>()) {
        prop_assert!(same_as_serde_json(&n));
    }

    #[test]
    fn prop_f64(f in finite_f64()) {
        prop_assert!(same_as_serde_json(&f));
    }

    #[test]
    fn prop_f32(f in prop::num::f32::NORMAL | prop::num::f32::ZERO) {
        prop_assert!(same_as_serde_json(&f));
    }

    #[test]
    fn prop_float_vec(v in prop::collection::vec(finite_f64(), 0..6)) {
        prop_assert!(same_as_serde_json(&v));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(same_as_serde_json(&s));
    }

    #[test]
    fn prop_nested_vec(v in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..4), 0..4)) {
        prop_assert!(same_as_serde_json(&v));
    }

    #[test]
    fn prop_tuple(t in (any::<i16>(), any::<bool>(), any::<char>(), proptest::option::of(any::<u8>()))) {
        prop_assert!(same_as_serde_json(&t));
    }

    #[test]
    fn prop_account(a in account()) {
        prop_assert!(same_as_serde_json(&a));
    }

    #[test]
    fn prop_sequence_keeps_every_element(history in prop::collection::vec(timestamp(), 0..8)) {
        let tracked = Tracked { at: Timestamp::unset(), history: history.clone() };
        let value = to_value(&tracked).unwrap();

        prop_assert!(value.get("at").is_none());
        let written = value.get("history").and_then(|h| h.as_array()).map(Vec::len);
        prop_assert_eq!(written, Some(history.len()));
    }

    #[test]
    fn prop_field_present_iff_set(at in timestamp()) {
        let tracked = Tracked { at, history: vec![] };
        let value = to_value(&tracked).unwrap();
        prop_assert_eq!(value.get("at").is_some(), !at.is_unset());
    }
}
