use chrono::{TimeZone, Utc};
use serde::{Serialize, Serializer};
use serde_omitjson::{
    empty, marshal, omitempty, to_string, to_string_pretty, to_string_with_options, to_value,
    to_writer, Error, JsonOptions, Marshaled, Marshaler, OmitEmpty, Result, Timestamp,
};
use std::collections::{BTreeMap, HashMap};

const ZERO: &str = "\"0001-01-01T00:00:00Z\"";

#[derive(Serialize)]
#[allow(non_snake_case)]
struct Record {
    #[serde(with = "omitempty")]
    A: Timestamp,
    B: String,
}

#[derive(Serialize)]
#[allow(non_snake_case)]
struct PlainRecord {
    A: Timestamp,
    B: String,
}

fn set_time() -> Timestamp {
    Timestamp::from(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
}

/// Zero state is `"none"`; anything else is the label itself.
struct Label(&'static str);

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            empty::serialize_zero("none", serializer)
        } else {
            serializer.serialize_str(self.0)
        }
    }
}

struct Broken;

impl Marshaler for Broken {
    fn marshal_json(&self) -> Result<Marshaled> {
        Err(Error::custom("sensor offline"))
    }
}

impl Serialize for Broken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        marshal::serialize(self, serializer)
    }
}

#[test]
fn test_signalled_zero_field_is_omitted() {
    let record = Record {
        A: Timestamp::unset(),
        B: "x".to_string(),
    };
    assert_eq!(to_string(&record).unwrap(), r#"{"B":"x"}"#);
}

#[test]
fn test_non_zero_field_is_kept() {
    let record = Record {
        A: set_time(),
        B: "x".to_string(),
    };
    assert_eq!(
        to_string(&record).unwrap(),
        r#"{"A":"2024-01-15T10:30:00Z","B":"x"}"#
    );
}

#[test]
fn test_field_without_policy_writes_zero_representation() {
    let record = PlainRecord {
        A: Timestamp::unset(),
        B: "x".to_string(),
    };
    assert_eq!(
        to_string(&record).unwrap(),
        format!(r#"{{"A":{},"B":"x"}}"#, ZERO)
    );
}

#[test]
fn test_top_level_zero_is_written() {
    assert_eq!(to_string(&Timestamp::unset()).unwrap(), ZERO);
    assert_eq!(to_string(&Label("")).unwrap(), r#""none""#);
    assert_eq!(to_string(&Some(Timestamp::unset())).unwrap(), ZERO);
}

#[test]
fn test_sequence_elements_are_never_omitted() {
    #[derive(Serialize)]
    struct History {
        #[serde(with = "omitempty")]
        times: Vec<Timestamp>,
    }

    let history = History {
        times: vec![Timestamp::unset(), set_time(), Timestamp::unset()],
    };
    assert_eq!(
        to_string(&history).unwrap(),
        format!(r#"{{"times":[{z},"2024-01-15T10:30:00Z",{z}]}}"#, z = ZERO)
    );

    let labels = vec![Label(""), Label("a")];
    assert_eq!(to_string(&labels).unwrap(), r#"["none","a"]"#);
}

#[test]
fn test_map_values_are_never_omitted() {
    let mut seen = BTreeMap::new();
    seen.insert("first", Timestamp::unset());
    seen.insert("second", set_time());
    assert_eq!(
        to_string(&seen).unwrap(),
        format!(r#"{{"first":{},"second":"2024-01-15T10:30:00Z"}}"#, ZERO)
    );
}

#[test]
fn test_nested_struct_decides_its_own_fields() {
    #[derive(Serialize)]
    struct Inner {
        #[serde(with = "omitempty")]
        a: Timestamp,
        b: Timestamp,
    }

    #[derive(Serialize)]
    struct Outer {
        #[serde(with = "omitempty")]
        inner: Inner,
        after: u8,
    }

    let outer = Outer {
        inner: Inner {
            a: Timestamp::unset(),
            b: Timestamp::unset(),
        },
        after: 1,
    };
    assert_eq!(
        to_string(&outer).unwrap(),
        format!(r#"{{"inner":{{"b":{}}},"after":1}}"#, ZERO)
    );
}

#[test]
fn test_outer_policy_does_not_reach_inner_fields() {
    #[derive(Serialize)]
    struct Inner {
        a: Timestamp,
    }

    #[derive(Serialize)]
    struct Outer {
        #[serde(with = "omitempty")]
        inner: Inner,
    }

    let outer = Outer {
        inner: Inner {
            a: Timestamp::unset(),
        },
    };
    assert_eq!(
        to_string(&outer).unwrap(),
        format!(r#"{{"inner":{{"a":{}}}}}"#, ZERO)
    );
}

#[test]
fn test_intrinsically_empty_fields() {
    #[derive(Serialize)]
    struct Everything {
        #[serde(with = "omitempty")]
        flag: bool,
        #[serde(with = "omitempty")]
        count: i64,
        #[serde(with = "omitempty")]
        ratio: f64,
        #[serde(with = "omitempty")]
        name: String,
        #[serde(with = "omitempty")]
        nickname: Option<String>,
        #[serde(with = "omitempty")]
        tags: Vec<String>,
        #[serde(with = "omitempty")]
        attrs: HashMap<String, String>,
        #[serde(with = "omitempty")]
        nothing: (),
    }

    let empty = Everything {
        flag: false,
        count: 0,
        ratio: 0.0,
        name: String::new(),
        nickname: None,
        tags: vec![],
        attrs: HashMap::new(),
        nothing: (),
    };
    assert_eq!(to_string(&empty).unwrap(), "{}");

    let full = Everything {
        flag: true,
        count: -3,
        ratio: 0.5,
        name: "n".to_string(),
        nickname: Some(String::new()),
        tags: vec!["t".to_string()],
        attrs: HashMap::from([("k".to_string(), "v".to_string())]),
        nothing: (),
    };
    assert_eq!(
        to_string(&full).unwrap(),
        r#"{"flag":true,"count":-3,"ratio":0.5,"name":"n","nickname":"","tags":["t"],"attrs":{"k":"v"}}"#
    );
}

#[test]
fn test_empty_struct_is_kept_unit_struct_is_dropped() {
    #[derive(Serialize)]
    struct Unit;

    #[derive(Serialize)]
    struct Blank {}

    #[derive(Serialize)]
    struct Holder {
        #[serde(with = "omitempty")]
        blank: Blank,
        #[serde(with = "omitempty")]
        unit: Unit,
    }

    let holder = Holder {
        blank: Blank {},
        unit: Unit,
    };
    assert_eq!(to_string(&holder).unwrap(), r#"{"blank":{}}"#);
}

#[test]
fn test_option_is_looked_through() {
    #[derive(Serialize)]
    struct Schedule {
        #[serde(with = "omitempty")]
        due: Option<Timestamp>,
        #[serde(with = "omitempty")]
        done: Option<Timestamp>,
        id: u32,
    }

    let schedule = Schedule {
        due: Some(Timestamp::unset()),
        done: None,
        id: 9,
    };
    assert_eq!(to_string(&schedule).unwrap(), r#"{"id":9}"#);
}

#[test]
fn test_some_zero_is_set() {
    #[derive(Serialize)]
    struct Patch {
        #[serde(with = "omitempty")]
        enabled: Option<bool>,
        #[serde(with = "omitempty")]
        retries: Option<u32>,
        #[serde(with = "omitempty")]
        label: Option<String>,
    }

    let patch = Patch {
        enabled: Some(false),
        retries: Some(0),
        label: Some(String::new()),
    };
    assert_eq!(
        to_string(&patch).unwrap(),
        r#"{"enabled":false,"retries":0,"label":""}"#
    );

    let untouched = Patch {
        enabled: None,
        retries: None,
        label: None,
    };
    assert_eq!(to_string(&untouched).unwrap(), "{}");
}

#[test]
fn test_nul_char_is_not_empty() {
    #[derive(Serialize)]
    struct Separator {
        #[serde(with = "omitempty")]
        ch: char,
    }

    assert_eq!(
        to_string(&Separator { ch: '\0' }).unwrap(),
        r#"{"ch":"\u0000"}"#
    );
}

#[test]
fn test_zero_instant_is_omitted_like_unset() {
    let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
    let record = Record {
        A: Timestamp::from(zero),
        B: "x".to_string(),
    };
    assert_eq!(to_string(&record).unwrap(), r#"{"B":"x"}"#);

    let back: Timestamp = serde_json::from_str(ZERO).unwrap();
    assert_eq!(back, Timestamp::from(zero));
}

#[test]
fn test_marshaled_big_integer_is_bare_number() {
    #[derive(Serialize)]
    struct Supply {
        total: Marshaled,
    }

    let digits = "123456789012345678901234567890123456789012345";
    let total: num_bigint::BigInt = digits.parse().unwrap();
    let supply = Supply {
        total: Marshaled::new(total),
    };
    assert_eq!(to_string(&supply).unwrap(), format!(r#"{{"total":{}}}"#, digits));
}

#[test]
fn test_floats_match_serde_json() {
    #[derive(Serialize)]
    struct Reading {
        big: f64,
        tiny: f64,
        single: f32,
        values: Vec<f64>,
    }

    let reading = Reading {
        big: 1e16,
        tiny: 1e-5,
        single: 0.1,
        values: vec![1.5e20, 1.0, -0.0, 2.5],
    };
    assert_eq!(
        to_string(&reading).unwrap(),
        serde_json::to_string(&reading).unwrap()
    );
    assert_eq!(to_string(&0.1f32).unwrap(), serde_json::to_string(&0.1f32).unwrap());
}

#[test]
fn test_omit_empty_wrapper() {
    #[derive(Serialize)]
    struct Query {
        filter: OmitEmpty<String>,
        finished: OmitEmpty<Timestamp>,
        page: u32,
    }

    let query = Query {
        filter: OmitEmpty(String::new()),
        finished: OmitEmpty(Timestamp::unset()),
        page: 0,
    };
    assert_eq!(to_string(&query).unwrap(), r#"{"page":0}"#);

    let query = Query {
        filter: "open".to_string().into(),
        finished: OmitEmpty(Timestamp::unset()),
        page: 2,
    };
    assert_eq!(to_string(&query).unwrap(), r#"{"filter":"open","page":2}"#);
}

#[test]
fn test_enum_variants() {
    #[derive(Serialize)]
    enum Event {
        Done {
            #[serde(with = "omitempty")]
            at: Timestamp,
            id: u32,
        },
        Tick(Timestamp),
        Idle,
    }

    assert_eq!(
        to_string(&Event::Done {
            at: Timestamp::unset(),
            id: 1
        })
        .unwrap(),
        r#"{"Done":{"id":1}}"#
    );
    assert_eq!(
        to_string(&Event::Tick(Timestamp::unset())).unwrap(),
        format!(r#"{{"Tick":{}}}"#, ZERO)
    );
    assert_eq!(to_string(&Event::Idle).unwrap(), r#""Idle""#);
}

#[test]
fn test_errors_propagate_regardless_of_policy() {
    #[derive(Serialize)]
    struct WithPolicy {
        #[serde(with = "omitempty")]
        reading: Broken,
    }

    #[derive(Serialize)]
    struct WithoutPolicy {
        reading: Broken,
    }

    for result in [
        to_string(&WithPolicy { reading: Broken }),
        to_string(&WithoutPolicy { reading: Broken }),
        to_string(&vec![Broken]),
    ] {
        let err = result.unwrap_err();
        assert!(err.to_string().contains("sensor offline"), "{}", err);
    }
}

#[test]
fn test_writer_untouched_on_error() {
    #[derive(Serialize)]
    struct Report {
        title: &'static str,
        #[serde(with = "omitempty")]
        reading: Broken,
    }

    let mut buffer = Vec::new();
    assert!(to_writer(&mut buffer, &Report { title: "t", reading: Broken }).is_err());
    assert!(buffer.is_empty());
}

#[test]
fn test_marshaler_zero() {
    struct Id(u64);

    impl Marshaler for Id {
        fn marshal_json(&self) -> Result<Marshaled> {
            let text = format!("{:08}", self.0);
            if self.0 == 0 {
                Ok(Marshaled::zero(text))
            } else {
                Ok(Marshaled::new(text))
            }
        }
    }

    impl Serialize for Id {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            marshal::serialize(self, serializer)
        }
    }

    #[derive(Serialize)]
    struct Child {
        id: Id,
        #[serde(with = "omitempty")]
        parent: Id,
    }

    let child = Child {
        id: Id(7),
        parent: Id(0),
    };
    assert_eq!(to_string(&child).unwrap(), r#"{"id":"00000007"}"#);

    let child = Child {
        id: Id(0),
        parent: Id(3),
    };
    assert_eq!(
        to_string(&child).unwrap(),
        r#"{"id":"00000000","parent":"00000003"}"#
    );
}

#[test]
fn test_serde_json_sees_zero_representation() {
    let record = Record {
        A: Timestamp::unset(),
        B: "x".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        format!(r#"{{"A":{},"B":"x"}}"#, ZERO)
    );
}

#[test]
fn test_pretty_output_with_omitted_fields() {
    #[derive(Serialize)]
    struct Sparse {
        #[serde(with = "omitempty")]
        a: Timestamp,
        b: u8,
        #[serde(with = "omitempty")]
        c: Option<u8>,
        d: Vec<u8>,
        #[serde(with = "omitempty")]
        e: String,
    }

    let sparse = Sparse {
        a: Timestamp::unset(),
        b: 1,
        c: None,
        d: vec![2, 3],
        e: String::new(),
    };
    assert_eq!(
        to_string_pretty(&sparse).unwrap(),
        "{\n  \"b\": 1,\n  \"d\": [\n    2,\n    3\n  ]\n}"
    );

    let record = Record {
        A: Timestamp::unset(),
        B: "x".to_string(),
    };
    assert_eq!(to_string_pretty(&record).unwrap(), "{\n  \"B\": \"x\"\n}");
}

#[test]
fn test_to_value_applies_policy() {
    let record = Record {
        A: Timestamp::unset(),
        B: "x".to_string(),
    };
    let value = to_value(&record).unwrap();
    assert!(value.get("A").is_none());
    assert_eq!(value.get("B").and_then(|b| b.as_str()), Some("x"));
}

#[test]
fn test_non_finite_float_is_an_error() {
    #[derive(Serialize)]
    struct Sample {
        #[serde(with = "omitempty")]
        value: f64,
    }

    let err = to_string(&Sample { value: f64::NAN }).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue(_)));
    assert!(to_string(&f64::INFINITY).is_err());
}

#[test]
fn test_map_keys() {
    let mut by_id = BTreeMap::new();
    by_id.insert(2u32, "b");
    by_id.insert(1u32, "a");
    assert_eq!(to_string(&by_id).unwrap(), r#"{"1":"a","2":"b"}"#);

    let mut by_pair = HashMap::new();
    by_pair.insert((1, 2), "x");
    let err = to_string(&by_pair).unwrap_err();
    assert!(matches!(err, Error::KeyMustBeString(_)));
}

#[test]
fn test_escape_html_option() {
    let options = JsonOptions::new().with_escape_html(true);
    assert_eq!(
        to_string_with_options(&"<a href=\"x\">&</a>", options).unwrap(),
        r#""\u003ca href=\"x\"\u003e\u0026\u003c/a\u003e""#
    );
    assert_eq!(to_string(&"<&>").unwrap(), r#""<&>""#);
}
