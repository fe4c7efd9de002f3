//! A custom encoder that reports its own zero state.
//!
//! Run with: cargo run --example marshaler

use serde::{Serialize, Serializer};
use serde_omitjson::{marshal, omitempty, to_string, Marshaled, Marshaler, Result};
use std::error::Error;

/// A 64-bit id written as 16 hex digits; all zeros means "no id".
#[derive(Clone, Copy)]
struct TraceId(u64);

impl Marshaler for TraceId {
    fn marshal_json(&self) -> Result<Marshaled> {
        let hex = format!("{:016x}", self.0);
        if self.0 == 0 {
            Ok(Marshaled::zero(hex))
        } else {
            Ok(Marshaled::new(hex))
        }
    }
}

impl Serialize for TraceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        marshal::serialize(self, serializer)
    }
}

#[derive(Serialize)]
struct Span {
    name: &'static str,
    #[serde(with = "omitempty")]
    parent: TraceId,
    links: Vec<TraceId>,
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let root = Span {
        name: "request",
        parent: TraceId(0),
        links: vec![TraceId(0), TraceId(0xbeef)],
    };
    let child = Span {
        name: "query",
        parent: TraceId(0xcafe),
        links: vec![],
    };

    println!("{}", to_string(&root)?);
    println!("{}", to_string(&child)?);

    Ok(())
}
