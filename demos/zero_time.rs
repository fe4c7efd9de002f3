//! Dropping unset timestamps from JSON output.
//!
//! Run with: RUST_LOG=trace cargo run --example zero_time

use chrono::Utc;
use serde::Serialize;
use serde_omitjson::{omitempty, to_string, Timestamp};
use std::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Job {
    id: u32,
    created_at: Timestamp,
    #[serde(with = "omitempty")]
    finished_at: Timestamp,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let running = Job {
        id: 1,
        created_at: Timestamp::now(),
        finished_at: Timestamp::unset(),
    };
    let done = Job {
        id: 2,
        created_at: Timestamp::now(),
        finished_at: Timestamp::from(Utc::now()),
    };

    println!("running: {}", to_string(&running)?);
    println!("done:    {}", to_string(&done)?);

    // serde_json does not know the signal and writes the zero time.
    println!("serde_json: {}", serde_json::to_string(&running)?);

    Ok(())
}
