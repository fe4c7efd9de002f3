//! Output options: pretty printing, indentation and HTML escaping.
//!
//! Run with: cargo run --example pretty_options

use serde::Serialize;
use serde_omitjson::{omitempty, to_string_pretty, to_string_with_options, JsonOptions};
use std::error::Error;

#[derive(Serialize)]
struct Page {
    title: String,
    #[serde(with = "omitempty")]
    subtitle: String,
    body: String,
    #[serde(with = "omitempty")]
    tags: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let page = Page {
        title: "Release notes".to_string(),
        subtitle: String::new(),
        body: "<p>Fixed & improved</p>".to_string(),
        tags: vec![],
    };

    println!("Default pretty:\n{}\n", to_string_pretty(&page)?);

    let options = JsonOptions::pretty().with_indent(4).with_escape_html(true);
    println!(
        "4-space indent, HTML escaped:\n{}",
        to_string_with_options(&page, options)?
    );

    Ok(())
}
