#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Parse and stringify INI-style configuration as used by ConnMan.
//!
//! ```text
//! [service_home_ethernet]
//! Type = ethernet
//! Nameservers = 8.8.8.8,8.8.4.4
//! ```
//!
//! Values are coerced on read: `true`/`false` become booleans, JSON-style number literals become
//! integers or floats, everything else stays a string. A value containing `,` becomes a list.
//! Neither direction fails; anything that does not fit the format is dropped.

mod coerce;
mod error;
mod json;
mod parser;
mod section;
mod util;
mod writer;

pub use error::ConversionError;
pub use json::config_from_json;
pub use parser::Parser;
pub use section::{Config, Scalar, Section, Value};
pub use writer::Writer;

/// Parse configuration text into its non-empty sections.
#[must_use]
pub fn parse(text: &str) -> Config {
    Parser::new(text).into_config()
}

/// Render every non-empty section, separated by blank lines.
#[must_use]
pub fn stringify(config: &Config) -> String {
    Writer::new(config).into_string()
}

/// Render an untyped JSON document, skipping whatever cannot be expressed as a section.
#[must_use]
pub fn stringify_json(json: &serde_json::Value) -> String {
    stringify(&config_from_json(json))
}
