use std::sync::LazyLock;

use regex::Regex;

use crate::section::{Scalar, Value};

/// Number literal grammar borrowed from JSON: no leading `+`, no leading zeros, no bare `.5`.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:0|[1-9][0-9]*)(?<frac>\.[0-9]+)?(?<exp>[eE][+-]?[0-9]+)?$")
        .expect("number pattern should compile")
});

/// Turn the raw right-hand side of a pair into a value, splitting lists on `,`.
pub(crate) fn coerce_value(raw: &str) -> Value {
    let mut segments = raw.split(',');

    match (segments.next(), segments.next()) {
        (Some(only), None) => Value::Scalar(coerce_scalar(only)),
        _ => Value::List(raw.split(',').map(coerce_scalar).collect()),
    }
}

/// Try a boolean literal, then a number literal, and otherwise keep the segment as-is.
pub(crate) fn coerce_scalar(segment: &str) -> Scalar {
    // JSON tolerates insignificant whitespace around a literal; `\r` from CRLF input lands here.
    let literal = segment.trim_matches([' ', '\t', '\r', '\n']);

    match literal {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => coerce_number(literal).unwrap_or_else(|| Scalar::String(segment.to_owned())),
    }
}

fn coerce_number(literal: &str) -> Option<Scalar> {
    let captures = NUMBER.captures(literal)?;

    if captures.name("frac").is_none() && captures.name("exp").is_none() {
        if let Ok(n) = literal.parse::<i64>() {
            return Some(Scalar::Integer(n));
        }
    }

    // Out-of-range magnitudes parse as infinite, which could not be written back as a number.
    literal
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .map(Scalar::Float)
}
