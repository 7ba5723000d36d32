use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::coerce_value;
use crate::section::Value;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").expect("section header pattern should compile"));

static PAIR_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*=\s*").expect("pair delimiter pattern should compile"));

/// Return the name inside `[name]` if the whole line is a section header.
pub(crate) fn section_name(line: &str) -> Option<&str> {
    SECTION_HEADER
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

pub(crate) fn section_title(name: &str) -> String {
    format!("[{name}]")
}

/// Split a line around the first `=` (and the whitespace hugging it) into a key and a value.
///
/// A line without any `=` still yields a pair: the whole line serves as both key and raw value.
pub(crate) fn parse_pair(line: &str) -> (String, Value) {
    let (key, raw) = match PAIR_DELIMITER.find(line) {
        Some(delimiter) => (&line[..delimiter.start()], &line[delimiter.end()..]),
        None => (line, line),
    };

    (key.to_owned(), coerce_value(raw))
}

pub(crate) fn stringify_pair(key: &str, value: &Value) -> String {
    format!("{key} = {value}")
}
