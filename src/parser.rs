use std::str::Split;

use tracing::{debug, trace};

use crate::section::{Config, Section};
use crate::util::{parse_pair, section_name};

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: Split<'a, char>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n'),
        }
    }
}

impl Parser<'_> {
    /// Consume every line and collect the sections that ended up with at least one pair.
    #[must_use]
    pub fn into_config(self) -> Config {
        let mut config = Config::new();
        let mut current = None::<&str>;

        for line in self.lines.filter(|line| !line.is_empty()) {
            if let Some(name) = section_name(line) {
                // A repeated header starts over with an empty body but keeps its original position.
                config.insert(name.to_owned(), Section::new());
                current = Some(name);
            } else if let Some(name) = current {
                let (key, value) = parse_pair(line);
                config.entry(name.to_owned()).or_default().insert(key, value);
            } else {
                trace!(line, "discarding line outside of any section");
            }
        }

        config.retain(|name, section| {
            if section.is_empty() {
                debug!(section = name.as_str(), "dropping section without pairs");
            }
            !section.is_empty()
        });

        config
    }
}
