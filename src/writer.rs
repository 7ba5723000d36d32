use tracing::debug;

use crate::section::{Config, Section};
use crate::util::{section_title, stringify_pair};

/// Renders sections as text, one block per non-empty section.
#[derive(Debug, Clone)]
pub struct Writer<'a> {
    config: &'a Config,
}

impl<'a> Writer<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl Writer<'_> {
    #[must_use]
    pub fn into_string(self) -> String {
        self.config
            .iter()
            .filter(|(name, section)| {
                if section.is_empty() {
                    debug!(section = name.as_str(), "omitting empty section");
                }
                !section.is_empty()
            })
            .map(|(name, section)| write_section(name, section))
            .collect::<Vec<String>>()
            .join("\n\n")
    }
}

fn write_section(name: &str, section: &Section) -> String {
    let mut lines = Vec::<String>::with_capacity(section.len() + 1);
    lines.push(section_title(name));
    lines.extend(
        section
            .iter()
            .map(|(key, value)| stringify_pair(key, value)),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Value;

    #[test]
    fn empty_config() {
        assert_eq!(Writer::new(&Config::new()).into_string(), "");
    }

    #[test]
    fn only_empty_sections() {
        let mut config = Config::new();
        config.insert("service_home_ethernet".to_owned(), Section::new());
        config.insert("service_home_wifi".to_owned(), Section::new());

        assert_eq!(Writer::new(&config).into_string(), "");
    }

    #[test]
    fn empty_section_between_others() {
        let mut config = Config::new();
        config.insert(
            "a".to_owned(),
            Section::from([("x".to_owned(), Value::from(1))]),
        );
        config.insert("b".to_owned(), Section::new());
        config.insert(
            "c".to_owned(),
            Section::from([("y".to_owned(), Value::from(2.5))]),
        );

        assert_eq!(
            Writer::new(&config).into_string(),
            "[a]\nx = 1\n\n[c]\ny = 2.5"
        );
    }

    #[test]
    fn strings_are_written_unmodified() {
        let config = Config::from([(
            "s".to_owned(),
            Section::from([("Name".to_owned(), Value::from(" spaced, out "))]),
        )]);

        assert_eq!(Writer::new(&config).into_string(), "[s]\nName =  spaced, out ");
    }
}
