//! Conversion of untyped JSON documents into a [`Config`].
//!
//! The text format only has room for objects of objects holding scalars and flat lists. Top-level
//! entries that are not objects, and empty objects, are left out instead of failing. Inside a
//! section `null` is written as the text `null`, nested lists are flattened, and pairs holding an
//! object are left out.

use serde_json::Value as Json;
use tracing::debug;

use crate::error::ConversionError;
use crate::section::{Config, Scalar, Section, Value};

/// Keep every top-level entry that is an object with at least one key.
#[must_use]
pub fn config_from_json(json: &Json) -> Config {
    let Json::Object(entries) = json else {
        debug!("top-level JSON value is not an object");
        return Config::new();
    };

    entries
        .iter()
        .filter_map(|(name, entry)| {
            let section = section_from_json(name, entry)?;
            Some((name.clone(), section))
        })
        .collect()
}

fn section_from_json(name: &str, entry: &Json) -> Option<Section> {
    let Json::Object(pairs) = entry else {
        debug!(section = name, "omitting entry that is not an object");
        return None;
    };

    if pairs.is_empty() {
        debug!(section = name, "omitting empty section");
        return None;
    }

    let section = pairs
        .iter()
        .filter_map(|(key, value)| match Value::try_from(value) {
            Ok(value) => Some((key.clone(), value)),
            Err(err) => {
                debug!(section = name, key = key.as_str(), %err, "omitting pair");
                None
            }
        })
        .collect::<Section>();

    Some(section)
}

impl TryFrom<&Json> for Scalar {
    type Error = ConversionError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        match json {
            Json::Bool(b) => Ok(Scalar::Bool(*b)),
            Json::Number(n) => Ok(match n.as_i64() {
                Some(i) => Scalar::Integer(i),
                // Without arbitrary precision every JSON number fits an f64.
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Json::String(s) => Ok(Scalar::String(s.clone())),
            Json::Null => Ok(Scalar::String("null".to_owned())),
            Json::Array(..) => Err(ConversionError::NestedList),
            Json::Object(..) => Err(ConversionError::NestedObject),
        }
    }
}

impl TryFrom<&Json> for Value {
    type Error = ConversionError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        match json {
            Json::Array(items) => {
                let mut scalars = Vec::<Scalar>::with_capacity(items.len());
                flatten_into(items, &mut scalars)?;
                Ok(Value::List(scalars))
            }
            scalar => Scalar::try_from(scalar).map(Value::Scalar),
        }
    }
}

/// Nested lists are written comma-joined, exactly like their flattened contents.
fn flatten_into(items: &[Json], scalars: &mut Vec<Scalar>) -> Result<(), ConversionError> {
    for item in items {
        match item {
            Json::Array(nested) => flatten_into(nested, scalars)?,
            scalar => scalars.push(Scalar::try_from(scalar)?),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn non_object_top_level() {
        assert!(config_from_json(&json!([{"a": {"b": 1}}])).is_empty());
        assert!(config_from_json(&json!("hello")).is_empty());
        assert!(config_from_json(&json!(null)).is_empty());
    }

    #[test]
    fn omits_invalid_sections() {
        let config = config_from_json(&json!({
            "service_home_ethernet": false,
            "service_work_ethernet": ["foo", "bar", "baz"],
            "service_work_wifi": 12345,
            "service_home_wifi": "hello",
            "service_empty": {},
            "service_valid": {
                "Type": "ethernet",
                "Nameservers": "8.8.8.8,8.8.4.4"
            }
        }));

        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["service_valid"]);
        assert_eq!(
            config["service_valid"]["Nameservers"],
            Value::from("8.8.8.8,8.8.4.4")
        );
    }

    #[test]
    fn keeps_sections_with_null_and_nested_lists() {
        let config = config_from_json(&json!({
            "s": {"A": null},
            "t": {"G": [[1, 2], [3]]}
        }));

        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["s", "t"]);
        assert_eq!(config["s"]["A"], Value::from("null"));
        assert_eq!(config["t"]["G"], Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn omits_pairs_holding_objects() {
        let config = config_from_json(&json!({
            "s": {
                "Missing": null,
                "Nested": {"a": 1},
                "Hidden": [1, {"a": 1}],
                "Kept": [1, 2.5, "x", false]
            }
        }));

        assert_eq!(
            config["s"].keys().collect::<Vec<_>>(),
            vec!["Missing", "Kept"]
        );
        assert_eq!(
            config["s"]["Kept"],
            Value::List(vec![
                Scalar::Integer(1),
                Scalar::Float(2.5),
                Scalar::from("x"),
                Scalar::Bool(false),
            ])
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::try_from(&json!(null)), Ok(Value::from("null")));
        assert_eq!(
            Value::try_from(&json!([1, [null, [true]]])),
            Ok(Value::List(vec![
                Scalar::Integer(1),
                Scalar::from("null"),
                Scalar::Bool(true),
            ]))
        );
        assert_eq!(
            Value::try_from(&json!({"a": 1})),
            Err(ConversionError::NestedObject)
        );
        assert_eq!(
            Scalar::try_from(&json!([1])),
            Err(ConversionError::NestedList)
        );
        assert_eq!(
            Scalar::try_from(&json!(u64::MAX)),
            Ok(Scalar::Float(1.844_674_407_370_955_2e19))
        );
    }
}
