// Argument validation for tool calls
//
// Each tool deserializes its arguments into a typed struct, then runs the
// constraints serde cannot express (lengths, ranges) through `Checks`, which
// records every failing field instead of stopping at the first one.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::ops::RangeInclusive;

/// One rejected argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every rejected argument of a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// The arguments as a whole could not be read.
    pub fn arguments(message: impl Into<String>) -> Self {
        Self(vec![FieldError {
            field: "arguments".to_string(),
            message: message.into(),
        }])
    }

    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Deserialize tool arguments. Missing arguments read as an empty object.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, ValidationErrors> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(map),
        _ => return Err(ValidationErrors::arguments("expected an object")),
    };

    serde_json::from_value(arguments).map_err(|e| ValidationErrors::arguments(e.to_string()))
}

/// Constraints checked after deserialization.
#[derive(Debug, Default)]
pub struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }

    /// At least `min` characters.
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize) {
        if value.chars().count() < min {
            self.reject(field, format!("must be at least {} characters", min));
        }
    }

    /// At least `min` entries.
    pub fn min_items<T>(&mut self, field: &str, items: &[T], min: usize) {
        if items.len() < min {
            self.reject(field, format!("must contain at least {} item(s)", min));
        }
    }

    /// Within `range` when present.
    pub fn range(&mut self, field: &str, value: Option<u32>, range: RangeInclusive<u32>) {
        if let Some(value) = value {
            if !range.contains(&value) {
                self.reject(
                    field,
                    format!("must be between {} and {}", range.start(), range.end()),
                );
            }
        }
    }

    /// Ok when no field was rejected.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musclesworked_sdk::Equipment;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct SampleArgs {
        name: String,
        #[serde(default)]
        equipment: Option<Equipment>,
        #[serde(default)]
        limit: Option<u32>,
    }

    #[test]
    fn test_parse_typed_arguments() {
        let args: SampleArgs =
            parse_arguments(json!({"name": "curl", "equipment": "ez_bar", "limit": 20, "extra": 1}))
                .unwrap();

        assert_eq!(
            args,
            SampleArgs {
                name: "curl".to_string(),
                equipment: Some(Equipment::EzBar),
                limit: Some(20),
            }
        );
    }

    #[test]
    fn test_null_counts_as_absent() {
        let args: SampleArgs =
            parse_arguments(json!({"name": "curl", "equipment": null, "limit": null})).unwrap();
        assert_eq!(args.equipment, None);
        assert_eq!(args.limit, None);
    }

    #[test]
    fn test_parse_errors_name_the_problem() {
        let errors = parse_arguments::<SampleArgs>(json!({"name": "curl", "equipment": "spaceship"}))
            .unwrap_err();
        assert_eq!(errors.fields(), vec!["arguments"]);
        assert!(errors.to_string().contains("unknown variant `spaceship`"));

        let errors = parse_arguments::<SampleArgs>(Value::Null).unwrap_err();
        assert!(errors.to_string().contains("missing field `name`"));

        let errors = parse_arguments::<SampleArgs>(json!({"name": "curl", "limit": -3})).unwrap_err();
        assert_eq!(errors.fields(), vec!["arguments"]);

        let errors = parse_arguments::<SampleArgs>(json!(["curl"])).unwrap_err();
        assert_eq!(errors.to_string(), "arguments: expected an object");
    }

    #[test]
    fn test_checks_collect_every_failing_field() {
        let mut checks = Checks::new();
        checks.min_chars("query", "a", 2);
        checks.min_items::<String>("exercises", &[], 1);
        checks.range("limit", Some(500), 1..=200);
        checks.range("other_limit", None, 1..=200);

        let errors = checks.finish().unwrap_err();
        assert_eq!(errors.fields(), vec!["query", "exercises", "limit"]);
        assert!(errors.to_string().contains("query: must be at least 2 characters"));
        assert!(errors.to_string().contains("limit: must be between 1 and 200"));
    }

    #[test]
    fn test_min_chars_counts_characters() {
        let mut checks = Checks::new();
        checks.min_chars("query", "é", 2);
        assert!(checks.finish().is_err());

        let mut checks = Checks::new();
        checks.min_chars("query", "ab", 2);
        checks.range("limit", Some(1), 1..=50);
        assert!(checks.finish().is_ok());
    }
}
