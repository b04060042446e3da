//! Validation rules for form fields

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(?:-[a-z0-9]+)*$";
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Скомпилированные шаблоны; некорректный шаблон хранится как `None`
static PATTERN_CACHE: Lazy<Mutex<HashMap<&'static str, Option<Regex>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Шаблон компилируется один раз на процесс
fn cached_regex(pattern: &'static str) -> Option<Regex> {
    match PATTERN_CACHE.lock() {
        Ok(mut cache) => cache
            .entry(pattern)
            .or_insert_with(|| Regex::new(pattern).ok())
            .clone(),
        Err(_) => Regex::new(pattern).ok(),
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_pattern(self, pattern: &'static str, error: &'static str) -> Self {
        Self {
            pattern: Some(pattern),
            custom_error: Some(error),
            ..self
        }
    }

    pub const fn with_range(self, min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max, ..self }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            // optional and empty: nothing else to check
            return Ok(());
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            let matches = cached_regex(pattern)
                .map(|re| re.is_match(value))
                .unwrap_or(false);
            if !matches {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if value.is_nan() {
            return Err(format!("{} must be a number", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Field name → first error message for that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldErrors(pub BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a single check; the first error per field wins.
    pub fn check(&mut self, field: &str, result: Result<(), String>) -> &mut Self {
        if let Err(message) = result {
            self.0.entry(field.to_string()).or_insert(message);
        }
        self
    }

    pub fn string(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        rules: ValidationRules,
    ) -> &mut Self {
        self.check(field, rules.validate_string(value, label))
    }

    pub fn number(
        &mut self,
        field: &str,
        label: &str,
        value: f64,
        rules: ValidationRules,
    ) -> &mut Self {
        self.check(field, rules.validate_number(value, label))
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Name").is_err());
        assert!(rules.validate_string("Alice", "Name").is_ok());
        assert!(ValidationRules::none().validate_string("", "Name").is_ok());
    }

    #[test]
    fn test_slug_pattern() {
        let rules = ValidationRules::required().with_pattern(SLUG_PATTERN, "Slug must be kebab-case");
        assert!(rules.validate_string("home-audio", "Slug").is_ok());
        assert!(rules.validate_string("tv2", "Slug").is_ok());
        assert_eq!(
            rules.validate_string("Home Audio", "Slug"),
            Err("Slug must be kebab-case".to_string())
        );
        assert!(rules.validate_string("trailing-", "Slug").is_err());
    }

    #[test]
    fn test_pattern_is_compiled_once() {
        let first = cached_regex(EMAIL_PATTERN).unwrap();
        let second = cached_regex(EMAIL_PATTERN).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(PATTERN_CACHE.lock().unwrap().contains_key(EMAIL_PATTERN));

        assert!(cached_regex("(unclosed").is_none());
        let rules = ValidationRules::none().with_pattern("(unclosed", "Broken pattern");
        assert_eq!(rules.validate_string("x", "Field"), Err("Broken pattern".to_string()));
    }

    #[test]
    fn test_numeric_range() {
        let rules = ValidationRules::none().with_range(Some(0.0), Some(2.0));
        assert!(rules.validate_number(0.7, "Temperature").is_ok());
        assert!(rules.validate_number(2.5, "Temperature").is_err());
        assert!(rules.validate_number(-0.1, "Temperature").is_err());
        assert!(rules.validate_number(f64::NAN, "Temperature").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors
            .string("name", "Name", "", ValidationRules::required())
            .add("name", "second message")
            .number("price", "Price", 10.0, ValidationRules::none().with_range(Some(0.0), None));

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("price"), None);
        assert!(errors.clone().into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
