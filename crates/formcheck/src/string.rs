// File: src/string.rs
// Purpose: String rules (required, digits, minimum length)

use crate::rule::{Rule, RuleConfig};
use crate::value::FieldValue;

/// Fails on an empty string. Absent and non-string values pass; whether a
/// field must be present at all is the form layer's business.
#[derive(Debug, Clone)]
pub struct RequiredString {
    message: String,
}

impl RequiredString {
    pub const DEFAULT_MESSAGE: &'static str = "Field is Required";

    pub fn new(config: RuleConfig) -> Self {
        Self {
            message: config
                .message
                .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string()),
        }
    }
}

impl Default for RequiredString {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Rule for RequiredString {
    fn name(&self) -> &'static str {
        "required_string"
    }

    fn check(&self, value: &FieldValue) -> Option<String> {
        match value.as_text() {
            Some("") => Some(self.message.clone()),
            _ => None,
        }
    }
}

/// Fails when the string contains an ASCII digit
#[derive(Debug, Clone)]
pub struct WithoutNumbers {
    message: String,
}

impl WithoutNumbers {
    pub const DEFAULT_MESSAGE: &'static str = "You have number in your field";

    pub fn new(config: RuleConfig) -> Self {
        Self {
            message: config
                .message
                .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string()),
        }
    }
}

impl Default for WithoutNumbers {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Rule for WithoutNumbers {
    fn name(&self) -> &'static str {
        "without_numbers"
    }

    fn check(&self, value: &FieldValue) -> Option<String> {
        let text = value.non_empty_text()?;
        text.chars()
            .any(|c| c.is_ascii_digit())
            .then(|| self.message.clone())
    }
}

/// Fails when the string is shorter than `count` UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane (emoji) count twice.
///
/// With no `count` (or a zero count) the rule never fails. Empty strings pass
/// too; pair it with `RequiredString` to reject them.
#[derive(Debug, Clone)]
pub struct MinLength {
    count: Option<usize>,
    message: String,
}

impl MinLength {
    pub fn new(config: RuleConfig) -> Self {
        let count = config.count.filter(|c| *c > 0);
        let message = config.message.unwrap_or_else(|| match count {
            Some(c) => format!("String less then {}", c),
            None => "String less then -".to_string(),
        });
        Self { count, message }
    }

    /// Shorthand for `MinLength::new(RuleConfig::new().count(count))`
    pub fn of(count: usize) -> Self {
        Self::new(RuleConfig::new().count(count))
    }

    pub fn count(&self) -> Option<usize> {
        self.count
    }
}

impl Rule for MinLength {
    fn name(&self) -> &'static str {
        "min_length"
    }

    fn check(&self, value: &FieldValue) -> Option<String> {
        let count = self.count?;
        let text = value.non_empty_text()?;
        (text.encode_utf16().count() < count).then(|| self.message.clone())
    }
}
