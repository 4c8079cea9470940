// File: src/rule.rs
// Purpose: Rule trait, rule configuration and rule kinds

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::email::EmailFormat;
use crate::string::{MinLength, RequiredString, WithoutNumbers};
use crate::value::FieldValue;

/// A single stateless check
///
/// Returns `None` when the value passes and the configured message when it
/// fails. Implementations must not panic for any `FieldValue`.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str {
        "custom"
    }

    fn check(&self, value: &FieldValue) -> Option<String>;
}

impl<F> Rule for F
where
    F: Fn(&FieldValue) -> Option<String> + Send + Sync,
{
    fn check(&self, value: &FieldValue) -> Option<String> {
        self(value)
    }
}

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({})", self.name())
    }
}

/// Options recognised by the built-in rules
///
/// Every option is optional. `count` is only read by `MinLength`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl RuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message reported on failure
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the minimum length (MinLength only)
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// The built-in rule constructors, addressable by name from config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RequiredString,
    WithoutNumbers,
    EmailFormat,
    MinLength,
}

impl RuleKind {
    pub const ALL: [RuleKind; 4] = [
        RuleKind::RequiredString,
        RuleKind::WithoutNumbers,
        RuleKind::EmailFormat,
        RuleKind::MinLength,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::RequiredString => "required_string",
            RuleKind::WithoutNumbers => "without_numbers",
            RuleKind::EmailFormat => "email_format",
            RuleKind::MinLength => "min_length",
        }
    }

    /// Construct the rule from its configuration
    ///
    /// Fails when `count` is given to a rule that does not take one.
    pub fn build(self, config: RuleConfig) -> Result<Box<dyn Rule>> {
        if config.count.is_some() && self != RuleKind::MinLength {
            bail!("rule '{}' does not accept a count", self);
        }

        let rule: Box<dyn Rule> = match self {
            RuleKind::RequiredString => Box::new(RequiredString::new(config)),
            RuleKind::WithoutNumbers => Box::new(WithoutNumbers::new(config)),
            RuleKind::EmailFormat => Box::new(EmailFormat::new(config)),
            RuleKind::MinLength => Box::new(MinLength::new(config)),
        };
        Ok(rule)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match RuleKind::ALL.iter().find(|k| k.as_str() == normalized) {
            Some(kind) => Ok(*kind),
            None => bail!(
                "unknown rule '{}', expected one of: required_string, without_numbers, email_format, min_length",
                s
            ),
        }
    }
}

/// A rule as written in a config file: `{ rule = "min_length", count = 8 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub rule: RuleKind,

    #[serde(flatten)]
    pub config: RuleConfig,
}

impl RuleSpec {
    pub fn build(&self) -> Result<Box<dyn Rule>> {
        self.rule.build(self.config.clone())
    }
}
