// File: src/compose.rs
// Purpose: Run several rules against one value and collect every failure

use std::fmt;

use crate::rule::Rule;
use crate::value::FieldValue;

/// An ordered list of rules evaluated together
///
/// Every rule runs on every call; failures are returned in rule order.
#[derive(Default)]
pub struct Composed {
    rules: Vec<Box<dyn Rule>>,
}

impl Composed {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Append a rule, builder style
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Messages of all failing rules, in declaration order
    pub fn validate(&self, value: &FieldValue) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(value))
            .collect()
    }
}

impl fmt::Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}

/// Combine rules into one validator
///
/// ```
/// use formcheck::{compose, RequiredString, WithoutNumbers};
///
/// let name = compose(vec![
///     Box::new(RequiredString::default()),
///     Box::new(WithoutNumbers::default()),
/// ]);
/// assert_eq!(name.validate(&"Doe3".into()), vec!["You have number in your field"]);
/// assert!(name.validate(&"Doe".into()).is_empty());
/// ```
pub fn compose(rules: Vec<Box<dyn Rule>>) -> Composed {
    Composed::new(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleConfig;
    use crate::string::{MinLength, RequiredString, WithoutNumbers};
    use serde_json::json;

    #[test]
    fn test_empty_composition_always_passes() {
        let none = compose(Vec::new());
        assert!(none.is_empty());
        assert!(none.validate(&"".into()).is_empty());
        assert!(none.validate(&"anything 123".into()).is_empty());
        assert!(none.validate(&FieldValue::Absent).is_empty());
        assert!(none.validate(&FieldValue::Other(json!(1))).is_empty());
    }

    #[test]
    fn test_does_not_short_circuit() {
        let both = Composed::default()
            .with(WithoutNumbers::new(RuleConfig::new().message("digits")))
            .with(MinLength::new(RuleConfig::new().count(5).message("short")));

        assert_eq!(both.validate(&"a1".into()), vec!["digits", "short"]);
        assert_eq!(both.validate(&"abc".into()), vec!["short"]);
        assert_eq!(both.validate(&"abc123".into()), vec!["digits"]);
    }

    #[test]
    fn test_preserves_rule_order() {
        let reversed = Composed::default()
            .with(MinLength::new(RuleConfig::new().count(5).message("short")))
            .with(WithoutNumbers::new(RuleConfig::new().message("digits")));

        assert_eq!(reversed.validate(&"a1".into()), vec!["short", "digits"]);
    }

    #[test]
    fn test_matches_individual_rules() {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(RequiredString::default()),
            Box::new(WithoutNumbers::default()),
            Box::new(MinLength::of(3)),
        ];
        let values = ["", "a", "a1", "abcd", "ab12"];

        for value in values {
            let value = FieldValue::from(value);
            let expected: Vec<String> = rules.iter().filter_map(|r| r.check(&value)).collect();
            let composed = compose(vec![
                Box::new(RequiredString::default()),
                Box::new(WithoutNumbers::default()),
                Box::new(MinLength::of(3)),
            ]);
            assert_eq!(composed.validate(&value), expected);
        }
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let composed = Composed::default()
            .with(RequiredString::default())
            .with(MinLength::of(8));
        assert_eq!(format!("{:?}", composed), r#"["required_string", "min_length"]"#);
    }
}
