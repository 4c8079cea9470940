// File: src/schema.rs
// Purpose: Field name -> validator mapping

use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;

use crate::compose::{compose, Composed};
use crate::email::EmailFormat;
use crate::rule::{Rule, RuleConfig};
use crate::string::{MinLength, RequiredString, WithoutNumbers};
use crate::value::FieldValue;

/// Validator attached to a field: either a bare rule or a composition
pub enum Validator {
    Single(Box<dyn Rule>),
    Composed(Composed),
}

impl Validator {
    /// Run the validator and normalise its result to a list
    pub fn messages(&self, value: &FieldValue) -> Vec<String> {
        match self {
            Validator::Single(rule) => rule.check(value).into_iter().collect(),
            Validator::Composed(composed) => composed.validate(value),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Single(rule) => write!(f, "Single({})", rule.name()),
            Validator::Composed(composed) => write!(f, "Composed({:?})", composed),
        }
    }
}

impl From<Composed> for Validator {
    fn from(composed: Composed) -> Self {
        Validator::Composed(composed)
    }
}

impl From<Box<dyn Rule>> for Validator {
    fn from(rule: Box<dyn Rule>) -> Self {
        Validator::Single(rule)
    }
}

/// Immutable mapping from field name to validator
#[derive(Debug, Default)]
pub struct Schema {
    fields: HashMap<String, Validator>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Validator for a field, `None` for fields the schema does not know
    pub fn get(&self, field: &str) -> Option<&Validator> {
        self.fields.get(field)
    }

    /// Messages for one field value; unknown fields always pass
    pub fn validate_field(&self, field: &str, value: &FieldValue) -> Vec<String> {
        match self.get(field) {
            Some(validator) => validator.messages(value),
            None => Vec::new(),
        }
    }

    /// Field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The sign-up form schema: names, email and password
    pub fn reference() -> &'static Schema {
        &REFERENCE_SCHEMA
    }
}

static REFERENCE_SCHEMA: Lazy<Schema> = Lazy::new(build_reference);

fn build_reference() -> Schema {
    let message = |m: &str| RuleConfig::new().message(m);

    let mut fields = HashMap::new();
    fields.insert(
        "firstName".to_string(),
        Validator::from(compose(vec![
            Box::new(RequiredString::new(message("First Name - Field is Required"))),
            Box::new(WithoutNumbers::new(message("First Name - You have number in your field"))),
        ])),
    );
    fields.insert(
        "lastName".to_string(),
        Validator::from(compose(vec![
            Box::new(RequiredString::new(message("Last Name - Field is Required"))),
            Box::new(WithoutNumbers::new(message("Last Name - You have number in your field"))),
        ])),
    );
    fields.insert(
        "email".to_string(),
        Validator::Single(Box::new(EmailFormat::default())),
    );
    fields.insert(
        "password".to_string(),
        Validator::from(compose(vec![
            Box::new(RequiredString::new(message("Password - Field is Required"))),
            Box::new(MinLength::new(
                message("Password - should be more then 8 chars").count(8),
            )),
        ])),
    );

    Schema { fields }
}

/// Collects validators before freezing them into a `Schema`
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: HashMap<String, Validator>,
}

impl SchemaBuilder {
    /// Attach a validator to a field. A field may only be registered once.
    pub fn field(mut self, name: impl Into<String>, validator: impl Into<Validator>) -> Result<Self> {
        let name = name.into();
        if self.fields.contains_key(&name) {
            bail!("field '{}' is defined more than once", name);
        }
        self.fields.insert(name, validator.into());
        Ok(self)
    }

    /// Attach a single rule to a field
    pub fn rule(self, name: impl Into<String>, rule: impl Rule + 'static) -> Result<Self> {
        self.field(name, Validator::Single(Box::new(rule)))
    }

    pub fn build(self) -> Schema {
        Schema { fields: self.fields }
    }
}
