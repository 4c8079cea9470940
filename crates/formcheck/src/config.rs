// File: src/config.rs
// Purpose: Configuration parsing from formcheck.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::compose::Composed;
use crate::rule::RuleSpec;
use crate::schema::{Schema, Validator};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Custom schema; the reference sign-up schema is used when empty
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// error, warn, info, debug or trace
    #[serde(default = "default_level")]
    pub level: String,
}

/// One `[[fields]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Force a composed validator even for a single rule
    #[serde(default)]
    pub compose: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl FieldSpec {
    /// Build the validator described by this entry
    pub fn validator(&self) -> Result<Validator> {
        if self.rules.len() == 1 && !self.compose {
            let rule = self.rules[0]
                .build()
                .with_context(|| format!("Invalid rule for field '{}'", self.name))?;
            return Ok(Validator::Single(rule));
        }

        let rules = self
            .rules
            .iter()
            .map(|spec| spec.build())
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid rule for field '{}'", self.name))?;
        Ok(Validator::Composed(Composed::new(rules)))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./formcheck.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("formcheck.toml")
    }

    /// Load a config file the user named explicitly; a missing file is an error
    pub fn load_explicit(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// True when the config defines its own fields
    pub fn has_custom_schema(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Build the custom schema, if the config defines one
    pub fn custom_schema(&self) -> Result<Option<Schema>> {
        if !self.has_custom_schema() {
            return Ok(None);
        }

        let mut builder = Schema::builder();
        for field in &self.fields {
            builder = builder.field(field.name.clone(), field.validator()?)?;
        }
        Ok(Some(builder.build()))
    }
}

/// The schema a config selects: its own fields, or the reference schema
pub enum ActiveSchema {
    Custom(Schema),
    Reference,
}

impl ActiveSchema {
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.custom_schema()? {
            Some(schema) => Ok(ActiveSchema::Custom(schema)),
            None => {
                warn!("no [[fields]] in config, using the reference sign-up schema");
                Ok(ActiveSchema::Reference)
            }
        }
    }

    pub fn schema(&self) -> &Schema {
        match self {
            ActiveSchema::Custom(schema) => schema,
            ActiveSchema::Reference => Schema::reference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleKind;
    use std::io::Write;

    const CUSTOM: &str = r#"
[logging]
level = "debug"

[[fields]]
name = "nickname"
rules = [
  { rule = "required_string", message = "Nickname - Field is Required" },
  { rule = "without_numbers" },
  { rule = "min_length", count = 3 },
]

[[fields]]
name = "contact"
rules = [{ rule = "email_format" }]

[[fields]]
name = "anything"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.has_custom_schema());
        assert!(config.custom_schema().unwrap().is_none());
    }

    #[test]
    fn test_parse_custom_fields() {
        let config = Config::parse(CUSTOM).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.fields.len(), 3);
        assert_eq!(config.fields[0].rules[2].rule, RuleKind::MinLength);

        let schema = config.custom_schema().unwrap().unwrap();
        assert_eq!(schema.field_names(), vec!["anything", "contact", "nickname"]);
        assert!(matches!(schema.get("contact"), Some(Validator::Single(_))));
        assert!(matches!(schema.get("anything"), Some(Validator::Composed(_))));
        assert_eq!(
            schema.validate_field("nickname", &"7".into()),
            vec!["You have number in your field", "String less then 3"]
        );
        assert_eq!(
            schema.validate_field("nickname", &"".into()),
            vec!["Nickname - Field is Required"]
        );
        assert!(schema.validate_field("anything", &"".into()).is_empty());
    }

    #[test]
    fn test_forced_composition() {
        let config = Config::parse(
            "[[fields]]\nname = \"a\"\ncompose = true\nrules = [{ rule = \"email_format\" }]\n",
        )
        .unwrap();
        let schema = config.custom_schema().unwrap().unwrap();
        assert!(matches!(schema.get("a"), Some(Validator::Composed(_))));
    }

    #[test]
    fn test_unknown_rule_is_parse_error() {
        let result = Config::parse("[[fields]]\nname = \"a\"\nrules = [{ rule = \"max_length\" }]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let config = Config::parse("[[fields]]\nname = \"a\"\n\n[[fields]]\nname = \"a\"\n").unwrap();
        let err = config.custom_schema().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_stray_count_rejected() {
        let config = Config::parse(
            "[[fields]]\nname = \"a\"\nrules = [{ rule = \"without_numbers\", count = 2 }]\n",
        )
        .unwrap();
        let err = config.custom_schema().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid rule for field 'a'"));
    }

    #[test]
    fn test_active_schema_falls_back_to_reference() {
        let active = ActiveSchema::from_config(&Config::default()).unwrap();
        assert!(matches!(active, ActiveSchema::Reference));
        assert_eq!(active.schema().len(), 4);
    }

    #[test]
    fn test_load_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::load(dir.path().join("nope.toml")).unwrap();
        assert!(!missing.has_custom_schema());

        let empty_path = dir.path().join("empty.toml");
        std::fs::File::create(&empty_path).unwrap();
        assert_eq!(Config::load(&empty_path).unwrap().logging.level, "info");
    }

    #[test]
    fn test_load_explicit_requires_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_explicit(dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));

        let empty_path = dir.path().join("empty.toml");
        std::fs::File::create(&empty_path).unwrap();
        assert!(!Config::load_explicit(&empty_path).unwrap().has_custom_schema());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOM.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.fields.len(), 3);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"[[fields]\n").unwrap();
        let err = Config::load(broken.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
