use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use formcheck::{FieldValue, RuleConfig, RuleKind};

pub fn execute(kind: &str, value: &str, count: Option<usize>, message: Option<String>) -> Result<ExitCode> {
    let kind: RuleKind = kind.parse()?;
    let config = RuleConfig { message, count };
    let rule = kind.build(config)?;

    match rule.check(&FieldValue::from(value)) {
        None => {
            println!("{} {}", "✓".green(), kind);
            Ok(ExitCode::SUCCESS)
        }
        Some(message) => {
            println!("{}", message.red());
            Ok(ExitCode::FAILURE)
        }
    }
}
