use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use formcheck::{ActiveSchema, Config};

pub fn execute(config: &Config) -> Result<ExitCode> {
    let active = ActiveSchema::from_config(config)?;
    let schema = active.schema();

    let source = match &active {
        ActiveSchema::Custom(_) => "config",
        ActiveSchema::Reference => "reference",
    };
    println!("{} ({} schema)", "Fields".green().bold(), source.cyan());

    for name in schema.field_names() {
        match schema.get(name) {
            Some(validator) => println!("  {} {:?}", name.bold(), validator),
            None => println!("  {}", name.bold()),
        }
    }

    Ok(ExitCode::SUCCESS)
}
