use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use formcheck::{handle_submit, ActiveSchema, Config, FieldInput, SubmitOutcome};
use tracing::debug;

use crate::sink::TerminalSink;

pub fn execute(config: &Config, pairs: &[String], json: Option<&Path>) -> Result<ExitCode> {
    let active = ActiveSchema::from_config(config)?;

    let fields = match json {
        Some(path) => read_json_fields(path)?,
        None => pairs
            .iter()
            .map(|pair| parse_pair(pair))
            .collect::<Result<Vec<_>>>()?,
    };
    debug!(count = fields.len(), "checking submission");

    let mut sink = TerminalSink::new(io::stdout().lock());
    let outcome = handle_submit(active.schema(), fields, &mut sink, || {});

    match outcome {
        SubmitOutcome::Proceed => Ok(ExitCode::SUCCESS),
        SubmitOutcome::Prevented(_) => Ok(ExitCode::FAILURE),
    }
}

/// `name=value`; only the first `=` separates, so values may contain `=`
pub fn parse_pair(pair: &str) -> Result<FieldInput> {
    let Some((name, value)) = pair.split_once('=') else {
        bail!("expected name=value, got '{}'", pair);
    };
    if name.is_empty() {
        bail!("field name is empty in '{}'", pair);
    }
    Ok(FieldInput::input(name, value))
}

fn read_json_fields(path: &Path) -> Result<Vec<FieldInput>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read fields from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read fields file: {:?}", path))?
    };

    parse_json_fields(&content).with_context(|| format!("Failed to parse fields from {:?}", path))
}

pub fn parse_json_fields(content: &str) -> Result<Vec<FieldInput>> {
    let fields: Vec<FieldInput> = serde_json::from_str(content)?;
    Ok(fields)
}
