// File: src/submission.rs
// Purpose: Aggregate validation messages for one form submission

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::schema::Schema;
use crate::value::FieldValue;

/// What kind of form element a field descriptor came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// An input element; the only kind that gets validated
    #[default]
    Input,
    /// Buttons, fieldsets, selects... skipped by the submission handler
    Other,
}

/// One `(name, value)` pair supplied by the form layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldInput {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: FieldValue,

    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldInput {
    pub fn input(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Input,
        }
    }

    pub fn other(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: FieldKind::Other,
        }
    }
}

/// Every message produced by one submission attempt, in field then rule order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Report {
    messages: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        self.messages.extend(messages);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// One message per line, as shown to the user
    pub fn to_display(&self) -> String {
        self.messages.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display())
    }
}

/// Validate every input field of a submission against the schema
pub fn validate_submission<I>(schema: &Schema, fields: I) -> Report
where
    I: IntoIterator<Item = FieldInput>,
{
    let mut report = Report::new();

    for field in fields {
        if field.kind != FieldKind::Input {
            continue;
        }

        let Some(validator) = schema.get(&field.name) else {
            continue;
        };

        let messages = validator.messages(&field.value);
        if !messages.is_empty() {
            debug!(field = %field.name, failures = messages.len(), "field failed validation");
            report.extend(messages);
        }
    }

    report
}

/// Where the aggregated error text is shown
pub trait DisplaySink {
    /// Replace the displayed text; an empty string clears it
    fn show(&mut self, text: &str);
}

/// Sink that keeps the last text it was given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSink {
    text: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl DisplaySink for StringSink {
    fn show(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Result of handling a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing failed; the success action ran
    Proceed,
    /// The default submit action must be suppressed
    Prevented(Report),
}

impl SubmitOutcome {
    pub fn is_prevented(&self) -> bool {
        matches!(self, SubmitOutcome::Prevented(_))
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            SubmitOutcome::Proceed => None,
            SubmitOutcome::Prevented(report) => Some(report),
        }
    }
}

/// Handle one submit event
///
/// On success the sink is cleared and `on_success` runs. On failure the sink
/// receives the newline-joined messages and whatever it showed before is
/// replaced, not cleared.
pub fn handle_submit<I, S, F>(schema: &Schema, fields: I, sink: &mut S, on_success: F) -> SubmitOutcome
where
    I: IntoIterator<Item = FieldInput>,
    S: DisplaySink + ?Sized,
    F: FnOnce(),
{
    let report = validate_submission(schema, fields);

    if report.is_empty() {
        info!("submission accepted");
        sink.show("");
        on_success();
        SubmitOutcome::Proceed
    } else {
        info!(errors = report.len(), "submission prevented");
        sink.show(&report.to_display());
        SubmitOutcome::Prevented(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EmailFormat;

    fn fields(pairs: &[(&str, &str)]) -> Vec<FieldInput> {
        pairs.iter().map(|(n, v)| FieldInput::input(*n, *v)).collect()
    }

    #[test]
    fn test_non_input_fields_skipped() {
        let submission = vec![
            FieldInput::other("firstName", ""),
            FieldInput::input("lastName", "Doe"),
        ];
        assert!(validate_submission(Schema::reference(), submission).is_empty());
    }

    #[test]
    fn test_unknown_fields_skipped() {
        let report = validate_submission(Schema::reference(), fields(&[("submit", ""), ("age", "x")]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_report_display() {
        let mut report = Report::new();
        report.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(report.to_display(), "a\nb");
        assert_eq!(report.to_string(), "a\nb");
        assert_eq!(report.len(), 2);
        assert_eq!(Report::new().to_display(), "");
    }

    #[test]
    fn test_report_serializes_messages() {
        let mut report = Report::new();
        report.extend(vec!["Email is not valid".to_string()]);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"messages":["Email is not valid"]}"#
        );
    }

    #[test]
    fn test_failure_replaces_previous_text() {
        let mut sink = StringSink::new();
        sink.show("old");
        let mut ran = false;
        let outcome = handle_submit(Schema::reference(), fields(&[("email", "bad")]), &mut sink, || ran = true);

        assert!(outcome.is_prevented());
        assert!(!ran);
        assert_eq!(sink.text(), "Email is not valid");
    }

    #[test]
    fn test_success_clears_sink() {
        let mut sink = StringSink::new();
        sink.show("Email is not valid");
        let mut ran = false;
        let outcome = handle_submit(Schema::reference(), fields(&[("email", "a@b.co")]), &mut sink, || ran = true);

        assert_eq!(outcome, SubmitOutcome::Proceed);
        assert!(outcome.report().is_none());
        assert!(ran);
        assert_eq!(sink.text(), "");
    }

    #[test]
    fn test_custom_schema() {
        let schema = Schema::builder()
            .rule("contact", EmailFormat::default())
            .unwrap()
            .build();
        let report = validate_submission(&schema, fields(&[("contact", "x"), ("email", "x")]));
        assert_eq!(report.messages(), ["Email is not valid".to_string()]);
    }

    #[test]
    fn test_field_input_from_json() {
        let parsed: Vec<FieldInput> = serde_json::from_str(
            r#"[{"name": "email", "value": "a@b.co"}, {"name": "go", "kind": "other"}]"#,
        )
        .unwrap();
        assert_eq!(parsed[0], FieldInput::input("email", "a@b.co"));
        assert_eq!(parsed[1].kind, FieldKind::Other);
        assert_eq!(parsed[1].value, FieldValue::Absent);
    }
}
