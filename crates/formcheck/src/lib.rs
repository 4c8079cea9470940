//! formcheck
//!
//! Composable rules for sign-up form fields. Each rule reports at most one
//! message for a value, `compose` runs several rules and keeps every failure,
//! and a `Schema` maps field names to validators. `handle_submit` turns one
//! submission into a `Report` and decides whether the form may proceed.
//!
//! ```
//! use formcheck::{validate_submission, FieldInput, Schema};
//!
//! let report = validate_submission(
//!     Schema::reference(),
//!     vec![
//!         FieldInput::input("firstName", ""),
//!         FieldInput::input("email", "jane@doe.com"),
//!     ],
//! );
//! assert_eq!(report.to_display(), "First Name - Field is Required");
//! ```

pub mod compose;
pub mod config;
pub mod email;
pub mod rule;
pub mod schema;
pub mod string;
pub mod submission;
pub mod value;

// Re-export the public surface
pub use compose::{compose, Composed};
pub use config::{ActiveSchema, Config, FieldSpec, LoggingConfig};
pub use email::{is_valid_email, EmailFormat};
pub use rule::{Rule, RuleConfig, RuleKind, RuleSpec};
pub use schema::{Schema, SchemaBuilder, Validator};
pub use string::{MinLength, RequiredString, WithoutNumbers};
pub use submission::{
    handle_submit, validate_submission, DisplaySink, FieldInput, FieldKind, Report, StringSink,
    SubmitOutcome,
};
pub use value::FieldValue;
