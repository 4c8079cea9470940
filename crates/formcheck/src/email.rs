// File: src/email.rs
// Purpose: Email format rule

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::{Rule, RuleConfig};
use crate::value::FieldValue;

// JavaScript's `\s`; the regex crate's Unicode `\s` differs (no U+FEFF, adds U+0085)
const JS_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// JavaScript's `.`: anything but a line terminator
const JS_ANY: &str = r"[^\n\r\x{2028}\x{2029}]";

// local-part (dot-atoms or a quoted string) @ (bracketed IPv4 or labels + alpha TLD)
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:{}@"]"#, JS_WHITESPACE);
    let pattern = format!(
        r#"^(({atom}+(\.{atom}+)*)|{any}("{any}+"))@((\[[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{{2,}}))$"#,
        atom = atom,
        any = JS_ANY,
    );
    Regex::new(&pattern).expect("email pattern is a valid regex")
});

/// Check an address against the email pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Fails when a non-empty string is not an email address
///
/// An empty string passes, like an absent value.
#[derive(Debug, Clone)]
pub struct EmailFormat {
    message: String,
}

impl EmailFormat {
    pub const DEFAULT_MESSAGE: &'static str = "Email is not valid";

    pub fn new(config: RuleConfig) -> Self {
        Self {
            message: config
                .message
                .unwrap_or_else(|| Self::DEFAULT_MESSAGE.to_string()),
        }
    }
}

impl Default for EmailFormat {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Rule for EmailFormat {
    fn name(&self) -> &'static str {
        "email_format"
    }

    fn check(&self, value: &FieldValue) -> Option<String> {
        let text = value.non_empty_text()?;
        if is_valid_email(text) {
            None
        } else {
            Some(self.message.clone())
        }
    }
}
