// File: src/sink.rs
// Purpose: Terminal display sink for submission reports

use std::io::Write;

use colored::Colorize;
use formcheck::DisplaySink;

/// Writes the error block to a terminal, one message per line
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn show(&mut self, text: &str) {
        // nothing to clear
        if text.is_empty() {
            return;
        }

        for line in text.lines() {
            if writeln!(self.out, "{}", line.red()).is_err() {
                break;
            }
        }
    }
}
