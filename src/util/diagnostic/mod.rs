//! Diagnostic model and rendering
//!
//! A [`Diagnostic`] captures everything needed to report one error: the
//! message, the offending token, and the verbatim source line it sits on.
//! Diagnostics are self-contained so they can outlive the source buffer
//! and still render with a caret underline.

use serde::Serialize;
use std::fmt;

use crate::frontend::lexer::tokens::Token;

/// Diagnostic severity
///
/// The front end only ever emits errors; the variant exists so rendered
/// output names its level explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One reported error, anchored at a token
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Offending token, by value, with its span and position
    pub token: Token,
    /// Verbatim text of the source line the token starts on
    pub line_text: String,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, token: Token, line_text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            token,
            line_text: line_text.into(),
        }
    }

    /// Render the diagnostic with a caret/tilde underline
    ///
    /// ```text
    /// Expected closing parenthesis ')' at line 1 column 19:
    /// let x = 1 + (2 + 3;
    /// ~~~~~~~~~~~~~~~~~~^
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!(
            "{} at line {} column {}:\n",
            self.message, self.token.line, self.token.column
        );
        out.push_str(&self.line_text);
        out.push('\n');

        let caret_beg = self.token.column.saturating_sub(1);
        let caret_end = caret_beg + self.token.span.len().max(1);
        for (idx, _) in self.line_text.chars().enumerate() {
            if idx >= caret_beg && idx < caret_end {
                out.push('^');
            } else {
                out.push('~');
            }
        }
        out
    }
}

/// Render a batch of diagnostics, one blank line between entries
pub fn render_all(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for (i, diagnostic) in diagnostics.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&diagnostic.render());
    }
    out
}

#[cfg(test)]
mod tests;
