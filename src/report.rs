//! Diagnostics emitted while converting tables.
//!
//! Converters never print on their own; they hand every problem to a
//! [`Reporter`], which decides where it ends up.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A coordinate token in the pair path did not parse.
    Unparsable { token: String, reason: String },
    /// A record field was left unchanged because it did not parse.
    FieldNotConverted {
        record_id: String,
        field: String,
        raw: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::Unparsable { token, reason } => {
                write!(f, "Could not parse {}: {}", token, reason)
            }
            Diagnostic::FieldNotConverted {
                record_id,
                field,
                raw,
            } => write!(f, "Could not convert {} for {}: {}", field, record_id, raw),
        }
    }
}

pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sends diagnostics to the `log` facade as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
