use std::fmt;

use thiserror::Error;

/// Classification of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Binding,
    Conversion,
    Arithmetic,
    Format,
    Catalog,
}

/// A failure with enough context to show to whoever is running the lessons.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl DiagnosticKind {
    pub fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Binding => "binding",
            DiagnosticKind::Conversion => "conversion",
            DiagnosticKind::Arithmetic => "arithmetic",
            DiagnosticKind::Format => "format",
            DiagnosticKind::Catalog => "catalog",
        }
    }
}

/// Renders on one line: `<kind> error: <message> (<note>; <note>)`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.label(), self.message)?;
        if !self.notes.is_empty() {
            write!(f, " ({})", self.notes.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Unified error type for the lesson harness.
#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrimerError {
    pub fn diagnostic(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::Diagnostic(Diagnostic::new(kind, message))
    }

    /// The bare message, without the kind prefix or notes.
    pub fn message(&self) -> String {
        match self {
            PrimerError::Diagnostic(diag) => diag.message.clone(),
            PrimerError::Io(err) => err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PrimerError>;
