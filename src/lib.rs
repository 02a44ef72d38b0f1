//! Runnable lessons on language fundamentals. Every lesson is a sequence of
//! labelled demonstration steps, printed one `<label>: <value>` line each.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod environment;
pub mod format;
pub mod lessons;
pub mod numeric;
pub mod runner;
pub mod script;
pub mod value;

pub use catalog::{Catalog, Lesson};
pub use config::RunConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, PrimerError};
pub use runner::{DemoStep, Runner};
pub use script::Script;
pub use value::DemoValue;
