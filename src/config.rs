/// Presentation options for a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Print a `== title ==` line before each lesson. Off by default, so
    /// stdout carries exactly one line per step.
    pub headers: bool,
}

impl RunConfig {
    pub fn with_headers() -> Self {
        Self { headers: true }
    }
}
