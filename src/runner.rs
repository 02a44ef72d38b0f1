use std::io::{self, Write};

use log::{debug, trace};

use crate::{catalog::Lesson, config::RunConfig, diagnostics::Result, value::DemoValue};

/// One labelled result in a lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStep {
    pub label: String,
    pub value: DemoValue,
}

impl DemoStep {
    pub fn new(label: impl Into<String>, value: impl Into<DemoValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Renders a step as `<label>: <value>`, always on a single line.
pub fn render_step(step: &DemoStep) -> String {
    let label = single_line(&step.label);
    let rendered = single_line(&step.value.to_string());
    format!("{label}: {rendered}")
}

fn single_line(text: &str) -> String {
    text.replace('\n', "\\n")
}

pub fn render_steps(steps: &[DemoStep]) -> Vec<String> {
    steps.iter().map(render_step).collect()
}

pub struct Runner<W: Write> {
    out: W,
    config: RunConfig,
}

impl Runner<io::Stdout> {
    pub fn stdout(config: RunConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Runner<W> {
    pub fn new(out: W, config: RunConfig) -> Self {
        Self { out, config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Writes one line per step and returns how many were written.
    pub fn run_steps(&mut self, steps: &[DemoStep]) -> Result<usize> {
        for step in steps {
            let line = render_step(step);
            trace!("{line}");
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(steps.len())
    }

    pub fn run_lesson(&mut self, lesson: &Lesson) -> Result<usize> {
        let steps = lesson.steps();
        debug!("running lesson `{}` ({} steps)", lesson.id, steps.len());
        if self.config.headers {
            writeln!(self.out, "== {} ==", lesson.title)?;
        }
        self.run_steps(&steps)
    }

    pub fn run_lessons<'a>(
        &mut self,
        lessons: impl IntoIterator<Item = &'a Lesson>,
    ) -> Result<usize> {
        let mut total = 0;
        for lesson in lessons {
            total += self.run_lesson(lesson)?;
        }
        Ok(total)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
