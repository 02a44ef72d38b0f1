use crate::{runner::DemoStep, value::DemoValue};

/// Collects demonstration steps in the order a lesson declares them.
#[derive(Debug, Default, Clone)]
pub struct Script {
    steps: Vec<DemoStep>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(mut self, label: impl Into<String>, value: impl Into<DemoValue>) -> Self {
        self.push(label, value);
        self
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<DemoValue>) {
        self.steps.push(DemoStep::new(label, value));
    }

    pub fn extend(mut self, steps: impl IntoIterator<Item = DemoStep>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Vec<DemoStep> {
        self.steps
    }
}
