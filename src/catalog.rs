use indexmap::IndexMap;
use log::warn;

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, PrimerError, Result},
    lessons,
    runner::DemoStep,
};

/// A titled, self-contained sequence of demonstration steps.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    build: fn() -> Vec<DemoStep>,
}

impl Lesson {
    pub const fn new(id: &'static str, title: &'static str, build: fn() -> Vec<DemoStep>) -> Self {
        Self { id, title, build }
    }

    pub fn steps(&self) -> Vec<DemoStep> {
        (self.build)()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    lessons: IndexMap<&'static str, Lesson>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in lesson, in teaching order.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(Lesson::new(
            "variables",
            "Variables and constants",
            lessons::variables::steps,
        ));
        catalog.register(Lesson::new(
            "integers",
            "Integers and overflow",
            lessons::integers::steps,
        ));
        catalog.register(Lesson::new(
            "conversions",
            "Type conversion and rounding",
            lessons::conversions::steps,
        ));
        catalog.register(Lesson::new("strings", "Working with strings", lessons::strings::steps));
        catalog.register(Lesson::new(
            "formatting",
            "Formatting numbers and text",
            lessons::formatting::steps,
        ));
        catalog.register(Lesson::new(
            "booleans",
            "Booleans, comparisons and logical operators",
            lessons::booleans::steps,
        ));
        catalog.register(Lesson::new("tuples", "Tuples", lessons::tuples::steps));
        catalog.register(Lesson::new(
            "optionals",
            "Optional values",
            lessons::optionals::steps,
        ));
        catalog.register(Lesson::new("ranges", "Ranges", lessons::ranges::steps));
        catalog.register(Lesson::new("errors", "Error handling", lessons::errors::steps));
        catalog.register(Lesson::new("arrays", "Arrays", lessons::arrays::steps));
        catalog.register(Lesson::new("sets", "Sets", lessons::sets::steps));
        catalog.register(Lesson::new(
            "dictionaries",
            "Dictionaries",
            lessons::dictionaries::steps,
        ));
        catalog.register(Lesson::new(
            "control-flow",
            "Conditionals, matching and loops",
            lessons::control_flow::steps,
        ));
        catalog.register(Lesson::new(
            "functions",
            "Functions and closures",
            lessons::functions::steps,
        ));
        catalog.register(Lesson::new("enums", "Enumerations", lessons::enums::steps));
        catalog.register(Lesson::new(
            "classes",
            "Types, composition and initializers",
            lessons::classes::steps,
        ));
        catalog
    }

    /// Adds `lesson`, replacing any lesson with the same id.
    pub fn register(&mut self, lesson: Lesson) {
        self.lessons.insert(lesson.id, lesson);
    }

    pub fn get(&self, id: &str) -> Result<&Lesson> {
        self.lessons.get(id).ok_or_else(|| {
            warn!("unknown lesson `{id}`");
            PrimerError::from(
                Diagnostic::new(DiagnosticKind::Catalog, format!("unknown lesson `{id}`"))
                    .with_note(format!("available lessons: {}", self.ids().join(", "))),
            )
        })
    }

    /// Resolves `ids` in the order given; an empty list selects everything.
    pub fn select(&self, ids: &[String]) -> Result<Vec<&Lesson>> {
        if ids.is_empty() {
            return Ok(self.iter().collect());
        }
        ids.iter().map(|id| self.get(id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.values()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.lessons.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}
