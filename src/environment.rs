use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, PrimerError, Result},
    value::DemoValue,
};

pub type ScopeRef = Rc<RefCell<Scope>>;

/// Named bindings, split into constants (`let`) and variables (`var`).
#[derive(Debug, Default)]
pub struct Scope {
    parent: Option<ScopeRef>,
    bindings: IndexMap<String, Binding>,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub value: DemoValue,
    pub mutable: bool,
}

impl Scope {
    pub fn new() -> ScopeRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A nested scope whose definitions shadow `parent`.
    pub fn child(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Self {
            parent: Some(Rc::clone(parent)),
            bindings: IndexMap::new(),
        }))
    }

    pub fn define_constant(&mut self, name: impl Into<String>, value: impl Into<DemoValue>) {
        self.define(name.into(), value.into(), false);
    }

    pub fn define_variable(&mut self, name: impl Into<String>, value: impl Into<DemoValue>) {
        self.define(name.into(), value.into(), true);
    }

    fn define(&mut self, name: String, value: DemoValue, mutable: bool) {
        self.bindings.insert(name, Binding { value, mutable });
    }

    pub fn names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }

    pub fn assign(scope: &ScopeRef, name: &str, value: impl Into<DemoValue>) -> Result<()> {
        let value = value.into();
        Self::with_binding(scope, name, |binding| {
            if !binding.mutable {
                return Err(PrimerError::from(
                    Diagnostic::new(
                        DiagnosticKind::Binding,
                        format!("cannot assign to constant `{name}`"),
                    )
                    .with_note("declare it as a variable to allow reassignment"),
                ));
            }
            binding.value = value;
            Ok(())
        })
    }

    pub fn get(scope: &ScopeRef, name: &str) -> Result<DemoValue> {
        Self::with_binding(scope, name, |binding| Ok(binding.value.clone()))
    }

    /// Runs `visit` on the nearest binding of `name`, walking outward.
    fn with_binding<T>(
        scope: &ScopeRef,
        name: &str,
        visit: impl FnOnce(&mut Binding) -> Result<T>,
    ) -> Result<T> {
        let mut current = Rc::clone(scope);
        loop {
            let parent = {
                let mut frame = current.borrow_mut();
                if let Some(binding) = frame.bindings.get_mut(name) {
                    return visit(binding);
                }
                frame.parent.clone()
            };
            match parent {
                Some(parent) => current = parent,
                None => return Err(undefined(name)),
            }
        }
    }
}

fn undefined(name: &str) -> PrimerError {
    PrimerError::diagnostic(DiagnosticKind::Binding, format!("undefined name `{name}`"))
}
