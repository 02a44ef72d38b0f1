//! Built-in lessons. Each module exposes `steps()`, which computes its
//! demonstration steps from scratch on every call.

pub mod arrays;
pub mod booleans;
pub mod classes;
pub mod control_flow;
pub mod conversions;
pub mod dictionaries;
pub mod enums;
pub mod errors;
pub mod formatting;
pub mod functions;
pub mod integers;
pub mod optionals;
pub mod ranges;
pub mod sets;
pub mod strings;
pub mod tuples;
pub mod variables;
