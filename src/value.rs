use std::{
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    mem,
};

use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::PrimerError;

/// Every kind of data a lesson can show.
///
/// Floating point members compare and hash by bit pattern, which keeps `Eq`
/// and `Hash` lawful so values can be set members and map keys.
#[derive(Debug, Clone)]
pub enum DemoValue {
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
    Text(String),
    Char(char),
    Bool(bool),
    List(Vec<DemoValue>),
    Set(IndexSet<DemoValue>),
    Map(IndexMap<DemoValue, DemoValue>),
    Tuple(Vec<Field>),
    Variant(EnumCase),
    /// A conversion or lookup that produced nothing.
    Absent,
    /// An error caught and kept as data.
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub label: Option<String>,
    pub value: DemoValue,
}

impl Field {
    pub fn positional(value: impl Into<DemoValue>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, value: impl Into<DemoValue>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumCase {
    pub type_name: String,
    pub case: String,
    pub payload: Vec<Field>,
}

impl DemoValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Keeps the success value, or the error's message as a `Failure`.
    pub fn caught<T, E>(result: std::result::Result<T, E>) -> Self
    where
        T: Into<DemoValue>,
        E: fmt::Display,
    {
        match result {
            Ok(value) => value.into(),
            Err(err) => Self::Failure(err.to_string()),
        }
    }

    pub fn list<T: Into<DemoValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn set<T: Into<DemoValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<DemoValue>,
        V: Into<DemoValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn tuple<T: Into<DemoValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Tuple(items.into_iter().map(Field::positional).collect())
    }

    pub fn labeled<L, T>(fields: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<DemoValue>,
    {
        Self::Tuple(
            fields
                .into_iter()
                .map(|(label, value)| Field::labeled(label, value))
                .collect(),
        )
    }

    pub fn variant(type_name: impl Into<String>, case: impl Into<String>) -> Self {
        Self::variant_with(type_name, case, Vec::new())
    }

    pub fn variant_with(
        type_name: impl Into<String>,
        case: impl Into<String>,
        payload: Vec<Field>,
    ) -> Self {
        Self::Variant(EnumCase {
            type_name: type_name.into(),
            case: case.into(),
            payload,
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            DemoValue::Int(_) => "Int",
            DemoValue::UInt(_) => "UInt",
            DemoValue::Float(_) => "Float",
            DemoValue::Float32(_) => "Float32",
            DemoValue::Text(_) => "Text",
            DemoValue::Char(_) => "Char",
            DemoValue::Bool(_) => "Bool",
            DemoValue::List(_) => "List",
            DemoValue::Set(_) => "Set",
            DemoValue::Map(_) => "Map",
            DemoValue::Tuple(_) => "Tuple",
            DemoValue::Variant(_) => "Variant",
            DemoValue::Absent => "Absent",
            DemoValue::Failure(_) => "Failure",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DemoValue::Absent)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, DemoValue::Failure(_))
    }

    /// Element count for collections and tuples, character count for text.
    pub fn len(&self) -> Option<usize> {
        match self {
            DemoValue::Text(text) => Some(text.chars().count()),
            DemoValue::List(items) => Some(items.len()),
            DemoValue::Set(items) => Some(items.len()),
            DemoValue::Map(entries) => Some(entries.len()),
            DemoValue::Tuple(fields) => Some(fields.len()),
            _ => None,
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoValue::Text(text) => write!(f, "{text:?}"),
            DemoValue::Char(ch) => write!(f, "{ch:?}"),
            other => write!(f, "{other}"),
        }
    }
}

fn fmt_sequence<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a DemoValue>,
) -> fmt::Result {
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        item.fmt_nested(f)?;
    }
    Ok(())
}

fn fmt_fields(f: &mut fmt::Formatter<'_>, fields: &[Field]) -> fmt::Result {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        if let Some(label) = &field.label {
            write!(f, "{label}: ")?;
        }
        field.value.fmt_nested(f)?;
    }
    Ok(())
}

impl fmt::Display for DemoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoValue::Int(n) => write!(f, "{n}"),
            DemoValue::UInt(n) => write!(f, "{n}"),
            DemoValue::Float(n) => write!(f, "{n:?}"),
            DemoValue::Float32(n) => write!(f, "{n:?}"),
            DemoValue::Text(text) => write!(f, "{text}"),
            DemoValue::Char(ch) => write!(f, "{ch}"),
            DemoValue::Bool(b) => write!(f, "{b}"),
            DemoValue::List(items) => {
                write!(f, "[")?;
                fmt_sequence(f, items.iter())?;
                write!(f, "]")
            }
            DemoValue::Set(items) => {
                write!(f, "{{")?;
                fmt_sequence(f, items.iter())?;
                write!(f, "}}")
            }
            DemoValue::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    key.fmt_nested(f)?;
                    write!(f, ": ")?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
            DemoValue::Tuple(fields) => {
                write!(f, "(")?;
                fmt_fields(f, fields)?;
                write!(f, ")")
            }
            DemoValue::Variant(variant) => {
                write!(f, "{}", variant.case)?;
                if !variant.payload.is_empty() {
                    write!(f, "(")?;
                    fmt_fields(f, &variant.payload)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            DemoValue::Absent => write!(f, "absent"),
            DemoValue::Failure(message) => write!(f, "error({message})"),
        }
    }
}

impl PartialEq for DemoValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DemoValue::Int(a), DemoValue::Int(b)) => a == b,
            (DemoValue::UInt(a), DemoValue::UInt(b)) => a == b,
            (DemoValue::Float(a), DemoValue::Float(b)) => a.to_bits() == b.to_bits(),
            (DemoValue::Float32(a), DemoValue::Float32(b)) => a.to_bits() == b.to_bits(),
            (DemoValue::Text(a), DemoValue::Text(b)) => a == b,
            (DemoValue::Char(a), DemoValue::Char(b)) => a == b,
            (DemoValue::Bool(a), DemoValue::Bool(b)) => a == b,
            (DemoValue::List(a), DemoValue::List(b)) => a == b,
            (DemoValue::Set(a), DemoValue::Set(b)) => a == b,
            (DemoValue::Map(a), DemoValue::Map(b)) => a == b,
            (DemoValue::Tuple(a), DemoValue::Tuple(b)) => a == b,
            (DemoValue::Variant(a), DemoValue::Variant(b)) => a == b,
            (DemoValue::Absent, DemoValue::Absent) => true,
            (DemoValue::Failure(a), DemoValue::Failure(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for DemoValue {}

// Set and map equality ignores order, so their hashes must too.
fn unordered_hash<T: Hash>(items: impl Iterator<Item = T>) -> u64 {
    items
        .map(|item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        })
        .fold(0u64, u64::wrapping_add)
}

impl Hash for DemoValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            DemoValue::Int(n) => n.hash(state),
            DemoValue::UInt(n) => n.hash(state),
            DemoValue::Float(n) => n.to_bits().hash(state),
            DemoValue::Float32(n) => n.to_bits().hash(state),
            DemoValue::Text(text) => text.hash(state),
            DemoValue::Char(ch) => ch.hash(state),
            DemoValue::Bool(b) => b.hash(state),
            DemoValue::List(items) => items.hash(state),
            DemoValue::Set(items) => {
                items.len().hash(state);
                unordered_hash(items.iter()).hash(state);
            }
            DemoValue::Map(entries) => {
                entries.len().hash(state);
                unordered_hash(entries.iter()).hash(state);
            }
            DemoValue::Tuple(fields) => fields.hash(state),
            DemoValue::Variant(variant) => variant.hash(state),
            DemoValue::Absent => {}
            DemoValue::Failure(message) => message.hash(state),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for DemoValue {
            fn from(value: $ty) -> Self {
                DemoValue::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for DemoValue {
            fn from(value: $ty) -> Self {
                DemoValue::UInt(u64::from(value))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<usize> for DemoValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => DemoValue::Int(n),
            Err(_) => DemoValue::UInt(value as u64),
        }
    }
}

impl From<f64> for DemoValue {
    fn from(value: f64) -> Self {
        DemoValue::Float(value)
    }
}

impl From<f32> for DemoValue {
    fn from(value: f32) -> Self {
        DemoValue::Float32(value)
    }
}

impl From<bool> for DemoValue {
    fn from(value: bool) -> Self {
        DemoValue::Bool(value)
    }
}

impl From<char> for DemoValue {
    fn from(value: char) -> Self {
        DemoValue::Char(value)
    }
}

impl From<&str> for DemoValue {
    fn from(value: &str) -> Self {
        DemoValue::Text(value.to_string())
    }
}

impl From<String> for DemoValue {
    fn from(value: String) -> Self {
        DemoValue::Text(value)
    }
}

impl From<&String> for DemoValue {
    fn from(value: &String) -> Self {
        DemoValue::Text(value.clone())
    }
}

impl<T: Into<DemoValue>> From<Option<T>> for DemoValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DemoValue::Absent, Into::into)
    }
}

impl From<PrimerError> for DemoValue {
    fn from(err: PrimerError) -> Self {
        DemoValue::Failure(err.message())
    }
}

impl<T: Into<DemoValue>> From<Result<T, PrimerError>> for DemoValue {
    fn from(value: Result<T, PrimerError>) -> Self {
        match value {
            Ok(inner) => inner.into(),
            Err(err) => err.into(),
        }
    }
}

impl<T: Into<DemoValue>> From<Vec<T>> for DemoValue {
    fn from(items: Vec<T>) -> Self {
        DemoValue::list(items)
    }
}

impl<T: Into<DemoValue>> From<IndexSet<T>> for DemoValue {
    fn from(items: IndexSet<T>) -> Self {
        DemoValue::set(items)
    }
}

impl<K: Into<DemoValue>, V: Into<DemoValue>> From<IndexMap<K, V>> for DemoValue {
    fn from(entries: IndexMap<K, V>) -> Self {
        DemoValue::map(entries)
    }
}

impl<A: Into<DemoValue>, B: Into<DemoValue>> From<(A, B)> for DemoValue {
    fn from((a, b): (A, B)) -> Self {
        DemoValue::Tuple(vec![Field::positional(a), Field::positional(b)])
    }
}

impl<A, B, C> From<(A, B, C)> for DemoValue
where
    A: Into<DemoValue>,
    B: Into<DemoValue>,
    C: Into<DemoValue>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        DemoValue::Tuple(vec![
            Field::positional(a),
            Field::positional(b),
            Field::positional(c),
        ])
    }
}
