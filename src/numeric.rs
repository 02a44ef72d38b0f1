//! Fixed-width integer arithmetic with explicit overflow policies, plus
//! floating point rounding modes.

use std::fmt;

use crate::{
    diagnostics::{DiagnosticKind, PrimerError, Result},
    value::DemoValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl IntKind {
    pub const ALL: [IntKind; 8] = [
        IntKind::I8,
        IntKind::I16,
        IntKind::I32,
        IntKind::I64,
        IntKind::U8,
        IntKind::U16,
        IntKind::U32,
        IntKind::U64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntKind::I8 => "Int8",
            IntKind::I16 => "Int16",
            IntKind::I32 => "Int32",
            IntKind::I64 => "Int64",
            IntKind::U8 => "UInt8",
            IntKind::U16 => "UInt16",
            IntKind::U32 => "UInt32",
            IntKind::U64 => "UInt64",
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            IntKind::I8 | IntKind::U8 => 8,
            IntKind::I16 | IntKind::U16 => 16,
            IntKind::I32 | IntKind::U32 => 32,
            IntKind::I64 | IntKind::U64 => 64,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, IntKind::I8 | IntKind::I16 | IntKind::I32 | IntKind::I64)
    }

    pub fn min(self) -> i128 {
        if self.is_signed() {
            -(1i128 << (self.bits() - 1))
        } else {
            0
        }
    }

    pub fn max(self) -> i128 {
        if self.is_signed() {
            (1i128 << (self.bits() - 1)) - 1
        } else {
            (1i128 << self.bits()) - 1
        }
    }

    pub fn contains(self, value: i128) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Renders `value` as a demo integer; `value` must fit this kind.
    pub fn value(self, value: i128) -> DemoValue {
        if self.is_signed() {
            i64::try_from(value).map_or(DemoValue::Absent, DemoValue::Int)
        } else {
            u64::try_from(value).map_or(DemoValue::Absent, DemoValue::UInt)
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }
}

/// The wrapped result of an operation and whether it overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflowing {
    pub kind: IntKind,
    pub partial_value: i128,
    pub overflow: bool,
}

impl From<Overflowing> for DemoValue {
    fn from(result: Overflowing) -> Self {
        DemoValue::labeled([
            ("partialValue", result.kind.value(result.partial_value)),
            ("overflow", DemoValue::Bool(result.overflow)),
        ])
    }
}

fn operand<T: TryFrom<i128>>(kind: IntKind, value: i128) -> Result<T> {
    T::try_from(value).map_err(|_| {
        PrimerError::diagnostic(
            DiagnosticKind::Conversion,
            format!("{value} does not fit in {kind}"),
        )
    })
}

macro_rules! native_overflowing {
    ($kind:expr, $op:expr, $a:expr, $b:expr; $($variant:ident => $ty:ty),* $(,)?) => {
        match $kind {
            $(IntKind::$variant => {
                let a: $ty = operand($kind, $a)?;
                let b: $ty = operand($kind, $b)?;
                let (value, overflow) = match $op {
                    ArithOp::Add => a.overflowing_add(b),
                    ArithOp::Sub => a.overflowing_sub(b),
                    ArithOp::Mul => a.overflowing_mul(b),
                    ArithOp::Div => a.overflowing_div(b),
                    ArithOp::Rem => a.overflowing_rem(b),
                };
                (i128::from(value), overflow)
            })*
        }
    };
}

/// `a op b` computed at the width of `kind`, wrapping on overflow.
pub fn overflowing(kind: IntKind, op: ArithOp, a: i128, b: i128) -> Result<Overflowing> {
    if matches!(op, ArithOp::Div | ArithOp::Rem) && b == 0 {
        return Err(PrimerError::diagnostic(
            DiagnosticKind::Arithmetic,
            format!("division by zero in {a} {} {b}", op.symbol()),
        ));
    }
    let (partial_value, overflow) = native_overflowing!(kind, op, a, b;
        I8 => i8,
        I16 => i16,
        I32 => i32,
        I64 => i64,
        U8 => u8,
        U16 => u16,
        U32 => u32,
        U64 => u64,
    );
    Ok(Overflowing {
        kind,
        partial_value,
        overflow,
    })
}

pub fn wrapping(kind: IntKind, op: ArithOp, a: i128, b: i128) -> Result<i128> {
    Ok(overflowing(kind, op, a, b)?.partial_value)
}

pub fn checked(kind: IntKind, op: ArithOp, a: i128, b: i128) -> Result<Option<i128>> {
    let result = overflowing(kind, op, a, b)?;
    Ok((!result.overflow).then_some(result.partial_value))
}

/// Clamps to the bound the exact result ran past.
pub fn saturating(kind: IntKind, op: ArithOp, a: i128, b: i128) -> Result<i128> {
    let result = overflowing(kind, op, a, b)?;
    if !result.overflow {
        return Ok(result.partial_value);
    }
    let toward_max = match op {
        ArithOp::Add => b > 0,
        ArithOp::Sub => b < 0,
        ArithOp::Mul => (a < 0) == (b < 0),
        // Only MIN / -1 overflows, and the exact quotient is positive.
        ArithOp::Div => true,
        // MIN % -1 is exactly zero.
        ArithOp::Rem => return Ok(0),
    };
    Ok(if toward_max { kind.max() } else { kind.min() })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    ToNearestOrAwayFromZero,
    ToNearestOrEven,
    Up,
    Down,
    TowardZero,
}

pub fn round(value: f64, rule: Rounding) -> f64 {
    match rule {
        Rounding::ToNearestOrAwayFromZero => value.round(),
        Rounding::ToNearestOrEven => value.round_ties_even(),
        Rounding::Up => value.ceil(),
        Rounding::Down => value.floor(),
        Rounding::TowardZero => value.trunc(),
    }
}

pub fn round_f32(value: f32, rule: Rounding) -> f32 {
    match rule {
        Rounding::ToNearestOrAwayFromZero => value.round(),
        Rounding::ToNearestOrEven => value.round_ties_even(),
        Rounding::Up => value.ceil(),
        Rounding::Down => value.floor(),
        Rounding::TowardZero => value.trunc(),
    }
}
