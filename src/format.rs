//! printf-style formatting over demo values and digit grouping.

use std::{iter::Peekable, str::Chars};

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, PrimerError, Result},
    value::DemoValue,
};

/// Separators used when writing or reading a decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub grouping: char,
    pub decimal: char,
}

impl NumberStyle {
    pub const fn english() -> Self {
        Self {
            grouping: ',',
            decimal: '.',
        }
    }

    pub const fn spanish() -> Self {
        Self {
            grouping: '.',
            decimal: ',',
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

fn format_error(message: impl Into<String>) -> PrimerError {
    PrimerError::from(Diagnostic::new(DiagnosticKind::Format, message))
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    number
}

/// Formats `template`, consuming one argument per conversion.
pub fn sprintf(template: &str, args: &[DemoValue]) -> Result<String> {
    let mut out = String::new();
    let mut chars = template.chars().peekable();
    let mut remaining = args.iter();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.left = true,
                '+' => directive.plus = true,
                ' ' => directive.space = true,
                '0' => directive.zero = true,
                '#' => directive.alternate = true,
                _ => break,
            }
            chars.next();
        }
        directive.width = read_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(read_number(&mut chars).unwrap_or(0));
        }

        let conversion = chars
            .next()
            .ok_or_else(|| format_error("dangling `%` at the end of the template"))?;
        let arg = remaining.next().ok_or_else(|| {
            format_error(format!(
                "missing argument for `%{conversion}` (only {} supplied)",
                args.len()
            ))
        })?;
        let piece = convert(conversion, directive, arg)?;
        out.push_str(&piece);
    }

    let surplus = remaining.count();
    if surplus > 0 {
        return Err(PrimerError::from(
            Diagnostic::new(
                DiagnosticKind::Format,
                format!("{surplus} argument(s) left unused"),
            )
            .with_note(format!("template: {template}")),
        ));
    }
    Ok(out)
}

fn convert(conversion: char, directive: Directive, arg: &DemoValue) -> Result<String> {
    match conversion {
        'd' | 'i' => {
            let value = integer_arg(conversion, arg)?;
            let digits = min_digits(value.unsigned_abs().to_string(), directive.precision);
            Ok(pad_number(sign(value < 0, directive), digits, directive))
        }
        'u' => {
            let bits = unsigned_arg(conversion, arg)?;
            let digits = min_digits(bits.to_string(), directive.precision);
            Ok(pad_number(String::new(), digits, directive))
        }
        'x' | 'X' | 'o' => {
            let bits = unsigned_arg(conversion, arg)?;
            let digits = match conversion {
                'x' => format!("{bits:x}"),
                'X' => format!("{bits:X}"),
                _ => format!("{bits:o}"),
            };
            let prefix = match (directive.alternate && bits != 0, conversion) {
                (true, 'x') => "0x",
                (true, 'X') => "0X",
                (true, _) => "0",
                (false, _) => "",
            };
            Ok(pad_number(
                prefix.to_string(),
                min_digits(digits, directive.precision),
                directive,
            ))
        }
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => {
            let value = float_arg(conversion, arg)?;
            let upper = conversion.is_ascii_uppercase();
            let negative = value.is_sign_negative() && !value.is_nan();
            let body = if !value.is_finite() {
                non_finite(value, upper)
            } else {
                let magnitude = value.abs();
                let precision = directive.precision.unwrap_or(6);
                match conversion.to_ascii_lowercase() {
                    'f' => format!("{magnitude:.precision$}"),
                    'e' => scientific(magnitude, precision, upper),
                    _ => general(magnitude, precision, upper, directive.alternate),
                }
            };
            let numeric = value.is_finite();
            let directive = Directive {
                zero: directive.zero && numeric,
                ..directive
            };
            Ok(pad_number(sign(negative, directive), body, directive))
        }
        's' | '@' => {
            let mut text = arg.to_string();
            if let Some(limit) = directive.precision {
                text = text.chars().take(limit).collect();
            }
            Ok(pad_text(text, directive))
        }
        'c' => {
            let ch = match arg {
                DemoValue::Char(ch) => *ch,
                DemoValue::Int(n) => u32::try_from(*n)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| format_error(format!("{n} is not a character code")))?,
                other => return Err(mismatch(conversion, "a character", other)),
            };
            Ok(pad_text(ch.to_string(), directive))
        }
        other => Err(format_error(format!("unknown conversion `%{other}`"))),
    }
}

fn mismatch(conversion: char, expected: &str, found: &DemoValue) -> PrimerError {
    format_error(format!(
        "`%{conversion}` expects {expected} but found {}",
        found.type_name()
    ))
}

fn integer_arg(conversion: char, arg: &DemoValue) -> Result<i128> {
    match arg {
        DemoValue::Int(n) => Ok(i128::from(*n)),
        DemoValue::UInt(n) => Ok(i128::from(*n)),
        other => Err(mismatch(conversion, "an integer", other)),
    }
}

fn unsigned_arg(conversion: char, arg: &DemoValue) -> Result<u64> {
    match arg {
        // Negative values print as their two's complement bit pattern.
        DemoValue::Int(n) => Ok(*n as u64),
        DemoValue::UInt(n) => Ok(*n),
        other => Err(mismatch(conversion, "an integer", other)),
    }
}

fn float_arg(conversion: char, arg: &DemoValue) -> Result<f64> {
    match arg {
        DemoValue::Float(n) => Ok(*n),
        DemoValue::Float32(n) => Ok(f64::from(*n)),
        DemoValue::Int(n) => Ok(*n as f64),
        DemoValue::UInt(n) => Ok(*n as f64),
        other => Err(mismatch(conversion, "a number", other)),
    }
}

fn sign(negative: bool, directive: Directive) -> String {
    if negative {
        "-".into()
    } else if directive.plus {
        "+".into()
    } else if directive.space {
        " ".into()
    } else {
        String::new()
    }
}

fn min_digits(digits: String, precision: Option<usize>) -> String {
    match precision {
        Some(min) if digits.len() < min => format!("{}{digits}", "0".repeat(min - digits.len())),
        _ => digits,
    }
}

fn pad_number(prefix: String, body: String, directive: Directive) -> String {
    let len = prefix.chars().count() + body.chars().count();
    let fill = directive.width.unwrap_or(0).saturating_sub(len);
    if directive.left {
        format!("{prefix}{body}{}", " ".repeat(fill))
    } else if directive.zero {
        format!("{prefix}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{prefix}{body}", " ".repeat(fill))
    }
}

fn pad_text(text: String, directive: Directive) -> String {
    let fill = directive.width.unwrap_or(0).saturating_sub(text.chars().count());
    if directive.left {
        format!("{text}{}", " ".repeat(fill))
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}

fn non_finite(value: f64, upper: bool) -> String {
    let text = if value.is_nan() { "nan" } else { "inf" };
    if upper { text.to_uppercase() } else { text.into() }
}

/// `d.dddde+XX` with at least two exponent digits.
fn scientific(magnitude: f64, precision: usize, upper: bool) -> String {
    let (mantissa, exponent) = split_exponent(magnitude, precision);
    let marker = if upper { 'E' } else { 'e' };
    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}{marker}{exp_sign}{:02}", exponent.unsigned_abs())
}

fn split_exponent(magnitude: f64, precision: usize) -> (String, i32) {
    let rendered = format!("{magnitude:.precision$e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => (mantissa.to_string(), exponent.parse().unwrap_or(0)),
        None => (rendered, 0),
    }
}

fn general(magnitude: f64, precision: usize, upper: bool, keep_zeros: bool) -> String {
    let precision = precision.max(1);
    let (_, exponent) = split_exponent(magnitude, precision - 1);
    let text = if exponent < -4 || exponent >= precision as i32 {
        scientific(magnitude, precision - 1, upper)
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{magnitude:.decimals$}")
    };
    if keep_zeros {
        text
    } else {
        strip_trailing_zeros(&text)
    }
}

fn strip_trailing_zeros(text: &str) -> String {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    if !mantissa.contains('.') {
        return text.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{exponent}")
}

/// Writes `value` with thousands grouping, keeping at most
/// `max_fraction_digits` decimals and dropping trailing zeros.
pub fn group_digits(value: f64, style: NumberStyle, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.max_fraction_digits$}", value.abs());
    let (integral, fraction) = match rendered.split_once('.') {
        Some((integral, fraction)) => (integral, fraction.trim_end_matches('0')),
        None => (rendered.as_str(), ""),
    };

    let mut grouped = String::new();
    for (idx, digit) in integral.chars().enumerate() {
        if idx > 0 && (integral.len() - idx) % 3 == 0 {
            grouped.push(style.grouping);
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push(style.decimal);
        grouped.push_str(fraction);
    }

    let is_zero = integral.bytes().all(|b| b == b'0') && fraction.is_empty();
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}
