use crate::format::NumberStyle;

pub fn parse_int(text: &str) -> Option<i64> {
    text.parse().ok()
}

pub fn parse_float(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Parses a number written with `style`'s grouping and decimal separators,
/// e.g. `1.234,5` under the Spanish style. Groups after the first must have
/// exactly three digits.
pub fn parse_localized(text: &str, style: NumberStyle) -> Option<f64> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (integral, fraction) = match body.split_once(style.decimal) {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (body, None),
    };

    let mut digits = String::new();
    for (idx, group) in integral.split(style.grouping).enumerate() {
        let valid_len = if idx == 0 {
            (1..=3).contains(&group.len()) || !integral.contains(style.grouping)
        } else {
            group.len() == 3
        };
        if group.is_empty() || !valid_len || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push('.');
        digits.push_str(fraction);
    }

    let value: f64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Drops the fractional part. `None` when the value is not finite or does
/// not fit in an `i64`.
pub fn truncate_to_int(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    // 2^63 is exactly representable, i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if truncated.is_finite() && truncated >= -LIMIT && truncated < LIMIT {
        Some(truncated as i64)
    } else {
        None
    }
}

pub fn to_unsigned(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}
