use crate::{convert, runner::DemoStep, script::Script, value::DemoValue};

fn greet(first: Option<&str>) -> String {
    if let Some(first) = first {
        format!("first name: {first}")
    } else {
        "the first name is missing".to_string()
    }
}

fn both(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("full name: {first} {last}"),
        _ => "one or both names are missing".to_string(),
    }
}

fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    let Some(first) = first else {
        return "the first name is missing".to_string();
    };
    let Some(last) = last else {
        return "the last name is missing".to_string();
    };
    format!("full name: {first} {last}")
}

fn first_even(numbers: &[i64]) -> Option<i64> {
    numbers.iter().copied().find(|n| n % 2 == 0)
}

pub fn steps() -> Vec<DemoStep> {
    let first_name: Option<&str> = Some("Ana");
    let last_name: Option<&str> = None;
    let fallback: Option<&str> = None;

    Script::new()
        .show("first name", first_name)
        .show("last name", last_name)
        .show("bind first name", greet(first_name))
        .show("bind missing name", greet(last_name))
        .show("bind both", both(first_name, last_name))
        .show("guard present", full_name(Some("Carlos"), Some("García")))
        .show("guard missing first", full_name(None, Some("García")))
        .show("guard missing last", full_name(Some("Carlos"), None))
        .show("default value", fallback.unwrap_or("No Name"))
        .show("chained length", first_name.map(str::len))
        .show("chained length of missing", last_name.map(str::len))
        .show(
            "parsed and doubled",
            convert::parse_int("21").map(|n| n * 2),
        )
        .show(
            "failed parse and doubled",
            convert::parse_int("twenty-one").map(|n| n * 2),
        )
        .show("first even", first_even(&[3, 5, 8, 9]))
        .show("first even of odds", first_even(&[1, 3, 5]))
        .show(
            "filtered",
            Some(17_i64).filter(|n| *n > 18).map(DemoValue::from),
        )
        .show("is some", first_name.is_some())
        .show("is none", last_name.is_none())
        .finish()
}
