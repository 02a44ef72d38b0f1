use crate::{runner::DemoStep, script::Script, value::DemoValue};

fn membership(range_name: &str, value: i64, inside: bool) -> String {
    let place = if inside { "inside" } else { "outside" };
    format!("{value} is {place} {range_name}")
}

pub fn steps() -> Vec<DemoStep> {
    let closed = 1..=10;
    let half_open = 1..10;
    let from_five = 5..;
    let up_to_five = ..=5;
    let allowed_ages = 18..=65;

    let names = ["Ana", "Pedro", "Luis", "Sofía", "Miguel"];
    let welcome = "Welcome";

    Script::new()
        .show("1...10 contains 5", membership("1...10", 5, closed.contains(&5)))
        .show(
            "1..<10 contains 10",
            membership("1..<10", 10, half_open.contains(&10)),
        )
        .show("5... contains 10", membership("5...", 10, from_five.contains(&10)))
        .show("...5 contains 3", membership("...5", 3, up_to_five.contains(&3)))
        .show("...5 contains 6", membership("...5", 6, up_to_five.contains(&6)))
        .show("iterate 1...5", DemoValue::list(1..=5))
        .show("iterate 1..<5", DemoValue::list(1..5))
        .show("every second of 0...10", DemoValue::list((0..=10).step_by(2)))
        .show("countdown", DemoValue::list((1..=3).rev()))
        .show("closed range length", closed.clone().count())
        .show("age 30 allowed", allowed_ages.contains(&30))
        .show("age 70 allowed", allowed_ages.contains(&70))
        .show("names[1...3]", DemoValue::list(names[1..=3].iter().copied()))
        .show(
            "names[3..<10]",
            names.get(3..10).map(|slice| DemoValue::list(slice.iter().copied())),
        )
        .show("first five letters", welcome.chars().take(5).collect::<String>())
        .show("empty range", (5..5).is_empty())
        .finish()
}
