use crate::{runner::DemoStep, script::Script, value::DemoValue};

fn day_name(day: i64) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 | 7 => "Weekend",
        _ => "Invalid day",
    }
}

fn grade(score: i64) -> &'static str {
    match score {
        90..=100 => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        0..=59 => "F",
        _ => "Invalid score",
    }
}

fn traffic_light(color: &str, seconds: u32) -> &'static str {
    match (color, seconds) {
        ("red", _) => "Stop",
        ("yellow", s) if s < 3 => "Stop, the light is about to turn red",
        ("yellow", _) => "Caution",
        ("green", _) => "Go",
        _ => "Unknown color",
    }
}

fn season(month: &str) -> &'static str {
    match month {
        "December" | "January" | "February" => "Winter",
        "March" | "April" | "May" => "Spring",
        "June" | "July" | "August" => "Summer",
        "September" | "October" | "November" => "Autumn",
        _ => "Unknown month",
    }
}

fn temperature_advice(celsius: f64) -> &'static str {
    if celsius > 30.0 {
        "It is hot"
    } else if celsius < 10.0 {
        "It is cold"
    } else {
        "The weather is pleasant"
    }
}

/// Runs the body once before checking `limit`.
fn repeat_until(limit: i64) -> Vec<i64> {
    let mut seen = Vec::new();
    let mut counter = 1;
    loop {
        seen.push(counter);
        counter += 1;
        if counter > limit {
            break;
        }
    }
    seen
}

fn first_parsable(inputs: &[&str]) -> Option<(usize, i64)> {
    for (attempt, input) in inputs.iter().enumerate() {
        if let Ok(value) = input.trim().parse::<i64>() {
            return Some((attempt + 1, value));
        }
    }
    None
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    script.push("25.0 degrees", temperature_advice(25.0));
    script.push("35.0 degrees", temperature_advice(35.0));
    script.push("5.0 degrees", temperature_advice(5.0));
    let age = 20;
    script.push("age 20", if age >= 18 { "adult" } else { "minor" });

    for day in [3, 7, 9] {
        script.push(format!("day {day}"), day_name(day));
    }
    for score in [85, 92, 41, 105] {
        script.push(format!("score {score}"), grade(score));
    }
    for (color, seconds) in [("red", 10), ("yellow", 2), ("yellow", 5), ("green", 0), ("blue", 0)]
    {
        script.push(format!("{color} light at {seconds}s"), traffic_light(color, seconds));
    }
    for month in ["January", "July", "October", "Smarch"] {
        script.push(format!("season of {month}"), season(month));
    }

    let mut sum = 0;
    for n in 1..=10 {
        sum += n;
    }
    script.push("for-loop sum of 1...10", sum);
    script.push(
        "even numbers up to 10",
        DemoValue::list((1..=10).filter(|n| n % 2 == 0)),
    );

    let mut countdown = Vec::new();
    let mut remaining = 5;
    while remaining > 0 {
        countdown.push(remaining);
        remaining -= 1;
    }
    script.push("while countdown", countdown);

    script.push("repeat up to 5", repeat_until(5));
    script.push("repeat up to 0", repeat_until(0));

    let mut total = 0;
    for n in 1.. {
        if n % 3 == 0 {
            continue;
        }
        if n > 10 {
            break;
        }
        total += n;
    }
    script.push("sum skipping multiples of 3", total);

    script.push(
        "first parsable input",
        first_parsable(&["abc", " 42 ", "7"]).map(|(attempt, value)| {
            DemoValue::labeled([("attempt", DemoValue::from(attempt)), ("value", value.into())])
        }),
    );
    script.push(
        "nothing parsable",
        first_parsable(&["x", "y"]).map(|(_, value)| value),
    );

    script.finish()
}
