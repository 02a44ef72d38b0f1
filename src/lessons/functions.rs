use crate::{runner::DemoStep, script::Script, value::DemoValue};

fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

fn greeting(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {name}!", greeting.unwrap_or("Hello"))
}

fn min_max(values: &[i64]) -> Option<(i64, i64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

fn apply(a: i64, b: i64, op: fn(i64, i64) -> i64) -> i64 {
    op(a, b)
}

fn apply_twice(value: i64, f: impl Fn(i64) -> i64) -> i64 {
    f(f(value))
}

fn make_counter() -> impl FnMut() -> i64 {
    let mut count = 0;
    move || {
        count += 1;
        count
    }
}

fn make_adder(amount: i64) -> impl Fn(i64) -> i64 {
    move |value| value + amount
}

fn double_in_place(value: &mut i64) {
    *value *= 2;
}

fn sum_all(values: &[i64]) -> i64 {
    values.iter().sum()
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    script.push("greet", greet("Ana"));
    script.push("add", add(3, 5));
    script.push("default greeting", greeting("Luis", None));
    script.push("custom greeting", greeting("Luis", Some("Good morning")));
    script.push("min and max", min_max(&[8, -3, 12, 5]));
    script.push("min and max of nothing", min_max(&[]));
    script.push("variadic sum", sum_all(&[1, 2, 3, 4]));

    let operation: fn(i64, i64) -> i64 = multiply;
    script.push("function value", operation(4, 6));
    script.push("apply add", apply(10, 2, add));
    script.push("apply multiply", apply(10, 2, multiply));
    script.push("apply closure", apply(10, 2, |a, b| a - b));
    script.push("apply twice", apply_twice(3, |n| n * n));

    let names = ["Pedro", "Ana", "Miguel"];
    let mut sorted = names.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    script.push("sorted descending", sorted);
    script.push(
        "name lengths",
        DemoValue::list(names.iter().map(|name| name.len())),
    );

    let mut counter = make_counter();
    let first = counter();
    let second = counter();
    let third = counter();
    script.push("counter calls", vec![first, second, third]);
    let mut fresh = make_counter();
    script.push("fresh counter starts over", fresh());

    let add_ten = make_adder(10);
    script.push("make_adder(10)(5)", add_ten(5));
    script.push("make_adder(-1)(5)", make_adder(-1)(5));

    let mut score = 21;
    double_in_place(&mut score);
    script.push("doubled in place", score);

    script.finish()
}
