use crate::{runner::DemoStep, script::Script, value::DemoValue};

fn coordinates() -> (f64, f64) {
    (37.7749, -122.4194)
}

pub fn steps() -> Vec<DemoStep> {
    let person = ("Juan", 28, 1.75);
    let named = DemoValue::labeled([
        ("name", DemoValue::from("Ana")),
        ("age", DemoValue::from(25)),
        ("height", DemoValue::from(1.65)),
    ]);
    let (latitude, longitude) = coordinates();
    let (name, age, height) = person;

    let mut first = 1;
    let mut second = 2;
    (first, second) = (second, first);

    Script::new()
        .show("person", person)
        .show("person.0", person.0)
        .show("person.1", person.1)
        .show("person.2", person.2)
        .show("named person", named)
        .show(
            "coordinates",
            DemoValue::labeled([("latitude", latitude), ("longitude", longitude)]),
        )
        .show("destructured", format!("{name} is {age} and {height}m tall"))
        .show("swapped", (first, second))
        .show("nested", (person.0, (latitude, longitude)))
        .finish()
}
