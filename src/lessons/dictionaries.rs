use indexmap::IndexMap;

use crate::{runner::DemoStep, script::Script, value::DemoValue};

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    let mut ages: IndexMap<&str, i64> = [("Alice", 30), ("Bob", 25), ("Charlie", 35)].into();
    script.push("ages", ages.clone());
    script.push(
        "pairs",
        DemoValue::list(ages.iter().map(|(name, age)| format!("{name} is {age}"))),
    );
    script.push("keys", DemoValue::list(ages.keys().copied()));
    script.push("values", DemoValue::list(ages.values().copied()));
    script.push(
        "enumerated",
        DemoValue::list(
            ages.iter()
                .enumerate()
                .map(|(idx, (name, age))| format!("{idx}: {name} ({age})")),
        ),
    );
    script.push(
        "mapped",
        DemoValue::list(
            ages.iter()
                .map(|(name, age)| format!("{name} is {age} years old")),
        ),
    );
    script.push(
        "older than 30",
        DemoValue::map(
            ages.iter()
                .filter(|(_, age)| **age > 30)
                .map(|(name, age)| (*name, *age)),
        ),
    );
    script.push("sum of ages", ages.values().sum::<i64>());
    script.push(
        "names joined",
        ages.keys().fold(String::new(), |acc, name| {
            if acc.is_empty() {
                name.to_string()
            } else {
                format!("{acc}, {name}")
            }
        }),
    );

    script.push("Bob", ages.get("Bob").copied());
    script.push("Zoe", ages.get("Zoe").copied());
    script.push("update Bob (old value)", ages.insert("Bob", 26));
    script.push("add Dana (old value)", ages.insert("Dana", 41));
    script.push("remove Alice", ages.shift_remove("Alice"));
    *ages.entry("Eve").or_insert(0) += 1;
    script.push("after edits", ages.clone());
    ages.sort_keys();
    script.push("sorted by key", ages);

    let grades: IndexMap<&str, f64> = [("Alice", 88.5), ("Bob", 92.0), ("Charlie", 76.0)].into();
    let total: f64 = grades.values().sum();
    script.push("average grade", total / grades.len() as f64);
    script.push(
        "grades above 80",
        DemoValue::map(
            grades
                .iter()
                .filter(|(_, grade)| **grade > 80.0)
                .map(|(name, grade)| (*name, *grade)),
        ),
    );
    script.push(
        "grade messages",
        DemoValue::list(
            grades
                .iter()
                .map(|(name, grade)| format!("{name} has a grade of {grade:?}")),
        ),
    );

    script.finish()
}
