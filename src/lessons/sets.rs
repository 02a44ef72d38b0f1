use indexmap::IndexSet;

use crate::{runner::DemoStep, script::Script, value::DemoValue};

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    let fruits: IndexSet<&str> = ["Apple", "Orange", "Banana", "Grape", "Apple"].into();
    script.push("fruits (duplicates dropped)", fruits.clone());
    script.push("fruit count", fruits.len());

    let mut numbers: IndexSet<i64> = [1, 2, 3, 4, 5].into();
    script.push("insert 6 (was new)", numbers.insert(6));
    script.push("insert 2 again (was new)", numbers.insert(2));
    script.push("remove 3 (was present)", numbers.shift_remove(&3));
    script.push("remove 10 (was present)", numbers.shift_remove(&10));
    script.push("numbers", numbers.clone());
    script.push("contains 4", numbers.contains(&4));
    script.push("contains 8", numbers.contains(&8));

    let others: IndexSet<i64> = [4, 5, 6, 7, 8].into();
    script.push("union", DemoValue::set(numbers.union(&others).copied()));
    script.push(
        "intersection",
        DemoValue::set(numbers.intersection(&others).copied()),
    );
    script.push("difference", DemoValue::set(numbers.difference(&others).copied()));
    script.push(
        "symmetric difference",
        DemoValue::set(numbers.symmetric_difference(&others).copied()),
    );

    let mut sorted: Vec<i64> = numbers.iter().copied().collect();
    sorted.sort_unstable();
    script.push("sorted members", sorted);

    let small: IndexSet<i64> = [1, 2].into();
    let disjoint: IndexSet<i64> = [9, 10].into();
    script.push("{1, 2} is subset", small.is_subset(&numbers));
    script.push("numbers is superset of {1, 2}", numbers.is_superset(&small));
    script.push("{9, 10} is disjoint", disjoint.is_disjoint(&numbers));

    let active: IndexSet<&str> = ["Alice", "Bob", "Charlie"].into();
    let inactive: IndexSet<&str> = ["David", "Eve", "Alice"].into();
    script.push("all users", DemoValue::set(active.union(&inactive).copied()));
    script.push(
        "active and inactive",
        DemoValue::set(active.intersection(&inactive).copied()),
    );
    script.push(
        "only active",
        DemoValue::set(active.difference(&inactive).copied()),
    );
    script.push(
        "in exactly one group",
        DemoValue::set(active.symmetric_difference(&inactive).copied()),
    );

    script.finish()
}
