use crate::{runner::DemoStep, script::Script, value::DemoValue};

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    let mut fruits = vec!["Apple", "Banana", "Cherry"];
    let mut numbers = vec![2, 3, 4, 5, 1];
    script.push("fruits", fruits.clone());
    script.push("numbers", numbers.clone());
    script.push("first fruit", fruits[0]);
    script.push("fruit at 10", fruits.get(10).copied());

    fruits[1] = "Blueberry";
    script.push("after replacing index 1", fruits.clone());
    script.push("count", fruits.len());
    fruits.push("Date");
    script.push("after push", fruits.clone());
    fruits.insert(1, "Mango");
    script.push("after inserting Mango at 1", fruits.clone());
    script.push("popped", fruits.pop());
    script.push("after pop", fruits.clone());
    script.push("contains Cherry", fruits.contains(&"Cherry"));
    script.push("index of Cherry", fruits.iter().position(|f| *f == "Cherry"));

    numbers.sort_unstable();
    script.push("numbers sorted", numbers.clone());
    numbers.reverse();
    script.push("numbers reversed", numbers.clone());
    script.push("largest", numbers.iter().max().copied());
    script.push("sum", numbers.iter().sum::<i32>());

    let mut tasks = vec!["Buy milk", "Go to the gym", "Send email", "Read a book"];
    script.push(
        "tasks with indices",
        DemoValue::list(
            tasks
                .iter()
                .enumerate()
                .map(|(idx, task)| format!("{idx}: {task}")),
        ),
    );
    script.push(
        "uppercased",
        DemoValue::list(tasks.iter().map(|task| task.to_uppercase())),
    );
    script.push(
        "longer than 10 characters",
        DemoValue::list(tasks.iter().copied().filter(|task| task.len() > 10)),
    );
    script.push(
        "containing 'Read'",
        DemoValue::list(tasks.iter().copied().filter(|task| task.contains("Read"))),
    );
    let removed = tasks.remove(0);
    script.push("removed first task", removed);
    script.push("remaining tasks", tasks.clone());
    tasks.clear();
    script.push("after clear is empty", tasks.is_empty());

    let grid = vec![vec![1, 2], vec![3, 4]];
    script.push("nested", grid.clone());
    script.push("flattened", DemoValue::list(grid.into_iter().flatten()));

    script.finish()
}
