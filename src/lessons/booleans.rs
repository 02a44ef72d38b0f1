use indexmap::{IndexMap, IndexSet};

use crate::{runner::DemoStep, script::Script, value::DemoValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderState {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderState {
    fn describe(self) -> &'static str {
        match self {
            OrderState::Pending => "the order is pending",
            OrderState::Processing => "the order is being processed",
            OrderState::Completed => "the order has been completed",
            OrderState::Cancelled => "the order has been cancelled",
        }
    }
}

fn choose(condition: bool, yes: &str, no: &str) -> DemoValue {
    DemoValue::text(if condition { yes } else { no })
}

fn comparisons(script: &mut Script) {
    let current_score = 85;
    let target_score = 100;
    let price: f64 = 29.99;
    let budget: f64 = 30.0;
    let entered_user = "user123";
    let registered_user = "user123";
    let authenticated = true;
    let dark_mode = false;

    script.push("score below target", current_score < target_score);
    script.push(
        "score message",
        choose(
            current_score < target_score,
            "keep going to reach the target",
            "target reached",
        ),
    );
    script.push(
        "price within budget",
        choose(price <= budget, "within budget", "over budget"),
    );
    script.push(
        "user name check",
        choose(
            entered_user == registered_user,
            "welcome back, user123",
            "unknown user name",
        ),
    );
    script.push("access", choose(authenticated, "granted", "denied"));
    script.push("dark mode", choose(dark_mode, "on", "off"));
    script.push("order state", OrderState::Processing.describe());

    let user1 = ("Laura", 30);
    let user2 = ("Laura", 30);
    let user3 = ("Pedro", 28);
    script.push("user1 == user2", user1 == user2);
    script.push("user1 != user3", user1 != user3);
    script.push("tuples compare field by field", user3 > user1);

    let pending = ["Exercise", "Read a book", "Buy groceries"];
    let completed = ["Exercise"];
    script.push("tasks still pending", completed.len() < pending.len());

    let available: IndexSet<&str> = ["Electronics", "Furniture", "Clothing"].into();
    let selected: IndexSet<&str> = ["Clothing", "Electronics"].into();
    script.push(
        "selected categories available",
        available.is_superset(&selected),
    );

    let user_settings: IndexMap<&str, bool> =
        [("notifications", true), ("darkMode", true)].into();
    let default_settings: IndexMap<&str, bool> =
        [("notifications", true), ("darkMode", false)].into();
    script.push("settings changed", user_settings != default_settings);
}

fn logic(script: &mut Script) {
    let sunny = true;
    let free_time = false;
    let weekend = true;
    let has_plans = false;
    let age = 25;
    let student = true;
    let has_permit = false;
    let user_age = 20;
    let member = true;

    script.push("sunny && free time", sunny && free_time);
    script.push("weekend || has plans", weekend || has_plans);
    script.push("!sunny", !sunny);
    script.push(
        "(age > 18 && student) || permit",
        (age > 18 && student) || has_permit,
    );
    script.push("adult member", user_age >= 18 && member);
    script.push("exclusive or", sunny ^ weekend);
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();
    script.push("true", true);
    script.push("false", false);
    for state in [
        OrderState::Pending,
        OrderState::Completed,
        OrderState::Cancelled,
    ] {
        script.push(format!("{state:?}"), state.describe());
    }
    comparisons(&mut script);
    logic(&mut script);
    script.finish()
}
