use std::f64::consts::PI;

use crate::{environment::Scope, runner::DemoStep, script::Script, value::DemoValue};

const SPEED_OF_LIGHT: f64 = 299_792_458.0;

fn process_name(name: Option<&str>) -> DemoValue {
    let Some(name) = name else {
        return DemoValue::text("name is missing, nothing to process");
    };
    DemoValue::text(format!("processed {name}"))
}

pub fn steps() -> Vec<DemoStep> {
    let mut temperature: f64 = 20.0;
    let mut age: i64 = 25;
    temperature += 5.0;
    age += 1;

    let inferred_age = 30;
    let inferred_height = 1.75;
    let (x, y) = (10, 20);
    let (a, b) = (5, 15);
    let radius: f64 = 5.0;

    let http_status_code = 404;
    let url_session_timeout = 60.0;

    let scope = Scope::new();
    scope
        .borrow_mut()
        .define_constant("speedOfLight", SPEED_OF_LIGHT);
    scope
        .borrow_mut()
        .define_variable("currentTemperature", 25.0);
    let reassigned_variable = Scope::assign(&scope, "currentTemperature", 30.0)
        .and_then(|()| Scope::get(&scope, "currentTemperature"));
    let reassigned_constant =
        Scope::assign(&scope, "speedOfLight", 0.0).map(|()| DemoValue::text("assigned"));

    let inner = Scope::child(&scope);
    inner
        .borrow_mut()
        .define_constant("currentTemperature", -5.0);

    Script::new()
        .show("speed of light (m/s)", SPEED_OF_LIGHT)
        .show("pi", PI)
        .show("temperature after += 5.0", temperature)
        .show("age after += 1", age)
        .show("inferred integer", inferred_age)
        .show("inferred floating point", inferred_height)
        .show("x and y", (x, y))
        .show("a and b", (a, b))
        .show("circle area with radius 5.0", PI * radius.powi(2))
        .show("HTTP status code", http_status_code)
        .show("URL session timeout (s)", url_session_timeout)
        .show("variable reassigned to 30.0", reassigned_variable)
        .show("constant reassigned", reassigned_constant)
        .show(
            "shadowed in inner scope",
            Scope::get(&inner, "currentTemperature"),
        )
        .show(
            "outer scope after shadowing",
            Scope::get(&scope, "currentTemperature"),
        )
        .show("undefined name", Scope::get(&scope, "distanceTravelled"))
        .show("process a missing name", process_name(None))
        .show("process a present name", process_name(Some("Matías")))
        .finish()
}
