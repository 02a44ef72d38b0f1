use primer::{Catalog, runner::render_steps};

fn lines(id: &str) -> Vec<String> {
    let catalog = Catalog::standard();
    let lesson = catalog.get(id).expect("lesson exists");
    render_steps(&lesson.steps())
}

fn line(id: &str, label: &str) -> String {
    let prefix = format!("{label}: ");
    lines(id)
        .into_iter()
        .find(|line| line.starts_with(&prefix))
        .unwrap_or_else(|| panic!("lesson `{id}` has no step labelled `{label}`"))
}

fn value(id: &str, label: &str) -> String {
    let full = line(id, label);
    full[label.len() + 2..].to_string()
}

#[test]
fn every_lesson_has_steps() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), 17);
    for lesson in catalog.iter() {
        let rendered = render_steps(&lesson.steps());
        assert!(!rendered.is_empty(), "lesson `{}` is empty", lesson.id);
        for line in &rendered {
            assert!(!line.contains('\n'), "multi-line output in {}", lesson.id);
            assert!(line.contains(": "), "unlabelled line `{line}`");
        }
    }
}

#[test]
fn lessons_are_listed_in_teaching_order() {
    let ids = Catalog::standard().ids();
    assert_eq!(ids.first(), Some(&"variables"));
    assert_eq!(ids.last(), Some(&"classes"));
    assert!(ids.contains(&"control-flow"));
}

#[test]
fn variables_lesson() {
    assert_eq!(value("variables", "speed of light (m/s)"), "299792458.0");
    assert_eq!(value("variables", "variable reassigned to 30.0"), "30.0");
    assert_eq!(
        value("variables", "constant reassigned"),
        "error(cannot assign to constant `speedOfLight`)"
    );
    assert_eq!(value("variables", "shadowed in inner scope"), "-5.0");
    assert_eq!(value("variables", "outer scope after shadowing"), "30.0");
    assert_eq!(
        value("variables", "undefined name"),
        "error(undefined name `distanceTravelled`)"
    );
}

#[test]
fn integers_lesson() {
    assert_eq!(line("integers", "sum"), "sum: 15");
    assert_eq!(value("integers", "Int8 min and max"), "(-128, 127)");
    assert_eq!(value("integers", "UInt8 min and max"), "(0, 255)");
    assert_eq!(value("integers", "Int -1 as UInt"), "absent");
    assert_eq!(
        value("integers", "Int.max + 1 reporting overflow"),
        "(partialValue: -9223372036854775808, overflow: true)"
    );
    assert_eq!(value("integers", "UInt8 200 &+ 100"), "44");
    assert_eq!(value("integers", "UInt8 200 &* 100"), "32");
    assert_eq!(value("integers", "pixel 255 &+ 10"), "9");
    assert_eq!(value("integers", "pixel 255 + 10 saturating"), "255");
    assert_eq!(value("integers", "pixel 255 + 10 checked"), "absent");
    assert_eq!(value("integers", "Int8 -128 - 1 saturating"), "-128");
    assert_eq!(
        value("integers", "UInt8 7 / 0"),
        "error(division by zero in 7 / 0)"
    );
    assert_eq!(
        value("integers", "Int8 300 &+ 1"),
        "error(300 does not fit in Int8)"
    );
}

#[test]
fn conversions_lesson() {
    assert_eq!(value("conversions", "\"123\" to Int"), "123");
    assert_eq!(value("conversions", "\"abc\" to Int"), "absent");
    assert_eq!(value("conversions", "\" 7\" to Int"), "absent");
    assert_eq!(value("conversions", "infinity to Int"), "absent");
    assert_eq!(value("conversions", "negative Double to Int"), "-42");
    assert_eq!(
        value("conversions", "\"1.234.567,89\" read as Spanish"),
        "1234567.89"
    );
    assert_eq!(value("conversions", "\"12,34\" read as English"), "absent");
    assert_eq!(value("conversions", "7.65 rounded up"), "8.0");
    assert_eq!(
        value("conversions", "2.5 rounded to nearest, ties to even"),
        "2.0"
    );
    assert_eq!(
        value("conversions", "2.5 rounded to nearest, ties away from zero"),
        "3.0"
    );
    assert_eq!(value("conversions", "-2.5 rounded to nearest"), "-3.0");
}

#[test]
fn formatting_lesson() {
    assert_eq!(value("formatting", "%5d"), "[   42]");
    assert_eq!(value("formatting", "%-5d"), "[42   ]");
    assert_eq!(value("formatting", "%.2f"), "Decimal with %.2f: 3.14");
    assert_eq!(value("formatting", "%08.3f"), "-003.142");
    assert_eq!(value("formatting", "%#x"), "0xff");
    assert_eq!(value("formatting", "%e"), "Scientific with %e: 1.234568e+05");
    assert_eq!(value("formatting", "%g"), "Compact with %g: 123457");
    assert_eq!(value("formatting", "%g small"), "0.0001");
    assert_eq!(value("formatting", "%c"), "ok");
    assert_eq!(value("formatting", "grouped (English)"), "1,234,567.89");
    assert_eq!(value("formatting", "grouped (Spanish)"), "1.234.567,89");
    assert_eq!(value("formatting", "grouped negative"), "-1,000,000");
    assert_eq!(
        value("formatting", "wrong argument kind"),
        "error(`%d` expects an integer but found Text)"
    );
    assert_eq!(
        value("formatting", "unknown conversion"),
        "error(unknown conversion `%q`)"
    );
}

#[test]
fn errors_lesson() {
    assert_eq!(
        value("errors", "read notes.txt"),
        "contents of notes.txt"
    );
    assert_eq!(
        value("errors", "read empty name"),
        "error(file not found, check the name)"
    );
    assert_eq!(
        value("errors", "read image.png"),
        "error(unreadable: invalid format)"
    );
    assert_eq!(
        value("errors", "process notes.txt"),
        "processed contents of notes.txt"
    );
    assert_eq!(value("errors", "process empty name"), "error(file not found)");
    assert_eq!(value("errors", "ignored error"), "absent");
    assert_eq!(
        value("errors", "age 130 precondition"),
        "error(age 130 is outside 0...120)"
    );
    assert_eq!(value("errors", "index 7"), "absent");
}

#[test]
fn collection_lessons() {
    assert_eq!(value("arrays", "fruit at 10"), "absent");
    assert_eq!(
        value("arrays", "after inserting Mango at 1"),
        r#"["Apple", "Mango", "Blueberry", "Cherry", "Date"]"#
    );
    assert_eq!(value("arrays", "popped"), "Date");
    assert_eq!(value("arrays", "numbers sorted"), "[1, 2, 3, 4, 5]");

    assert_eq!(
        value("sets", "fruits (duplicates dropped)"),
        r#"{"Apple", "Orange", "Banana", "Grape"}"#
    );
    assert_eq!(value("sets", "insert 2 again (was new)"), "false");
    assert_eq!(value("sets", "intersection"), "{4, 5, 6}");
    assert_eq!(value("sets", "{9, 10} is disjoint"), "true");

    assert_eq!(value("dictionaries", "Zoe"), "absent");
    assert_eq!(value("dictionaries", "update Bob (old value)"), "25");
    assert_eq!(value("dictionaries", "add Dana (old value)"), "absent");
    assert_eq!(value("dictionaries", "average grade"), "85.5");
    assert_eq!(value("dictionaries", "names joined"), "Alice, Bob, Charlie");
}

#[test]
fn control_flow_lesson() {
    assert_eq!(value("control-flow", "day 7"), "Weekend");
    assert_eq!(value("control-flow", "score 105"), "Invalid score");
    assert_eq!(
        value("control-flow", "yellow light at 2s"),
        "Stop, the light is about to turn red"
    );
    assert_eq!(value("control-flow", "season of Smarch"), "Unknown month");
    assert_eq!(value("control-flow", "for-loop sum of 1...10"), "55");
    assert_eq!(value("control-flow", "repeat up to 0"), "[1]");
    assert_eq!(value("control-flow", "sum skipping multiples of 3"), "37");
    assert_eq!(
        value("control-flow", "first parsable input"),
        "(attempt: 2, value: 42)"
    );
}

#[test]
fn functions_and_enums_lessons() {
    assert_eq!(value("functions", "default greeting"), "Hello, Luis!");
    assert_eq!(value("functions", "min and max of nothing"), "absent");
    assert_eq!(value("functions", "counter calls"), "[1, 2, 3]");
    assert_eq!(value("functions", "fresh counter starts over"), "1");
    assert_eq!(value("functions", "make_adder(10)(5)"), "15");

    assert_eq!(value("enums", "today"), "wednesday");
    assert_eq!(value("enums", "raw value 2"), "monday");
    assert_eq!(value("enums", "raw value 9"), "absent");
    assert_eq!(value("enums", "exam 95.5"), "passed(score: 95.5)");
    assert_eq!(value("enums", "exam 42.0"), "failed");
}

#[test]
fn classes_lesson() {
    assert_eq!(
        value("classes", "student introduces"),
        "Hi, I am Luis and I study at City College"
    );
    assert_eq!(value("classes", "Mustang is classic"), "true");
    assert_eq!(value("classes", "original point"), "(1, 2)");
    assert_eq!(value("classes", "shared radius"), "2.5");
    assert_eq!(value("classes", "profile with default age"), r#"("Marta", 30)"#);
    assert_eq!(value("classes", "product with negative price"), "absent");
    assert_eq!(
        value("classes", "observer log"),
        r#"["will set 0 to 5", "did set 0 to 5", "will set 5 to 8", "did set 5 to 8"]"#
    );
    assert_eq!(value("classes", "cars built"), "2");
    assert_eq!(
        value("classes", "identified"),
        r#"["dog named Rex", "cat with 9 lives"]"#
    );
}
