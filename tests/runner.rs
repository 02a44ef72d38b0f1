use indexmap::IndexSet;
use primer::{
    Catalog, DemoStep, DemoValue, DiagnosticKind, Lesson, PrimerError, RunConfig, Runner, Script,
    convert,
    runner::{render_step, render_steps},
    value::Field,
};

fn capture(steps: &[DemoStep]) -> String {
    let mut runner = Runner::new(Vec::new(), RunConfig::default());
    runner.run_steps(steps).expect("writing to a buffer succeeds");
    String::from_utf8(runner.into_inner()).expect("output is UTF-8")
}

fn rendered(value: impl Into<DemoValue>) -> String {
    value.into().to_string()
}

fn demo_steps() -> Vec<DemoStep> {
    Script::new()
        .show("first", 1)
        .show("second", "two")
        .finish()
}

#[test]
fn step_renders_label_and_value() {
    let step = DemoStep::new("suma", 10 + 5);
    assert_eq!(render_step(&step), "suma: 15");
}

#[test]
fn one_line_per_step() {
    let steps = Script::new()
        .show("a", 1)
        .show("b", true)
        .show("c", 2.5)
        .show("d", DemoValue::Absent)
        .finish();
    let output = capture(&steps);
    assert_eq!(output.lines().count(), steps.len());
    assert_eq!(output, "a: 1\nb: true\nc: 2.5\nd: absent\n");
}

#[test]
fn run_steps_reports_count() {
    let mut runner = Runner::new(Vec::new(), RunConfig::default());
    let written = runner
        .run_steps(&demo_steps())
        .expect("writing to a buffer succeeds");
    assert_eq!(written, 2);
}

#[test]
fn union_keeps_distinct_members() {
    let left: IndexSet<i64> = [1, 2, 3].into();
    let right: IndexSet<i64> = [3, 4, 5].into();
    let union = DemoValue::set(left.union(&right).copied());
    assert_eq!(union.len(), Some(5));

    let line = render_step(&DemoStep::new("union", union));
    for member in ["1", "2", "3", "4", "5"] {
        assert!(line.contains(member), "{line} should list {member}");
    }
    assert_eq!(line.matches('3').count(), 1);
}

#[test]
fn failed_conversion_prints_absent() {
    let step = DemoStep::new("\"abc\" to Int", convert::parse_int("abc"));
    assert!(step.value.is_absent());
    assert!(!DemoValue::from(convert::parse_int("12")).is_absent());
    assert_eq!(render_step(&step), "\"abc\" to Int: absent");
}

#[test]
fn caught_error_prints_message() {
    let err = PrimerError::diagnostic(DiagnosticKind::Arithmetic, "division by zero");
    assert_eq!(rendered(err), "error(division by zero)");

    let parsed: Result<i64, std::num::ParseIntError> = "x".parse();
    let value = DemoValue::caught(parsed);
    assert!(value.is_failure());
    assert_eq!(value.to_string(), "error(invalid digit found in string)");
}

#[test]
fn newlines_are_escaped() {
    let step = DemoStep::new("poem", "roses\nviolets");
    assert_eq!(render_step(&step), "poem: roses\\nviolets");

    let step = DemoStep::new("multi\nline label", 1);
    assert_eq!(render_step(&step), "multi\\nline label: 1");
}

#[test]
fn multi_line_labels_still_write_one_line() {
    let steps = Script::new()
        .show("multi\nline label", 1)
        .show("plain", "two\nlines")
        .finish();
    let mut runner = Runner::new(Vec::new(), RunConfig::default());
    let written = runner.run_steps(&steps).expect("writing to a buffer succeeds");
    let output = String::from_utf8(runner.into_inner()).expect("output is UTF-8");
    assert_eq!(written, steps.len());
    assert_eq!(output.lines().count(), steps.len());
}

#[test]
fn nested_values_quote_text() {
    assert_eq!(rendered(vec!["a", "b"]), r#"["a", "b"]"#);
    assert_eq!(rendered(vec!['x']), "['x']");
    assert_eq!(rendered(DemoValue::map([("x", 1)])), r#"{"x": 1}"#);
    assert_eq!(rendered(("Ana", 30)), r#"("Ana", 30)"#);
    assert_eq!(
        rendered(DemoValue::labeled([("x", 1), ("y", 2)])),
        "(x: 1, y: 2)"
    );
    assert_eq!(rendered(Some(1.0)), "1.0");
    assert_eq!(rendered(None::<i64>), "absent");
}

#[test]
fn variants_render_case_and_payload() {
    assert_eq!(rendered(DemoValue::variant("Weekday", "monday")), "monday");
    let passed = DemoValue::variant_with(
        "ExamResult",
        "passed",
        vec![Field::labeled("score", 95.5)],
    );
    assert_eq!(rendered(passed), "passed(score: 95.5)");
}

#[test]
fn set_equality_ignores_order() {
    assert_eq!(DemoValue::set([1, 2, 3]), DemoValue::set([3, 1, 2]));
    assert_ne!(DemoValue::list([1, 2, 3]), DemoValue::list([3, 1, 2]));

    let mut outer = IndexSet::new();
    outer.insert(DemoValue::set([1, 2]));
    assert!(outer.contains(&DemoValue::set([2, 1])));
}

#[test]
fn headers_follow_config() {
    let lesson = Lesson::new("demo", "Demo lesson", demo_steps);

    let mut runner = Runner::new(Vec::new(), RunConfig::default());
    runner.run_lesson(&lesson).expect("run lesson");
    let output = String::from_utf8(runner.into_inner()).expect("output is UTF-8");
    assert_eq!(output, "first: 1\nsecond: two\n");

    let mut runner = Runner::new(Vec::new(), RunConfig::with_headers());
    runner.run_lesson(&lesson).expect("run lesson");
    let output = String::from_utf8(runner.into_inner()).expect("output is UTF-8");
    assert_eq!(output, "== Demo lesson ==\nfirst: 1\nsecond: two\n");
}

#[test]
fn default_lesson_output_has_one_line_per_step() {
    let catalog = Catalog::standard();
    for lesson in catalog.iter() {
        let mut runner = Runner::new(Vec::new(), RunConfig::default());
        let written = runner.run_lesson(lesson).expect("run lesson");
        let output = String::from_utf8(runner.into_inner()).expect("output is UTF-8");
        assert_eq!(written, lesson.steps().len());
        assert_eq!(output.lines().count(), written, "lesson `{}`", lesson.id);
    }
}

#[test]
fn catalog_output_is_deterministic() {
    let catalog = Catalog::standard();
    let run = || {
        let mut runner = Runner::new(Vec::new(), RunConfig::with_headers());
        runner.run_lessons(catalog.iter()).expect("run all lessons");
        runner.into_inner()
    };
    assert_eq!(run(), run());
}

#[test]
fn render_steps_matches_runner_output() {
    let steps = demo_steps();
    let expected: String = render_steps(&steps)
        .into_iter()
        .map(|line| line + "\n")
        .collect();
    assert_eq!(capture(&steps), expected);
}

#[test]
fn script_extends_in_order() {
    let script = Script::new().show("zero", 0).extend(demo_steps());
    assert_eq!(script.len(), 3);
    assert!(!script.is_empty());
    let labels: Vec<_> = script.finish().into_iter().map(|step| step.label).collect();
    assert_eq!(labels, ["zero", "first", "second"]);

    let runner = Runner::new(Vec::new(), RunConfig::default());
    assert!(!runner.config().headers);
}
