use primer::{
    Catalog, DemoValue, Diagnostic, DiagnosticKind, PrimerError,
    convert,
    environment::Scope,
    format::{NumberStyle, group_digits, sprintf},
    numeric::{self, ArithOp, IntKind, Rounding},
};

fn expect_kind(err: PrimerError) -> DiagnosticKind {
    match err {
        PrimerError::Diagnostic(diag) => diag.kind,
        other => panic!("expected diagnostic, found {other}"),
    }
}

fn format_error(template: &str, args: &[DemoValue]) -> String {
    match sprintf(template, args) {
        Ok(text) => panic!("expected format error, received `{text}`"),
        Err(err) => {
            let message = err.message();
            assert_eq!(expect_kind(err), DiagnosticKind::Format);
            message
        }
    }
}

#[test]
fn int_kind_bounds() {
    assert_eq!(IntKind::I8.min(), -128);
    assert_eq!(IntKind::U16.max(), 65_535);
    assert_eq!(IntKind::I64.max(), i128::from(i64::MAX));
    assert_eq!(IntKind::U64.max(), i128::from(u64::MAX));
    assert!(IntKind::U8.contains(255));
    assert!(!IntKind::U8.contains(-1));
    assert_eq!(IntKind::U32.to_string(), "UInt32");
    for kind in IntKind::ALL {
        assert_eq!(kind.max() - kind.min() + 1, 1i128 << kind.bits());
    }
}

#[test]
fn overflowing_reports_wraparound() {
    let result = numeric::overflowing(IntKind::U8, ArithOp::Add, 250, 10).expect("operands fit");
    assert_eq!(result.partial_value, 4);
    assert!(result.overflow);

    let result = numeric::overflowing(IntKind::I16, ArithOp::Mul, 100, 100).expect("operands fit");
    assert_eq!(result.partial_value, 10_000);
    assert!(!result.overflow);
}

#[test]
fn overflow_policies() {
    assert_eq!(
        numeric::wrapping(IntKind::I8, ArithOp::Add, 127, 1).expect("fits"),
        -128
    );
    assert_eq!(
        numeric::checked(IntKind::I8, ArithOp::Add, 127, 1).expect("fits"),
        None
    );
    assert_eq!(
        numeric::checked(IntKind::I8, ArithOp::Add, 100, 1).expect("fits"),
        Some(101)
    );
    assert_eq!(
        numeric::saturating(IntKind::I8, ArithOp::Add, 127, 1).expect("fits"),
        127
    );
    assert_eq!(
        numeric::saturating(IntKind::I8, ArithOp::Mul, -100, 2).expect("fits"),
        -128
    );
    assert_eq!(
        numeric::saturating(IntKind::U8, ArithOp::Sub, 3, 5).expect("fits"),
        0
    );
    assert_eq!(
        numeric::saturating(IntKind::I32, ArithOp::Div, i128::from(i32::MIN), -1).expect("fits"),
        i128::from(i32::MAX)
    );
}

#[test]
fn arithmetic_errors_are_diagnostics() {
    let err = numeric::wrapping(IntKind::U8, ArithOp::Rem, 9, 0).expect_err("zero divisor");
    assert_eq!(expect_kind(err), DiagnosticKind::Arithmetic);

    let err = numeric::wrapping(IntKind::U8, ArithOp::Add, -1, 1).expect_err("negative UInt8");
    assert_eq!(err.message(), "-1 does not fit in UInt8");
    assert_eq!(expect_kind(err), DiagnosticKind::Conversion);
}

#[test]
fn rounding_rules() {
    assert_eq!(numeric::round(2.5, Rounding::ToNearestOrAwayFromZero), 3.0);
    assert_eq!(numeric::round(2.5, Rounding::ToNearestOrEven), 2.0);
    assert_eq!(numeric::round(-2.5, Rounding::Up), -2.0);
    assert_eq!(numeric::round(-2.5, Rounding::Down), -3.0);
    assert_eq!(numeric::round(-2.5, Rounding::TowardZero), -2.0);
    assert_eq!(numeric::round_f32(7.65, Rounding::Down), 7.0);
}

#[test]
fn conversions_yield_none_on_failure() {
    assert_eq!(convert::parse_int("-17"), Some(-17));
    assert_eq!(convert::parse_int("4.5"), None);
    assert_eq!(convert::parse_float("2.5"), Some(2.5));
    assert_eq!(convert::parse_float(""), None);
    assert_eq!(convert::truncate_to_int(9.99), Some(9));
    assert_eq!(convert::truncate_to_int(f64::NAN), None);
    assert_eq!(convert::truncate_to_int(1e19), None);
    assert_eq!(convert::to_unsigned(7), Some(7));
    assert_eq!(convert::to_unsigned(-7), None);
}

#[test]
fn localized_parsing_checks_groups() {
    let spanish = NumberStyle::spanish();
    assert_eq!(convert::parse_localized("1.234,5", spanish), Some(1234.5));
    assert_eq!(convert::parse_localized("-12,25", spanish), Some(-12.25));
    assert_eq!(convert::parse_localized("1.23,5", spanish), None);
    assert_eq!(convert::parse_localized("1234", NumberStyle::english()), Some(1234.0));
    assert_eq!(convert::parse_localized("1,2a4", NumberStyle::english()), None);
    assert_eq!(convert::parse_localized("", NumberStyle::english()), None);
}

#[test]
fn sprintf_conversions() {
    let render = |template: &str, args: &[DemoValue]| sprintf(template, args).expect("formats");
    assert_eq!(render("%d%%", &[DemoValue::from(50)]), "50%");
    assert_eq!(render("%05d", &[DemoValue::from(-42)]), "-0042");
    assert_eq!(render("% d", &[DemoValue::from(7)]), " 7");
    assert_eq!(render("%.3d", &[DemoValue::from(7)]), "007");
    assert_eq!(render("%u", &[DemoValue::from(300_u32)]), "300");
    assert_eq!(render("%X", &[DemoValue::from(48_879)]), "BEEF");
    assert_eq!(render("%#o", &[DemoValue::from(8)]), "010");
    assert_eq!(render("%.2f", &[DemoValue::from(1.5_f32)]), "1.50");
    assert_eq!(render("%E", &[DemoValue::from(0.00042)]), "4.200000E-04");
    assert_eq!(render("%g", &[DemoValue::from(1e10)]), "1e+10");
    assert_eq!(render("%g", &[DemoValue::from(2.5)]), "2.5");
    assert_eq!(render("%f", &[DemoValue::from(f64::INFINITY)]), "inf");
    assert_eq!(render("%-6s|", &[DemoValue::from("ab")]), "ab    |");
    assert_eq!(render("%6.2s|", &[DemoValue::from("abcdef")]), "    ab|");
    assert_eq!(render("%@", &[DemoValue::from(vec![1, 2])]), "[1, 2]");
}

#[test]
fn sprintf_errors() {
    assert_eq!(
        format_error("%d", &[DemoValue::from(1.5)]),
        "`%d` expects an integer but found Float"
    );
    assert_eq!(
        format_error("%s and %s", &[DemoValue::from("one")]),
        "missing argument for `%s` (only 1 supplied)"
    );
    assert_eq!(
        format_error("100%", &[]),
        "dangling `%` at the end of the template"
    );
    assert_eq!(
        format_error("%d", &[DemoValue::from(1), DemoValue::from(2)]),
        "1 argument(s) left unused"
    );
    assert_eq!(
        format_error("%c", &[DemoValue::from(-1)]),
        "-1 is not a character code"
    );
}

#[test]
fn digit_grouping() {
    let english = NumberStyle::english();
    assert_eq!(group_digits(0.0, english, 2), "0");
    assert_eq!(group_digits(999.0, english, 2), "999");
    assert_eq!(group_digits(1000.5, english, 2), "1,000.5");
    assert_eq!(group_digits(-0.001, english, 2), "0");
    assert_eq!(group_digits(123_456.789, NumberStyle::spanish(), 1), "123.456,8");
}

#[test]
fn scopes_enforce_constants() {
    let scope = Scope::new();
    scope.borrow_mut().define_constant("limit", 10);
    scope.borrow_mut().define_variable("count", 0);

    Scope::assign(&scope, "count", 1).expect("variables are reassignable");
    assert_eq!(Scope::get(&scope, "count").expect("defined"), DemoValue::Int(1));

    let err = Scope::assign(&scope, "limit", 11).expect_err("constants are fixed");
    assert_eq!(err.message(), "cannot assign to constant `limit`");
    assert_eq!(expect_kind(err), DiagnosticKind::Binding);
    assert_eq!(Scope::get(&scope, "limit").expect("defined"), DemoValue::Int(10));
}

#[test]
fn child_scopes_shadow_and_delegate() {
    let outer = Scope::new();
    outer.borrow_mut().define_variable("total", 1);
    let inner = Scope::child(&outer);
    inner.borrow_mut().define_constant("label", "inner");

    Scope::assign(&inner, "total", 2).expect("assignment reaches the parent");
    assert_eq!(Scope::get(&outer, "total").expect("defined"), DemoValue::Int(2));
    assert_eq!(inner.borrow().names(), vec!["label".to_string()]);

    let err = Scope::get(&outer, "label").expect_err("parents do not see children");
    assert_eq!(err.message(), "undefined name `label`");
    assert!(Scope::assign(&outer, "missing", 0).is_err());
}

#[test]
fn unknown_lesson_lists_alternatives() {
    let catalog = Catalog::standard();
    let err = catalog.get("quantum").expect_err("no such lesson");
    let rendered = err.to_string();
    assert!(rendered.contains("unknown lesson `quantum`"));
    assert!(rendered.contains("available lessons: variables, integers"));
    assert_eq!(expect_kind(err), DiagnosticKind::Catalog);

    let picked = catalog
        .select(&["sets".to_string(), "arrays".to_string()])
        .expect("both exist");
    let ids: Vec<_> = picked.iter().map(|lesson| lesson.id).collect();
    assert_eq!(ids, ["sets", "arrays"]);
    assert_eq!(catalog.select(&[]).expect("empty selects all").len(), catalog.len());
}

#[test]
fn diagnostics_render_on_one_line() {
    let diag = Diagnostic::new(DiagnosticKind::Format, "1 argument(s) left unused")
        .with_note("template: %d")
        .with_note("remove the extra argument");
    assert_eq!(
        diag.to_string(),
        "format error: 1 argument(s) left unused (template: %d; remove the extra argument)"
    );
    assert_eq!(
        PrimerError::diagnostic(DiagnosticKind::Binding, "undefined name `x`").to_string(),
        "binding error: undefined name `x`"
    );
}

#[test]
fn lookups_walk_several_scopes() {
    let global = Scope::new();
    global.borrow_mut().define_constant("origin", "global");
    let middle = Scope::child(&global);
    let inner = Scope::child(&middle);

    assert_eq!(
        Scope::get(&inner, "origin").expect("defined"),
        DemoValue::from("global")
    );
    let err = Scope::assign(&inner, "origin", "inner").expect_err("outer constant");
    assert_eq!(err.message(), "cannot assign to constant `origin`");
    let err = Scope::get(&inner, "nowhere").expect_err("undefined");
    assert_eq!(expect_kind(err), DiagnosticKind::Binding);
}
