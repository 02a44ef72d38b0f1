use std::cmp::Ordering;

use crate::{
    convert,
    numeric::{self, ArithOp, IntKind},
    runner::DemoStep,
    script::Script,
    value::DemoValue,
};

const SAMPLES: [(IntKind, i128); 8] = [
    (IntKind::I8, 100),
    (IntKind::I16, 30_000),
    (IntKind::I32, 2_000_000_000),
    (IntKind::I64, 9_000_000_000_000_000_000),
    (IntKind::U8, 200),
    (IntKind::U16, 60_000),
    (IntKind::U32, 4_000_000_000),
    (IntKind::U64, 18_000_000_000_000_000_000),
];

const WRAPPING_OPS: [ArithOp; 3] = [ArithOp::Add, ArithOp::Sub, ArithOp::Mul];

fn rectangle_area(width: i64, height: i64) -> i64 {
    width * height
}

fn compare(a: i64, b: i64) -> String {
    match a.cmp(&b) {
        Ordering::Less => format!("{a} is less than {b}"),
        Ordering::Greater => format!("{a} is greater than {b}"),
        Ordering::Equal => format!("{a} is equal to {b}"),
    }
}

fn wrapping_table(script: &mut Script, kind: IntKind, a: i128, b: i128, divisor: i128) {
    for op in WRAPPING_OPS {
        let value = numeric::wrapping(kind, op, a, b).map(|v| kind.value(v));
        script.push(format!("{kind} {a} &{} {b}", op.symbol()), value);
    }
    for op in [ArithOp::Div, ArithOp::Rem] {
        let value = numeric::wrapping(kind, op, a, divisor).map(|v| kind.value(v));
        script.push(format!("{kind} {a} {} {divisor}", op.symbol()), value);
    }
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    for (kind, sample) in SAMPLES {
        script.push(format!("{kind} sample"), kind.value(sample));
        script.push(
            format!("{kind} min and max"),
            DemoValue::tuple([kind.value(kind.min()), kind.value(kind.max())]),
        );
    }
    script.push("Int min and max", (i64::MIN, i64::MAX));
    script.push("UInt min and max", (u64::MIN, u64::MAX));

    let a: i64 = 10;
    let b: i64 = 5;
    script.push("sum", a + b);
    script.push("difference", a - b);
    script.push("product", a * b);
    script.push("quotient", a / b);
    script.push("remainder", a % b);
    script.push("integer division drops the fraction", 7_i64 / 2);
    script.push("remainder keeps the dividend's sign", -7_i64 % 3);

    script.push("Int 100 as UInt", convert::to_unsigned(100));
    script.push("Int -1 as UInt", convert::to_unsigned(-1));

    let max = i128::from(i64::MAX);
    script.push(
        "Int.max + 1 reporting overflow",
        numeric::overflowing(IntKind::I64, ArithOp::Add, max, 1),
    );
    script.push(
        "Int.max - 1 reporting overflow",
        numeric::overflowing(IntKind::I64, ArithOp::Sub, max, 1),
    );

    wrapping_table(&mut script, IntKind::U8, 200, 100, 10);
    wrapping_table(&mut script, IntKind::I8, -50, 25, 7);
    wrapping_table(&mut script, IntKind::I16, 10_000, 15_000, 500);
    wrapping_table(&mut script, IntKind::I32, 1_000_000, 2_000_000, 300_000);
    wrapping_table(
        &mut script,
        IntKind::I64,
        1_000_000_000_000,
        2_000_000_000_000,
        300_000,
    );

    let screen_width: i32 = 1_920;
    let view_width: i32 = 2_000;
    script.push("view width excess", view_width - screen_width);
    script.push("view width clamped", view_width.min(screen_width));

    let pixel: i128 = 255;
    let increment: i128 = 10;
    script.push(
        "pixel 255 &+ 10",
        numeric::wrapping(IntKind::U8, ArithOp::Add, pixel, increment)
            .map(|v| IntKind::U8.value(v)),
    );
    script.push(
        "pixel 255 + 10 saturating",
        numeric::saturating(IntKind::U8, ArithOp::Add, pixel, increment)
            .map(|v| IntKind::U8.value(v)),
    );
    script.push(
        "pixel 255 + 10 checked",
        numeric::checked(IntKind::U8, ArithOp::Add, pixel, increment)
            .map(|v| v.map(|v| IntKind::U8.value(v))),
    );
    script.push(
        "Int8 -128 - 1 saturating",
        numeric::saturating(IntKind::I8, ArithOp::Sub, -128, 1).map(|v| IntKind::I8.value(v)),
    );
    script.push(
        "Int64 1_000_000_000 * 1_000 checked",
        numeric::checked(IntKind::I64, ArithOp::Mul, 1_000_000_000, 1_000)
            .map(|v| v.map(|v| IntKind::I64.value(v))),
    );
    script.push(
        "UInt8 7 / 0",
        numeric::wrapping(IntKind::U8, ArithOp::Div, 7, 0).map(|v| IntKind::U8.value(v)),
    );
    script.push(
        "Int8 300 &+ 1",
        numeric::wrapping(IntKind::I8, ArithOp::Add, 300, 1).map(|v| IntKind::I8.value(v)),
    );

    script.push("compare 10 and 20", compare(10, 20));
    script.push("compare 20 and 10", compare(20, 10));
    script.push("rectangle area 10 x 5", rectangle_area(10, 5));

    script.finish()
}
