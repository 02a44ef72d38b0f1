use std::f64::consts::PI;

use crate::{
    format::{self, NumberStyle},
    runner::DemoStep,
    script::Script,
    value::DemoValue,
};

fn printf(template: &str, args: &[DemoValue]) -> DemoValue {
    format::sprintf(template, args).into()
}

fn format_decimal(value: f64, precision: usize) -> DemoValue {
    printf(
        &format!("Formatted number: %.{precision}f"),
        &[DemoValue::Float(value)],
    )
}

pub fn steps() -> Vec<DemoStep> {
    let integer = DemoValue::from(42);
    let decimal = DemoValue::Float(PI);
    let hex = DemoValue::from(255);
    let scientific = DemoValue::Float(123_456.789);
    let grouped: f64 = 1_234_567.89;

    Script::new()
        .show("%d", printf("Integer with %%d: %d", &[integer.clone()]))
        .show("%i", printf("Integer with %%i: %i", &[integer.clone()]))
        .show("%5d", printf("[%5d]", &[integer.clone()]))
        .show("%-5d", printf("[%-5d]", &[integer.clone()]))
        .show("%+d", printf("%+d", &[integer.clone()]))
        .show("%f", printf("Decimal with %%f: %f", &[decimal.clone()]))
        .show("%.2f", printf("Decimal with %%.2f: %.2f", &[decimal.clone()]))
        .show("%08.3f", printf("%08.3f", &[DemoValue::Float(-PI)]))
        .show("%@", printf("Name with %%@: %@", &[DemoValue::from("Carlos")]))
        .show("%.3s", printf("%.3s", &[DemoValue::from("Carlos")]))
        .show("%x", printf("Hexadecimal with %%x: %x", &[hex.clone()]))
        .show("%X", printf("Hexadecimal with %%X: %X", &[hex.clone()]))
        .show("%#x", printf("%#x", &[hex.clone()]))
        .show("%o", printf("%o", &[hex]))
        .show("%e", printf("Scientific with %%e: %e", &[scientific.clone()]))
        .show("%g", printf("Compact with %%g: %g", &[scientific]))
        .show("%g small", printf("%g", &[DemoValue::Float(0.0001)]))
        .show("%c", printf("%c%c", &[DemoValue::Char('o'), DemoValue::from(107)]))
        .show(
            "grouped (English)",
            format::group_digits(grouped, NumberStyle::english(), 3),
        )
        .show(
            "grouped (Spanish)",
            format::group_digits(grouped, NumberStyle::spanish(), 3),
        )
        .show(
            "grouped negative",
            format::group_digits(-1_000_000.0, NumberStyle::english(), 2),
        )
        .show("two decimals", format_decimal(PI, 2))
        .show("four decimals", format_decimal(PI, 4))
        .show("wrong argument kind", printf("%d apples", &[DemoValue::from("many")]))
        .show("missing argument", printf("%d and %d", &[integer.clone()]))
        .show(
            "unused argument",
            printf("%.2f", &[decimal.clone(), decimal]),
        )
        .show("unknown conversion", printf("%q", &[integer]))
        .finish()
}
