use std::f64::consts::PI;

use crate::{
    convert,
    format::NumberStyle,
    numeric::{self, Rounding},
    runner::DemoStep,
    script::Script,
};

const ROUNDINGS: [(&str, Rounding); 5] = [
    ("to nearest, ties away from zero", Rounding::ToNearestOrAwayFromZero),
    ("to nearest, ties to even", Rounding::ToNearestOrEven),
    ("up", Rounding::Up),
    ("down", Rounding::Down),
    ("toward zero", Rounding::TowardZero),
];

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    let distance: f64 = 150.0;
    let hours: f64 = 2.5;
    script.push("average speed (km/h)", distance / hours);
    script.push("circle area with radius 5.0", PI * 5.0_f64.powi(2));

    let integer: i32 = 42;
    let single: f32 = 3.75;
    let double: f64 = 42.99;
    script.push("Int to Float", integer as f32);
    script.push("Int to Double", f64::from(integer));
    script.push("Float to Int", convert::truncate_to_int(f64::from(single)));
    script.push("Double to Int", convert::truncate_to_int(double));
    script.push("negative Double to Int", convert::truncate_to_int(-42.99));
    script.push("infinity to Int", convert::truncate_to_int(f64::INFINITY));
    script.push("1e20 to Int", convert::truncate_to_int(1e20));

    script.push("\"123\" to Int", convert::parse_int("123"));
    script.push("\"abc\" to Int", convert::parse_int("abc"));
    script.push("\"123.45\" to Double", convert::parse_float("123.45"));
    script.push("\"ABC\" to Double", convert::parse_float("ABC"));
    script.push("\" 7\" to Int", convert::parse_int(" 7"));
    script.push(
        "\"123,45\" read as Spanish",
        convert::parse_localized("123,45", NumberStyle::spanish()),
    );
    script.push(
        "\"1.234.567,89\" read as Spanish",
        convert::parse_localized("1.234.567,89", NumberStyle::spanish()),
    );
    script.push(
        "\"1,234.5\" read as English",
        convert::parse_localized("1,234.5", NumberStyle::english()),
    );
    script.push(
        "\"12,34\" read as English",
        convert::parse_localized("12,34", NumberStyle::english()),
    );

    let price: f32 = 7.65;
    for (name, rule) in ROUNDINGS {
        script.push(format!("7.65 rounded {name}"), numeric::round_f32(price, rule));
    }
    for (name, rule) in ROUNDINGS {
        script.push(format!("2.5 rounded {name}"), numeric::round(2.5, rule));
    }
    script.push(
        "-2.5 rounded to nearest",
        numeric::round(-2.5, Rounding::ToNearestOrAwayFromZero),
    );

    let total_sales: f64 = 1500.0;
    let discount: f64 = 0.1;
    script.push("sales after 10% discount", total_sales * (1.0 - discount));
    script.push("items in inventory", 100);
    script.push("date of birth", "1995-06-15");

    script.finish()
}
