use crate::{
    runner::DemoStep,
    script::Script,
    value::{DemoValue, Field},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday = 1,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn raw(self) -> i64 {
        self as i64
    }

    pub fn from_raw(raw: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.raw() == raw)
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Weekday::Monday => "Start of the week",
            Weekday::Friday => "Almost the weekend",
            Weekday::Saturday | Weekday::Sunday => "Weekend",
            _ => "Midweek",
        }
    }
}

impl From<Weekday> for DemoValue {
    fn from(day: Weekday) -> Self {
        DemoValue::variant("Weekday", day.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExamResult {
    Passed { score: f64 },
    Failed,
}

impl ExamResult {
    fn for_score(score: f64) -> Self {
        if score >= 60.0 {
            ExamResult::Passed { score }
        } else {
            ExamResult::Failed
        }
    }

    fn summary(self) -> String {
        match self {
            ExamResult::Passed { score } => format!("passed with {score:?}"),
            ExamResult::Failed => "failed".to_string(),
        }
    }
}

impl From<ExamResult> for DemoValue {
    fn from(result: ExamResult) -> Self {
        match result {
            ExamResult::Passed { score } => DemoValue::variant_with(
                "ExamResult",
                "passed",
                vec![Field::labeled("score", score)],
            ),
            ExamResult::Failed => DemoValue::variant("ExamResult", "failed"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Circle(f64),
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    fn area(self) -> f64 {
        match self {
            Shape::Circle(radius) => std::f64::consts::PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
        }
    }
}

impl From<Shape> for DemoValue {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Circle(radius) => {
                DemoValue::variant_with("Shape", "circle", vec![Field::positional(radius)])
            }
            Shape::Rectangle { width, height } => DemoValue::variant_with(
                "Shape",
                "rectangle",
                vec![Field::labeled("width", width), Field::labeled("height", height)],
            ),
        }
    }
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();

    let today = Weekday::Wednesday;
    script.push("today", today);
    script.push("today's raw value", today.raw());
    script.push("raw value 2", Weekday::from_raw(2));
    script.push("raw value 9", Weekday::from_raw(9));
    script.push("all days", DemoValue::list(Weekday::ALL));
    for day in [Weekday::Monday, Weekday::Wednesday, Weekday::Friday, Weekday::Sunday] {
        script.push(format!("{} message", day.name()), day.message());
    }

    for score in [95.5, 42.0] {
        let result = ExamResult::for_score(score);
        script.push(format!("exam {score:?}"), result);
        script.push(format!("exam {score:?} summary"), result.summary());
    }

    let shapes = [
        Shape::Circle(1.0),
        Shape::Rectangle {
            width: 3.0,
            height: 4.5,
        },
    ];
    script.push("shapes", DemoValue::list(shapes));
    script.push("rectangle area", shapes[1].area());
    script.push(
        "total area above 15",
        shapes.iter().map(|shape| shape.area()).sum::<f64>() > 15.0,
    );

    script.finish()
}
