use std::{any::Any, cell::RefCell, rc::Rc};

use crate::{runner::DemoStep, script::Script, value::DemoValue};

/// Reference year for age checks, so output never depends on the clock.
const REFERENCE_YEAR: i64 = 2024;

trait Introduce {
    fn name(&self) -> &str;

    fn introduce(&self) -> String {
        format!("Hi, I am {}", self.name())
    }
}

#[derive(Debug, Clone)]
struct Person {
    name: String,
    age: i64,
}

impl Person {
    fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    fn birthday(&mut self) {
        self.age += 1;
    }
}

impl Introduce for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
struct Student {
    person: Person,
    school: String,
}

impl Introduce for Student {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn introduce(&self) -> String {
        format!("{} and I study at {}", self.person.introduce(), self.school)
    }
}

struct MathHelper;

impl MathHelper {
    fn square(value: i64) -> i64 {
        value * value
    }
}

#[derive(Debug, Clone)]
struct Car {
    brand: String,
    model: String,
    year: i64,
}

impl Car {
    fn new(brand: &str, model: &str, year: i64) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            year,
        }
    }

    fn describe(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }
}

trait CarExt {
    fn age_in(&self, year: i64) -> i64;

    fn is_classic(&self) -> bool {
        self.age_in(REFERENCE_YEAR) >= 25
    }
}

impl CarExt for Car {
    fn age_in(&self, year: i64) -> i64 {
        year - self.year
    }
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: i64,
    y: i64,
}

#[derive(Debug)]
struct Circle {
    radius: f64,
}

#[derive(Debug)]
struct Book {
    title: String,
    author: String,
    pages: u32,
}

#[derive(Debug)]
struct Profile {
    name: String,
    age: i64,
}

impl Profile {
    const DEFAULT_AGE: i64 = 30;

    fn new(name: &str, age: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            age: age.unwrap_or(Self::DEFAULT_AGE),
        }
    }
}

#[derive(Debug)]
struct Product {
    name: String,
    price: f64,
}

impl Product {
    fn new(name: &str, price: f64) -> Option<Self> {
        if name.is_empty() || price < 0.0 {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            price,
        })
    }
}

#[derive(Debug)]
struct Vehicle {
    wheels: u32,
}

impl Vehicle {
    fn describe(&self) -> String {
        format!("vehicle with {} wheels", self.wheels)
    }
}

#[derive(Debug)]
struct Automobile {
    vehicle: Vehicle,
    brand: String,
}

impl Automobile {
    fn new(brand: &str) -> Self {
        Self {
            vehicle: Vehicle { wheels: 4 },
            brand: brand.to_string(),
        }
    }

    fn describe(&self) -> String {
        format!("{} {}", self.brand, self.vehicle.describe())
    }
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Records every change made through `set`.
#[derive(Debug, Default)]
struct ObservedCounter {
    value: i64,
    log: Vec<String>,
}

impl ObservedCounter {
    fn set(&mut self, value: i64) {
        self.log.push(format!("will set {} to {value}", self.value));
        let old = self.value;
        self.value = value;
        self.log.push(format!("did set {old} to {}", self.value));
    }
}

#[derive(Debug, Default)]
struct Garage {
    built: usize,
}

impl Garage {
    fn build(&mut self, brand: &str, model: &str, year: i64) -> Car {
        self.built += 1;
        Car::new(brand, model, year)
    }
}

trait Animal {
    fn sound(&self) -> String;
    fn as_any(&self) -> &dyn Any;
}

struct Dog {
    name: String,
}

struct Cat {
    lives: u32,
}

impl Animal for Dog {
    fn sound(&self) -> String {
        format!("{} says woof", self.name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Animal for Cat {
    fn sound(&self) -> String {
        "meow".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn describe_animal(animal: &dyn Animal) -> String {
    if let Some(dog) = animal.as_any().downcast_ref::<Dog>() {
        format!("dog named {}", dog.name)
    } else if let Some(cat) = animal.as_any().downcast_ref::<Cat>() {
        format!("cat with {} lives", cat.lives)
    } else {
        "unknown animal".to_string()
    }
}

fn composition(script: &mut Script) {
    let mut person = Person::new("Ana", 28);
    script.push("person introduces", person.introduce());
    person.birthday();
    script.push("age after birthday", person.age);

    let student = Student {
        person: Person::new("Luis", 20),
        school: "City College".to_string(),
    };
    script.push("student introduces", student.introduce());
    script.push("student name", student.name());
    script.push("MathHelper::square(7)", MathHelper::square(7));
}

fn cars(script: &mut Script) {
    let cars = [
        Car::new("Toyota", "Corolla", 2020),
        Car::new("Ford", "Mustang", 1967),
    ];
    script.push("cars", DemoValue::list(cars.iter().map(Car::describe)));
    script.push("Corolla age", cars[0].age_in(REFERENCE_YEAR));
    script.push("Corolla is classic", cars[0].is_classic());
    script.push("Mustang is classic", cars[1].is_classic());
}

fn semantics(script: &mut Script) {
    let original = Point { x: 1, y: 2 };
    let mut copy = original;
    copy.x = 10;
    script.push("original point", (original.x, original.y));
    script.push("copied point", (copy.x, copy.y));

    let shared = Rc::new(RefCell::new(Circle { radius: 1.0 }));
    let alias = Rc::clone(&shared);
    alias.borrow_mut().radius = 2.5;
    script.push("shared radius", shared.borrow().radius);
    script.push("same instance", Rc::ptr_eq(&shared, &alias));
    script.push("owners", Rc::strong_count(&shared));
}

fn initializers(script: &mut Script) {
    let book = Book {
        title: "Don Quixote".to_string(),
        author: "Cervantes".to_string(),
        pages: 863,
    };
    script.push(
        "book",
        DemoValue::labeled([
            ("title", DemoValue::from(&book.title)),
            ("author", DemoValue::from(&book.author)),
            ("pages", book.pages.into()),
        ]),
    );

    let default_age = Profile::new("Marta", None);
    let explicit = Profile::new("Jorge", Some(45));
    script.push(
        "profile with default age",
        (default_age.name.as_str(), default_age.age),
    );
    script.push("profile with explicit age", (explicit.name.as_str(), explicit.age));

    script.push(
        "valid product",
        Product::new("Laptop", 999.99).map(|p| (p.name, p.price)),
    );
    script.push(
        "product with negative price",
        Product::new("Broken", -1.0).map(|p| (p.name, p.price)),
    );
    script.push(
        "product without name",
        Product::new("", 10.0).map(|p| (p.name, p.price)),
    );

    let automobile = Automobile::new("Seat");
    script.push("automobile", automobile.describe());
}

fn properties(script: &mut Script) {
    let mut rect = Rectangle {
        width: 4.0,
        height: 2.5,
    };
    script.push("computed area", rect.area());
    rect.width = 10.0;
    script.push("area after resize", rect.area());

    let mut counter = ObservedCounter::default();
    counter.set(5);
    counter.set(8);
    script.push("observed value", counter.value);
    script.push("observer log", counter.log);

    let mut garage = Garage::default();
    let built = [
        garage.build("Renault", "Clio", 2015),
        garage.build("Fiat", "500", 1990),
    ];
    script.push("cars built", garage.built);
    script.push("last built", built[1].describe());
}

fn downcasting(script: &mut Script) {
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog {
            name: "Rex".to_string(),
        }),
        Box::new(Cat { lives: 9 }),
    ];
    script.push(
        "sounds",
        DemoValue::list(animals.iter().map(|animal| animal.sound())),
    );
    script.push(
        "identified",
        DemoValue::list(animals.iter().map(|animal| describe_animal(animal.as_ref()))),
    );
    script.push(
        "dogs",
        animals
            .iter()
            .filter(|animal| animal.as_any().is::<Dog>())
            .count(),
    );
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();
    composition(&mut script);
    cars(&mut script);
    semantics(&mut script);
    initializers(&mut script);
    properties(&mut script);
    downcasting(&mut script);
    script.finish()
}
