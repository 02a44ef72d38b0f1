use indexmap::IndexSet;

use crate::{runner::DemoStep, script::Script, value::DemoValue};

fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

fn compare(a: &str, b: &str) -> String {
    if a < b {
        format!("'{a}' sorts before '{b}'")
    } else {
        format!("'{a}' sorts after or equal to '{b}'")
    }
}

fn literals(script: &mut Script) {
    let greeting = "¡Hola, mundo!";
    let name = "Matías";
    let multiline = "Roses are red,\nviolets are blue.";
    let age = 30;

    script.push("greeting", greeting);
    script.push("concatenated", greeting.to_string() + " My name is " + name);
    script.push("interpolated", format!("{greeting} My name is {name}"));
    script.push("formatted", format!("I am {age} years old"));
    script.push("multiline literal", multiline);
    script.push("multiline line count", multiline.lines().count());
    script.push("emoji literal", '🙂');

    let mut mutable = String::from("Hello");
    mutable.push_str(", world!");
    script.push("after push_str", mutable);

    let words = ["Rust", "is", "a", "capable", "language"];
    let sentence = words
        .iter()
        .fold(String::new(), |acc, word| acc + " " + *word)
        .trim()
        .to_string();
    script.push("folded into a sentence", sentence);
    script.push("joined with '-'", words.join("-"));
}

fn case_and_whitespace(script: &mut Script) {
    let padded = "  rust is a programming language  ";
    script.push("trimmed", format!("'{}'", padded.trim()));
    script.push("trimmed start", format!("'{}'", padded.trim_start()));
    script.push("uppercased", padded.trim().to_uppercase());
    script.push("lowercased", "RUST ES INCREÍBLE".to_lowercase());
}

fn counting(script: &mut Script) {
    let text = "Rust is a modern and capable programming language.";
    let unique: IndexSet<char> = text.chars().collect();

    script.push("total characters", text.chars().count());
    script.push(
        "characters excluding whitespace",
        text.chars().filter(|ch| !ch.is_whitespace()).count(),
    );
    script.push(
        "occurrences of 'a'",
        text.chars().filter(|ch| *ch == 'a').count(),
    );
    script.push("word count", text.split_whitespace().count());
    script.push("unique characters", unique.len());
    script.push("characters with emoji", "Rust is fun 🥳🎉".chars().count());
    script.push("bytes with emoji", "Rust is fun 🥳🎉".len());
}

fn indexing(script: &mut Script) {
    let text = "Rust is powerful and flexible.";

    script.push("first character", text.chars().next());
    script.push("last character", text.chars().next_back());
    script.push("seventh character", text.chars().nth(6));
    script.push("character before the seventh", text.chars().nth(5));
    script.push("hundredth character", text.chars().nth(99));
    script.push(
        "up to the seventh character",
        text.chars().take(7).collect::<String>(),
    );
    script.push("has prefix 'Rust'", text.starts_with("Rust"));
    script.push("has suffix 'flexible.'", text.ends_with("flexible."));
    script.push("contains 'powerful'", text.contains("powerful"));
    script.push("position of 'powerful'", text.find("powerful"));
    script.push("replaced", text.replace("powerful", "remarkable"));
    script.push("reversed", text.chars().rev().collect::<String>());

    let words: Vec<&str> = text.split(' ').collect();
    script.push("words", DemoValue::list(words.iter().copied()));
    script.push("words joined", words.join(" "));
}

pub fn steps() -> Vec<DemoStep> {
    let mut script = Script::new();
    literals(&mut script);
    case_and_whitespace(&mut script);
    counting(&mut script);
    indexing(&mut script);
    script.push("compare 'apple' and 'banana'", compare("apple", "banana"));
    script.push("compare 'pear' and 'banana'", compare("pear", "banana"));
    script.push("full name", full_name("Juan", "Pérez"));
    script.finish()
}
