use thiserror::Error;

use crate::{runner::DemoStep, script::Script, value::DemoValue};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FileError {
    #[error("file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("invalid format")]
    InvalidFormat,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    #[error("connection failed")]
    ConnectionFailed,
    #[error("unexpected response")]
    UnexpectedResponse,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("age {0} is outside 0...120")]
pub struct AgeOutOfRange(i64);

pub fn read_file(name: &str) -> Result<String, FileError> {
    if name.is_empty() {
        return Err(FileError::NotFound);
    }
    if name.starts_with("private/") {
        return Err(FileError::PermissionDenied);
    }
    if !name.ends_with(".txt") {
        return Err(FileError::InvalidFormat);
    }
    Ok(format!("contents of {name}"))
}

pub fn process_file(name: &str) -> Result<String, FileError> {
    let content = read_file(name)?;
    Ok(format!("processed {content}"))
}

fn catch_read(name: &str) -> DemoValue {
    match read_file(name) {
        Ok(content) => DemoValue::text(content),
        Err(FileError::NotFound) => DemoValue::failure("file not found, check the name"),
        Err(FileError::PermissionDenied) => DemoValue::failure("permission denied"),
        Err(err @ FileError::InvalidFormat) => DemoValue::failure(format!("unreadable: {err}")),
    }
}

fn validate_age(age: i64) -> Result<&'static str, FileError> {
    if age < 0 {
        Err(FileError::InvalidFormat)
    } else if age < 18 {
        Ok("age not allowed")
    } else {
        Ok("age allowed")
    }
}

fn checked_age(age: i64) -> Result<i64, AgeOutOfRange> {
    if (0..=120).contains(&age) {
        Ok(age)
    } else {
        Err(AgeOutOfRange(age))
    }
}

fn perform_request(reachable: bool) -> Result<&'static str, NetworkError> {
    if reachable {
        Err(NetworkError::UnexpectedResponse)
    } else {
        Err(NetworkError::ConnectionFailed)
    }
}

pub fn steps() -> Vec<DemoStep> {
    let indices = [0, 1, 2, 3];

    Script::new()
        .show("read notes.txt", catch_read("notes.txt"))
        .show("read empty name", catch_read(""))
        .show("read private/keys.txt", catch_read("private/keys.txt"))
        .show("read image.png", catch_read("image.png"))
        .show("process notes.txt", DemoValue::caught(process_file("notes.txt")))
        .show("process empty name", DemoValue::caught(process_file("")))
        .show("validate age -5", DemoValue::caught(validate_age(-5)))
        .show("validate age 16", DemoValue::caught(validate_age(16)))
        .show("validate age 30", DemoValue::caught(validate_age(30)))
        .show("request offline", DemoValue::caught(perform_request(false)))
        .show("request online", DemoValue::caught(perform_request(true)))
        .show("ignored error", process_file("").ok())
        .show("age 25 precondition", DemoValue::caught(checked_age(25)))
        .show("age 130 precondition", DemoValue::caught(checked_age(130)))
        .show("index 2", indices.get(2).copied())
        .show("index 7", indices.get(7).copied())
        .finish()
}
