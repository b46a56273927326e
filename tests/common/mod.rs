#![allow(dead_code)]

use std::{
    any::Any,
    cell::Cell,
    panic::{catch_unwind, AssertUnwindSafe},
};

/// Counts how many times a closure was called
#[derive(Debug, Default)]
pub struct Counter(Cell<usize>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// Run f and return its panic message, or fail if it did not panic
pub fn panic_message<R: std::fmt::Debug>(f: impl FnOnce() -> R) -> String {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => panic!("Expected panic, got value: {value:?}"),
        Err(payload) => payload_to_string(payload),
    }
}

fn payload_to_string(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => message.to_string(),
            Err(_) => panic!("Panic payload is not a string"),
        },
    }
}
