//! # Print Observer
//!
//! A diagnostic observer that writes every notification to stdout, tagged with
//! a label and colored by kind: values in green, errors in bright red,
//! completion in cyan.

use std::fmt::Debug;
use std::marker::PhantomData;

use colored::*;

use crate::core::{Notification, Observer, RxError};

/// Prints notifications as they arrive.
pub struct PrintObserver<T> {
    label: String,
    _marker: PhantomData<fn(T)>,
}

impl<T> PrintObserver<T> {
    /// Creates a printer whose lines start with `[label]`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            _marker: PhantomData,
        }
    }
}

/// Renders one notification the way [`PrintObserver`] prints it, without color.
pub fn render<T: Debug>(label: &str, notification: &Notification<T>) -> String {
    match notification {
        Notification::Next(value) => format!("[{}] next: {:?}", label, value),
        Notification::Error(err) => format!("[{}] error: {}", label, err),
        Notification::Complete => format!("[{}] complete", label),
    }
}

impl<T: Debug + 'static> Observer<T> for PrintObserver<T> {
    fn on_next(&mut self, value: T) {
        println!("{}", render(&self.label, &Notification::Next(value)).green());
    }

    fn on_error(&mut self, err: RxError) {
        println!("{}", render::<T>(&self.label, &Notification::Error(err)).bright_red());
    }

    fn on_complete(&mut self) {
        println!("{}", render::<T>(&self.label, &Notification::Complete).cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats() {
        assert_eq!(render("src", &Notification::Next(3)), "[src] next: 3");
        assert_eq!(
            render::<i32>("src", &Notification::Error(RxError::producer("x"))),
            "[src] error: producer error: x"
        );
        assert_eq!(render::<i32>("src", &Notification::Complete), "[src] complete");
    }
}
