//! Structured wrapper for running a fallible body with presentation hooks
//!
//! [`Task`] replaces the loosely-typed "config object" shape with an explicit
//! type: the body to run, optional hooks fired before and after it, and the
//! indentation applied before a failure report. [`run_task`] executes the
//! body, capturing panics as well as `Err` returns, and escalates failures
//! through [`guard`].

use crate::writer::{guard, pad_left, write};
use crate::TermError;
use std::any::Any;
use std::fmt::Display;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A unit of work plus the presentation around it.
pub struct Task<'a, E> {
    body: Box<dyn FnOnce() -> Result<(), E> + 'a>,
    on_start: Option<Box<dyn FnOnce() + 'a>>,
    on_finish: Option<Box<dyn FnOnce() + 'a>>,
    failure_indent: usize,
}

impl<'a, E: Display> Task<'a, E> {
    /// Create a task with no hooks and no failure indentation.
    pub fn new(body: impl FnOnce() -> Result<(), E> + 'a) -> Self {
        Self {
            body: Box::new(body),
            on_start: None,
            on_finish: None,
            failure_indent: 0,
        }
    }

    /// Hook fired before the body runs.
    pub fn with_on_start(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_start = Some(Box::new(hook));
        self
    }

    /// Hook fired after the body returns successfully. Skipped on failure.
    pub fn with_on_finish(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_finish = Some(Box::new(hook));
        self
    }

    /// Spaces written before the failure report.
    pub fn with_failure_indent(mut self, count: usize) -> Self {
        self.failure_indent = count;
        self
    }
}

/// Extract a printable message from a panic payload.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test body panicked".to_string()
    }
}

/// Run a body to completion, reporting failure as a message.
///
/// Returns `None` when the body returns `Ok`; otherwise the rendered error,
/// whether the body returned `Err` or panicked.
fn capture<E: Display>(body: Box<dyn FnOnce() -> Result<(), E> + '_>) -> Option<String> {
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(())) => None,
        Ok(Err(error)) => Some(error.to_string()),
        Err(payload) => Some(panic_message(payload)),
    }
}

/// Run `task`, escalating any failure through [`guard`].
///
/// Order: `on_start`, body, then either `on_finish` (success) or the
/// indented `FAILED` report followed by process exit (failure).
pub fn run_task<E: Display>(task: Task<'_, E>) {
    guard(|| {
        if let Some(hook) = task.on_start {
            hook();
        }
        if let Some(message) = capture(task.body) {
            write(&pad_left("", task.failure_indent), &[]);
            return Err(TermError::Assertion(format!("FAILED\n\n{message}\n\n")));
        }
        if let Some(hook) = task.on_finish {
            hook();
        }
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn capture_returns_none_on_success() {
        assert_eq!(capture(Box::new(|| Ok::<(), TermError>(()))), None);
    }

    #[test]
    fn capture_renders_an_error_return() {
        let body = Box::new(|| Err::<(), _>(TermError::Assertion("broke".to_string())));
        assert_eq!(capture(body), Some("broke".to_string()));
    }

    #[test]
    fn capture_renders_a_str_panic() {
        let body = Box::new(|| -> Result<(), TermError> { panic!("str payload") });
        assert_eq!(capture(body), Some("str payload".to_string()));
    }

    #[test]
    fn capture_renders_a_string_panic() {
        let body = Box::new(|| -> Result<(), TermError> { panic!("{}", String::from("owned")) });
        assert_eq!(capture(body), Some("owned".to_string()));
    }

    #[test]
    fn hooks_fire_around_a_successful_body() {
        let events = RefCell::new(Vec::new());
        let task = Task::new(|| {
            events.borrow_mut().push("body");
            Ok::<(), TermError>(())
        })
        .with_on_start(|| events.borrow_mut().push("start"))
        .with_on_finish(|| events.borrow_mut().push("finish"));

        run_task(task);
        assert_eq!(*events.borrow(), vec!["start", "body", "finish"]);
    }

    #[test]
    fn a_task_without_hooks_runs_the_body() {
        let ran = RefCell::new(false);
        run_task(Task::new(|| {
            *ran.borrow_mut() = true;
            Ok::<(), TermError>(())
        }));
        assert!(*ran.borrow());
    }
}
