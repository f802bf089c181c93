//! Test execution: single tests, batches, and inverted tests
//!
//! The runner owns the registry and is the only component that prints.
//! Failures never propagate to the caller: each public operation wraps its
//! fallible internals in [`guard`], so the process either continues past the
//! call or exits with code 1 and a red diagnostic.

use crate::registry::Registry;
use crate::{HarnessError, TestFn};
use attest_term::{guard, pad_left, run_task, test_label, write, write_line, Style, Task};
use log::debug;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Fail-fast test runner. Owns the registry of deferred tests.
#[derive(Default)]
pub struct Runner {
    registry: Registry,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force colored output on or off for the whole process. With no
    /// override, `colored` decides from the terminal and `NO_COLOR`.
    pub fn with_color(self, enabled: bool) -> Self {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
        self
    }

    /// Read-only view of the registered tests.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Append a test to the registry. Supports call chaining.
    pub fn register(&mut self, name: &str, body: TestFn) -> &mut Self {
        guard(|| self.registry.register(name.to_string(), body));
        self
    }

    /// Register an inverted test: it passes only if `body` fails, and fails
    /// with a "did not throw" diagnostic otherwise.
    pub fn register_throwing(&mut self, name: &str, body: TestFn) -> &mut Self {
        let wrapped = reversed(name, body);
        self.register(name, wrapped)
    }

    /// Remove the first entry matching the `(name, body)` pair. Exits with
    /// "test was not found" when no entry matches.
    pub fn remove(&mut self, name: &str, body: &TestFn) -> &mut Self {
        guard(|| self.registry.remove(name, body));
        self
    }

    /// Empty the registry. No-op when already empty.
    pub fn clear(&mut self) -> &mut Self {
        self.registry.clear();
        self
    }

    /// Run every registered test in registration order.
    ///
    /// No-op (no output) on an empty registry. Prints the opening banner,
    /// then each test; the closing banner appears only when every test
    /// passed — a failing test exits the process inside [`Self::run_one`],
    /// so later tests never run.
    pub fn run_all(&self) {
        if self.registry.is_empty() {
            return;
        }
        debug!("running {} registered tests", self.registry.len());
        let task = Task::new(|| {
            for entry in self.registry.iter() {
                self.run_one(entry.name(), entry.body());
            }
            Ok::<(), HarnessError>(())
        })
        .with_on_start(|| write("Testing all...\n\n", &[Style::Reset, Style::Underline]))
        .with_on_finish(|| write_line("All tests passed!\n\n", &[Style::FgGreen]));
        run_task(task);
    }

    /// Execute a single test, registered or not.
    ///
    /// Membership of the `(name, body)` pair affects presentation only:
    /// registered labels are indented and dim, ad-hoc labels are flush left
    /// and unstyled. The pass marker is padded so it right-aligns with the
    /// widest label in the current batch.
    pub fn run_one(&self, name: &str, body: &TestFn) {
        let registered = self.registry.contains(name, body);
        let label = test_label(name, registered);
        let padding = self.padding(&label, registered);

        let task = Task::new(|| (body.as_ref())())
            .with_on_start(|| {
                if registered {
                    write(&label, &[Style::Dim]);
                } else {
                    write(&label, &[]);
                }
            })
            .with_on_finish(|| write(&pad_left("Passed.\n", padding), &[]))
            .with_failure_indent(padding);
        run_task(task);
    }

    /// Immediately run an inverted test without registering it.
    pub fn run_throwing(&self, name: &str, body: TestFn) {
        let wrapped = reversed(name, body);
        self.run_one(name, &wrapped);
    }

    /// Spaces between this test's label and the aligned pass/fail column.
    ///
    /// The column sits at the widest registered label; an unregistered
    /// test's own label joins the pool so its marker can never be pushed
    /// off the left edge.
    fn padding(&self, label: &str, registered: bool) -> usize {
        let mut widest = if registered { 0 } else { label.len() };
        for entry in self.registry.iter() {
            widest = widest.max(test_label(entry.name(), true).len());
        }
        widest - label.len()
    }
}

/// Invert a body: failure (or panic) becomes success, and success becomes a
/// "did not throw" failure naming the test.
fn reversed(name: &str, body: TestFn) -> TestFn {
    let name = name.to_string();
    Rc::new(move || {
        match catch_unwind(AssertUnwindSafe(|| (body.as_ref())())) {
            Ok(Ok(())) => Err(HarnessError::DidNotThrow { name: name.clone() }),
            // An Err return or a panic both count as "threw".
            _ => Ok(()),
        }
    })
}
