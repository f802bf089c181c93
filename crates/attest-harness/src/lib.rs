//! Fail-fast unit test harness
//!
//! Callers register named test functions (or run ad-hoc ones), the harness
//! executes them in registration order, aligns the pass/fail column across
//! the batch, and halts the process on the first failure.
//!
//! # Example
//!
//! ```no_run
//! use attest_harness::asserts::{assert_equal, assert_true};
//! use attest_harness::{test_fn, Runner};
//!
//! let mut runner = Runner::new();
//! runner
//!     .register("addition", test_fn(|| assert_equal(2 + 2, 4, None)))
//!     .register("ordering", test_fn(|| assert_true(1 < 2, None)));
//! runner.run_all();
//! ```
//!
//! A test body signals pass by returning `Ok(())` and failure by returning
//! `Err`; bodies that panic are captured and reported as failures. The
//! harness either completes silently or terminates the process with
//! diagnostic output and exit code 1 — it never returns an error value to
//! the embedding caller.

pub mod asserts;
pub mod registry;
pub mod runner;

use attest_term::TermError;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by registry and runner operations
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Failure from a formatting or assertion primitive.
    #[error(transparent)]
    Term(#[from] TermError),

    /// `remove` found no matching `(name, body)` entry.
    #[error("test was not found")]
    NotFound,

    /// An inverted test ran to completion without failing.
    #[error("{name} test did not throw.")]
    DidNotThrow { name: String },
}

/// Outcome of a test body: `Ok(())` passes, `Err` fails.
pub type TestResult = Result<(), HarnessError>;

/// A zero-argument test body.
///
/// Identity is allocation identity (`Rc::ptr_eq`), so clone the handle you
/// registered when you later remove the test by `(name, body)`.
pub type TestFn = Rc<dyn Fn() -> TestResult>;

/// Wrap a closure as a [`TestFn`] handle.
pub fn test_fn(body: impl Fn() -> TestResult + 'static) -> TestFn {
    Rc::new(body)
}

// Re-export main types
pub use registry::{Registry, TestEntry};
pub use runner::Runner;
