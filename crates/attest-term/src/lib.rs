//! Terminal formatting and assertion primitives for the attest harness
//!
//! Provides the pieces the runner builds on:
//! - The `ensure` assertion primitive (the sole failure-raising mechanism)
//! - An ANSI-styled terminal writer ([`write`], [`write_line`], [`Style`])
//! - String helpers ([`pad_left`], [`test_label`])
//! - The top-level fatal-error boundary ([`guard`])
//! - A structured task wrapper with presentation hooks ([`Task`], [`run_task`])
//!
//! The contract of this crate is deliberately one-sided: operations either
//! complete, or the error reaches [`guard`], which prints it in red and
//! terminates the process with exit code 1. No error value crosses the
//! library boundary to an embedding caller.

pub mod style;
pub mod task;
pub mod writer;

use thiserror::Error;

/// Errors raised by the formatting and assertion primitives
#[derive(Error, Debug)]
pub enum TermError {
    /// A predicate did not hold.
    #[error("{0}")]
    Assertion(String),

    /// An out-of-range argument reached a public operation.
    #[error("invalid {what}: {detail}")]
    InvalidArgument { what: &'static str, detail: String },
}

/// Result type for formatting/assertion operations
pub type TermResult<T> = Result<T, TermError>;

/// Fail with `message` (or a generic default) unless `predicate` holds.
///
/// Every assertion in the harness bottoms out here.
pub fn ensure(predicate: bool, message: Option<&str>) -> TermResult<()> {
    if predicate {
        Ok(())
    } else {
        Err(TermError::Assertion(
            message.unwrap_or("assertion failed").to_string(),
        ))
    }
}

// Re-export main types
pub use style::Style;
pub use task::{run_task, Task};
pub use writer::{guard, pad_left, test_label, write, write_line};
