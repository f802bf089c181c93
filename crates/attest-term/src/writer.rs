//! Terminal writer and the top-level fatal-error boundary

use crate::style::{stylize, Style};
use std::fmt::Display;
use std::io::{self, Write};
use std::process;

/// Write `message` to stdout without forcing a newline.
///
/// With an empty style list this is a plain write; otherwise the styles are
/// applied in order. Stdout is flushed so partial lines appear immediately.
pub fn write(message: &str, styles: &[Style]) {
    if styles.is_empty() {
        print!("{message}");
    } else {
        print!("{}", stylize(message, styles));
    }
    let _ = io::stdout().flush();
}

/// As [`write`], but on a fresh line. The newline leads the message.
pub fn write_line(message: &str, styles: &[Style]) {
    write(&format!("\n{message}"), styles);
}

/// Prepend `count` spaces to `text`.
pub fn pad_left(text: &str, count: usize) -> String {
    format!("{}{}", " ".repeat(count), text)
}

/// Canonical display string for a test name. Registered tests render with a
/// three-space indent; ad-hoc tests never do.
pub fn test_label(name: &str, indented: bool) -> String {
    if indented {
        format!("   Testing {name}...  ")
    } else {
        format!("Testing {name}...  ")
    }
}

/// Top-level fatal-error boundary.
///
/// Runs `task`; on failure, writes the error to the terminal in red and
/// terminates the process with exit code 1. Every public entry point of the
/// harness is wrapped here, so no error ever escapes to the embedding caller.
pub fn guard<T, E: Display>(task: impl FnOnce() -> Result<T, E>) -> T {
    match task() {
        Ok(value) => value,
        Err(error) => {
            write(&error.to_string(), &[Style::FgRed]);
            process::exit(1);
        }
    }
}
