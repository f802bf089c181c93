//! Insertion-ordered registry of named test functions
//!
//! Entries are identified by the `(name, body)` pair, not the name alone:
//! registering the same name twice yields two entries, and removal matches
//! both the name and the body handle (`Rc::ptr_eq`).

use crate::{HarnessError, TestFn};
use attest_term::TermError;
use log::debug;
use std::rc::Rc;

/// A registered test: display name plus body handle.
#[derive(Clone)]
pub struct TestEntry {
    name: String,
    body: TestFn,
}

impl TestEntry {
    /// The display name of the test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body handle.
    pub fn body(&self) -> &TestFn {
        &self.body
    }

    fn matches(&self, name: &str, body: &TestFn) -> bool {
        self.name == name && Rc::ptr_eq(&self.body, body)
    }
}

/// Ordered collection of tests. Insertion order is execution and display
/// order.
#[derive(Default)]
pub struct Registry {
    entries: Vec<TestEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicates are allowed and are not collapsed.
    pub fn register(&mut self, name: String, body: TestFn) -> Result<(), HarnessError> {
        if name.is_empty() {
            return Err(TermError::InvalidArgument {
                what: "name",
                detail: "must not be empty".to_string(),
            }
            .into());
        }
        debug!("registered test `{name}`");
        self.entries.push(TestEntry { name, body });
        Ok(())
    }

    /// Remove the first `(name, body)` match, scanning in registration
    /// order. Survivors keep their relative order.
    pub fn remove(&mut self, name: &str, body: &TestFn) -> Result<(), HarnessError> {
        match self.entries.iter().position(|entry| entry.matches(name, body)) {
            Some(index) => {
                self.entries.remove(index);
                debug!("removed test `{name}`");
                Ok(())
            }
            None => Err(HarnessError::NotFound),
        }
    }

    /// Drop every entry. No-op when already empty.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the exact `(name, body)` pair is registered.
    pub fn contains(&self, name: &str, body: &TestFn) -> bool {
        self.entries.iter().any(|entry| entry.matches(name, body))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
