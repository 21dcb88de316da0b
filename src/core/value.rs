//! Value substitution for `%v` directives

use super::error::{LoggerError, Result};
use std::collections::VecDeque;
use std::fmt::Display;

/// Convert values to their `Display` text, preserving argument order.
#[must_use]
pub fn stringize(values: &[&dyn Display]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Stringized values waiting to be consumed, first in first out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionQueue {
    values: VecDeque<String>,
    consumed: usize,
}

impl SubstitutionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from display-capable values
    pub fn from_values(values: &[&dyn Display]) -> Self {
        stringize(values).into_iter().collect()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.values.push_back(value.into());
    }

    /// Take the next value.
    ///
    /// Fails with [`LoggerError::QueueExhausted`] once every value has been taken.
    pub fn pop(&mut self) -> Result<String> {
        self.consumed += 1;
        self.values
            .pop_front()
            .ok_or_else(|| LoggerError::queue_exhausted(self.consumed))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<String> for SubstitutionQueue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            consumed: 0,
        }
    }
}

impl IntoIterator for SubstitutionQueue {
    type Item = String;
    type IntoIter = std::collections::vec_deque::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
