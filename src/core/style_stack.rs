//! Stack of active styles during one render

use super::error::{LoggerError, Result};
use super::modifier::RESET_SEQUENCE;
use super::style::{StyleId, StyleRegistry};

/// Active nested styles.
///
/// The bottom frame is always [`StyleRegistry::DEFAULT`]. Closing a region does
/// not undo one layer: it resets everything and re-applies the enclosing style
/// from scratch.
#[derive(Debug, Clone)]
pub struct StyleStack {
    frames: Vec<StyleId>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self {
            frames: vec![StyleRegistry::DEFAULT],
        }
    }

    /// Push `style` and return the escape sequence that applies it.
    ///
    /// A handle that `registry` did not issue is rejected and nothing is pushed.
    pub fn open(&mut self, style: StyleId, registry: &StyleRegistry) -> Result<String> {
        let escape = registry.get(style)?.escape();
        self.frames.push(style);
        Ok(escape)
    }

    /// Pop the top style and return the reset + re-apply sequence for the new top.
    ///
    /// Fails with [`LoggerError::EmptyStyleStack`] when only the base frame is left.
    pub fn close(&mut self, registry: &StyleRegistry) -> Result<String> {
        let Some(&parent) = self.frames.len().checked_sub(2).and_then(|i| self.frames.get(i)) else {
            return Err(LoggerError::EmptyStyleStack);
        };

        let mut out = String::from(RESET_SEQUENCE);
        out.push_str(&registry.get(parent)?.escape());
        self.frames.pop();
        Ok(out)
    }

    pub fn top(&self) -> StyleId {
        // The base frame is never popped
        *self.frames.last().unwrap_or(&StyleRegistry::DEFAULT)
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}
