//! Named styles and the style registry
//!
//! Styles live in an append-only arena; a [`StyleId`] is an index into it,
//! tagged with the registry that issued it. Once registered a style never
//! changes, so a handle taken during rendering always resolves to the
//! modifiers that were registered under that name.

use super::error::{LoggerError, Result};
use super::modifier::{encode, Modifier};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Registry identities start at 1; 0 marks the shared default handle
static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// An ordered set of modifiers applied to a styled region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    modifiers: Vec<Modifier>,
}

impl Style {
    pub fn new(modifiers: impl Into<Vec<Modifier>>) -> Self {
        Self {
            modifiers: modifiers.into(),
        }
    }

    /// The base style: a bare reset
    pub fn reset() -> Self {
        Self::new(vec![Modifier::Reset])
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The escape sequence that applies this style
    pub fn escape(&self) -> String {
        encode(&self.modifiers)
    }
}

/// Handle to a style stored in a [`StyleRegistry`].
///
/// A handle only resolves in the registry that issued it, except for
/// [`StyleRegistry::DEFAULT`], which every registry accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId {
    registry: u64,
    index: usize,
}

/// Mapping from style name to style.
///
/// Slot 0 of the arena always holds the reset style used as the base frame of
/// every [`StyleStack`](super::style_stack::StyleStack); it has no name.
#[derive(Debug)]
pub struct StyleRegistry {
    id: u64,
    styles: Vec<Style>,
    names: HashMap<String, StyleId>,
}

impl StyleRegistry {
    /// Handle of the unnamed reset style
    pub const DEFAULT: StyleId = StyleId {
        registry: 0,
        index: 0,
    };

    pub fn new() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            styles: vec![Style::reset()],
            names: HashMap::new(),
        }
    }

    /// Register `modifiers` under `name`.
    ///
    /// Returns `false` and leaves the existing style untouched if the name is
    /// already taken.
    pub fn register(&mut self, name: impl Into<String>, modifiers: impl Into<Vec<Modifier>>) -> bool {
        let name = name.into();
        if self.names.contains_key(&name) {
            return false;
        }

        let id = StyleId {
            registry: self.id,
            index: self.styles.len(),
        };
        self.styles.push(Style::new(modifiers));
        self.names.insert(name, id);
        true
    }

    /// Find the handle registered under `name`
    pub fn lookup(&self, name: &str) -> Result<StyleId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| LoggerError::unknown_style(name))
    }

    /// Resolve a handle produced by this registry.
    ///
    /// Fails with [`LoggerError::InvalidStyleHandle`] for a handle issued by
    /// another registry.
    pub fn get(&self, id: StyleId) -> Result<&Style> {
        if id.registry != self.id && id != Self::DEFAULT {
            return Err(LoggerError::invalid_style_handle(id.index));
        }
        self.styles
            .get(id.index)
            .ok_or_else(|| LoggerError::invalid_style_handle(id.index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of named styles
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a separate registry: it gets its own identity, so handles
/// issued by either side do not resolve in the other.
impl Clone for StyleRegistry {
    fn clone(&self) -> Self {
        let id = NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed);
        let names = self
            .names
            .iter()
            .map(|(name, handle)| {
                (
                    name.clone(),
                    StyleId {
                        registry: id,
                        index: handle.index,
                    },
                )
            })
            .collect();

        Self {
            id,
            styles: self.styles.clone(),
            names,
        }
    }
}
