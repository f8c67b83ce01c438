//! Immutable, ordered content tables.

use std::sync::Arc;

use gini_core::{Error, Layer, Result, Stanza};

/// A read-only table fixed at construction.
///
/// Clones share the same backing slice, so a registry can be handed to every
/// request handler without locking.
#[derive(Debug)]
pub struct ContentRegistry<T> {
    records: Arc<[T]>,
}

impl<T> ContentRegistry<T> {
    /// Creates a registry over the given records, keeping their order.
    #[must_use]
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Returns the full table in declaration order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Iterates over the table in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Clone for ContentRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> From<Vec<T>> for ContentRegistry<T> {
    fn from(records: Vec<T>) -> Self {
        Self::new(records)
    }
}

impl ContentRegistry<Stanza> {
    /// Finds the stanza with the given 1-based line number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StanzaNotFound`] if no stanza carries that line.
    pub fn stanza(&self, line: usize) -> Result<&Stanza> {
        self.records
            .iter()
            .find(|s| s.line == line)
            .ok_or(Error::StanzaNotFound { line })
    }

    /// Returns the stanzas filed under a layer, in declaration order.
    #[must_use]
    pub fn by_layer(&self, layer: Layer) -> Vec<&Stanza> {
        self.records
            .iter()
            .filter(|s| s.iaas_layer == layer)
            .collect()
    }
}
