//! Accordion state in "multiple" mode: any number of items may be open.

use std::collections::BTreeSet;

/// Set of open accordion items, keyed by item value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: BTreeSet<String>,
}

impl AccordionState {
    /// All items closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    /// Flip one item, leaving the others alone. Returns the new open state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.open.remove(key) {
            false
        } else {
            self.open.insert(key.to_string());
            true
        }
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Open items in key order
    pub fn open_items(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
