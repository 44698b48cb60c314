//! Per-surface back/forward list.
//!
//! Web view bindings that do not expose the engine's own session history
//! keep one of these, fed from the addresses the engine reports.

/// Back/forward stack of addresses visited by one surface.
#[derive(Debug, Default, Clone)]
pub struct SessionHistory {
    entries: Vec<String>,
    /// Position of the current entry; `None` while empty.
    current: Option<usize>,
    /// Traversals requested from the engine whose commits are still due.
    pending_traversals: usize,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.entries[i].as_str())
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.current, Some(i) if i + 1 < self.entries.len())
    }

    /// Pushes `address` as a new entry, dropping any forward entries.
    /// Re-reporting the current address (a reload) changes nothing.
    pub fn push(&mut self, address: &str) {
        if self.current() == Some(address) {
            return;
        }
        if let Some(i) = self.current {
            self.entries.truncate(i + 1);
        }
        self.entries.push(address.to_string());
        self.current = Some(self.entries.len() - 1);
    }

    /// Replaces the current entry, used when a load is redirected.
    pub fn replace_current(&mut self, address: &str) {
        match self.current {
            Some(i) => self.entries[i] = address.to_string(),
            None => self.push(address),
        }
    }

    /// Reconciles an address the engine committed to.
    ///
    /// While traversals requested through [`request_back`](Self::request_back)
    /// or [`request_forward`](Self::request_forward) are outstanding, commits
    /// belong to them and leave the list alone. Every other address is a new
    /// entry, even one equal to a neighbour (a link back to the previous page).
    pub fn observe(&mut self, address: &str) {
        if self.pending_traversals > 0 {
            self.pending_traversals -= 1;
            if self.current() == Some(address) {
                self.pending_traversals = 0;
            }
            return;
        }
        self.push(address);
    }

    /// Moves back ahead of the engine, which will commit the entry later.
    /// Returns whether there was an entry to move to.
    pub fn request_back(&mut self) -> bool {
        let moved = self.go_back().is_some();
        if moved {
            self.pending_traversals += 1;
        }
        moved
    }

    /// Forward counterpart of [`request_back`](Self::request_back).
    pub fn request_forward(&mut self) -> bool {
        let moved = self.go_forward().is_some();
        if moved {
            self.pending_traversals += 1;
        }
        moved
    }

    /// Moves one entry back and returns the new current address.
    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.current = self.current.map(|i| i - 1);
        self.current()
    }

    /// Moves one entry forward and returns the new current address.
    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.current = self.current.map(|i| i + 1);
        self.current()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
