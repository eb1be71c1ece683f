//! Per-tab navigation history: an ordered log of visited locations with a
//! current-position pointer.
//!
//! Entries after the pointer form a redo branch. Going back and forward moves
//! the pointer inside the log; recording a new visit drops the redo branch for
//! good.

use crate::types::errors::HistoryError;
use crate::types::location::Location;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationHistory {
    entries: Vec<Location>,
    /// `None` while empty, otherwise always `< entries.len()`.
    position: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new visit at the current position, discarding any redo branch.
    /// Returns the position of the new entry.
    pub fn record_visit(&mut self, location: Location) -> usize {
        let keep = self.position.map_or(0, |p| p + 1);
        self.entries.truncate(keep);
        self.entries.push(location);
        let position = self.entries.len() - 1;
        self.position = Some(position);
        position
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.position, Some(p) if p > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.position, Some(p) if p + 1 < self.entries.len())
    }

    /// Steps one entry back and returns the location now current.
    pub fn go_back(&mut self) -> Result<&Location, HistoryError> {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                Ok(&self.entries[p - 1])
            }
            _ => Err(HistoryError::AtBoundary),
        }
    }

    /// Steps one entry forward and returns the location now current.
    pub fn go_forward(&mut self) -> Result<&Location, HistoryError> {
        match self.position {
            Some(p) if p + 1 < self.entries.len() => {
                self.position = Some(p + 1);
                Ok(&self.entries[p + 1])
            }
            _ => Err(HistoryError::AtBoundary),
        }
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.position.map(|p| &self.entries[p])
    }

    /// Repositions the pointer without touching the entries (host replay).
    pub fn jump_to(&mut self, index: usize) -> Result<&Location, HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.position = Some(index);
        Ok(&self.entries[index])
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
