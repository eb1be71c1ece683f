//! Host navigation seam.
//!
//! The host window has its own back/forward stack. The shell writes entries
//! into it (push on a new visit, replace on replay or redirect) and receives
//! pop notifications when the user moves through it from outside.

use crate::services::command_log::CommandLog;
use crate::types::navigation::{HostState, ShellCommand};

/// Trait defining the host history interface.
pub trait HostHistory {
    fn push_entry(&mut self, state: HostState, path: &str);
    fn replace_entry(&mut self, state: HostState, path: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostEntry {
    /// `None` for the document the host started on.
    pub state: Option<HostState>,
    pub path: String,
}

/// Host history that mirrors the host's stack in memory and records its
/// commands into a [`CommandLog`].
///
/// `traverse` plays the host's part of a back/forward gesture and yields the
/// state a real host would hand over in its pop notification.
#[derive(Debug)]
pub struct RecordingHost {
    log: CommandLog,
    entries: Vec<HostEntry>,
    cursor: usize,
}

impl RecordingHost {
    pub fn new(log: CommandLog) -> Self {
        Self {
            log,
            entries: vec![HostEntry {
                state: None,
                path: String::new(),
            }],
            cursor: 0,
        }
    }

    /// Moves the host cursor by `delta` entries. Returns the state of the entry
    /// landed on, or `None` when the move would leave the stack.
    pub fn traverse(&mut self, delta: isize) -> Option<Option<HostState>> {
        let target = self.cursor.checked_add_signed(delta)?;
        let entry = self.entries.get(target)?;
        self.cursor = target;
        Some(entry.state.clone())
    }

    pub fn current(&self) -> &HostEntry {
        &self.entries[self.cursor]
    }

    pub fn entries(&self) -> &[HostEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl HostHistory for RecordingHost {
    fn push_entry(&mut self, state: HostState, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HostEntry {
            state: Some(state.clone()),
            path: path.to_string(),
        });
        self.cursor = self.entries.len() - 1;
        self.log.record(ShellCommand::PushEntry {
            state,
            path: path.to_string(),
        });
    }

    fn replace_entry(&mut self, state: HostState, path: &str) {
        self.entries[self.cursor] = HostEntry {
            state: Some(state.clone()),
            path: path.to_string(),
        };
        self.log.record(ShellCommand::ReplaceEntry {
            state,
            path: path.to_string(),
        });
    }
}
