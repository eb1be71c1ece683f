// Tabshell command log
// Shared, ordered record of the commands the recording collaborators receive.
// A front end drains it after each event and executes the commands in order.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::types::navigation::ShellCommand;

#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    inner: Arc<Mutex<Vec<ShellCommand>>>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ShellCommand>> {
        // Poisoned locks still hold a consistent Vec.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn record(&self, command: ShellCommand) {
        self.lock().push(command);
    }

    /// Removes and returns every command recorded so far.
    pub fn drain(&self) -> Vec<ShellCommand> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
