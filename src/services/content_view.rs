//! Content view seam.
//!
//! A content view is the embeddable surface that actually loads pages. The
//! shell only creates, navigates and destroys views, and may ask for the
//! location a view ended up at after redirects.

use std::collections::HashMap;

use crate::services::command_log::CommandLog;
use crate::types::errors::ViewError;
use crate::types::location::Location;
use crate::types::navigation::{NavSeq, ShellCommand};
use crate::types::tab::ViewHandle;

/// Trait defining the content view interface.
pub trait ContentView {
    /// Creates a view that immediately starts loading `location`.
    fn create(&mut self, location: &Location) -> ViewHandle;
    fn navigate(&mut self, view: ViewHandle, location: &Location, seq: NavSeq);
    fn destroy(&mut self, view: ViewHandle);
    /// Where the view actually is. Failing here is expected for cross-origin content.
    fn resolved_location(&self, view: ViewHandle) -> Result<Location, ViewError>;
}

#[derive(Debug, Clone)]
struct ViewState {
    src: Location,
    resolved: Resolved,
}

#[derive(Debug, Clone)]
enum Resolved {
    /// Nothing reported since the last navigation; the source is assumed.
    Source,
    At(Location),
    Denied,
}

/// Content view that records its commands into a [`CommandLog`] for a front end
/// to execute, and answers `resolved_location` from what the front end reported.
#[derive(Debug)]
pub struct RecordingView {
    log: CommandLog,
    views: HashMap<ViewHandle, ViewState>,
    next_handle: u64,
}

impl RecordingView {
    pub fn new(log: CommandLog) -> Self {
        Self {
            log,
            views: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Stores what the front end found in the view after a load. `None` means
    /// the view would not tell.
    pub fn report_resolved(&mut self, view: ViewHandle, resolved: Option<Location>) -> Result<(), ViewError> {
        let state = self
            .views
            .get_mut(&view)
            .ok_or(ViewError::UnknownHandle(view.0))?;
        state.resolved = match resolved {
            Some(location) => Resolved::At(location),
            None => Resolved::Denied,
        };
        Ok(())
    }

    pub fn is_live(&self, view: ViewHandle) -> bool {
        self.views.contains_key(&view)
    }

    pub fn live_count(&self) -> usize {
        self.views.len()
    }
}

impl ContentView for RecordingView {
    fn create(&mut self, location: &Location) -> ViewHandle {
        let view = ViewHandle(self.next_handle);
        self.next_handle += 1;
        self.views.insert(
            view,
            ViewState {
                src: location.clone(),
                resolved: Resolved::Source,
            },
        );
        self.log.record(ShellCommand::CreateView {
            view,
            location: location.clone(),
        });
        view
    }

    fn navigate(&mut self, view: ViewHandle, location: &Location, seq: NavSeq) {
        if let Some(state) = self.views.get_mut(&view) {
            state.src = location.clone();
            state.resolved = Resolved::Source;
        }
        self.log.record(ShellCommand::Navigate {
            view,
            location: location.clone(),
            seq,
        });
    }

    fn destroy(&mut self, view: ViewHandle) {
        self.views.remove(&view);
        self.log.record(ShellCommand::DestroyView { view });
    }

    fn resolved_location(&self, view: ViewHandle) -> Result<Location, ViewError> {
        let state = self.views.get(&view).ok_or(ViewError::UnknownHandle(view.0))?;
        match &state.resolved {
            Resolved::Source => Ok(state.src.clone()),
            Resolved::At(location) => Ok(location.clone()),
            Resolved::Denied => Err(ViewError::AccessDenied(state.src.to_string())),
        }
    }
}
