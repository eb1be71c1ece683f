//! App Core for Tabshell.
//!
//! Holds the settings engine and the navigation controller wired to recording
//! collaborators, so that a front end can feed events in and drain the
//! resulting view and host commands.

use crate::managers::navigation_controller::NavigationController;
use crate::services::command_log::CommandLog;
use crate::services::content_view::RecordingView;
use crate::services::host_history::RecordingHost;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SettingsError;
use crate::types::navigation::{ShellCommand, ShellEvent};

pub type ShellController = NavigationController<RecordingView, RecordingHost>;

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub controller: ShellController,
    commands: CommandLog,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and opens
    /// the seed tab.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load()?;
        log::info!("Settings loaded from {}", settings_engine.get_config_path());

        let commands = CommandLog::new();
        let controller = NavigationController::with_seed_tab(
            RecordingView::new(commands.clone()),
            RecordingHost::new(commands.clone()),
            settings,
        );

        Ok(Self {
            settings_engine,
            controller,
            commands,
        })
    }

    /// Runs one event to completion and returns the commands it produced.
    pub fn handle(&mut self, event: ShellEvent) -> Vec<ShellCommand> {
        log::debug!("Event {:?}", event);
        self.controller.dispatch(event);
        self.commands.drain()
    }

    /// Returns and clears commands produced outside `handle` (e.g. at startup).
    pub fn take_commands(&mut self) -> Vec<ShellCommand> {
        self.commands.drain()
    }

    /// Hands settings changed through the engine to the controller.
    pub fn apply_settings(&mut self) {
        if let Some(settings) = self.settings_engine.take_changed() {
            log::debug!("Applying changed settings");
            self.controller.set_settings(settings);
        }
    }
}
