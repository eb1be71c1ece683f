// Tabshell services
// Services are the seams to the outside world: content views, host history, settings.

pub mod command_log;
pub mod content_view;
pub mod host_history;
pub mod settings_engine;
