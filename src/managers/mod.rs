// Tabshell state managers
// Managers handle stateful operations: per-tab history, the tab registry, and navigation.

pub mod navigation_controller;
pub mod navigation_history;
pub mod tab_registry;
