// Tabshell shared type definitions
// Each submodule defines types used across the shell.

pub mod errors;
pub mod location;
pub mod navigation;
pub mod settings;
pub mod tab;
