//! Tabshell: a minimal multi-tab browser shell.
//!
//! Each tab pairs an embedded content view with its own navigation history.
//! The navigation controller keeps the active tab, the host window's history
//! stack and the address display in agreement.

pub mod app;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
