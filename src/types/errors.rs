use thiserror::Error;

// === LocationError ===

/// Errors raised while turning raw address-bar input into a `Location`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    /// The input was empty or only whitespace.
    #[error("Location input is empty")]
    Empty,
}

// === HistoryError ===

/// Errors related to per-tab navigation history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// Back or forward was requested at the edge of the history.
    #[error("Already at the history boundary")]
    AtBoundary,
    /// A jump target lies outside the recorded entries.
    #[error("History index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// === RegistryError ===

/// Errors related to tab registry lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No open tab carries the given ID.
    #[error("Tab not found: {0}")]
    UnknownTab(String),
}

// === ViewError ===

/// Errors reported by a content view.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// The view refuses to expose its resolved location (e.g. cross-origin content).
    #[error("Resolved location is not readable: {0}")]
    AccessDenied(String),
    /// The handle does not belong to a live view.
    #[error("Unknown view handle: {0}")]
    UnknownHandle(u64),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
