use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::managers::navigation_history::NavigationHistory;

use super::location::Location;
use super::navigation::NavSeq;

/// Stable identity of a tab, independent of its position in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a content view owned by the embedding front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(pub u64);

/// One independent browsing context: a content view plus its own history.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub view: ViewHandle,
    pub history: NavigationHistory,
    /// What the address bar shows while this tab is active.
    pub address: Location,
    /// Latest navigation issued to `view`.
    pub last_seq: NavSeq,
}
