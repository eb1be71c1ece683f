use serde::{Deserialize, Serialize};

use super::location::Location;
use super::tab::{TabId, ViewHandle};

/// Sequence number attached to every navigation command, increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavSeq(pub u64);

impl NavSeq {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// State stored with each host history entry and handed back on pop.
///
/// Serialized as `{"tabIndex": 0, "index": 2, "tabId": "..."}`. `tabId` is
/// optional so that entries written by older front ends still replay by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostState {
    pub tab_index: usize,
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<TabId>,
}

impl HostState {
    pub fn new(tab_index: usize, index: usize) -> Self {
        Self {
            tab_index,
            index,
            tab_id: None,
        }
    }

    pub fn for_tab(tab_id: TabId, tab_index: usize, index: usize) -> Self {
        Self {
            tab_index,
            index,
            tab_id: Some(tab_id),
        }
    }
}

/// Everything that can happen to the shell, from the user, the views or the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Load(String),
    Back,
    Forward,
    Refresh,
    NewTab,
    CloseTab(TabId),
    SwitchTab(TabId),
    /// A view finished loading. `seq` is the sequence number of the navigation
    /// it finished, when the front end reports one.
    ViewLoadCompleted { tab: TabId, seq: Option<NavSeq> },
    HostPop(Option<HostState>),
}

/// A command issued to an external collaborator, recorded for a front end to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShellCommand {
    CreateView {
        view: ViewHandle,
        location: Location,
    },
    Navigate {
        view: ViewHandle,
        location: Location,
        seq: NavSeq,
    },
    DestroyView {
        view: ViewHandle,
    },
    PushEntry {
        state: HostState,
        path: String,
    },
    ReplaceEntry {
        state: HostState,
        path: String,
    },
}
