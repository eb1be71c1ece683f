use crate::managers::navigation_history::NavigationHistory;
use crate::services::content_view::ContentView;
use crate::types::errors::RegistryError;
use crate::types::location::Location;
use crate::types::navigation::NavSeq;
use crate::types::tab::{Tab, TabId};

/// Trait defining the tab registry interface.
///
/// Positions are what the tab bar shows; they shift whenever a tab before them
/// closes. `TabId`s never change, so anything held across events should be an ID.
pub trait TabRegistryTrait {
    fn create_tab(&mut self, views: &mut dyn ContentView, initial: Location) -> usize;
    fn close_tab(&mut self, views: &mut dyn ContentView, index: usize) -> bool;
    fn close_by_id(&mut self, views: &mut dyn ContentView, tab_id: TabId) -> Result<bool, RegistryError>;
    fn switch_to(&mut self, index: usize);
    fn switch_to_id(&mut self, tab_id: TabId) -> Result<usize, RegistryError>;
    fn active(&self) -> Option<&Tab>;
    fn active_index(&self) -> Option<usize>;
    fn index_of(&self, tab_id: TabId) -> Result<usize, RegistryError>;
    fn id_at(&self, index: usize) -> Option<TabId>;
    fn get(&self, tab_id: TabId) -> Option<&Tab>;
    fn tab_at_mut(&mut self, index: usize) -> Option<&mut Tab>;
    fn is_active(&self, tab_id: TabId) -> bool;
    fn tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
}

/// In-memory, ordered tab registry with exactly one active tab once non-empty.
#[derive(Debug, Default)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
        }
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Append a tab whose view starts at `initial`, record that as its first
    /// visit, and make it active. Returns the new tab's index.
    fn create_tab(&mut self, views: &mut dyn ContentView, initial: Location) -> usize {
        let view = views.create(&initial);
        let mut history = NavigationHistory::new();
        history.record_visit(initial.clone());

        let tab = Tab {
            id: TabId::new(),
            view,
            history,
            address: initial,
            last_seq: NavSeq::default(),
        };
        log::info!("Opened tab {} at {}", tab.id, tab.address);
        self.tabs.push(tab);

        let index = self.tabs.len() - 1;
        self.switch_to(index);
        index
    }

    /// Close the tab at `index` and release its view. Closing the sole tab is
    /// refused and returns `false`.
    ///
    /// # Panics
    /// If `index` is out of range while more than one tab is open.
    fn close_tab(&mut self, views: &mut dyn ContentView, index: usize) -> bool {
        if self.tabs.len() <= 1 {
            log::debug!("Refusing to close the last tab");
            return false;
        }
        assert!(
            index < self.tabs.len(),
            "close_tab index {} out of range ({} tabs)",
            index,
            self.tabs.len()
        );

        let active = self.active.unwrap_or(0);
        let removed = self.tabs.remove(index);
        views.destroy(removed.view);
        log::info!("Closed tab {} (was at {})", removed.id, index);

        let next_active = if index == active {
            index.saturating_sub(1)
        } else if active > index {
            active - 1
        } else {
            active
        };
        self.switch_to(next_active);
        true
    }

    fn close_by_id(&mut self, views: &mut dyn ContentView, tab_id: TabId) -> Result<bool, RegistryError> {
        let index = self.index_of(tab_id)?;
        Ok(self.close_tab(views, index))
    }

    /// # Panics
    /// If `index` is out of range.
    fn switch_to(&mut self, index: usize) {
        assert!(
            index < self.tabs.len(),
            "switch_to index {} out of range ({} tabs)",
            index,
            self.tabs.len()
        );
        self.active = Some(index);
    }

    fn switch_to_id(&mut self, tab_id: TabId) -> Result<usize, RegistryError> {
        let index = self.index_of(tab_id)?;
        self.switch_to(index);
        Ok(index)
    }

    fn active(&self) -> Option<&Tab> {
        self.active.map(|i| &self.tabs[i])
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn index_of(&self, tab_id: TabId) -> Result<usize, RegistryError> {
        self.tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| RegistryError::UnknownTab(tab_id.to_string()))
    }

    fn id_at(&self, index: usize) -> Option<TabId> {
        self.tabs.get(index).map(|t| t.id)
    }

    fn get(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn tab_at_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    fn is_active(&self, tab_id: TabId) -> bool {
        self.active().is_some_and(|t| t.id == tab_id)
    }

    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
