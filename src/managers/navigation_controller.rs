//! Navigation controller: keeps the active tab, its content view, the host's
//! history stack and the address display in agreement.
//!
//! Every input arrives as a [`ShellEvent`] and runs to completion before the
//! next one. None of the public operations fail from the caller's point of
//! view: boundaries, unreadable views, stale completions and unusable host
//! state are logged and dropped.

use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::services::content_view::ContentView;
use crate::services::host_history::HostHistory;
use crate::types::errors::LocationError;
use crate::types::location::Location;
use crate::types::navigation::{HostState, NavSeq, ShellEvent};
use crate::types::settings::ShellSettings;
use crate::types::tab::TabId;

pub struct NavigationController<V: ContentView, H: HostHistory> {
    registry: TabRegistry,
    views: V,
    host: H,
    settings: ShellSettings,
    address: Option<Location>,
    seq: NavSeq,
}

impl<V: ContentView, H: HostHistory> NavigationController<V, H> {
    /// Creates a controller with no tabs. Call [`open_tab`](Self::open_tab)
    /// before anything else, or use [`with_seed_tab`](Self::with_seed_tab).
    pub fn new(views: V, host: H, settings: ShellSettings) -> Self {
        Self {
            registry: TabRegistry::new(),
            views,
            host,
            settings,
            address: None,
            seq: NavSeq::default(),
        }
    }

    /// Creates a controller holding one tab at the configured seed address.
    pub fn with_seed_tab(views: V, host: H, settings: ShellSettings) -> Self {
        let seed = settings.general.seed_url.clone();
        let mut controller = Self::new(views, host, settings);
        if controller.open_tab(&seed).is_none() {
            controller.open_location(Location::from_resolved("about:blank"));
        }
        controller
    }

    pub fn dispatch(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Load(raw) => self.load_in_active_tab(&raw),
            ShellEvent::Back => self.go_back(),
            ShellEvent::Forward => self.go_forward(),
            ShellEvent::Refresh => self.refresh(),
            ShellEvent::NewTab => {
                self.new_tab();
            }
            ShellEvent::CloseTab(tab_id) => self.close_tab(tab_id),
            ShellEvent::SwitchTab(tab_id) => self.switch_tab(tab_id),
            ShellEvent::ViewLoadCompleted { tab, seq } => self.on_view_load_completed(tab, seq),
            ShellEvent::HostPop(state) => self.on_host_pop_notification(state),
        }
    }

    pub fn normalize(&self, raw: &str) -> Result<Location, LocationError> {
        let general = &self.settings.general;
        Location::normalize(raw, &general.default_scheme, &general.recognized_schemes)
    }

    /// Loads user input in the active tab as a new visit and pushes a host entry.
    pub fn load_in_active_tab(&mut self, raw: &str) {
        let location = match self.normalize(raw) {
            Ok(location) => location,
            Err(e) => {
                log::debug!("Ignoring load: {}", e);
                return;
            }
        };
        let Some(index) = self.registry.active_index() else {
            log::debug!("Ignoring load of {}: no tab open", location);
            return;
        };
        let seq = self.next_seq();
        let Some(tab) = self.registry.tab_at_mut(index) else {
            return;
        };

        tab.last_seq = seq;
        self.views.navigate(tab.view, &location, seq);
        let position = tab.history.record_visit(location.clone());
        tab.address = location.clone();
        let state = HostState::for_tab(tab.id, index, position);
        self.host.push_entry(state, &location.display_path());

        if self.settings.navigation.optimistic_address {
            self.address = Some(location);
        }
    }

    pub fn go_back(&mut self) {
        self.step(-1);
    }

    pub fn go_forward(&mut self) {
        self.step(1);
    }

    fn step(&mut self, direction: i8) {
        let Some(index) = self.registry.active_index() else {
            return;
        };
        let Some(tab) = self.registry.tab_at_mut(index) else {
            return;
        };
        let moved = if direction < 0 {
            tab.history.go_back()
        } else {
            tab.history.go_forward()
        };
        let location = match moved {
            Ok(location) => location.clone(),
            Err(e) => {
                log::debug!("Tab {}: {}", tab.id, e);
                return;
            }
        };
        let position = tab.history.position().unwrap_or_default();
        let state = HostState::for_tab(tab.id, index, position);

        self.replay(index, &location);
        self.host.replace_entry(state, &location.display_path());
    }

    /// Reloads whatever the active tab currently shows.
    pub fn refresh(&mut self) {
        let Some(tab) = self.registry.active() else {
            return;
        };
        let location = tab.address.clone();
        let Some(index) = self.registry.active_index() else {
            return;
        };
        self.replay(index, &location);
    }

    /// Reconciles the address display and host entry with where a view
    /// actually ended up after a load.
    pub fn on_view_load_completed(&mut self, tab_id: TabId, seq: Option<NavSeq>) {
        let Ok(index) = self.registry.index_of(tab_id) else {
            log::debug!("Load completed for closed tab {}", tab_id);
            return;
        };
        let discard_stale = self.settings.navigation.discard_stale_completions;
        let is_active = self.registry.is_active(tab_id);
        let Some(tab) = self.registry.tab_at_mut(index) else {
            return;
        };

        if let Some(seq) = seq {
            if discard_stale && seq != tab.last_seq {
                log::debug!(
                    "Tab {}: dropping completion {:?}, latest is {:?}",
                    tab_id,
                    seq,
                    tab.last_seq
                );
                return;
            }
        }

        let resolved = match self.views.resolved_location(tab.view) {
            Ok(location) => location,
            Err(e) => {
                log::debug!("Tab {}: {}", tab_id, e);
                return;
            }
        };
        tab.address = resolved.clone();

        // Host entries and the address bar belong to the active tab only.
        if !is_active {
            return;
        }
        let Some(position) = tab.history.position() else {
            return;
        };
        let state = HostState::for_tab(tab_id, index, position);
        self.host.replace_entry(state, &resolved.display_path());
        self.address = Some(resolved);
    }

    /// Replays a host back/forward traversal. The host has already moved its
    /// own stack, so nothing is pushed or replaced here.
    pub fn on_host_pop_notification(&mut self, state: Option<HostState>) {
        let Some(state) = state else {
            log::debug!("Host pop without state");
            return;
        };

        let index = match state.tab_id {
            Some(tab_id) => match self.registry.index_of(tab_id) {
                Ok(index) => index,
                Err(e) => {
                    log::warn!("Host pop ignored: {}", e);
                    return;
                }
            },
            None => state.tab_index,
        };
        let Some(tab) = self.registry.tab_at_mut(index) else {
            log::warn!("Host pop ignored: no tab at {}", state.tab_index);
            return;
        };
        let location = match tab.history.jump_to(state.index) {
            Ok(location) => location.clone(),
            Err(e) => {
                log::warn!("Host pop ignored for tab {}: {}", tab.id, e);
                return;
            }
        };

        let switching = self.registry.active_index() != Some(index);
        self.registry.switch_to(index);
        self.replay(index, &location);
        if switching {
            self.show_active_address();
        }
    }

    /// Opens a tab at `raw` and makes it active. Returns `None` for blank input.
    pub fn open_tab(&mut self, raw: &str) -> Option<TabId> {
        let location = match self.normalize(raw) {
            Ok(location) => location,
            Err(e) => {
                log::debug!("Not opening tab: {}", e);
                return None;
            }
        };
        Some(self.open_location(location))
    }

    fn open_location(&mut self, location: Location) -> TabId {
        let index = self.registry.create_tab(&mut self.views, location.clone());
        self.address = Some(location);
        self.registry.tabs()[index].id
    }

    /// Opens a tab at the configured new-tab address.
    pub fn new_tab(&mut self) -> Option<TabId> {
        let url = self.settings.general.new_tab_url.clone();
        self.open_tab(&url)
    }

    pub fn close_tab(&mut self, tab_id: TabId) {
        match self.registry.close_by_id(&mut self.views, tab_id) {
            Ok(true) => self.show_active_address(),
            Ok(false) => {}
            Err(e) => log::debug!("Close ignored: {}", e),
        }
    }

    pub fn switch_tab(&mut self, tab_id: TabId) {
        match self.registry.switch_to_id(tab_id) {
            Ok(_) => self.show_active_address(),
            Err(e) => log::debug!("Switch ignored: {}", e),
        }
    }

    /// Navigates the view of the tab at `index` without recording a visit.
    fn replay(&mut self, index: usize, location: &Location) {
        let seq = self.next_seq();
        let Some(tab) = self.registry.tab_at_mut(index) else {
            return;
        };
        tab.last_seq = seq;
        tab.address = location.clone();
        self.views.navigate(tab.view, location, seq);

        if self.settings.navigation.optimistic_address && self.registry.active_index() == Some(index) {
            self.address = Some(location.clone());
        }
    }

    fn show_active_address(&mut self) {
        self.address = self.registry.active().map(|t| t.address.clone());
    }

    fn next_seq(&mut self) -> NavSeq {
        self.seq = self.seq.next();
        self.seq
    }

    pub fn displayed_address(&self) -> Option<&Location> {
        self.address.as_ref()
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.registry.active().map(|t| t.id)
    }

    pub fn views(&self) -> &V {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut V {
        &mut self.views
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ShellSettings) {
        self.settings = settings;
    }
}
