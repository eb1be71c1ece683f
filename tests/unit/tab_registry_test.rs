use tabshell::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use tabshell::services::command_log::CommandLog;
use tabshell::services::content_view::RecordingView;
use tabshell::types::errors::RegistryError;
use tabshell::types::location::Location;
use tabshell::types::tab::TabId;

fn loc(s: &str) -> Location {
    Location::parse(s).unwrap()
}

fn registry_with(count: usize) -> (TabRegistry, RecordingView) {
    let mut views = RecordingView::new(CommandLog::new());
    let mut registry = TabRegistry::new();
    for i in 0..count {
        registry.create_tab(&mut views, loc(&format!("site{}.com", i)));
    }
    (registry, views)
}

#[test]
fn test_empty_registry_has_no_active() {
    let registry = TabRegistry::new();
    assert!(registry.active().is_none());
    assert_eq!(registry.active_index(), None);
    assert_eq!(registry.tab_count(), 0);
}

#[test]
fn test_create_tab_activates_and_records_first_visit() {
    let (mut registry, mut views) = registry_with(1);
    let index = registry.create_tab(&mut views, loc("about:blank"));

    assert_eq!(index, 1);
    assert_eq!(registry.active_index(), Some(1));
    let tab = registry.active().unwrap();
    assert_eq!(tab.history.entries(), &[loc("about:blank")]);
    assert_eq!(tab.history.position(), Some(0));
    assert!(views.is_live(tab.view));
}

#[test]
fn test_create_tab_returns_unique_ids() {
    let (registry, _views) = registry_with(3);
    let ids: Vec<TabId> = registry.tabs().iter().map(|t| t.id).collect();
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_close_sole_tab_is_noop() {
    let (mut registry, mut views) = registry_with(1);
    let id = registry.id_at(0).unwrap();

    assert!(!registry.close_tab(&mut views, 0));
    assert_eq!(registry.tab_count(), 1);
    assert_eq!(registry.active_index(), Some(0));
    assert_eq!(registry.id_at(0), Some(id));
    assert_eq!(views.live_count(), 1);
}

#[test]
fn test_close_before_active_shifts_active_down() {
    let (mut registry, mut views) = registry_with(3);
    registry.switch_to(2);
    let active_id = registry.id_at(2).unwrap();

    assert!(registry.close_tab(&mut views, 0));
    assert_eq!(registry.active_index(), Some(1));
    assert_eq!(registry.active().unwrap().id, active_id);
}

#[test]
fn test_close_after_active_keeps_active() {
    let (mut registry, mut views) = registry_with(3);
    registry.switch_to(0);

    registry.close_tab(&mut views, 2);
    assert_eq!(registry.active_index(), Some(0));
    assert_eq!(registry.tab_count(), 2);
}

#[test]
fn test_close_active_selects_previous() {
    let (mut registry, mut views) = registry_with(3);
    registry.switch_to(1);
    let previous = registry.id_at(0).unwrap();

    registry.close_tab(&mut views, 1);
    assert_eq!(registry.active_index(), Some(0));
    assert_eq!(registry.active().unwrap().id, previous);
}

#[test]
fn test_close_active_first_selects_new_first() {
    let (mut registry, mut views) = registry_with(3);
    registry.switch_to(0);
    let next = registry.id_at(1).unwrap();

    registry.close_tab(&mut views, 0);
    assert_eq!(registry.active_index(), Some(0));
    assert_eq!(registry.active().unwrap().id, next);
}

#[test]
fn test_close_releases_view() {
    let (mut registry, mut views) = registry_with(2);
    let view = registry.tabs()[0].view;

    registry.close_tab(&mut views, 0);
    assert!(!views.is_live(view));
    assert_eq!(views.live_count(), 1);
}

#[test]
fn test_ids_survive_renumbering() {
    let (mut registry, mut views) = registry_with(3);
    let last = registry.id_at(2).unwrap();

    registry.close_tab(&mut views, 0);
    assert_eq!(registry.index_of(last), Ok(1));
    assert!(registry.get(last).is_some());
}

#[test]
fn test_stale_id_is_reported() {
    let (mut registry, mut views) = registry_with(2);
    let closed = registry.id_at(0).unwrap();
    registry.close_tab(&mut views, 0);

    assert!(matches!(registry.index_of(closed), Err(RegistryError::UnknownTab(_))));
    assert!(registry.switch_to_id(closed).is_err());
    assert!(registry.close_by_id(&mut views, closed).is_err());
}

#[test]
fn test_switch_to_id() {
    let (mut registry, _views) = registry_with(3);
    let first = registry.id_at(0).unwrap();

    assert_eq!(registry.switch_to_id(first), Ok(0));
    assert!(registry.is_active(first));
}

#[test]
#[should_panic]
fn test_switch_out_of_range_panics() {
    let (mut registry, _views) = registry_with(2);
    registry.switch_to(5);
}

#[test]
#[should_panic]
fn test_close_out_of_range_panics() {
    let (mut registry, mut views) = registry_with(2);
    registry.close_tab(&mut views, 7);
}
