use tabshell::managers::navigation_history::NavigationHistory;
use tabshell::types::errors::HistoryError;
use tabshell::types::location::Location;

fn loc(s: &str) -> Location {
    Location::parse(s).unwrap()
}

fn history_of(urls: &[&str]) -> NavigationHistory {
    let mut history = NavigationHistory::new();
    for url in urls {
        history.record_visit(loc(url));
    }
    history
}

#[test]
fn test_record_visit_moves_to_end() {
    let mut history = NavigationHistory::new();
    assert_eq!(history.record_visit(loc("a.com")), 0);
    assert_eq!(history.record_visit(loc("b.com")), 1);
    assert_eq!(history.position(), Some(1));
    assert_eq!(history.current_location(), Some(&loc("b.com")));
}

#[test]
fn test_record_after_back_discards_redo_branch() {
    let mut history = history_of(&["a.com", "b.com", "c.com"]);
    assert_eq!(history.go_back().unwrap(), &loc("b.com"));
    assert_eq!(history.position(), Some(1));

    history.record_visit(loc("d.com"));
    assert_eq!(
        history.entries(),
        &[loc("a.com"), loc("b.com"), loc("d.com")]
    );
    assert_eq!(history.position(), Some(2));
    assert!(!history.can_go_forward());
}

#[test]
fn test_record_after_jump_discards_redo_branch() {
    let mut history = history_of(&["a.com", "b.com", "c.com"]);
    history.jump_to(0).unwrap();
    history.record_visit(loc("z.com"));
    assert_eq!(history.entries(), &[loc("a.com"), loc("z.com")]);
}

#[test]
fn test_back_at_start_is_noop() {
    let mut history = history_of(&["a.com", "b.com"]);
    history.go_back().unwrap();
    let before = history.clone();

    assert_eq!(history.go_back(), Err(HistoryError::AtBoundary));
    assert_eq!(history, before);
}

#[test]
fn test_forward_at_end_is_noop() {
    let mut history = history_of(&["a.com", "b.com"]);
    let before = history.clone();

    assert_eq!(history.go_forward(), Err(HistoryError::AtBoundary));
    assert_eq!(history, before);
}

#[test]
fn test_forward_then_back_restores_position() {
    let mut history = history_of(&["a.com", "b.com", "c.com"]);
    history.jump_to(1).unwrap();

    history.go_forward().unwrap();
    let back = history.go_back().unwrap().clone();
    assert_eq!(back, loc("b.com"));
    assert_eq!(history.position(), Some(1));
}

#[test]
fn test_can_go_predicates() {
    let mut history = history_of(&["a.com"]);
    assert!(!history.can_go_back());
    assert!(!history.can_go_forward());

    history.record_visit(loc("b.com"));
    assert!(history.can_go_back());
    assert!(!history.can_go_forward());

    history.go_back().unwrap();
    assert!(!history.can_go_back());
    assert!(history.can_go_forward());
}

#[test]
fn test_jump_to_returns_entry() {
    let mut history = history_of(&["a.com", "b.com", "c.com"]);
    assert_eq!(history.jump_to(1).unwrap(), &loc("b.com"));
    assert_eq!(history.len(), 3);
    assert!(!history.is_empty());
}
