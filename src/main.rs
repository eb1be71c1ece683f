//! Tabshell: a minimal multi-tab browser shell.
//!
//! Console demo: drives the navigation controller through a short browsing
//! session and prints what the front end would be told to do at each step.

use tabshell::app::App;
use tabshell::managers::tab_registry::TabRegistryTrait;
use tabshell::types::navigation::{ShellCommand, ShellEvent};

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_commands(commands: &[ShellCommand]) {
    for command in commands {
        match command {
            ShellCommand::CreateView { view, location } => {
                println!("  view {:>2} create   {}", view.0, location)
            }
            ShellCommand::Navigate { view, location, seq } => {
                println!("  view {:>2} navigate {} (seq {})", view.0, location, seq.0)
            }
            ShellCommand::DestroyView { view } => println!("  view {:>2} destroy", view.0),
            ShellCommand::PushEntry { state, path } => {
                println!("  host push    [{}:{}] {}", state.tab_index, state.index, path)
            }
            ShellCommand::ReplaceEntry { state, path } => {
                println!("  host replace [{}:{}] {}", state.tab_index, state.index, path)
            }
        }
    }
}

fn print_state(app: &App) {
    let registry = app.controller.registry();
    for (index, tab) in registry.tabs().iter().enumerate() {
        let marker = if registry.active_index() == Some(index) { "*" } else { " " };
        let entries: Vec<&str> = tab.history.entries().iter().map(|l| l.as_str()).collect();
        println!(
            "  {} tab {} @{:?} {:?}",
            marker,
            index,
            tab.history.position(),
            entries
        );
    }
    println!(
        "  address: {}",
        app.controller
            .displayed_address()
            .map(|l| l.as_str())
            .unwrap_or("")
    );
    println!();
}

fn step(app: &mut App, label: &str, event: ShellEvent) {
    section(label);
    let commands = app.handle(event);
    print_commands(&commands);
    print_state(app);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Tabshell v{} demo", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = match App::new(std::env::var("TABSHELL_CONFIG").ok()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to initialize Tabshell: {}", e);
            std::process::exit(1);
        }
    };

    section("Startup");
    let startup = app.take_commands();
    print_commands(&startup);
    print_state(&app);

    step(&mut app, "New tab", ShellEvent::NewTab);
    step(&mut app, "Load site.com", ShellEvent::Load("site.com".to_string()));
    step(&mut app, "Back", ShellEvent::Back);
    step(&mut app, "Back again (at boundary)", ShellEvent::Back);

    if let Some(first) = app.controller.registry().id_at(0) {
        step(&mut app, "Close tab 0", ShellEvent::CloseTab(first));
    }
    step(&mut app, "Forward", ShellEvent::Forward);
    step(&mut app, "Refresh", ShellEvent::Refresh);
}
