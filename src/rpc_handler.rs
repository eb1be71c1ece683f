//! RPC method handler for the Tabshell JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` turns each call into a `ShellEvent`, runs it through the
//! `App`, and answers with the resulting address bar state plus the view and
//! host commands the front end must now carry out.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::tab_registry::TabRegistryTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::location::Location;
use crate::types::navigation::{HostState, NavSeq, ShellCommand, ShellEvent};
use crate::types::tab::TabId;

use serde_json::{json, Value};

fn tab_id_param(params: &Value, key: &str) -> Result<TabId, String> {
    let raw = params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))?;
    TabId::parse(raw).ok_or_else(|| format!("invalid tab id: {}", raw))
}

/// Address bar, active tab and the commands produced by the last event.
fn outcome(app: &App, commands: Vec<ShellCommand>) -> Result<Value, String> {
    let commands = serde_json::to_value(commands).map_err(|e| e.to_string())?;
    Ok(json!({
        "address": app.controller.displayed_address().map(|l| l.as_str()),
        "active": app.controller.active_tab_id().map(|id| id.to_string()),
        "commands": commands,
    }))
}

fn tab_list(app: &App) -> Value {
    let registry = app.controller.registry();
    let tabs: Vec<Value> = registry
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, t)| {
            json!({
                "id": t.id.to_string(),
                "index": index,
                "active": registry.active_index() == Some(index),
                "address": t.address.as_str(),
                "position": t.history.position(),
                "entries": t.history.entries(),
                "can_go_back": t.history.can_go_back(),
                "can_go_forward": t.history.can_go_forward(),
            })
        })
        .collect();
    json!(tabs)
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Navigation ───
        "nav.load" => {
            let url = params
                .get("url")
                .and_then(|v| v.as_str())
                .filter(|s| !s.trim().is_empty())
                .ok_or("missing url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let commands = a.handle(ShellEvent::Load(url.to_string()));
            outcome(&a, commands)
        }
        "nav.back" | "nav.forward" | "nav.refresh" => {
            let event = match method {
                "nav.back" => ShellEvent::Back,
                "nav.forward" => ShellEvent::Forward,
                _ => ShellEvent::Refresh,
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let commands = a.handle(event);
            outcome(&a, commands)
        }

        // ─── Tabs ───
        "tab.new" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let commands = a.handle(ShellEvent::NewTab);
            let mut result = outcome(&a, commands)?;
            result["tab"] = json!(a.controller.active_tab_id().map(|id| id.to_string()));
            Ok(result)
        }
        "tab.close" | "tab.switch" => {
            let id = tab_id_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.controller
                .registry()
                .index_of(id)
                .map_err(|e| e.to_string())?;
            let event = if method == "tab.close" {
                ShellEvent::CloseTab(id)
            } else {
                ShellEvent::SwitchTab(id)
            };
            let commands = a.handle(event);
            outcome(&a, commands)
        }
        "tab.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(tab_list(&a))
        }

        // ─── Collaborator events ───
        "view.loaded" => {
            let id = tab_id_param(params, "tab")?;
            let seq = params.get("seq").and_then(|v| v.as_u64()).map(NavSeq);
            let resolved = params
                .get("resolved")
                .and_then(|v| v.as_str())
                .map(Location::from_resolved);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let view = a
                .controller
                .registry()
                .get(id)
                .map(|t| t.view)
                .ok_or_else(|| format!("Tab not found: {}", id))?;
            a.controller
                .views_mut()
                .report_resolved(view, resolved)
                .map_err(|e| e.to_string())?;
            let commands = a.handle(ShellEvent::ViewLoadCompleted { tab: id, seq });
            outcome(&a, commands)
        }
        "host.pop" => {
            let state: Option<HostState> = match params.get("state") {
                None | Some(Value::Null) => None,
                Some(v) => Some(
                    serde_json::from_value(v.clone())
                        .map_err(|e| format!("invalid state: {}", e))?,
                ),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let commands = a.handle(ShellEvent::HostPop(state));
            outcome(&a, commands)
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            a.apply_settings();
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.apply_settings();
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
