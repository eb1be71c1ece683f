//! Tabshell RPC Server: JSON-RPC over stdin/stdout for a front-end host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"nav.load", "params":{"url":"example.com"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; set `RUST_LOG` to change the level.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use tabshell::app::App;
use tabshell::rpc_handler::handle_method;

use serde_json::{json, Value};

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config_path = std::env::var("TABSHELL_CONFIG").ok();
    let mut app = match App::new(config_path) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Failed to initialize Tabshell: {}", e);
            std::process::exit(1);
        }
    };

    // The seed tab's view has to be created by the front end before anything else.
    let startup = serde_json::to_value(app.take_commands()).unwrap_or(Value::Null);
    let app = Mutex::new(app);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    send(
        &mut out,
        &json!({"event":"ready","version":env!("CARGO_PKG_VERSION"),"commands":startup}),
    )?;

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                send(&mut out, &json!({"id":null,"error":format!("parse error: {}",e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            log::warn!("Rate limit exceeded");
            send(&mut out, &json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                log::debug!("{} failed: {}", method, err);
                json!({"id": id, "error": err})
            }
        };
        send(&mut out, &response)?;
    }

    Ok(())
}
