//! Process entry point.
//!
//! # Responsibility
//! - Own the storage lifecycle: build it, seed it, inject it into the handlers.
//! - Serve line-oriented requests from stdin for local use and smoke checks.
//!
//! Input lines are `METHOD PATH [JSON]`, e.g.
//! `POST /api/newsletter {"firstName":"Ada","lastName":"L","email":"a@x.com","consent":true}`.
//! Each response is printed as `<status> <json>`. `ping` prints `pong`.

use log::{info, warn};
use nutrition_api::{Api, ApiConfig, ApiRequest, ApiResponse, Method};
use nutrition_core::{init_logging, seed_testimonials, MemStorage, Storage};
use serde_json::Value;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let config = ApiConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref() {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }
    info!("event=config_loaded module=cli status=ok {}", config.summary());

    let storage = MemStorage::new();
    let seeded = seed_testimonials(&storage);
    info!(
        "event=storage_ready module=cli status=ok seeded_reviews={} core_version={}",
        seeded.len(),
        nutrition_core::core_version()
    );
    let api = Api::new(storage, &config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("ping") {
            writeln!(stdout, "{}", nutrition_core::ping())?;
            continue;
        }

        let response = match parse_request(line) {
            Ok(request) => api.handle(&request),
            Err(message) => {
                warn!("event=request_parse module=cli status=error");
                ApiResponse::message(400, message)
            }
        };
        writeln!(stdout, "{} {}", response.status, response.body)?;
        stdout.flush()?;
    }

    info!(
        "event=process_exit module=cli status=ok reviews={}",
        api.service().storage().get_all_reviews(false).len()
    );
    Ok(())
}

fn parse_request(line: &str) -> Result<ApiRequest, String> {
    let mut parts = line.splitn(3, char::is_whitespace);
    let method: Method = parts
        .next()
        .ok_or_else(|| "missing method".to_string())?
        .parse()?;
    let path = parts
        .next()
        .filter(|path| path.starts_with('/'))
        .ok_or_else(|| "missing path".to_string())?;
    let body = match parts.next().map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => serde_json::from_str(raw).map_err(|err| format!("invalid JSON body: {err}"))?,
        None => Value::Null,
    };

    Ok(ApiRequest {
        method,
        path: path.to_string(),
        body,
        attachments: Vec::new(),
    })
}
