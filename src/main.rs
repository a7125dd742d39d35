use kids_gaming_site::config::Config;
use kids_gaming_site::dom::Document;
use kids_gaming_site::site::{Site, SiteConfig};
use std::env;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/site.yaml";

/// Returns the value of the first `--name=value` argument.
fn parse_arg(prefix: &str) -> Option<String> {
    env::args()
        .skip(1)
        .find_map(|arg| arg.strip_prefix(prefix).map(str::to_string))
}

/// Installs the fmt subscriber. RUST_LOG wins over the configured level.
fn init_tracing(log_level: Option<&str>) {
    let level = match log_level.map(str::to_ascii_lowercase).as_deref() {
        Some("warning") => Level::WARN,
        Some(other) => other.parse().unwrap_or(Level::INFO),
        None => Level::INFO,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    let config_path = parse_arg("--config=").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    if let Some(ticks) = parse_arg("--ticks=").and_then(|t| t.parse().ok()) {
        config.countdown.max_ticks = Some(ticks);
    }

    init_tracing(config.app.log_level.as_deref());

    let site = match Site::new(SiteConfig {
        app_config: config,
        document: Document::landing_page(),
    }) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("Failed to create site: {}", e);
            return;
        }
    };

    info!(config = %config_path, "Site initialized");

    if let Err(e) = site.start().await {
        error!(error = %e, "Site error");
        return;
    }

    write_snapshot(&site, parse_arg("--snapshot=")).await;
    if let Some(path) = parse_arg("--html=") {
        write_html(&site, &path).await;
    }

    tokio::select! {
        result = site.wait() => match result {
            Ok(summary) => info!(ticks = summary.ticks, phase = ?summary.phase, "Countdown ended"),
            Err(e) => error!(error = %e, "Countdown error"),
        },
        _ = tokio::signal::ctrl_c() => {
            site.stop().await;
        }
    }
}

/// Writes the rendered page as static HTML.
async fn write_html(site: &Site, path: &str) {
    let html = site.document().lock().await.to_html();
    match tokio::fs::write(path, html).await {
        Ok(()) => info!(path = %path, "Page HTML written"),
        Err(e) => error!(path = %path, error = %e, "Failed to write page HTML"),
    }
}

/// Prints the rendered page as JSON, or writes it to `path`.
async fn write_snapshot(site: &Site, path: Option<String>) {
    let json = {
        let document = site.document();
        let document = document.lock().await;
        serde_json::to_string_pretty(&*document)
    };

    let json = match json {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Failed to serialize page");
            return;
        }
    };

    match path {
        Some(path) => match tokio::fs::write(&path, json).await {
            Ok(()) => info!(path = %path, "Page snapshot written"),
            Err(e) => error!(path = %path, error = %e, "Failed to write page snapshot"),
        },
        None => println!("{}", json),
    }
}
