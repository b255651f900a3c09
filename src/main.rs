//! Singapore Environmental Dashboard - Service Entry Point
//!
//! A small read-only HTTP service that:
//! 1. Aggregates six data.gov.sg environment feeds per request
//! 2. Derives advisories (exercise, laundry, feels-like, activities)
//! 3. Serves three JSON endpoints plus the static dashboard page
//!
//! Nothing is persisted and nothing is cached — every request fetches
//! fresh upstream data and builds its snapshot from scratch.
//!
//! Usage:
//!   cargo run --release                   # defaults (port 5051)
//!   cargo run --release -- --port 8080    # custom port
//!   cargo run --release -- --config sgenv.toml

use sgenv_service::config;
use sgenv_service::endpoint;
use std::env;

fn main() {
    println!("🌤️  Singapore Environmental Dashboard");
    println!("=====================================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut port_override: Option<u16> = None;
    let mut config_path = "sgenv.toml".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                if i + 1 < args.len() {
                    port_override = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--port PORT] [--config PATH]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration (defaults when the file is absent)
    let mut service_config = match config::load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("\n❌ Configuration error: {}\n", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = port_override {
        service_config.port = port;
    }

    println!("   Upstream: {}", service_config.base_url);
    println!("   Fetch timeout: {}s per feed\n", service_config.fetch_timeout_secs);

    if let Err(e) = endpoint::start_endpoint_server(&service_config) {
        eprintln!("\n❌ Server error: {}\n", e);
        std::process::exit(1);
    }
}
