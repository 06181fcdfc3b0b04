use frontier_sssp::web::server::{start_server_with_config, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port and static directory from the command line
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        port: args.get(1).and_then(|p| p.parse().ok()).unwrap_or(defaults.port),
        static_dir: args.get(2).cloned().unwrap_or(defaults.static_dir),
        ..ServerConfig::default()
    };

    info!(
        "starting web server: port {}, static files {}, cors {}, max sessions {}",
        config.port, config.static_dir, config.enable_cors, config.max_sessions
    );

    start_server_with_config(config).await
}
