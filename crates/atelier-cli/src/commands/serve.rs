//! Server command implementation

use anyhow::Result;
use atelier_core::config::AtelierConfig;
use atelier_core::db::Database;
use atelier_server::ServerConfig;

pub async fn cmd_serve(
    db: Database,
    config: &AtelierConfig,
    host: &str,
    port: u16,
    no_auth: bool,
) -> Result<()> {
    println!("🚀 Starting Atelier web server...");
    println!("   Database: {}", db.path());
    println!("   Listening: http://{}:{}", host, port);

    // API keys come from config plus the environment (comma-separated)
    let mut api_keys = config.server.api_keys.clone();
    api_keys.extend(
        std::env::var("ATELIER_API_KEYS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    );

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if api_keys.is_empty() {
        println!("   🔒 Authentication: enabled, but no API keys configured");
        println!("      Set ATELIER_API_KEYS or add keys to the config file");
    } else {
        println!("   🔒 Authentication: {} API key(s)", api_keys.len());
    }

    let server_config = ServerConfig {
        require_auth: !no_auth && config.server.require_auth,
        allowed_origins: config.server.allowed_origins.clone(),
        api_keys,
    };

    atelier_server::serve(db, host, port, server_config).await
}
