//! warden - Straylight channel warden.
//!
//! Usage: `warden [--debug] [config.toml]`

use slirc_warden::config::{self, Config, TomlFileStore};
use slirc_warden::network;
use slirc_warden::router::Router;
use slirc_warden::telemetry;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut debug = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-d" | "--debug" => debug = true,
            _ => config_path = Some(arg),
        }
    }
    let config_path = config_path.unwrap_or_else(|| "warden.toml".to_string());

    telemetry::init(debug);

    // Load configuration
    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(path = %config_path, "{e}");
        }
        anyhow::bail!("{} configuration error(s) in {config_path}", errors.len());
    }

    info!(
        nick = %config.identity.nick,
        server = %config.server.address,
        channels = config.channels.len(),
        "Starting warden"
    );

    let store = TomlFileStore::new(&config_path);
    let mut router = Router::new(config, Box::new(store))?;

    network::run(&mut router).await?;

    info!("Session ended");
    Ok(())
}
