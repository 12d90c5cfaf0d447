//! deviceprobe entry point.

mod config;

use deviceprobe::{PlatformHost, collect};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting deviceprobe");

    let config = config::Config::load()?;
    let host = PlatformHost::new(&config.host_config());

    let mut attrs = collect(&host);
    attrs.device_name = config.name.clone();

    tracing::info!(
        runtime = %attrs.runtime,
        detail = %attrs.runtime_detail,
        cpu_cores = attrs.cpu_cores,
        "device attributes collected"
    );

    let json = if config.pretty {
        serde_json::to_string_pretty(&attrs)?
    } else {
        serde_json::to_string(&attrs)?
    };
    println!("{json}");
    Ok(())
}
