mod app;
mod ui;

use clap::Parser;

use ride_core::config::{
    load_env_files, StoreConfig, ENV_ACCESS_KEY, ENV_BACKEND_URL, ENV_PROBE_URL,
    ENV_REQUEST_TIMEOUT_SECS,
};

#[derive(Parser)]
#[command(name = "ride_ui", about = "RideConnect desktop front end")]
struct Cli {
    /// Backend base URL [env: SUPABASE_URL or NEXT_PUBLIC_SUPABASE_URL]
    #[arg(long)]
    backend_url: Option<String>,
    /// Backend access (anon) key [env: SUPABASE_ANON_KEY or NEXT_PUBLIC_SUPABASE_ANON_KEY]
    #[arg(long)]
    access_key: Option<String>,
    /// URL fetched to test general network reachability [default: https://www.google.com]
    #[arg(long, env = ENV_PROBE_URL)]
    probe_url: Option<String>,
    /// Per-request timeout in seconds; unbounded when omitted
    #[arg(long, env = ENV_REQUEST_TIMEOUT_SECS)]
    timeout_secs: Option<String>,
    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> eframe::Result<()> {
    // Env files must be loaded before parsing so clap sees their values.
    let loaded = std::env::current_dir()
        .map_err(|error| error.to_string())
        .and_then(|cwd| load_env_files(&cwd).map_err(|error| error.to_string()));

    let cli = Cli::parse();
    ui::app_shell::init_tracing(&cli.log);
    match loaded {
        Ok(files) => {
            for file in files {
                tracing::info!(path = %file.display(), "loaded environment file");
            }
        }
        Err(error) => tracing::warn!(%error, "ignoring unreadable environment file"),
    }

    let config = match StoreConfig::from_env_with_overrides(&[
        (ENV_BACKEND_URL, cli.backend_url.as_deref()),
        (ENV_ACCESS_KEY, cli.access_key.as_deref()),
        (ENV_PROBE_URL, cli.probe_url.as_deref()),
        (ENV_REQUEST_TIMEOUT_SECS, cli.timeout_secs.as_deref()),
    ]) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            eprintln!("ride_ui: {error}");
            std::process::exit(2);
        }
    };

    ui::app_shell::run(config)
}
