//! Run the connectivity check once, without a UI, and print the view a
//! dashboard would show.
//!
//! Exit status is 0 when connected, 1 for network-down, 2 for backend-down
//! and 3 when the backend environment is not configured.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ride_core::config::{
    load_env_files, StoreConfig, ENV_ACCESS_KEY, ENV_BACKEND_URL, ENV_PROBE_URL,
    ENV_REQUEST_TIMEOUT_SECS,
};
use ride_core::connectivity::{ConnectivityGate, GateView, HttpReachabilityProbe};
use ride_core::store::RestRideStore;

#[derive(Parser)]
#[command(
    name = "probe",
    about = "Check network and backend reachability the way the dashboards do"
)]
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
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Ok(cwd) = std::env::current_dir() {
        if let Err(error) = load_env_files(&cwd) {
            tracing::warn!(%error, "ignoring unreadable environment file");
        }
    }

    let cli = Cli::parse();
    let config = match StoreConfig::from_env_with_overrides(&[
        (ENV_BACKEND_URL, cli.backend_url.as_deref()),
        (ENV_ACCESS_KEY, cli.access_key.as_deref()),
        (ENV_PROBE_URL, cli.probe_url.as_deref()),
        (ENV_REQUEST_TIMEOUT_SECS, cli.timeout_secs.as_deref()),
    ]) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            println!("misconfigured: {error}");
            return ExitCode::from(3);
        }
    };

    if let Some(error) = config.misconfiguration() {
        tracing::error!(%error, "cannot check backend");
        println!("misconfigured: {}", error.user_message());
        return ExitCode::from(3);
    }

    let network = match HttpReachabilityProbe::new(&config.probe_url, config.request_timeout) {
        Ok(probe) => probe,
        Err(error) => {
            tracing::error!(%error, "failed to build network probe");
            return ExitCode::from(1);
        }
    };
    let backend = match RestRideStore::new(&config) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, "failed to build backend client");
            return ExitCode::from(2);
        }
    };

    let mut gate = ConnectivityGate::new();
    gate.run(&network, &backend);
    let view = gate.view();
    println!("{}: {}", view.title(), view.message());

    match view {
        GateView::Connected => ExitCode::SUCCESS,
        GateView::NetworkDown | GateView::Checking => ExitCode::from(1),
        GateView::BackendDown => ExitCode::from(2),
    }
}
