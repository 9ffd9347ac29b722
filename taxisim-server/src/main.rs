//! TaxiSim server - HTTP front end for the dispatch simulator.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use taxisim::config::Settings;
use taxisim::fleet::shared_store;
use taxisim::logging::init_logging;
use taxisim::runtime::Simulation;

mod api;

#[derive(Parser)]
#[command(name = "taxisim-server")]
#[command(about = "Toy taxi dispatch simulation server", long_about = None)]
#[command(version = taxisim::VERSION)]
struct Args {
    /// Path to the INI configuration file
    #[arg(long, default_value = "taxisim.ini")]
    config: PathBuf,

    /// TCP port to listen on (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Dispatch tick interval in seconds (overrides the config file)
    #[arg(long)]
    tick_interval: Option<u64>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut settings = match Settings::load_from(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(secs) = args.tick_interval {
        settings.simulation.tick_interval_secs = secs;
    }

    let _logging_guard = match init_logging(&settings.logging.directory, &settings.logging.file)
    {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initializing logging: {}", e);
            process::exit(1);
        }
    };

    let store = shared_store();
    let simulation = Simulation::new(Arc::clone(&store)).with_tick_interval(
        Duration::from_secs(settings.simulation.tick_interval_secs),
    );

    let state = Arc::new(api::AppState {
        store,
        simulation,
        simulation_speed: settings.simulation.simulation_speed,
        max_taxis: settings.simulation.max_taxis,
    });
    let app = api::router(Arc::clone(&state));

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!(%addr, version = taxisim::VERSION, "Starting taxisim server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error binding {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
    {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}

/// Waits for ctrl-c, then stops the dispatch daemon before the server
/// drains in-flight requests.
async fn shutdown_signal(state: Arc<api::AppState>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, stopping simulation");
    state.simulation.shutdown().await;
}
