//! Pingboard - live ICMP latency board
//!
//! Probes every host listed in a targets file and keeps a terminal view of
//! the latest round-trip time per host until `q` or a termination signal.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use pingboard::app::App;
use pingboard::config::Cli;
use pingboard::event::EventHandler;
use pingboard::probe::IcmpPinger;
use pingboard::{target, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up error handling
    terminal::install_hooks()?;

    let cli = Cli::parse();
    setup_logging(cli.log_file.as_deref())?;

    // An unreadable targets file aborts before anything is probed
    let targets = target::load(&cli.targets)?;
    let config = cli.app_config();

    let mut tui = terminal::setup()?;

    let mut app = App::start(config.clone(), targets, Arc::new(IcmpPinger::new()));
    let mut events = EventHandler::new(config.refresh);
    let cancel = app.monitor().cancellation_token().clone();
    events.spawn_input(cancel.clone());
    events.spawn_signals(cancel);

    let result = app.run(&mut tui, &mut events).await;
    if result.is_err() {
        app.shutdown().await;
    }

    terminal::restore()?;
    result
}

fn setup_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);

    // stdout belongs to the terminal view
    match log_file {
        Some(path) => builder.with_writer(Mutex::new(File::create(path)?)).init(),
        None => builder.with_writer(io::sink).init(),
    }

    Ok(())
}
