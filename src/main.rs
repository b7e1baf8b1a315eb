//! tally - personal-finance overview for the terminal
//!
//! A tabbed demo application built around explicit screen navigation:
//! a route registry, an owned back-stack with single-top tab switching,
//! and deep links that bind path arguments to a detail screen.

mod config;
mod core;
mod frontend;
mod nav;
mod screens;
mod theme;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "tally")]
#[command(about = "Personal-finance overview with tab-based navigation", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.tally)
    /// Can also be set via TALLY_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Color theme for this session (dark, light, mint)
    #[arg(long)]
    theme: Option<String>,

    /// Deep link to open at startup (e.g. app://finance/account/checking)
    #[arg(long, value_name = "URI")]
    open: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route registry and screen wiring
    ValidateRoutes,
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("tally.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    // Handle subcommands
    if let Some(Commands::ValidateRoutes) = cli.command {
        return validate_routes();
    }

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("TALLY_DIR", data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var("TALLY_DIR") {
        tracing::info!("Using data directory from TALLY_DIR: {}", env_dir);
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => config::Config::load_from_path(config_path)?,
        None => config::Config::load()?,
    };
    if let Some(theme) = &cli.theme {
        config.active_theme = theme.clone();
    }

    run_tui(config, cli.open.as_deref())
}

/// Check the navigation graph the way the layout validator in a windowing
/// client would: every destination resolvable, every route wired to a
/// provider, tab row non-empty.
fn validate_routes() -> Result<()> {
    println!("Validating route registry");

    let registry = core::AppCore::build_registry();
    let screens = core::AppCore::build_screens();
    let mut errors = 0;

    println!("  {} destinations registered", registry.destinations().len());

    for destination in registry.destinations() {
        match registry.resolve(destination.route()) {
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ Error: {}", e);
                errors += 1;
            }
        }

        if screens.has_provider(destination.route()) {
            let args: Vec<&str> = destination.args().iter().map(|a| a.name.as_str()).collect();
            if args.is_empty() {
                println!("✓ {} ({})", destination.route(), destination.label);
            } else {
                println!(
                    "✓ {} ({}) args: {}",
                    destination.route(),
                    destination.label,
                    args.join(", ")
                );
            }
        } else {
            eprintln!("✗ Error: route '{}' has no screen provider", destination.route());
            errors += 1;
        }
    }

    if registry.tabs().is_empty() {
        eprintln!("✗ Error: tab row is empty");
        errors += 1;
    }
    if !registry.default_destination().show_in_tab_row {
        eprintln!(
            "✗ Error: default destination '{}' is not a tab",
            registry.default_destination().route()
        );
        errors += 1;
    }

    if errors > 0 {
        eprintln!("\n✗ Found {} error(s)", errors);
        std::process::exit(1);
    }

    println!("✓ Route registry is valid");
    Ok(())
}

/// Run the TUI frontend to completion
fn run_tui(config: config::Config, deep_link: Option<&str>) -> Result<()> {
    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);
    let mut app_core = core::AppCore::new(config)?;

    // Startup deep link, before the terminal is taken over so failures
    // print normally
    if let Some(uri) = deep_link {
        app_core
            .open_deep_link(uri)
            .with_context(|| format!("Cannot open deep link '{}'", uri))?;
    }

    let mut frontend = TuiFrontend::new(poll_timeout)?;
    let (width, height) = frontend.size();
    tracing::info!("terminal size {}x{}", width, height);

    let result = event_loop(&mut app_core, &mut frontend);

    // Always restore the terminal, even when the loop failed
    if let Err(e) = frontend.cleanup() {
        tracing::error!("Failed to restore terminal: {}", e);
    }
    result
}

/// Main event loop: render when dirty, poll, route input, react.
///
/// All navigation is synchronous; each event is processed to completion
/// before the next one is read.
fn event_loop(app_core: &mut core::AppCore, frontend: &mut TuiFrontend) -> Result<()> {
    while app_core.running {
        if app_core.needs_render {
            frontend.render(app_core)?;
            app_core.needs_render = false;
        }

        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Key { code, modifiers } => {
                    let action = core::input_router::route_key(code, modifiers);
                    app_core.handle_action(action)?;
                }
                FrontendEvent::Resize { .. } => {
                    app_core.needs_render = true;
                }
            }
        }

        app_core.drain_nav_changes();
    }
    Ok(())
}
