//! SalonTUI - Main entry point
//!
//! Runs the interactive TUI by default, or one of the headless subcommands.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use salontui::app::App;
use salontui::cli::{Cli, Commands};
use salontui::discovery::search_salons;
use salontui::logging;
use salontui::preferences::Preferences;
use salontui::pricing::{format_rupees, quote, Quote, TAX_RATE_PERCENT};
use salontui::routes::Route;
use std::io::stdout;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Some(command) => {
            logging::init_stderr_logger(cli.verbose)?;
            debug!("CLI arguments parsed");
            if let Err(e) = run_command(command) {
                error!("Command failed: {:#}", e);
                eprintln!("✗ {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
            logging::init_file_logger(&log_path, cli.verbose)?;
            info!("SalonTUI starting up");
            let prefs_path = cli.prefs.unwrap_or_else(Preferences::default_path);
            run_tui(prefs_path)?;
        }
    }

    Ok(())
}

/// Run a headless subcommand, printing its result to stdout
fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Search { query } => {
            info!(query = %query, "Searching salons");
            let results = search_salons(&query);
            if let Some(message) = results.empty_message() {
                println!("{}", message);
                return Ok(());
            }
            for salon in results.salons() {
                println!(
                    "{:<4} {:<26} {:<36} ★ {:.1}{}",
                    salon.id,
                    salon.name,
                    salon.address,
                    salon.rating,
                    salon.offer.map(|o| format!("  [{}]", o)).unwrap_or_default()
                );
            }
        }
        Commands::Quote { artist, services } => {
            info!(artist = %artist, services = services.len(), "Pricing services");
            match quote(&artist, services.as_slice()).context("Failed to price booking")? {
                Quote::Ready {
                    artist_name,
                    breakdown,
                } => {
                    println!("{}", artist_name);
                    println!("  {:<14}{:>8}", "Subtotal", format_rupees(breakdown.subtotal));
                    println!("  {:<14}{:>8}", "Travel fee", format_rupees(breakdown.travel_fee));
                    println!(
                        "  {:<14}{:>8}",
                        format!("GST ({}%)", TAX_RATE_PERCENT),
                        format_rupees(breakdown.tax)
                    );
                    println!("  {:<14}{:>8}", "Total", format_rupees(breakdown.total));
                }
                Quote::BelowMinimum {
                    artist_name,
                    total,
                    minimum,
                    missing,
                } => {
                    println!(
                        "{}: cart total {} is below the minimum booking of {}. Add {} more.",
                        artist_name,
                        format_rupees(total),
                        format_rupees(u64::from(minimum)),
                        format_rupees(missing)
                    );
                }
            }
        }
        Commands::Route { path } => {
            let route = Route::parse(&path);
            let nav = if route.shows_bottom_nav() {
                "bottom nav shown"
            } else {
                "bottom nav hidden"
            };
            println!("{} -> {} ({})", path, route.title(), nav);
        }
    }
    Ok(())
}

/// Run the interactive TUI
fn run_tui(prefs_path: PathBuf) -> Result<()> {
    debug!("Initializing terminal for TUI mode");
    let preferences = Preferences::load(&prefs_path);

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(preferences);
            app.run(&mut terminal)
        });

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(e) = &result {
        error!("TUI exited with error: {:#}", e);
    } else {
        info!("SalonTUI shut down cleanly");
    }
    result
}
