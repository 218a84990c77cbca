//! Pick'n GO - Main entry point
//!
//! Parses the command line, sets up logging and signal handling, then either
//! runs a one-shot command or opens the storefront in the terminal.

use anyhow::{Context, Result, anyhow};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use pickngo::app::App;
use pickngo::carousel::MotionSignal;
use pickngo::cli::{Cli, Commands};
use pickngo::config_file::SiteConfig;
use pickngo::signals::{self, ShutdownFlag};
use pickngo::{content, links};

/// Initialize tracing.
///
/// The TUI owns the terminal, so full logs only go to `log_file`. Without
/// one, warnings and errors still reach stderr.
fn init_tracing(log_file: Option<&Path>, debug: bool) -> Result<()> {
    let default_level = match (log_file, debug) {
        (_, true) => "debug",
        (Some(_), false) => "info",
        (None, false) => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(debug)
                .try_init()
                .map_err(|err| anyhow!(err))
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(debug)
            .compact()
            .try_init()
            .map_err(|err| anyhow!(err)),
    }
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.log_file.as_deref(), cli.debug)?;
    info!("Pick'n GO starting up");
    debug!("CLI arguments parsed: {:?}", cli);

    match &cli.command {
        Some(Commands::Validate { file }) => validate_config(file),
        Some(Commands::Links) => print_links(&cli),
        Some(Commands::SaveConfig { file }) => save_config(&cli, file),
        Some(Commands::Run) | None => {
            info!("Launching storefront");
            run_tui(&cli)
        }
    }
}

/// Load and validate a configuration file, exiting non-zero on failure
fn validate_config(path: &Path) -> Result<()> {
    info!("Validating configuration file: {}", path.display());
    let config = match SiteConfig::load_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration file: {:#}", e);
            eprintln!("✗ Failed to load configuration file: {:#}", e);
            std::process::exit(1);
        }
    };
    match config.validate() {
        Ok(()) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Write the effective configuration so it can be edited and passed back
fn save_config(cli: &Cli, path: &Path) -> Result<()> {
    let config = cli.site_config()?;
    config.save_to_file(path)?;
    info!("Configuration saved to {}", path.display());
    println!("✓ Configuration saved to {}", path.display());
    Ok(())
}

/// Print every link the page can follow
fn print_links(cli: &Cli) -> Result<()> {
    let config = cli.site_config()?;
    for item in content::menu_items() {
        println!("{:<24} {}", item.label, links::resolve(&item.target, &config.whatsapp));
    }
    for (label, target) in [
        (content::PRIMARY_CTA, pickngo::FocusTarget::PrimaryCta),
        (content::SECONDARY_CTA, pickngo::FocusTarget::SecondaryCta),
        (content::ALLERGY_FREE_LINK, pickngo::FocusTarget::AllergyFreeLink),
    ] {
        if let Some(link) = links::for_control(target) {
            println!(
                "{:<24} {}",
                label,
                links::resolve(&link, &config.whatsapp)
            );
        }
    }
    Ok(())
}

/// Platform motion preference: an explicit setting wins over the environment
fn motion_signal(config: &SiteConfig) -> MotionSignal {
    match config.carousel.reduced_motion {
        Some(reduced) => MotionSignal::new(reduced),
        None => MotionSignal::from_env(),
    }
}

/// Run the storefront TUI
fn run_tui(cli: &Cli) -> Result<()> {
    let config = cli.site_config()?;
    let start_target = cli.start_slide_target()?;
    let motion = motion_signal(&config);

    let shutdown = match signals::init_signal_handlers(motion.clone()) {
        Ok(flag) => flag,
        Err(e) => {
            // Keys still quit; only signals are lost
            warn!("Failed to initialize signal handlers: {}", e);
            ShutdownFlag::new()
        }
    };
    debug!("Signal handlers initialized");

    let mut app = App::new(config, motion).with_shutdown_flag(shutdown);
    if let Some(target) = start_target {
        app.start_at(target);
    }

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange) {
        restore_terminal();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let result = app.run(&mut terminal);
            let _ = terminal.show_cursor();
            result.map_err(Into::into)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    restore_terminal();
    info!("Pick'n GO exiting");
    result
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    );
}
