use std::{ffi::OsString, fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use colorslide::{models::Rgba, ColorState, Summary};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod app;
mod layout;
mod render;
mod terminal;

use app::{App, CrosstermEventSource};
use layout::Layout;
use terminal::TerminalGuard;

const USAGE: &str =
    "Usage: colorslide [color]\n  Where [color] is in the form RRGGBB or RRGGBBAA\n";

#[derive(Debug, Parser)]
#[command(name = "colorslide", version, about = "A terminal-based color editor")]
struct Cli {
    /// Starting color, RRGGBB or RRGGBBAA. A random opaque color is used when
    /// omitted.
    #[arg(allow_hyphen_values = true)]
    color: Option<String>,

    /// Seed for the random starting color.
    #[arg(long, env = "COLORSLIDE_SEED")]
    seed: Option<u64>,

    /// Write logs to this file. Nothing is logged otherwise.
    #[arg(long, env = "COLORSLIDE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Parse the command line. `Ok(None)` means the arguments were not
    /// understood and the usage text should be shown instead. Help and
    /// version requests come back as errors for clap to print.
    fn from_args<I, T>(args: I) -> Result<Option<Self>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Err(err)
            }
            Err(_) => Ok(None),
        }
    }

    /// The color to start with, or `None` if the given literal is invalid.
    fn starting_color(&self) -> Option<Rgba> {
        match &self.color {
            Some(literal) => Rgba::from_hex(literal)
                .inspect_err(|err| debug!(%err, "rejecting color literal"))
                .ok(),
            None => {
                let mut rng = self
                    .seed
                    .map(fastrand::Rng::with_seed)
                    .unwrap_or_else(fastrand::Rng::new);
                Some(Rgba::random(&mut rng))
            }
        }
    }
}

// stdout belongs to the TUI, so logs only go to a file.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = match Cli::from_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => err.exit(),
    };
    init_logging(&cli)?;

    let Some(rgba) = cli.starting_color() else {
        print!("{USAGE}");
        return Ok(());
    };

    let state = ColorState::new(rgba);
    info!(color = %state.summary(Summary::Hex), "starting");

    terminal::install_signal_handlers()?;

    let mut guard = TerminalGuard::enter()?;
    let (columns, rows) = crossterm::terminal::size().context("could not read terminal size")?;

    let mut app = App::new(state, Layout::new(columns, rows));
    let result = app.run(
        &mut CrosstermEventSource,
        guard.writer(),
        terminal::shutdown_requested,
    );

    // Restore the terminal before any error is printed.
    drop(guard);
    result
}
