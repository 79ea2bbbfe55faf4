//! Terminal setup and teardown, and the signals that ask us to stop.

use std::{
    io::{self, Stdout},
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Set once a termination signal arrives.
pub static SHUTDOWN: AtomicBool = AtomicBool::new(false);

#[cfg(unix)]
extern "C" fn on_signal(_: nix::libc::c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// Route SIGINT, SIGTERM and SIGQUIT to [`SHUTDOWN`] so the event loop can
/// restore the terminal before exiting.
pub fn install_signal_handlers() -> Result<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{signal, SigHandler, Signal};

        for sig in [Signal::SIGINT, Signal::SIGTERM, Signal::SIGQUIT] {
            // SAFETY: the handler only stores to an atomic.
            unsafe { signal(sig, SigHandler::Handler(on_signal)) }
                .with_context(|| format!("could not install a handler for {sig:?}"))?;
        }
    }
    Ok(())
}

/// Whether a termination signal has been received.
pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

/// Puts the terminal in raw mode on the alternate screen with mouse capture
/// for as long as it lives.
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("could not enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide) {
            let _ = disable_raw_mode();
            return Err(err).context("could not prepare the terminal");
        }

        Ok(Self { stdout })
    }

    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
