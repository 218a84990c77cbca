//! Process signal handling
//!
//! SIGINT, SIGTERM and SIGHUP request a graceful shutdown so the event loop
//! can restore the terminal before exiting. SIGUSR1 flips the reduced-motion
//! preference, standing in for a platform accessibility setting changing
//! while the storefront is open.

use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGTERM, SIGUSR1};
use signal_hook::iterator::Signals;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tracing::info;

use crate::carousel::MotionSignal;

/// Shared flag set when a termination signal arrives
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Human-readable name for the signals we handle
pub fn signal_name(sig: i32) -> &'static str {
    match sig {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        SIGHUP => "SIGHUP",
        SIGUSR1 => "SIGUSR1",
        _ => "UNKNOWN",
    }
}

/// Initialize signal handlers. Call once at program start.
///
/// Returns the shutdown flag the event loop should poll.
pub fn init_signal_handlers(motion: MotionSignal) -> Result<ShutdownFlag, std::io::Error> {
    let shutdown = ShutdownFlag::new();
    let mut signals = Signals::new([SIGINT, SIGTERM, SIGHUP, SIGUSR1])?;

    let flag = shutdown.clone();
    thread::spawn(move || {
        for sig in signals.forever() {
            if sig == SIGUSR1 {
                let reduced = motion.toggle();
                info!("Received SIGUSR1, reduced motion now {}", reduced);
                continue;
            }

            info!("Received {} signal, shutting down...", signal_name(sig));
            flag.request();
        }
    });

    Ok(shutdown)
}
