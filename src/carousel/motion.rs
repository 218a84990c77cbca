//! Reduced-motion preference signal
//!
//! A live boolean mirroring the "prefers reduced motion" accessibility
//! setting. Consumers sample it once when they subscribe and then receive
//! every change through their [`MotionSubscription`] until they drop or
//! unsubscribe it.
//!
//! The signal is `Send + Sync`: the SIGUSR1 handler thread flips it while the
//! UI thread drains subscriptions.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tracing::debug;

/// Environment variable read by [`MotionSignal::from_env`]
pub const REDUCED_MOTION_ENV: &str = "PICKNGO_REDUCED_MOTION";

#[derive(Debug, Default)]
struct Shared {
    reduced: bool,
    next_id: u64,
    subscribers: HashMap<u64, Sender<bool>>,
}

impl Shared {
    fn publish(&mut self, reduced: bool) {
        if self.reduced == reduced {
            return;
        }
        self.reduced = reduced;
        // Receivers that went away without unsubscribing are pruned here
        self.subscribers
            .retain(|_, sender| sender.send(reduced).is_ok());
        debug!(
            "Reduced motion set to {} ({} subscribers)",
            reduced,
            self.subscribers.len()
        );
    }
}

/// Shared, observable reduced-motion preference
#[derive(Debug, Clone, Default)]
pub struct MotionSignal {
    shared: Arc<Mutex<Shared>>,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // A bool and a map of senders cannot be left half-updated
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MotionSignal {
    /// Create a signal with an explicit initial preference
    pub fn new(reduced: bool) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                reduced,
                ..Shared::default()
            })),
        }
    }

    /// Read the platform preference from `PICKNGO_REDUCED_MOTION`.
    ///
    /// An unset or unreadable variable means motion is allowed.
    pub fn from_env() -> Self {
        let reduced = std::env::var(REDUCED_MOTION_ENV)
            .map(|value| Self::parse_preference(&value))
            .unwrap_or(false);
        debug!("Reduced motion from environment: {}", reduced);
        Self::new(reduced)
    }

    /// Interpret a preference string. `1`, `true`, `yes`, `on` and `reduce`
    /// request reduced motion; anything else allows motion.
    pub fn parse_preference(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "reduce"
        )
    }

    /// Current value of the preference
    pub fn prefers_reduced_motion(&self) -> bool {
        lock(&self.shared).reduced
    }

    /// Update the preference and notify subscribers if it changed
    pub fn set(&self, reduced: bool) {
        lock(&self.shared).publish(reduced);
    }

    /// Flip the preference, returning the new value. The read and the
    /// write happen under one lock.
    pub fn toggle(&self) -> bool {
        let mut shared = lock(&self.shared);
        let next = !shared.reduced;
        shared.publish(next);
        next
    }

    /// Subscribe to changes. The current value is sampled atomically with
    /// the registration so no change can fall between the two.
    pub fn subscribe(&self) -> MotionSubscription {
        let (sender, receiver) = mpsc::channel();
        let mut shared = lock(&self.shared);
        let id = shared.next_id;
        shared.next_id += 1;
        shared.subscribers.insert(id, sender);

        MotionSubscription {
            id,
            initial: shared.reduced,
            receiver,
            signal: Some(Arc::downgrade(&self.shared)),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared).subscribers.len()
    }
}

/// Scoped registration on a [`MotionSignal`].
///
/// Released by [`MotionSubscription::unsubscribe`] or on drop.
#[derive(Debug)]
pub struct MotionSubscription {
    id: u64,
    initial: bool,
    receiver: Receiver<bool>,
    signal: Option<Weak<Mutex<Shared>>>,
}

impl MotionSubscription {
    /// The preference at the moment of subscribing
    pub fn initial(&self) -> bool {
        self.initial
    }

    /// Drain pending changes and return the most recent one, if any
    pub fn latest(&self) -> Option<bool> {
        self.receiver.try_iter().last()
    }

    /// Release the subscription
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(signal) = self.signal.take().and_then(|weak| weak.upgrade()) {
            lock(&signal).subscribers.remove(&self.id);
            debug!("Motion subscription {} released", self.id);
        }
    }
}

impl Drop for MotionSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
