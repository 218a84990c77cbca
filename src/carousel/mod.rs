//! Hero carousel controller
//!
//! Owns the displayed slide index, the autoplay timer, the pause reasons and
//! the reduced-motion flag. The presentation layer only reads
//! [`CarouselController::render_state`] and forwards gestures into the
//! operations below.
//!
//! # Module Structure
//! - `motion` - live reduced-motion preference and its subscriptions
//! - `pause` - independent pause reasons
//! - `timer` - the single recurring autoplay timer
//!
//! # Invariants
//!
//! - `current_index < slides.len()` whenever there is at least one slide
//! - at most one autoplay timer exists, and only while the carousel is
//!   mounted, has slides, is not paused and motion is allowed
//! - no operation fails; out-of-range indices wrap, malformed ones are
//!   discarded

pub mod motion;
pub mod pause;
pub mod timer;

pub use motion::{MotionSignal, MotionSubscription, REDUCED_MOTION_ENV};
pub use pause::{PauseReason, PauseReasons};
pub use timer::AutoplayTimer;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default autoplay interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2600);

/// One image/caption pair shown by the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image source reference
    pub src: String,
    /// Caption / alternative text
    pub alt: String,
    /// Short badge shown in the slide corner
    pub label: String,
}

impl Slide {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            label: label.into(),
        }
    }
}

/// Whether a slide is presented or hidden (including from assistive tech)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideVisibility {
    Shown,
    Hidden,
}

/// One indicator control. `number` is 1-based; `current` is the explicit
/// current-position marker screen readers announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub number: usize,
    pub current: bool,
}

/// Snapshot consumed by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub current_index: usize,
    pub total: usize,
    pub paused: bool,
    pub reduced_motion: bool,
}

impl RenderState {
    /// True for exactly one index when there is at least one slide
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.total > 0 && index == self.current_index
    }

    /// "2 / 5" style position text, `None` when there is nothing to show
    pub fn position_label(&self) -> Option<String> {
        (self.total > 0).then(|| format!("{} / {}", self.current_index + 1, self.total))
    }
}

/// Auto-advancing carousel with pause-on-interaction and reduced-motion opt-out
#[derive(Debug)]
pub struct CarouselController {
    slides: Vec<Slide>,
    current_index: usize,
    interval: Duration,
    pause_reasons: PauseReasons,
    reduced_motion: bool,
    motion: Option<MotionSubscription>,
    timer: Option<AutoplayTimer>,
    mounted: bool,
}

impl CarouselController {
    /// Mount a carousel, subscribing to the reduced-motion signal
    pub fn new(slides: Vec<Slide>, interval: Duration, motion: &MotionSignal) -> Self {
        let subscription = motion.subscribe();
        let reduced_motion = subscription.initial();
        Self::mount(slides, interval, reduced_motion, Some(subscription))
    }

    /// Mount a carousel on a platform without a reduced-motion signal.
    /// Motion is allowed.
    pub fn without_motion_signal(slides: Vec<Slide>, interval: Duration) -> Self {
        Self::mount(slides, interval, false, None)
    }

    fn mount(
        slides: Vec<Slide>,
        interval: Duration,
        reduced_motion: bool,
        motion: Option<MotionSubscription>,
    ) -> Self {
        let mut carousel = Self {
            slides,
            current_index: 0,
            interval,
            pause_reasons: PauseReasons::new(),
            reduced_motion,
            motion,
            timer: None,
            mounted: true,
        };
        carousel.reschedule();
        info!(
            "Carousel mounted: {} slides, interval {:?}, reduced motion {}",
            carousel.slides.len(),
            interval,
            reduced_motion
        );
        carousel
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Jump to `target`, wrapping in both directions
    pub fn go_to(&mut self, target: i64) {
        let total = self.slides.len();
        if !self.mounted || total == 0 {
            return;
        }
        self.current_index = target.rem_euclid(total as i64) as usize;
        debug!("Carousel at slide {}", self.current_index);
    }

    /// Jump to an untrusted numeric target.
    ///
    /// Non-finite and fractional targets are discarded and the current index
    /// is kept. Returns whether the index was applied.
    pub fn go_to_checked(&mut self, target: f64) -> bool {
        let total = self.slides.len();
        if !self.mounted || total == 0 {
            return false;
        }
        if !target.is_finite() || target.fract() != 0.0 {
            debug!("Discarding malformed slide target {}", target);
            return false;
        }
        // rem_euclid on integral f64 is exact, even beyond the i64 range
        self.current_index = target.rem_euclid(total as f64) as usize;
        debug!("Carousel at slide {}", self.current_index);
        true
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as i64 - 1);
    }

    // ------------------------------------------------------------------
    // Pause control
    // ------------------------------------------------------------------

    /// Manual pause toggle
    pub fn set_paused(&mut self, paused: bool) {
        self.set_pause_reason(PauseReason::Manual, paused);
    }

    pub fn pause(&mut self, reason: PauseReason) {
        self.set_pause_reason(reason, true);
    }

    pub fn resume(&mut self, reason: PauseReason) {
        self.set_pause_reason(reason, false);
    }

    /// Activate or clear one pause reason. The timer is rebuilt only when
    /// the overall paused state flips.
    pub fn set_pause_reason(&mut self, reason: PauseReason, active: bool) {
        if !self.mounted {
            return;
        }
        let was_paused = self.pause_reasons.is_paused();
        let changed = if active {
            self.pause_reasons.insert(reason)
        } else {
            self.pause_reasons.remove(reason)
        };
        if changed && was_paused != self.pause_reasons.is_paused() {
            debug!("Carousel paused: {} ({})", !was_paused, self.pause_reasons);
            self.reschedule();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_reasons.is_paused()
    }

    pub fn pause_reasons(&self) -> &PauseReasons {
        &self.pause_reasons
    }

    // ------------------------------------------------------------------
    // Motion, interval and slides
    // ------------------------------------------------------------------

    /// Apply a reduced-motion value. Turning it on drops the pending timer
    /// immediately.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if !self.mounted || self.reduced_motion == reduced {
            return;
        }
        self.reduced_motion = reduced;
        info!("Carousel reduced motion: {}", reduced);
        self.reschedule();
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Pull the latest value from the motion subscription, if any
    pub fn sync_motion(&mut self) {
        let latest = self.motion.as_ref().and_then(MotionSubscription::latest);
        if let Some(reduced) = latest {
            self.set_reduced_motion(reduced);
        }
    }

    pub fn set_interval(&mut self, interval: Duration) {
        if !self.mounted || self.interval == interval {
            return;
        }
        self.interval = interval;
        self.reschedule();
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Replace the slide list, keeping the index in range
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        if !self.mounted {
            return;
        }
        let previous = self.slides.len();
        self.slides = slides;
        self.current_index = match self.slides.len() {
            0 => 0,
            total => self.current_index % total,
        };
        if previous != self.slides.len() {
            self.reschedule();
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    // ------------------------------------------------------------------
    // Autoplay
    // ------------------------------------------------------------------

    /// Whether autoplay should be running right now
    pub fn autoplay_enabled(&self) -> bool {
        self.mounted
            && !self.slides.is_empty()
            && !self.reduced_motion
            && !self.pause_reasons.is_paused()
    }

    /// Whether a timer is currently scheduled
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Time until the next automatic advance, if one is scheduled
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timer.as_ref().map(AutoplayTimer::remaining)
    }

    /// Tear down the current timer and create a fresh one if autoplay
    /// conditions hold.
    fn reschedule(&mut self) {
        self.timer = if self.autoplay_enabled() {
            AutoplayTimer::new(self.interval)
        } else {
            None
        };
    }

    /// Feed elapsed time from the event loop.
    ///
    /// Motion changes are applied first, so a switch to reduced motion
    /// cancels the timer before this slice of time can complete a tick.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        if !self.mounted {
            return 0;
        }
        // Reducing motion stops the timer before this slice lands. Allowing
        // motion again builds a timer only after it, so the new one starts
        // a full interval.
        let latest = self.motion.as_ref().and_then(MotionSubscription::latest);
        if latest == Some(true) {
            self.set_reduced_motion(true);
        }

        let fires = self.timer.as_mut().map_or(0, |timer| timer.feed(elapsed));
        if fires > 0 {
            let total = self.slides.len();
            let steps = (fires % total as u64) as usize;
            self.current_index = (self.current_index + steps) % total;
            debug!("Autoplay advanced {} step(s) to slide {}", fires, self.current_index);
        }

        if latest == Some(false) {
            self.set_reduced_motion(false);
        }
        fires
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Clear the timer and release the motion subscription. Afterwards the
    /// carousel is inert.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timer = None;
        if let Some(subscription) = self.motion.take() {
            subscription.unsubscribe();
        }
        info!("Carousel unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ------------------------------------------------------------------
    // Rendering contract
    // ------------------------------------------------------------------

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            current_index: self.current_index,
            total: self.slides.len(),
            paused: self.pause_reasons.is_paused(),
            reduced_motion: self.reduced_motion,
        }
    }

    pub fn is_slide_active(&self, index: usize) -> bool {
        self.render_state().is_slide_active(index)
    }

    pub fn slide_visibility(&self, index: usize) -> SlideVisibility {
        if self.is_slide_active(index) {
            SlideVisibility::Shown
        } else {
            SlideVisibility::Hidden
        }
    }

    /// Indicator controls numbered 1..=N
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.slides.len())
            .map(|i| Indicator {
                number: i + 1,
                current: i == self.current_index,
            })
            .collect()
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (1..=n)
            .map(|i| {
                Slide::new(
                    format!("/images/products/producto-{}.png", i),
                    format!("Producto {}", i),
                    format!("{:02}", i),
                )
            })
            .collect()
    }

    fn carousel(n: usize) -> CarouselController {
        CarouselController::without_motion_signal(slides(n), DEFAULT_INTERVAL)
    }

    #[test]
    fn test_mount_defaults() {
        let c = carousel(5);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_paused());
        assert!(!c.reduced_motion());
        assert!(c.has_pending_timer());
        assert_eq!(c.time_until_next(), Some(DEFAULT_INTERVAL));
    }

    #[test]
    fn test_go_to_wraps_both_directions() {
        let mut c = carousel(5);
        c.go_to(7);
        assert_eq!(c.current_index(), 2);
        c.go_to(-1);
        assert_eq!(c.current_index(), 4);
        c.go_to(-11);
        assert_eq!(c.current_index(), 4);
        c.go_to(i64::MIN);
        assert!(c.current_index() < 5);
    }

    #[test]
    fn test_go_to_checked_discards_malformed() {
        let mut c = carousel(5);
        c.go_to(3);
        assert!(!c.go_to_checked(f64::NAN));
        assert!(!c.go_to_checked(f64::INFINITY));
        assert!(!c.go_to_checked(2.5));
        assert_eq!(c.current_index(), 3);
        assert!(c.go_to_checked(-2.0));
        assert_eq!(c.current_index(), 3);
        assert!(c.go_to_checked(6.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_manual_navigation_keeps_timer_phase() {
        let mut c = carousel(5);
        c.advance(Duration::from_millis(1000));
        c.next();
        assert_eq!(c.time_until_next(), Some(Duration::from_millis(1600)));
    }

    #[test]
    fn test_pause_rebuilds_timer_only_on_flip() {
        let mut c = carousel(3);
        c.advance(Duration::from_millis(1000));
        c.pause(PauseReason::Hover);
        assert!(!c.has_pending_timer());
        c.pause(PauseReason::Focus);
        c.resume(PauseReason::Hover);
        assert!(!c.has_pending_timer());
        c.resume(PauseReason::Focus);
        assert_eq!(c.time_until_next(), Some(DEFAULT_INTERVAL));
    }

    #[test]
    fn test_set_paused_is_manual_reason() {
        let mut c = carousel(3);
        c.set_paused(true);
        assert!(c.pause_reasons().contains(PauseReason::Manual));
        c.set_paused(false);
        assert!(!c.is_paused());
    }

    #[test]
    fn test_interval_change_restarts_timer() {
        let mut c = carousel(3);
        c.advance(Duration::from_millis(2000));
        c.set_interval(Duration::from_millis(1000));
        assert_eq!(c.time_until_next(), Some(Duration::from_millis(1000)));
        assert_eq!(c.advance(Duration::from_millis(999)), 0);
        assert_eq!(c.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_zero_interval_disables_autoplay() {
        let mut c = CarouselController::without_motion_signal(slides(3), Duration::ZERO);
        assert!(!c.has_pending_timer());
        assert_eq!(c.advance(Duration::from_secs(60)), 0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_set_slides_clamps_and_reschedules() {
        let mut c = carousel(5);
        c.go_to(4);
        c.set_slides(slides(3));
        assert_eq!(c.current_index(), 1);
        c.set_slides(Vec::new());
        assert_eq!(c.current_index(), 0);
        assert!(!c.has_pending_timer());
        c.set_slides(slides(2));
        assert!(c.has_pending_timer());
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.next();
        c.prev();
        c.go_to(3);
        assert!(!c.go_to_checked(1.0));
        assert_eq!(c.advance(Duration::from_secs(10)), 0);
        assert_eq!(c.current_index(), 0);
        assert!(c.indicators().is_empty());
        assert!(!c.is_slide_active(0));
        assert_eq!(c.render_state().position_label(), None);
        assert!(c.current_slide().is_none());
    }

    #[test]
    fn test_indicators_mark_current() {
        let mut c = carousel(4);
        c.go_to(2);
        let indicators = c.indicators();
        assert_eq!(indicators.len(), 4);
        assert_eq!(indicators[0].number, 1);
        assert_eq!(indicators[3].number, 4);
        let current: Vec<usize> = indicators.iter().filter(|i| i.current).map(|i| i.number).collect();
        assert_eq!(current, vec![3]);
        assert_eq!(c.slide_visibility(2), SlideVisibility::Shown);
        assert_eq!(c.slide_visibility(1), SlideVisibility::Hidden);
        assert_eq!(c.render_state().position_label().as_deref(), Some("3 / 4"));
    }

    #[test]
    fn test_unmount_is_idempotent_and_inert() {
        let mut c = carousel(3);
        c.unmount();
        c.unmount();
        assert!(!c.is_mounted());
        c.next();
        c.set_paused(true);
        assert_eq!(c.advance(Duration::from_secs(30)), 0);
        assert_eq!(c.current_index(), 0);
        assert!(!c.is_paused());
    }
}
