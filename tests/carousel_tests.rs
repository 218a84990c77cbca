//! Tests for the carousel controller
//!
//! These tests verify:
//! - Index wraparound for next/prev/go_to
//! - Autoplay timing with simulated time
//! - Pause and reduced-motion gating
//! - Motion subscription lifecycle and unmount

use pickngo::carousel::{
    CarouselController, DEFAULT_INTERVAL, MotionSignal, PauseReason, Slide, SlideVisibility,
};
use pickngo::content::default_slides;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn slides(n: usize) -> Vec<Slide> {
    (1..=n)
        .map(|i| Slide::new(format!("/p{}.png", i), format!("Producto {}", i), format!("{:02}", i)))
        .collect()
}

fn carousel() -> CarouselController {
    CarouselController::without_motion_signal(default_slides(), DEFAULT_INTERVAL)
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_next_four_times_then_wraps() {
    let mut c = carousel();
    for _ in 0..4 {
        c.next();
    }
    assert_eq!(c.current_index(), 4);
    c.next();
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_prev_from_first_wraps_to_last() {
    let mut c = carousel();
    c.prev();
    assert_eq!(c.current_index(), 4);
}

#[test]
fn test_go_to_wraps_both_directions() {
    let mut c = carousel();
    c.go_to(7);
    assert_eq!(c.current_index(), 2);
    c.go_to(-1);
    assert_eq!(c.current_index(), 4);
    c.go_to(-11);
    assert_eq!(c.current_index(), 4);
}

#[test]
fn test_go_to_checked_discards_malformed_targets() {
    let mut c = carousel();
    c.go_to(3);
    assert!(!c.go_to_checked(f64::NAN));
    assert!(!c.go_to_checked(f64::INFINITY));
    assert!(!c.go_to_checked(2.5));
    assert_eq!(c.current_index(), 3);
    assert!(c.go_to_checked(-1.0));
    assert_eq!(c.current_index(), 4);
}

// =============================================================================
// Autoplay
// =============================================================================

#[test]
fn test_autoplay_one_step_per_interval() {
    let mut c = carousel();
    assert_eq!(c.advance(ms(2599)), 0);
    assert_eq!(c.current_index(), 0);
    assert_eq!(c.advance(ms(1)), 1);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn test_autoplay_two_steps_in_5200ms() {
    let mut c = carousel();
    assert_eq!(c.advance(ms(5200)), 2);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn test_sliced_time_does_not_drift() {
    let mut c = carousel();
    // 5200ms fed in 16ms frames plus the remainder
    let mut total = 0;
    for _ in 0..325 {
        total += c.advance(ms(16));
    }
    assert_eq!(total, 2);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn test_autoplay_wraps_after_last_slide() {
    let mut c = carousel();
    c.go_to(4);
    c.advance(ms(2600));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_manual_navigation_keeps_timer_phase() {
    let mut c = carousel();
    c.advance(ms(2000));
    c.next();
    assert_eq!(c.current_index(), 1);
    c.advance(ms(600));
    assert_eq!(c.current_index(), 2);
}

#[test]
fn test_paused_never_advances() {
    let mut c = carousel();
    c.set_paused(true);
    assert!(!c.has_pending_timer());
    assert_eq!(c.advance(Duration::from_secs(3600)), 0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_resume_starts_a_full_interval() {
    let mut c = carousel();
    c.advance(ms(2000));
    c.set_paused(true);
    c.set_paused(false);
    assert_eq!(c.time_until_next(), Some(DEFAULT_INTERVAL));
    c.advance(ms(600));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_hover_resume_keeps_focus_pause() {
    let mut c = carousel();
    c.pause(PauseReason::Hover);
    c.pause(PauseReason::Focus);
    c.resume(PauseReason::Hover);
    assert!(c.is_paused());
    assert_eq!(c.advance(ms(10_000)), 0);
    c.resume(PauseReason::Focus);
    assert!(!c.is_paused());
    assert_eq!(c.advance(ms(2600)), 1);
}

#[test]
fn test_reduced_motion_never_advances_even_unpaused() {
    let motion = MotionSignal::new(true);
    let mut c = CarouselController::new(default_slides(), DEFAULT_INTERVAL, &motion);
    assert!(!c.is_paused());
    assert_eq!(c.advance(Duration::from_secs(3600)), 0);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_reduced_motion_change_stops_timer_mid_cycle() {
    let motion = MotionSignal::new(false);
    let mut c = CarouselController::new(default_slides(), DEFAULT_INTERVAL, &motion);
    c.advance(ms(2500));
    motion.set(true);
    // The change is applied before this slice completes the tick
    assert_eq!(c.advance(ms(200)), 0);
    assert!(c.reduced_motion());
    assert!(!c.has_pending_timer());

    motion.set(false);
    assert_eq!(c.advance(ms(100)), 0);
    // The slice that carried the change was spent in reduced motion
    assert_eq!(c.time_until_next(), Some(ms(2600)));
    assert_eq!(c.advance(ms(2600)), 1);
}

#[test]
fn test_set_interval_recreates_timer() {
    let mut c = carousel();
    c.advance(ms(2000));
    c.set_interval(ms(1000));
    assert_eq!(c.time_until_next(), Some(ms(1000)));
    assert_eq!(c.advance(ms(3000)), 3);
}

#[test]
fn test_empty_carousel_is_inert() {
    let mut c = CarouselController::without_motion_signal(Vec::new(), DEFAULT_INTERVAL);
    c.next();
    c.prev();
    c.go_to(3);
    assert_eq!(c.advance(ms(10_000)), 0);
    assert_eq!(c.current_index(), 0);
    assert!(c.indicators().is_empty());
    assert_eq!(c.render_state().position_label(), None);
}

// =============================================================================
// Unmount
// =============================================================================

#[test]
fn test_unmount_with_pending_timer_is_final() {
    let motion = MotionSignal::new(false);
    let mut c = CarouselController::new(default_slides(), DEFAULT_INTERVAL, &motion);
    c.advance(ms(2500));
    assert!(c.has_pending_timer());
    c.unmount();
    assert_eq!(motion.subscriber_count(), 0);
    assert_eq!(c.advance(ms(10_000)), 0);
    c.next();
    c.go_to(3);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn test_drop_releases_subscription() {
    let motion = MotionSignal::new(false);
    {
        let _c = CarouselController::new(default_slides(), DEFAULT_INTERVAL, &motion);
        assert_eq!(motion.subscriber_count(), 1);
    }
    assert_eq!(motion.subscriber_count(), 0);
}

// =============================================================================
// Rendering contract
// =============================================================================

#[test]
fn test_render_contract() {
    let mut c = CarouselController::without_motion_signal(slides(3), DEFAULT_INTERVAL);
    c.go_to(1);
    let state = c.render_state();
    assert_eq!(state.current_index, 1);
    assert_eq!(state.total, 3);
    assert_eq!(state.position_label().as_deref(), Some("2 / 3"));

    assert_eq!(c.slide_visibility(0), SlideVisibility::Hidden);
    assert_eq!(c.slide_visibility(1), SlideVisibility::Shown);

    let indicators = c.indicators();
    let numbers: Vec<usize> = indicators.iter().map(|i| i.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    assert_eq!(indicators.iter().filter(|i| i.current).count(), 1);
    assert!(indicators[1].current);
}
