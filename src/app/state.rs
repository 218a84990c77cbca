//! Application state definitions
//!
//! Page-level UI state: overlay mode, keyboard focus, hover, marquee scroll
//! and the status line. Carousel state lives in the carousel controller.

use crate::types::FocusTarget;
use std::time::Duration;

/// How long the marquee waits between one-character steps
pub const STRIP_STEP: Duration = Duration::from_millis(180);

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Browsing the page
    Browsing,
    /// Menu overlay is open
    Menu,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Selected entry in the menu overlay
    pub menu_selection: usize,
    /// Control holding keyboard focus, if any
    pub focus: Option<FocusTarget>,
    /// Whether the pointer is over the carousel
    pub hovering_carousel: bool,
    /// Whether the key help overlay is visible
    pub help_visible: bool,
    /// Last href the user followed
    pub last_link: Option<String>,
    /// Status message for user feedback
    pub status_message: String,
    /// Marquee scroll position in characters
    pub strip_offset: usize,
    /// Time accumulated toward the next marquee step
    pub strip_elapsed: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browsing,
            menu_selection: 0,
            focus: None,
            hovering_carousel: false,
            help_visible: false,
            last_link: None,
            status_message: "Bienvenido a Pick’n GO".to_string(),
            strip_offset: 0,
            strip_elapsed: Duration::ZERO,
        }
    }
}

impl AppState {
    pub fn menu_open(&self) -> bool {
        self.mode == AppMode::Menu
    }

    /// Whether `target` currently has keyboard focus
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    /// Advance the marquee by the whole steps contained in `elapsed`
    pub fn advance_strip(&mut self, elapsed: Duration) {
        self.strip_elapsed += elapsed;
        while self.strip_elapsed >= STRIP_STEP {
            self.strip_elapsed -= STRIP_STEP;
            self.strip_offset = self.strip_offset.wrapping_add(1);
        }
    }
}
