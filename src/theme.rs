//! Centralized theme and styling for the storefront
//!
//! This module provides a single source of truth for all colors, styles,
//! and layout constants. The palette follows the Pick'n GO brand: a deep
//! green hero, one accent per service line and a burnt-orange tab bar.
//!
//! # Usage
//! ```rust
//! use pickngo::theme::{Colors, Styles, Theme};
//! use pickngo::types::Tone;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::BRAND);
//! let title_style = Styles::title();
//! let dot = Theme::tone_color(Tone::Premium);
//! ```

use crate::types::Tone;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
/// All colors should be defined here rather than hardcoded in components
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Ink: headings and body text on light surfaces
    pub const INK: Color = Color::Rgb(15, 23, 42);

    /// Muted body text
    pub const MUTED: Color = Color::Rgb(71, 85, 105);

    /// Hairline borders on light surfaces
    pub const BORDER: Color = Color::Rgb(226, 232, 240);

    /// Text on the brand background
    pub const ON_BRAND: Color = Color::White;

    /// Dimmed text on the brand background
    pub const ON_BRAND_MUTED: Color = Color::Rgb(200, 225, 210);

    // -------------------------------------------------------------------------
    // Brand
    // -------------------------------------------------------------------------

    /// Deep green hero background
    pub const BRAND: Color = Color::Rgb(11, 107, 63);

    /// Darker green for pressed/hovered brand surfaces
    pub const BRAND_DARK: Color = Color::Rgb(8, 78, 48);

    /// Header tab bar
    pub const TAB: Color = Color::Rgb(182, 90, 26);

    // -------------------------------------------------------------------------
    // Service lines
    // -------------------------------------------------------------------------

    pub const ALLERGY: Color = Color::Rgb(99, 169, 31);
    pub const PREMIUM: Color = Color::Rgb(0, 120, 191);
    pub const STANDARD: Color = Color::Rgb(252, 166, 0);

    /// Neutral menu entries
    pub const NEUTRAL: Color = Color::Rgb(203, 213, 225);

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Keyboard focus ring
    pub const FOCUS: Color = Color::Yellow;

    /// Current indicator dot
    pub const INDICATOR_CURRENT: Color = Color::White;

    /// Other indicator dots
    pub const INDICATOR_IDLE: Color = Color::Rgb(120, 170, 145);

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Headline on the hero
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ON_BRAND)
            .add_modifier(Modifier::BOLD)
    }

    /// Body copy on the hero
    pub fn hero_text() -> Style {
        Style::default().fg(Colors::ON_BRAND_MUTED)
    }

    /// Hero section background
    pub fn hero_bg() -> Style {
        Style::default().bg(Colors::BRAND)
    }

    /// Header bar
    pub fn header() -> Style {
        Style::default().fg(Colors::INK).bg(Color::White)
    }

    /// Header brand name
    pub fn brand_name() -> Style {
        Style::default()
            .fg(Colors::INK)
            .add_modifier(Modifier::BOLD)
    }

    /// Line tab text in the header
    pub fn tab() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Colors::TAB)
            .add_modifier(Modifier::BOLD)
    }

    /// Solid call to action
    pub fn button_primary() -> Style {
        Style::default()
            .fg(Colors::BRAND)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Outline call to action
    pub fn button_outline() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused control
    pub fn focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::FOCUS)
            .add_modifier(Modifier::BOLD)
    }

    /// Link text
    pub fn link() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// SEMANTIC LOOKUPS
// =============================================================================

pub struct Theme;

impl Theme {
    /// Dot color for a service-line tone
    pub fn tone_color(tone: Tone) -> Color {
        match tone {
            Tone::Allergy => Colors::ALLERGY,
            Tone::Premium => Colors::PREMIUM,
            Tone::Standard => Colors::STANDARD,
            Tone::Neutral => Colors::NEUTRAL,
        }
    }

    /// Style a control, highlighting it when it has keyboard focus
    pub fn control(base: Style, focused: bool) -> Style {
        if focused { Styles::focused() } else { base }
    }

    /// Indicator dot style
    pub fn indicator(current: bool) -> Style {
        if current {
            Style::default()
                .fg(Colors::INDICATOR_CURRENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::INDICATOR_IDLE)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Header bar height
    pub const HEADER_HEIGHT: u16 = 3;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Marquee strip height
    pub const STRIP_HEIGHT: u16 = 1;

    /// Benefit cards row height
    pub const BENEFITS_HEIGHT: u16 = 5;

    /// Carousel control row height (inside the carousel block)
    pub const CAROUSEL_CONTROLS_HEIGHT: u16 = 1;

    /// Menu overlay width percentage
    pub const MENU_WIDTH_PCT: u16 = 40;

    /// Menu overlay minimum width
    pub const MENU_MIN_WIDTH: u16 = 36;
}
