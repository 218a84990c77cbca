//! Pick'n GO terminal storefront
//!
//! This library provides the storefront's hero carousel controller, the
//! page content and the ratatui front end that drives them.

pub mod app;
pub mod carousel;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod content;
pub mod error;
pub mod links;
pub mod signals;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use carousel::{
    CarouselController, Indicator, MotionSignal, MotionSubscription, PauseReason, RenderState,
    Slide, SlideVisibility,
};
pub use config_file::SiteConfig;
pub use error::{Result, SiteError};
pub use types::{FocusTarget, LinkTarget, Section, Tone};
