//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `layout` - page geometry shared by drawing and mouse hit tests
//! - `header` - header, tab bar, navigation bar and help overlay
//! - `hero` - marquee, copy, calls to action, carousel and benefits

mod header;
mod hero;
pub mod layout;

use crate::app::AppState;
use crate::carousel::CarouselController;
use crate::components::keybindings::KeybindingContext;
use crate::components::menu_overlay::MenuOverlay;
use crate::config_file::SiteConfig;
use crate::content::{self, NavItem};
use ratatui::Frame;

pub use hero::strip_window;
pub use layout::{Hit, PageLayout};

/// Everything a frame is drawn from, borrowed from the app
pub struct PageView<'a> {
    pub state: &'a AppState,
    pub carousel: &'a CarouselController,
    pub config: &'a SiteConfig,
    pub keybindings: &'a KeybindingContext,
}

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the page.
pub struct UiRenderer {
    tabs: Vec<NavItem>,
    menu_items: Vec<NavItem>,
    strip_cycle: String,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            tabs: content::line_tabs(),
            menu_items: content::menu_items(),
            strip_cycle: content::strip_cycle(),
        }
    }

    pub fn menu_items(&self) -> &[NavItem] {
        &self.menu_items
    }

    /// Render the whole page and return the layout it was drawn with
    pub fn render(&self, f: &mut Frame, view: &PageView) -> PageLayout {
        let layout = PageLayout::compute(f.area(), view.carousel.len());

        header::render_header(f, view, &layout, &self.tabs);
        hero::render_strip(f, view, layout.strip, &self.strip_cycle);
        hero::render_copy(f, view, &layout);
        hero::render_carousel(f, view, &layout);
        hero::render_benefits(f, layout.benefits);
        header::render_nav_bar(f, view, layout.nav_bar);

        if view.state.menu_open() {
            MenuOverlay::new(&self.menu_items, view.state.menu_selection).render(f, layout.area);
        }
        if view.state.help_visible {
            header::render_help_overlay(f, view);
        }

        layout
    }
}
