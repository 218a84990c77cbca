//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, STRIP_STEP};

use crate::carousel::{CarouselController, MotionSignal, PauseReason};
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::components::menu_overlay::{MenuHit, MenuOverlay};
use crate::config_file::SiteConfig;
use crate::content;
use crate::error::{Result, SiteError};
use crate::links;
use crate::signals::ShutdownFlag;
use crate::types::{FocusTarget, LinkTarget};
use crate::ui::{Hit, PageLayout, PageView, UiRenderer};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on how long the loop blocks waiting for input
const MAX_POLL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    carousel: CarouselController,
    config: SiteConfig,
    motion: MotionSignal,
    ui_renderer: UiRenderer,
    /// Keybinding context for navigation hints
    keybinding_context: KeybindingContext,
    /// Layout of the last drawn frame, used for mouse hit tests
    layout: PageLayout,
    shutdown: ShutdownFlag,
}

impl App {
    /// Create a new application instance and mount the carousel
    pub fn new(config: SiteConfig, motion: MotionSignal) -> Self {
        info!("Creating new App instance");
        let carousel = CarouselController::new(config.slides(), config.interval(), &motion);
        Self {
            state: AppState::default(),
            carousel,
            config,
            motion,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            layout: PageLayout::default(),
            shutdown: ShutdownFlag::new(),
        }
    }

    /// Share a shutdown flag set by the signal handlers
    pub fn with_shutdown_flag(mut self, shutdown: ShutdownFlag) -> Self {
        self.shutdown = shutdown;
        self
    }

    /// Show a requested first slide. Malformed targets are ignored.
    pub fn start_at(&mut self, target: f64) -> bool {
        let accepted = self.carousel.go_to_checked(target);
        if !accepted {
            debug!("Ignoring start slide target {}", target);
        }
        accepted
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = message.into();
    }

    // ------------------------------------------------------------------
    // Event loop
    // ------------------------------------------------------------------

    /// Run the main application loop until quit or a shutdown signal
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");
        let mut last_tick = Instant::now();

        loop {
            if self.shutdown.is_requested() {
                info!("Shutdown requested, leaving main loop");
                break;
            }

            self.draw(terminal)?;

            let pending = if event::poll(self.poll_timeout())? {
                Some(event::read()?)
            } else {
                None
            };
            let now = Instant::now();
            let elapsed = now.duration_since(last_tick);
            last_tick = now;
            if self.step(elapsed, pending) {
                break; // Exit requested
            }
        }

        self.carousel.unmount();
        Ok(())
    }

    /// Apply the time that passed while waiting, then the event that ended
    /// the wait. Returns true when the app should exit.
    ///
    /// A timer created by the event (resume, motion re-enabled) starts a
    /// full interval.
    pub fn step(&mut self, elapsed: Duration, event: Option<Event>) -> bool {
        self.tick(elapsed);
        match event {
            Some(Event::Key(key_event)) => return self.handle_key_event(key_event),
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_event(mouse_event),
            Some(Event::Resize(width, height)) => {
                self.handle_resize(Rect::new(0, 0, width, height))
            }
            Some(Event::FocusLost) => self.set_hover(false),
            _ => {}
        }
        false
    }

    /// Draw one frame and remember its layout
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let view = PageView {
            state: &self.state,
            carousel: &self.carousel,
            config: &self.config,
            keybindings: &self.keybinding_context,
        };
        let renderer = &self.ui_renderer;
        let mut layout = None;
        terminal
            .draw(|f| layout = Some(renderer.render(f, &view)))
            .map_err(|e| SiteError::terminal(format!("Failed to draw frame: {}", e)))?;
        if let Some(layout) = layout {
            self.layout = layout;
        }
        Ok(())
    }

    /// How long to wait for input before the next tick
    pub fn poll_timeout(&self) -> Duration {
        self.carousel
            .time_until_next()
            .map_or(MAX_POLL, |remaining| remaining.min(MAX_POLL))
    }

    /// Advance timers by `elapsed`: carousel autoplay and the marquee
    pub fn tick(&mut self, elapsed: Duration) {
        let steps = self.carousel.advance(elapsed);
        if steps > 0 {
            debug!("Tick advanced carousel to slide {}", self.carousel.current_index() + 1);
        }
        if !self.carousel.reduced_motion() {
            self.state.advance_strip(elapsed);
        }
    }

    /// Recompute the layout for a new terminal size
    pub fn handle_resize(&mut self, area: Rect) {
        self.layout = PageLayout::compute(area, self.carousel.len());
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Handle a key press. Returns `true` when the app should quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        // Help overlay: ? or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return false;
        }

        match self
            .keybinding_context
            .resolve(&self.state.mode, key_event.code, key_event.modifiers)
        {
            Some(action) => self.apply(action, key_event.code),
            None => false,
        }
    }

    fn apply(&mut self, action: KeyAction, code: KeyCode) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.toggle_help(),
            KeyAction::PrevSlide => self.carousel.prev(),
            KeyAction::NextSlide => self.carousel.next(),
            KeyAction::JumpToSlide => {
                if let KeyCode::Char(c) = code {
                    self.jump_to_digit(c);
                }
            }
            KeyAction::FocusNext => self.cycle_focus(true),
            KeyAction::FocusPrev => self.cycle_focus(false),
            KeyAction::Activate => {
                if let Some(target) = self.state.focus {
                    self.activate(target);
                }
            }
            KeyAction::TogglePause => self.toggle_manual_pause(),
            KeyAction::ToggleMotion => self.toggle_motion(),
            KeyAction::OpenMenu => self.open_menu(),
            KeyAction::CloseMenu => self.close_menu(),
            KeyAction::MenuUp => self.menu_up(),
            KeyAction::MenuDown => self.menu_down(),
            KeyAction::MenuSelect => self.menu_select(),
        }
        false
    }

    /// Digits beyond the slide count have no indicator and are ignored
    fn jump_to_digit(&mut self, c: char) {
        let Some(digit) = c.to_digit(10) else {
            return;
        };
        let index = digit as usize;
        if index >= 1 && index <= self.carousel.len() {
            self.carousel.go_to(index as i64 - 1);
        }
    }

    fn toggle_manual_pause(&mut self) {
        let paused = self.carousel.pause_reasons().contains(PauseReason::Manual);
        self.carousel.set_paused(!paused);
        self.set_status(if paused {
            "Carrusel reanudado"
        } else {
            "Carrusel en pausa"
        });
    }

    fn toggle_motion(&mut self) {
        let reduced = self.motion.toggle();
        self.carousel.sync_motion();
        info!("Reduced motion toggled to {}", reduced);
        self.set_status(if reduced {
            "Movimiento reducido activado"
        } else {
            "Movimiento reducido desactivado"
        });
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Move keyboard focus. Focus entering or leaving the carousel controls
    /// toggles the `Focus` pause reason.
    pub fn set_focus(&mut self, focus: Option<FocusTarget>) {
        let was_inside = self.state.focus.is_some_and(|f| f.is_carousel_control());
        let inside = focus.is_some_and(|f| f.is_carousel_control());
        self.state.focus = focus;
        if was_inside != inside {
            self.carousel.set_pause_reason(PauseReason::Focus, inside);
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = FocusTarget::tab_order(self.carousel.len());
        let position = self
            .state
            .focus
            .and_then(|current| order.iter().position(|t| *t == current));
        let next = match (position, forward) {
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
            (None, true) => 0,
            (None, false) => order.len() - 1,
        };
        let target = order[next];
        self.set_focus(Some(target));
        self.set_status(target.to_string());
    }

    /// Perform a control's action, as Enter or a click would
    pub fn activate(&mut self, target: FocusTarget) {
        if let Some(link) = links::for_control(target) {
            self.follow_link(link);
            return;
        }
        match target {
            FocusTarget::MenuButton => self.open_menu(),
            FocusTarget::CarouselPrev => self.carousel.prev(),
            FocusTarget::CarouselNext => self.carousel.next(),
            FocusTarget::CarouselDot(index) => self.carousel.go_to(index as i64),
            _ => {}
        }
    }

    fn follow_link(&mut self, target: LinkTarget) {
        let href = links::resolve(&target, &self.config.whatsapp);
        info!("Following link {}", href);
        let status = match target {
            LinkTarget::WhatsApp => format!("WhatsApp: {}", href),
            LinkTarget::Section(_) => format!("Sección {}", href),
        };
        self.state.last_link = Some(href);
        self.set_status(status);
    }

    // ------------------------------------------------------------------
    // Menu overlay
    // ------------------------------------------------------------------

    pub fn open_menu(&mut self) {
        self.set_focus(Some(FocusTarget::MenuButton));
        self.state.mode = AppMode::Menu;
        self.state.menu_selection = 0;
        debug!("Menu opened");
    }

    pub fn close_menu(&mut self) {
        self.state.mode = AppMode::Browsing;
        debug!("Menu closed");
    }

    fn menu_up(&mut self) {
        let count = self.ui_renderer.menu_items().len();
        if count > 0 {
            self.state.menu_selection = (self.state.menu_selection + count - 1) % count;
        }
    }

    fn menu_down(&mut self) {
        let count = self.ui_renderer.menu_items().len();
        if count > 0 {
            self.state.menu_selection = (self.state.menu_selection + 1) % count;
        }
    }

    fn menu_select(&mut self) {
        self.choose_menu_item(self.state.menu_selection);
    }

    fn choose_menu_item(&mut self, index: usize) {
        let Some(item) = self.ui_renderer.menu_items().get(index).cloned() else {
            return;
        };
        self.close_menu();
        self.follow_link(item.target);
    }

    // ------------------------------------------------------------------
    // Mouse
    // ------------------------------------------------------------------

    fn set_hover(&mut self, hovering: bool) {
        if self.state.hovering_carousel != hovering {
            self.state.hovering_carousel = hovering;
            self.carousel.set_pause_reason(PauseReason::Hover, hovering);
        }
    }

    /// Handle pointer movement and clicks against the last drawn layout
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let (column, row) = (mouse_event.column, mouse_event.row);

        let menu_hit = if self.state.menu_open() {
            MenuOverlay::new(self.ui_renderer.menu_items(), self.state.menu_selection).hit_test(
                self.layout.area,
                column,
                row,
            )
        } else {
            None
        };
        // The overlay covers whatever lies beneath it
        let over_carousel = menu_hit.is_none() && self.layout.in_carousel(column, row);

        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.set_hover(over_carousel),
            MouseEventKind::Down(MouseButton::Left) => {
                self.set_hover(over_carousel);
                if self.state.menu_open() {
                    self.click_menu(menu_hit);
                } else {
                    self.click_page(column, row);
                }
            }
            _ => {}
        }
    }

    fn click_menu(&mut self, hit: Option<MenuHit>) {
        match hit {
            Some(MenuHit::Item(index)) => self.choose_menu_item(index),
            Some(MenuHit::Close) | None => self.close_menu(),
            Some(MenuHit::Inside) => {}
        }
    }

    fn click_page(&mut self, column: u16, row: u16) {
        match self.layout.hit_test(column, row) {
            Some(Hit::Control(target)) => {
                self.set_focus(Some(target));
                self.activate(target);
            }
            Some(Hit::Tab(index)) => {
                if let Some(tab) = content::line_tabs().get(index).cloned() {
                    self.set_focus(None);
                    self.follow_link(tab.target);
                }
            }
            None => self.set_focus(None),
        }
    }
}
