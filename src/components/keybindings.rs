//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    PrevSlide,
    NextSlide,
    /// Jump to the slide matching the pressed digit
    JumpToSlide,
    FocusNext,
    FocusPrev,
    Activate,
    TogglePause,
    ToggleMotion,
    OpenMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.key != key {
            return false;
        }
        // Terminals disagree on whether BackTab carries SHIFT
        if key == KeyCode::BackTab {
            return true;
        }
        modifiers.difference(KeyModifiers::SHIFT) == self.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Ayuda"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Salir"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Salir",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Browsing,
            vec![
                Keybinding::new(KeyCode::Left, KeyAction::PrevSlide, "Left", "Slide anterior"),
                Keybinding::new(KeyCode::Right, KeyAction::NextSlide, "Right", "Slide siguiente"),
                Keybinding::new(KeyCode::Char('1'), KeyAction::JumpToSlide, "1-9", "Ir al slide"),
                Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Siguiente control"),
                Keybinding::with_modifiers(
                    KeyCode::BackTab,
                    KeyModifiers::SHIFT,
                    KeyAction::FocusPrev,
                    "S-Tab",
                    "Control anterior",
                ),
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Activar"),
                Keybinding::new(KeyCode::Char('p'), KeyAction::TogglePause, "P", "Pausar"),
                Keybinding::new(KeyCode::Char('m'), KeyAction::ToggleMotion, "M", "Movimiento reducido"),
                Keybinding::new(KeyCode::Char('o'), KeyAction::OpenMenu, "O", "Menú"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Menu,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::MenuUp, "Up", "Subir"),
                Keybinding::new(KeyCode::Down, KeyAction::MenuDown, "Down", "Bajar"),
                Keybinding::new(KeyCode::Enter, KeyAction::MenuSelect, "Enter", "Elegir"),
                Keybinding::new(KeyCode::Esc, KeyAction::CloseMenu, "Esc", "Cerrar"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Look up the action bound to a key press in `mode`.
    ///
    /// Digits `1`..`9` resolve to [`KeyAction::JumpToSlide`] while browsing;
    /// the caller reads the digit from the key code.
    pub fn resolve(&self, mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        if *mode == AppMode::Browsing
            && matches!(key, KeyCode::Char('1'..='9'))
            && !modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(KeyAction::JumpToSlide);
        }
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Browsing => vec![
                KeyAction::PrevSlide,
                KeyAction::NextSlide,
                KeyAction::FocusNext,
                KeyAction::TogglePause,
                KeyAction::ToggleMotion,
                KeyAction::OpenMenu,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Menu => vec![
                KeyAction::MenuUp,
                KeyAction::MenuDown,
                KeyAction::MenuSelect,
                KeyAction::CloseMenu,
            ],
        };

        // Combine paired directions into single items for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_slides = false;
        let mut has_menu_nav = false;

        for action in priority_actions {
            let slide_nav = matches!(action, KeyAction::PrevSlide | KeyAction::NextSlide);
            let menu_nav = matches!(action, KeyAction::MenuUp | KeyAction::MenuDown);
            if (slide_nav && has_slides) || (menu_nav && has_menu_nav) {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if slide_nav {
                    items.push(NavBarItem {
                        key_display: "Left/Right".to_string(),
                        action_label: "Slides".to_string(),
                    });
                    has_slides = true;
                } else if menu_nav {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navegar".to_string(),
                    });
                    has_menu_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Carrusel", |a| {
                matches!(
                    a,
                    KeyAction::PrevSlide
                        | KeyAction::NextSlide
                        | KeyAction::JumpToSlide
                        | KeyAction::TogglePause
                        | KeyAction::ToggleMotion
                )
            }),
            ("Navegación", |a| {
                matches!(
                    a,
                    KeyAction::FocusNext
                        | KeyAction::FocusPrev
                        | KeyAction::Activate
                        | KeyAction::OpenMenu
                        | KeyAction::CloseMenu
                        | KeyAction::MenuUp
                        | KeyAction::MenuDown
                        | KeyAction::MenuSelect
                )
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, wanted)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| wanted(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_browsing_keys() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Browsing;
        assert_eq!(
            ctx.resolve(&mode, KeyCode::Right, KeyModifiers::NONE),
            Some(KeyAction::NextSlide)
        );
        assert_eq!(
            ctx.resolve(&mode, KeyCode::Char('7'), KeyModifiers::NONE),
            Some(KeyAction::JumpToSlide)
        );
        assert_eq!(
            ctx.resolve(&mode, KeyCode::BackTab, KeyModifiers::NONE),
            Some(KeyAction::FocusPrev)
        );
        assert_eq!(
            ctx.resolve(&mode, KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyAction::Quit)
        );
        assert_eq!(ctx.resolve(&mode, KeyCode::Char('0'), KeyModifiers::NONE), None);
        assert_eq!(ctx.resolve(&mode, KeyCode::Esc, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_menu_mode_has_its_own_keys() {
        let ctx = KeybindingContext::new();
        let mode = AppMode::Menu;
        assert_eq!(
            ctx.resolve(&mode, KeyCode::Esc, KeyModifiers::NONE),
            Some(KeyAction::CloseMenu)
        );
        assert_eq!(
            ctx.resolve(&mode, KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyAction::MenuSelect)
        );
        // Slide keys only apply while browsing
        assert_eq!(ctx.resolve(&mode, KeyCode::Right, KeyModifiers::NONE), None);
        assert_eq!(ctx.resolve(&mode, KeyCode::Char('3'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_nav_items_combine_directions() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(&AppMode::Browsing);
        assert_eq!(items[0].key_display, "Left/Right");
        assert_eq!(
            items.iter().filter(|i| i.action_label == "Slides").count(),
            1
        );
        assert_eq!(items.last().map(|i| i.key_display.as_str()), Some("Q"));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Browsing);
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Carrusel", "Navegación", "General"]);
    }
}
