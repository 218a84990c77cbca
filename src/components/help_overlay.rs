//! Help overlay component
//!
//! Displays context-sensitive key help in a centered popup.

use super::keybindings::{HelpSection, KeybindingContext};
use super::popup_rect;
use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection]) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::BRAND)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::TAB)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::INK)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("Pulsa ? para cerrar", Styles::nav_hint())));
        lines
    }

    /// Number of rows the overlay needs, borders included
    pub fn height(&self) -> u16 {
        self.content.len() as u16 + 2
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = popup_rect(parent, 50, 40, self.height());
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BRAND))
            .title(" Ayuda ")
            .style(Style::default().bg(ratatui::style::Color::White));
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}
