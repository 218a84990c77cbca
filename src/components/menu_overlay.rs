//! Header menu overlay
//!
//! Lists the service lines, page sections and the WhatsApp action. The
//! overlay is a plain open/closed toggle owned by the app; this component
//! only draws it and maps mouse positions back to entries.

use super::popup_rect;
use crate::content::NavItem;
use crate::theme::{Colors, Styles, Theme, UiConstants};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub const CLOSE_LABEL: &str = "[x] Cerrar";

/// What a click inside the overlay landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    Close,
    Item(usize),
    /// Inside the overlay but not on a control
    Inside,
}

pub struct MenuOverlay<'a> {
    items: &'a [NavItem],
    selected: usize,
}

impl<'a> MenuOverlay<'a> {
    pub fn new(items: &'a [NavItem], selected: usize) -> Self {
        Self { items, selected }
    }

    /// Popup rectangle inside `parent`: close row, spacer, one row per item
    pub fn area(&self, parent: Rect) -> Rect {
        let height = self.items.len() as u16 + 4;
        popup_rect(
            parent,
            UiConstants::MENU_WIDTH_PCT,
            UiConstants::MENU_MIN_WIDTH,
            height,
        )
    }

    fn inner(&self, parent: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.area(parent))
    }

    /// Map a terminal cell to the overlay control under it
    pub fn hit_test(&self, parent: Rect, column: u16, row: u16) -> Option<MenuHit> {
        let pos = Position::new(column, row);
        if !self.area(parent).contains(pos) {
            return None;
        }
        let inner = self.inner(parent);
        if !inner.contains(pos) {
            return Some(MenuHit::Inside);
        }
        let offset = row - inner.y;
        match offset {
            0 if column < inner.x + CLOSE_LABEL.len() as u16 => Some(MenuHit::Close),
            n if n >= 2 && usize::from(n - 2) < self.items.len() => {
                Some(MenuHit::Item(usize::from(n - 2)))
            }
            _ => Some(MenuHit::Inside),
        }
    }

    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = self.area(parent);
        f.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(Span::styled(CLOSE_LABEL, Styles::nav_hint())),
            Line::from(""),
        ];
        for (i, item) in self.items.iter().enumerate() {
            let selected = i == self.selected;
            let label_style = if selected {
                Styles::focused()
            } else {
                Style::default().fg(Colors::INK)
            };
            lines.push(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(Theme::tone_color(item.tone))),
                Span::styled(item.label, label_style),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BORDER))
            .title(" Menú ")
            .style(Style::default().bg(Color::White));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::menu_items;

    #[test]
    fn test_hit_test_rows() {
        let items = menu_items();
        let overlay = MenuOverlay::new(&items, 0);
        let parent = Rect::new(0, 0, 100, 30);
        let area = overlay.area(parent);
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        assert_eq!(overlay.hit_test(parent, inner_x, inner_y), Some(MenuHit::Close));
        assert_eq!(overlay.hit_test(parent, inner_x, inner_y + 1), Some(MenuHit::Inside));
        assert_eq!(overlay.hit_test(parent, inner_x + 3, inner_y + 2), Some(MenuHit::Item(0)));
        assert_eq!(
            overlay.hit_test(parent, inner_x + 3, inner_y + 8),
            Some(MenuHit::Item(6))
        );
        assert_eq!(overlay.hit_test(parent, area.x, area.y), Some(MenuHit::Inside));
        assert_eq!(overlay.hit_test(parent, 0, 0), None);
    }
}
