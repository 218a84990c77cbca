//! Header, navigation bar and help overlay rendering
//!
//! The header carries the brand, the WhatsApp and Contacto buttons, the
//! menu button and the tab bar with one tab per service line.

use super::PageView;
use super::layout::{
    HEADER_CONTACT_LABEL, HEADER_WHATSAPP_LABEL, MENU_BUTTON_LABEL, PageLayout, button_label,
    text_width,
};
use crate::components::help_overlay::HelpOverlay;
use crate::content::NavItem;
use crate::theme::{Colors, Styles, Theme};
use crate::types::FocusTarget;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Render the header rows
pub fn render_header(f: &mut Frame, view: &PageView, layout: &PageLayout, tabs: &[NavItem]) {
    if layout.header.width == 0 || layout.header.height == 0 {
        return;
    }
    f.render_widget(Block::default().style(Styles::header()), layout.header);

    let brand = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(view.config.name.clone(), Styles::brand_name()),
    ]));
    f.render_widget(brand, layout.brand);

    let tagline = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(view.config.tagline.clone(), Style::default().fg(Colors::MUTED)),
    ]));
    f.render_widget(tagline, layout.tagline);

    let buttons = [
        (FocusTarget::HeaderWhatsApp, HEADER_WHATSAPP_LABEL, layout.header_whatsapp),
        (FocusTarget::HeaderContact, HEADER_CONTACT_LABEL, layout.header_contact),
        (FocusTarget::MenuButton, MENU_BUTTON_LABEL, layout.menu_button),
    ];
    for (target, label, rect) in buttons {
        let base = if target == FocusTarget::HeaderWhatsApp {
            Style::default().fg(Colors::BRAND)
        } else {
            Style::default().fg(Colors::INK)
        };
        let style = Theme::control(base, view.state.is_focused(target));
        f.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    }

    render_tab_bar(f, layout, tabs);
}

fn render_tab_bar(f: &mut Frame, layout: &PageLayout, tabs: &[NavItem]) {
    f.render_widget(
        Block::default().style(Style::default().bg(Colors::TAB)),
        layout.tab_bar,
    );
    for (tab, rect) in tabs.iter().zip(&layout.tabs) {
        let line = Line::from(vec![
            Span::styled(
                "●",
                Style::default()
                    .fg(Theme::tone_color(tab.tone))
                    .bg(Colors::TAB),
            ),
            Span::styled(button_label(tab.label), Styles::tab()),
        ]);
        f.render_widget(Paragraph::new(line), *rect);
    }
}

/// Render the navigation bar: key hints on the left, status on the right
pub fn render_nav_bar(f: &mut Frame, view: &PageView, area: Rect) {
    if area.height == 0 {
        return;
    }
    let mut spans = Vec::new();
    for (i, item) in view
        .keybindings
        .get_nav_items(&view.state.mode)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::nav_hint()));
        }
        spans.push(Span::styled(
            item.key_display,
            Style::default().fg(Colors::BRAND).bg(Color::Reset),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(item.action_label, Styles::nav_hint()));
    }
    let status = format!("{} ", view.state.status_message);
    let status_width = text_width(&status).min(area.width / 2);
    let hints_area = Rect::new(area.x, area.y, area.width - status_width, area.height);
    let status_area = Rect::new(hints_area.right(), area.y, status_width, area.height);

    f.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    f.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(Colors::MUTED)))
            .alignment(Alignment::Right),
        status_area,
    );
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, view: &PageView) {
    let help_overlay = HelpOverlay::new(&view.state.mode, view.keybindings);
    help_overlay.render(f, f.area());
}
