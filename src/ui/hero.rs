//! Hero section rendering
//!
//! Marquee strip, headline and copy, calls to action, the product carousel
//! and the benefit cards beneath it.

use super::PageView;
use super::layout::{NEXT_LABEL, PREV_LABEL, PageLayout, button_label};
use crate::carousel::SlideVisibility;
use crate::content::{self, Benefit};
use crate::theme::{Colors, Styles, Theme};
use crate::types::FocusTarget;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// The visible window of the marquee, `width` characters from `offset`
pub fn strip_window(cycle: &str, offset: usize, width: usize) -> String {
    let chars: Vec<char> = cycle.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    (0..width)
        .map(|i| chars[(offset + i) % chars.len()])
        .collect()
}

pub fn render_strip(f: &mut Frame, view: &PageView, area: Rect, cycle: &str) {
    if area.height == 0 {
        return;
    }
    let text = strip_window(cycle, view.state.strip_offset, usize::from(area.width));
    let strip = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Colors::BRAND_DARK)
            .bg(Colors::STANDARD)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(strip, area);
}

/// Headline, body copy, calls to action and links
pub fn render_copy(f: &mut Frame, view: &PageView, layout: &PageLayout) {
    f.render_widget(Block::default().style(Styles::hero_bg()), layout.copy);

    f.render_widget(
        Paragraph::new(Span::styled(content::HEADLINE, Styles::title())).wrap(Wrap { trim: true }),
        layout.headline,
    );
    f.render_widget(
        Paragraph::new(Span::styled(content::BODY, Styles::hero_text())).wrap(Wrap { trim: true }),
        layout.body,
    );

    let focused = |target: FocusTarget| view.state.is_focused(target);
    let controls = [
        (
            FocusTarget::PrimaryCta,
            button_label(content::PRIMARY_CTA),
            Styles::button_primary(),
            layout.primary_cta,
        ),
        (
            FocusTarget::SecondaryCta,
            button_label(content::SECONDARY_CTA),
            Styles::button_outline().add_modifier(Modifier::REVERSED),
            layout.secondary_cta,
        ),
        (
            FocusTarget::WhatsAppLink,
            content::WHATSAPP_LINK_TEXT.to_string(),
            Styles::link(),
            layout.whatsapp_link,
        ),
        (
            FocusTarget::AllergyFreeLink,
            content::ALLERGY_FREE_LINK.to_string(),
            Styles::link(),
            layout.allergy_link,
        ),
    ];
    for (target, label, style, rect) in controls {
        f.render_widget(
            Paragraph::new(Span::styled(label, Theme::control(style, focused(target)))),
            rect,
        );
    }

    f.render_widget(
        Paragraph::new(Span::styled(content::WHATSAPP_PROMPT, Styles::hero_text())),
        layout.whatsapp_prompt,
    );
}

fn carousel_title(view: &PageView) -> String {
    let state = view.carousel.render_state();
    let mut title = format!(" {} ", content::CAROUSEL_LABEL);
    if state.reduced_motion {
        title.push_str("· movimiento reducido ");
    } else if state.paused {
        title.push_str(&format!("· en pausa ({}) ", view.carousel.pause_reasons()));
    }
    title
}

/// The carousel block: active slide, controls and caption
pub fn render_carousel(f: &mut Frame, view: &PageView, layout: &PageLayout) {
    let carousel = view.carousel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Colors::BRAND_DARK))
        .style(Style::default().bg(Color::White))
        .title(Span::styled(
            carousel_title(view),
            Style::default().fg(Colors::INK).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(block, layout.carousel);

    if carousel.is_empty() {
        return;
    }

    for (i, slide) in carousel.slides().iter().enumerate() {
        if carousel.slide_visibility(i) == SlideVisibility::Hidden {
            continue;
        }
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} ", slide.label),
                Style::default()
                    .fg(Color::White)
                    .bg(Colors::BRAND)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                slide.alt.clone(),
                Style::default().fg(Colors::INK).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(slide.src.clone(), Style::default().fg(Colors::MUTED))),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            layout.slide,
        );
    }

    render_carousel_controls(f, view, layout);

    f.render_widget(
        Paragraph::new(Span::styled(content::CAROUSEL_CAPTION, Styles::nav_hint()))
            .alignment(Alignment::Center),
        layout.caption,
    );
}

fn render_carousel_controls(f: &mut Frame, view: &PageView, layout: &PageLayout) {
    let control_style = Style::default().fg(Colors::BRAND).add_modifier(Modifier::BOLD);
    let focused = |target: FocusTarget| view.state.is_focused(target);

    f.render_widget(
        Paragraph::new(Span::styled(
            PREV_LABEL,
            Theme::control(control_style, focused(FocusTarget::CarouselPrev)),
        )),
        layout.prev,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            NEXT_LABEL,
            Theme::control(control_style, focused(FocusTarget::CarouselNext)),
        )),
        layout.next,
    );

    if let Some(position) = view.carousel.render_state().position_label() {
        f.render_widget(
            Paragraph::new(Span::styled(position, Style::default().fg(Colors::INK))),
            layout.position,
        );
    }

    for (indicator, rect) in view.carousel.indicators().iter().zip(&layout.dots) {
        let symbol = if indicator.current { "●" } else { "○" };
        let style = Theme::control(
            Theme::indicator(indicator.current).bg(Color::White),
            focused(FocusTarget::CarouselDot(indicator.number - 1)),
        );
        f.render_widget(Paragraph::new(Span::styled(symbol, style)), *rect);
    }
}

fn benefit_card(benefit: &Benefit) -> Paragraph<'static> {
    Paragraph::new(Span::styled(benefit.desc, Style::default().fg(Colors::MUTED)))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::BORDER))
                .title(Span::styled(
                    format!(" {} ", benefit.title),
                    Style::default().fg(Colors::INK).add_modifier(Modifier::BOLD),
                )),
        )
}

pub fn render_benefits(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let benefits = content::benefits();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, benefits.len() as u32); 4])
        .split(area);
    for (benefit, column) in benefits.iter().zip(columns.iter()) {
        f.render_widget(benefit_card(benefit), *column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_window_wraps() {
        let cycle = "AB • ";
        assert_eq!(strip_window(cycle, 0, 7), "AB • AB");
        assert_eq!(strip_window(cycle, 3, 4), "• AB");
        assert_eq!(strip_window("", 3, 4), "");
    }
}
