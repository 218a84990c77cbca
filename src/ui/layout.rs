//! Page geometry
//!
//! One pass computes every rectangle the page draws into. The same layout
//! answers mouse hit tests, so clicks always land on what was drawn.

use crate::content::{
    self, ALLERGY_FREE_LINK, PRIMARY_CTA, SECONDARY_CTA, WHATSAPP_LINK_TEXT, WHATSAPP_PROMPT,
};
use crate::theme::UiConstants;
use crate::types::FocusTarget;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::Span;

pub const HEADER_WHATSAPP_LABEL: &str = "[WhatsApp]";
pub const HEADER_CONTACT_LABEL: &str = "[Contacto]";
pub const MENU_BUTTON_LABEL: &str = "[≡ Menú]";
pub const PREV_LABEL: &str = "[←]";
pub const NEXT_LABEL: &str = "[→]";

/// Display width of `text` in terminal cells
pub fn text_width(text: &str) -> u16 {
    Span::raw(text).width() as u16
}

/// Label drawn for a button: the text padded by one space each side
pub fn button_label(text: &str) -> String {
    format!(" {} ", text)
}

/// What a mouse position landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Control(FocusTarget),
    /// Header line tab, by position
    Tab(usize),
}

/// Every rectangle on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub area: Rect,
    pub header: Rect,
    pub brand: Rect,
    pub tagline: Rect,
    pub header_whatsapp: Rect,
    pub header_contact: Rect,
    pub menu_button: Rect,
    pub tab_bar: Rect,
    pub tabs: Vec<Rect>,
    pub strip: Rect,
    pub copy: Rect,
    pub headline: Rect,
    pub body: Rect,
    pub primary_cta: Rect,
    pub secondary_cta: Rect,
    pub whatsapp_prompt: Rect,
    pub whatsapp_link: Rect,
    pub allergy_link: Rect,
    /// Carousel block including its border; the hover region
    pub carousel: Rect,
    pub slide: Rect,
    pub prev: Rect,
    pub next: Rect,
    pub position: Rect,
    pub dots: Vec<Rect>,
    pub caption: Rect,
    pub benefits: Rect,
    pub nav_bar: Rect,
}

/// A `height`-row band starting `offset` rows into `area`, clipped to it
fn band(area: Rect, offset: u16, height: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(offset), area.width, height).intersection(area)
}

/// A `width`-cell span starting at column `x` on `row`, clipped to it
fn span_at(row: Rect, x: u16, width: u16) -> Rect {
    Rect::new(x, row.y, width, row.height).intersection(row)
}

impl PageLayout {
    pub fn compute(area: Rect, slide_count: usize) -> Self {
        let mut layout = Self {
            area,
            ..Self::default()
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Length(UiConstants::STRIP_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(UiConstants::BENEFITS_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(area);

        layout.compute_header(rows[0]);
        layout.strip = rows[1];

        let hero = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);
        layout.compute_copy(hero[0]);
        layout.compute_carousel(hero[1], slide_count);

        layout.benefits = rows[3];
        layout.nav_bar = rows[4];
        layout
    }

    fn compute_header(&mut self, header: Rect) {
        self.header = header;
        let top = band(header, 0, 1);
        self.tagline = band(header, 1, 1);
        self.tab_bar = band(header, 2, 1);

        // Buttons are right-aligned on the top row, one cell apart
        let mut right = top.right();
        let mut place = |label: &str| {
            let width = text_width(label);
            let x = right.saturating_sub(width).max(top.x);
            right = x.saturating_sub(1);
            span_at(top, x, width)
        };
        self.menu_button = place(MENU_BUTTON_LABEL);
        self.header_contact = place(HEADER_CONTACT_LABEL);
        self.header_whatsapp = place(HEADER_WHATSAPP_LABEL);
        self.brand = Rect::new(
            top.x,
            top.y,
            self.header_whatsapp.x.saturating_sub(top.x),
            top.height,
        );

        let mut x = self.tab_bar.x + 1;
        self.tabs = content::line_tabs()
            .iter()
            .map(|tab| {
                // " ● " dot prefix plus the padded label
                let width = 2 + text_width(&button_label(tab.label));
                let rect = span_at(self.tab_bar, x, width);
                x = x.saturating_add(width + 1);
                rect
            })
            .collect();
    }

    fn compute_copy(&mut self, copy: Rect) {
        self.copy = copy;
        let inner = Rect::new(
            copy.x.saturating_add(2),
            copy.y,
            copy.width.saturating_sub(4),
            copy.height,
        );
        self.headline = band(inner, 1, 2);
        self.body = band(inner, 4, 3);

        let cta_row = band(inner, 8, 1);
        let primary_width = text_width(&button_label(PRIMARY_CTA));
        self.primary_cta = span_at(cta_row, cta_row.x, primary_width);
        self.secondary_cta = span_at(
            cta_row,
            cta_row.x.saturating_add(primary_width + 2),
            text_width(&button_label(SECONDARY_CTA)),
        );

        let wa_row = band(inner, 10, 1);
        let prompt_width = text_width(WHATSAPP_PROMPT);
        self.whatsapp_prompt = span_at(wa_row, wa_row.x, prompt_width);
        self.whatsapp_link = span_at(
            wa_row,
            wa_row.x.saturating_add(prompt_width + 1),
            text_width(WHATSAPP_LINK_TEXT),
        );

        let allergy_row = band(inner, 11, 1);
        self.allergy_link = span_at(allergy_row, allergy_row.x, text_width(ALLERGY_FREE_LINK));
    }

    fn compute_carousel(&mut self, column: Rect, slide_count: usize) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(column);
        self.carousel = parts[0];
        self.caption = parts[1];

        let inner = Rect::new(
            self.carousel.x.saturating_add(1),
            self.carousel.y.saturating_add(1),
            self.carousel.width.saturating_sub(2),
            self.carousel.height.saturating_sub(2),
        );
        let controls_height = UiConstants::CAROUSEL_CONTROLS_HEIGHT.min(inner.height);
        self.slide = Rect::new(
            inner.x,
            inner.y,
            inner.width,
            inner.height - controls_height,
        );

        if slide_count == 0 {
            return;
        }

        let controls = Rect::new(
            inner.x,
            inner.y + self.slide.height,
            inner.width,
            controls_height,
        );
        let mut x = controls.x;
        self.prev = span_at(controls, x, text_width(PREV_LABEL));
        x = x.saturating_add(text_width(PREV_LABEL) + 1);
        self.next = span_at(controls, x, text_width(NEXT_LABEL));
        x = x.saturating_add(text_width(NEXT_LABEL) + 2);

        let widest = format!("{} / {}", slide_count, slide_count);
        self.position = span_at(controls, x, text_width(&widest));
        x = x.saturating_add(text_width(&widest) + 2);

        // One dot every two columns; dots past the row's end get no rect
        self.dots = (0..slide_count)
            .map_while(|i| {
                u16::try_from(i)
                    .ok()
                    .and_then(|i| i.checked_mul(2))
                    .and_then(|offset| x.checked_add(offset))
                    .filter(|&column| column < controls.right())
            })
            .map(|column| span_at(controls, column, 1))
            .collect();
    }

    /// Rectangle occupied by a focusable control
    pub fn rect_for(&self, target: FocusTarget) -> Rect {
        match target {
            FocusTarget::HeaderWhatsApp => self.header_whatsapp,
            FocusTarget::HeaderContact => self.header_contact,
            FocusTarget::MenuButton => self.menu_button,
            FocusTarget::PrimaryCta => self.primary_cta,
            FocusTarget::SecondaryCta => self.secondary_cta,
            FocusTarget::WhatsAppLink => self.whatsapp_link,
            FocusTarget::AllergyFreeLink => self.allergy_link,
            FocusTarget::CarouselPrev => self.prev,
            FocusTarget::CarouselNext => self.next,
            FocusTarget::CarouselDot(i) => self.dots.get(i).copied().unwrap_or_default(),
        }
    }

    /// Whether the pointer is over the carousel block
    pub fn in_carousel(&self, column: u16, row: u16) -> bool {
        self.carousel.contains(Position::new(column, row))
    }

    /// The control under a mouse position, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some(i) = self.tabs.iter().position(|r| r.contains(pos)) {
            return Some(Hit::Tab(i));
        }
        FocusTarget::tab_order(self.dots.len())
            .into_iter()
            .find(|target| self.rect_for(*target).contains(pos))
            .map(Hit::Control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::compute(Rect::new(0, 0, 120, 40), 5)
    }

    #[test]
    fn test_sections_stack_vertically() {
        let l = layout();
        assert_eq!(l.header.height, UiConstants::HEADER_HEIGHT);
        assert_eq!(l.strip.y, l.header.bottom());
        assert_eq!(l.nav_bar.bottom(), 40);
        assert_eq!(l.benefits.bottom(), l.nav_bar.y);
    }

    #[test]
    fn test_header_buttons_right_aligned() {
        let l = layout();
        assert_eq!(l.menu_button.right(), 120);
        assert!(l.header_contact.right() < l.menu_button.x);
        assert!(l.header_whatsapp.right() < l.header_contact.x);
        assert_eq!(l.tabs.len(), 3);
    }

    #[test]
    fn test_controls_do_not_overlap() {
        let l = layout();
        let mut rects = vec![l.prev, l.next, l.position];
        rects.extend(l.dots.iter().copied());
        for (i, a) in rects.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &rects[i + 1..] {
                assert!(!a.intersects(*b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_hit_test_finds_every_control() {
        let l = layout();
        for target in FocusTarget::tab_order(5) {
            let rect = l.rect_for(target);
            assert_eq!(l.hit_test(rect.x, rect.y), Some(Hit::Control(target)));
        }
        let tab = l.tabs[1];
        assert_eq!(l.hit_test(tab.x, tab.y), Some(Hit::Tab(1)));
    }

    #[test]
    fn test_empty_carousel_has_no_controls() {
        let l = PageLayout::compute(Rect::new(0, 0, 120, 40), 0);
        assert!(l.dots.is_empty());
        assert!(l.prev.is_empty());
        assert_eq!(l.hit_test(l.carousel.x + 1, l.carousel.bottom() - 2), None);
    }

    #[test]
    fn test_many_slides_keep_dots_inside_controls_row() {
        let l = PageLayout::compute(Rect::new(0, 0, 120, 40), 40_000);
        assert!(!l.dots.is_empty());
        assert!(l.dots.len() < 40_000);
        for (i, dot) in l.dots.iter().enumerate() {
            assert!(!dot.is_empty());
            assert!(l.carousel.contains(Position::new(dot.x, dot.y)));
            assert_eq!(dot.y, l.prev.y);
            assert_eq!(l.hit_test(dot.x, dot.y), Some(Hit::Control(FocusTarget::CarouselDot(i))));
        }
        assert!(l.dots.windows(2).all(|pair| pair[1].x == pair[0].x + 2));
        assert_eq!(l.rect_for(FocusTarget::CarouselDot(39_999)), Rect::default());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let l = PageLayout::compute(Rect::new(0, 0, 10, 4), 5);
        assert!(l.nav_bar.bottom() <= 4);
        assert!(l.dots.iter().all(|d| d.is_empty() || l.area.contains(Position::new(d.x, d.y))));
    }
}
