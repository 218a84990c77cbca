//! Static page copy
//!
//! Text for the header, hero, carousel and benefit cards. Slides can be
//! overridden from the config file; everything else is fixed.

use crate::carousel::Slide;
use crate::types::{LinkTarget, Section, Tone};

pub const HEADLINE: &str = "The easy way for your snack time.";

pub const BODY: &str = "Pick’n GO: manejo de máquinas de vending. Instalamos tu máquina en tu local \
y la abastecemos con productos según la línea elegida.";

pub const PRIMARY_CTA: &str = "Quiero una máquina en mi local";
pub const SECONDARY_CTA: &str = "Ver líneas de servicio";
pub const WHATSAPP_PROMPT: &str = "¿Prefieres escribir de una vez?";
pub const WHATSAPP_LINK_TEXT: &str = "Abrir WhatsApp";
pub const ALLERGY_FREE_LINK: &str = "Ver productos Allergy Free";

pub const CAROUSEL_LABEL: &str = "Productos destacados (carrusel)";
pub const CAROUSEL_CAPTION: &str =
    "Cambia de producto automáticamente (orden 1→5). Botones para control manual.";

/// Words cycling through the hero marquee strip
pub const STRIP_WORDS: [&str; 4] = ["FRESCO", "FACIL", "RICO", "PRACTICO"];

/// A header tab or overlay menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: LinkTarget,
    pub tone: Tone,
}

/// Benefit card under the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub title: &'static str,
    pub desc: &'static str,
}

/// The three service-line tabs shown in the header
pub fn line_tabs() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "ALLERGY FREE LINE",
            target: LinkTarget::Section(Section::LineAllergy),
            tone: Tone::Allergy,
        },
        NavItem {
            label: "PREMIUM LINE",
            target: LinkTarget::Section(Section::LinePremium),
            tone: Tone::Premium,
        },
        NavItem {
            label: "STANDAR LINE",
            target: LinkTarget::Section(Section::LineStandard),
            tone: Tone::Standard,
        },
    ]
}

/// Entries of the overlay menu: line tabs, page sections, then WhatsApp
pub fn menu_items() -> Vec<NavItem> {
    let mut items = line_tabs();
    items.extend([
        NavItem {
            label: "Nuestra historia",
            target: LinkTarget::Section(Section::History),
            tone: Tone::Neutral,
        },
        NavItem {
            label: "Nuestro servicio",
            target: LinkTarget::Section(Section::Service),
            tone: Tone::Neutral,
        },
        NavItem {
            label: "Contacto",
            target: LinkTarget::Section(Section::Contact),
            tone: Tone::Neutral,
        },
        NavItem {
            label: "Escribir por WhatsApp",
            target: LinkTarget::WhatsApp,
            tone: Tone::Neutral,
        },
    ]);
    items
}

pub fn benefits() -> [Benefit; 4] {
    [
        Benefit {
            title: "Instalación en tu local",
            desc: "Coordinamos la colocación y puesta en marcha.",
        },
        Benefit {
            title: "Abastecimiento continuo",
            desc: "Reposición y control de inventario por línea.",
        },
        Benefit {
            title: "Mantenimiento y soporte",
            desc: "Operación estable con atención cuando la necesites.",
        },
        Benefit {
            title: "Tres líneas de servicio",
            desc: "Allergy Free, Premium y Standard.",
        },
    ]
}

/// The five featured products, in display order
pub fn default_slides() -> Vec<Slide> {
    (1..=5)
        .map(|i| {
            Slide::new(
                format!("/images/products/producto-{}.png", i),
                format!("Producto {}", i),
                format!("{:02}", i),
            )
        })
        .collect()
}

/// One full cycle of the marquee strip; the UI scrolls through repeats of it
pub fn strip_cycle() -> String {
    STRIP_WORDS.iter().map(|w| format!("{} • ", w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slides_match_products() {
        let slides = default_slides();
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].src, "/images/products/producto-1.png");
        assert_eq!(slides[4].alt, "Producto 5");
        assert_eq!(slides[2].label, "03");
    }

    #[test]
    fn test_menu_starts_with_line_tabs() {
        let items = menu_items();
        assert_eq!(items.len(), 7);
        assert_eq!(&items[..3], &line_tabs()[..]);
        assert_eq!(items[6].target, LinkTarget::WhatsApp);
    }

    #[test]
    fn test_strip_cycle() {
        assert_eq!(strip_cycle(), "FRESCO • FACIL • RICO • PRACTICO • ");
    }
}
