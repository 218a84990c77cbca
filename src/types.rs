//! Type-safe page vocabulary
//!
//! Service-line tones, page sections and focusable controls as enums rather
//! than loose strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Color tone of a service line or navigation item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Allergy,
    Premium,
    Standard,
    #[default]
    Neutral,
}

/// In-page anchors the header and hero link to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Section {
    #[strum(serialize = "#line-allergy")]
    LineAllergy,
    #[strum(serialize = "#line-premium")]
    LinePremium,
    #[strum(serialize = "#line-standard")]
    LineStandard,
    #[strum(serialize = "#lineas")]
    Lines,
    #[strum(serialize = "#historia")]
    History,
    #[strum(serialize = "#servicio")]
    Service,
    #[strum(serialize = "#contacto")]
    Contact,
    #[strum(serialize = "/allergy-free")]
    AllergyFreeProducts,
}

impl Section {
    /// The anchor or path this section is reached by
    pub fn href(&self) -> String {
        self.to_string()
    }
}

/// Where a navigation entry leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// An anchor or path on this site
    Section(Section),
    /// The WhatsApp deep link
    WhatsApp,
}

/// Controls reachable with Tab / Shift-Tab, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    HeaderWhatsApp,
    HeaderContact,
    MenuButton,
    PrimaryCta,
    SecondaryCta,
    WhatsAppLink,
    AllergyFreeLink,
    CarouselPrev,
    CarouselNext,
    /// Indicator dot, 0-based slide index
    CarouselDot(usize),
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderWhatsApp => write!(f, "WhatsApp"),
            Self::HeaderContact => write!(f, "Contacto"),
            Self::MenuButton => write!(f, "Abrir menú"),
            Self::PrimaryCta => write!(f, "Quiero una máquina en mi local"),
            Self::SecondaryCta => write!(f, "Ver líneas de servicio"),
            Self::WhatsAppLink => write!(f, "Abrir WhatsApp"),
            Self::AllergyFreeLink => write!(f, "Ver productos Allergy Free"),
            Self::CarouselPrev => write!(f, "Anterior"),
            Self::CarouselNext => write!(f, "Siguiente"),
            Self::CarouselDot(index) => write!(f, "Ir al slide {}", index + 1),
        }
    }
}

impl FocusTarget {
    /// Whether this control lives inside the carousel surface
    pub fn is_carousel_control(&self) -> bool {
        matches!(
            self,
            Self::CarouselPrev | Self::CarouselNext | Self::CarouselDot(_)
        )
    }

    /// Full tab order for a carousel with `slide_count` indicator dots
    pub fn tab_order(slide_count: usize) -> Vec<FocusTarget> {
        let mut order = vec![
            Self::HeaderWhatsApp,
            Self::HeaderContact,
            Self::MenuButton,
            Self::PrimaryCta,
            Self::SecondaryCta,
            Self::WhatsAppLink,
            Self::AllergyFreeLink,
        ];
        if slide_count > 0 {
            order.push(Self::CarouselPrev);
            order.push(Self::CarouselNext);
            order.extend((0..slide_count).map(Self::CarouselDot));
        }
        order
    }
}
