//! Link helpers

use crate::config_file::WhatsAppConfig;
use crate::types::{FocusTarget, LinkTarget, Section};

/// Build a `wa.me` deep link.
///
/// Non-digit characters are stripped from the phone number (`+51 999-888`
/// becomes `51999888`); an empty message omits the `text` parameter.
pub fn wa_link(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let mut link = format!("https://wa.me/{}", digits);
    if !message.trim().is_empty() {
        link.push_str("?text=");
        link.push_str(&urlencoding::encode(message.trim()));
    }
    link
}

/// Resolve a navigation target to the href it would open
pub fn resolve(target: &LinkTarget, whatsapp: &WhatsAppConfig) -> String {
    match target {
        LinkTarget::Section(section) => section.href(),
        LinkTarget::WhatsApp => wa_link(&whatsapp.phone, &whatsapp.message),
    }
}

/// The link a page control opens, if it opens one
pub fn for_control(target: FocusTarget) -> Option<LinkTarget> {
    match target {
        FocusTarget::HeaderWhatsApp | FocusTarget::WhatsAppLink => Some(LinkTarget::WhatsApp),
        FocusTarget::HeaderContact | FocusTarget::PrimaryCta => {
            Some(LinkTarget::Section(Section::Contact))
        }
        FocusTarget::SecondaryCta => Some(LinkTarget::Section(Section::Lines)),
        FocusTarget::AllergyFreeLink => Some(LinkTarget::Section(Section::AllergyFreeProducts)),
        FocusTarget::MenuButton
        | FocusTarget::CarouselPrev
        | FocusTarget::CarouselNext
        | FocusTarget::CarouselDot(_) => None,
    }
}
