//! Reusable overlay components and the keybinding registry

pub mod help_overlay;
pub mod keybindings;
pub mod menu_overlay;

use ratatui::layout::Rect;

/// Centered popup rectangle clamped to `area`.
///
/// Width is `width_percent` of the area but never below `min_width`
/// (unless the area itself is narrower).
pub fn popup_rect(area: Rect, width_percent: u16, min_width: u16, height: u16) -> Rect {
    let scaled = (u32::from(area.width) * u32::from(width_percent) / 100) as u16;
    let width = scaled
        .max(min_width)
        .min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
