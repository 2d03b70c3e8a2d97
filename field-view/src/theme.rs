//! Farfly palette and color helpers.

use egui::Color32;

pub const NIGHT: Color32 = Color32::from_rgb(0x05, 0x10, 0x24);
pub const NIGHT_DEEP: Color32 = Color32::from_rgb(0x02, 0x08, 0x12);
pub const PANEL: Color32 = Color32::from_rgb(0x0a, 0x15, 0x29);
pub const PANEL_DARK: Color32 = Color32::from_rgb(0x08, 0x12, 0x26);

pub const ORANGE: Color32 = Color32::from_rgb(0xff, 0x6b, 0x00);
pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xbf, 0xff);
pub const WHITE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const GREY: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);
pub const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);

pub const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const AMBER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const BLUE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);

/// White at the given alpha, for hairlines and faint overlays.
pub fn white_alpha(a: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(0xff, 0xff, 0xff, a)
}

/// Cyan particle/link color at the given strength in `0..=1`.
pub fn cyan_link(strength: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(0x00, 0xbf, 0xff, alpha(strength))
}

/// Orange pointer-line color at the given strength in `0..=1`.
pub fn orange_link(strength: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(0xff, 0x6b, 0x00, alpha(strength))
}

fn alpha(strength: f32) -> u8 {
    (strength.clamp(0.0, 1.0) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_colors_clamp_strength() {
        assert_eq!(cyan_link(2.0).a(), 255);
        assert_eq!(cyan_link(-1.0).a(), 0);
        assert_eq!(orange_link(0.0).a(), 0);
    }

    #[test]
    fn full_strength_is_fully_opaque() {
        assert_eq!(cyan_link(1.0).a(), 255);
        assert_eq!(orange_link(1.0).a(), 255);
    }
}
