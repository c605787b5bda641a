use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::side::{TeamSide, SIDE_ORDER};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Side accents
// ---------------------------------------------------------------------------

/// Heading accent per displayed side.
#[derive(Debug, Clone)]
pub struct SideColors {
    colors: Vec<(TeamSide, Color32)>,
    default_color: Color32,
}

impl Default for SideColors {
    fn default() -> Self {
        let colors = SIDE_ORDER
            .into_iter()
            .zip(generate_palette(SIDE_ORDER.len()))
            .collect();
        SideColors {
            colors,
            default_color: Color32::GRAY,
        }
    }
}

impl SideColors {
    pub fn color_for(&self, side: TeamSide) -> Color32 {
        self.colors
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}
