use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
// Color mapping: diet tag → Color32
// ---------------------------------------------------------------------------

/// Maps the diet tags of the whole catalog to stable colours, so a bar keeps
/// its colour while the filter changes.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map over the given tags.
    pub fn new<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tags: Vec<&str> = tags.into_iter().collect();
        tags.sort_unstable();
        tags.dedup();
        let palette = generate_palette(tags.len());
        let mapping = tags
            .into_iter()
            .zip(palette)
            .map(|(t, c)| (t.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a tag.
    pub fn color_for(&self, tag: &str) -> Color32 {
        self.mapping.get(tag).copied().unwrap_or(Color32::GRAY)
    }
}
