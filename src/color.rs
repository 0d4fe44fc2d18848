use std::collections::{BTreeMap, BTreeSet};

use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};
use serde::Serialize;

/// An 8-bit sRGB colour, independent of any UI toolkit.
pub type Rgb = Srgb<u8>;

// ---------------------------------------------------------------------------
// Categorical palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format()
        })
        .collect()
}

/// Parse a `#rrggbb` colour.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

// ---------------------------------------------------------------------------
// Continuous colour scales
// ---------------------------------------------------------------------------

/// Sequential colour scales used for value-keyed colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScale {
    Tealgrn,
    Magma,
    Sunset,
}

const TEALGRN: &[[u8; 3]] = &[
    [176, 242, 188],
    [137, 232, 172],
    [103, 219, 165],
    [76, 200, 163],
    [56, 178, 163],
    [44, 152, 160],
    [37, 125, 152],
];

const MAGMA: &[[u8; 3]] = &[
    [0, 0, 4],
    [24, 15, 61],
    [68, 15, 118],
    [114, 31, 129],
    [158, 47, 127],
    [205, 64, 113],
    [241, 96, 93],
    [253, 150, 104],
    [254, 202, 141],
    [252, 253, 191],
];

const SUNSET: &[[u8; 3]] = &[
    [243, 231, 155],
    [250, 196, 132],
    [248, 160, 126],
    [235, 127, 134],
    [206, 102, 147],
    [160, 89, 160],
    [92, 83, 165],
];

impl ColorScale {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::Tealgrn => TEALGRN,
            ColorScale::Magma => MAGMA,
            ColorScale::Sunset => SUNSET,
        }
    }

    /// Colour at position `t` in `[0, 1]`, interpolated in linear RGB.
    /// Out-of-range positions are clamped; NaN maps to the middle.
    pub fn sample(self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };

        let pos = t * (stops.len() - 1) as f64;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - i as f64;

        let [r, g, b] = stops[i];
        let lo = Rgb::new(r, g, b);
        let [r, g, b] = stops[i + 1];
        let hi = Rgb::new(r, g, b);

        if frac <= 0.0 {
            return lo;
        }
        if frac >= 1.0 {
            return hi;
        }
        let lo: LinSrgb<f32> = lo.into_linear();
        let hi: LinSrgb<f32> = hi.into_linear();
        Rgb::from_linear(lo.mix(hi, frac as f32))
    }

    /// Colour for `value` on a scale spanning `min..=max`.
    pub fn map(self, value: f64, min: f64, max: f64) -> Rgb {
        if !(max > min) {
            return self.sample(0.5);
        }
        self.sample((value - min) / (max - min))
    }
}

// ---------------------------------------------------------------------------
// Categorical mapping: category label → colour
// ---------------------------------------------------------------------------

/// Maps distinct category labels (e.g. city names) to distinct colours.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Rgb>,
    default_color: Rgb,
}

impl CategoryColors {
    /// Assign palette colours to the sorted distinct labels.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let unique: BTreeSet<&str> = labels.into_iter().collect();
        let palette = generate_palette(unique.len());
        let mapping = unique
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();

        CategoryColors {
            mapping,
            default_color: Rgb::new(128, 128, 128),
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Rgb {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sizes() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(5);
        assert_eq!(colors.len(), 5);
        let distinct: BTreeSet<(u8, u8, u8)> =
            colors.iter().map(|c| (c.red, c.green, c.blue)).collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#1f77b4"), Some(Rgb::new(0x1f, 0x77, 0xb4)));
        assert_eq!(parse_hex("not a colour"), None);
    }

    #[test]
    fn test_scale_endpoints_are_first_and_last_stop() {
        for scale in [
            ColorScale::Tealgrn,
            ColorScale::Magma,
            ColorScale::Sunset,
        ] {
            let stops = scale.stops();
            let [r, g, b] = stops[0];
            assert_eq!(scale.sample(0.0), Rgb::new(r, g, b));
            assert_eq!(scale.sample(-3.0), Rgb::new(r, g, b));
            let [r, g, b] = stops[stops.len() - 1];
            assert_eq!(scale.sample(1.0), Rgb::new(r, g, b));
            assert_eq!(scale.sample(7.5), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn test_scale_hits_interior_stops() {
        // Magma has ten stops, so 1/9 lands exactly on the second one.
        let [r, g, b] = MAGMA[1];
        assert_eq!(ColorScale::Magma.map(1.0, 0.0, 9.0), Rgb::new(r, g, b));
    }

    #[test]
    fn test_scale_interpolates_between_stops() {
        let mid = ColorScale::Magma.map(0.5, 0.0, 9.0);
        let [r0, _, _] = MAGMA[0];
        let [r1, _, _] = MAGMA[1];
        assert!(mid.red > r0 && mid.red < r1);
    }

    #[test]
    fn test_degenerate_range_maps_to_middle() {
        let mid = ColorScale::Sunset.sample(0.5);
        assert_eq!(ColorScale::Sunset.map(3.0, 3.0, 3.0), mid);
        assert_eq!(ColorScale::Sunset.map(f64::NAN, 0.0, 1.0), mid);
    }

    #[test]
    fn test_category_colors() {
        let colors = CategoryColors::new(["Boston", "Austin", "Boston", "Denver"]);
        let assigned: BTreeSet<(u8, u8, u8)> = ["Austin", "Boston", "Denver"]
            .iter()
            .map(|l| colors.color_for(l))
            .map(|c| (c.red, c.green, c.blue))
            .collect();
        assert_eq!(assigned.len(), 3);
        assert_eq!(colors.color_for("Nowhere"), Rgb::new(128, 128, 128));
    }
}
