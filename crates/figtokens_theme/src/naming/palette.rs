//! Nearest-match naming against a fixed palette
//!
//! Distance follows the Name-That-Color metric: squared RGB distance plus
//! twice the squared HSL distance, with hue, saturation and lightness all
//! scaled to `0..=255`.

use serde::{Deserialize, Serialize};

use super::{parse_color_string, ColorNamer, NamedColor, NamingError};

/// A named color as it appears in a palette file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub hex: String,
}

#[derive(Clone, Debug)]
struct Swatch {
    name: String,
    hex: String,
    rgb: [i32; 3],
    hsl: [i32; 3],
}

impl Swatch {
    fn new(name: &str, rgb: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            hex: format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]),
            rgb: rgb.map(i32::from),
            hsl: hsl(rgb),
        }
    }

    fn distance(&self, rgb: [i32; 3], hsl: [i32; 3]) -> f64 {
        let sq = |a: [i32; 3], b: [i32; 3]| -> f64 {
            a.iter()
                .zip(b.iter())
                .map(|(x, y)| f64::from(x - y).powi(2))
                .sum()
        };
        sq(self.rgb, rgb) + sq(self.hsl, hsl) * 2.0
    }
}

/// Names colors after the closest entry of a palette
#[derive(Clone, Debug)]
pub struct PaletteNamer {
    swatches: Vec<Swatch>,
}

impl PaletteNamer {
    /// The bundled palette
    pub fn builtin() -> Self {
        Self {
            swatches: BUILTIN
                .iter()
                .map(|&(name, hex)| Swatch::new(name, rgb_from_u32(hex)))
                .collect(),
        }
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = PaletteEntry>,
    ) -> Result<Self, NamingError> {
        let swatches = entries
            .into_iter()
            .map(|entry| Ok(Swatch::new(&entry.name, parse_color_string(&entry.hex)?)))
            .collect::<Result<Vec<_>, NamingError>>()?;
        if swatches.is_empty() {
            return Err(NamingError::EmptyPalette);
        }
        Ok(Self { swatches })
    }

    /// Load a palette from `[{"name": "..", "hex": "#rrggbb"}, ..]`
    pub fn from_json_str(src: &str) -> Result<Self, NamingError> {
        let entries: Vec<PaletteEntry> = serde_json::from_str(src)?;
        Self::from_entries(entries)
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Closest palette entry; ties go to the entry listed first
    pub fn nearest(&self, rgb: [u8; 3]) -> Option<NamedColor> {
        let target = rgb.map(i32::from);
        let target_hsl = hsl(rgb);

        let mut best: Option<(&Swatch, f64)> = None;
        for swatch in &self.swatches {
            if swatch.rgb == target {
                best = Some((swatch, 0.0));
                break;
            }
            let d = swatch.distance(target, target_hsl);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((swatch, d));
            }
        }

        best.map(|(swatch, distance)| NamedColor {
            name: swatch.name.clone(),
            hex: swatch.hex.clone(),
            distance,
        })
    }
}

impl Default for PaletteNamer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ColorNamer for PaletteNamer {
    fn name_color(&self, color: &str) -> Result<NamedColor, NamingError> {
        let rgb = parse_color_string(color)?;
        self.nearest(rgb)
            .ok_or_else(|| NamingError::NoMatch(color.to_string()))
    }
}

fn rgb_from_u32(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

/// HSL with each component scaled to `0..=255` and truncated
fn hsl(rgb: [u8; 3]) -> [i32; 3] {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (min + max) / 2.0;

    let mut s = 0.0;
    if l > 0.0 && l < 1.0 {
        s = delta / if l < 0.5 { 2.0 * l } else { 2.0 - 2.0 * l };
    }

    let mut h = 0.0;
    if delta > 0.0 {
        if max == r && max != g {
            h += (g - b) / delta;
        }
        if max == g && max != b {
            h += 2.0 + (b - r) / delta;
        }
        if max == b && max != r {
            h += 4.0 + (r - g) / delta;
        }
        h /= 6.0;
    }

    [(h * 255.0) as i32, (s * 255.0) as i32, (l * 255.0) as i32]
}

/// Bundled palette: CSS named colors followed by common Name-That-Color names
const BUILTIN: &[(&str, u32)] = &[
    ("Alice Blue", 0xF0F8FF),
    ("Antique White", 0xFAEBD7),
    ("Aqua", 0x00FFFF),
    ("Aquamarine", 0x7FFFD4),
    ("Azure", 0xF0FFFF),
    ("Beige", 0xF5F5DC),
    ("Bisque", 0xFFE4C4),
    ("Black", 0x000000),
    ("Blanched Almond", 0xFFEBCD),
    ("Blue", 0x0000FF),
    ("Blue Violet", 0x8A2BE2),
    ("Brown", 0xA52A2A),
    ("Burly Wood", 0xDEB887),
    ("Cadet Blue", 0x5F9EA0),
    ("Chartreuse", 0x7FFF00),
    ("Chocolate", 0xD2691E),
    ("Coral", 0xFF7F50),
    ("Cornflower Blue", 0x6495ED),
    ("Cornsilk", 0xFFF8DC),
    ("Crimson", 0xDC143C),
    ("Dark Blue", 0x00008B),
    ("Dark Cyan", 0x008B8B),
    ("Dark Goldenrod", 0xB8860B),
    ("Dark Gray", 0xA9A9A9),
    ("Dark Green", 0x006400),
    ("Dark Khaki", 0xBDB76B),
    ("Dark Magenta", 0x8B008B),
    ("Dark Olive Green", 0x556B2F),
    ("Dark Orange", 0xFF8C00),
    ("Dark Orchid", 0x9932CC),
    ("Dark Red", 0x8B0000),
    ("Dark Salmon", 0xE9967A),
    ("Dark Sea Green", 0x8FBC8F),
    ("Dark Slate Blue", 0x483D8B),
    ("Dark Slate Gray", 0x2F4F4F),
    ("Dark Turquoise", 0x00CED1),
    ("Dark Violet", 0x9400D3),
    ("Deep Pink", 0xFF1493),
    ("Deep Sky Blue", 0x00BFFF),
    ("Dim Gray", 0x696969),
    ("Dodger Blue", 0x1E90FF),
    ("Fire Brick", 0xB22222),
    ("Floral White", 0xFFFAF0),
    ("Forest Green", 0x228B22),
    ("Fuchsia", 0xFF00FF),
    ("Gainsboro", 0xDCDCDC),
    ("Ghost White", 0xF8F8FF),
    ("Gold", 0xFFD700),
    ("Goldenrod", 0xDAA520),
    ("Gray", 0x808080),
    ("Green", 0x008000),
    ("Green Yellow", 0xADFF2F),
    ("Honeydew", 0xF0FFF0),
    ("Hot Pink", 0xFF69B4),
    ("Indian Red", 0xCD5C5C),
    ("Indigo", 0x4B0082),
    ("Ivory", 0xFFFFF0),
    ("Khaki", 0xF0E68C),
    ("Lavender", 0xE6E6FA),
    ("Lavender Blush", 0xFFF0F5),
    ("Lawn Green", 0x7CFC00),
    ("Lemon Chiffon", 0xFFFACD),
    ("Light Blue", 0xADD8E6),
    ("Light Coral", 0xF08080),
    ("Light Cyan", 0xE0FFFF),
    ("Light Goldenrod Yellow", 0xFAFAD2),
    ("Light Gray", 0xD3D3D3),
    ("Light Green", 0x90EE90),
    ("Light Pink", 0xFFB6C1),
    ("Light Salmon", 0xFFA07A),
    ("Light Sea Green", 0x20B2AA),
    ("Light Sky Blue", 0x87CEFA),
    ("Light Slate Gray", 0x778899),
    ("Light Steel Blue", 0xB0C4DE),
    ("Light Yellow", 0xFFFFE0),
    ("Lime", 0x00FF00),
    ("Lime Green", 0x32CD32),
    ("Linen", 0xFAF0E6),
    ("Maroon", 0x800000),
    ("Medium Aquamarine", 0x66CDAA),
    ("Medium Blue", 0x0000CD),
    ("Medium Orchid", 0xBA55D3),
    ("Medium Purple", 0x9370DB),
    ("Medium Sea Green", 0x3CB371),
    ("Medium Slate Blue", 0x7B68EE),
    ("Medium Spring Green", 0x00FA9A),
    ("Medium Turquoise", 0x48D1CC),
    ("Medium Violet Red", 0xC71585),
    ("Midnight Blue", 0x191970),
    ("Mint Cream", 0xF5FFFA),
    ("Misty Rose", 0xFFE4E1),
    ("Moccasin", 0xFFE4B5),
    ("Navajo White", 0xFFDEAD),
    ("Navy", 0x000080),
    ("Old Lace", 0xFDF5E6),
    ("Olive", 0x808000),
    ("Olive Drab", 0x6B8E23),
    ("Orange", 0xFFA500),
    ("Orange Red", 0xFF4500),
    ("Orchid", 0xDA70D6),
    ("Pale Goldenrod", 0xEEE8AA),
    ("Pale Green", 0x98FB98),
    ("Pale Turquoise", 0xAFEEEE),
    ("Pale Violet Red", 0xDB7093),
    ("Papaya Whip", 0xFFEFD5),
    ("Peach Puff", 0xFFDAB9),
    ("Peru", 0xCD853F),
    ("Pink", 0xFFC0CB),
    ("Plum", 0xDDA0DD),
    ("Powder Blue", 0xB0E0E6),
    ("Purple", 0x800080),
    ("Rebecca Purple", 0x663399),
    ("Red", 0xFF0000),
    ("Rosy Brown", 0xBC8F8F),
    ("Royal Blue", 0x4169E1),
    ("Saddle Brown", 0x8B4513),
    ("Salmon", 0xFA8072),
    ("Sandy Brown", 0xF4A460),
    ("Sea Green", 0x2E8B57),
    ("Seashell", 0xFFF5EE),
    ("Sienna", 0xA0522D),
    ("Silver", 0xC0C0C0),
    ("Sky Blue", 0x87CEEB),
    ("Slate Blue", 0x6A5ACD),
    ("Slate Gray", 0x708090),
    ("Snow", 0xFFFAFA),
    ("Spring Green", 0x00FF7F),
    ("Steel Blue", 0x4682B4),
    ("Tan", 0xD2B48C),
    ("Teal", 0x008080),
    ("Thistle", 0xD8BFD8),
    ("Tomato", 0xFF6347),
    ("Turquoise", 0x40E0D0),
    ("Violet", 0xEE82EE),
    ("Wheat", 0xF5DEB3),
    ("White", 0xFFFFFF),
    ("White Smoke", 0xF5F5F5),
    ("Yellow", 0xFFFF00),
    ("Yellow Green", 0x9ACD32),
    ("Persian Green", 0x00A693),
    ("Mine Shaft", 0x323232),
    ("Cod Gray", 0x111111),
    ("Alabaster", 0xFAFAFA),
    ("Athens Gray", 0xEEF0F3),
    ("Mercury", 0xE5E5E5),
    ("Silver Chalice", 0xACACAC),
    ("Tundora", 0x4A4A4A),
    ("Shark", 0x25272C),
    ("Ebony Clay", 0x26283B),
    ("Cerulean", 0x02A4D3),
    ("Royal Purple", 0x6B3FA0),
    ("Electric Violet", 0x8B00FF),
    ("Amaranth", 0xE52B50),
    ("Cinnabar", 0xE34234),
    ("Sunglow", 0xFFCC33),
    ("Selective Yellow", 0xFFBA00),
    ("Jungle Green", 0x29AB87),
    ("Mountain Meadow", 0x1AB385),
    ("Caribbean Green", 0x00CC99),
    ("Malachite", 0x0BDA51),
    ("Flamingo", 0xF2552C),
    ("Burnt Sienna", 0xE97451),
    ("Pomegranate", 0xF34723),
    ("Bright Turquoise", 0x08E8DE),
    ("Picton Blue", 0x45B1E8),
    ("Curious Blue", 0x2596D1),
    ("Heliotrope", 0xDF73FF),
    ("Cornflower", 0x93CCEA),
    ("Porcelain", 0xEFF2F3),
    ("Geyser", 0xD4DFE2),
    ("Pale Sky", 0x6E7783),
    ("River Bed", 0x434C59),
    ("Oxford Blue", 0x384555),
    ("Big Stone", 0x162A40),
];
