//! Human-readable names for colors
//!
//! The color pass keys every color by a name such as `persianGreen`. Where
//! that name comes from is pluggable: anything implementing [`ColorNamer`]
//! can be handed to the [`ThemeGenerator`](crate::ThemeGenerator), including
//! a plain closure. [`PaletteNamer`] is the bundled nearest-match namer.

mod palette;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use palette::{PaletteEntry, PaletteNamer};

/// Errors raised by color namers
#[derive(Debug, Error)]
pub enum NamingError {
    #[error("not a recognizable color: {0}")]
    InvalidColor(String),

    #[error("color palette is empty")]
    EmptyPalette,

    #[error("no name found for color {0}")]
    NoMatch(String),

    #[error("invalid palette json: {0}")]
    Palette(#[from] serde_json::Error),
}

/// Best match returned by a [`ColorNamer`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    /// Hex of the palette entry that matched, which may differ from the input
    pub hex: String,
    /// Distance between the input and the match; `0.0` for exact hits
    #[serde(default)]
    pub distance: f64,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            distance: 0.0,
        }
    }
}

/// Looks up the closest human-readable name for a color string
///
/// Input strings are what the color formatter emits: `#rrggbb` or
/// `rgba(R,G,B,A)`.
pub trait ColorNamer: Send + Sync {
    fn name_color(&self, color: &str) -> Result<NamedColor, NamingError>;
}

impl<F> ColorNamer for F
where
    F: Fn(&str) -> Result<NamedColor, NamingError> + Send + Sync,
{
    fn name_color(&self, color: &str) -> Result<NamedColor, NamingError> {
        self(color)
    }
}

/// Parse hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or `rgb()`/`rgba()` into RGB bytes
///
/// Alpha does not take part in naming and is dropped.
pub fn parse_color_string(color: &str) -> Result<[u8; 3], NamingError> {
    let invalid = || NamingError::InvalidColor(color.to_string());
    let trimmed = color.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16);
        return match hex.len() {
            3 | 4 => {
                let mut rgb = [0u8; 3];
                for (i, channel) in rgb.iter_mut().enumerate() {
                    *channel = digit(i, 1).map_err(|_| invalid())? * 17;
                }
                Ok(rgb)
            }
            6 | 8 => {
                let mut rgb = [0u8; 3];
                for (i, channel) in rgb.iter_mut().enumerate() {
                    *channel = digit(i * 2, 2).map_err(|_| invalid())?;
                }
                Ok(rgb)
            }
            _ => Err(invalid()),
        };
    }

    let args = trimmed
        .strip_prefix("rgba(")
        .or_else(|| trimmed.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let channels: Vec<&str> = args.split(',').map(str::trim).collect();
    if !(3..=4).contains(&channels.len()) {
        return Err(invalid());
    }
    let mut rgb = [0u8; 3];
    for (channel, raw) in rgb.iter_mut().zip(&channels) {
        let value: f64 = raw.parse().map_err(|_| invalid())?;
        *channel = value.clamp(0.0, 255.0) as u8;
    }
    Ok(rgb)
}
