//! Theme generation options
//!
//! Options can be built in code or read from TOML:
//!
//! ```toml
//! zero_channels = "accept"
//! hex_style = "padded"
//! ```

use figtokens_core::ZeroChannels;
use serde::{Deserialize, Serialize};

use crate::error::ThemeResult;
use crate::tokens::HexStyle;

/// Knobs for the places where legacy theme output is questionable
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    /// Whether colors with a zero channel count as colors
    pub zero_channels: ZeroChannels,
    /// How opaque colors are written in hex
    pub hex_style: HexStyle,
}

impl ThemeOptions {
    /// Options reproducing legacy theme output exactly
    pub fn legacy() -> Self {
        Self {
            zero_channels: ZeroChannels::Reject,
            hex_style: HexStyle::Unpadded,
        }
    }

    pub fn from_toml_str(src: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml(&self) -> ThemeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ThemeOptions::default();
        assert_eq!(options.zero_channels, ZeroChannels::Reject);
        assert_eq!(options.hex_style, HexStyle::Padded);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options = ThemeOptions::from_toml_str(r#"zero_channels = "accept""#).unwrap();
        assert_eq!(options.zero_channels, ZeroChannels::Accept);
        assert_eq!(options.hex_style, HexStyle::Padded);

        assert_eq!(ThemeOptions::from_toml_str("").unwrap(), ThemeOptions::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let options = ThemeOptions::legacy();
        let text = options.to_toml().unwrap();
        assert!(text.contains(r#"hex_style = "unpadded""#));
        assert_eq!(ThemeOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(ThemeOptions::from_toml_str(r#"hex_style = "octal""#).is_err());
    }
}
