//! Value formatters for design tokens
//!
//! Raw document numbers become the strings and numbers a styling system
//! expects:
//! - Colors (`#rrggbb`, `rgba(..)`)
//! - Dimensions (`px`, `em`)
//! - Box shadows
//! - Token names (camelCase)

pub mod casing;
pub mod color;
pub mod shadow;
pub mod units;
mod value;

pub use casing::{camelize, capitalize};
pub use color::{normalize_rgba, to_color_string, to_hex, to_rgba_string, HexStyle};
pub use shadow::to_box_shadow;
pub use units::{round_to, to_em, to_fixed, to_px, EM_BASE_PX};
pub use value::TokenValue;
