//! figtokens theme extraction
//!
//! Turns a design file's document tree into a flat theme object for a
//! styling system.
//!
//! # Overview
//!
//! A single walk per pass collects the distinct values of:
//! - **Colors**: every `color` in the tree, named after the closest palette
//!   entry and keyed in camelCase
//! - **Typography**: line heights, font weights, font sizes, letter spacings
//! - **Radii**: rectangle corner radii
//! - **Box shadows**: drop and inner shadows as CSS strings
//!
//! # Quick Start
//!
//! ```rust
//! use figtokens_core::Node;
//! use figtokens_theme::generate_theme;
//!
//! let file = Node::from_json_str(r#"{
//!     "document": {
//!         "children": [{
//!             "type": "CANVAS",
//!             "children": [
//!                 {"type": "RECTANGLE", "rectangleCornerRadii": [4, 4, 4, 4]}
//!             ]
//!         }]
//!     }
//! }"#).unwrap();
//!
//! let theme = generate_theme(&file).unwrap();
//! assert_eq!(theme.radii.len(), 1);
//! ```
//!
//! # Color names
//!
//! Names come from a [`ColorNamer`]. [`generate_theme`] uses the bundled
//! [`PaletteNamer`]; pass any other namer, including a closure, to
//! [`ThemeGenerator::new`].

pub mod aggregate;
pub mod config;
pub mod error;
pub mod naming;
pub mod theme;
pub mod tokens;

pub use config::ThemeOptions;
pub use error::{ThemeError, ThemeResult};
pub use naming::{ColorNamer, NamedColor, NamingError, PaletteEntry, PaletteNamer};
pub use theme::{generate_theme, Theme, ThemeGenerator};
pub use tokens::{HexStyle, TokenValue};
