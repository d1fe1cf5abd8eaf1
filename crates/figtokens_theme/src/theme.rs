//! Theme assembly

use figtokens_core::{Node, NodeError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::aggregate::{
    collect_box_shadows, collect_colors, collect_radii, collect_typography, Typography,
};
use crate::config::ThemeOptions;
use crate::error::ThemeResult;
use crate::naming::{ColorNamer, PaletteNamer};
use crate::tokens::TokenValue;

/// A styled-system theme extracted from a design document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: IndexMap<String, String>,
    pub line_heights: Vec<TokenValue>,
    pub font_weights: Vec<TokenValue>,
    pub font_sizes: Vec<TokenValue>,
    pub letter_spacings: Vec<TokenValue>,
    pub radii: Vec<TokenValue>,
    pub box_shadows: Vec<String>,
}

impl Theme {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.line_heights.is_empty()
            && self.font_weights.is_empty()
            && self.font_sizes.is_empty()
            && self.letter_spacings.is_empty()
            && self.radii.is_empty()
            && self.box_shadows.is_empty()
    }

    pub fn to_json_pretty(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the aggregation passes over a document
///
/// The generator owns the color namer, so tests can swap in a stub:
///
/// ```rust
/// use figtokens_core::Node;
/// use figtokens_theme::{NamedColor, NamingError, ThemeGenerator};
///
/// let generator = ThemeGenerator::new(|_: &str| {
///     Ok::<_, NamingError>(NamedColor::new("Brand", "#ffffff"))
/// });
/// let doc = Node::from_json_str(r#"{"document": {"children": []}}"#).unwrap();
/// assert!(generator.generate(&doc).unwrap().is_empty());
/// ```
pub struct ThemeGenerator {
    namer: Box<dyn ColorNamer>,
    options: ThemeOptions,
}

impl ThemeGenerator {
    pub fn new(namer: impl ColorNamer + 'static) -> Self {
        Self::with_options(namer, ThemeOptions::default())
    }

    pub fn with_options(namer: impl ColorNamer + 'static, options: ThemeOptions) -> Self {
        Self {
            namer: Box::new(namer),
            options,
        }
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Extract a theme from a file response (`{"document": {"children": [..]}}`)
    pub fn generate(&self, file: &Node) -> ThemeResult<Theme> {
        let document = file
            .get("document")
            .ok_or_else(|| NodeError::missing("document"))?;
        let Some(canvases) = document.get("children") else {
            tracing::debug!("ThemeGenerator::generate - document has no children");
            return Ok(Theme::default());
        };

        tracing::debug!(
            "ThemeGenerator::generate - {} canvases",
            canvases.as_list().map_or(0, <[Node]>::len)
        );

        let colors = collect_colors(canvases, self.namer.as_ref(), &self.options)?;
        let Typography {
            line_heights,
            font_weights,
            font_sizes,
            letter_spacings,
        } = collect_typography(canvases)?;
        let radii = collect_radii(canvases)?;
        let box_shadows = collect_box_shadows(canvases, &self.options)?;

        Ok(Theme {
            colors,
            line_heights,
            font_weights,
            font_sizes,
            letter_spacings,
            radii,
            box_shadows,
        })
    }
}

impl Default for ThemeGenerator {
    fn default() -> Self {
        Self::new(PaletteNamer::builtin())
    }
}

impl std::fmt::Debug for ThemeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeGenerator")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Extract a theme with the bundled palette and default options
pub fn generate_theme(file: &Node) -> ThemeResult<Theme> {
    ThemeGenerator::default().generate(file)
}
