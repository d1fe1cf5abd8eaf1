//! Typography pass

use std::collections::BTreeSet;

use figtokens_core::{classify, try_walk, Node, NodeKind, TextStyle};

use crate::error::ThemeResult;
use crate::tokens::{to_em, TokenValue};

/// Sorted, deduplicated typography scales
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Typography {
    pub line_heights: Vec<TokenValue>,
    pub font_weights: Vec<TokenValue>,
    pub font_sizes: Vec<TokenValue>,
    pub letter_spacings: Vec<TokenValue>,
}

/// Collect the typography scales of every text layer
///
/// Line heights become unitless multipliers, letter spacings `em` values.
pub fn collect_typography(canvases: &Node) -> ThemeResult<Typography> {
    let mut line_heights = BTreeSet::new();
    let mut font_weights = BTreeSet::new();
    let mut font_sizes = BTreeSet::new();
    let mut letter_spacings = BTreeSet::new();

    try_walk(canvases, &mut |node: &Node| -> ThemeResult<()> {
        let NodeKind::Text(text) = classify(node) else {
            return Ok(());
        };
        let style = TextStyle::from_node(text)?;

        line_heights.insert(TokenValue::number(style.line_height_percent / 100.0));
        font_weights.insert(TokenValue::number(style.font_weight));
        font_sizes.insert(TokenValue::number(style.font_size));
        letter_spacings.insert(to_em(style.letter_spacing));
        Ok(())
    })?;

    let typography = Typography {
        line_heights: line_heights.into_iter().collect(),
        font_weights: font_weights.into_iter().collect(),
        font_sizes: font_sizes.into_iter().collect(),
        letter_spacings: letter_spacings.into_iter().collect(),
    };
    tracing::debug!(
        "typography pass: {} line heights, {} weights, {} sizes, {} letter spacings",
        typography.line_heights.len(),
        typography.font_weights.len(),
        typography.font_sizes.len(),
        typography.letter_spacings.len()
    );
    Ok(typography)
}
