//! Corner radius pass

use std::collections::BTreeSet;

use figtokens_core::{classify, try_walk, CornerRadii, Node, NodeKind};

use crate::error::ThemeResult;
use crate::tokens::{to_px, TokenValue};

/// Collect rectangle corner radii
///
/// Uniform corners give a bare number; mixed corners a CSS shorthand such
/// as `"12px 4px 12px 4px"`.
pub fn collect_radii(canvases: &Node) -> ThemeResult<Vec<TokenValue>> {
    let mut radii = BTreeSet::new();

    try_walk(canvases, &mut |node: &Node| -> ThemeResult<()> {
        let NodeKind::Rectangle(rect) = classify(node) else {
            return Ok(());
        };
        let Some(corners) = CornerRadii::from_node(rect)? else {
            return Ok(());
        };

        let value = match corners.uniform() {
            Some(radius) => TokenValue::number(radius),
            None => TokenValue::text(
                corners
                    .0
                    .iter()
                    .map(|&r| to_px(r))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        };
        radii.insert(value);
        Ok(())
    })?;

    tracing::debug!("radius pass: {} radii", radii.len());
    Ok(radii.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uniform_and_mixed_radii() {
        let canvases = Node::from(json!([{
            "children": [
                {"type": "RECTANGLE", "rectangleCornerRadii": [12, 4, 12, 4]},
                {"type": "RECTANGLE", "rectangleCornerRadii": [4, 4, 4, 4]},
                {"type": "RECTANGLE", "rectangleCornerRadii": [4, 4, 4, 4]},
                {"type": "RECTANGLE"}
            ]
        }]));
        assert_eq!(
            collect_radii(&canvases).unwrap(),
            vec![TokenValue::text("12px 4px 12px 4px"), TokenValue::number(4.0)]
        );
    }

    #[test]
    fn test_zero_corners_render_unitless() {
        let canvases = Node::from(json!([
            {"type": "RECTANGLE", "rectangleCornerRadii": [0, 8, 0, 8]}
        ]));
        assert_eq!(
            collect_radii(&canvases).unwrap(),
            vec![TokenValue::text("0 8px 0 8px")]
        );
    }

    #[test]
    fn test_radii_only_from_rectangles() {
        let canvases = Node::from(json!([
            {"type": "FRAME", "rectangleCornerRadii": [2, 2, 2, 2]}
        ]));
        assert!(collect_radii(&canvases).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_radii_is_error() {
        let canvases = Node::from(json!([
            {"type": "RECTANGLE", "rectangleCornerRadii": ["4", 4, 4, 4]}
        ]));
        assert!(collect_radii(&canvases).is_err());
    }
}
