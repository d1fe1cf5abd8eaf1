//! Box shadow pass

use figtokens_core::{has_effects, is_shadow, try_walk, EffectValue, Node};
use indexmap::IndexSet;

use crate::config::ThemeOptions;
use crate::error::ThemeResult;
use crate::tokens::to_box_shadow;

/// Collect every distinct drop or inner shadow, in the order first seen
pub fn collect_box_shadows(canvases: &Node, options: &ThemeOptions) -> ThemeResult<Vec<String>> {
    let mut shadows = IndexSet::new();

    try_walk(canvases, &mut |node: &Node| -> ThemeResult<()> {
        if !has_effects(node) {
            return Ok(());
        }
        let effects = node.get("effects").and_then(Node::as_list).unwrap_or_default();
        for effect in effects {
            if !is_shadow(effect) {
                tracing::trace!("shadow pass: skipping non-shadow effect");
                continue;
            }
            let effect = EffectValue::from_node(effect)?;
            shadows.insert(to_box_shadow(&effect, options.hex_style));
        }
        Ok(())
    })?;

    tracing::debug!("shadow pass: {} box shadows", shadows.len());
    Ok(shadows.into_iter().collect())
}
