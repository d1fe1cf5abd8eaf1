//! Color pass

use figtokens_core::{classify_with, walk, Node, NodeKind};
use indexmap::{IndexMap, IndexSet};

use crate::config::ThemeOptions;
use crate::error::ThemeResult;
use crate::naming::ColorNamer;
use crate::tokens::{camelize, to_color_string};

/// Collect every distinct `color` in the tree, keyed by its camelCased name
///
/// Colors keep the order they were first seen in. When two colors resolve
/// to the same name, the one seen later wins and the entry stays where the
/// first one put it.
pub fn collect_colors(
    canvases: &Node,
    namer: &dyn ColorNamer,
    options: &ThemeOptions,
) -> ThemeResult<IndexMap<String, String>> {
    let mut colors = IndexSet::new();
    walk(canvases, &mut |node| {
        let Some(color) = node.get("color") else {
            return;
        };
        if let NodeKind::Color(value) = classify_with(color, options.zero_channels) {
            let encoded = to_color_string(&value, options.hex_style);
            tracing::trace!("color pass: found {}", encoded);
            colors.insert(encoded);
        }
    });

    let mut named = IndexMap::with_capacity(colors.len());
    for color in colors {
        let name = camelize(&namer.name_color(&color)?.name);
        if let Some(previous) = named.insert(name.clone(), color) {
            tracing::debug!(
                "color pass: `{}` already named {}, overwriting",
                name,
                previous
            );
        }
    }

    tracing::debug!("color pass: {} named colors", named.len());
    Ok(named)
}
