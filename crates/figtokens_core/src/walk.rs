//! Depth-first traversal over a document tree
//!
//! Every aggregation pass is one call to [`walk`] (or [`try_walk`]) with its
//! own visitor closure. The visitor sees composite nodes only: mappings and
//! sequences that hold at least one entry. Primitives and empty composites
//! end the descent without a visit.

use crate::node::Node;

/// Visit `node` and all of its descendants in pre-order
///
/// Sequence elements are visited in order, mapping values in key order.
pub fn walk<F>(node: &Node, visitor: &mut F)
where
    F: FnMut(&Node),
{
    if node.is_leaf() || node.is_empty() {
        return;
    }

    visitor(node);

    match node {
        Node::List(items) => items.iter().for_each(|item| walk(item, visitor)),
        Node::Map(fields) => fields.values().for_each(|value| walk(value, visitor)),
        Node::Primitive(_) => {}
    }
}

/// Fallible [`walk`]: the first error from the visitor stops the traversal
pub fn try_walk<F, E>(node: &Node, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&Node) -> Result<(), E>,
{
    if node.is_leaf() || node.is_empty() {
        return Ok(());
    }

    visitor(node)?;

    match node {
        Node::List(items) => items.iter().try_for_each(|item| try_walk(item, visitor)),
        Node::Map(fields) => fields
            .values()
            .try_for_each(|value| try_walk(value, visitor)),
        Node::Primitive(_) => Ok(()),
    }
}
