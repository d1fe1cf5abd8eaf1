//! figtokens core
//!
//! The document side of theme extraction:
//!
//! - **Document model**: [`Node`], an untyped tree of mappings, sequences
//!   and primitives built from a design file's JSON
//! - **Traversal**: [`walk`] and [`try_walk`], a pre-order visitor walk
//! - **Classification**: predicates and [`classify`], which decide what a
//!   node is from the fields it carries
//!
//! # Example
//!
//! ```rust
//! use figtokens_core::{classify, walk, Node, NodeKind};
//!
//! let doc = Node::from_json_str(r#"[{"type": "TEXT"}, {"type": "FRAME"}]"#).unwrap();
//!
//! let mut texts = 0;
//! walk(&doc, &mut |node| {
//!     if let NodeKind::Text(_) = classify(node) {
//!         texts += 1;
//!     }
//! });
//! assert_eq!(texts, 1);
//! ```

pub mod classify;
pub mod error;
pub mod node;
pub mod walk;

pub use classify::{
    classify, classify_with, has_effects, is_color, is_color_with, is_empty, is_rectangle,
    is_shadow, is_text, ColorValue, CornerRadii, EffectType, EffectValue, NodeKind, TextStyle,
    ZeroChannels,
};
pub use error::{NodeError, Result};
pub use node::{Node, Primitive};
pub use walk::{try_walk, walk};
