//! Node classification
//!
//! Design nodes carry no schema. What a node is gets decided by probing its
//! fields: a mapping with `r`, `g`, `b`, `a` is a color, a mapping whose
//! `type` is `"TEXT"` is a text layer, and so on. The predicates here do that
//! probing, and [`classify`] folds them into a single [`NodeKind`].
//!
//! The typed views ([`ColorValue`], [`TextStyle`], [`EffectValue`],
//! [`CornerRadii`]) read the fields a kind needs and report a [`NodeError`]
//! when one of them is missing or malformed.

use serde::{Deserialize, Serialize};

use crate::error::{NodeError, Result};
use crate::node::Node;

const TYPE_TEXT: &str = "TEXT";
const TYPE_RECTANGLE: &str = "RECTANGLE";
const TYPE_DROP_SHADOW: &str = "DROP_SHADOW";
const TYPE_INNER_SHADOW: &str = "INNER_SHADOW";
const TYPE_LAYER_BLUR: &str = "LAYER_BLUR";
const TYPE_BACKGROUND_BLUR: &str = "BACKGROUND_BLUR";

/// How color channels equal to zero are treated
///
/// Design exports commonly contain pure black or fully saturated colors with
/// a zero channel. `Reject` drops them, matching legacy themes, which tested
/// the channels for truthiness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroChannels {
    #[default]
    Reject,
    Accept,
}

/// An RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorValue {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Read the four channels off a color mapping
    pub fn from_node(node: &Node) -> Result<Self> {
        Ok(Self {
            r: number_field(node, "r")?,
            g: number_field(node, "g")?,
            b: number_field(node, "b")?,
            a: number_field(node, "a")?,
        })
    }
}

/// Typography values of a text layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub line_height_percent: f64,
    pub font_weight: f64,
    pub font_size: f64,
    pub letter_spacing: f64,
}

impl TextStyle {
    /// Read the `style` mapping of a text node
    pub fn from_node(node: &Node) -> Result<Self> {
        let style = node.get("style").ok_or_else(|| NodeError::missing("style"))?;
        if style.as_map().is_none() {
            return Err(NodeError::invalid("style", "a mapping"));
        }
        Ok(Self {
            line_height_percent: number_field(style, "lineHeightPercent")?,
            font_weight: number_field(style, "fontWeight")?,
            font_size: number_field(style, "fontSize")?,
            letter_spacing: number_field(style, "letterSpacing")?,
        })
    }
}

/// The `type` tag of an effect
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    Other(String),
}

impl EffectType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            TYPE_DROP_SHADOW => Self::DropShadow,
            TYPE_INNER_SHADOW => Self::InnerShadow,
            TYPE_LAYER_BLUR => Self::LayerBlur,
            TYPE_BACKGROUND_BLUR => Self::BackgroundBlur,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_shadow(&self) -> bool {
        matches!(self, Self::DropShadow | Self::InnerShadow)
    }
}

/// A shadow effect with everything needed to render it
#[derive(Clone, Debug, PartialEq)]
pub struct EffectValue {
    pub effect_type: EffectType,
    pub offset_x: f64,
    pub offset_y: f64,
    pub radius: f64,
    pub color: ColorValue,
}

impl EffectValue {
    /// Read an effect mapping
    ///
    /// `offset`, `radius` and `color` are required, so this is meant for
    /// shadow effects; blurs carry no offset or color.
    pub fn from_node(node: &Node) -> Result<Self> {
        let tag = node
            .get("type")
            .ok_or_else(|| NodeError::missing("type"))?
            .as_str()
            .ok_or_else(|| NodeError::invalid("type", "a string"))?;
        let offset = node.get("offset").ok_or_else(|| NodeError::missing("offset"))?;
        let color = node.get("color").ok_or_else(|| NodeError::missing("color"))?;

        Ok(Self {
            effect_type: EffectType::from_tag(tag),
            offset_x: number_field(offset, "x")?,
            offset_y: number_field(offset, "y")?,
            radius: number_field(node, "radius")?,
            color: ColorValue::from_node(color)?,
        })
    }
}

/// Per-corner radii of a rectangle: top-left, top-right, bottom-right, bottom-left
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadii(pub [f64; 4]);

impl CornerRadii {
    /// Read `rectangleCornerRadii`; `None` when it is absent or falsy
    pub fn from_node(node: &Node) -> Result<Option<Self>> {
        let Some(field) = node.get("rectangleCornerRadii").filter(|f| f.is_truthy()) else {
            return Ok(None);
        };
        let invalid = || NodeError::invalid("rectangleCornerRadii", "a list of four numbers");
        let items = field.as_list().ok_or_else(invalid)?;
        let [tl, tr, br, bl] = items else {
            return Err(invalid());
        };
        let corner = |n: &Node| n.as_f64().ok_or_else(invalid);
        Ok(Some(Self([corner(tl)?, corner(tr)?, corner(br)?, corner(bl)?])))
    }

    /// The shared radius when all four corners agree
    pub fn uniform(&self) -> Option<f64> {
        let first = self.0[0];
        self.0.iter().all(|&r| r == first).then_some(first)
    }
}

/// What a node turned out to be
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind<'a> {
    Color(ColorValue),
    Text(&'a Node),
    Rectangle(&'a Node),
    Effect(EffectType),
    Other,
}

/// Classify with the default zero-channel handling
pub fn classify(node: &Node) -> NodeKind<'_> {
    classify_with(node, ZeroChannels::default())
}

pub fn classify_with(node: &Node, zero: ZeroChannels) -> NodeKind<'_> {
    if is_color_with(node, zero) {
        if let Ok(color) = ColorValue::from_node(node) {
            return NodeKind::Color(color);
        }
    }
    if is_text(node) {
        return NodeKind::Text(node);
    }
    if is_rectangle(node) {
        return NodeKind::Rectangle(node);
    }
    match type_tag(node).map(EffectType::from_tag) {
        Some(EffectType::Other(_)) | None => NodeKind::Other,
        Some(effect) => NodeKind::Effect(effect),
    }
}

/// A mapping whose `r`, `g`, `b` and `a` are all truthy
///
/// A zero channel disqualifies the node; see [`ZeroChannels`].
pub fn is_color(node: &Node) -> bool {
    is_color_with(node, ZeroChannels::Reject)
}

pub fn is_color_with(node: &Node, zero: ZeroChannels) -> bool {
    const CHANNELS: [&str; 4] = ["r", "g", "b", "a"];
    match zero {
        ZeroChannels::Reject => CHANNELS.iter().all(|c| node.has_truthy(c)),
        ZeroChannels::Accept => CHANNELS
            .iter()
            .all(|c| node.get(c).and_then(Node::as_f64).is_some()),
    }
}

pub fn is_text(node: &Node) -> bool {
    type_tag(node) == Some(TYPE_TEXT)
}

pub fn is_rectangle(node: &Node) -> bool {
    type_tag(node) == Some(TYPE_RECTANGLE)
}

/// Drop shadows and inner shadows; blurs are effects but not shadows
pub fn is_shadow(effect: &Node) -> bool {
    type_tag(effect)
        .map(EffectType::from_tag)
        .is_some_and(|effect_type| effect_type.is_shadow())
}

/// A node with a non-empty `effects` list
pub fn has_effects(node: &Node) -> bool {
    node.get("effects")
        .and_then(Node::as_list)
        .is_some_and(|effects| !effects.is_empty())
}

pub fn is_empty(node: &Node) -> bool {
    node.is_empty()
}

fn type_tag(node: &Node) -> Option<&str> {
    node.get("type").and_then(Node::as_str)
}

fn number_field(node: &Node, field: &str) -> Result<f64> {
    node.get(field)
        .ok_or_else(|| NodeError::missing(field))?
        .as_f64()
        .ok_or_else(|| NodeError::invalid(field, "a number"))
}
