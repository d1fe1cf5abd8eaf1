//! Box shadow tokens

use figtokens_core::{EffectType, EffectValue};

use super::color::{to_color_string, HexStyle};
use super::units::to_px;

/// CSS `box-shadow` value for a shadow effect
///
/// Inner shadows get an `inset` prefix.
pub fn to_box_shadow(effect: &EffectValue, style: HexStyle) -> String {
    let shadow = format!(
        "{} {} {} {}",
        to_px(effect.offset_x),
        to_px(effect.offset_y),
        to_px(effect.radius),
        to_color_string(&effect.color, style)
    );
    match effect.effect_type {
        EffectType::InnerShadow => format!("inset {}", shadow),
        _ => shadow,
    }
}
