//! Aggregation passes
//!
//! Each pass walks the whole canvas list once with its own visitor and
//! reduces what it finds to a deduplicated collection. The passes share no
//! state and can run in any order.

mod colors;
mod radii;
mod shadows;
mod typography;

pub use colors::collect_colors;
pub use radii::collect_radii;
pub use shadows::collect_box_shadows;
pub use typography::{collect_typography, Typography};
