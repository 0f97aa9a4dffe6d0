use crate::config::ViewportConfig;

use super::LabelBox;

/// Keep only the labels whose scaled, offset rectangle intersects the
/// viewport inflated by `cull_margin` on every side. Boundary contact counts
/// as visible.
///
/// This is an upstream culling step for rendering performance; resolving
/// collisions on the filtered set instead of the full set is the caller's
/// tradeoff and changes nothing about the resolver's semantics.
pub fn visible_labels(
    boxes: &[LabelBox],
    viewport_x: f32,
    viewport_y: f32,
    viewport_width: f32,
    viewport_height: f32,
    scale: f32,
    config: &ViewportConfig,
) -> Vec<LabelBox> {
    let margin = config.cull_margin;
    boxes
        .iter()
        .filter(|label| {
            let screen_x = label.x * scale + viewport_x;
            let screen_y = label.y * scale + viewport_y;
            let screen_width = label.width * scale;
            let screen_height = label.height * scale;

            screen_x + screen_width >= -margin
                && screen_x <= viewport_width + margin
                && screen_y + screen_height >= -margin
                && screen_y <= viewport_height + margin
        })
        .cloned()
        .collect()
}
