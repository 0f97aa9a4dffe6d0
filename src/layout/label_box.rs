// Label box construction: turns a station anchor, display text and preferred
// alignment into the axis-aligned rectangle the collision resolver works on.

use crate::config::{LabelConfig, PriorityConfig};
use crate::text_metrics;
use crate::theme::Theme;

use super::types::{HorizontalSide, VerticalSide};
use super::{LabelAlign, LabelBox};

/// Build a label box from a character-count width estimate.
///
/// The width is `chars * font_size * char_width_ratio + width_padding` — a
/// deliberate approximation that stays close enough to real text extents to
/// prevent most true overlaps without consulting glyph metrics.
#[allow(clippy::too_many_arguments)]
pub fn build_label_box(
    station_id: &str,
    name: &str,
    anchor_x: f32,
    anchor_y: f32,
    align: LabelAlign,
    font_size: f32,
    priority: f32,
    config: &LabelConfig,
) -> LabelBox {
    let width = estimate_width(name, font_size, config);
    place_label_box(
        station_id, width, anchor_x, anchor_y, align, font_size, priority, config,
    )
}

/// Like [`build_label_box`], but measures the text with real font metrics
/// when the theme's font family resolves to an installed font. Falls back to
/// the character-count estimate otherwise, so the two builders agree on
/// machines without the font.
#[allow(clippy::too_many_arguments)]
pub fn build_label_box_measured(
    station_id: &str,
    name: &str,
    anchor_x: f32,
    anchor_y: f32,
    align: LabelAlign,
    font_size: f32,
    priority: f32,
    theme: &Theme,
    config: &LabelConfig,
) -> LabelBox {
    let width = match text_metrics::measure_text_width(name, font_size, &theme.font_family) {
        Some(measured) if measured > 0.0 => measured + config.width_padding,
        _ => estimate_width(name, font_size, config),
    };
    place_label_box(
        station_id, width, anchor_x, anchor_y, align, font_size, priority, config,
    )
}

fn estimate_width(name: &str, font_size: f32, config: &LabelConfig) -> f32 {
    let char_width = font_size * config.char_width_ratio;
    name.chars().count() as f32 * char_width + config.width_padding
}

#[allow(clippy::too_many_arguments)]
fn place_label_box(
    station_id: &str,
    width: f32,
    anchor_x: f32,
    anchor_y: f32,
    align: LabelAlign,
    font_size: f32,
    priority: f32,
    config: &LabelConfig,
) -> LabelBox {
    let height = font_size + config.height_padding;

    let x = match align.horizontal() {
        HorizontalSide::Left => anchor_x - (width + config.clearance_side),
        HorizontalSide::Right => anchor_x + config.clearance_side,
        HorizontalSide::Centered => anchor_x - width / 2.0,
    };
    let y = match align.vertical() {
        VerticalSide::Above => anchor_y - (height + config.clearance_above),
        VerticalSide::Below => anchor_y + config.clearance_below,
        VerticalSide::Centered => anchor_y - height / 2.0,
    };

    LabelBox {
        station_id: station_id.to_string(),
        x,
        y,
        width,
        height,
        origin_x: x,
        origin_y: y,
        align,
        priority,
    }
}

/// Fixed priority for a station label based on its network role. Terminal
/// stations outrank interchanges, which outrank everything else; ties within
/// a class are left to the resolver's pairwise math.
pub fn label_priority(is_terminal: bool, is_interchange: bool, config: &PriorityConfig) -> f32 {
    if is_terminal {
        config.terminal
    } else if is_interchange {
        config.interchange
    } else {
        config.standard
    }
}
