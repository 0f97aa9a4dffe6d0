//! Station label layout: box construction, collision resolution and
//! viewport culling.
//!
//! The whole pass is a pure, bounded CPU computation over an in-memory
//! array — no I/O, no shared state between invocations. It is safe to run
//! once per frame or per pan/zoom settle event; callers needing
//! responsiveness for large networks should cull with [`visible_labels`]
//! rather than expect mid-pass cancellation.

mod collision;
mod label_box;
mod types;
mod viewport;

pub use collision::resolve_label_collisions;
pub use label_box::{build_label_box, build_label_box_measured, label_priority};
pub use types::{AdjustedLabel, LabelAlign, LabelBox};
pub use viewport::visible_labels;

use std::collections::BTreeMap;

use crate::config::LayoutConfig;
use crate::stations::Station;
use crate::theme::Theme;

/// Build one label box per station. Font sizes default from the theme when a
/// station does not override them; priority comes from the station's
/// terminal/interchange classification. With `measure` set, widths use real
/// font metrics instead of the character-count estimate.
pub fn build_station_boxes(
    stations: &[Station],
    theme: &Theme,
    config: &LayoutConfig,
    measure: bool,
) -> Vec<LabelBox> {
    stations
        .iter()
        .map(|station| {
            let font_size = station.font_size.unwrap_or(theme.font_size);
            let priority =
                label_priority(station.terminal, station.interchange, &config.priority);
            if measure {
                build_label_box_measured(
                    &station.id,
                    &station.name,
                    station.x,
                    station.y,
                    station.align,
                    font_size,
                    priority,
                    theme,
                    &config.label,
                )
            } else {
                build_label_box(
                    &station.id,
                    &station.name,
                    station.x,
                    station.y,
                    station.align,
                    font_size,
                    priority,
                    &config.label,
                )
            }
        })
        .collect()
}

/// Full pipeline: build a box per station, then resolve collisions.
pub fn compute_label_layout(
    stations: &[Station],
    theme: &Theme,
    config: &LayoutConfig,
) -> BTreeMap<String, AdjustedLabel> {
    let boxes = build_station_boxes(stations, theme, config, false);
    resolve_label_collisions(&boxes, &config.collision)
}
