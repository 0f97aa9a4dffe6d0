#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod layout;
pub mod stations;
pub mod text_metrics;
pub mod theme;

pub use config::{Config, LayoutConfig, load_config};
pub use layout::{
    AdjustedLabel, LabelAlign, LabelBox, build_label_box, build_label_box_measured,
    build_station_boxes, compute_label_layout, label_priority, resolve_label_collisions,
    visible_labels,
};
pub use stations::{Station, StationsError, load_stations, parse_stations};
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
