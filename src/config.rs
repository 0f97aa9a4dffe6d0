use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sizing constants for the label box builder.
///
/// Widths are estimated from character counts rather than glyph metrics;
/// the estimate only needs to be close enough to prevent most true overlaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Average character width as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Horizontal breathing room added to every estimated width.
    pub width_padding: f32,
    /// Vertical breathing room added on top of the font size.
    pub height_padding: f32,
    /// Gap between the anchor and the bottom edge of a top-aligned label.
    pub clearance_above: f32,
    /// Gap between the anchor and the top edge of a bottom-aligned label.
    /// Larger than `clearance_above` so labels clear the marker emphasis
    /// drawn below interchange dots.
    pub clearance_below: f32,
    /// Gap between the anchor and the near edge of a left/right label.
    pub clearance_side: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
            width_padding: 8.0,
            height_padding: 4.0,
            clearance_above: 18.0,
            clearance_below: 26.0,
            clearance_side: 18.0,
        }
    }
}

/// Tuning for the iterative collision resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Iteration cap; exhausting it returns the best positions found so far.
    pub max_iterations: usize,
    /// Displacement budget: no label moves further than this from its origin.
    pub max_offset: f32,
    /// Minimum spacing kept between label boxes during overlap tests.
    pub padding: f32,
    /// Repulsion step applied per colliding pair per iteration.
    pub force: f32,
    /// Offset distance beyond which a leader line back to the station is drawn.
    pub leader_line_threshold: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            max_offset: 50.0,
            padding: 4.0,
            force: 2.0,
            leader_line_threshold: 20.0,
        }
    }
}

/// Fixed priority classes for station labels. Values only matter relative to
/// each other; a higher value resists displacement more strongly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityConfig {
    pub terminal: f32,
    pub interchange: f32,
    pub standard: f32,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            terminal: 100.0,
            interchange: 50.0,
            standard: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Margin around the viewport within which labels are still kept.
    pub cull_margin: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { cull_margin: 100.0 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub label: LabelConfig,
    pub collision: CollisionConfig,
    pub priority: PriorityConfig,
    pub viewport: ViewportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelConfigFile {
    char_width_ratio: Option<f32>,
    width_padding: Option<f32>,
    height_padding: Option<f32>,
    clearance_above: Option<f32>,
    clearance_below: Option<f32>,
    clearance_side: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollisionConfigFile {
    max_iterations: Option<usize>,
    max_offset: Option<f32>,
    padding: Option<f32>,
    force: Option<f32>,
    leader_line_threshold: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriorityConfigFile {
    terminal: Option<f32>,
    interchange: Option<f32>,
    standard: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViewportConfigFile {
    cull_margin: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    font_family: Option<String>,
    font_size: Option<f32>,
    label: Option<LabelConfigFile>,
    collision: Option<CollisionConfigFile>,
    priority: Option<PriorityConfigFile>,
    viewport: Option<ViewportConfigFile>,
}

/// Load a configuration, applying overrides from an optional JSON (or JSON5)
/// file on top of the defaults. Absent keys keep their default values.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = match serde_json::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(&contents)
            .map_err(|_| anyhow::anyhow!("invalid config file {}: {json_err}", path.display()))?,
    };

    if let Some(v) = parsed.font_family {
        config.theme.font_family = v;
    }
    if let Some(v) = parsed.font_size {
        config.theme.font_size = v;
    }

    if let Some(label) = parsed.label {
        if let Some(v) = label.char_width_ratio {
            config.layout.label.char_width_ratio = v;
        }
        if let Some(v) = label.width_padding {
            config.layout.label.width_padding = v;
        }
        if let Some(v) = label.height_padding {
            config.layout.label.height_padding = v;
        }
        if let Some(v) = label.clearance_above {
            config.layout.label.clearance_above = v;
        }
        if let Some(v) = label.clearance_below {
            config.layout.label.clearance_below = v;
        }
        if let Some(v) = label.clearance_side {
            config.layout.label.clearance_side = v;
        }
    }

    if let Some(collision) = parsed.collision {
        if let Some(v) = collision.max_iterations {
            config.layout.collision.max_iterations = v;
        }
        if let Some(v) = collision.max_offset {
            config.layout.collision.max_offset = v;
        }
        if let Some(v) = collision.padding {
            config.layout.collision.padding = v;
        }
        if let Some(v) = collision.force {
            config.layout.collision.force = v;
        }
        if let Some(v) = collision.leader_line_threshold {
            config.layout.collision.leader_line_threshold = v;
        }
    }

    if let Some(priority) = parsed.priority {
        if let Some(v) = priority.terminal {
            config.layout.priority.terminal = v;
        }
        if let Some(v) = priority.interchange {
            config.layout.priority.interchange = v;
        }
        if let Some(v) = priority.standard {
            config.layout.priority.standard = v;
        }
    }

    if let Some(viewport) = parsed.viewport
        && let Some(v) = viewport.cull_margin
    {
        config.layout.viewport.cull_margin = v;
    }

    Ok(config)
}
