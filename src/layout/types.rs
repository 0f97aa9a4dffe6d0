use serde::{Deserialize, Serialize};

/// Which side of the station anchor a label prefers. Recorded on the box but
/// never re-evaluated once the resolver starts nudging positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelAlign {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Default for LabelAlign {
    fn default() -> Self {
        LabelAlign::Right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerticalSide {
    Above,
    Centered,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HorizontalSide {
    Left,
    Centered,
    Right,
}

impl LabelAlign {
    pub(crate) fn vertical(self) -> VerticalSide {
        match self {
            LabelAlign::Top | LabelAlign::TopLeft | LabelAlign::TopRight => VerticalSide::Above,
            LabelAlign::Bottom | LabelAlign::BottomLeft | LabelAlign::BottomRight => {
                VerticalSide::Below
            }
            _ => VerticalSide::Centered,
        }
    }

    pub(crate) fn horizontal(self) -> HorizontalSide {
        match self {
            LabelAlign::Left | LabelAlign::TopLeft | LabelAlign::BottomLeft => {
                HorizontalSide::Left
            }
            LabelAlign::Right | LabelAlign::TopRight | LabelAlign::BottomRight => {
                HorizontalSide::Right
            }
            _ => HorizontalSide::Centered,
        }
    }
}

/// One station label's bounding rectangle for a single layout pass.
///
/// `x`/`y` is the current top-left corner and moves during resolution;
/// `origin_x`/`origin_y` is the anchor-derived rest position and is set once
/// at construction. The displacement budget is measured against the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBox {
    pub station_id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub align: LabelAlign,
    pub priority: f32,
}

impl LabelBox {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Euclidean distance between the current position and the rest position.
    pub fn offset_from_origin(&self) -> f32 {
        let dx = self.x - self.origin_x;
        let dy = self.y - self.origin_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Resolver output for one station: the final top-left corner plus whether a
/// leader line back to the station dot should be drawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedLabel {
    pub station_id: String,
    pub x: f32,
    pub y: f32,
    pub needs_leader_line: bool,
}
