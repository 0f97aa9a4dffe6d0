use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
}

impl Theme {
    /// Defaults matching the system-map label styling: 11px labels in the
    /// dashboard's sans-serif stack.
    pub fn system_map() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 11.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::system_map()
    }
}
