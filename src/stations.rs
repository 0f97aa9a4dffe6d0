//! Station input records: the data the rendering layer hands to the label
//! pipeline, loadable from JSON (strict) or JSON5 (lenient) files.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::layout::LabelAlign;

/// One station as supplied by the caller: projected anchor coordinates, the
/// display name, and the terminal/interchange classification driving label
/// priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub align: LabelAlign,
    #[serde(default)]
    pub font_size: Option<f32>,
    #[serde(default)]
    pub terminal: bool,
    #[serde(default)]
    pub interchange: bool,
}

#[derive(Debug, Error)]
pub enum StationsError {
    #[error("failed to read station file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid station JSON: {0}")]
    Parse(String),
    #[error("duplicate station id: {0}")]
    DuplicateId(String),
}

/// Parse a station array, trying strict JSON first and JSON5 as a fallback.
/// Station ids must be unique: the resolver keys its output by id.
pub fn parse_stations(input: &str) -> Result<Vec<Station>, StationsError> {
    let stations: Vec<Station> = match serde_json::from_str(input) {
        Ok(stations) => stations,
        Err(json_err) => {
            json5::from_str(input).map_err(|_| StationsError::Parse(json_err.to_string()))?
        }
    };

    let mut seen = HashSet::new();
    for station in &stations {
        if !seen.insert(station.id.as_str()) {
            return Err(StationsError::DuplicateId(station.id.clone()));
        }
    }

    Ok(stations)
}

pub fn load_stations(path: &Path) -> Result<Vec<Station>, StationsError> {
    let contents = std::fs::read_to_string(path)?;
    parse_stations(&contents)
}
