use crate::config::load_config;
use crate::layout::{build_station_boxes, resolve_label_collisions, visible_labels};
use crate::stations::parse_stations;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "tll",
    version,
    about = "Collision-free station label placement for transit maps"
)]
pub struct Args {
    /// Station JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output JSON file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON/JSON5 file overriding the built-in defaults
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Iteration cap for the collision resolver
    #[arg(long = "iterations")]
    pub iterations: Option<usize>,

    /// Maximum displacement of a label from its rest position
    #[arg(long = "maxOffset")]
    pub max_offset: Option<f32>,

    /// Cull labels outside this viewport before resolving: "x,y,width,height"
    #[arg(long = "viewport")]
    pub viewport: Option<String>,

    /// Render scale applied together with --viewport
    #[arg(long = "scale", default_value_t = 1.0)]
    pub scale: f32,

    /// Measure label widths with real font metrics instead of the estimate
    #[arg(long = "measure", default_value_t = false)]
    pub measure: bool,

    /// Pretty-print the output JSON
    #[arg(long = "pretty", default_value_t = false)]
    pub pretty: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(iterations) = args.iterations {
        config.layout.collision.max_iterations = iterations;
    }
    if let Some(max_offset) = args.max_offset {
        config.layout.collision.max_offset = max_offset;
    }

    let input = read_input(args.input.as_deref())?;
    let stations = parse_stations(&input)?;

    let mut boxes = build_station_boxes(&stations, &config.theme, &config.layout, args.measure);
    if let Some(spec) = args.viewport.as_deref() {
        let (x, y, width, height) = parse_viewport(spec)?;
        boxes = visible_labels(
            &boxes,
            x,
            y,
            width,
            height,
            args.scale,
            &config.layout.viewport,
        );
    }

    let resolved = resolve_label_collisions(&boxes, &config.layout.collision);
    let json = if args.pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    write_output(&json, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn parse_viewport(spec: &str) -> Result<(f32, f32, f32, f32)> {
    let parts: Vec<f32> = spec
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| anyhow::anyhow!("invalid viewport '{spec}', expected x,y,width,height"))?;
    if parts.len() != 4 {
        return Err(anyhow::anyhow!(
            "invalid viewport '{spec}', expected 4 comma-separated numbers"
        ));
    }
    Ok((parts[0], parts[1], parts[2], parts[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_viewport_spec() {
        let (x, y, width, height) = parse_viewport("0, -20, 800, 600").unwrap();
        assert_eq!((x, y, width, height), (0.0, -20.0, 800.0, 600.0));
    }

    #[test]
    fn rejects_short_and_malformed_viewport_specs() {
        assert!(parse_viewport("0,0,800").is_err());
        assert!(parse_viewport("a,b,c,d").is_err());
    }
}
