use std::collections::BTreeMap;
use std::path::Path;

use transit_label_layout::config::LayoutConfig;
use transit_label_layout::layout::{
    AdjustedLabel, LabelBox, build_station_boxes, resolve_label_collisions,
};
use transit_label_layout::stations::{Station, load_stations};
use transit_label_layout::theme::Theme;

fn fixture(name: &str) -> Vec<Station> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    assert!(path.exists(), "fixture missing: {name}");
    load_stations(&path).expect("fixture load failed")
}

/// Count padded overlaps for the boxes at the given resolved positions.
fn padded_overlap_count(
    boxes: &[LabelBox],
    positions: &BTreeMap<String, AdjustedLabel>,
    padding: f32,
) -> usize {
    let gap = padding * 2.0;
    let rects: Vec<(f32, f32, f32, f32)> = boxes
        .iter()
        .map(|label_box| {
            let resolved = &positions[&label_box.station_id];
            (resolved.x, resolved.y, label_box.width, label_box.height)
        })
        .collect();

    let mut count = 0;
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let (ax, ay, aw, ah) = rects[i];
            let (bx, by, bw, bh) = rects[j];
            let separated =
                ax + aw + gap < bx || bx + bw + gap < ax || ay + ah + gap < by || by + bh + gap < ay;
            if !separated {
                count += 1;
            }
        }
    }
    count
}

fn rest_positions(boxes: &[LabelBox]) -> BTreeMap<String, AdjustedLabel> {
    boxes
        .iter()
        .map(|label_box| {
            (
                label_box.station_id.clone(),
                AdjustedLabel {
                    station_id: label_box.station_id.clone(),
                    x: label_box.origin_x,
                    y: label_box.origin_y,
                    needs_leader_line: false,
                },
            )
        })
        .collect()
}

#[test]
fn single_station_is_left_untouched() {
    let stations = fixture("single_station.json");
    let theme = Theme::system_map();
    let config = LayoutConfig::default();

    let boxes = build_station_boxes(&stations, &theme, &config, false);
    let resolved = resolve_label_collisions(&boxes, &config.collision);

    assert_eq!(resolved.len(), 1);
    let label = &resolved["TUM"];
    assert_eq!(label.x, boxes[0].origin_x);
    assert_eq!(label.y, boxes[0].origin_y);
    assert!(!label.needs_leader_line);
}

#[test]
fn well_spaced_line_needs_no_adjustment() {
    let stations = fixture("harbour_line.json");
    let theme = Theme::system_map();
    let config = LayoutConfig::default();

    let boxes = build_station_boxes(&stations, &theme, &config, false);
    assert_eq!(
        padded_overlap_count(&boxes, &rest_positions(&boxes), config.collision.padding),
        0,
        "fixture should start collision-free"
    );

    let resolved = resolve_label_collisions(&boxes, &config.collision);
    for label_box in &boxes {
        let label = &resolved[&label_box.station_id];
        assert_eq!(label.x, label_box.origin_x, "{} moved", label.station_id);
        assert_eq!(label.y, label_box.origin_y, "{} moved", label.station_id);
        assert!(!label.needs_leader_line);
    }
}

#[test]
fn dense_interchange_cluster_improves_and_stays_in_budget() {
    let stations = fixture("interchange_cluster.json");
    let theme = Theme::system_map();
    let config = LayoutConfig::default();

    let boxes = build_station_boxes(&stations, &theme, &config, false);
    let before = padded_overlap_count(&boxes, &rest_positions(&boxes), config.collision.padding);
    assert!(before > 0, "fixture should start with collisions");

    let resolved = resolve_label_collisions(&boxes, &config.collision);
    assert_eq!(resolved.len(), stations.len());

    let after = padded_overlap_count(&boxes, &resolved, config.collision.padding);
    assert!(after < before, "overlaps went {before} -> {after}");

    for label_box in &boxes {
        let label = &resolved[&label_box.station_id];
        let dx = label.x - label_box.origin_x;
        let dy = label.y - label_box.origin_y;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!(
            dist <= config.collision.max_offset + 1e-3,
            "{} drifted {dist}",
            label.station_id
        );
    }
}

#[test]
fn resolution_is_reproducible_across_runs() {
    let stations = fixture("interchange_cluster.json");
    let theme = Theme::system_map();
    let config = LayoutConfig::default();

    let boxes = build_station_boxes(&stations, &theme, &config, false);
    let first = resolve_label_collisions(&boxes, &config.collision);
    let second = resolve_label_collisions(&boxes, &config.collision);

    for (id, label) in &first {
        assert_eq!(label.x, second[id].x, "{id} x differs between runs");
        assert_eq!(label.y, second[id].y, "{id} y differs between runs");
        assert_eq!(label.needs_leader_line, second[id].needs_leader_line);
    }
}

#[test]
fn resolved_output_serializes_with_camel_case_keys() {
    let stations = fixture("single_station.json");
    let resolved = transit_label_layout::compute_label_layout(
        &stations,
        &Theme::system_map(),
        &LayoutConfig::default(),
    );
    let json = serde_json::to_string(&resolved).unwrap();
    assert!(json.contains("\"needsLeaderLine\":false"), "json: {json}");
    assert!(json.contains("\"stationId\":\"TUM\""));
}
