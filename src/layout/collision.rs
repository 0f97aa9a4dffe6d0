// Iterative force-directed label de-overlap.
//
// Pairwise repulsion with immediate (not batched) application: each pair's
// move is visible to subsequent overlap tests within the same iteration.
// Deterministic for a fixed input order, an approximation rather than a
// globally optimal layout — convergence speed is preferred over optimality.

use std::collections::BTreeMap;

use crate::config::CollisionConfig;

use super::{AdjustedLabel, LabelBox};

/// Overlap test on boxes inflated by `padding` on all sides. Only strict
/// separation along an axis clears a pair; touching edges still count.
fn boxes_overlap(a: &LabelBox, b: &LabelBox, padding: f32) -> bool {
    let gap = padding * 2.0;
    !(a.x + a.width + gap < b.x
        || b.x + b.width + gap < a.x
        || a.y + a.height + gap < b.y
        || b.y + b.height + gap < a.y)
}

/// Truncate a label's displacement from its origin to `max_offset`,
/// preserving direction.
fn clamp_to_origin(label: &mut LabelBox, max_offset: f32) {
    let dx = label.x - label.origin_x;
    let dy = label.y - label.origin_y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > max_offset {
        let scale = max_offset / dist;
        label.x = label.origin_x + dx * scale;
        label.y = label.origin_y + dy * scale;
    }
}

/// Nudge overlapping label boxes apart until no pair overlaps or the
/// iteration cap is exhausted. The caller's slice is never mutated; the
/// resolver works on its own copy.
///
/// Exhausting `max_iterations` without converging is not an error — the best
/// positions found so far are returned. Every result stays within
/// `max_offset` of its origin, and any label further than
/// `leader_line_threshold` from its origin is flagged for a leader line.
pub fn resolve_label_collisions(
    boxes: &[LabelBox],
    config: &CollisionConfig,
) -> BTreeMap<String, AdjustedLabel> {
    let mut working: Vec<LabelBox> = boxes.to_vec();

    if working.len() > 1 {
        for _ in 0..config.max_iterations {
            let mut had_collision = false;

            for i in 0..working.len() {
                for j in (i + 1)..working.len() {
                    let (head, tail) = working.split_at_mut(j);
                    let a = &mut head[i];
                    let b = &mut tail[0];

                    if !boxes_overlap(a, b, config.padding) {
                        continue;
                    }
                    had_collision = true;

                    let (ax, ay) = a.center();
                    let (bx, by) = b.center();
                    let mut dx = ax - bx;
                    let mut dy = ay - by;
                    let dist = (dx * dx + dy * dy).sqrt();
                    if dist > 1e-6 {
                        dx /= dist;
                        dy /= dist;
                    } else {
                        // Coincident centers: fall back to a fixed axis so the
                        // pair still separates deterministically.
                        dx = 1.0;
                        dy = 0.0;
                    }

                    // A label's own priority damps its own step; the shared +1
                    // keeps the denominator nonzero when both priorities are 0.
                    let denom = a.priority + b.priority + 1.0;
                    let step_a = config.force * (1.0 - a.priority / denom);
                    let step_b = config.force * (1.0 - b.priority / denom);

                    a.x += dx * step_a;
                    a.y += dy * step_a;
                    b.x -= dx * step_b;
                    b.y -= dy * step_b;

                    clamp_to_origin(a, config.max_offset);
                    clamp_to_origin(b, config.max_offset);
                }
            }

            if !had_collision {
                break;
            }
        }
    }

    working
        .into_iter()
        .map(|label| {
            let needs_leader_line = label.offset_from_origin() > config.leader_line_threshold;
            (
                label.station_id.clone(),
                AdjustedLabel {
                    station_id: label.station_id,
                    x: label.x,
                    y: label.y,
                    needs_leader_line,
                },
            )
        })
        .collect()
}
