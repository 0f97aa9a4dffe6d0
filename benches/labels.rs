use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use transit_label_layout::config::LayoutConfig;
use transit_label_layout::layout::{LabelAlign, compute_label_layout};
use transit_label_layout::stations::Station;
use transit_label_layout::theme::Theme;

const NAMES: [&str; 8] = [
    "Central",
    "Admiralty",
    "Tsim Sha Tsui",
    "Mong Kok",
    "Prince Edward",
    "Sham Shui Po",
    "Kowloon Tong",
    "Lok Fu",
];

const ALIGNS: [LabelAlign; 4] = [
    LabelAlign::Top,
    LabelAlign::Right,
    LabelAlign::Bottom,
    LabelAlign::Left,
];

/// A square grid of stations, tightly spaced so the resolver has real work.
fn station_grid(count: usize, spacing: f32) -> Vec<Station> {
    let side = (count as f32).sqrt().ceil() as usize;
    (0..count)
        .map(|idx| {
            let row = idx / side;
            let col = idx % side;
            Station {
                id: format!("S{idx}"),
                name: NAMES[idx % NAMES.len()].to_string(),
                x: col as f32 * spacing,
                y: row as f32 * spacing,
                align: ALIGNS[idx % ALIGNS.len()],
                font_size: None,
                terminal: row == 0 && col == 0,
                interchange: idx % 5 == 0,
            }
        })
        .collect()
}

fn bench_label_layout(c: &mut Criterion) {
    let theme = Theme::system_map();
    let config = LayoutConfig::default();

    let mut group = c.benchmark_group("label_layout");
    for &count in &[16usize, 64, 256] {
        let stations = station_grid(count, 28.0);
        group.bench_with_input(BenchmarkId::new("grid", count), &stations, |b, stations| {
            b.iter(|| compute_label_layout(black_box(stations), &theme, &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_label_layout);
criterion_main!(benches);
