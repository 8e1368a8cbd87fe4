//! Summarization throughput over synthetic grids.
//!
//! Run with: `cargo bench`

use calamine::Data;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wellreport::report::{locate, summarize_grid, ColumnRules};

fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

/// Grid with a decorative block, one header row, and `wells` well rows split
/// over zones of 10.
fn synthetic_grid(wells: usize) -> Vec<Vec<Data>> {
    let mut grid = vec![
        vec![text("OPERATOR"), Data::Empty],
        vec![text("Daily Production Report")],
        vec![text("RUNNING WELLS"), text("Net BO"), text("Net diff. BO"), text("W/C")],
    ];
    for index in 0..wells {
        if index % 10 == 0 {
            grid.push(vec![text(&format!("Zone-{}", index / 10))]);
        }
        grid.push(vec![
            text(&format!("W-{index}")),
            Data::Float(100.0 + index as f64),
            Data::Float((index % 7) as f64 - 3.0),
            text("35%"),
        ]);
    }
    grid
}

fn bench_summary(c: &mut Criterion) {
    let rules = ColumnRules::builtin();

    let mut group = c.benchmark_group("summary");
    for wells in [50usize, 500] {
        let grid = synthetic_grid(wells);
        group.throughput(Throughput::Elements(wells as u64));
        group.bench_with_input(format!("summarize_{wells}_wells"), &grid, |b, grid| {
            b.iter(|| summarize_grid("bench", black_box(grid), &rules));
        });
        group.bench_with_input(format!("locate_{wells}_wells"), &grid, |b, grid| {
            b.iter(|| locate(black_box(grid), &rules));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_summary);
criterion_main!(benches);
