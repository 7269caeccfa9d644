//! Shared lane fixtures for integration tests.

#![allow(dead_code)]

use rekha::{Line, LineType, Point};

/// Enable log output for a test run (`RUST_LOG=debug cargo test`).
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Line whose points carry ids `"{id}-{index}"`.
pub fn line(id: &str, line_type: LineType, coords: &[(f64, f64)]) -> Line {
    Line::new(
        id,
        line_type,
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(format!("{id}-{i}"), x, y))
            .collect(),
    )
}

/// Straight lane along +X: left edge at `+half_width`, right edge at
/// `-half_width`, and a centerline offset by `drift` from the true middle.
///
/// Edges overhang the centerline by `overhang` at both ends.
pub fn straight_lane(length: f64, half_width: f64, drift: f64, overhang: f64) -> Vec<Line> {
    vec![
        line(
            "left",
            LineType::SolidWhite,
            &[(-overhang, half_width), (length + overhang, half_width)],
        ),
        line(
            "right",
            LineType::DottedWhite,
            &[(-overhang, -half_width), (length + overhang, -half_width)],
        ),
        line("center", LineType::CenterLine, &[(0.0, drift), (length, drift)]),
    ]
}

/// Gently curving polyline sampled from a sine, `n` vertices over `length`.
pub fn wavy(id: &str, line_type: LineType, length: f64, amplitude: f64, offset: f64, n: usize) -> Line {
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = length * i as f64 / (n - 1) as f64;
            (x, offset + amplitude * (x / length * std::f64::consts::PI).sin())
        })
        .collect();
    line(id, line_type, &coords)
}
