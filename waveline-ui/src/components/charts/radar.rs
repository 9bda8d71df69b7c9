//! Radar chart over the six mood axes

use crate::display_types::MoodScores;
use dioxus::prelude::*;
use std::f64::consts::{FRAC_PI_2, TAU};

const SIZE: f64 = 320.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 120.0;
const LABEL_OFFSET: f64 = 20.0;
const RINGS: usize = 4;
const MAX_SCORE: f64 = 100.0;

/// Angle of axis `i` of `n`, starting at 12 o'clock, going clockwise
fn axis_angle(i: usize, n: usize) -> f64 {
    TAU * i as f64 / n as f64 - FRAC_PI_2
}

/// Point on axis `i` for `value`, clamped to the 0-100 scale
pub(crate) fn axis_point(i: usize, n: usize, value: f64) -> (f64, f64) {
    let r = RADIUS * value.clamp(0.0, MAX_SCORE) / MAX_SCORE;
    let a = axis_angle(i, n);
    (CENTER + r * a.cos(), CENTER + r * a.sin())
}

/// Label anchor just outside the outer ring of axis `i`
pub(crate) fn label_point(i: usize, n: usize) -> (f64, f64) {
    let r = RADIUS + LABEL_OFFSET;
    let a = axis_angle(i, n);
    (CENTER + r * a.cos(), CENTER + r * a.sin())
}

/// SVG `points` attribute for the polygon through all axis values
pub(crate) fn polygon_points(values: &[f64]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let (x, y) = axis_point(i, values.len(), v);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Radius of grid ring `k` (1-based) of `RINGS`
fn ring_radius(k: usize) -> f64 {
    RADIUS * k as f64 / RINGS as f64
}

/// Radar chart over six mood axes scaled 0-100.
///
/// Grid rings carry no tick labels and there is no legend; axis names
/// sit just outside the outer ring.
#[component]
pub fn MoodRadarChart(mood: MoodScores) -> Element {
    let values = mood.values();
    let n = values.len();

    let rings: Vec<f64> = (1..=RINGS).map(ring_radius).collect();
    let spokes: Vec<(f64, f64)> = (0..n).map(|i| axis_point(i, n, MAX_SCORE)).collect();
    let vertices: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| axis_point(i, n, v))
        .collect();
    let labels: Vec<((f64, f64), &'static str)> = MoodScores::AXIS_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| (label_point(i, n), label))
        .collect();
    let filled = polygon_points(&values);

    rsx! {
        svg {
            class: "w-full max-w-sm mx-auto",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {SIZE} {SIZE}",
            for r in rings {
                circle {
                    cx: "{CENTER}",
                    cy: "{CENTER}",
                    r: "{r:.1}",
                    fill: "none",
                    stroke: "#374151",
                    stroke_width: "1",
                }
            }
            for (x , y) in spokes {
                line {
                    x1: "{CENTER}",
                    y1: "{CENTER}",
                    x2: "{x:.1}",
                    y2: "{y:.1}",
                    stroke: "#374151",
                    stroke_width: "1",
                }
            }
            polygon {
                points: "{filled}",
                fill: "rgba(29, 185, 84, 0.2)",
                stroke: "#1DB954",
                stroke_width: "2",
            }
            for (x , y) in vertices {
                circle {
                    cx: "{x:.1}",
                    cy: "{y:.1}",
                    r: "4",
                    fill: "#1DB954",
                    stroke: "#fff",
                    stroke_width: "1",
                }
            }
            for ((x , y) , label) in labels {
                text {
                    x: "{x:.1}",
                    y: "{y:.1}",
                    fill: "#9ca3af",
                    font_size: "11",
                    text_anchor: "middle",
                    dominant_baseline: "middle",
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_from_center(p: (f64, f64)) -> f64 {
        ((p.0 - CENTER).powi(2) + (p.1 - CENTER).powi(2)).sqrt()
    }

    #[test]
    fn test_first_axis_points_straight_up() {
        let (x, y) = axis_point(0, 6, MAX_SCORE);
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);
    }

    #[test]
    fn test_max_value_lands_on_outer_ring() {
        for i in 0..6 {
            let d = distance_from_center(axis_point(i, 6, MAX_SCORE));
            assert!((d - RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_values_collapse_to_center() {
        for i in 0..6 {
            let d = distance_from_center(axis_point(i, 6, 0.0));
            assert!(d < 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let over = distance_from_center(axis_point(2, 6, 250.0));
        assert!((over - RADIUS).abs() < 1e-9);
        let under = distance_from_center(axis_point(2, 6, -10.0));
        assert!(under < 1e-9);
    }

    #[test]
    fn test_polygon_has_one_point_per_axis() {
        let points = polygon_points(&[50.0; 6]);
        assert_eq!(points.split(' ').count(), 6);
        for pair in points.split(' ') {
            assert_eq!(pair.split(',').count(), 2);
        }
    }
}
