//! Time-of-day listening histogram

use crate::display_types::HourBuckets;
use dioxus::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 280.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 56.0;

const PLOT_WIDTH: f64 = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_HEIGHT: f64 = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Pixel height per bucket, scaled so the tallest bar fills the plot.
/// An all-zero input yields all-zero heights.
pub(crate) fn bar_heights(counts: &[u32], plot_height: f64) -> Vec<f64> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| plot_height * c as f64 / max as f64)
        .collect()
}

/// X offset and width of bar `i` of `n`, leaving a gap between bars
pub(crate) fn bar_slot(i: usize, n: usize, plot_width: f64) -> (f64, f64) {
    let slot = plot_width / n as f64;
    let gap = slot * 0.25;
    (slot * i as f64 + gap / 2.0, slot - gap)
}

/// Vertical bar chart over the eight fixed time-of-day buckets, with
/// visible axis titles. Bars scale to the busiest bucket.
#[component]
pub fn ListeningClockChart(hours: HourBuckets) -> Element {
    let counts = hours.counts();
    let heights = bar_heights(&counts, PLOT_HEIGHT);
    let max_count = counts.iter().copied().max().unwrap_or(0);

    let baseline = MARGIN_TOP + PLOT_HEIGHT;
    let bars: Vec<(f64, f64, f64, f64)> = heights
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let (x, w) = bar_slot(i, counts.len(), PLOT_WIDTH);
            (MARGIN_LEFT + x, baseline - h, w, h)
        })
        .collect();
    let labels: Vec<(f64, &'static str)> = HourBuckets::BUCKET_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let (x, w) = bar_slot(i, counts.len(), PLOT_WIDTH);
            (MARGIN_LEFT + x + w / 2.0, label)
        })
        .collect();

    let label_y = baseline + 18.0;
    let x_title_y = HEIGHT - 10.0;
    let y_title_x = 16.0;
    let y_title_y = MARGIN_TOP + PLOT_HEIGHT / 2.0;

    rsx! {
        svg {
            class: "w-full max-w-lg mx-auto",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            // axes
            line {
                x1: "{MARGIN_LEFT}",
                y1: "{MARGIN_TOP}",
                x2: "{MARGIN_LEFT}",
                y2: "{baseline}",
                stroke: "#4b5563",
                stroke_width: "1",
            }
            line {
                x1: "{MARGIN_LEFT}",
                y1: "{baseline}",
                x2: "{WIDTH - MARGIN_RIGHT}",
                y2: "{baseline}",
                stroke: "#4b5563",
                stroke_width: "1",
            }
            // top-of-scale tick
            text {
                x: "{MARGIN_LEFT - 6.0}",
                y: "{MARGIN_TOP + 4.0}",
                fill: "#9ca3af",
                font_size: "11",
                text_anchor: "end",
                "{max_count}"
            }
            text {
                x: "{MARGIN_LEFT - 6.0}",
                y: "{baseline + 4.0}",
                fill: "#9ca3af",
                font_size: "11",
                text_anchor: "end",
                "0"
            }
            for (x , y , w , h) in bars {
                rect {
                    x: "{x:.1}",
                    y: "{y:.1}",
                    width: "{w:.1}",
                    height: "{h:.1}",
                    fill: "#1DB954",
                    rx: "2",
                }
            }
            for (x , label) in labels {
                text {
                    x: "{x:.1}",
                    y: "{label_y}",
                    fill: "#9ca3af",
                    font_size: "11",
                    text_anchor: "middle",
                    "{label}"
                }
            }
            // axis titles
            text {
                x: "{MARGIN_LEFT + PLOT_WIDTH / 2.0}",
                y: "{x_title_y}",
                fill: "#d1d5db",
                font_size: "12",
                text_anchor: "middle",
                "Time of Day"
            }
            text {
                x: "{y_title_x}",
                y: "{y_title_y}",
                fill: "#d1d5db",
                font_size: "12",
                text_anchor: "middle",
                transform: "rotate(-90 {y_title_x} {y_title_y})",
                "Number of Plays"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_bar_fills_plot() {
        let heights = bar_heights(&[10, 40, 20, 5], 200.0);
        assert_eq!(heights[1], 200.0);
        assert_eq!(heights[0], 50.0);
        assert_eq!(heights[3], 25.0);
    }

    #[test]
    fn test_all_zero_counts_draw_nothing() {
        let heights = bar_heights(&[0; 8], 200.0);
        assert_eq!(heights, vec![0.0; 8]);
    }

    #[test]
    fn test_slots_do_not_overlap() {
        let n = 8;
        let width = 400.0;
        for i in 0..n - 1 {
            let (x, w) = bar_slot(i, n, width);
            let (next_x, _) = bar_slot(i + 1, n, width);
            assert!(w > 0.0);
            assert!(x + w < next_x);
        }
        let (last_x, last_w) = bar_slot(n - 1, n, width);
        assert!(last_x + last_w <= width);
    }
}
