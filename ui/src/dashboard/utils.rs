//! Geometry and styling helpers for the dashboard charts. Pure, so the
//! rendering math can be tested without a DOM.

use crate::source::ConcurrencyPoint;

/// Slice colours for the country chart, reused cyclically.
pub(crate) const COUNTRY_PALETTE: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28FD0", "#FF6666", "#66B3FF", "#FFCC99",
    "#66FF66", "#D0D0D0",
];

pub(crate) fn palette_color(index: usize) -> &'static str {
    COUNTRY_PALETTE[index % COUNTRY_PALETTE.len()]
}

/// Width of a bar as a percentage of the widest one, clamped to `0..=100`.
pub(crate) fn bar_width_percent(value: f64, max: f64) -> f64 {
    if !value.is_finite() || !max.is_finite() || max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).min(100.0)
}

pub(crate) fn max_value(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// CSS `conic-gradient` drawing one slice per share, normalised over the
/// shares' total so rounding in the backend never leaves a gap.
pub(crate) fn conic_gradient(shares: &[f64]) -> Option<String> {
    let positive = |v: &f64| v.is_finite() && *v > 0.0;
    let total: f64 = shares.iter().filter(|v| positive(v)).sum();
    if total <= 0.0 {
        return None;
    }

    let mut start = 0.0;
    let stops: Vec<String> = shares
        .iter()
        .enumerate()
        .filter(|(_, v)| positive(v))
        .map(|(index, value)| {
            let end = start + value / total * 100.0;
            let stop = format!("{} {start:.2}% {end:.2}%", palette_color(index));
            start = end;
            stop
        })
        .collect();

    Some(format!("conic-gradient({})", stops.join(", ")))
}

/// Drawing area of the concurrency chart, in SVG user units.
pub(crate) const CHART_WIDTH: f64 = 600.0;
pub(crate) const CHART_HEIGHT: f64 = 240.0;

/// `points` attribute for an SVG polyline spanning the chart area. Counts are
/// scaled against the busiest hour; an all-zero series lies on the baseline.
pub(crate) fn polyline_points(points: &[ConcurrencyPoint]) -> String {
    let peak = points
        .iter()
        .map(|p| p.concurrent_players)
        .max()
        .unwrap_or(0);

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = x_position(index, points.len());
            let y = if peak == 0 {
                CHART_HEIGHT
            } else {
                CHART_HEIGHT - f64::from(point.concurrent_players) / f64::from(peak) * CHART_HEIGHT
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal position of the `index`-th of `len` evenly spaced samples.
pub(crate) fn x_position(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return CHART_WIDTH / 2.0;
    }
    index as f64 * CHART_WIDTH / (len - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HourBucket;

    fn point(hour: i64, players: u32) -> ConcurrencyPoint {
        ConcurrencyPoint {
            hour: HourBucket::Number(hour),
            concurrent_players: players,
        }
    }

    #[test]
    fn palette_wraps_after_ten_countries() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(9), "#D0D0D0");
        assert_eq!(palette_color(10), "#0088FE");
    }

    #[test]
    fn bar_widths_are_relative_to_the_leader() {
        assert_eq!(bar_width_percent(5.0, 10.0), 50.0);
        assert_eq!(bar_width_percent(10.0, 10.0), 100.0);
        assert_eq!(bar_width_percent(3.0, 0.0), 0.0);
        assert_eq!(bar_width_percent(f64::NAN, 10.0), 0.0);
        assert_eq!(max_value([1.5, f64::NAN, 4.0]), 4.0);
        assert_eq!(max_value(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn gradient_normalises_shares() {
        let gradient = conic_gradient(&[25.0, 25.0]).unwrap();
        assert_eq!(
            gradient,
            "conic-gradient(#0088FE 0.00% 50.00%, #00C49F 50.00% 100.00%)"
        );
        assert!(conic_gradient(&[]).is_none());
        assert!(conic_gradient(&[0.0, -1.0]).is_none());
    }

    #[test]
    fn polyline_scales_to_peak() {
        let points = [point(0, 0), point(1, 4), point(2, 2)];
        assert_eq!(polyline_points(&points), "0.0,240.0 300.0,0.0 600.0,120.0");
    }

    #[test]
    fn flat_and_single_series_stay_in_bounds() {
        assert_eq!(polyline_points(&[point(5, 0), point(6, 0)]), "0.0,240.0 600.0,240.0");
        assert_eq!(polyline_points(&[point(5, 3)]), "300.0,0.0");
        assert_eq!(polyline_points(&[]), "");
    }
}
