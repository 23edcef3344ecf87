use dioxus::prelude::*;

use crate::{
    dashboard::{
        section_class, use_locale_marker,
        utils::{polyline_points, x_position, CHART_HEIGHT, CHART_WIDTH},
        DatasetPlaceholder, RefreshControls,
    },
    layout::SectionSpan,
    refresh::use_dataset,
    source::{ConcurrencyPoint, DatasetKind, DatasetRows},
    t,
};

/// Every n-th hour gets an axis label so 24 buckets stay readable.
const LABEL_STRIDE: usize = 3;

/// Line chart of concurrent players per hour.
#[component]
pub fn ConcurrencySection(span: SectionSpan) -> Element {
    let _locale = use_locale_marker();
    let dataset = use_dataset(DatasetKind::OnlineConcurrency);
    let state = dataset.state.read().clone();

    let points: Vec<ConcurrencyPoint> = state
        .rows
        .as_ref()
        .and_then(DatasetRows::as_concurrency)
        .map(<[ConcurrencyPoint]>::to_vec)
        .unwrap_or_default();
    let peak = points
        .iter()
        .map(|p| p.concurrent_players)
        .max()
        .unwrap_or(0);
    let line = polyline_points(&points);
    let view_box = format!("0 -10 {CHART_WIDTH} {}", CHART_HEIGHT + 40.0);
    let label_y = CHART_HEIGHT + 24.0;

    rsx! {
        section { class: section_class(span),
            div { class: "dashboard-section__header",
                h2 { {t!("section-concurrency-title")} }
                span { class: "dashboard-section__meta", {t!("section-concurrency-axis")} }
            }
            RefreshControls { dataset: dataset.clone() }

            if points.is_empty() {
                DatasetPlaceholder { loading: state.is_loading() }
            } else {
                figure { class: "line-chart",
                    svg {
                        class: "line-chart__svg",
                        view_box: "{view_box}",
                        preserve_aspect_ratio: "none",
                        line {
                            class: "line-chart__baseline",
                            x1: "0",
                            y1: "{CHART_HEIGHT}",
                            x2: "{CHART_WIDTH}",
                            y2: "{CHART_HEIGHT}",
                        }
                        polyline { class: "line-chart__line", fill: "none", points: "{line}" }
                        for (index, point) in points.iter().enumerate().filter(|(i, _)| i % LABEL_STRIDE == 0) {
                            text {
                                key: "{index}",
                                class: "line-chart__tick",
                                x: format!("{:.1}", x_position(index, points.len())),
                                y: "{label_y}",
                                text_anchor: "middle",
                                "{point.hour}"
                            }
                        }
                    }
                    figcaption { class: "line-chart__peak", {t!("chart-peak", count = peak)} }
                }
            }
        }
    }
}
