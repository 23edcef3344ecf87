use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{
        section_class, use_locale_marker,
        utils::{bar_width_percent, max_value},
        DatasetPlaceholder, RefreshControls,
    },
    layout::SectionSpan,
    refresh::use_dataset,
    source::{DatasetKind, DatasetRows, TimeSpentRow},
    t,
};

/// Horizontal bar chart of the players with the most time on the server.
#[component]
pub fn TimeSpentSection(span: SectionSpan) -> Element {
    let _locale = use_locale_marker();
    let dataset = use_dataset(DatasetKind::TopTimeSpent);
    let state = dataset.state.read().clone();

    let rows: Vec<TimeSpentRow> = state
        .rows
        .as_ref()
        .and_then(DatasetRows::as_time_spent)
        .map(<[TimeSpentRow]>::to_vec)
        .unwrap_or_default();
    let longest = max_value(rows.iter().map(|row| row.time_spent_hours));

    rsx! {
        section { class: section_class(span),
            div { class: "dashboard-section__header",
                h2 { {t!("section-time-spent-title")} }
                span { class: "dashboard-section__meta", {t!("section-time-spent-axis")} }
            }
            RefreshControls { dataset: dataset.clone() }

            if rows.is_empty() {
                DatasetPlaceholder { loading: state.is_loading() }
            } else {
                ol { class: "bar-chart",
                    for (index, row) in rows.iter().enumerate() {
                        li { key: "{index}", class: "bar-chart__row",
                            span { class: "bar-chart__label", title: "{row.nickname}", "{row.nickname}" }
                            span { class: "bar-chart__track",
                                span {
                                    class: "bar-chart__bar",
                                    style: format!("width: {:.1}%", bar_width_percent(row.time_spent_hours, longest)),
                                }
                            }
                            span { class: "bar-chart__value", "{format::format_hours(row.time_spent_hours)}" }
                        }
                    }
                }
            }
        }
    }
}
