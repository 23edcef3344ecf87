use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{
        section_class, use_locale_marker,
        utils::{conic_gradient, palette_color},
        DatasetPlaceholder, RefreshControls,
    },
    layout::SectionSpan,
    refresh::use_dataset,
    source::{CountryShare, DatasetKind, DatasetRows},
    t,
};

#[component]
pub fn CountrySection(span: SectionSpan) -> Element {
    let _locale = use_locale_marker();
    let dataset = use_dataset(DatasetKind::CountryDistribution);
    let state = dataset.state.read().clone();

    let shares: Vec<CountryShare> = state
        .rows
        .as_ref()
        .and_then(DatasetRows::as_countries)
        .map(<[CountryShare]>::to_vec)
        .unwrap_or_default();
    let percentages: Vec<f64> = shares.iter().map(|share| share.percentage).collect();
    let gradient = conic_gradient(&percentages);

    rsx! {
        section { class: section_class(span),
            div { class: "dashboard-section__header",
                h2 { {t!("section-countries-title")} }
            }
            RefreshControls { dataset: dataset.clone() }

            {
                match gradient {
                    Some(gradient) => rsx! {
                        div { class: "pie-chart",
                            div {
                                class: "pie-chart__disc",
                                role: "img",
                                style: "background: {gradient}",
                            }
                            ul { class: "pie-chart__legend",
                                for (index, share) in shares.iter().enumerate() {
                                    li { key: "{index}", class: "pie-chart__entry",
                                        span {
                                            class: "pie-chart__swatch",
                                            style: "background: {palette_color(index)}",
                                        }
                                        span { class: "pie-chart__country", "{share.country}" }
                                        span { class: "pie-chart__value", "{format::format_percent(share.percentage)}" }
                                    }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        DatasetPlaceholder { loading: state.is_loading() }
                    },
                }
            }
        }
    }
}
