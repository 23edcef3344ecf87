use dioxus::prelude::*;

use crate::{
    core::format,
    dashboard::{section_class, use_locale_marker, DatasetPlaceholder, RefreshControls},
    layout::SectionSpan,
    refresh::use_dataset,
    source::{DatasetKind, DatasetRows, PlayerRoster},
    t,
};

/// Players currently connected, with score and session length.
#[component]
pub fn RosterSection(span: SectionSpan) -> Element {
    let _locale = use_locale_marker();
    let dataset = use_dataset(DatasetKind::PlayerRoster);
    let state = dataset.state.read().clone();
    let roster: Option<PlayerRoster> = state
        .rows
        .as_ref()
        .and_then(DatasetRows::as_roster)
        .cloned();

    rsx! {
        section { class: section_class(span),
            div { class: "dashboard-section__header",
                h2 { {t!("section-roster-title")} }
            }
            RefreshControls { dataset: dataset.clone() }

            {
                match roster {
                    Some(roster) => rsx! {
                        div { class: "roster",
                            h3 { class: "roster__count",
                                {t!("roster-connected", count = roster.connected_count)}
                            }
                            if roster.players.is_empty() {
                                p { class: "dashboard-section__placeholder", {t!("roster-empty")} }
                            } else {
                                ul { class: "roster__players",
                                    for (index, player) in roster.players.iter().enumerate() {
                                        li { key: "{index}", class: "roster__player",
                                            span { class: "roster__name", "{player.name}" }
                                            span { class: "roster__score",
                                                {t!("roster-score", score = player.score)}
                                            }
                                            span { class: "roster__duration",
                                                {t!("roster-duration", duration = format::format_duration_secs(player.duration_seconds))}
                                            }
                                        }
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
