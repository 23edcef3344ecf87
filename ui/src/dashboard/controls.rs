use dioxus::prelude::*;

use crate::{
    core::format,
    refresh::{DatasetHandle, Status},
    t,
};

/// Refresh button plus the dataset's freshness line and inline error.
///
/// The button stays disabled while the dataset is loading; other sections are
/// unaffected.
#[component]
pub fn RefreshControls(dataset: DatasetHandle) -> Element {
    let state = dataset.state.read().clone();
    let busy = state.is_loading();
    let label = if busy {
        t!("refresh-button-busy")
    } else {
        t!("refresh-button")
    };
    let updated = state
        .last_updated_at
        .map(|ts| t!("status-updated", time = format::format_updated_at(ts)));
    let error = match (state.status, state.last_error.as_ref()) {
        (Status::Failed, Some(message)) => Some(t!("status-error", error = message.clone())),
        _ => None,
    };

    rsx! {
        div { class: "dataset-controls",
            button {
                r#type: "button",
                class: "dataset-controls__refresh",
                disabled: busy,
                aria_busy: "{busy}",
                onclick: move |_| dataset.refresh(),
                "{label}"
            }
            if busy {
                span { class: "dataset-controls__spinner", aria_hidden: "true" }
            }
            if let Some(updated) = updated {
                span { class: "dataset-controls__updated", "{updated}" }
            }
        }
        if let Some(error) = error {
            p { class: "dataset-controls__error", role: "alert", "{error}" }
        }
    }
}

/// Placeholder shown in place of a chart that has nothing to draw yet.
#[component]
pub fn DatasetPlaceholder(loading: bool) -> Element {
    let text = if loading {
        t!("status-loading")
    } else {
        t!("status-empty")
    };
    rsx! {
        p { class: "dashboard-section__placeholder", "{text}" }
    }
}
