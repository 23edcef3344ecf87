use std::rc::Rc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
    core::config::DashboardConfig,
    dashboard::{ConcurrencySection, CountrySection, RosterSection, TimeSpentSection},
    layout::{section_span, use_layout_mode},
    source::{DatasetKind, HttpSource},
    t,
};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// The statistics page: four independently refreshed sections laid out for
/// the current viewport.
#[component]
pub fn Dashboard() -> Element {
    let config = use_context_provider(|| {
        let config = DashboardConfig::load();
        info!(api_url = %config.api_url, "dashboard configured");
        config
    });
    use_context_provider({
        let config = config.clone();
        move || Rc::new(HttpSource::new(config))
    });

    // Subscribe to the global language code so the footer re-renders on change.
    let _lang = try_use_context::<Signal<String>>().map(|code| code());

    let mode = use_layout_mode();
    let span = |kind| section_span(kind, mode);

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }

        main { class: "dashboard {mode.css_class()}",
            TimeSpentSection { span: span(DatasetKind::TopTimeSpent) }
            CountrySection { span: span(DatasetKind::CountryDistribution) }
            RosterSection { span: span(DatasetKind::PlayerRoster) }
            ConcurrencySection { span: span(DatasetKind::OnlineConcurrency) }
        }

        footer { class: "dashboard-footer",
            span { {t!("footer-backend", url = config.api_url.clone())} }
            if let Some(version) = config.version.clone() {
                span { {t!("footer-version", version = version)} }
            }
        }
    }
}
