//! Dashboard sections. Each section owns one dataset through
//! [`use_dataset`](crate::refresh::use_dataset) and only reads its state.

mod controls;
pub use controls::{DatasetPlaceholder, RefreshControls};

mod time_spent;
pub use time_spent::TimeSpentSection;

mod countries;
pub use countries::CountrySection;

mod roster;
pub use roster::RosterSection;

mod concurrency;
pub use concurrency::ConcurrencySection;

mod utils;

use dioxus::prelude::*;

use crate::layout::SectionSpan;

pub(crate) fn section_class(span: SectionSpan) -> String {
    format!("dashboard-section {}", span.css_class())
}

/// Subscribes the calling component to the active language, if the platform
/// provides one, so translated labels refresh after a switch.
pub(crate) fn use_locale_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_default()
}
