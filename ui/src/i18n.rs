//! Localized strings for the dashboard.
//!
//! Fluent bundles under `i18n/<locale>/nmrih-dashboard-ui.ftl` are embedded
//! at compile time; `en-US` is the fallback every other locale must match.
//! Call [`init`] once at startup, then look strings up with [`t!`](crate::t).
//! Browser builds follow `navigator.languages`, native builds the OS locales.

use std::collections::BTreeSet;
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// `fl!` against the shared [`LOADER`]:
///
/// ```ignore
/// t!("app-title")
/// t!("roster-score", score = 12)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "nmrih-dashboard-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, langid!("en-US")));

static INIT: Once = Once::new();

/// Load the bundles matching the user's preferred languages. Runs once.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&requested_languages()) {
            warn!(error = %err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch to `tag` at runtime. Tags that do not parse leave the current
/// language in place.
pub fn set_language(tag: &str) -> Result<(), I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(%tag, "ignoring unparseable language tag");
        return Ok(());
    };
    select(&[lang])
}

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Localizations, requested).map(drop)
}

/// Locale folders embedded at build time, sorted.
pub fn available_languages() -> Vec<String> {
    Localizations::iter()
        .filter_map(|path| path.split_once('/').map(|(dir, _)| dir.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
