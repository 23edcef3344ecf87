//! Shared UI crate for the NMRiH server dashboard: data access, per-dataset
//! refresh controllers, responsive layout and the views built on them.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod layout;
pub mod refresh;
pub mod source;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod tests;
