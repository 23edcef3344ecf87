//! Per-dataset refresh controllers and their Dioxus bindings.
//!
//! Each visualized dataset gets its own [`RefreshController`]; there is no
//! loading flag shared between datasets.

mod controller;
mod hooks;

pub use controller::{DatasetState, RefreshController, RefreshOutcome, Status};
pub use hooks::{use_dataset, DatasetHandle};
