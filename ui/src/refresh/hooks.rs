use std::rc::Rc;

use dioxus::prelude::*;

use crate::source::{DatasetKind, HttpSource};

use super::{DatasetState, RefreshController};

/// View-side handle for one dataset: a read-only signal plus the refresh trigger.
#[derive(Clone)]
pub struct DatasetHandle {
    pub state: Signal<DatasetState>,
    controller: RefreshController<HttpSource>,
}

impl PartialEq for DatasetHandle {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl DatasetHandle {
    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading()
    }

    /// Reparse and refetch in the background. A no-op while a request is in flight.
    pub fn refresh(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.refresh().await;
        });
    }
}

/// Create the controller for `kind`, mirror its state into a signal and
/// start the initial load. Expects an `Rc<HttpSource>` in context.
pub fn use_dataset(kind: DatasetKind) -> DatasetHandle {
    let source = use_context::<Rc<HttpSource>>();
    let state = use_signal(|| DatasetState::idle(kind));

    let controller = use_hook(move || {
        RefreshController::new(kind, source).with_observer(move |snapshot| {
            let mut state = state;
            state.set(snapshot.clone());
        })
    });

    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move {
                controller.load().await;
            });
        }
    });

    use_drop({
        let controller = controller.clone();
        move || controller.teardown()
    });

    DatasetHandle { state, controller }
}
