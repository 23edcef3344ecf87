//! Responsive layout resolution.
//!
//! The dashboard has exactly one breakpoint: viewports up to
//! [`COMPACT_MAX_WIDTH_PX`] wide stack every section in a single column,
//! wider ones put the country and roster sections side by side. The
//! time-spent and concurrency charts always span the full width.
//!
//! Height is tracked for debugging only and never affects the mode. There is
//! no hysteresis; flicker exactly at the breakpoint is acceptable.

use dioxus::prelude::*;

use crate::source::DatasetKind;

pub const COMPACT_MAX_WIDTH_PX: u32 = 800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

impl LayoutMode {
    pub fn for_width(width_px: u32) -> Self {
        if width_px <= COMPACT_MAX_WIDTH_PX {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LayoutMode::Compact => "dashboard--compact",
            LayoutMode::Wide => "dashboard--wide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub width_px: u32,
    pub height_px: u32,
}

impl ViewportState {
    /// Used when no window is available (native builds, tests).
    pub const FALLBACK: ViewportState = ViewportState {
        width_px: 1280,
        height_px: 800,
    };

    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::for_width(self.width_px)
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Owns the observed viewport and answers layout queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResolver {
    viewport: ViewportState,
}

impl LayoutResolver {
    pub fn new(viewport: ViewportState) -> Self {
        Self { viewport }
    }

    /// Record new viewport dimensions and return the resulting mode.
    pub fn observe(&mut self, width_px: u32, height_px: u32) -> LayoutMode {
        self.viewport = ViewportState {
            width_px,
            height_px,
        };
        self.current_layout_mode()
    }

    pub fn current_layout_mode(&self) -> LayoutMode {
        self.viewport.layout_mode()
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSpan {
    Full,
    Half,
}

impl SectionSpan {
    pub fn css_class(self) -> &'static str {
        match self {
            SectionSpan::Full => "dashboard-section--full",
            SectionSpan::Half => "dashboard-section--half",
        }
    }
}

/// Grid placement of a dataset's section under `mode`.
pub fn section_span(kind: DatasetKind, mode: LayoutMode) -> SectionSpan {
    match (kind, mode) {
        (DatasetKind::TopTimeSpent | DatasetKind::OnlineConcurrency, _) => SectionSpan::Full,
        (_, LayoutMode::Compact) => SectionSpan::Full,
        (_, LayoutMode::Wide) => SectionSpan::Half,
    }
}

/// Current layout mode, re-evaluated on every window resize.
pub fn use_layout_mode() -> LayoutMode {
    use_layout_resolver().read().current_layout_mode()
}

pub fn use_layout_resolver() -> Signal<LayoutResolver> {
    let mut resolver = use_signal(|| LayoutResolver::new(viewport::current()));
    viewport::use_resize_listener(move |vp: ViewportState| {
        resolver.with_mut(|r| {
            r.observe(vp.width_px, vp.height_px);
        });
    });
    resolver
}

#[cfg(target_arch = "wasm32")]
mod viewport {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    use super::ViewportState;

    pub(super) fn current() -> ViewportState {
        web_sys::window()
            .map(|window| ViewportState {
                width_px: dimension(window.inner_width()),
                height_px: dimension(window.inner_height()),
            })
            .unwrap_or(ViewportState::FALLBACK)
    }

    fn dimension(value: Result<JsValue, JsValue>) -> u32 {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|px| px.max(0.0) as u32)
            .unwrap_or(0)
    }

    pub(super) fn use_resize_listener(mut on_resize: impl FnMut(ViewportState) + 'static) {
        let listener = use_hook(move || {
            let closure: Closure<dyn FnMut()> = Closure::new(move || on_resize(current()));
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            Rc::new(closure)
        });

        use_drop(move || {
            if let Some(window) = web_sys::window() {
                let callback: &JsValue = (*listener).as_ref();
                let _ = window.remove_event_listener_with_callback("resize", callback.unchecked_ref());
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod viewport {
    use super::ViewportState;

    pub(super) fn current() -> ViewportState {
        ViewportState::FALLBACK
    }

    pub(super) fn use_resize_listener(_on_resize: impl FnMut(ViewportState) + 'static) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_width(800), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(801), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(0), LayoutMode::Compact);
    }

    #[test]
    fn height_never_changes_mode() {
        let mut resolver = LayoutResolver::default();
        assert_eq!(resolver.observe(1024, 200), LayoutMode::Wide);
        assert_eq!(resolver.observe(1024, 4000), LayoutMode::Wide);
        assert_eq!(resolver.observe(640, 4000), LayoutMode::Compact);
        assert_eq!(
            resolver.viewport(),
            ViewportState {
                width_px: 640,
                height_px: 4000
            }
        );
    }

    #[test]
    fn every_resize_recomputes() {
        let mut resolver = LayoutResolver::new(ViewportState::FALLBACK);
        assert_eq!(resolver.current_layout_mode(), LayoutMode::Wide);
        resolver.observe(800, 600);
        assert_eq!(resolver.current_layout_mode(), LayoutMode::Compact);
        resolver.observe(801, 600);
        assert_eq!(resolver.current_layout_mode(), LayoutMode::Wide);
    }

    #[test]
    fn charts_always_span_full_width() {
        for mode in [LayoutMode::Compact, LayoutMode::Wide] {
            assert_eq!(section_span(DatasetKind::TopTimeSpent, mode), SectionSpan::Full);
            assert_eq!(section_span(DatasetKind::OnlineConcurrency, mode), SectionSpan::Full);
        }
    }

    #[test]
    fn country_and_roster_pair_up_when_wide() {
        for kind in [DatasetKind::CountryDistribution, DatasetKind::PlayerRoster] {
            assert_eq!(section_span(kind, LayoutMode::Wide), SectionSpan::Half);
            assert_eq!(section_span(kind, LayoutMode::Compact), SectionSpan::Full);
        }
    }
}
