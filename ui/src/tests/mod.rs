//! Crate-internal test suites and shared fakes.

pub(crate) mod support;
