//! Integration tests for the draw control.

mod support;

mod native_events;
mod sync;
