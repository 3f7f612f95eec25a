//! Drawing widget adapters.
//!
//! A widget owns the shapes the user has drawn in its own native form and
//! reports changes as [`NativeDrawEvent`]s. The draw control depends only on
//! [`DrawWidget`], never on a concrete widget type.

mod in_memory;

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use in_memory::InMemoryWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawEventKind {
    Created,
    Edited,
    Deleted,
}

/// A change reported by the widget, carrying the affected shape as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeDrawEvent {
    pub kind: DrawEventKind,
    pub shape: Value,
}

impl NativeDrawEvent {
    pub fn new(kind: DrawEventKind, shape: Value) -> Self {
        NativeDrawEvent { kind, shape }
    }
}

pub type EventSink = Sender<NativeDrawEvent>;

/// How a widget reports edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Edited shapes are changed in place in the widget's snapshot.
    #[default]
    InPlace,
    /// The widget cannot edit in place; an edit adds the new shape and the
    /// edited event is handled exactly like a created one.
    Append,
}

pub trait DrawWidget {
    /// Start forwarding native draw events into `sink`.
    fn bind_events(&mut self, sink: EventSink);

    /// The shapes currently drawn, in widget order.
    fn fetch_snapshot(&self) -> Vec<Value>;

    /// Drop the shape at `index` from the widget's own state. Must not report a
    /// deleted event back.
    fn remove_at_index(&mut self, index: usize);

    fn clear_native_state(&mut self);

    fn edit_mode(&self) -> EditMode {
        EditMode::InPlace
    }
}
