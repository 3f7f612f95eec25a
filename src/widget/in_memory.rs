//! InMemoryWidget - a widget with no UI, driven by method calls.
//!
//! `draw`, `edit` and `delete` stand in for user gestures: each one changes
//! the widget's shapes and reports the matching native event.

use serde_json::Value;

use super::{DrawEventKind, DrawWidget, EditMode, EventSink, NativeDrawEvent};

#[derive(Debug, Default)]
pub struct InMemoryWidget {
    shapes: Vec<Value>,
    sink: Option<EventSink>,
    edit_mode: EditMode,
}

impl InMemoryWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edit_mode(mut self, edit_mode: EditMode) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    pub fn shapes(&self) -> &[Value] {
        &self.shapes
    }

    pub fn is_bound(&self) -> bool {
        self.sink.is_some()
    }

    pub fn draw(&mut self, shape: Value) {
        self.shapes.push(shape.clone());
        self.report(DrawEventKind::Created, shape);
    }

    /// Edit the shape at `index`. Returns false if there is no such shape.
    pub fn edit(&mut self, index: usize, shape: Value) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        match self.edit_mode {
            EditMode::InPlace => self.shapes[index] = shape.clone(),
            EditMode::Append => self.shapes.push(shape.clone()),
        }
        self.report(DrawEventKind::Edited, shape);
        true
    }

    /// Delete the shape at `index`. Returns false if there is no such shape.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        let shape = self.shapes.remove(index);
        self.report(DrawEventKind::Deleted, shape);
        true
    }

    fn report(&self, kind: DrawEventKind, shape: Value) {
        match &self.sink {
            Some(sink) => {
                if sink.send(NativeDrawEvent::new(kind, shape)).is_err() {
                    log::debug!("draw event receiver dropped, {:?} event discarded", kind);
                }
            }
            None => log::trace!("widget not bound, {:?} event discarded", kind),
        }
    }
}

impl DrawWidget for InMemoryWidget {
    fn bind_events(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    fn fetch_snapshot(&self) -> Vec<Value> {
        self.shapes.clone()
    }

    fn remove_at_index(&mut self, index: usize) {
        if index < self.shapes.len() {
            self.shapes.remove(index);
        }
    }

    fn clear_native_state(&mut self) {
        self.shapes.clear();
    }

    fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }
}
