//! Relay of draw events onto an [`EventEmitter`].
//!
//! Listeners registered on a [`DrawControl`] run synchronously. The relay
//! forwards the same events to an `event_emitter_rs` emitter so that
//! subscribers elsewhere (other threads, other components) can react without
//! holding a reference to the control.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//! use draw_control::emitter::{EmitterRelay, GEOMETRY_CREATED};
//!
//! let emitter = Arc::new(Mutex::new(EventEmitter::new()));
//! emitter.lock().unwrap().on(GEOMETRY_CREATED, |payload: String| {
//!     println!("created: {}", payload);
//! });
//!
//! let relay = EmitterRelay::attach(&mut control, Arc::clone(&emitter));
//! ```

use std::sync::{Arc, Mutex};

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};

use crate::action::DrawAction;
use crate::control::DrawControl;
use crate::dispatch::ListenerId;
use crate::geometry::Geometry;
use crate::host::HostMap;
use crate::widget::DrawWidget;

pub const GEOMETRY_CREATED: &str = "GeometryCreated";
pub const GEOMETRY_EDITED: &str = "GeometryEdited";
pub const GEOMETRY_DELETED: &str = "GeometryDeleted";

/// JSON payload emitted for every relayed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawEventPayload {
    pub action: DrawAction,
    pub geometry: Geometry,
    pub count: usize,
}

/// The listener ids a relay registered, so it can be detached again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterRelay {
    listeners: [ListenerId; 3],
}

impl EmitterRelay {
    pub fn attach<W, M>(control: &mut DrawControl<W, M>, emitter: Arc<Mutex<EventEmitter>>) -> Self
    where
        W: DrawWidget,
        M: HostMap,
    {
        let created = {
            let emitter = Arc::clone(&emitter);
            control.on_geometry_create(move |control, geometry| {
                relay(&emitter, GEOMETRY_CREATED, DrawAction::Created, geometry, control.count());
            })
        };
        let edited = {
            let emitter = Arc::clone(&emitter);
            control.on_geometry_edit(move |control, geometry| {
                relay(&emitter, GEOMETRY_EDITED, DrawAction::Edited, geometry, control.count());
            })
        };
        let deleted = control.on_geometry_delete(move |control, geometry| {
            relay(&emitter, GEOMETRY_DELETED, DrawAction::Deleted, geometry, control.count());
        });

        EmitterRelay {
            listeners: [created, edited, deleted],
        }
    }

    /// Stop relaying. Returns false if the listeners were already gone.
    pub fn detach<W, M>(self, control: &mut DrawControl<W, M>) -> bool
    where
        W: DrawWidget,
        M: HostMap,
    {
        self.listeners
            .iter()
            .fold(true, |all, id| control.remove_listener(*id) && all)
    }
}

fn relay(
    emitter: &Mutex<EventEmitter>,
    event: &str,
    action: DrawAction,
    geometry: &Geometry,
    count: usize,
) {
    let payload = DrawEventPayload {
        action,
        geometry: geometry.clone(),
        count,
    };
    let data = match serde_json::to_string(&payload) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("failed to encode {} payload: {}", event, err);
            return;
        }
    };
    match emitter.lock() {
        Ok(mut emitter) => {
            emitter.emit(event, data);
        }
        Err(_) => log::warn!("event emitter lock poisoned, {} not relayed", event),
    }
}
