mod action;
mod config;
mod control;
mod dispatch;
mod error;
mod geometry;
mod host;
mod store;
mod view;
mod widget;

#[cfg(feature = "emitter")]
pub mod emitter;

pub use action::{ActionState, DrawAction};
pub use config::{DrawControlConfig, LayerOptions, DEFAULT_LAYER_NAME};
pub use control::sync::scan_and_patch;
pub use control::DrawControl;
pub use dispatch::{Dispatcher, DrawEvents, GeometryEvent, Listener, ListenerId};
pub use error::{ConfigError, DrawControlError, HostMapError, TranslationError};
pub use geometry::{Geometry, Position};
pub use host::{HostMap, InMemoryMap, LayerHandle, LayerStyle, RenderedLayer};
pub use store::{GeometryId, GeometryStore, Properties, StoredGeometry};
pub use view::{Feature, FeatureCollection};
pub use widget::{DrawEventKind, DrawWidget, EditMode, EventSink, InMemoryWidget, NativeDrawEvent};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
