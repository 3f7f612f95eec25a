//! The host map collaborator.
//!
//! The draw control only ever touches the host map through [`HostMap`]: it
//! adds (or re-adds) its representation layer, removes it on reset, and looks
//! layers up by name. Everything else on the map belongs to someone else.

mod in_memory;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HostMapError;
use crate::view::FeatureCollection;

pub use in_memory::{InMemoryMap, RenderedLayer};

/// Style attributes forwarded verbatim to the host map.
pub type LayerStyle = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerHandle(u64);

impl LayerHandle {
    pub fn new(raw: u64) -> Self {
        LayerHandle(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}

pub trait HostMap {
    /// Add a vector layer. Adding under a name that already exists replaces
    /// that layer.
    fn add_layer(
        &mut self,
        collection: &FeatureCollection,
        style: &LayerStyle,
        name: &str,
        visible: bool,
        opacity: f64,
    ) -> Result<LayerHandle, HostMapError>;

    fn remove_layer(&mut self, handle: LayerHandle) -> Result<(), HostMapError>;

    fn find_layer(&self, name: &str) -> Option<LayerHandle>;

    /// Show a message to the user.
    fn report_error(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}
