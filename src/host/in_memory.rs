//! InMemoryMap - HashMap-backed host map for tests and headless use.

use std::collections::HashMap;

use super::{HostMap, LayerHandle, LayerStyle};
use crate::error::HostMapError;
use crate::view::FeatureCollection;

/// A layer as the map last received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLayer {
    pub handle: LayerHandle,
    pub name: String,
    pub collection: FeatureCollection,
    pub style: LayerStyle,
    pub visible: bool,
    pub opacity: f64,
}

#[derive(Debug, Default)]
pub struct InMemoryMap {
    layers: HashMap<String, RenderedLayer>,
    next_handle: u64,
    messages: Vec<String>,
    add_count: usize,
}

impl InMemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, name: &str) -> Option<&RenderedLayer> {
        self.layers.get(name)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of `add_layer` calls, including replacements.
    pub fn add_count(&self) -> usize {
        self.add_count
    }

    /// Messages passed to `report_error`, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl HostMap for InMemoryMap {
    fn add_layer(
        &mut self,
        collection: &FeatureCollection,
        style: &LayerStyle,
        name: &str,
        visible: bool,
        opacity: f64,
    ) -> Result<LayerHandle, HostMapError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(HostMapError::LayerRejected(format!(
                "opacity {} out of range",
                opacity
            )));
        }

        self.next_handle += 1;
        let handle = LayerHandle::new(self.next_handle);
        self.add_count += 1;
        self.layers.insert(
            name.to_string(),
            RenderedLayer {
                handle,
                name: name.to_string(),
                collection: collection.clone(),
                style: style.clone(),
                visible,
                opacity,
            },
        );
        Ok(handle)
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> Result<(), HostMapError> {
        let name = self
            .layers
            .values()
            .find(|layer| layer.handle == handle)
            .map(|layer| layer.name.clone())
            .ok_or(HostMapError::UnknownLayer(handle))?;
        self.layers.remove(&name);
        Ok(())
    }

    fn find_layer(&self, name: &str) -> Option<LayerHandle> {
        self.layers.get(name).map(|layer| layer.handle)
    }

    fn report_error(&mut self, message: &str) {
        log::warn!("{}", message);
        self.messages.push(message.to_string());
    }
}
