//! Geometry/property store.
//!
//! Geometries and their metadata are kept index-aligned in insertion order.
//! Both live in one record, so the two sequences cannot diverge.
//! Each record also carries a [`GeometryId`] assigned at insertion, so callers
//! can address a geometry without relying on value equality. Value lookups
//! still resolve to the first equal geometry.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::Geometry;

/// Metadata attached to a single geometry.
pub type Properties = Map<String, Value>;

/// Stable identifier handed out when a geometry enters the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeometryId(u64);

impl GeometryId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geometry-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredGeometry {
    pub id: GeometryId,
    pub geometry: Geometry,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone)]
pub struct GeometryStore {
    records: Vec<StoredGeometry>,
    next_id: u64,
}

impl Default for GeometryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryStore {
    pub fn new() -> Self {
        GeometryStore {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[StoredGeometry] {
        &self.records
    }

    pub fn geometries(&self) -> Vec<&Geometry> {
        self.records.iter().map(|record| &record.geometry).collect()
    }

    pub fn properties(&self) -> Vec<Option<&Properties>> {
        self.records
            .iter()
            .map(|record| record.properties.as_ref())
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&StoredGeometry> {
        self.records.get(index)
    }

    pub fn last(&self) -> Option<&StoredGeometry> {
        self.records.last()
    }

    /// Append a geometry with no metadata and return its id.
    pub fn push(&mut self, geometry: Geometry) -> GeometryId {
        let id = GeometryId(self.next_id);
        self.next_id += 1;
        self.records.push(StoredGeometry {
            id,
            geometry,
            properties: None,
        });
        id
    }

    /// Index of the first geometry equal to `geometry`.
    pub fn position(&self, geometry: &Geometry) -> Option<usize> {
        self.records
            .iter()
            .position(|record| &record.geometry == geometry)
    }

    pub fn position_of_id(&self, id: GeometryId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn by_id(&self, id: GeometryId) -> Option<&StoredGeometry> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<StoredGeometry> {
        if index >= self.records.len() {
            return None;
        }
        Some(self.records.remove(index))
    }

    /// Swap the geometry at `index`, keeping its id and metadata.
    pub fn replace_geometry(&mut self, index: usize, geometry: Geometry) -> Option<Geometry> {
        let record = self.records.get_mut(index)?;
        Some(std::mem::replace(&mut record.geometry, geometry))
    }

    pub fn properties_at(&self, index: usize) -> Option<&Properties> {
        self.records.get(index)?.properties.as_ref()
    }

    /// Returns false when `index` is out of range.
    pub fn set_properties_at(&mut self, index: usize, properties: Option<Properties>) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.properties = properties;
                true
            }
            None => false,
        }
    }

    /// Drop every record. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
