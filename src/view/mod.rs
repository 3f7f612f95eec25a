//! Read-only feature projections of the store.
//!
//! Features are derived on demand and never stored; they serialize as GeoJSON
//! `Feature` and `FeatureCollection` objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geometry::Geometry;
use crate::store::{GeometryId, GeometryStore, Properties};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GeometryId>,
    pub geometry: Geometry,
    pub properties: Option<Properties>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Option<Properties>) -> Self {
        Feature {
            id: None,
            geometry,
            properties,
        }
    }

    pub fn with_id(mut self, id: GeometryId) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn to_geojson(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        FeatureCollection::new(iter.into_iter().collect())
    }
}

/// One feature per stored geometry, in store order.
pub fn features(store: &GeometryStore) -> Vec<Feature> {
    if store.is_empty() {
        return Vec::new();
    }
    store
        .records()
        .iter()
        .map(|record| {
            Feature::new(record.geometry.clone(), record.properties.clone()).with_id(record.id)
        })
        .collect()
}

pub fn collection(store: &GeometryStore) -> FeatureCollection {
    FeatureCollection::new(features(store))
}
