//! Geometry values produced by the drawing widget.
//!
//! A [`Geometry`] is an immutable GeoJSON geometry. The draw control never
//! looks inside one; it only clones, compares and serializes them. Widgets
//! hand shapes over as raw JSON, and [`Geometry::from_geojson`] is the single
//! translation point from that raw form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TranslationError;

/// A single coordinate: longitude, latitude and optional extra ordinates.
pub type Position = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

const SUPPORTED_TYPES: [&str; 6] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
];

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(vec![x, y])
    }

    pub fn line_string(points: &[(f64, f64)]) -> Self {
        Geometry::LineString(points.iter().map(|&(x, y)| vec![x, y]).collect())
    }

    /// Build a single-ring polygon, closing the ring if needed.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let mut ring: Vec<Position> = points.iter().map(|&(x, y)| vec![x, y]).collect();
        if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
            if first != last {
                ring.push(first.clone());
            }
        }
        Geometry::Polygon(vec![ring])
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Translate a raw widget shape into a geometry.
    ///
    /// Accepts either a bare GeoJSON geometry object or a `Feature` wrapping
    /// one, which is what most drawing widgets report.
    pub fn from_geojson(raw: &Value) -> Result<Self, TranslationError> {
        let object = raw.as_object().ok_or(TranslationError::NotAnObject)?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(TranslationError::MissingField("type"))?;

        if kind == "Feature" {
            let geometry = object
                .get("geometry")
                .filter(|geometry| !geometry.is_null())
                .ok_or(TranslationError::MissingField("geometry"))?;
            return Self::from_geojson(geometry);
        }

        if !SUPPORTED_TYPES.contains(&kind) {
            return Err(TranslationError::UnsupportedType(kind.to_string()));
        }
        if !object.contains_key("coordinates") {
            return Err(TranslationError::MissingField("coordinates"));
        }

        let geometry: Geometry = serde_json::from_value(raw.clone())
            .map_err(|e| TranslationError::InvalidCoordinates(e.to_string()))?;
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn to_geojson(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    fn validate(&self) -> Result<(), TranslationError> {
        match self {
            Geometry::Point(position) => check_position(position),
            Geometry::MultiPoint(positions) => check_positions(positions, 1),
            Geometry::LineString(positions) => check_positions(positions, 2),
            Geometry::MultiLineString(lines) => lines
                .iter()
                .try_for_each(|line| check_positions(line, 2)),
            Geometry::Polygon(rings) => check_rings(rings),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().try_for_each(|rings| check_rings(rings))
            }
        }
    }
}

fn check_position(position: &Position) -> Result<(), TranslationError> {
    if position.len() < 2 {
        return Err(TranslationError::InvalidCoordinates(format!(
            "position needs at least 2 ordinates, got {}",
            position.len()
        )));
    }
    if position.iter().any(|ordinate| !ordinate.is_finite()) {
        return Err(TranslationError::InvalidCoordinates(
            "position contains a non-finite ordinate".into(),
        ));
    }
    Ok(())
}

fn check_positions(positions: &[Position], min: usize) -> Result<(), TranslationError> {
    if positions.len() < min {
        return Err(TranslationError::InvalidCoordinates(format!(
            "expected at least {} positions, got {}",
            min,
            positions.len()
        )));
    }
    positions.iter().try_for_each(check_position)
}

fn check_rings(rings: &[Vec<Position>]) -> Result<(), TranslationError> {
    if rings.is_empty() {
        return Err(TranslationError::InvalidCoordinates(
            "polygon has no rings".into(),
        ));
    }
    rings.iter().try_for_each(|ring| check_positions(ring, 4))
}
