//! Reconciling the store against the widget's own snapshot.
//!
//! Some widgets only report that an edit happened, not which shape changed.
//! The store is walked in step with the snapshot and the first position where
//! they disagree is taken to be the edited shape. Only that one position is
//! patched: several edits folded into a single snapshot are not supported,
//! and neither is reordering.

use serde_json::Value;

use crate::error::TranslationError;
use crate::geometry::Geometry;
use crate::store::GeometryStore;

/// Replace the geometry at the first divergence between `store` and
/// `snapshot`, keeping that record's id and metadata.
///
/// Returns the patched index, or `None` if the overlapping prefix matches.
/// Snapshot entries are translated lazily, so shapes past the divergence are
/// never looked at.
pub fn scan_and_patch(
    store: &mut GeometryStore,
    snapshot: &[Value],
) -> Result<Option<usize>, TranslationError> {
    if store.is_empty() {
        return Ok(None);
    }

    let overlap = store.len().min(snapshot.len());
    for (index, raw) in snapshot.iter().enumerate().take(overlap) {
        let incoming = Geometry::from_geojson(raw)?;
        let matches = store
            .get(index)
            .map(|record| record.geometry == incoming)
            .unwrap_or(false);
        if !matches {
            store.replace_geometry(index, incoming);
            return Ok(Some(index));
        }
    }

    Ok(None)
}
