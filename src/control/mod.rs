//! The draw control: keeps the canonical geometry store in step with a
//! drawing widget and mirrors it onto a host map layer.
//!
//! ## Example
//!
//! ```ignore
//! use draw_control::{DrawControl, InMemoryMap, InMemoryWidget};
//!
//! let mut control = DrawControl::new(InMemoryWidget::new(), InMemoryMap::new());
//!
//! control.on_geometry_create(|control, geometry| {
//!     println!("drew a {}, {} total", geometry.type_name(), control.count());
//! });
//!
//! control.widget_mut().draw(serde_json::json!({
//!     "type": "Point",
//!     "coordinates": [13.4, 52.5]
//! }));
//!
//! // Apply everything the widget reported since the last call
//! control.process_events();
//! ```

pub mod sync;

use std::sync::mpsc::{self, Receiver};

use crate::action::{ActionState, DrawAction};
use crate::config::{DrawControlConfig, LayerOptions};
use crate::dispatch::{DrawEvents, GeometryEvent, ListenerId};
use crate::error::{ConfigError, DrawControlError};
use crate::geometry::Geometry;
use crate::host::{HostMap, LayerHandle};
use crate::store::{GeometryId, GeometryStore, Properties};
use crate::view::{self, Feature, FeatureCollection};
use crate::widget::{DrawEventKind, DrawWidget, EditMode, NativeDrawEvent};

pub struct DrawControl<W, M> {
    widget: W,
    map: M,
    options: LayerOptions,
    store: GeometryStore,
    action: ActionState,
    layer: Option<LayerHandle>,
    events: DrawEvents<DrawControl<W, M>>,
    receiver: Receiver<NativeDrawEvent>,
}

impl<W: DrawWidget, M: HostMap> DrawControl<W, M> {
    pub fn new(widget: W, map: M) -> Self {
        Self::bind(widget, map, LayerOptions::default())
    }

    /// Build a control with a validated configuration.
    pub fn with_config(
        widget: W,
        map: M,
        config: DrawControlConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::bind(widget, map, config.layer))
    }

    fn bind(mut widget: W, map: M, options: LayerOptions) -> Self {
        let (sink, receiver) = mpsc::channel();
        widget.bind_events(sink);

        DrawControl {
            widget,
            map,
            options,
            store: GeometryStore::new(),
            action: ActionState::new(),
            layer: None,
            events: DrawEvents::new(),
            receiver,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn options(&self) -> &LayerOptions {
        &self.options
    }

    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn geometries(&self) -> Vec<&Geometry> {
        self.store.geometries()
    }

    pub fn properties(&self) -> Vec<Option<&Properties>> {
        self.store.properties()
    }

    pub fn last_geometry(&self) -> Option<&Geometry> {
        self.action.last_geometry()
    }

    pub fn last_draw_action(&self) -> Option<DrawAction> {
        self.action.last_action()
    }

    /// The representation layer currently on the host map, if any.
    pub fn layer(&self) -> Option<LayerHandle> {
        self.layer
    }

    pub fn features(&self) -> Vec<Feature> {
        view::features(&self.store)
    }

    pub fn collection(&self) -> FeatureCollection {
        view::collection(&self.store)
    }

    /// The last geometry paired with whatever metadata it currently has.
    pub fn last_feature(&self) -> Option<Feature> {
        let geometry = self.action.last_geometry()?;
        let feature = Feature::new(
            geometry.clone(),
            self.get_geometry_properties(geometry).cloned(),
        );
        Some(match self.id_of(geometry) {
            Some(id) => feature.with_id(id),
            None => feature,
        })
    }

    pub fn id_of(&self, geometry: &Geometry) -> Option<GeometryId> {
        let index = self.store.position(geometry)?;
        self.store.get(index).map(|record| record.id)
    }

    pub fn geometry_by_id(&self, id: GeometryId) -> Option<&Geometry> {
        self.store.by_id(id).map(|record| &record.geometry)
    }

    // Store operations

    /// Drop all geometries and the representation layer. With `clear_widget`
    /// the widget's own drawing is wiped too.
    pub fn reset(&mut self, clear_widget: bool) {
        if let Some(handle) = self.layer.take() {
            if let Err(err) = self.map.remove_layer(handle) {
                log::warn!("failed to remove representation layer {}: {}", handle, err);
            }
        }
        self.store.clear();
        self.action.clear();
        if clear_widget {
            self.widget.clear_native_state();
        }
        log::debug!("draw control reset (clear_widget: {})", clear_widget);
    }

    /// Remove the first geometry equal to `geometry`. Unknown geometries are
    /// ignored.
    ///
    /// Removing the trailing geometry while it is also the last one drawn is
    /// treated as an undo and recorded as [`DrawAction::RemovedLast`]; any
    /// other removal is recorded as [`DrawAction::Deleted`]. Listeners are not
    /// notified.
    pub fn remove_geometry(&mut self, geometry: &Geometry) -> Result<(), DrawControlError> {
        match self.store.position(geometry) {
            Some(index) => self.remove_at(index),
            None => {
                log::trace!("remove_geometry: no matching {}", geometry.type_name());
                Ok(())
            }
        }
    }

    pub fn remove_geometry_by_id(&mut self, id: GeometryId) -> Result<(), DrawControlError> {
        match self.store.position_of_id(id) {
            Some(index) => self.remove_at(index),
            None => {
                log::trace!("remove_geometry_by_id: no {}", id);
                Ok(())
            }
        }
    }

    fn remove_at(&mut self, index: usize) -> Result<(), DrawControlError> {
        let Some(removed) = self.store.remove_at(index) else {
            return Ok(());
        };
        self.widget.remove_at_index(index);

        let was_trailing = index == self.store.len();
        if was_trailing && self.action.is_last(&removed.geometry) {
            let new_last = self
                .store
                .last()
                .map(|record| record.geometry.clone())
                .unwrap_or(removed.geometry);
            self.action.record(DrawAction::RemovedLast, new_last);
        } else {
            self.action.record(DrawAction::Deleted, removed.geometry);
        }

        self.redraw_if_layer()
    }

    pub fn get_geometry_properties(&self, geometry: &Geometry) -> Option<&Properties> {
        let index = self.store.position(geometry)?;
        self.store.properties_at(index)
    }

    /// Attach metadata to the first geometry equal to `geometry`. Returns
    /// false, changing nothing, when there is no such geometry.
    pub fn set_geometry_properties(
        &mut self,
        geometry: &Geometry,
        properties: Option<Properties>,
    ) -> Result<bool, DrawControlError> {
        match self.store.position(geometry) {
            Some(index) => self.set_properties_at(index, properties),
            None => {
                log::trace!("set_geometry_properties: no matching {}", geometry.type_name());
                Ok(false)
            }
        }
    }

    pub fn properties_by_id(&self, id: GeometryId) -> Option<&Properties> {
        self.store.by_id(id)?.properties.as_ref()
    }

    pub fn set_properties_by_id(
        &mut self,
        id: GeometryId,
        properties: Option<Properties>,
    ) -> Result<bool, DrawControlError> {
        match self.store.position_of_id(id) {
            Some(index) => self.set_properties_at(index, properties),
            None => Ok(false),
        }
    }

    fn set_properties_at(
        &mut self,
        index: usize,
        properties: Option<Properties>,
    ) -> Result<bool, DrawControlError> {
        self.store.set_properties_at(index, properties);
        self.redraw_if_layer()?;
        Ok(true)
    }

    // Listeners

    pub fn on_geometry_create<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Self, &Geometry) + 'static,
    {
        self.events.on(GeometryEvent::Create, listener)
    }

    pub fn on_geometry_edit<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Self, &Geometry) + 'static,
    {
        self.events.on(GeometryEvent::Edit, listener)
    }

    pub fn on_geometry_delete<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&Self, &Geometry) + 'static,
    {
        self.events.on(GeometryEvent::Delete, listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove(id)
    }

    fn fire(&self, event: GeometryEvent, geometry: &Geometry) {
        self.events.fire(event, self, geometry);
    }

    // Event handlers

    pub fn handle_created(&mut self, geometry: Geometry) -> Result<(), DrawControlError> {
        log::debug!("geometry created: {}", geometry.type_name());
        self.action.record(DrawAction::Created, geometry.clone());
        self.store.push(geometry.clone());
        self.redraw_layer()?;
        self.fire(GeometryEvent::Create, &geometry);
        Ok(())
    }

    /// The widget may not say which shape changed, so the store is
    /// reconciled against the widget's snapshot instead of patched directly.
    pub fn handle_edited(&mut self, geometry: Geometry) -> Result<(), DrawControlError> {
        log::debug!("geometry edited: {}", geometry.type_name());
        self.action.record(DrawAction::Edited, geometry.clone());
        self.patch_from_widget()?;
        self.redraw_layer()?;
        self.fire(GeometryEvent::Edit, &geometry);
        Ok(())
    }

    pub fn handle_deleted(&mut self, geometry: Geometry) -> Result<(), DrawControlError> {
        log::debug!("geometry deleted: {}", geometry.type_name());
        self.action.record(DrawAction::Deleted, geometry.clone());
        let Some(index) = self.store.position(&geometry) else {
            log::trace!("deleted geometry was not in the store");
            return Ok(());
        };
        self.store.remove_at(index);
        self.redraw_layer()?;
        self.fire(GeometryEvent::Delete, &geometry);
        Ok(())
    }

    /// Reconcile the store with the widget's current snapshot.
    pub fn sync_geometries(&mut self) -> Result<(), DrawControlError> {
        self.patch_from_widget()?;
        self.redraw_if_layer()
    }

    fn patch_from_widget(&mut self) -> Result<Option<usize>, DrawControlError> {
        if self.store.is_empty() {
            return Ok(None);
        }
        let snapshot = self.widget.fetch_snapshot();
        let patched = sync::scan_and_patch(&mut self.store, &snapshot)?;
        if let Some(index) = patched {
            log::debug!("synced geometry at index {} from widget snapshot", index);
        }
        Ok(patched)
    }

    // Native events

    /// Apply every event the widget has reported so far, in arrival order.
    /// Returns how many events were taken off the queue.
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.handle_native_event(event);
            processed += 1;
        }
        processed
    }

    /// Apply one native event. Failures are reported to the user through the
    /// host map and leave the control empty but usable; the widget's drawing
    /// is left as it is.
    pub fn handle_native_event(&mut self, event: NativeDrawEvent) {
        if let Err(err) = self.apply_native_event(&event) {
            log::error!("failed to handle {:?} draw event: {}", event.kind, err);
            self.reset(false);
            self.map
                .report_error(&format!("There was an error handling the drawn shape: {}", err));
        }
    }

    fn apply_native_event(&mut self, event: &NativeDrawEvent) -> Result<(), DrawControlError> {
        let geometry = Geometry::from_geojson(&event.shape)?;
        match event.kind {
            DrawEventKind::Created => self.handle_created(geometry),
            DrawEventKind::Edited => match self.widget.edit_mode() {
                EditMode::InPlace => self.handle_edited(geometry),
                EditMode::Append => self.handle_created(geometry),
            },
            DrawEventKind::Deleted => self.handle_deleted(geometry),
        }
    }

    // Representation layer

    fn redraw_layer(&mut self) -> Result<(), DrawControlError> {
        let collection = self.collection();
        let options = &self.options;
        let handle = self.map.add_layer(
            &collection,
            &options.style,
            &options.name,
            options.visible,
            options.opacity,
        )?;
        self.layer = self.map.find_layer(&options.name).or(Some(handle));
        Ok(())
    }

    fn redraw_if_layer(&mut self) -> Result<(), DrawControlError> {
        if self.layer.is_some() {
            self.redraw_layer()?;
        }
        Ok(())
    }
}
