use std::cell::RefCell;
use std::rc::Rc;

use draw_control::{
    DrawControl, DrawControlConfig, EditMode, FeatureCollection, Geometry, HostMap,
    HostMapError, InMemoryMap, InMemoryWidget, LayerHandle, LayerStyle, Properties,
};
use serde_json::{json, Value};

pub type TestControl = DrawControl<InMemoryWidget, InMemoryMap>;

pub fn control() -> TestControl {
    DrawControl::new(InMemoryWidget::new(), InMemoryMap::new())
}

pub fn append_control() -> TestControl {
    DrawControl::new(
        InMemoryWidget::new().with_edit_mode(EditMode::Append),
        InMemoryMap::new(),
    )
}

pub fn config(name: &str) -> DrawControlConfig {
    let mut config = DrawControlConfig::default();
    config.layer.name = name.to_string();
    config
}

pub fn point(x: f64, y: f64) -> Geometry {
    Geometry::point(x, y)
}

pub fn raw_point(x: f64, y: f64) -> Value {
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {"type": "Point", "coordinates": [x, y]}
    })
}

pub fn props(value: Value) -> Properties {
    value.as_object().cloned().expect("properties must be a JSON object")
}

/// Records `(event, geometry)` pairs seen by listeners.
pub type Log = Rc<RefCell<Vec<(&'static str, Geometry)>>>;

pub fn listen_all(control: &mut TestControl) -> Log {
    let log: Log = Rc::new(RefCell::new(Vec::new()));

    let created = Rc::clone(&log);
    control.on_geometry_create(move |_, geometry| {
        created.borrow_mut().push(("create", geometry.clone()));
    });
    let edited = Rc::clone(&log);
    control.on_geometry_edit(move |_, geometry| {
        edited.borrow_mut().push(("edit", geometry.clone()));
    });
    let deleted = Rc::clone(&log);
    control.on_geometry_delete(move |_, geometry| {
        deleted.borrow_mut().push(("delete", geometry.clone()));
    });

    log
}

/// Host map that accepts a fixed number of layer additions, then rejects.
#[derive(Default)]
pub struct FlakyMap {
    pub inner: InMemoryMap,
    pub remaining: usize,
}

impl FlakyMap {
    pub fn accepting(remaining: usize) -> Self {
        FlakyMap {
            inner: InMemoryMap::new(),
            remaining,
        }
    }
}

impl HostMap for FlakyMap {
    fn add_layer(
        &mut self,
        collection: &FeatureCollection,
        style: &LayerStyle,
        name: &str,
        visible: bool,
        opacity: f64,
    ) -> Result<LayerHandle, HostMapError> {
        if self.remaining == 0 {
            return Err(HostMapError::LayerRejected("map is read-only".into()));
        }
        self.remaining -= 1;
        self.inner.add_layer(collection, style, name, visible, opacity)
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> Result<(), HostMapError> {
        self.inner.remove_layer(handle)
    }

    fn find_layer(&self, name: &str) -> Option<LayerHandle> {
        self.inner.find_layer(name)
    }

    fn report_error(&mut self, message: &str) {
        self.inner.report_error(message);
    }
}

/// Host map that never lets a layer be removed.
#[derive(Default)]
pub struct StickyMap {
    pub inner: InMemoryMap,
}

impl HostMap for StickyMap {
    fn add_layer(
        &mut self,
        collection: &FeatureCollection,
        style: &LayerStyle,
        name: &str,
        visible: bool,
        opacity: f64,
    ) -> Result<LayerHandle, HostMapError> {
        self.inner.add_layer(collection, style, name, visible, opacity)
    }

    fn remove_layer(&mut self, handle: LayerHandle) -> Result<(), HostMapError> {
        Err(HostMapError::UnknownLayer(handle))
    }

    fn find_layer(&self, name: &str) -> Option<LayerHandle> {
        self.inner.find_layer(name)
    }

    fn report_error(&mut self, message: &str) {
        self.inner.report_error(message);
    }
}
