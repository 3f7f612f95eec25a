use draw_control::{
    DrawAction, DrawControl, DrawEventKind, InMemoryMap, InMemoryWidget, NativeDrawEvent,
    DEFAULT_LAYER_NAME,
};
use serde_json::json;

use crate::support::{
    append_control, config, control, listen_all, point, props, raw_point, FlakyMap,
};

#[test]
fn widget_events_are_applied_in_arrival_order() {
    let mut control = control();
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.widget_mut().draw(raw_point(2.0, 2.0));
    control.widget_mut().delete(0);

    assert_eq!(control.count(), 0);
    assert_eq!(control.process_events(), 3);

    assert_eq!(control.geometries(), vec![&point(2.0, 2.0)]);
    assert_eq!(control.last_draw_action(), Some(DrawAction::Deleted));
    assert_eq!(control.last_geometry(), Some(&point(1.0, 1.0)));
}

#[test]
fn in_place_edit_replaces_geometry_and_keeps_metadata() {
    let mut control = control();
    let log = listen_all(&mut control);
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.widget_mut().draw(raw_point(2.0, 2.0));
    control.process_events();
    control
        .set_geometry_properties(&point(1.0, 1.0), Some(props(json!({"name": "a"}))))
        .unwrap();
    let id = control.id_of(&point(1.0, 1.0)).unwrap();

    control.widget_mut().edit(0, raw_point(1.5, 1.5));
    control.process_events();

    assert_eq!(control.geometries(), vec![&point(1.5, 1.5), &point(2.0, 2.0)]);
    assert_eq!(control.id_of(&point(1.5, 1.5)), Some(id));
    assert_eq!(
        control.get_geometry_properties(&point(1.5, 1.5)),
        Some(&props(json!({"name": "a"})))
    );
    assert_eq!(control.last_draw_action(), Some(DrawAction::Edited));
    assert_eq!(control.last_geometry(), Some(&point(1.5, 1.5)));
    assert_eq!(log.borrow().last(), Some(&("edit", point(1.5, 1.5))));
}

#[test]
fn append_mode_edit_is_handled_as_create() {
    let mut control = append_control();
    let log = listen_all(&mut control);
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.widget_mut().edit(0, raw_point(1.5, 1.5));
    control.process_events();

    assert_eq!(control.geometries(), vec![&point(1.0, 1.0), &point(1.5, 1.5)]);
    assert_eq!(control.widget().shapes().len(), 2);
    assert_eq!(control.last_draw_action(), Some(DrawAction::Created));
    assert_eq!(
        *log.borrow(),
        vec![("create", point(1.0, 1.0)), ("create", point(1.5, 1.5))]
    );
}

#[test]
fn untranslatable_shape_resets_and_reports() {
    let mut control = control();
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.process_events();
    assert!(control.layer().is_some());

    control.widget_mut().draw(json!({"type": "Circle", "radius": 10.0}));
    control.process_events();

    assert_eq!(control.count(), 0);
    assert!(control.last_draw_action().is_none());
    assert!(control.layer().is_none());
    // Only the canonical state is cleared; the drawing stays on the widget.
    assert_eq!(control.widget().shapes().len(), 2);
    assert_eq!(control.map().messages().len(), 1);
    assert!(control.map().messages()[0].contains("Circle"));
}

#[test]
fn control_stays_usable_after_failure() {
    let mut control = control();
    control.widget_mut().draw(json!("not a shape"));
    control.widget_mut().draw(raw_point(3.0, 3.0));
    control.widget_mut().draw(json!(null));
    control.widget_mut().draw(raw_point(4.0, 4.0));

    assert_eq!(control.process_events(), 4);

    assert_eq!(control.map().messages().len(), 2);
    assert_eq!(control.geometries(), vec![&point(4.0, 4.0)]);
    assert_eq!(control.last_draw_action(), Some(DrawAction::Created));
}

#[test]
fn host_map_failure_resets_and_reports() {
    let mut control = DrawControl::new(InMemoryWidget::new(), FlakyMap::accepting(1));
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.widget_mut().draw(raw_point(2.0, 2.0));

    control.process_events();

    assert_eq!(control.count(), 0);
    assert!(control.layer().is_none());
    assert_eq!(control.map().inner.layer_count(), 0);
    assert_eq!(control.map().inner.messages().len(), 1);
    assert!(control.map().inner.messages()[0].contains("read-only"));
}

#[test]
fn direct_native_event() {
    let mut control = control();
    control.handle_native_event(NativeDrawEvent::new(
        DrawEventKind::Created,
        json!({"type": "LineString", "coordinates": [[0, 0], [1, 1]]}),
    ));

    assert_eq!(control.count(), 1);
    assert_eq!(control.geometries()[0].type_name(), "LineString");
}

#[test]
fn configured_layer_name_is_used() {
    let mut control = DrawControl::with_config(
        InMemoryWidget::new(),
        InMemoryMap::new(),
        config("Sketches"),
    )
    .unwrap();
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.process_events();

    assert!(control.map().layer("Sketches").is_some());
    assert!(control.map().layer(DEFAULT_LAYER_NAME).is_none());
}
