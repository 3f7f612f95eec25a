use draw_control::DrawAction;
use serde_json::json;

use crate::support::{control, point, props, raw_point};

#[test]
fn sync_replaces_divergent_geometry_and_keeps_metadata() {
    let mut control = control();
    // The store learns about A directly while the widget only ever shows B.
    control.handle_created(point(0.0, 0.0)).unwrap();
    control
        .set_geometry_properties(&point(0.0, 0.0), Some(props(json!({"name": "A"}))))
        .unwrap();
    control.widget_mut().draw(raw_point(5.0, 5.0));

    control.sync_geometries().unwrap();

    assert_eq!(control.geometries(), vec![&point(5.0, 5.0)]);
    assert_eq!(control.properties(), vec![Some(&props(json!({"name": "A"})))]);
    assert_eq!(control.last_draw_action(), Some(DrawAction::Created));
}

#[test]
fn sync_of_empty_store_is_noop() {
    let mut control = control();
    control.widget_mut().draw(raw_point(1.0, 1.0));

    control.sync_geometries().unwrap();

    assert_eq!(control.count(), 0);
    assert!(control.layer().is_none());
    assert_eq!(control.map().add_count(), 0);
}

#[test]
fn sync_ignores_appended_snapshot_entries() {
    let mut control = control();
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.process_events();
    control.widget_mut().draw(raw_point(2.0, 2.0));

    control.sync_geometries().unwrap();

    assert_eq!(control.geometries(), vec![&point(1.0, 1.0)]);
}

#[test]
fn sync_redraws_existing_layer() {
    let mut control = control();
    control.widget_mut().draw(raw_point(1.0, 1.0));
    control.process_events();
    let adds = control.map().add_count();

    control.sync_geometries().unwrap();

    assert_eq!(control.map().add_count(), adds + 1);
}

#[test]
fn multiple_edits_in_one_snapshot_patch_only_first() {
    let mut control = control();
    for x in [1.0, 2.0, 3.0] {
        control.widget_mut().draw(raw_point(x, x));
    }
    control.process_events();

    // Two shapes change before the control gets to sync.
    control.widget_mut().edit(0, raw_point(10.0, 10.0));
    control.widget_mut().edit(2, raw_point(30.0, 30.0));
    control.sync_geometries().unwrap();

    assert_eq!(
        control.geometries(),
        vec![&point(10.0, 10.0), &point(2.0, 2.0), &point(3.0, 3.0)]
    );
}

#[test]
fn edit_with_untranslatable_snapshot_entry_fails() {
    let mut control = control();
    control.handle_created(point(1.0, 1.0)).unwrap();
    control.widget_mut().draw(json!({"type": "Point"}));

    let result = control.handle_edited(point(1.0, 1.0));

    assert!(result.is_err());
}
