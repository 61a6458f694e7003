#![allow(clippy::float_cmp)]

use super::*;

fn sprite() -> SpriteImage {
    SpriteImage::from_rgba(1, 1, &[0, 255, 0, 255]).unwrap()
}

fn obj_at(x: f64, y: f64, w: f64, h: f64) -> PlacedObject {
    PlacedObject::with_bounds(sprite(), x, y, w, h, 0.0)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// PlacedObject: construction
// =============================================================

#[test]
fn new_uses_stock_defaults() {
    let obj = PlacedObject::new(sprite());
    assert_eq!((obj.x, obj.y, obj.width, obj.height, obj.rotation), (150.0, 150.0, 100.0, 100.0, 0.0));
}

#[test]
fn new_assigns_distinct_ids() {
    let a = PlacedObject::new(sprite());
    let b = PlacedObject::new(sprite());
    assert_ne!(a.id, b.id);
}

#[test]
fn center_is_box_midpoint() {
    let obj = obj_at(10.0, 20.0, 30.0, 40.0);
    assert_eq!(obj.center(), pt(25.0, 40.0));
}

// =============================================================
// PlacedObject: move / rotate
// =============================================================

#[test]
fn center_on_recenters_box() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.center_on(pt(300.0, 50.0));
    assert_eq!((obj.x, obj.y), (250.0, 0.0));
    assert_eq!((obj.width, obj.height), (100.0, 100.0));
}

#[test]
fn translate_moves_both_axes() {
    let mut obj = obj_at(0.0, 0.0, 50.0, 50.0);
    obj.translate(-5.0, 7.5);
    assert_eq!((obj.x, obj.y), (-5.0, 7.5));
}

#[test]
fn rotate_by_accumulates_without_wrapping() {
    let mut obj = obj_at(0.0, 0.0, 50.0, 50.0);
    for _ in 0..30 {
        obj.rotate_by(15.0);
    }
    assert_eq!(obj.rotation, 450.0);
}

// =============================================================
// PlacedObject: resize_from
// =============================================================

#[test]
fn resize_bottom_right_anchors_top_left() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::BottomRight, pt(300.0, 280.0));
    assert_eq!((obj.x, obj.y, obj.width, obj.height), (150.0, 150.0, 150.0, 130.0));
}

#[test]
fn resize_top_left_anchors_bottom_right() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::TopLeft, pt(100.0, 120.0));
    assert_eq!((obj.x, obj.y, obj.width, obj.height), (100.0, 120.0, 150.0, 130.0));
    assert_eq!(obj.x + obj.width, 250.0);
    assert_eq!(obj.y + obj.height, 250.0);
}

#[test]
fn resize_top_right_anchors_bottom_left() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::TopRight, pt(280.0, 100.0));
    assert_eq!((obj.x, obj.y, obj.width, obj.height), (150.0, 100.0, 130.0, 150.0));
}

#[test]
fn resize_bottom_left_anchors_top_right() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::BottomLeft, pt(120.0, 300.0));
    assert_eq!((obj.x, obj.y, obj.width, obj.height), (120.0, 150.0, 130.0, 150.0));
}

#[test]
fn resize_bottom_right_past_minimum_clamps() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::BottomRight, pt(120.0, 120.0));
    assert_eq!((obj.width, obj.height), (20.0, 20.0));
    assert_eq!((obj.x, obj.y), (150.0, 150.0));
}

#[test]
fn resize_top_left_clamp_moves_anchor() {
    // The origin follows the cursor but the size clamps, so the
    // bottom-right corner no longer stays put.
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::TopLeft, pt(260.0, 260.0));
    assert_eq!((obj.x, obj.y), (260.0, 260.0));
    assert_eq!((obj.width, obj.height), (20.0, 20.0));
}

#[test]
fn resize_is_absolute_to_cursor_across_events() {
    let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
    obj.resize_from(Handle::BottomRight, pt(260.0, 260.0));
    obj.resize_from(Handle::BottomRight, pt(270.0, 240.0));
    assert_eq!((obj.width, obj.height), (120.0, 90.0));
}

#[test]
fn resize_never_below_minimum_for_any_handle() {
    for handle in Handle::ALL {
        for target in [pt(-500.0, -500.0), pt(500.0, 500.0), pt(200.0, 200.0), pt(151.0, 249.0)] {
            let mut obj = obj_at(150.0, 150.0, 100.0, 100.0);
            obj.resize_from(handle, target);
            assert!(obj.width >= 20.0, "{handle:?} -> {target:?}: width {}", obj.width);
            assert!(obj.height >= 20.0, "{handle:?} -> {target:?}: height {}", obj.height);
        }
    }
}

// =============================================================
// Scene: add / select
// =============================================================

#[test]
fn scene_new_is_empty() {
    let scene = Scene::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
    assert!(scene.selected_id().is_none());
}

#[test]
fn add_object_appends_and_selects() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    let b = scene.add_object(sprite());
    assert_eq!(scene.ids(), vec![a, b]);
    assert_eq!(scene.selected_id(), Some(b));
    let obj = scene.get(&b).unwrap();
    assert_eq!((obj.x, obj.y, obj.width, obj.height, obj.rotation), (150.0, 150.0, 100.0, 100.0, 0.0));
}

#[test]
fn push_keeps_given_bounds() {
    let mut scene = Scene::new();
    let id = scene.push(obj_at(-10.0, 900.0, 40.0, 60.0));
    let obj = scene.selected().unwrap();
    assert_eq!(obj.id, id);
    assert_eq!((obj.x, obj.y), (-10.0, 900.0));
}

#[test]
fn select_unknown_id_clears() {
    let mut scene = Scene::new();
    scene.add_object(sprite());
    scene.select(Some(Uuid::new_v4()));
    assert!(scene.selected_id().is_none());
}

#[test]
fn select_none_clears() {
    let mut scene = Scene::new();
    scene.add_object(sprite());
    scene.select(None);
    assert!(scene.selected().is_none());
}

#[test]
fn selected_mut_edits_in_place() {
    let mut scene = Scene::new();
    let id = scene.add_object(sprite());
    scene.selected_mut().unwrap().x = 1.0;
    assert_eq!(scene.get(&id).unwrap().x, 1.0);
}

// =============================================================
// Scene: delete_selected
// =============================================================

#[test]
fn delete_selected_removes_exactly_one() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    let b = scene.add_object(sprite());
    let removed = scene.delete_selected().unwrap();
    assert_eq!(removed.id, b);
    assert_eq!(scene.ids(), vec![a]);
    assert!(scene.selected_id().is_none());
}

#[test]
fn delete_selected_without_selection_is_noop() {
    let mut scene = Scene::new();
    scene.add_object(sprite());
    scene.add_object(sprite());
    scene.select(None);
    assert!(scene.delete_selected().is_none());
    assert_eq!(scene.len(), 2);
}

#[test]
fn delete_selected_middle_keeps_order() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    let b = scene.add_object(sprite());
    let c = scene.add_object(sprite());
    scene.select(Some(b));
    scene.delete_selected();
    assert_eq!(scene.ids(), vec![a, c]);
}

// =============================================================
// Scene: bring_to_front
// =============================================================

#[test]
fn bring_to_front_moves_to_end_and_selects() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    let b = scene.add_object(sprite());
    let c = scene.add_object(sprite());
    assert!(scene.bring_to_front(&a));
    assert_eq!(scene.ids(), vec![b, c, a]);
    assert_eq!(scene.selected_id(), Some(a));
}

#[test]
fn bring_to_front_topmost_is_idempotent() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    let b = scene.add_object(sprite());
    scene.bring_to_front(&b);
    scene.bring_to_front(&b);
    assert_eq!(scene.ids(), vec![a, b]);
}

#[test]
fn bring_to_front_unknown_id_is_noop() {
    let mut scene = Scene::new();
    let a = scene.add_object(sprite());
    scene.select(None);
    assert!(!scene.bring_to_front(&Uuid::new_v4()));
    assert_eq!(scene.ids(), vec![a]);
    assert!(scene.selected_id().is_none());
}

// =============================================================
// Scene: clear / topmost_at
// =============================================================

#[test]
fn clear_empties_scene_and_selection() {
    let mut scene = Scene::new();
    for _ in 0..3 {
        scene.add_object(sprite());
    }
    scene.clear();
    assert!(scene.is_empty());
    assert!(scene.selected_id().is_none());
}

#[test]
fn topmost_at_prefers_last_in_paint_order() {
    let mut scene = Scene::new();
    let _a = scene.push(obj_at(0.0, 0.0, 100.0, 100.0));
    let b = scene.push(obj_at(50.0, 50.0, 100.0, 100.0));
    assert_eq!(scene.topmost_at(pt(75.0, 75.0)), Some(b));
}

#[test]
fn topmost_at_falls_through_to_lower_object() {
    let mut scene = Scene::new();
    let a = scene.push(obj_at(0.0, 0.0, 100.0, 100.0));
    scene.push(obj_at(50.0, 50.0, 100.0, 100.0));
    assert_eq!(scene.topmost_at(pt(25.0, 25.0)), Some(a));
}

#[test]
fn topmost_at_empty_space_is_none() {
    let mut scene = Scene::new();
    scene.push(obj_at(0.0, 0.0, 100.0, 100.0));
    assert!(scene.topmost_at(pt(500.0, 500.0)).is_none());
}
