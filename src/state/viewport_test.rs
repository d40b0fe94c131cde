use super::*;

#[test]
fn wheel_down_zooms_out_and_wheel_up_zooms_in() {
    let mut v = ViewState::default();
    v.on_wheel(120.0);
    assert!((v.zoom - 0.9).abs() < 1e-12);
    v.on_wheel(-120.0);
    assert!((v.zoom - 0.99).abs() < 1e-12);
}

#[test]
fn zoom_stays_clamped_under_any_wheel_sequence() {
    let mut v = ViewState::default();
    for _ in 0..200 {
        v.on_wheel(-1.0);
    }
    assert_eq!(v.zoom, ZOOM_MAX);
    for _ in 0..500 {
        v.on_wheel(1.0);
    }
    assert_eq!(v.zoom, ZOOM_MIN);
    // mixed sequence
    for i in 0..1000 {
        v.on_wheel(if i % 3 == 0 { -3.0 } else { 2.0 });
        assert!(v.zoom >= ZOOM_MIN && v.zoom <= ZOOM_MAX);
    }
}

#[test]
fn drag_pans_without_drift() {
    let mut v = ViewState::default();
    v.on_pointer_down(100.0, 100.0);
    assert!(v.on_pointer_move(130.0, 90.0));
    assert_eq!((v.pan_x, v.pan_y), (30.0, -10.0));
    // a second drag continues from the accumulated pan
    v.on_pointer_up();
    v.on_pointer_down(0.0, 0.0);
    assert!(v.on_pointer_move(5.0, 5.0));
    assert_eq!((v.pan_x, v.pan_y), (35.0, -5.0));
}

#[test]
fn move_without_drag_is_a_no_op() {
    let mut v = ViewState::default();
    assert!(!v.on_pointer_move(50.0, 50.0));
    assert_eq!((v.pan_x, v.pan_y), (0.0, 0.0));
}

#[test]
fn pointer_up_always_ends_drag() {
    let mut v = ViewState::default();
    v.on_pointer_down(1.0, 2.0);
    assert!(v.dragging);
    v.on_pointer_up();
    assert!(!v.dragging);
    v.on_pointer_up();
    assert!(!v.dragging);
}

#[test]
fn pan_is_unconstrained() {
    let mut v = ViewState::default();
    v.on_pointer_down(0.0, 0.0);
    assert!(v.on_pointer_move(1.0e9, -1.0e9));
    assert_eq!((v.pan_x, v.pan_y), (1.0e9, -1.0e9));
}

#[test]
fn reset_restores_defaults_from_any_state() {
    let mut v = ViewState::default();
    for _ in 0..10 {
        v.on_wheel(-1.0);
    }
    v.on_pointer_down(10.0, 10.0);
    v.on_pointer_move(500.0, -300.0);
    v.reset();
    assert_eq!(v, ViewState::default());
}
