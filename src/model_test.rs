use super::*;

fn line_x(name: &str, x: f64) -> GridLine {
    GridLine {
        id: None,
        name: name.into(),
        x: Some(x),
        y: None,
    }
}

fn line_y(name: &str, y: f64) -> GridLine {
    GridLine {
        id: None,
        name: name.into(),
        x: None,
        y: Some(y),
    }
}

fn unplaced(name: &str) -> GridLine {
    GridLine {
        name: name.into(),
        ..Default::default()
    }
}

// =============================================================
// normalize
// =============================================================

#[test]
fn created_and_flat_shapes_normalize_identically() {
    let created = GridPayload {
        created_x: Some(vec![line_x("A", 0.0), line_x("B", 5000.0)]),
        created_y: Some(vec![line_y("1", 0.0), line_y("2", 3000.0)]),
        ..Default::default()
    };
    let flat = GridPayload {
        x: Some(vec![line_x("A", 0.0), line_x("B", 5000.0)]),
        y: Some(vec![line_y("1", 0.0), line_y("2", 3000.0)]),
        ..Default::default()
    };
    assert_eq!(normalize(&created), normalize(&flat));
}

#[test]
fn created_lists_come_before_flat_lists() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 0.0)]),
        x: Some(vec![line_x("B", 5000.0)]),
        ..Default::default()
    };
    let n = normalize(&p);
    assert_eq!(n.x_lines.len(), 2);
    assert_eq!(n.x_lines[0].name, "A");
    assert_eq!(n.x_lines[1].name, "B");
}

#[test]
fn empty_payload_gets_default_bounds() {
    let n = normalize(&GridPayload::default());
    assert!(n.x_lines.is_empty());
    assert!(n.y_lines.is_empty());
    let b = n.bounds;
    assert_eq!(
        (b.min_x, b.max_x, b.min_y, b.max_y),
        (-10_000.0, 10_000.0, -10_000.0, 10_000.0)
    );
    assert_eq!((b.center_x, b.center_y), (0.0, 0.0));
    assert_eq!((b.width, b.height), (20_000.0, 20_000.0));
}

#[test]
fn axis_without_data_falls_back_independently() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 2500.0)]),
        ..Default::default()
    };
    let b = normalize(&p).bounds;
    assert_eq!((b.min_x, b.max_x), (2500.0, 2500.0));
    assert_eq!((b.min_y, b.max_y), (-10_000.0, 10_000.0));
}

#[test]
fn range_widens_but_never_shrinks_bounds() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", -4000.0), line_x("B", 6000.0)]),
        created_y: Some(vec![line_y("1", 0.0)]),
        range: Some(GridRange {
            x_min: -1000.0,
            x_max: 8000.0,
            y_min: -2000.0,
            y_max: 500.0,
            z: None,
        }),
        ..Default::default()
    };
    let b = normalize(&p).bounds;
    // x_min is inside the computed extents so it has no effect; x_max widens.
    assert_eq!((b.min_x, b.max_x), (-4000.0, 8000.0));
    assert_eq!((b.min_y, b.max_y), (-2000.0, 500.0));
}

#[test]
fn range_alone_defines_bounds() {
    let p = GridPayload {
        range: Some(GridRange {
            x_min: -100.0,
            x_max: 100.0,
            y_min: -50.0,
            y_max: 50.0,
            z: Some(4000.0),
        }),
        ..Default::default()
    };
    let b = normalize(&p).bounds;
    assert_eq!((b.min_x, b.max_x), (-100.0, 100.0));
    assert_eq!((b.min_y, b.max_y), (-50.0, 50.0));
}

#[test]
fn bounds_are_always_well_formed() {
    let shapes = vec![
        GridPayload::default(),
        GridPayload {
            created_x: Some(vec![line_x("A", -7000.0)]),
            ..Default::default()
        },
        GridPayload {
            y: Some(vec![line_y("1", 12_000.0), unplaced("2")]),
            ..Default::default()
        },
        GridPayload {
            grids: Some(vec![unplaced("G1")]),
            count: Some(1),
            ..Default::default()
        },
        GridPayload {
            created_x: Some(vec![unplaced("A")]),
            created_y: Some(vec![unplaced("1")]),
            ..Default::default()
        },
    ];
    for p in shapes {
        let b = normalize(&p).bounds;
        assert!(b.min_x <= b.max_x, "bad x bounds for {p:?}");
        assert!(b.min_y <= b.max_y, "bad y bounds for {p:?}");
        assert!(b.width >= 0.0 && b.height >= 0.0);
    }
}

#[test]
fn lines_without_their_axis_coordinate_do_not_affect_bounds() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 1000.0), unplaced("B")]),
        ..Default::default()
    };
    let b = normalize(&p).bounds;
    assert_eq!((b.min_x, b.max_x), (1000.0, 1000.0));
}

#[test]
fn preview_lists_are_not_assigned_to_an_axis() {
    let p: GridPayload =
        serde_json::from_str(r#"{"grids": [{"name": "G1", "x": 500}], "count": 1}"#).unwrap();
    assert!(p.has_data());
    let n = normalize(&p);
    assert!(n.x_lines.is_empty());
    assert!(n.y_lines.is_empty());
    assert_eq!(n.bounds.min_x, -10_000.0);
}

#[test]
fn two_by_two_layout() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 0.0), line_x("B", 5000.0)]),
        created_y: Some(vec![line_y("1", 0.0), line_y("2", 3000.0)]),
        ..Default::default()
    };
    let n = normalize(&p);
    let b = n.bounds;
    assert_eq!(
        (b.min_x, b.max_x, b.min_y, b.max_y),
        (0.0, 5000.0, 0.0, 3000.0)
    );
    assert_eq!((b.center_x, b.center_y), (2500.0, 1500.0));
    assert_eq!((b.width, b.height), (5000.0, 3000.0));
    assert_eq!(n.intersection_count(), 4);
    let c = GridCounts::of(&p);
    assert_eq!((c.x, c.y, c.total), (2, 2, 4));
}

#[test]
fn intersections_skip_lines_without_coordinates() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 0.0), line_x("B", 5000.0), unplaced("C")]),
        created_y: Some(vec![line_y("1", 0.0), line_y("2", 3000.0)]),
        ..Default::default()
    };
    let n = normalize(&p);
    assert_eq!(n.x_lines.len(), 3);
    assert_eq!(n.defined_x().count(), 2);
    assert_eq!(n.intersection_count(), 4);
}

// =============================================================
// GridCounts
// =============================================================

#[test]
fn counts_prefer_explicit_per_axis() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 0.0)]),
        count_x: Some(7),
        ..Default::default()
    };
    assert_eq!(GridCounts::of(&p).x, 7);
}

#[test]
fn counts_fall_back_to_list_lengths() {
    let p = GridPayload {
        created_x: Some(vec![line_x("A", 0.0), line_x("B", 1000.0)]),
        y: Some(vec![line_y("1", 0.0)]),
        ..Default::default()
    };
    let c = GridCounts::of(&p);
    assert_eq!((c.x, c.y, c.total), (2, 1, 3));
}

#[test]
fn empty_created_list_defers_to_flat_list() {
    let p = GridPayload {
        created_x: Some(vec![]),
        x: Some(vec![line_x("A", 0.0), line_x("B", 1000.0)]),
        ..Default::default()
    };
    assert_eq!(GridCounts::of(&p).x, 2);
}

#[test]
fn combined_count_stands_alone_when_axes_are_empty() {
    let p = GridPayload {
        count: Some(10),
        ..Default::default()
    };
    let c = GridCounts::of(&p);
    assert_eq!((c.x, c.y, c.total), (0, 0, 10));
}

#[test]
fn explicit_combined_count_overrides_sum() {
    let p = GridPayload {
        count_x: Some(2),
        count_y: Some(2),
        count: Some(10),
        ..Default::default()
    };
    assert_eq!(GridCounts::of(&p).total, 10);
}

// =============================================================
// GridPayload
// =============================================================

#[test]
fn has_data_covers_every_list_shape() {
    let with = |f: fn(&mut GridPayload)| {
        let mut p = GridPayload::default();
        f(&mut p);
        p
    };
    assert!(!GridPayload::default().has_data());
    assert!(!with(|p| p.count = Some(3)).has_data());
    assert!(!with(|p| p.created_x = Some(vec![])).has_data());
    assert!(with(|p| p.created_x = Some(vec![unplaced("A")])).has_data());
    assert!(with(|p| p.created_y = Some(vec![unplaced("1")])).has_data());
    assert!(with(|p| p.x = Some(vec![unplaced("A")])).has_data());
    assert!(with(|p| p.y = Some(vec![unplaced("1")])).has_data());
    assert!(with(|p| p.grids = Some(vec![unplaced("G")])).has_data());
    assert!(with(|p| p.items = Some(vec![unplaced("I")])).has_data());
}

#[test]
fn payload_tolerates_sparse_and_unknown_json() {
    let p: GridPayload = serde_json::from_str(
        r#"{"created_x": [{"name": "A", "x": 0, "extra": true}], "status": "ok"}"#,
    )
    .unwrap();
    assert_eq!(p.created_x.as_ref().unwrap().len(), 1);
    assert!(p.created_y.is_none());

    let empty: GridPayload = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, GridPayload::default());
}
