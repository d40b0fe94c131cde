use super::*;

#[test]
fn sub_metre_distances_stay_in_millimetres() {
    assert_eq!(format_distance(0.0), "0mm");
    assert_eq!(format_distance(500.0), "500mm");
    assert_eq!(format_distance(999.0), "999mm");
    assert_eq!(format_distance(-999.0), "-999mm");
}

#[test]
fn metre_distances_get_two_decimals() {
    assert_eq!(format_distance(1000.0), "1.00m");
    assert_eq!(format_distance(2500.0), "2.50m");
    assert_eq!(format_distance(-1500.0), "-1.50m");
    assert_eq!(format_distance(10_000.0), "10.00m");
}
