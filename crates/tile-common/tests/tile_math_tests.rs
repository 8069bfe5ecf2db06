//! Tests for latitude clamping and the Web Mercator tile projection.

use test_utils::{random_latitudes, random_longitudes, seeded_rng, zoom};
use tile_common::{
    clamp_latitude, latitude_to_tile_y, longitude_to_tile_x, TileAddress, ZoomRange, MAX_LAT,
    MAX_ZOOM, MIN_LAT,
};

// ============================================================================
// clamp_latitude tests
// ============================================================================

#[test]
fn test_clamp_latitude_examples() {
    assert_eq!(clamp_latitude(95.0), 89.9);
    assert_eq!(clamp_latitude(-95.0), -89.9);
    assert_eq!(clamp_latitude(10.0), 10.0);
}

#[test]
fn test_clamp_latitude_bounds_are_inclusive() {
    assert_eq!(clamp_latitude(MAX_LAT), MAX_LAT);
    assert_eq!(clamp_latitude(MIN_LAT), MIN_LAT);
    assert_eq!(clamp_latitude(90.0), MAX_LAT);
    assert_eq!(clamp_latitude(-90.0), MIN_LAT);
}

#[test]
fn test_clamp_latitude_is_idempotent() {
    for lat in [-1000.0, -90.0, -89.95, -45.0, 0.0, 33.3, 89.9, 89.99, 180.0] {
        let once = clamp_latitude(lat);
        assert_eq!(clamp_latitude(once), once, "lat = {}", lat);
    }
}

// ============================================================================
// longitude_to_tile_x tests
// ============================================================================

#[test]
fn test_longitude_reference_values() {
    assert_eq!(longitude_to_tile_x(-180.0, 5), 0);
    assert_eq!(longitude_to_tile_x(0.0, 1), 1);
    assert_eq!(longitude_to_tile_x(-11.0, 4), 7);
    assert_eq!(longitude_to_tile_x(6.0, 4), 8);
    assert_eq!(longitude_to_tile_x(-74.0060, 16), 19295);
}

#[test]
fn test_longitude_in_range_stays_on_grid() {
    let mut rng = seeded_rng(11);
    let lons = random_longitudes(&mut rng, 1000);
    for z in zoom::LEVELS {
        let n = 1i64 << z;
        for &lon in &lons {
            let x = longitude_to_tile_x(lon, z);
            assert!((0..n).contains(&x), "lon {} zoom {} -> {}", lon, z, x);
        }
    }
}

#[test]
fn test_longitude_out_of_range_does_not_fail() {
    assert_eq!(longitude_to_tile_x(180.0, 3), 8);
    assert_eq!(longitude_to_tile_x(-200.0, 3), -1);
    assert_eq!(longitude_to_tile_x(540.0, 0), 2);
}

#[test]
fn test_huge_zoom_saturates_like_zoom_62() {
    assert_eq!(longitude_to_tile_x(0.0, u32::MAX), 1i64 << 61);
    assert_eq!(longitude_to_tile_x(0.0, u32::MAX), longitude_to_tile_x(0.0, 62));
    assert_eq!(longitude_to_tile_x(-180.0, u32::MAX), 0);
}

// ============================================================================
// latitude_to_tile_y tests
// ============================================================================

#[test]
fn test_latitude_reference_values() {
    assert_eq!(latitude_to_tile_y(0.0, 1), Some(1));
    assert_eq!(latitude_to_tile_y(62.0, 4), Some(4));
    assert_eq!(latitude_to_tile_y(45.0, 4), Some(5));
    assert_eq!(latitude_to_tile_y(40.7128, 16), Some(24640));
}

#[test]
fn test_latitude_at_pole_has_no_value() {
    assert_eq!(latitude_to_tile_y(90.0, 5), None);
    assert_eq!(latitude_to_tile_y(-90.0, 5), None);
    assert_eq!(latitude_to_tile_y(120.0, 0), None);
}

#[test]
fn test_latitude_beyond_mercator_edge_uses_edge_rows() {
    assert_eq!(latitude_to_tile_y(89.9, 3), Some(0));
    assert_eq!(latitude_to_tile_y(-89.9, 3), Some(7));
    assert_eq!(latitude_to_tile_y(89.9, 0), Some(0));
}

#[test]
fn test_latitude_huge_zoom_saturates_like_zoom_62() {
    assert_eq!(latitude_to_tile_y(0.0, u32::MAX), Some(1i64 << 61));
    assert_eq!(latitude_to_tile_y(45.0, u32::MAX), latitude_to_tile_y(45.0, 62));
}

#[test]
fn test_latitude_in_range_stays_on_grid() {
    let mut rng = seeded_rng(12);
    let lats = random_latitudes(&mut rng, 1000);
    for z in zoom::LEVELS {
        let n = 1i64 << z;
        for &lat in &lats {
            let y = latitude_to_tile_y(lat, z).expect("latitude inside (-90, 90)");
            assert!((0..n).contains(&y), "lat {} zoom {} -> {}", lat, z, y);
        }
    }
}

#[test]
fn test_tile_y_never_increases_northward() {
    let mut rng = seeded_rng(13);
    let mut lats = random_latitudes(&mut rng, 2000);
    lats.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for z in zoom::LEVELS {
        let rows: Vec<i64> = lats
            .iter()
            .map(|&lat| latitude_to_tile_y(lat, z).unwrap())
            .collect();
        assert!(
            rows.windows(2).all(|w| w[1] <= w[0]),
            "tile-Y increased with latitude at zoom {}",
            z
        );
    }
}

// ============================================================================
// ZoomRange and TileAddress tests
// ============================================================================

#[test]
fn test_zoom_range_accessors() {
    let range = ZoomRange::new(4, 9).unwrap();
    assert_eq!(range.min(), 4);
    assert_eq!(range.max(), 9);
    assert!(ZoomRange::single(MAX_ZOOM).is_ok());
    assert!(ZoomRange::single(MAX_ZOOM + 1).is_err());
}

#[test]
fn test_zoom_range_from_tuple() {
    let range = ZoomRange::try_from((2, 3)).unwrap();
    assert_eq!(<(u32, u32)>::from(range), (2, 3));
    assert!(ZoomRange::try_from((3, 2)).is_err());
}

#[test]
fn test_tile_address_validity() {
    assert!(TileAddress::new(0, 0, 0).is_valid());
    assert!(TileAddress::new(4, 15, 15).is_valid());
    assert!(!TileAddress::new(4, 16, 0).is_valid());
    assert!(!TileAddress::new(4, 0, 16).is_valid());
}
