use utmgrid::{to_grid, GeoPoint, GridCoordinate};

struct Reference {
    name: &'static str,
    lat: f64,
    lon: f64,
    zone: &'static str,
    easting: f64,
    northing: f64,
}

// Expected values come from the USGS series with this crate's WGS84
// constants. New York also matches GeographicLib's exact projection to the
// millimeter.
const REFERENCES: &[Reference] = &[
    Reference { name: "Sao Paulo", lat: -23.561414, lon: -46.655881, zone: "23 K", easting: 330_996.583, northing: 7_393_353.264 },
    Reference { name: "Brasilia", lat: -15.793889, lon: -47.882778, zone: "23 L", easting: 191_141.085, northing: 8_251_747.156 },
    Reference { name: "Fortaleza", lat: -3.731862, lon: -38.526670, zone: "24 M", easting: 552_559.438, northing: 9_587_497.138 },
    Reference { name: "New York", lat: 40.748333, lon: -73.985278, zone: "18 T", easting: 585_664.121, northing: 4_511_315.422 },
    Reference { name: "Sydney", lat: -33.8688, lon: 151.2093, zone: "56 H", easting: 334_368.634, northing: 6_250_948.345 },
    Reference { name: "London", lat: 51.5007, lon: -0.1246, zone: "30 U", easting: 699_567.540, northing: 5_709_427.563 },
];

fn assert_close(name: &str, what: &str, got: f64, expected: f64) {
    assert!(
        (got - expected).abs() < 5e-3,
        "{name}: {what} {got} differs from {expected}",
    );
}

#[test]
fn reference_points() {
    for r in REFERENCES {
        let grid = to_grid(r.lat, r.lon).unwrap();

        assert_eq!(grid.zone_label(), r.zone, "{}", r.name);
        assert_close(r.name, "easting", grid.easting(), r.easting);
        assert_close(r.name, "northing", grid.northing(), r.northing);
    }
}

#[test]
fn sao_paulo_display_fields() {
    let grid = to_grid(-23.561414, -46.655881).unwrap();

    assert_eq!(grid.zone(), 23);
    assert_eq!(grid.band(), 'K');
    assert_eq!(grid.easting_label(), "330996.58");
    assert_eq!(grid.northing_label(), "7393353.26");
    assert_eq!(grid.to_string(), "23 K 330996.58 7393353.26");
}

#[test]
fn central_meridian_on_equator() {
    let grid = to_grid(0.0, 3.0).unwrap();

    assert_eq!(grid.zone_label(), "31 N");
    assert_eq!(grid.easting_label(), "500000.00");
    assert_eq!(grid.northing_label(), "0.00");
}

#[test]
fn non_finite_input_is_empty() {
    assert!(to_grid(f64::NAN, -46.0).is_none());
    assert!(to_grid(-23.0, f64::NAN).is_none());
    assert!(to_grid(f64::INFINITY, 0.0).is_none());
    assert!(to_grid(0.0, f64::NEG_INFINITY).is_none());
}

#[test]
fn southern_hemisphere_gets_false_northing() {
    let north = to_grid(0.5, -45.0).unwrap();
    let south = to_grid(-0.5, -45.0).unwrap();

    // Mirror images across the equator, offset by the false northing
    assert!((south.northing() - (10_000_000.0 - north.northing())).abs() < 1e-6);
    assert!((south.easting() - north.easting()).abs() < 1e-6);
}

#[test]
fn antimeridian_stays_in_zone_range() {
    let east = to_grid(10.0, 180.0).unwrap();
    let west = to_grid(10.0, -180.0).unwrap();

    assert_eq!(east.zone(), 1);
    assert_eq!(east, west);
    assert_eq!(to_grid(10.0, 179.999_999).unwrap().zone(), 60);
}

#[test]
fn outside_band_table_still_projects() {
    let grid = to_grid(84.5, 10.0).unwrap();

    assert_eq!(grid.band(), 'Z');
    assert!(!grid.has_band());
    assert_eq!(grid.zone_label(), "32 Z");
    assert!(grid.northing() > 9_000_000.0);

    let grid = to_grid(-80.5, 10.0).unwrap();
    assert_eq!(grid.band(), 'Z');
    assert!(grid.northing() > 1_000_000.0);
}

#[test]
fn geo_point_matches_free_function() {
    let point = GeoPoint::create(-23.561414, -46.655881).unwrap();

    assert_eq!(GridCoordinate::from_geo_point(&point), to_grid(-23.561414, -46.655881).unwrap());
    assert_eq!(point.to_grid(), to_grid(-23.561414, -46.655881).unwrap());
}
