use proptest::prelude::*;
use proptest::test_runner::Config;
use utmgrid::{to_grid, utm::zone_number};

fn has_two_decimals(label: &str) -> bool {
    match label.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty() && frac.len() == 2 && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn conversion_is_deterministic(lat in -90.0_f64..=90.0, lon in -180.0_f64..180.0) {
        prop_assert_eq!(to_grid(lat, lon), to_grid(lat, lon));
    }

    #[test]
    fn zone_is_in_range(lon in -180.0_f64..180.0) {
        let zone = zone_number(lon);
        prop_assert!((1..=60).contains(&zone));
        prop_assert_eq!(to_grid(0.0, lon).unwrap().zone(), zone);
    }

    #[test]
    fn southern_northing_carries_offset(lat in -80.0_f64..-0.001, lon in -180.0_f64..180.0) {
        let grid = to_grid(lat, lon).unwrap();
        // The unprojected northing is negative south of the equator
        prop_assert!(grid.northing() < 10_000_000.0);
        prop_assert!(grid.northing() > 1_000_000.0);
    }

    #[test]
    fn labels_carry_two_decimals(lat in -80.0_f64..84.0, lon in -180.0_f64..180.0) {
        let grid = to_grid(lat, lon).unwrap();
        prop_assert!(has_two_decimals(&grid.easting_label()), "{}", grid.easting_label());
        prop_assert!(has_two_decimals(&grid.northing_label()), "{}", grid.northing_label());
    }

    #[test]
    fn easting_stays_near_central_meridian(lat in -80.0_f64..84.0, lon in -180.0_f64..180.0) {
        let grid = to_grid(lat, lon).unwrap();
        prop_assert!((160_000.0..=840_000.0).contains(&grid.easting()), "{}", grid.easting());
    }
}
