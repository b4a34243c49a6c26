#![cfg(feature = "serde")]

use utmgrid::{GeoPoint, LocationFields};

#[test]
fn location_fields_use_record_field_names() {
    let mut fields = LocationFields::default();
    fields.apply_coordinates("-23.561414", "-46.655881").unwrap();

    let json = serde_json::to_value(&fields).unwrap();

    assert_eq!(json["latitude"], "-23.561414");
    assert_eq!(json["utmZone"], "23 K");
    assert_eq!(json["utmEasting"], "330996.58");
    assert_eq!(json["utmNorthing"], "7393353.26");
}

#[test]
fn location_fields_tolerate_missing_keys() {
    let fields: LocationFields = serde_json::from_str(r#"{"latitude": "-3.73", "longitude": "-38.52"}"#).unwrap();

    assert_eq!(fields.longitude, "-38.52");
    assert!(fields.grid_fields().is_empty());
    assert_eq!(fields.grid().unwrap().zone_label(), "24 M");
}

#[test]
fn geo_point_accepts_short_keys() {
    let point: GeoPoint = serde_json::from_str(r#"{"lat": -15.793889, "lng": -47.882778}"#).unwrap();

    assert_eq!(point.latitude(), -15.793889);
    assert_eq!(point.to_grid().zone_label(), "23 L");
}
