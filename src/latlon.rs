use std::fmt::Display;

use crate::{Error, ParseCoord, utility::dms, utm::GridCoordinate};

/// Representation of a WGS84 latitude/longitude point, in degrees. Can be
/// projected to a [`GridCoordinate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon", alias = "lng"))]
    pub(crate) longitude: f64,
}

impl GeoPoint {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> GeoPoint {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Both must be finite
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either value is NaN or infinite.
    /// Returns [`Error::InvalidCoord`] if either value is out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmgrid::GeoPoint;
    ///
    /// let coord = GeoPoint::create(-23.561414, -46.655881).unwrap();
    ///
    /// assert_eq!(coord.latitude(), -23.561414);
    /// assert_eq!(coord.longitude(), -46.655881);
    ///
    /// assert!(GeoPoint::create(100.0, 0.0).is_err());
    /// assert!(GeoPoint::create(0.0, -200.0).is_err());
    /// assert!(GeoPoint::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<GeoPoint, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if !lat.is_finite() || !lon.is_finite() {
            Err(Error::InvalidInput(format!("Coordinate ({lat}, {lon}) is not a finite number.")))
        } else if !(-qd..=qd).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-hd..=hd).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(GeoPoint::new(lat, lon))
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the point is north of the equator. The equator
    /// itself counts as north.
    ///
    /// ```
    /// use utmgrid::GeoPoint;
    ///
    /// assert!(GeoPoint::create(0.0, 10.0).unwrap().is_north());
    /// assert!(!GeoPoint::create(-0.000001, 10.0).unwrap().is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.
    }

    /// Projects the point onto its UTM zone. See [`crate::to_grid`].
    pub fn to_grid(&self) -> GridCoordinate {
        GridCoordinate::from_geo_point(self)
    }
}

/// Parses one decimal degree value as typed into a form field. Surrounding
/// whitespace is ignored and the first `,` is read as the decimal
/// separator.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the text is not a finite number.
///
/// # Usage
///
/// ```
/// use utmgrid::parse_degrees;
///
/// assert_eq!(parse_degrees(" -23,561414 ").unwrap(), -23.561414);
/// assert_eq!(parse_degrees("-46.655881").unwrap(), -46.655881);
/// assert!(parse_degrees("").is_err());
/// assert!(parse_degrees("abc").is_err());
/// assert!(parse_degrees("NaN").is_err());
/// ```
pub fn parse_degrees(value: &str) -> Result<f64, Error> {
    let normalized = normalize_decimal(value);

    match normalized.parse::<f64>() {
        Ok(degrees) if degrees.is_finite() => Ok(degrees),
        _ => Err(Error::InvalidInput(format!("'{}' is not a decimal number", value.trim()))),
    }
}

/// Trims and swaps the first `,` for `.`, leaving anything else as typed.
pub fn normalize_decimal(value: &str) -> String {
    value.trim().replacen(',', ".", 1)
}

impl ParseCoord for GeoPoint {
    /// Parses `"<lat> <lon>"` or `"<lat>;<lon>"`. Each value goes through
    /// [`parse_degrees`], so `"-23,56;-46,65"` is accepted.
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let pieces: Vec<&str> = if value.contains(';') {
            value.split(';').collect()
        } else {
            value.split_whitespace().collect()
        };

        match pieces.as_slice() {
            [lat, lon] => GeoPoint::create(parse_degrees(lat)?, parse_degrees(lon)?),
            _ => Err(Error::InvalidInput(format!(
                "Expected a latitude and a longitude, found {} value(s) in '{}'",
                pieces.len(),
                value.trim(),
            ))),
        }
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
