use std::fmt::Display;

use crate::{
    band::{is_band_letter, latitude_band},
    constants::{FALSE_EASTING, FALSE_NORTHING_SOUTH},
    latlon::GeoPoint,
    projections::transverse_mercator::TransverseMercator,
    utility::{dms, GeoMath},
    ThisOrThat,
};

pub mod zonespec {
    pub const MINUTMZONE: i32 = 1;
    pub const MAXUTMZONE: i32 = 60;
}

/// A WGS84 point projected onto its
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// zone.
///
/// The zone is picked from longitude alone in regular 6° strips; the
/// Norway and Svalbard exceptions are not applied, and latitudes outside
/// the band table are still projected with the band set to
/// [`crate::band::OUT_OF_RANGE_BAND`].
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoordinate {
    pub(crate) zone: i32,
    pub(crate) band: char,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl GridCoordinate {
    /// Projects a validated [`GeoPoint`].
    ///
    /// # Usage
    ///
    /// ```
    /// use utmgrid::{GeoPoint, GridCoordinate};
    ///
    /// let coord = GeoPoint::create(40.748333, -73.985278).unwrap();
    /// let grid = GridCoordinate::from_geo_point(&coord);
    ///
    /// assert_eq!(grid.zone(), 18);
    /// assert_eq!(grid.band(), 'T');
    /// assert!((grid.easting() - 585_664.12).abs() < 0.01);
    /// assert!((grid.northing() - 4_511_315.42).abs() < 0.01);
    /// ```
    pub fn from_geo_point(value: &GeoPoint) -> GridCoordinate {
        project(value.latitude, value.longitude)
    }

    /// UTM zone number in `[1, 60]`.
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Latitude band letter, or `'Z'` outside the band table.
    pub fn band(&self) -> char {
        self.band
    }

    /// Easting in meters, false easting included.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing in meters, false northing included south of the equator.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Whether the band letter is a real UTM band.
    pub fn has_band(&self) -> bool {
        is_band_letter(self.band)
    }

    /// Zone designator as shown on the client record, e.g. `"23 K"`.
    pub fn zone_label(&self) -> String {
        format!("{} {}", self.zone, self.band)
    }

    /// Easting rounded to centimeters, e.g. `"330996.58"`.
    pub fn easting_label(&self) -> String {
        format_meters(self.easting)
    }

    /// Northing rounded to centimeters, e.g. `"7393353.26"`.
    pub fn northing_label(&self) -> String {
        format_meters(self.northing)
    }
}

/// Converts a latitude/longitude pair (degrees) to UTM.
///
/// Returns `None` when either value is NaN or infinite, so callers can show
/// "not available yet" instead of a computed zero. Any finite input is
/// projected; longitudes outside `[-180, 180)` are wrapped first.
///
/// # Usage
///
/// ```
/// use utmgrid::to_grid;
///
/// let grid = to_grid(-23.561414, -46.655881).unwrap();
///
/// assert_eq!(grid.zone_label(), "23 K");
/// assert_eq!(grid.easting_label(), "330996.58");
/// assert_eq!(grid.northing_label(), "7393353.26");
///
/// assert!(to_grid(f64::NAN, -46.0).is_none());
/// assert!(to_grid(-23.0, f64::NAN).is_none());
/// ```
pub fn to_grid(lat: f64, lon: f64) -> Option<GridCoordinate> {
    if lat.is_finite() && lon.is_finite() {
        Some(project(lat, lon))
    } else {
        None
    }
}

/// Zone number for a longitude in `[-180, 180)`.
pub fn zone_number(lon: f64) -> i32 {
    let zd = f64::from(dms::ZD);
    #[allow(clippy::cast_possible_truncation)]
    let zone = ((lon + f64::from(dms::HD)) / zd).floor() as i32 + 1;

    zone.clamp(zonespec::MINUTMZONE, zonespec::MAXUTMZONE)
}

pub(crate) fn central_meridian(zone: i32) -> f64 {
    f64::from((zone - 1) * dms::ZD - dms::HD + dms::ZD / 2)
}

fn project(lat: f64, lon: f64) -> GridCoordinate {
    let lon = lon.lon_normalize();
    let zone = zone_number(lon);
    let lon0 = central_meridian(zone);

    let (mut x, mut y) = TransverseMercator::utm().from_latlon(lon0, lat, lon);

    x += FALSE_EASTING;
    y += (lat < 0.).ternary(FALSE_NORTHING_SOUTH, 0.);

    GridCoordinate {
        zone,
        band: latitude_band(lat),
        easting: x,
        northing: y,
    }
}

fn format_meters(value: f64) -> String {
    let out = format!("{value:.2}");
    // Anything in (-0.005, 0] rounds to a signed zero
    if out == "-0.00" {
        "0.00".to_string()
    } else {
        out
    }
}

/// Display form of a [`GridCoordinate`] as carried on a client record.
/// All three fields are empty when no coordinate is available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridFields {
    pub zone: String,
    pub easting: String,
    pub northing: String,
}

impl GridFields {
    pub fn is_empty(&self) -> bool {
        self.zone.is_empty() && self.easting.is_empty() && self.northing.is_empty()
    }
}

impl From<&GridCoordinate> for GridFields {
    fn from(value: &GridCoordinate) -> Self {
        Self {
            zone: value.zone_label(),
            easting: value.easting_label(),
            northing: value.northing_label(),
        }
    }
}

impl From<Option<GridCoordinate>> for GridFields {
    /// ```
    /// use utmgrid::{to_grid, GridFields};
    ///
    /// assert!(GridFields::from(to_grid(f64::NAN, 0.0)).is_empty());
    /// assert_eq!(GridFields::from(to_grid(0.0, 3.0)).zone, "31 N");
    /// ```
    fn from(value: Option<GridCoordinate>) -> Self {
        value.as_ref().map(GridFields::from).unwrap_or_default()
    }
}

impl Display for GridCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.zone,
            self.band,
            self.easting_label(),
            self.northing_label(),
        )
    }
}
