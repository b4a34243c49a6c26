//! The location block of a client record: the coordinates as typed or
//! captured, plus the UTM fields derived from them.

use tracing::{debug, trace};

use crate::{
    latlon::{normalize_decimal, parse_degrees},
    utm::{to_grid, GridCoordinate, GridFields},
    Error,
};

/// Decimals kept from a device location fix.
pub const DEVICE_FIX_DECIMALS: usize = 6;

/// Location fields stored on a client record. Latitude and longitude hold
/// the normalized text the user entered; the `utm_*` fields are derived and
/// read-only for the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LocationFields {
    pub latitude: String,
    pub longitude: String,
    pub utm_zone: String,
    pub utm_easting: String,
    pub utm_northing: String,
}

impl LocationFields {
    /// Records a manual coordinate edit.
    ///
    /// Both texts are stored normalized (trimmed, first `,` read as the
    /// decimal point). When both parse, the UTM fields are recomputed.
    /// Otherwise the UTM fields keep the last computed values and the
    /// parse error is returned, since the user is usually mid-edit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for the first value that is not a
    /// finite number. The texts are stored either way.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmgrid::LocationFields;
    ///
    /// let mut fields = LocationFields::default();
    /// fields.apply_coordinates("-23,561414", "-46,655881").unwrap();
    ///
    /// assert_eq!(fields.latitude, "-23.561414");
    /// assert_eq!(fields.utm_zone, "23 K");
    /// assert_eq!(fields.utm_easting, "330996.58");
    /// assert_eq!(fields.utm_northing, "7393353.26");
    ///
    /// // Half-typed longitude keeps the previous UTM fields
    /// assert!(fields.apply_coordinates("-23,561414", "-").is_err());
    /// assert_eq!(fields.longitude, "-");
    /// assert_eq!(fields.utm_zone, "23 K");
    /// ```
    pub fn apply_coordinates(&mut self, lat: &str, lon: &str) -> Result<GridCoordinate, Error> {
        self.latitude = normalize_decimal(lat);
        self.longitude = normalize_decimal(lon);

        let parsed = parse_degrees(&self.latitude)
            .and_then(|lat| parse_degrees(&self.longitude).map(|lon| (lat, lon)));

        let (lat, lon) = match parsed {
            Ok(pair) => pair,
            Err(err) => {
                debug!(latitude = %self.latitude, longitude = %self.longitude, "keeping previous UTM fields: {err}");
                return Err(err);
            }
        };

        let grid = to_grid(lat, lon)
            .ok_or_else(|| Error::InvalidInput(format!("({lat}, {lon}) is not a finite coordinate")))?;
        self.set_grid(&GridFields::from(&grid));

        trace!(zone = %self.utm_zone, easting = %self.utm_easting, northing = %self.utm_northing, "recomputed UTM fields");
        Ok(grid)
    }

    /// Records a fix from the device location service. Values are kept to
    /// six decimals, as the service reports them, before being applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the fix is NaN or infinite.
    ///
    /// ```
    /// use utmgrid::LocationFields;
    ///
    /// let mut fields = LocationFields::default();
    /// fields.apply_device_fix(-15.7938891234, -47.8827779876).unwrap();
    ///
    /// assert_eq!(fields.latitude, "-15.793889");
    /// assert_eq!(fields.longitude, "-47.882778");
    /// assert_eq!(fields.utm_zone, "23 L");
    /// ```
    pub fn apply_device_fix(&mut self, lat: f64, lon: f64) -> Result<GridCoordinate, Error> {
        let lat = format!("{lat:.prec$}", prec = DEVICE_FIX_DECIMALS);
        let lon = format!("{lon:.prec$}", prec = DEVICE_FIX_DECIMALS);

        self.apply_coordinates(&lat, &lon)
    }

    /// Empties every field, coordinates and UTM alike. Used when the
    /// address changes and a new lookup is pending.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-derives the grid coordinate from the stored texts.
    pub fn grid(&self) -> Option<GridCoordinate> {
        let lat = parse_degrees(&self.latitude).ok()?;
        let lon = parse_degrees(&self.longitude).ok()?;

        to_grid(lat, lon)
    }

    /// The UTM fields as a [`GridFields`].
    pub fn grid_fields(&self) -> GridFields {
        GridFields {
            zone: self.utm_zone.clone(),
            easting: self.utm_easting.clone(),
            northing: self.utm_northing.clone(),
        }
    }

    fn set_grid(&mut self, fields: &GridFields) {
        self.utm_zone.clone_from(&fields.zone);
        self.utm_easting.clone_from(&fields.easting);
        self.utm_northing.clone_from(&fields.northing);
    }
}
