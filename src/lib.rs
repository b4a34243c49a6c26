#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! WGS84 latitude/longitude to UTM conversion for the location block of
//! client records.
//!
//! ```
//! use utmgrid::{to_grid, GridFields};
//!
//! let fields = GridFields::from(to_grid(-23.561414, -46.655881));
//!
//! assert_eq!(fields.zone, "23 K");
//! assert_eq!(fields.easting, "330996.58");
//! assert_eq!(fields.northing, "7393353.26");
//! ```

use thiserror::Error;

pub mod band;
pub mod latlon;
pub mod location;
pub mod utm;

pub use band::latitude_band;
pub use latlon::{parse_degrees, GeoPoint};
pub use location::LocationFields;
pub use utm::{to_grid, GridCoordinate, GridFields};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;
pub(crate) mod utility;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Input is not a valid number: {0}")]
    InvalidInput(String),
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
}

pub trait ParseCoord {
    /// # Errors
    ///
    /// Returns an [`Error`] when `value` does not describe a valid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Forwards the error from [`ParseCoord::parse_coord`].
///
/// ```
/// use utmgrid::GeoPoint;
///
/// let point: GeoPoint = utmgrid::from_str("-23,561414; -46,655881").unwrap();
/// assert_eq!(point.to_grid().zone(), 23);
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
