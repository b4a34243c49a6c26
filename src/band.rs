const LATBAND: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Band letter reported for latitudes with no UTM band.
pub const OUT_OF_RANGE_BAND: char = 'Z';

/// Southern edge of band `C`.
pub const MIN_BAND_LATITUDE: i32 = -80;
/// Northern edge of band `X`, which is 12° tall and includes this value.
pub const MAX_BAND_LATITUDE: i32 = 84;

const BAND_HEIGHT: i32 = 8;

/// Returns the latitude band letter for `lat` (degrees).
///
/// Bands are 8° tall and checked from the north down, each covering
/// `[lower, upper)`, except `X` which spans `[72, 84]`. Latitudes with no
/// band, including NaN, map to [`OUT_OF_RANGE_BAND`].
///
/// # Usage
///
/// ```
/// use utmgrid::latitude_band;
///
/// assert_eq!(latitude_band(84.0), 'X');
/// assert_eq!(latitude_band(0.0), 'N');
/// assert_eq!(latitude_band(-0.5), 'M');
/// assert_eq!(latitude_band(-23.561414), 'K');
/// assert_eq!(latitude_band(-80.0), 'C');
/// assert_eq!(latitude_band(-80.1), 'Z');
/// assert_eq!(latitude_band(f64::NAN), 'Z');
/// ```
pub fn latitude_band(lat: f64) -> char {
    if !(f64::from(MIN_BAND_LATITUDE)..=f64::from(MAX_BAND_LATITUDE)).contains(&lat) {
        return OUT_OF_RANGE_BAND;
    }

    // Compare against integral edges rather than dividing, so values just
    // below an edge never round up into the next band.
    LATBAND
        .char_indices()
        .rev()
        .find(|(idx, _)| {
            let lower = MIN_BAND_LATITUDE + BAND_HEIGHT * idx_as_i32(*idx);
            lat >= f64::from(lower)
        })
        .map_or(OUT_OF_RANGE_BAND, |(_, band)| band)
}

/// Whether `band` is one of the 20 UTM latitude band letters.
pub fn is_band_letter(band: char) -> bool {
    LATBAND.contains(band)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn idx_as_i32(idx: usize) -> i32 {
    idx as i32
}
