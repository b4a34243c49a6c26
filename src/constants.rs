// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// First eccentricity squared, eight decimals
pub(crate) const WGS84_E2: f64 = 0.006_694_38;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// Offsets keeping every in-zone coordinate positive
pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING_SOUTH: f64 = 10_000_000.;
