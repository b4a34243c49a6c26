use std::f64::consts::PI;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
    /// Degrees per UTM zone
    pub const ZD: i32 = 6;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

pub(crate) trait GeoMath {
    fn radians(&self) -> Self;
    fn lon_normalize(&self) -> Self;
}

impl GeoMath for f64 {
    fn radians(&self) -> f64 {
        *self * PI / f64::from(dms::HD)
    }

    /// Wraps a longitude into `[-180, 180)`. Values already in range are
    /// returned untouched so the projection sees the exact input.
    fn lon_normalize(&self) -> f64 {
        let hd = f64::from(dms::HD);

        if (-hd..hd).contains(self) {
            *self
        } else {
            (*self + hd).rem_euclid(f64::from(dms::TD)) - hd
        }
    }
}
