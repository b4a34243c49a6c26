use crate::{utility::{polyval, GeoMath}, constants::{WGS84_A, WGS84_E2, UTM_K0}};

// ================================
// Transverse Mercator Constants
// ================================

// Meridional arc coefficients, each a polynomial in e2 of order 3
const M0_COEFF: [f64; 4] = [-5. / 256., -3. / 64., -1. / 4., 1.];
const M2_COEFF: [f64; 4] = [45. / 1024., 3. / 32., 3. / 8., 0.];
const M4_COEFF: [f64; 4] = [45. / 1024., 15. / 256., 0., 0.];
const M6_COEFF: [f64; 4] = [35. / 3072., 0., 0., 0.];

/// Forward transverse Mercator on an ellipsoid, using the USGS series
/// truncated at `A^6` (Snyder, *Map Projections: A Working Manual*, eq. 8-9
/// through 8-13). Good to well under a meter inside a 6° zone.
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e2: f64,
    // Second eccentricity squared
    ep2: f64,
    m0: f64,
    m2: f64,
    m4: f64,
    m6: f64,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        let e2 = WGS84_E2;

        Self {
            a: WGS84_A,
            k0: UTM_K0,
            e2,
            ep2: e2 / (1. - e2),
            m0: polyval(&M0_COEFF, e2),
            m2: polyval(&M2_COEFF, e2),
            m4: polyval(&M4_COEFF, e2),
            m6: polyval(&M6_COEFF, e2),
        }
    }

    /// Distance along the central meridian from the equator to latitude
    /// `phi` (radians).
    pub fn meridional_arc(&self, phi: f64) -> f64 {
        self.a * (
            self.m0 * phi
            - self.m2 * (2. * phi).sin()
            + self.m4 * (4. * phi).sin()
            - self.m6 * (6. * phi).sin()
        )
    }

    /// Projects `lat`/`lon` (degrees) onto the plane tangent along `lon0`.
    /// Returns `(x, y)` in meters with no false easting or northing applied.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat.radians();
        let (sphi, cphi) = phi.sin_cos();
        let tphi = phi.tan();

        // Radius of curvature in the prime vertical
        let nu = self.a / (1. - self.e2 * sphi * sphi).sqrt();
        let t = tphi * tphi;
        let c = self.ep2 * cphi * cphi;
        let a = cphi * (lon.radians() - lon0.radians());
        let m = self.meridional_arc(phi);

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = self.k0 * nu * (
            a
            + (1. - t + c) * a3 / 6.
            + (5. - 18. * t + t * t + 72. * c - 58. * self.ep2) * a5 / 120.
        );

        let y = self.k0 * (
            m + nu * tphi * (
                a2 / 2.
                + (5. - t + 9. * c + 4. * c * c) * a4 / 24.
                + (61. - 58. * t + t * t + 600. * c - 330. * self.ep2) * a6 / 720.
            )
        );

        (x, y)
    }
}
