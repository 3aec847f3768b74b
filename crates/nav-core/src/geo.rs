//! Geographic coordinate type and the geometry kernel.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Playback interpolates
//! sub-metre steps along road-snapped segments, so single precision would
//! visibly stair-step the simulated marker on short urban segments.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and zero iff both points are equal.  Accurate to well
    /// under a metre at city scale, which is all route playback needs.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Initial great-circle bearing from `self` toward `other`, in degrees
    /// clockwise from true north, normalized to `[0, 360)`.
    ///
    /// Mathematically undefined for identical points; this returns `0.0`
    /// in that case.  Stateful callers (playback, live tracking) skip the
    /// recompute entirely and keep their previous heading instead.
    pub fn bearing_deg(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let deg = y.atan2(x).to_degrees();
        (deg + 360.0) % 360.0
    }

    /// Linear interpolation toward `other` by fraction `t` in `[0, 1]`.
    ///
    /// Latitude and longitude blend independently — fine for the short
    /// segment lengths of consecutive road-snapped points, where the
    /// spherical correction is far below GPS noise.
    #[inline]
    pub fn interpolate(self, other: Coordinate, t: f64) -> Coordinate {
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
