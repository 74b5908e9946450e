//! Geographic coordinate type and flat buffer views.
//!
//! `GeoPoint` uses `f64` latitude/longitude and is `#[repr(C)]`, so a slice
//! of points has the same layout as a slice of `f64` pairs:
//! `lat0, lon0, lat1, lon1, …`.  JavaScript reads that layout straight out of
//! linear memory as a `Float64Array`.

use bytemuck::{Pod, Zeroable};

/// A WGS-84 geographic coordinate.  No range validation is performed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Shift by `d_lat` / `d_lon` degrees in place.
    #[inline]
    pub fn nudge(&mut self, d_lat: f64, d_lon: f64) {
        self.lat += d_lat;
        self.lon += d_lon;
    }

    /// Axis-aligned check: both coordinates within `half_deg` of `center`.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Reinterpret a point slice as `2 * points.len()` interleaved `f64`s.
#[inline]
pub fn as_coords(points: &[GeoPoint]) -> &[f64] {
    bytemuck::cast_slice(points)
}

/// Mutable counterpart of [`as_coords`].
#[inline]
pub fn as_coords_mut(points: &mut [GeoPoint]) -> &mut [f64] {
    bytemuck::cast_slice_mut(points)
}
