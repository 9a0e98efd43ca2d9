// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The point module contains the `Point` type: a position on the surface of
//! a sphere, with functions to normalise it and find its antipode.
//!
//! A `Point` holds its latitude and longitude as `Angle`s, so it can be built
//! from either `Degrees` or `Radians` without the two ever being mixed.

use angle_sc::{Angle, Degrees, Radians, Validate};
use unit_sphere::{vector, LatLong, Vector3d};

/// A position on the surface of a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The latitude.
    lat: Angle,
    /// The longitude.
    lon: Angle,
}

impl Validate for Point {
    /// Test whether a `Point` is normalised, i.e. -90° <= `latitude` <= 90°.
    fn is_valid(&self) -> bool {
        0.0 <= self.lat.cos().0
    }
}

impl Point {
    /// Construct a `Point` from a latitude and longitude in degrees.
    /// The values are not normalised, see `normalize`.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub fn new(lat: Degrees, lon: Degrees) -> Self {
        Self::from_angles(Angle::from(lat), Angle::from(lon))
    }

    /// Construct a `Point` from a latitude and longitude in radians.
    /// The values are not normalised, see `normalize`.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    #[must_use]
    pub fn from_radians(lat: Radians, lon: Radians) -> Self {
        Self::from_angles(Angle::from(lat), Angle::from(lon))
    }

    /// Construct a `Point` from a latitude and longitude `Angle`.
    #[must_use]
    pub const fn from_angles(lat: Angle, lon: Angle) -> Self {
        Self { lat, lon }
    }

    /// Construct a `Point` from a vector, it need not be a unit vector.
    /// A vector too short to normalise is treated as a unit vector.
    #[must_use]
    pub fn from_vector(point: &Vector3d) -> Self {
        let point = vector::normalise(point).unwrap_or(*point);
        Self::from_angles(vector::latitude(&point), vector::longitude(&point))
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Angle {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Angle {
        self.lon
    }

    /// The normalised latitude and longitude in degrees.
    ///
    /// returns the latitude in [-90, 90] and the longitude in (-180, 180].
    #[must_use]
    pub fn to_degrees(&self) -> (Degrees, Degrees) {
        let point = normalize(self);
        let lon = Degrees::from(point.lon);
        let lon = if lon.0 <= -180.0 { Degrees(180.0) } else { lon };
        (Degrees::from(point.lat), lon)
    }

    /// The normalised latitude and longitude in radians.
    ///
    /// returns the latitude in [-π/2, π/2] and the longitude in (-π, π].
    #[must_use]
    pub fn to_radians(&self) -> (Radians, Radians) {
        let point = normalize(self);
        let lon = Radians::from(point.lon);
        let lon = if lon.0 <= -core::f64::consts::PI {
            Radians(core::f64::consts::PI)
        } else {
            lon
        };
        (Radians::from(point.lat), lon)
    }

    /// The point as a unit vector in Earth Centred Earth Fixed coordinates.
    #[must_use]
    pub fn to_vector(&self) -> Vector3d {
        vector::to_point(self.lat, self.lon)
    }
}

impl From<&LatLong> for Point {
    fn from(lat_long: &LatLong) -> Self {
        Self::new(lat_long.lat(), lat_long.lon())
    }
}

impl From<&Point> for LatLong {
    fn from(point: &Point) -> Self {
        let (lat, lon) = point.to_degrees();
        Self::new(lat, lon)
    }
}

/// Normalise a point so that its latitude is in [-90°, 90°] and its
/// longitude in (-180°, 180°].
///
/// A latitude past a pole is reflected back about the pole and the longitude
/// moved half a turn around, e.g. 100°N 0°E is 80°N 180°E.
/// A `Point` that is already normalised is returned unchanged.
/// * `point` - the point to normalise.
///
/// # Examples
/// ```
/// use spherical_navigation::*;
///
/// let raw = Point::new(Degrees(100.0), Degrees(370.0));
/// assert!(!raw.is_valid());
///
/// let point = normalize(&raw);
/// assert!(point.is_valid());
/// let (lat, lon) = point.to_degrees();
/// assert!(angle_sc::is_within_tolerance(80.0, lat.0, 1e-12));
/// assert!(angle_sc::is_within_tolerance(-170.0, lon.0, 1e-12));
/// ```
#[must_use]
pub fn normalize(point: &Point) -> Point {
    if point.is_valid() {
        *point
    } else {
        Point::from_angles(point.lat.negate_cos(), point.lon.opposite())
    }
}

/// The antipodal point: the point on the opposite side of the sphere.
/// * `point` - the point.
#[must_use]
pub fn opposite_point(point: &Point) -> Point {
    let point = normalize(point);
    Point::from_angles(-point.lat, point.lon.opposite())
}
