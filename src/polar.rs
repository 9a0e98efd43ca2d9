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

//! The `polar` module contains functions for finding where a great circle
//! path comes closest to a pole.
//!
//! By Clairaut's relation, the product of the cosine of the latitude and the
//! sine of the bearing is constant along a great circle. So the maximum
//! latitude of a great circle is where its bearing is due East or West.

use crate::great_circle::MIN_SIN_ANGLE;
use crate::point::{normalize, Point};
use angle_sc::Angle;
use unit_sphere::great_circle::MIN_VALUE;
use unit_sphere::{vector, Vector3d};

/// Calculate the maximum latitude of a great circle path using Clairaut's
/// relation: cos(max latitude) = |cos(latitude) * sin(bearing)|.
/// The minimum latitude of the path is `-max_latitude`, see `min_latitude`.
/// * `latitude` - a latitude on the path.
/// * `bearing` - the bearing of the path at `latitude`.
///
/// returns the maximum latitude, in [0°, 90°].
///
/// # Examples
/// ```
/// use spherical_navigation::*;
/// use angle_sc::is_within_tolerance;
///
/// // due North from the Equator reaches the North pole
/// let result = max_latitude(Angle::default(), Angle::default());
/// assert!(is_within_tolerance(90.0, Degrees::from(result).0, 1e-12));
/// ```
#[must_use]
pub fn max_latitude(latitude: Angle, bearing: Angle) -> Angle {
    let cos_max_lat = libm::fabs(latitude.cos().0 * bearing.sin().0).min(1.0);
    Angle::from_y_x(
        libm::sqrt((1.0 - cos_max_lat) * (1.0 + cos_max_lat)),
        cos_max_lat,
    )
}

/// Calculate the minimum latitude of a great circle path.
/// * `latitude` - a latitude on the path.
/// * `bearing` - the bearing of the path at `latitude`.
///
/// returns the minimum latitude, in [-90°, 0°].
#[must_use]
pub fn min_latitude(latitude: Angle, bearing: Angle) -> Angle {
    -max_latitude(latitude, bearing)
}

/// Calculate the point where a great circle path comes closest to the next
/// pole that it heads towards.
///
/// A path heading North comes closest to the North pole and a path heading
/// South to the South pole. A path heading due East or West from `start` is
/// at its closest point to the pole of `start`'s hemisphere.
/// A path along the Equator is equally close to both poles everywhere, so
/// `start` is returned, and a path along a meridian reaches the pole.
/// Every path from a pole leads to the opposite pole.
/// * `start` - the start point of the path.
/// * `bearing` - the initial bearing of the path.
///
/// returns the normalised point of the path closest to the pole.
#[must_use]
pub fn closest_point_to_pole(start: &Point, bearing: Angle) -> Point {
    let start = normalize(start);
    if start.lat().cos().0 < MIN_VALUE {
        return Point::from_angles(-start.lat(), start.lon());
    }

    let max_lat = max_latitude(start.lat(), bearing);

    let northbound = if libm::fabs(bearing.cos().0) < MIN_SIN_ANGLE {
        0.0 <= start.lat().sin().0
    } else {
        0.0 < bearing.cos().0
    };

    if max_lat.cos().0 < MIN_VALUE {
        // a meridional path
        let pole = Angle::from_y_x(1.0, 0.0);
        Point::from_angles(if northbound { pole } else { -pole }, start.lon())
    } else if max_lat.sin().0 < MIN_VALUE {
        // an equatorial path
        start
    } else {
        // project the North pole onto the plane of the great circle
        let pole = vector::calculate_pole(start.lat(), start.lon(), bearing);
        let vertex = Vector3d::new(0.0, 0.0, 1.0) - pole.z * pole;
        let lon = Angle::from_y_x(vertex.y, vertex.x);
        if northbound {
            Point::from_angles(max_lat, lon)
        } else {
            Point::from_angles(-max_lat, lon.opposite())
        }
    }
}
