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

//! The `great_circle` module contains functions for calculating the
//! distances, bearings and points of great circle paths between `Point`s.
//!
//! All angular distances are in `Radians` on a unit sphere, see `Sphere` for
//! the conversions to and from `Metres`.
//!
//! The formulae are based on Chris Veness's
//! [Movable Type Scripts](https://www.movable-type.co.uk/scripts/latlong.html)
//! and Ed Williams's [Aviation Formulary](https://edwilliams.org/avform.htm).

use crate::error::{Error, Result};
use crate::point::{normalize, Point};
use angle_sc::{Angle, Degrees, Radians};
use unit_sphere::great_circle::{self, MIN_VALUE};
use unit_sphere::vector::{self, MIN_SQ_DISTANCE};

/// The minimum sine of the angle between two great circles for them to be
/// distinct.
pub const MIN_SIN_ANGLE: f64 = 16384.0 * f64::EPSILON;

/// The default fraction along a path for `intermediate_point`: half way.
pub const DEFAULT_FRACTION: f64 = 0.5;

/// Calculate the great circle angular distance between a pair of points
/// using the haversine formula.
/// * `a`, `b` - the start and finish points.
///
/// returns the angular distance in `Radians`, in [0, π].
#[must_use]
pub fn angular_distance(a: &Point, b: &Point) -> Radians {
    let a = normalize(a);
    let b = normalize(b);
    great_circle::calculate_haversine_distance(a.lat(), b.lat(), b.lon() - a.lon())
}

/// Calculate the initial bearing of the great circle path from `a` to `b`,
/// clockwise from true North.
///
/// The bearing is undefined if the points are coincident or antipodal,
/// in which case it is due North, i.e. zero.
/// From a pole, the bearing is relative to the meridian of the pole's
/// longitude.
/// * `a`, `b` - the start and finish points.
///
/// returns the initial bearing as an `Angle`, see `compass_degrees`.
#[must_use]
pub fn bearing(a: &Point, b: &Point) -> Angle {
    let a = normalize(a);
    let b = normalize(b);

    let delta_lon = b.lon() - a.lon();
    if a.to_vector().cross(&b.to_vector()).norm_squared() < MIN_SQ_DISTANCE {
        Angle::default()
    } else if a.lat().cos().0 < MIN_VALUE {
        if 0.0 < a.lat().sin().0 {
            Angle::default().opposite() - delta_lon
        } else {
            delta_lon
        }
    } else {
        great_circle::calculate_gc_azimuth(a.lat(), b.lat(), delta_lon)
    }
}

/// Calculate the final bearing of the great circle path from `a` to `b`,
/// i.e. the reverse of the initial bearing from `b` to `a`.
/// * `a`, `b` - the start and finish points.
#[must_use]
pub fn final_bearing(a: &Point, b: &Point) -> Angle {
    bearing(b, a).opposite()
}

/// Convert a bearing to compass degrees.
/// * `bearing` - the bearing.
///
/// returns the bearing in `Degrees`, in [0, 360).
#[must_use]
pub fn compass_degrees(bearing: Angle) -> Degrees {
    let degrees = Degrees::from(bearing).0;
    let degrees = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };
    Degrees(if 360.0 <= degrees { 0.0 } else { degrees })
}

/// Calculate the point at an angular distance along a great circle from
/// a start point on an initial bearing, the "direct" problem.
/// * `start` - the start point.
/// * `arc_length` - the angular distance from the start point.
/// * `bearing` - the initial bearing, clockwise from true North.
///
/// returns the normalised destination point.
#[must_use]
pub fn arc_destination(start: &Point, arc_length: Radians, bearing: Angle) -> Point {
    let start = normalize(start);
    if libm::fabs(arc_length.0) < MIN_VALUE {
        start
    } else {
        let direction = vector::calculate_direction(start.lat(), start.lon(), bearing);
        Point::from_vector(&vector::position(
            &start.to_vector(),
            &direction,
            Angle::from(arc_length),
        ))
    }
}

/// Calculate the point at a fraction along the great circle path between a
/// pair of points, by spherical linear interpolation of their vectors.
///
/// `fraction` 0.0 is `a` and 1.0 is `b`; values outside [0, 1] extrapolate
/// along the great circle. Coincident points return `a`.
/// Antipodal points have no unique path between them, so the path follows
/// the conventional (due North) `bearing`.
/// * `a`, `b` - the start and finish points.
/// * `fraction` - the fraction of the path, see `DEFAULT_FRACTION`.
///
/// returns the normalised intermediate point.
#[allow(clippy::float_cmp)]
#[must_use]
pub fn intermediate_point(a: &Point, b: &Point, fraction: f64) -> Point {
    let a = normalize(a);
    let b = normalize(b);
    if fraction == 0.0 {
        return a;
    }
    if fraction == 1.0 {
        return b;
    }

    let arc_length = angular_distance(&a, &b);
    if arc_length.0 < MIN_VALUE {
        return a;
    }

    let sin_arc_length = libm::sin(arc_length.0);
    if sin_arc_length < MIN_VALUE {
        arc_destination(&a, Radians(fraction * arc_length.0), bearing(&a, &b))
    } else {
        let weight_a = libm::sin((1.0 - fraction) * arc_length.0) / sin_arc_length;
        let weight_b = libm::sin(fraction * arc_length.0) / sin_arc_length;
        Point::from_vector(&(weight_a * a.to_vector() + weight_b * b.to_vector()))
    }
}

/// Calculate the point half way along the great circle path between a pair
/// of points.
/// * `a`, `b` - the start and finish points.
///
/// returns the normalised mid point.
#[must_use]
pub fn midpoint(a: &Point, b: &Point) -> Point {
    intermediate_point(a, b, DEFAULT_FRACTION)
}

/// Calculate the intersection point of two great circles: one from point
/// `a` on `bearing_a` and the other from point `b` on `bearing_b`.
///
/// It solves the spherical triangle between `a`, `b` and the intersection
/// point, see [Aviation Formulary](https://edwilliams.org/avform.htm#Intersection).
///
/// If `a` and `b` are the same point, it is the intersection. If they are
/// antipodal, `a` is returned unless the courses lie on the same great circle.
/// If the course from one point passes through the other point, then the
/// other point is the intersection.
/// * `a`, `b` - the start points.
/// * `bearing_a`, `bearing_b` - the bearings from `a` and `b` to the
///   intersection point.
///
/// returns the normalised intersection point ahead of `a`.
///
/// # Errors
///
/// `Error::CoincidentGreatCircles` if both courses lie along the great circle
/// through `a` and `b`.
/// `Error::AmbiguousIntersection` if the courses diverge either side of the
/// great circle through `a` and `b`.
///
/// # Examples
/// ```
/// use spherical_navigation::*;
/// use angle_sc::is_within_tolerance;
///
/// let a = Point::new(Degrees(51.8853), Degrees(0.2545));
/// let b = Point::new(Degrees(49.0034), Degrees(2.5735));
/// let c = intersection_point(
///     &a,
///     &b,
///     Angle::from(Degrees(108.547)),
///     Angle::from(Degrees(32.435)),
/// )
/// .unwrap();
///
/// let (lat, lon) = c.to_degrees();
/// assert!(is_within_tolerance(50.9078, lat.0, 1e-4));
/// assert!(is_within_tolerance(4.5084, lon.0, 1e-4));
/// ```
pub fn intersection_point(
    a: &Point,
    b: &Point,
    bearing_a: Angle,
    bearing_b: Angle,
) -> Result<Point> {
    let a = normalize(a);
    let b = normalize(b);

    let arc_length = angular_distance(&a, &b);
    if arc_length.0 < MIN_VALUE {
        return Ok(a);
    }

    let sigma = Angle::from(arc_length);
    if sigma.sin().0 < MIN_SIN_ANGLE {
        // antipodal: every great circle through a also passes through b
        let pole_a = vector::calculate_pole(a.lat(), a.lon(), bearing_a);
        let pole_b = vector::calculate_pole(b.lat(), b.lon(), bearing_b);
        return if pole_a.cross(&pole_b).norm_squared() < MIN_SIN_ANGLE * MIN_SIN_ANGLE {
            Err(Error::CoincidentGreatCircles)
        } else {
            Ok(a)
        };
    }

    // The angles of the spherical triangle at a and b
    let alpha_a = bearing_a - bearing(&a, &b);
    let alpha_b = bearing(&b, &a) - bearing_b;
    let sin_alpha_a = alpha_a.sin().0;
    let sin_alpha_b = alpha_b.sin().0;

    match (
        libm::fabs(sin_alpha_a) < MIN_SIN_ANGLE,
        libm::fabs(sin_alpha_b) < MIN_SIN_ANGLE,
    ) {
        (true, true) => Err(Error::CoincidentGreatCircles),
        (true, false) => Ok(b),
        (false, true) => Ok(a),
        (false, false) => {
            if sin_alpha_a * sin_alpha_b < 0.0 {
                Err(Error::AmbiguousIntersection)
            } else {
                let cos_alpha_c = sin_alpha_a * sin_alpha_b * sigma.cos().0
                    - alpha_a.cos().0 * alpha_b.cos().0;
                let arc_length_a = libm::atan2(
                    sigma.sin().0 * sin_alpha_a * sin_alpha_b,
                    alpha_b.cos().0 + alpha_a.cos().0 * cos_alpha_c,
                );
                Ok(arc_destination(&a, Radians(arc_length_a), bearing_a))
            }
        }
    }
}
