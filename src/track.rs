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

//! The `track` module contains functions for calculating the along track and
//! cross track distances of a point relative to a great circle path.
//!
//! The cross track distance is the perpendicular distance of the point from
//! the great circle path: positive if the point is to the right of the path
//! and negative if it is to the left.
//!
//! The along track distance is the distance from the start of the path to
//! the point on the path abeam the point.

use crate::great_circle::bearing;
use crate::point::{normalize, Point};
use angle_sc::{Angle, Radians};
use unit_sphere::great_circle::MIN_VALUE;
use unit_sphere::vector;

/// Calculate the cross track distance of a point from the great circle path
/// from `a`, given the angular distance and bearings from `a`.
/// * `arc_length_ap` - the angular distance from `a` to the point.
/// * `bearing_ab` - the bearing of the path at `a`.
/// * `bearing_ap` - the bearing from `a` to the point.
///
/// returns the cross track distance of the point in `Radians`,
/// positive if the point is to the right of the path.
#[must_use]
pub fn calculate_xtd(arc_length_ap: Radians, bearing_ab: Angle, bearing_ap: Angle) -> Radians {
    let sin_xtd = libm::sin(arc_length_ap.0) * (bearing_ap - bearing_ab).sin().0;
    Radians(libm::asin(sin_xtd.clamp(-1.0, 1.0)))
}

/// Calculate the along track distance of a point on the great circle path
/// from `a`, given the angular distance from `a` and the cross track distance.
///
/// The point on the path abeam the point is undefined if the point is at a
/// pole of the great circle, in which case the along track distance is zero.
/// * `arc_length_ap` - the angular distance from `a` to the point.
/// * `xtd` - the cross track distance of the point.
///
/// returns the (unsigned) along track distance in `Radians`.
#[must_use]
pub fn calculate_atd(arc_length_ap: Radians, xtd: Radians) -> Radians {
    let cos_xtd = libm::cos(xtd.0);
    if cos_xtd < MIN_VALUE {
        Radians(0.0)
    } else {
        let cos_atd = libm::cos(arc_length_ap.0) / cos_xtd;
        Radians(libm::acos(cos_atd.clamp(-1.0, 1.0)))
    }
}

/// Calculate the along track and cross track distances of point `p`
/// relative to the great circle path from `a` on `bearing_ab`.
///
/// returns the unsigned along track distance and the cross track distance,
/// positive to the right.
#[must_use]
fn calculate_atd_and_xtd(a: &Point, bearing_ab: Angle, p: &Point) -> (Radians, Radians) {
    let a = normalize(a);
    let p = normalize(p);

    // the right hand pole lies to the left of the path
    let pole = vector::calculate_pole(a.lat(), a.lon(), bearing_ab);
    let (atd, xtd) = vector::calculate_atd_and_xtd(&a.to_vector(), &pole, &p.to_vector());
    (Radians(libm::fabs(atd.0)), Radians(-xtd.0))
}

/// Calculate the cross track distance of point `p` from the great circle
/// path from `a` on `bearing_ab`.
/// * `a` - the start of the path.
/// * `bearing_ab` - the bearing of the path at `a`.
/// * `p` - the point.
///
/// returns the cross track distance in `Radians`, positive to the right.
#[must_use]
pub fn arc_cross_track_from_bearing(a: &Point, bearing_ab: Angle, p: &Point) -> Radians {
    calculate_atd_and_xtd(a, bearing_ab, p).1
}

/// Calculate the cross track distance of point `p` from the great circle
/// path from `a` to `b`.
/// * `a`, `b` - the start and finish of the path.
/// * `p` - the point.
///
/// returns the cross track distance in `Radians`, positive to the right.
#[must_use]
pub fn arc_cross_track(a: &Point, b: &Point, p: &Point) -> Radians {
    arc_cross_track_from_bearing(a, bearing(a, b), p)
}

/// Calculate the along track distance of point `p` along the great circle
/// path from `a` to `b`.
/// * `a`, `b` - the start and finish of the path.
/// * `p` - the point.
///
/// returns the along track distance in `Radians`.
#[must_use]
pub fn arc_along_track(a: &Point, b: &Point, p: &Point) -> Radians {
    calculate_atd_and_xtd(a, bearing(a, b), p).0
}
