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

//! The `section` module contains the `RouteSection` type: the great circle
//! path between two points of a route.

use crate::great_circle::{
    angular_distance, bearing, final_bearing, intermediate_point, midpoint,
};
use crate::point::{normalize, Point};
use crate::track::{arc_along_track, arc_cross_track};
use crate::{Sphere, EARTH};
use angle_sc::{Angle, Radians};
use icao_units::si::Metres;

/// The great circle path from one point of a route to the next.
///
/// # Examples
/// ```
/// use spherical_navigation::*;
/// use angle_sc::is_within_tolerance;
///
/// let lands_end = Point::new(Degrees(50.066389), Degrees(-5.714722));
/// let john_o_groats = Point::new(Degrees(58.643889), Degrees(-3.07));
/// let section = RouteSection::new(lands_end, john_o_groats);
///
/// let distance_nm = NauticalMiles::from(section.distance());
/// assert!(is_within_tolerance(523.139, distance_nm.0, 1e-3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteSection {
    /// The start point of the section.
    from: Point,
    /// The end point of the section.
    to: Point,
}

impl RouteSection {
    /// Construct a `RouteSection` between a pair of points.
    /// The points are normalised.
    /// * `from` - the start point.
    /// * `to` - the end point.
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            from: normalize(&from),
            to: normalize(&to),
        }
    }

    /// Accessor for the start point.
    #[must_use]
    pub const fn from(&self) -> Point {
        self.from
    }

    /// Accessor for the end point.
    #[must_use]
    pub const fn to(&self) -> Point {
        self.to
    }

    /// The same section flown in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// The great circle distance of the section on the unit sphere.
    #[must_use]
    pub fn arc_length(&self) -> Radians {
        angular_distance(&self.from, &self.to)
    }

    /// The length of the section on the Earth.
    #[must_use]
    pub fn distance(&self) -> Metres {
        self.distance_on(&EARTH)
    }

    /// The length of the section on the given `sphere`.
    #[must_use]
    pub fn distance_on(&self, sphere: &Sphere) -> Metres {
        sphere.to_metres(self.arc_length())
    }

    /// The initial bearing of the section.
    #[must_use]
    pub fn bearing(&self) -> Angle {
        bearing(&self.from, &self.to)
    }

    /// The bearing of the section at its end point.
    #[must_use]
    pub fn final_bearing(&self) -> Angle {
        final_bearing(&self.from, &self.to)
    }

    /// The point half way along the section.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        midpoint(&self.from, &self.to)
    }

    /// The point at `fraction` of the way along the section.
    /// * `fraction` - 0 is the start point, 1 the end point.
    #[must_use]
    pub fn intermediate_point(&self, fraction: f64) -> Point {
        intermediate_point(&self.from, &self.to, fraction)
    }

    /// The cross track distance of `point` from the section on the Earth,
    /// positive to the right of the section.
    #[must_use]
    pub fn cross_track_distance(&self, point: &Point) -> Metres {
        self.cross_track_distance_on(point, &EARTH)
    }

    /// The cross track distance of `point` from the section on `sphere`.
    #[must_use]
    pub fn cross_track_distance_on(&self, point: &Point, sphere: &Sphere) -> Metres {
        sphere.to_metres(arc_cross_track(&self.from, &self.to, point))
    }

    /// The along track distance of `point` on the Earth: the distance from
    /// the start point to the closest point on the section's great circle.
    #[must_use]
    pub fn along_track_distance(&self, point: &Point) -> Metres {
        self.along_track_distance_on(point, &EARTH)
    }

    /// The along track distance of `point` on `sphere`.
    #[must_use]
    pub fn along_track_distance_on(&self, point: &Point, sphere: &Sphere) -> Metres {
        sphere.to_metres(arc_along_track(&self.from, &self.to, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees, Validate};
    use icao_units::non_si::NauticalMiles;

    fn istanbul_washington() -> RouteSection {
        RouteSection::new(
            Point::new(Degrees(42.0), Degrees(29.0)),
            Point::new(Degrees(39.0), Degrees(-77.0)),
        )
    }

    #[test]
    fn test_route_section_traits() {
        let section = istanbul_washington();

        let section_clone = section.clone();
        assert!(section_clone == section);

        print!("RouteSection: {:?}", section);
    }

    #[test]
    fn test_route_section_normalises_points() {
        let section = RouteSection::new(
            Point::new(Degrees(100.0), Degrees(0.0)),
            Point::new(Degrees(10.0), Degrees(0.0)),
        );
        assert!(section.from().is_valid());
        let (lat, lon) = section.from().to_degrees();
        assert!(is_within_tolerance(80.0, lat.0, 1e-12));
        assert!(is_within_tolerance(180.0, lon.0, 1e-12));
    }

    #[test]
    fn test_route_section_istanbul_washington() {
        let section = istanbul_washington();

        assert!(is_within_tolerance(
            1.305797494189314,
            section.arc_length().0,
            1e-12
        ));
        assert!(is_within_tolerance(
            8319235.83548012,
            section.distance().0,
            1e-3
        ));
        assert!(is_within_tolerance(
            4492.0,
            NauticalMiles::from(section.distance()).0,
            0.5
        ));
        assert!(is_within_tolerance(
            309.2800284531682,
            Degrees::from(section.bearing()).0 + 360.0,
            1e-9
        ));

        let (lat, lon) = section.midpoint().to_degrees();
        assert!(is_within_tolerance(54.818263431788594, lat.0, 1e-9));
        assert!(is_within_tolerance(-25.699994511364576, lon.0, 1e-9));

        assert_eq!(section.from(), section.intermediate_point(0.0));
        assert_eq!(section.to(), section.intermediate_point(1.0));
    }

    #[test]
    fn test_route_section_reversed() {
        let section = istanbul_washington();
        let reversed = section.reversed();
        assert_eq!(section.from(), reversed.to());
        assert_eq!(section.to(), reversed.from());
        assert_eq!(section, reversed.reversed());

        // the final bearing is the opposite of the reverse initial bearing
        assert!(is_within_tolerance(
            section.final_bearing().sin().0,
            -reversed.bearing().sin().0,
            1e-12
        ));
        assert!(is_within_tolerance(
            section.final_bearing().cos().0,
            -reversed.bearing().cos().0,
            1e-12
        ));

        let reykjavik = Point::new(Degrees(64.0), Degrees(-22.0));
        assert!(is_within_tolerance(
            section.cross_track_distance(&reykjavik).0,
            -reversed.cross_track_distance(&reykjavik).0,
            1e-3
        ));
    }

    #[test]
    fn test_route_section_track_distances() {
        let section = istanbul_washington();
        let reykjavik = Point::new(Degrees(64.0), Degrees(-22.0));

        assert!(is_within_tolerance(
            1013726.1479460363,
            section.cross_track_distance(&reykjavik).0,
            1e-3
        ));
        assert!(is_within_tolerance(
            3918494.1530702855,
            section.along_track_distance(&reykjavik).0,
            1e-3
        ));

        // on the unit sphere the distances are the arc lengths
        let unit = Sphere::new(Metres(1.0));
        assert!(is_within_tolerance(
            1013726.1479460363 / 6_371_000.0,
            section.cross_track_distance_on(&reykjavik, &unit).0,
            1e-9
        ));
        assert!(is_within_tolerance(
            3918494.1530702855 / 6_371_000.0,
            section.along_track_distance_on(&reykjavik, &unit).0,
            1e-9
        ));
        assert!(is_within_tolerance(
            section.arc_length().0,
            section.distance_on(&unit).0,
            1e-15
        ));
    }

    #[test]
    fn test_route_section_point_on_path() {
        let section = istanbul_washington();
        let point = Point::new(Degrees(54.368817221943296), Degrees(-10.56980830155851));

        assert!(libm::fabs(section.cross_track_distance(&point).0) < 1e-3);
        assert!(is_within_tolerance(
            3185500.0,
            section.along_track_distance(&point).0,
            1e-3
        ));
    }
}
