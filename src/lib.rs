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

//! spherical-navigation
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for performing great circle navigation calculations on a
//! spherical model of the Earth.
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).
//! Although the Earth is better modelled by an ellipsoid, a sphere with the
//! mean Earth radius is accurate to within about 0.5% and its formulae are
//! simple enough for flight planning and real time avionics.
//!
//! This library calculates:
//!
//! - the distance, initial and final bearings between two points;
//! - intermediate points and destination points along a great circle;
//! - the intersection of two great circle paths;
//! - the along track and across track distances of a point relative to a path;
//! - the closest point of a path to a pole;
//! - and the head wind, cross wind and ground speed of an aircraft.
//!
//! ## Design
//!
//! The calculations are performed on the unit sphere, where distances are
//! angles in `Radians`. A `Sphere` converts angular distances to and from
//! `Metres`. The const `EARTH` represents the Earth, with the mean radius
//! `EARTH_RADIUS`, and is used by the functions at the root of the library.
//! Use a `Sphere` to perform the same calculations with a different radius.
//!
//! Positions are `Point`s, a pair of latitude and longitude `Angle`s. Points
//! are normalised on entry to every calculation, so a latitude beyond a pole
//! is reflected back over it.
//!
//! A `RouteSection` is the great circle path between two points of a route.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and perform vector calculations.
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod error;
pub mod great_circle;
pub mod point;
pub mod polar;
pub mod section;
pub mod track;
pub mod wind;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

pub use error::Error;
pub use great_circle::{
    angular_distance, arc_destination, bearing, compass_degrees, final_bearing,
    intermediate_point, intersection_point, midpoint, DEFAULT_FRACTION,
};
pub use point::{normalize, opposite_point, Point};
pub use polar::{closest_point_to_pole, max_latitude, min_latitude};
pub use section::RouteSection;
pub use track::{
    arc_along_track, arc_cross_track, arc_cross_track_from_bearing, calculate_atd, calculate_xtd,
};
pub use wind::{cross_wind, ground_speed, head_wind};

/// The mean radius of the Earth.
pub const EARTH_RADIUS: Metres = Metres(6_371_000.0);

/// A sphere, used to convert between distances on the unit sphere and
/// distances on its surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere.
    radius: Metres,
}

impl Sphere {
    /// Constructor.
    /// * `radius` - the radius of the `Sphere`.
    #[must_use]
    pub const fn new(radius: Metres) -> Self {
        Self { radius }
    }

    /// Construct a `Sphere` with the mean radius of the Earth.
    #[must_use]
    pub const fn earth() -> Self {
        Self::new(EARTH_RADIUS)
    }

    /// The radius of the sphere.
    #[must_use]
    pub const fn radius(&self) -> Metres {
        self.radius
    }

    /// Convert an angular distance to a distance on the surface of the sphere.
    /// * `arc_length` - the angular distance.
    ///
    /// returns the distance in `Metres`.
    #[must_use]
    pub fn to_metres(&self, arc_length: Radians) -> Metres {
        Metres(self.radius.0 * arc_length.0)
    }

    /// Convert a distance on the surface of the sphere to an angular distance.
    /// * `distance` - the distance in `Metres`.
    ///
    /// returns the angular distance in `Radians`.
    #[must_use]
    pub fn to_radians(&self, distance: Metres) -> Radians {
        Radians(distance.0 / self.radius.0)
    }

    /// Calculate the great circle distance between a pair of points.
    #[must_use]
    pub fn distance(&self, a: &Point, b: &Point) -> Metres {
        self.to_metres(angular_distance(a, b))
    }

    /// Calculate the point at `distance` along a great circle from `start`.
    /// * `start` - the start point.
    /// * `distance` - the distance from `start`.
    /// * `bearing` - the initial bearing from `start`.
    #[must_use]
    pub fn destination_point(&self, start: &Point, distance: Metres, bearing: Angle) -> Point {
        arc_destination(start, self.to_radians(distance), bearing)
    }

    /// Calculate the cross track distance of `p` from the great circle
    /// path from `a` to `b`, positive to the right of the path.
    #[must_use]
    pub fn cross_track_distance(&self, a: &Point, b: &Point, p: &Point) -> Metres {
        self.to_metres(arc_cross_track(a, b, p))
    }

    /// Calculate the cross track distance of `p` from the great circle
    /// path from `a` along `bearing_ab`.
    #[must_use]
    pub fn cross_track_distance_from_bearing(
        &self,
        a: &Point,
        bearing_ab: Angle,
        p: &Point,
    ) -> Metres {
        self.to_metres(arc_cross_track_from_bearing(a, bearing_ab, p))
    }

    /// Calculate the cross track distance from the angular distance and
    /// bearings of a point, see `calculate_xtd`.
    #[must_use]
    pub fn cross_track_distance_from_arcs(
        &self,
        arc_length_ap: Radians,
        bearing_ab: Angle,
        bearing_ap: Angle,
    ) -> Metres {
        self.to_metres(calculate_xtd(arc_length_ap, bearing_ab, bearing_ap))
    }

    /// Calculate the along track distance of `p` along the great circle
    /// path from `a` to `b`.
    #[must_use]
    pub fn along_track_distance(&self, a: &Point, b: &Point, p: &Point) -> Metres {
        self.to_metres(arc_along_track(a, b, p))
    }

    /// Calculate the along track distance from the angular distance and
    /// cross track distance of a point, see `calculate_atd`.
    #[must_use]
    pub fn along_track_distance_from_arcs(&self, arc_length_ap: Radians, xtd: Radians) -> Metres {
        self.to_metres(calculate_atd(arc_length_ap, xtd))
    }
}

impl Validate for Sphere {
    /// Test whether the radius is positive and finite.
    fn is_valid(&self) -> bool {
        self.radius.0.is_finite() && 0.0 < self.radius.0
    }
}

impl Default for Sphere {
    fn default() -> Self {
        EARTH
    }
}

/// The Earth, a `Sphere` with radius: `EARTH_RADIUS`.
pub const EARTH: Sphere = Sphere::earth();

/// Calculate the great circle distance between a pair of points on the Earth.
/// * `a`, `b` - the points.
///
/// returns the distance in `Metres`.
///
/// # Examples
/// ```
/// use spherical_navigation::*;
/// use angle_sc::is_within_tolerance;
///
/// let lands_end = Point::new(Degrees(50.066389), Degrees(-5.714722));
/// let john_o_groats = Point::new(Degrees(58.643889), Degrees(-3.07));
///
/// let result = distance(&lands_end, &john_o_groats);
/// assert!(is_within_tolerance(968_853.544, result.0, 1e-3));
/// ```
#[must_use]
pub fn distance(a: &Point, b: &Point) -> Metres {
    EARTH.distance(a, b)
}

/// Convert a distance on the Earth to an angular distance.
#[must_use]
pub fn angular_distance_from(distance: Metres) -> Radians {
    EARTH.to_radians(distance)
}

/// Calculate the point at `distance` along a great circle on the Earth.
/// * `start` - the start point.
/// * `distance` - the distance from `start`.
/// * `bearing` - the initial bearing from `start`.
#[must_use]
pub fn destination_point(start: &Point, distance: Metres, bearing: Angle) -> Point {
    EARTH.destination_point(start, distance, bearing)
}

/// Calculate the cross track distance of `p` from the great circle path
/// from `a` to `b` on the Earth, positive to the right of the path.
#[must_use]
pub fn cross_track_distance(a: &Point, b: &Point, p: &Point) -> Metres {
    EARTH.cross_track_distance(a, b, p)
}

/// Calculate the cross track distance of `p` from the great circle path
/// from `a` along `bearing_ab` on the Earth.
#[must_use]
pub fn cross_track_distance_from_bearing(a: &Point, bearing_ab: Angle, p: &Point) -> Metres {
    EARTH.cross_track_distance_from_bearing(a, bearing_ab, p)
}

/// Calculate the cross track distance on the Earth from the angular
/// distance and bearings of a point.
#[must_use]
pub fn cross_track_distance_from_arcs(
    arc_length_ap: Radians,
    bearing_ab: Angle,
    bearing_ap: Angle,
) -> Metres {
    EARTH.cross_track_distance_from_arcs(arc_length_ap, bearing_ab, bearing_ap)
}

/// Calculate the along track distance of `p` along the great circle path
/// from `a` to `b` on the Earth.
#[must_use]
pub fn along_track_distance(a: &Point, b: &Point, p: &Point) -> Metres {
    EARTH.along_track_distance(a, b, p)
}

/// Calculate the along track distance on the Earth from the angular
/// distance and cross track distance of a point.
#[must_use]
pub fn along_track_distance_from_arcs(arc_length_ap: Radians, xtd: Radians) -> Metres {
    EARTH.along_track_distance_from_arcs(arc_length_ap, xtd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::mem::size_of;

    fn lands_end() -> Point {
        Point::new(Degrees(50.066389), Degrees(-5.714722))
    }

    fn john_o_groats() -> Point {
        Point::new(Degrees(58.643889), Degrees(-3.07))
    }

    #[test]
    fn test_sphere_earth() {
        assert_eq!(EARTH_RADIUS, EARTH.radius());
        assert_eq!(EARTH, Sphere::default());
        assert_eq!(EARTH, Sphere::earth());
        assert!(EARTH.is_valid());

        assert!(!Sphere::new(Metres(0.0)).is_valid());
        assert!(!Sphere::new(Metres(-1.0)).is_valid());
        assert!(!Sphere::new(Metres(f64::INFINITY)).is_valid());
        assert!(!Sphere::new(Metres(f64::NAN)).is_valid());

        assert_eq!(8, size_of::<Sphere>());

        let sphere = EARTH;
        let sphere_clone = sphere.clone();
        assert!(sphere_clone == sphere);
        print!("Sphere: {:?}", sphere);
    }

    #[test]
    fn test_sphere_conversions() {
        let result = EARTH.to_metres(Radians(0.5));
        assert_eq!(3_185_500.0, result.0);
        let result = EARTH.to_radians(Metres(3_185_500.0));
        assert_eq!(0.5, result.0);
        assert_eq!(0.5, angular_distance_from(Metres(3_185_500.0)).0);

        let unit = Sphere::new(Metres(1.0));
        assert_eq!(0.25, unit.to_metres(Radians(0.25)).0);
        assert_eq!(0.25, unit.to_radians(Metres(0.25)).0);
    }

    #[test]
    fn test_distance() {
        let result = distance(&lands_end(), &john_o_groats());
        assert!(is_within_tolerance(968_853.5441168448, result.0, 1e-6));
        assert!(is_within_tolerance(
            523.139,
            NauticalMiles::from(result).0,
            1e-3
        ));

        assert_eq!(0.0, distance(&lands_end(), &lands_end()).0);

        // a sphere with twice the radius
        let sphere = Sphere::new(Metres(2.0 * EARTH_RADIUS.0));
        let result = sphere.distance(&lands_end(), &john_o_groats());
        assert!(is_within_tolerance(2.0 * 968_853.5441168448, result.0, 1e-6));
    }

    #[test]
    fn test_distance_and_bearing_from_50n_0e() {
        // 3.07°W is West of the start meridian, so the route heads West of North
        let a = Point::new(Degrees(50.0), Degrees(0.0));
        let b = Point::new(Degrees(58.64), Degrees(-3.07));

        let result = distance(&a, &b);
        assert!(is_within_tolerance(980_874.4704892023, result.0, 1e-6));
        assert!(9_689.0 < libm::fabs(result.0 - 968_900.0));

        let result = compass_degrees(bearing(&a, &b));
        assert!(is_within_tolerance(349.5284522372685, result.0, 1e-9));

        // the route from Land's End is East of North
        let result = compass_degrees(bearing(&lands_end(), &john_o_groats()));
        assert!(is_within_tolerance(9.1, result.0, 0.5));
        let result = distance(&lands_end(), &john_o_groats());
        assert!(libm::fabs(result.0 - 968_900.0) < 9_689.0);
    }

    #[test]
    fn test_destination_point() {
        let a = lands_end();
        let b = john_o_groats();
        let length = distance(&a, &b);
        let result = destination_point(&a, length, bearing(&a, &b));
        assert!(is_within_tolerance(58.643889, Degrees::from(result.lat()).0, 1e-9));
        assert!(is_within_tolerance(-3.07, Degrees::from(result.lon()).0, 1e-9));

        let sphere = Sphere::new(Metres(1.0));
        let result = sphere.destination_point(&a, Metres(0.0), bearing(&a, &b));
        assert!(is_within_tolerance(50.066389, Degrees::from(result.lat()).0, 1e-12));
    }

    #[test]
    fn test_track_distances() {
        // Movable Type example
        let a = Point::new(Degrees(53.3206), Degrees(-1.7297));
        let b = Point::new(Degrees(53.1887), Degrees(0.1334));
        let p = Point::new(Degrees(53.2611), Degrees(-0.7972));

        let xtd = cross_track_distance(&a, &b, &p);
        assert!(is_within_tolerance(-307.5495704198037, xtd.0, 1e-6));
        let xtd = cross_track_distance_from_bearing(&a, bearing(&a, &b), &p);
        assert!(is_within_tolerance(-307.5495704198037, xtd.0, 1e-6));
        let xtd = cross_track_distance_from_arcs(
            angular_distance(&a, &p),
            bearing(&a, &b),
            bearing(&a, &p),
        );
        assert!(is_within_tolerance(-307.5495704198037, xtd.0, 1e-6));

        let atd = along_track_distance(&a, &b, &p);
        assert!(is_within_tolerance(62331.493285379365, atd.0, 1e-6));
        let atd = along_track_distance_from_arcs(
            angular_distance(&a, &p),
            EARTH.to_radians(xtd),
        );
        assert!(is_within_tolerance(62331.493285379365, atd.0, 1e-6));

        let section = RouteSection::new(a, b);
        assert_eq!(
            cross_track_distance(&a, &b, &p),
            section.cross_track_distance(&p)
        );
        assert_eq!(
            along_track_distance(&a, &b, &p),
            section.along_track_distance(&p)
        );
    }
}
