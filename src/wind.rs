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

//! The `wind` module contains functions for resolving a wind into its
//! components along and across a course, and for calculating ground speed.
//!
//! Speeds are plain `f64` magnitudes; any unit may be used so long as it is
//! the same for every speed in a calculation.
//! Wind directions are the directions that the wind is blowing **from**.

use angle_sc::Angle;

/// Calculate the component of the wind across a course.
/// * `wind_speed` - the wind speed.
/// * `wind_direction` - the direction the wind is blowing from.
/// * `course` - the course.
///
/// returns the cross wind: positive from the right, negative from the left.
#[must_use]
pub fn cross_wind(wind_speed: f64, wind_direction: Angle, course: Angle) -> f64 {
    wind_speed * (wind_direction - course).sin().0
}

/// Calculate the component of the wind along a course.
/// * `wind_speed` - the wind speed.
/// * `wind_direction` - the direction the wind is blowing from.
/// * `course` - the course.
///
/// returns the head wind: positive against the course, negative for a tail
/// wind.
#[must_use]
pub fn head_wind(wind_speed: f64, wind_direction: Angle, course: Angle) -> f64 {
    wind_speed * (wind_direction - course).cos().0
}

/// Calculate the ground speed: the magnitude of the vector sum of the true
/// air speed along the course and the wind.
/// * `tas` - the true air speed.
/// * `wind_speed` - the wind speed.
/// * `wind_direction` - the direction the wind is blowing from.
/// * `course` - the course.
///
/// returns the ground speed, in the units of `tas`.
///
/// # Examples
/// ```
/// use spherical_navigation::*;
/// use angle_sc::is_within_tolerance;
///
/// // a 40 knot tail wind
/// let result = ground_speed(
///     450.0,
///     40.0,
///     Angle::from(Degrees(270.0)),
///     Angle::from(Degrees(90.0)),
/// );
/// assert!(is_within_tolerance(490.0, result, 1e-9));
/// ```
#[must_use]
pub fn ground_speed(tas: f64, wind_speed: f64, wind_direction: Angle, course: Angle) -> f64 {
    libm::hypot(
        tas - head_wind(wind_speed, wind_direction, course),
        cross_wind(wind_speed, wind_direction, course),
    )
}
