use std::{
    cmp,
    fmt::Display,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Self {
            latitude: value.0,
            longitude: value.1,
        }
    }
}

impl Coordinate {
    /// Great-circle distance to another point.
    pub fn haversine_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }

    /// Rhumb-line bearing towards another point, in degrees within `[0, 360)`.
    /// A constant heading is what a vehicle marker should point at between two
    /// nearby stops. NaN coordinates yield a NaN bearing, never a fake heading.
    pub fn rhumb_bearing(&self, coord: &Self) -> f64 {
        use std::f64::consts::PI;
        let phi1 = self.latitude.to_radians();
        let phi2 = coord.latitude.to_radians();
        let mut delta_lambda = (coord.longitude - self.longitude).to_radians();
        if delta_lambda.abs() > PI {
            delta_lambda = if delta_lambda > 0.0 {
                delta_lambda - 2.0 * PI
            } else {
                delta_lambda + 2.0 * PI
            };
        }
        let delta_psi =
            f64::ln(f64::tan(PI / 4.0 + phi2 / 2.0) / f64::tan(PI / 4.0 + phi1 / 2.0));
        let theta = delta_lambda.atan2(delta_psi);
        (theta.to_degrees() + 360.0) % 360.0
    }

    /// Straight blend between two points. At metro stop spacing the error
    /// versus a great-circle interpolation is far below GPS noise.
    pub fn lerp(&self, coord: &Self, t: f64) -> Self {
        Self {
            latitude: self.latitude + (coord.latitude - self.latitude) * t,
            longitude: self.longitude + (coord.longitude - self.longitude) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[test]
fn distance_test() {
    let coord_a = Coordinate {
        latitude: 10.769952,
        longitude: 106.698083,
    };

    let coord_b = Coordinate {
        latitude: 10.787446,
        longitude: 106.749488,
    };
    let d = coord_a.haversine_distance(&coord_b);
    assert!(d.as_kilometers() > 5.0 && d.as_kilometers() < 7.0);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn bearing_due_east_test() {
    let from = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };
    let to = Coordinate {
        latitude: 0.0,
        longitude: 1.0,
    };
    assert!((from.rhumb_bearing(&to) - 90.0).abs() < 1e-9);
}

#[test]
fn bearing_due_north_test() {
    let from = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };
    let to = Coordinate {
        latitude: 1.0,
        longitude: 0.0,
    };
    assert!(from.rhumb_bearing(&to).abs() < 1e-9);
}

#[test]
fn bearing_reciprocal_test() {
    let coord_a = Coordinate {
        latitude: 10.769952,
        longitude: 106.698083,
    };
    let coord_b = Coordinate {
        latitude: 10.787446,
        longitude: 106.749488,
    };
    let forward = coord_a.rhumb_bearing(&coord_b);
    let backward = coord_b.rhumb_bearing(&coord_a);
    let difference = (forward - backward).rem_euclid(360.0);
    assert!((difference - 180.0).abs() < 1e-6);
}

#[test]
fn bearing_nan_test() {
    let from = Coordinate {
        latitude: f64::NAN,
        longitude: 0.0,
    };
    let to = Coordinate {
        latitude: 1.0,
        longitude: 1.0,
    };
    assert!(from.rhumb_bearing(&to).is_nan());
}

#[test]
fn lerp_endpoint_test() {
    let from = Coordinate {
        latitude: 10.77,
        longitude: 106.70,
    };
    let to = Coordinate {
        latitude: 10.78,
        longitude: 106.71,
    };
    assert_eq!(from.lerp(&to, 0.0), from);
    assert!((from.lerp(&to, 1.0).latitude - to.latitude).abs() < 1e-12);
    assert!((from.lerp(&to, 1.0).longitude - to.longitude).abs() < 1e-12);
}
