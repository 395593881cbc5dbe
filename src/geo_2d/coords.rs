use std::ops::{
    AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Angle, PartialCoords, Side};

/// A point (or vector) in 2D space.
/// Mutations work in place and return `&mut Self` for chaining;
/// `get_*` operations return new values and leave `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}
impl Coords {
    /// Create new coords. No validation is done here, see `check` and `fix`.
    pub fn new(x: f64, y: f64) -> Self {
        Coords{x, y}
    }

    /// Create new coords at the origin.
    pub fn zero() -> Self {
        Coords{x: 0.0, y: 0.0}
    }

    //------------------------------------------ Mutations

    /// Set both components. Missing or NaN components become zero.
    pub fn set(&mut self, coords: impl Into<PartialCoords>) -> &mut Self {
        let coords = coords.into();
        self.x = coords.x_or_zero();
        self.y = coords.y_or_zero();
        self
    }

    /// Set both components to zero.
    pub fn clear(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Repair invalid coords.
    /// Returns `true` if the values were already valid numbers.
    /// A NaN component cannot be salvaged, so both components are reset to zero and `false` is returned.
    pub fn fix(&mut self) -> bool {
        if self.check() {
            return true;
        }
        log::warn!("Coords {} could not be salvaged, resetting to zero", self);
        self.clear();
        false
    }

    /// Component-wise addition. Missing or NaN components add nothing.
    pub fn add(&mut self, coords: impl Into<PartialCoords>) -> &mut Self {
        let coords = coords.into();
        self.x += coords.x_or_zero();
        self.y += coords.y_or_zero();
        self
    }

    /// Component-wise subtraction. Missing or NaN components subtract nothing.
    pub fn subtract(&mut self, coords: impl Into<PartialCoords>) -> &mut Self {
        let coords = coords.into();
        self.x -= coords.x_or_zero();
        self.y -= coords.y_or_zero();
        self
    }

    /// Scale both components.
    /// No scalar (`None`) or a NaN scalar leaves the coords unchanged; `0.0` zeroes them.
    pub fn multiply(&mut self, m: impl Into<Option<f64>>) -> &mut Self {
        let m = match m.into() {
            Some(m) if !m.is_nan() => m,
            _ => 1.0,
        };
        self.x *= m;
        self.y *= m;
        self
    }

    /// Replace both components with their absolute values.
    pub fn abs(&mut self) -> &mut Self {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self
    }

    /// Round both components to the nearest integer, halves towards positive infinity.
    pub fn round(&mut self) -> &mut Self {
        self.x = round_half_up(self.x);
        self.y = round_half_up(self.y);
        self
    }

    /// Point the other way.
    pub fn reverse(&mut self) -> &mut Self {
        self.multiply(-1.0)
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.get_magnitude();
        if mag == 0.0 {
            self.clear();
            return self;
        }
        self.x /= mag;
        self.y /= mag;
        self
    }

    /// Keep the direction, change the length.
    pub fn set_magnitude(&mut self, m: f64) -> &mut Self {
        self.normalize().multiply(m)
    }

    /// Swap x and y in place.
    pub fn set_tangent(&mut self) -> &mut Self {
        std::mem::swap(&mut self.x, &mut self.y);
        self
    }

    /// Rotate by `delta_theta` radians (counter-clockwise) around a pivot.
    pub fn rotate(&mut self, delta_theta: Angle, pivot: impl Into<PartialCoords>) -> &mut Self {
        let pivot = pivot.into();
        self.subtract(pivot);
        let radius = self.get_radius();
        let theta = self.get_theta();
        self.set_by_polar_coords(radius, theta + delta_theta);
        self.add(pivot)
    }

    /// Set from a radius and an angle (radians).
    pub fn set_by_polar_coords(&mut self, r: f64, theta: Angle) -> &mut Self {
        self.set((r * theta.cos(), r * theta.sin()))
    }

    /// Keep the angle, change the distance from the origin.
    pub fn set_radius(&mut self, r: f64) -> &mut Self {
        let theta = self.get_theta();
        self.set_by_polar_coords(r, theta)
    }

    /// Keep the distance from the origin, change the angle.
    pub fn set_theta(&mut self, theta: Angle) -> &mut Self {
        let r = self.get_radius();
        self.set_by_polar_coords(r, theta)
    }

    //------------------------------------------ Get values

    /// Get the distance to other coords. Missing components of `coords` are taken as zero.
    pub fn get_distance(&self, coords: impl Into<PartialCoords>) -> f64 {
        let coords = coords.into();
        let dx = self.x - coords.x_or_zero();
        let dy = self.y - coords.y_or_zero();

        (dx*dx + dy*dy).sqrt()
    }

    /// Get the distance to other coords, never negative.
    pub fn get_absolute_distance(&self, coords: impl Into<PartialCoords>) -> f64 {
        self.get_distance(coords).abs()
    }

    /// Get the length of the vector.
    pub fn get_magnitude(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    /// Get the distance from the origin (polar radius).
    pub fn get_radius(&self) -> f64 {
        self.get_distance(Coords::zero())
    }

    /// Get the polar angle in radians, in (-PI, PI].
    pub fn get_theta(&self) -> Angle {
        self.y.atan2(self.x)
    }

    /// Get the polar angle in degrees.
    pub fn get_degrees(&self) -> f64 {
        self.get_theta().to_degrees()
    }

    //------------------------------------------ Derived coords

    /// Copy of these coords.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Copy of these coords.
    pub fn get_copy(&self) -> Self {
        *self
    }

    /// Copy of these coords.
    pub fn get_clone(&self) -> Self {
        *self
    }

    /// Scaled copy. Unlike `multiply`, every scalar is applied as given.
    pub fn get_multiply(&self, m: f64) -> Self {
        Coords{x: self.x * m, y: self.y * m}
    }

    /// Unit vector pointing from these coords towards `coords`.
    /// Zero vector if both are the same point.
    pub fn get_unit_vector(&self, coords: impl Into<PartialCoords>) -> Self {
        let target = coords.into().or_zero();
        let d = self.get_absolute_distance(target);
        if d == 0.0 {
            return Coords::zero();
        }
        (target - *self) / d
    }

    /// Unit vector perpendicular to the direction towards `coords` (turned clockwise).
    /// Zero vector if both are the same point.
    pub fn get_unit_vector_tangent(&self, coords: impl Into<PartialCoords>) -> Self {
        let target = coords.into().or_zero();
        let d = self.get_absolute_distance(target);
        if d == 0.0 {
            return Coords::zero();
        }
        Coords{
            x: (target.y - self.y) / d,
            y: (self.x - target.x) / d,
        }
    }

    /// Vector turned 90 degrees. Pass `true`/`Side::Left` for counter-clockwise.
    pub fn get_perpendicular_vector(&self, side: impl Into<Side>) -> Self {
        match side.into() {
            Side::Left => Coords{x: -self.y, y: self.x},
            Side::Right => Coords{x: self.y, y: -self.x},
        }
    }

    /// Copy with x and y swapped.
    pub fn get_tangent(&self) -> Self {
        Coords{x: self.y, y: self.x}
    }

    //------------------------------------------ Checks

    /// Check that neither component is NaN.
    pub fn check(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Exact equality. A missing component is never equal.
    pub fn is_equal(&self, coords: impl Into<PartialCoords>) -> bool {
        let coords = coords.into();
        coords.x == Some(self.x) && coords.y == Some(self.y)
    }

    /// Alias of `is_equal`.
    pub fn equals(&self, coords: impl Into<PartialCoords>) -> bool {
        self.is_equal(coords)
    }

    /// Equality after rounding both sides to integers.
    pub fn is_equal_integer(&self, coords: impl Into<PartialCoords>) -> bool {
        let coords = coords.into();
        coords.x.map(round_half_up) == Some(round_half_up(self.x))
            && coords.y.map(round_half_up) == Some(round_half_up(self.y))
    }
}

/// Round to the nearest integer, halves go up (`-2.5` -> `-2`).
fn round_half_up(v: f64) -> f64 {
    let floor = v.floor();
    if v - floor >= 0.5 { floor + 1.0 } else { floor }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl std::ops::Add for Coords {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Coords{
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}
impl AddAssign for Coords {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}
impl Sub for Coords {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Coords{
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
impl SubAssign for Coords {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}
impl Mul<Coords> for f64 {
    type Output = Coords;

    fn mul(self, other: Coords) -> Coords {
        Coords{
            x: self * other.x,
            y: self * other.y,
        }
    }
}
impl Mul<f64> for Coords {
    type Output = Coords;

    fn mul(self, other: f64) -> Coords {
        Coords{
            x: self.x * other,
            y: self.y * other,
        }
    }
}
impl MulAssign<f64> for Coords {
    fn mul_assign(&mut self, other: f64) {
        self.x *= other;
        self.y *= other;
    }
}
impl Div<f64> for Coords {
    type Output = Coords;

    fn div(self, other: f64) -> Coords {
        Coords{
            x: self.x / other,
            y: self.y / other,
        }
    }
}
impl DivAssign<f64> for Coords {
    fn div_assign(&mut self, other: f64) {
        self.x /= other;
        self.y /= other;
    }
}
impl std::ops::Neg for Coords {
    type Output = Coords;

    fn neg(self) -> Coords {
        Coords{
            x: -self.x,
            y: -self.y,
        }
    }
}
impl From<(f64, f64)> for Coords {
    fn from((x, y): (f64, f64)) -> Self {
        Coords{x, y}
    }
}
impl From<[f64; 2]> for Coords {
    fn from([x, y]: [f64; 2]) -> Self {
        Coords{x, y}
    }
}
