use std::fmt;

use crate::geo_2d::Coords;

/// An `{x, y}` operand whose components may be left out.
/// Used by `set`, `add`, `subtract`, the distance getters and the equality checks.
/// A missing or NaN component reads as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialCoords {
    pub x: Option<f64>,
    pub y: Option<f64>,
}
impl PartialCoords {
    /// Create a new operand.
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        PartialCoords{x, y}
    }

    /// Create an operand with no components at all.
    pub fn empty() -> Self {
        PartialCoords{x: None, y: None}
    }

    /// Create an operand with only the x component.
    pub fn x_only(x: f64) -> Self {
        PartialCoords{x: Some(x), y: None}
    }

    /// Create an operand with only the y component.
    pub fn y_only(y: f64) -> Self {
        PartialCoords{x: None, y: Some(y)}
    }

    /// The x component, or zero if missing or NaN.
    pub fn x_or_zero(&self) -> f64 {
        or_zero(self.x)
    }

    /// The y component, or zero if missing or NaN.
    pub fn y_or_zero(&self) -> f64 {
        or_zero(self.y)
    }

    /// Resolve into full coords, filling gaps with zero.
    pub fn or_zero(&self) -> Coords {
        Coords::new(self.x_or_zero(), self.y_or_zero())
    }
}

fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

impl From<Coords> for PartialCoords {
    fn from(coords: Coords) -> Self {
        PartialCoords{x: Some(coords.x), y: Some(coords.y)}
    }
}
impl From<&Coords> for PartialCoords {
    fn from(coords: &Coords) -> Self {
        PartialCoords::from(*coords)
    }
}
impl From<&mut Coords> for PartialCoords {
    fn from(coords: &mut Coords) -> Self {
        PartialCoords::from(*coords)
    }
}
impl From<(f64, f64)> for PartialCoords {
    fn from((x, y): (f64, f64)) -> Self {
        PartialCoords{x: Some(x), y: Some(y)}
    }
}
impl From<[f64; 2]> for PartialCoords {
    fn from([x, y]: [f64; 2]) -> Self {
        PartialCoords{x: Some(x), y: Some(y)}
    }
}
impl From<(Option<f64>, Option<f64>)> for PartialCoords {
    fn from((x, y): (Option<f64>, Option<f64>)) -> Self {
        PartialCoords{x, y}
    }
}
impl fmt::Display for PartialCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        let show = |v: Option<f64>| match v {
            Some(v) => format!("{:.*}", precision, v),
            None => "_".to_string(),
        };
        write!(f, "({}, {})", show(self.x), show(self.y))
    }
}
