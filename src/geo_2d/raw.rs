use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::Coords;
use crate::{CoordsError, CoordsResult};

/// A loosely-typed coordinate component, as found in hand-written config files.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Bool(bool),
    #[default]
    Null,
}
impl RawValue {
    /// Numeric coercion: `null`/`false`/empty text are 0, `true` is 1,
    /// text is trimmed and read as a decimal, `0x`/`0o`/`0b` integer or `Infinity`.
    /// Anything else is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Number(n) => *n,
            RawValue::Bool(b) => if *b { 1.0 } else { 0.0 },
            RawValue::Null => 0.0,
            RawValue::Text(text) => parse_text(text),
        }
    }

    /// Check that this is a number and not NaN.
    pub fn is_valid(&self) -> bool {
        matches!(self, RawValue::Number(n) if !n.is_nan())
    }
}

fn parse_text(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {},
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        // Folded into f64 so literals past u64::MAX still come out as large numbers
        let mut value = 0.0;
        for c in digits.chars() {
            match c.to_digit(radix) {
                Some(digit) => value = value * radix as f64 + digit as f64,
                None => return f64::NAN,
            }
        }
        return value;
    }

    // Rust also accepts "inf" and "nan" spellings, which are not numbers here
    let is_decimal = text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}
impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}
impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(text) => write!(f, "{:?}", text),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Null => write!(f, "null"),
        }
    }
}

/// Coordinates whose components may not be numbers yet.
/// Use `fix` to coerce them, then convert into `Coords`.
#[derive(Debug, Clone, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct RawCoords {
    pub x: RawValue,
    pub y: RawValue,
}
impl RawCoords {
    /// Create new raw coords.
    pub fn new(x: impl Into<RawValue>, y: impl Into<RawValue>) -> Self {
        RawCoords{x: x.into(), y: y.into()}
    }

    /// Check that both components are numbers and neither is NaN.
    pub fn check(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Try to coerce both components into numbers.
    /// Returns `true` if they were valid already or became valid.
    /// Otherwise both are reset to zero and `false` is returned.
    pub fn fix(&mut self) -> bool {
        if self.check() {
            return true;
        }
        let before = self.to_string();
        self.x = RawValue::Number(self.x.to_number());
        self.y = RawValue::Number(self.y.to_number());
        if self.check() {
            log::debug!("Coerced coords {} to {}", before, self);
            return true;
        }
        log::warn!("Coords {} could not be salvaged, resetting to zero", before);
        self.x = RawValue::Number(0.0);
        self.y = RawValue::Number(0.0);
        false
    }

    /// Fix, then convert. The flag is the result of `fix`.
    pub fn into_fixed(mut self) -> (Coords, bool) {
        let fixed = self.fix();
        let coords = Coords::new(self.x.to_number(), self.y.to_number());
        (coords, fixed)
    }

    /// Strict conversion, refusing anything that is not already a pair of numbers.
    pub fn to_coords(&self) -> CoordsResult<Coords> {
        match (&self.x, &self.y) {
            (RawValue::Number(x), RawValue::Number(y)) if self.check() => Ok(Coords::new(*x, *y)),
            _ => Err(CoordsError::Invalid(self.clone())),
        }
    }
}
impl TryFrom<RawCoords> for Coords {
    type Error = CoordsError;

    fn try_from(raw: RawCoords) -> CoordsResult<Self> {
        raw.to_coords()
    }
}
impl From<Coords> for RawCoords {
    fn from(coords: Coords) -> Self {
        RawCoords::new(coords.x, coords.y)
    }
}
impl fmt::Display for RawCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coercion() {
        assert_eq!(RawValue::from(" 3 ").to_number(), 3.0);
        assert_eq!(RawValue::from("-1.5e3").to_number(), -1500.0);
        assert_eq!(RawValue::from(".5").to_number(), 0.5);
        assert_eq!(RawValue::from("").to_number(), 0.0);
        assert_eq!(RawValue::from("0x1A").to_number(), 26.0);
        assert_eq!(RawValue::from("0b101").to_number(), 5.0);
        assert_eq!(RawValue::from("-Infinity").to_number(), f64::NEG_INFINITY);
        assert!(RawValue::from("inf").to_number().is_nan());
        assert!(RawValue::from("NaN").to_number().is_nan());
        assert!(RawValue::from("3px").to_number().is_nan());
        assert!(RawValue::from("0xZZ").to_number().is_nan());
        assert!(RawValue::from("0x").to_number().is_nan());
        assert!(RawValue::from("0x+1").to_number().is_nan());
    }

    #[test]
    fn radix_text_past_u64_range() {
        assert_eq!(RawValue::from("0x1FFFFFFFFFFFFFFFF").to_number(), 2f64.powi(65));
        assert_eq!(RawValue::from("0o777").to_number(), 511.0);
        assert_eq!(RawValue::from("0xFFFFFFFFFFFFFFFF").to_number(), u64::MAX as f64);
    }

    #[test]
    fn other_coercions() {
        assert_eq!(RawValue::Null.to_number(), 0.0);
        assert_eq!(RawValue::from(true).to_number(), 1.0);
        assert_eq!(RawValue::from(false).to_number(), 0.0);
        assert_eq!(RawValue::from(2.5).to_number(), 2.5);
    }

    #[test]
    fn fix_coercible_text() {
        let mut raw = RawCoords::new("3", "4");
        assert!(!raw.check());
        assert!(raw.fix());
        assert_eq!(raw, RawCoords::new(3.0, 4.0));
        assert_eq!(raw.to_coords().unwrap(), Coords::new(3.0, 4.0));
    }

    #[test]
    fn fix_unsalvageable_resets_both() {
        let mut raw = RawCoords::new("abc", 4.0);
        assert!(!raw.fix());
        assert_eq!(raw, RawCoords::new(0.0, 0.0));

        let (coords, fixed) = RawCoords::new(f64::NAN, f64::NAN).into_fixed();
        assert!(!fixed);
        assert_eq!(coords, Coords::zero());
    }

    #[test]
    fn strict_conversion() {
        assert_eq!(Coords::try_from(RawCoords::new(1.0, 2.0)).unwrap(), Coords::new(1.0, 2.0));
        assert!(matches!(Coords::try_from(RawCoords::new("1", 2.0)), Err(CoordsError::Invalid(_))));
        assert!(RawCoords::default().to_coords().is_err());
        assert_eq!(RawCoords::from(Coords::new(5.0, 6.0)), RawCoords::new(5.0, 6.0));
    }
}
