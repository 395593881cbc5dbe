use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, EnumString};

/// Turning direction for perpendicular vectors.
/// `Right` is clockwise, `Left` counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}
impl From<bool> for Side {
    /// `true` turns left, `false` turns right.
    fn from(left: bool) -> Self {
        if left { Side::Left } else { Side::Right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_round_trip_through_strum() {
        for side in Side::iter() {
            assert_eq!(Side::from_str(&side.to_string()).unwrap(), side);
        }
        assert_eq!(Side::Left.to_string(), "left");
    }

    #[test]
    fn bool_flag_defaults_to_right() {
        assert_eq!(Side::from(false), Side::default());
        assert_eq!(Side::from(true), Side::Left);
    }
}
