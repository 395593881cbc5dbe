use crate::{
    geo_2d::RawCoords,
    io,
};

/// Error-type enum for the `coords` crate.
/// Arithmetic on `Coords` never fails; errors only come from
/// reading/writing coords and from strict conversion of loose input.
#[derive(Debug)]
pub enum CoordsError {
    IoError(io::IoError),
    Invalid(RawCoords),
}
impl std::fmt::Display for CoordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordsError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            CoordsError::Invalid(raw) => write!(f, "! INVALID COORDS:\n- {} is not a pair of valid numbers", raw),
        }
    }
}
impl std::error::Error for CoordsError {}
impl From<io::IoError> for CoordsError {
    fn from(error: io::IoError) -> Self {
        CoordsError::IoError(error)
    }
}

/// Result type for the `coords` crate.
pub type CoordsResult<T> = std::result::Result<T, CoordsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_2d::RawValue;

    #[test]
    fn invalid_display_names_the_values() {
        let raw = RawCoords::new(RawValue::Text("abc".to_string()), RawValue::Number(4.0));
        let shown = CoordsError::Invalid(raw).to_string();
        assert!(shown.starts_with("! INVALID COORDS"));
        assert!(shown.contains("abc"));
    }
}
