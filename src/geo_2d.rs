mod coords;
mod partial;
mod raw;
mod side;

pub use coords::Coords;
pub use partial::PartialCoords;
pub use raw::{RawCoords, RawValue};
pub use side::Side;

/// Angle type in radians (alias for f64).
pub type Angle = f64;
