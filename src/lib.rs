pub mod geo_2d;
pub mod io;
mod crate_errors;

pub use crate_errors::{
    CoordsError,
    CoordsResult,
};
pub use geo_2d::{
    Angle,
    Coords,
    PartialCoords,
    RawCoords,
    RawValue,
    Side,
};
