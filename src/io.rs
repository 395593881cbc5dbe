use std::io::Write;
use serde::{Serialize, de::DeserializeOwned};
use strum::{Display, EnumIter, EnumString};

use crate::geo_2d::{Coords, RawCoords};
use crate::{CoordsError, CoordsResult};

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error, if any.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    /// Attach the filepath to an error raised while handling its contents.
    fn in_file(self, path: &str) -> Self {
        IoError{file: Some(path.to_string()), cause: self.cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}
impl std::error::Error for IoError {}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Supported text formats for coords files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Json,
    #[strum(to_string = "yaml", serialize = "yml")]
    Yaml,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Self> {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        match extension.parse::<Format>() {
            Ok(format) => Ok(format),
            Err(_) => {
                let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
                let error_string = format!("Unsupported filetype for coords file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
                Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
            },
        }
    }
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path)
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes())
        .map_err(|error| IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)})
}

/// Deserialize a value from a string in the given format.
pub fn parse_str<T>(buffer: &str, format: Format) -> IoResult<T>
where T: DeserializeOwned
{
    let cause = match format {
        Format::Json => match serde_json::from_str(buffer) {
            Ok(value) => return Ok(value),
            Err(error) => IoErrorType::SerdeJson(error),
        },
        Format::Yaml => match serde_yaml::from_str(buffer) {
            Ok(value) => return Ok(value),
            Err(error) => IoErrorType::SerdeYaml(error),
        },
        Format::Toml => match toml::from_str(buffer) {
            Ok(value) => return Ok(value),
            Err(error) => IoErrorType::TomlDe(error),
        },
    };
    Err(IoError{file: None, cause})
}

/// Serialize a value to a string in the given format.
pub fn to_string<T>(value: &T, format: Format) -> IoResult<String>
where T: Serialize
{
    let cause = match format {
        Format::Json => match serde_json::to_string_pretty(value) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::SerdeJson(error),
        },
        Format::Yaml => match serde_yaml::to_string(value) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::SerdeYaml(error),
        },
        Format::Toml => match toml::to_string_pretty(value) {
            Ok(buffer) => return Ok(buffer),
            Err(error) => IoErrorType::TomlSer(error),
        },
    };
    Err(IoError{file: None, cause})
}

/// Read a value from any of the supported filetypes.
pub fn read_file<T>(path: &str) -> IoResult<T>
where T: DeserializeOwned
{
    let format = Format::from_path(path)?;
    log::debug!("Reading {} file {}", format, path);
    parse_str(&read_to_string(path)?, format).map_err(|error| error.in_file(path))
}

/// Write a value to any of the supported filetypes.
pub fn write_file<T>(path: &str, value: &T) -> IoResult<()>
where T: Serialize
{
    let format = Format::from_path(path)?;
    let buffer = to_string(value, format).map_err(|error| error.in_file(path))?;
    log::debug!("Writing {} file {}", format, path);
    write_to_file(path, &buffer)
}

/// Write coords to any of the supported filetypes.
/// Coords that fail `check` are refused with `CoordsError::Invalid`.
pub fn write_coords(path: &str, coords: &Coords) -> CoordsResult<()> {
    if !coords.check() {
        return Err(CoordsError::Invalid(RawCoords::from(*coords)));
    }
    write_file(path, coords)?;
    Ok(())
}

/// Read coords from a file, repairing loosely-typed values.
/// Values that cannot be repaired give the origin (with a logged warning).
pub fn read_coords(path: &str) -> CoordsResult<Coords> {
    let raw: RawCoords = read_file(path)?;
    let (coords, _) = raw.into_fixed();
    Ok(coords)
}

/// Read coords from a file, refusing anything that is not already a pair of numbers.
pub fn read_coords_strict(path: &str) -> CoordsResult<Coords> {
    let raw: RawCoords = read_file(path)?;
    Coords::try_from(raw)
}
