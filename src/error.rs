//! Error type shared by the loader, the body model and the driver.

use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input file does not exist.
    InputNotFound(PathBuf),
    /// Any other failure reading the input.
    IOError(std::io::Error),
    /// Content of a text input could not be understood.
    MalformedInput { line: usize, message: String },
    /// A YAML scenario could not be deserialized.
    InvalidScenario(serde_yaml::Error),
    NonPositiveMass { label: String, mass: f64 },
    /// Two bodies share a position, so the pairwise force is undefined.
    CoincidentBodies { first: String, second: String },
    InvalidParameter(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InputNotFound(path) => write!(f, "Input file not found: {}", path.display()),
            Error::IOError(ioe) => write!(f, "I/O Error: {}", ioe),
            Error::MalformedInput { line, message } => {
                write!(f, "Malformed input at line {}: {}", line, message)
            }
            Error::InvalidScenario(ye) => write!(f, "Invalid scenario: {}", ye),
            Error::NonPositiveMass { label, mass } => {
                write!(f, "Body {} has non-positive mass ({})", label, mass)
            }
            Error::CoincidentBodies { first, second } => write!(
                f,
                "Bodies {} and {} occupy the same position, gravitational force is undefined",
                first, second
            ),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IOError(ioe) => Some(ioe),
            Error::InvalidScenario(ye) => Some(ye),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(ioe: std::io::Error) -> Self {
        Error::IOError(ioe)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(ye: serde_yaml::Error) -> Self {
        Error::InvalidScenario(ye)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
