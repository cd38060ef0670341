use std::error::Error;
use std::fmt;

/// Precondition failures caught before tracing starts. Tracing itself never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceError {
    UnknownMedium(String),
    InvalidMaterial { name: String, reason: &'static str },
    InvalidObstacle,
    InvalidOptions(&'static str),
    NonFiniteInput,
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::UnknownMedium(name) => write!(f, "unknown medium \"{}\"", name),
            TraceError::InvalidMaterial { name, reason } => {
                write!(f, "invalid material \"{}\": {}", name, reason)
            }
            TraceError::InvalidObstacle => {
                write!(f, "obstacle must have finite coordinates and a non-negative size")
            }
            TraceError::InvalidOptions(reason) => write!(f, "invalid trace options: {}", reason),
            TraceError::NonFiniteInput => write!(f, "ray origin and direction must be finite"),
        }
    }
}

impl Error for TraceError {}
