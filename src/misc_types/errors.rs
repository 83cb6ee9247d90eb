use std::fmt::{self, Display};

/// Setup failures. All of them are fatal and surface before the first
/// round of a simulation, a running outbreak cannot error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidArgument(String),
    SeedUnavailable,
}

impl From<String> for SimError {
    fn from(msg: String) -> Self {
        SimError::InvalidArgument(msg)
    }
}

impl From<&str> for SimError {
    fn from(msg: &str) -> Self {
        SimError::InvalidArgument(msg.to_string())
    }
}

impl std::error::Error for SimError {}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            SimError::SeedUnavailable => write!(f, "graph has no node that could seed the outbreak"),
        }
    }
}
