//! Crate-level error types.

use std::fmt;

/// Errors produced by the showroom crate.
///
/// Runtime interaction never fails fatally; everything here comes from the
/// startup edges (loading authored configuration, building the part
/// registry). Missing per-part authoring data is *not* an error — it
/// degrades to a logged placeholder so the session stays usable.
#[derive(Debug)]
pub enum ShowroomError {
    /// Generic I/O failure while reading or writing authored files.
    Io(std::io::Error),
    /// TOML parsing/serialization failure for options or part catalogs.
    ConfigParse(String),
    /// Structural problem in an authored part catalog that cannot be
    /// repaired with a placeholder (e.g. duplicate part ids).
    Catalog(String),
}

impl fmt::Display for ShowroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => {
                write!(f, "config parse error: {msg}")
            }
            Self::Catalog(msg) => write!(f, "part catalog error: {msg}"),
        }
    }
}

impl std::error::Error for ShowroomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShowroomError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
