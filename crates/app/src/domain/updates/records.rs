//! Last Update Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown update operation: {0}")]
pub struct ParseOperationError(pub String);

/// Kind of change that touched the marker. Status updates never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperation {
    Insert,
    Delete,
}

impl UpdateOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
        }
    }
}

impl Display for UpdateOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateOperation {
    type Err = ParseOperationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "insert" => Ok(Self::Insert),
            "delete" => Ok(Self::Delete),
            other => Err(ParseOperationError(other.to_string())),
        }
    }
}

/// Last Update Marker Record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateMarker {
    pub updated_at: Timestamp,
    pub operation: UpdateOperation,
}
