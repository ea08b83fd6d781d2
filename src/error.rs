//! Errors produced while parsing colors and selecting algorithms.

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A HEX string was malformed, either by length (after shorthand
    /// expansion) or by containing non-hex digits.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A harmony tag did not name any known palette type.
    #[error("unsupported palette type: {0:?}")]
    UnsupportedPaletteType(String),

    /// A color vision deficiency tag did not name any known deficiency.
    #[error("unsupported color vision deficiency: {0:?}")]
    UnsupportedDeficiency(String),

    /// An export format tag did not name any known text format.
    #[error("unsupported export format: {0:?}")]
    UnsupportedExportFormat(String),

    /// A palette could not be serialized.
    #[error("failed to serialize palette")]
    Serialize(#[from] serde_json::Error),
}

/// Shorthand for results with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
