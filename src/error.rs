//! Hard failures of the bootloader-configuration model.
//!
//! Only a malformed menu directive or an unreadable/unwritable file is
//! reported as a [`GrubError`]. Bad numeric settings are logged and replaced
//! by their documented fallback instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrubError {
    /// A `menuentry` or `submenu` line appeared inside a menuentry body.
    #[error("a '{directive}' directive was detected inside the scope of a menuentry")]
    NestedDirective { directive: &'static str },

    /// The directive's title is not wrapped in matching quotes.
    #[error("parse entry title failed from: {line:?}")]
    InvalidTitle { line: String },

    /// A source or destination file could not be accessed.
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GrubError {
    /// Whether this error came from malformed menu text rather than I/O.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::NestedDirective { .. } | Self::InvalidTitle { .. }
        )
    }
}
