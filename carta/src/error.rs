//! Error type of the crate.

use std::str::Utf8Error;

use thiserror::Error;

/// Error returned by the fallible helpers of the crate.
#[derive(Debug, Error)]
pub enum CartaError {
    /// A `%` in a URL component is not followed by two hex digits.
    #[error("malformed percent encoding at byte {position}")]
    MalformedEncoding {
        /// Byte offset of the offending `%` inside the decoded component.
        position: usize,
    },

    /// Percent-decoded bytes are not valid UTF-8.
    #[error("decoded value is not valid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    /// Error from the projection library.
    #[error(transparent)]
    Projection(#[from] geodesy::Error),
}
