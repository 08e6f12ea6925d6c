//! Error taxonomy for the SDK.
//!
//! Every fallible operation in the crate returns [`Nem2Error`]. The enum is
//! closed: one variant per failure class, each carrying a human-readable
//! message. Malformed input data never panics; it maps to one of these.

use thiserror::Error;

/// Errors surfaced by codecs, constructors, serializers and the mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Nem2Error {
    /// Invalid input at a construction boundary: bad key length, malformed
    /// hex or base32, invalid namespace/mosaic name, address prefix that does
    /// not match the network, aggregate built from unsigned inner
    /// transactions, wrong signed-transaction type for a funds lock.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    /// A JSON value tree does not have the shape required to rebuild a
    /// domain object (missing field, wrong variant, unknown enum value).
    #[error("parse error: {0}")]
    ParseError(String),

    /// A transaction cannot be converted to its aggregate-inner form.
    #[error("serialize error: {0}")]
    SerializeError(String),

    /// Secure-message encryption or decryption failed.
    #[error("message encryption error: {0}")]
    MessageEncryptionError(String),

    /// A remote node answered with a non-success status.
    #[error("response error ({status}): {message}")]
    Response {
        /// HTTP-like status code returned by the node.
        status: u16,
        /// Body or reason phrase.
        message: String,
    },
}

impl Nem2Error {
    /// The message carried by the error, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::IllegalArgument(m)
            | Self::ParseError(m)
            | Self::SerializeError(m)
            | Self::MessageEncryptionError(m) => m,
            Self::Response { message, .. } => message,
        }
    }

    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        Self::IllegalArgument(message.into())
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Nem2Error>;
