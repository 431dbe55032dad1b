use alloc::string::String;

use thiserror::Error;

/// Error raised when a codec is constructed for an encoding it does not
/// support.
///
/// This is the only error in the crate: decoding and encoding never fail,
/// they substitute or skip malformed input instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The requested label is not one of the accepted UTF-8 aliases.
    #[error("unsupported encoding `{0}`")]
    UnsupportedEncoding(String),
}
