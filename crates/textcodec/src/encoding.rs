//! Encoding labels.
//!
//! Only UTF-8 is supported. A label is matched exactly (case-sensitive)
//! against [`UTF8_LABELS`]; anything else is rejected at construction time.

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::error::EncodingError;

/// Labels accepted as naming UTF-8.
pub const UTF8_LABELS: [&str; 3] = ["unicode-1-1-utf-8", "utf-8", "utf8"];

/// The text encodings a codec can be constructed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8, the only supported encoding.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "utf-8"))]
    Utf8,
}

impl Encoding {
    /// Resolves an encoding label.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::UnsupportedEncoding`] if `label` is not one of
    /// [`UTF8_LABELS`]. Matching is exact, so `"UTF-8"` is rejected.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        if UTF8_LABELS.contains(&label) {
            Ok(Encoding::Utf8)
        } else {
            Err(EncodingError::UnsupportedEncoding(label.to_string()))
        }
    }

    /// The canonical name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
        }
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
