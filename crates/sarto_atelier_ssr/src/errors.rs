//! SSR render errors.

use sarto_carton::CompactString;
use serde::{Deserialize, Serialize};

/// SSR error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SsrErrorCode {
    /// Attribute name that could break out of the tag
    UnsafeAttrName = 1,
    /// Tag name that is not a valid element name
    UnsafeTagName = 2,
}

impl SsrErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnsafeAttrName => "Unsafe attribute name skipped.",
            Self::UnsafeTagName => "Unsafe tag name, only its children were rendered.",
        }
    }
}

/// A problem found while rendering. Rendering always completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SsrError {
    pub code: SsrErrorCode,
    /// The offending tag or attribute name
    pub name: CompactString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(!SsrErrorCode::UnsafeAttrName.message().is_empty());
        assert!(!SsrErrorCode::UnsafeTagName.message().is_empty());
    }
}
