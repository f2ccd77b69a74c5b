/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the collection and the UI layer.

use image::RgbImage;
use std::fmt;

/// Stable identifier for a record, unique for the process lifetime.
///
/// Widgets bind to this rather than to a position, so removing one
/// image never redirects a click meant for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub(crate) u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One collected image plus its display name
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub id: RecordId,
    /// Always opaque RGB (see `color::flatten_to_rgb`)
    pub image: RgbImage,
    /// User-facing name, never empty
    pub name: String,
}

/// Default name for the record at 1-based position `sequence`
pub fn default_name(sequence: usize) -> String {
    format!("image_{:03}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_padding() {
        assert_eq!(default_name(1), "image_001");
        assert_eq!(default_name(42), "image_042");
        assert_eq!(default_name(1234), "image_1234");
    }
}
