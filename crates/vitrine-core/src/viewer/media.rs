use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitrineError};
use crate::track::Card;

/// One image shown by the viewer. Owned by the caller and only read here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Already resolved URI or path of the image.
    pub source: String,
    #[serde(default)]
    pub alt_text: String,
}

impl MediaItem {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }

    /// Alt text, or a generic label when none was provided.
    pub fn label(&self) -> &str {
        if self.alt_text.is_empty() {
            "Gallery image"
        } else {
            &self.alt_text
        }
    }
}

impl Card for MediaItem {
    type Key = String;

    fn key(&self) -> String {
        self.source.clone()
    }
}

/// Ordered, shared, immutable list of media items.
pub type MediaList = Arc<[MediaItem]>;

/// Build a [`MediaList`], rejecting an empty one.
///
/// The viewer itself accepts empty lists (opening one is a no-op); this is
/// for callers that treat an empty gallery as a mistake.
pub fn media_list(items: Vec<MediaItem>) -> Result<MediaList> {
    if items.is_empty() {
        return Err(VitrineError::EmptyMediaList);
    }
    Ok(items.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_falls_back_when_alt_missing() {
        assert_eq!(MediaItem::new("a.jpg", "").label(), "Gallery image");
        assert_eq!(MediaItem::new("a.jpg", "Red bag").label(), "Red bag");
    }

    #[test]
    fn test_media_list_rejects_empty() {
        assert!(matches!(media_list(Vec::new()), Err(VitrineError::EmptyMediaList)));
        assert_eq!(media_list(vec![MediaItem::new("a.jpg", "")]).unwrap().len(), 1);
    }
}
