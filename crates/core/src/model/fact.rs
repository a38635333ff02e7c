use std::fmt;

use crate::model::Category;

/// Unique identifier for a Fact, stable across catalog revisions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactId(String);

impl FactId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FactId({})", self.0)
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of media attached to a fact card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Optional media reference shown alongside a fact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub url: String,
}

/// One fact card: the unit of content in the feed.
///
/// Facts are read-only catalog records; the progress core only consumes
/// `id` and `category` when attributing a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    id: FactId,
    category: Category,
    text: String,
    media: Option<MediaRef>,
    source: String,
    source_url: Option<String>,
    fact_number: u32,
}

impl Fact {
    #[must_use]
    pub fn new(
        id: FactId,
        category: Category,
        text: impl Into<String>,
        source: impl Into<String>,
        fact_number: u32,
    ) -> Self {
        Self {
            id,
            category,
            text: text.into(),
            media: None,
            source: source.into(),
            source_url: None,
            fact_number,
        }
    }

    /// Attach a link for the source label.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Attach a media reference.
    #[must_use]
    pub fn with_media(mut self, kind: MediaKind, url: impl Into<String>) -> Self {
        self.media = Some(MediaRef {
            kind,
            url: url.into(),
        });
        self
    }

    #[must_use]
    pub fn id(&self) -> &FactId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Position of the fact within its category, starting at 1.
    #[must_use]
    pub fn fact_number(&self) -> u32 {
        self.fact_number
    }
}
