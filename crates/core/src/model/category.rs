use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of topic categories.
///
/// The declaration order is alphabetical and is the canonical ordering for
/// every category-keyed view (persisted counts, tie-breaking, grids).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Animals,
    Architecture,
    Chemistry,
    Energy,
    Environment,
    Health,
    Music,
    Physics,
    Space,
    Technology,
}

/// Display metadata for a category tile or card header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMetadata {
    pub name: &'static str,
    pub icon: &'static str,
    pub color_token: &'static str,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 10] = [
        Category::Animals,
        Category::Architecture,
        Category::Chemistry,
        Category::Energy,
        Category::Environment,
        Category::Health,
        Category::Music,
        Category::Physics,
        Category::Space,
        Category::Technology,
    ];

    /// Stable identifier used in routes, fact ids, and the persisted record.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Category::Animals => "animals",
            Category::Architecture => "architecture",
            Category::Chemistry => "chemistry",
            Category::Energy => "energy",
            Category::Environment => "environment",
            Category::Health => "health",
            Category::Music => "music",
            Category::Physics => "physics",
            Category::Space => "space",
            Category::Technology => "technology",
        }
    }

    /// Capitalized display name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.metadata().name
    }

    #[must_use]
    pub fn metadata(&self) -> CategoryMetadata {
        match self {
            Category::Animals => CategoryMetadata {
                name: "Animals",
                icon: "🐾",
                color_token: "category--animals",
            },
            Category::Architecture => CategoryMetadata {
                name: "Architecture",
                icon: "🏛️",
                color_token: "category--architecture",
            },
            Category::Chemistry => CategoryMetadata {
                name: "Chemistry",
                icon: "⚗️",
                color_token: "category--chemistry",
            },
            Category::Energy => CategoryMetadata {
                name: "Energy",
                icon: "⚡",
                color_token: "category--energy",
            },
            Category::Environment => CategoryMetadata {
                name: "Environment",
                icon: "🌿",
                color_token: "category--environment",
            },
            Category::Health => CategoryMetadata {
                name: "Health",
                icon: "💚",
                color_token: "category--health",
            },
            Category::Music => CategoryMetadata {
                name: "Music",
                icon: "🎵",
                color_token: "category--music",
            },
            Category::Physics => CategoryMetadata {
                name: "Physics",
                icon: "⚛️",
                color_token: "category--physics",
            },
            Category::Space => CategoryMetadata {
                name: "Space",
                icon: "🚀",
                color_token: "category--space",
            },
            Category::Technology => CategoryMetadata {
                name: "Technology",
                icon: "💻",
                color_token: "category--technology",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Error type for parsing a category from its stable identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError {
    raw: String,
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.raw)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.id() == s)
            .ok_or_else(|| ParseCategoryError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_alphabetical_and_complete() {
        let mut ids: Vec<&str> = Category::ALL.iter().map(Category::id).collect();
        assert_eq!(ids.len(), 10);
        ids.sort_unstable();
        let sorted: Vec<&str> = Category::ALL.iter().map(Category::id).collect();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn id_roundtrips_through_from_str() {
        for category in Category::ALL {
            let parsed: Category = category.id().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_id_fails_to_parse() {
        assert!("history".parse::<Category>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&Category::Space).unwrap();
        assert_eq!(json, "\"space\"");
        let back: Category = serde_json::from_str("\"animals\"").unwrap();
        assert_eq!(back, Category::Animals);
    }
}
