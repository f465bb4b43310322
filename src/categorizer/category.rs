use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topical bucket assigned to a captured page.
///
/// Declaration order matters: it is the order keyword scores are compared
/// in, so an earlier variant wins a tie.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Sports,
    Entertainment,
    Health,
    Science,
    Education,
    Finance,
    Travel,
    Food,
    Lifestyle,
    News,
    Shopping,
    Social,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Technology,
        Category::Business,
        Category::Sports,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Education,
        Category::Finance,
        Category::Travel,
        Category::Food,
        Category::Lifestyle,
        Category::News,
        Category::Shopping,
        Category::Social,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Science => "science",
            Category::Education => "education",
            Category::Finance => "finance",
            Category::Travel => "travel",
            Category::Food => "food",
            Category::Lifestyle => "lifestyle",
            Category::News => "news",
            Category::Shopping => "shopping",
            Category::Social => "social",
            Category::Other => "other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
