use crate::categorizer::Category;

/// Keyword lists for every category except `Other`, in tie-break order.
///
/// Matching is plain substring containment on lower-cased text, so short
/// entries like "ai" or "tv" also hit inside longer words.
pub const CATEGORY_KEYWORDS: [(Category, &[&str]); 14] = [
    (
        Category::Technology,
        &[
            "tech",
            "software",
            "computer",
            "programming",
            "code",
            "developer",
            "ai",
            "machine learning",
        ],
    ),
    (
        Category::Business,
        &[
            "business",
            "startup",
            "entrepreneur",
            "investment",
            "marketing",
            "sales",
            "revenue",
        ],
    ),
    (
        Category::Sports,
        &[
            "sports",
            "football",
            "basketball",
            "soccer",
            "tennis",
            "game",
            "team",
            "player",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie",
            "music",
            "game",
            "celebrity",
            "film",
            "tv",
            "show",
            "entertainment",
        ],
    ),
    (
        Category::Health,
        &[
            "health", "fitness", "medical", "diet", "exercise", "wellness", "doctor",
        ],
    ),
    (
        Category::Science,
        &[
            "science",
            "research",
            "study",
            "discovery",
            "experiment",
            "scientific",
        ],
    ),
    (
        Category::Education,
        &[
            "education",
            "learning",
            "course",
            "university",
            "school",
            "student",
            "study",
        ],
    ),
    (
        Category::Finance,
        &[
            "finance",
            "money",
            "investment",
            "stock",
            "market",
            "economy",
            "financial",
        ],
    ),
    (
        Category::Travel,
        &[
            "travel",
            "vacation",
            "trip",
            "destination",
            "hotel",
            "flight",
            "tourism",
        ],
    ),
    (
        Category::Food,
        &[
            "food",
            "recipe",
            "restaurant",
            "cooking",
            "meal",
            "cuisine",
            "chef",
        ],
    ),
    (
        Category::Lifestyle,
        &["lifestyle", "fashion", "beauty", "home", "design", "culture"],
    ),
    (
        Category::News,
        &["news", "breaking", "report", "update", "headline", "current"],
    ),
    (
        Category::Shopping,
        &["shop", "buy", "product", "price", "sale", "discount", "store"],
    ),
    (
        Category::Social,
        &[
            "social",
            "community",
            "forum",
            "discussion",
            "share",
            "connect",
        ],
    ),
];
