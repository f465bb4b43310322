pub mod category;
pub mod keywords;

pub use category::{Category, UnknownCategory};

use keywords::CATEGORY_KEYWORDS;

/// Pick the category whose keyword list has the most hits in `title` and
/// `content`.
///
/// A category's score is the number of its keywords contained anywhere in
/// the lower-cased text, not the number of occurrences. Only a strictly
/// greater score replaces the current best, so ties go to the category
/// declared first. With no hits at all `fallback` is returned unchanged.
pub fn categorize(title: &str, content: &str, fallback: Category) -> Category {
    let haystack = format!("{} {}", title, content).to_lowercase();

    let mut best = fallback;
    let mut max_matches = 0;

    for (category, keywords) in CATEGORY_KEYWORDS {
        let matches = keywords
            .iter()
            .filter(|keyword| haystack.contains(*keyword))
            .count();
        if matches > max_matches {
            max_matches = matches;
            best = category;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_fallback_without_keywords() {
        assert_eq!(
            categorize("", "lorem ipsum dolor", Category::Other),
            Category::Other
        );
        assert_eq!(
            categorize("", "lorem ipsum dolor", Category::News),
            Category::News
        );
    }

    #[test]
    fn test_higher_count_wins() {
        // "show" and "game" are both entertainment keywords, sports only has "game"
        assert_eq!(
            categorize("", "show game", Category::Other),
            Category::Entertainment
        );
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // one hit each for sports and entertainment
        assert_eq!(categorize("", "game", Category::Other), Category::Sports);
        // investment is listed under both business and finance
        assert_eq!(
            categorize("Investment", "", Category::Other),
            Category::Business
        );
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(
            categorize("", "she said hello", Category::Other),
            Category::Technology
        );
    }

    #[test]
    fn test_title_is_part_of_haystack() {
        assert_eq!(
            categorize("Best Pasta RECIPE", "", Category::Other),
            Category::Food
        );
    }

    #[test]
    fn test_counts_distinct_keywords_not_occurrences() {
        // three "travel" hits still count once against two finance keywords
        let text = "travel travel travel money stock";
        assert_eq!(categorize("", text, Category::Other), Category::Finance);
    }

    #[test]
    fn test_deterministic() {
        let title = "Rust programming for the web";
        let content = "A developer community forum sharing code and news updates";
        let first = categorize(title, content, Category::Other);
        for _ in 0..10 {
            assert_eq!(categorize(title, content, Category::Other), first);
        }
    }
}
