//! Category classification for breakdown entries. Maps a free-text category
//! label to a semantic tag that selects a display icon in the front-end.
//! Display only: tags never feed back into parsing or totals.

use serde::{Deserialize, Serialize};

/// Semantic tag for a breakdown category label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryTag {
    Lodging,
    Food,
    Transport,
    Activities,
    #[default]
    Generic,
}

impl CategoryTag {
    /// Icon name rendered by the front-end for this tag.
    pub fn icon(&self) -> &'static str {
        match self {
            CategoryTag::Lodging => "home",
            CategoryTag::Food => "utensils",
            CategoryTag::Transport => "car",
            CategoryTag::Activities => "sparkles",
            CategoryTag::Generic => "dollar-sign",
        }
    }
}

/// Ordered rule table. First row whose needles match wins.
const CATEGORY_RULES: &[(&[&str], CategoryTag)] = &[
    (&["stay", "hotel", "accommodation"], CategoryTag::Lodging),
    (&["food", "meal", "dining"], CategoryTag::Food),
    (&["transport", "travel", "flight"], CategoryTag::Transport),
    (&["activit", "entertainment"], CategoryTag::Activities),
];

/// Classifies a category label. Pure and total: case-insensitive substring
/// match over [`CATEGORY_RULES`], falling back to `Generic`.
pub fn classify(label: &str) -> CategoryTag {
    let lower = label.to_lowercase();
    for (needles, tag) in CATEGORY_RULES {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return *tag;
        }
    }
    CategoryTag::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lodging_labels() {
        assert_eq!(classify("Hotel Accommodation"), CategoryTag::Lodging);
        assert_eq!(classify("Homestay"), CategoryTag::Lodging);
        assert_eq!(classify("Where to stay"), CategoryTag::Lodging);
    }

    #[test]
    fn test_food_labels() {
        assert_eq!(classify("Street Food"), CategoryTag::Food);
        assert_eq!(classify("Meals"), CategoryTag::Food);
        assert_eq!(classify("Fine Dining"), CategoryTag::Food);
    }

    #[test]
    fn test_transport_labels() {
        assert_eq!(classify("Local Transport"), CategoryTag::Transport);
        assert_eq!(classify("Flights"), CategoryTag::Transport);
        assert_eq!(classify("Travel passes"), CategoryTag::Transport);
    }

    #[test]
    fn test_activities_labels() {
        assert_eq!(classify("Activities"), CategoryTag::Activities);
        assert_eq!(classify("Activity passes"), CategoryTag::Activities);
        assert_eq!(classify("Entertainment"), CategoryTag::Activities);
    }

    #[test]
    fn test_unmatched_label_is_generic() {
        assert_eq!(classify("Random"), CategoryTag::Generic);
        assert_eq!(classify(""), CategoryTag::Generic);
        assert_eq!(classify("Miscellaneous fees"), CategoryTag::Generic);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("HOTEL"), CategoryTag::Lodging);
        assert_eq!(classify("fLiGhTs"), CategoryTag::Transport);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both the Lodging and Food rows; Lodging is listed first.
        assert_eq!(classify("Hotel meal plan"), CategoryTag::Lodging);
        // Matches both Food and Transport; Food is listed first.
        assert_eq!(classify("Food during travel"), CategoryTag::Food);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let label = "Airport transfers";
        assert_eq!(classify(label), classify(label));
    }

    #[test]
    fn test_every_tag_has_an_icon() {
        for tag in [
            CategoryTag::Lodging,
            CategoryTag::Food,
            CategoryTag::Transport,
            CategoryTag::Activities,
            CategoryTag::Generic,
        ] {
            assert!(!tag.icon().is_empty());
        }
    }

    #[test]
    fn test_default_tag_is_generic() {
        assert_eq!(CategoryTag::default(), CategoryTag::Generic);
    }
}
