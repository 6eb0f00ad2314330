use core::str::FromStr;
use serde::{Deserialize, Serialize};

use homestock_core::{DomainError, DomainResult};

/// Closed set of categories an item can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Food,
    Clothing,
    Books,
    Tools,
    Furniture,
    Sports,
    Kitchen,
    Office,
    Other,
}

/// Badge color used when displaying a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Green,
    Purple,
    Yellow,
    Red,
    Gray,
}

impl Category {
    /// Every category, in the order a picker presents them.
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Food,
        Category::Clothing,
        Category::Books,
        Category::Tools,
        Category::Furniture,
        Category::Sports,
        Category::Kitchen,
        Category::Office,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Tools => "Tools",
            Category::Furniture => "Furniture",
            Category::Sports => "Sports",
            Category::Kitchen => "Kitchen",
            Category::Office => "Office",
            Category::Other => "Other",
        }
    }

    /// Total mapping: only five categories have a dedicated color, the rest share gray.
    pub fn badge_color(self) -> BadgeColor {
        match self {
            Category::Electronics => BadgeColor::Blue,
            Category::Food => BadgeColor::Green,
            Category::Clothing => BadgeColor::Purple,
            Category::Books => BadgeColor::Yellow,
            Category::Tools => BadgeColor::Red,
            Category::Furniture
            | Category::Sports
            | Category::Kitchen
            | Category::Office
            | Category::Other => BadgeColor::Gray,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> DomainResult<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {wanted:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_display_name() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" kitchen ".parse::<Category>().unwrap(), Category::Kitchen);
        assert_eq!("TOOLS".parse::<Category>().unwrap(), Category::Tools);
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        for input in ["Garden", "", "   "] {
            match input.parse::<Category>().unwrap_err() {
                DomainError::Validation(msg) => assert!(msg.contains("unknown category")),
                other => panic!("Expected Validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn badge_color_covers_uncolored_categories_with_gray() {
        assert_eq!(Category::Electronics.badge_color(), BadgeColor::Blue);
        assert_eq!(Category::Tools.badge_color(), BadgeColor::Red);
        assert_eq!(Category::Kitchen.badge_color(), BadgeColor::Gray);
        assert_eq!(Category::Other.badge_color(), BadgeColor::Gray);
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Furniture).unwrap();
        assert_eq!(json, "\"Furniture\"");
    }
}
