//! Per-category style rules derived from color metadata.
//!
//! A pure projection with no state: each colored category yields a rule the
//! host can use to style inline block references outside the toolbox (the
//! flyout, docs, tutorials). Colorless categories yield nothing.

use crate::model::Category;
use crate::utils::color::fade;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStyleRule {
    pub category_id: String,
    pub background: String,
    pub border: String,
}

#[must_use]
pub fn style_rules(categories: &[Category]) -> Vec<CategoryStyleRule> {
    categories
        .iter()
        .filter_map(|category| {
            let color = category.color.as_deref()?;
            Some(CategoryStyleRule {
                category_id: category.id.to_lowercase(),
                background: color.to_string(),
                border: fade(color, 0.1, false),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorless_categories_are_skipped() {
        let mut a = Category::new("Loops");
        a.color = Some("#107c10".to_string());
        let b = Category::new("plain");

        let rules = style_rules(&[a, b]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].category_id, "loops");
        assert_eq!(rules[0].background, "#107c10");
        // Border is the background faded slightly toward white
        assert_ne!(rules[0].border, rules[0].background);
    }
}
