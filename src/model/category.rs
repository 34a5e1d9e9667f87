//! Category tree and block descriptor models.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::host::EditorHost;

/// Handler invoked instead of the default flyout when a category declares
/// custom click behavior. Returning `true` means the host fully handled the
/// click and toolbox state must be left untouched.
pub type CustomClick = Arc<dyn Fn(&dyn EditorHost) -> bool + Send + Sync>;

/// An opaque palette item belonging to a category. The toolbox core never
/// inspects the payload; it only counts and forwards these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDescriptor {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl BlockDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            payload: serde_json::Value::Null,
        }
    }
}

/// A named, colored group of palette content.
///
/// Categories form a tree of depth at most two. A subcategory carries its
/// parent's `id` plus its own `subns` namespace, so sibling subcategories
/// under different parents never collide on the composite selection id.
#[derive(Clone, Default)]
pub struct Category {
    pub id: String,
    /// Subcategory namespace; `None` for top-level categories.
    pub subns: Option<String>,
    pub name: Option<String>,
    /// Hex color like "#9e4894". Missing colors fall back to the namespace
    /// default at render time.
    pub color: Option<String>,
    pub icon: Option<String>,
    pub group_labels: Vec<String>,
    pub blocks: Vec<BlockDescriptor>,
    pub subcategories: Vec<Category>,
    /// Advanced categories render inside overflow buckets below the main tree.
    pub advanced: bool,
    /// Raw bucket tag ("1001".."1009"); anything else means the default bucket.
    pub advanced_group: Option<String>,
    pub custom_click: Option<CustomClick>,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Composite id used for selection bookkeeping: `id + subns` for
    /// subcategories, plain `id` otherwise.
    #[must_use]
    pub fn selection_id(&self) -> String {
        match &self.subns {
            Some(subns) => format!("{}{}", self.id, subns),
            None => self.id.clone(),
        }
    }

    /// Label shown on the tree row, falling back to the capitalized
    /// namespace when no display name was declared.
    #[must_use]
    pub fn row_title(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let raw = self.subns.as_deref().unwrap_or(&self.id);
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The overflow bucket this category belongs to, if it is advanced.
    #[must_use]
    pub fn bucket(&self) -> Option<super::AdvancedBucket> {
        self.advanced
            .then(|| super::AdvancedBucket::from_tag(self.advanced_group.as_deref()))
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Category")
            .field("id", &self.id)
            .field("subns", &self.subns)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("icon", &self.icon)
            .field("blocks", &self.blocks.len())
            .field("subcategories", &self.subcategories)
            .field("advanced", &self.advanced)
            .field("advanced_group", &self.advanced_group)
            .field("custom_click", &self.custom_click.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdvancedBucket;

    #[test]
    fn test_selection_id_disambiguates_subcategories() {
        let mut sub = Category::new("robot");
        sub.subns = Some("motors".to_string());
        assert_eq!(sub.selection_id(), "robotmotors");

        let top = Category::new("robot");
        assert_eq!(top.selection_id(), "robot");
    }

    #[test]
    fn test_row_title_falls_back_to_capitalized_namespace() {
        let mut cat = Category::new("loops");
        assert_eq!(cat.row_title(), "Loops");

        cat.name = Some("Boucles".to_string());
        assert_eq!(cat.row_title(), "Boucles");

        let mut sub = Category::new("robot");
        sub.subns = Some("motors".to_string());
        assert_eq!(sub.row_title(), "Motors");
    }

    #[test]
    fn test_bucket_only_for_advanced_categories() {
        let mut cat = Category::new("crypto");
        cat.advanced_group = Some("1008".to_string());
        assert_eq!(cat.bucket(), None);

        cat.advanced = true;
        assert_eq!(cat.bucket(), Some(AdvancedBucket::Cybersecurity));

        cat.advanced_group = None;
        assert_eq!(cat.bucket(), Some(AdvancedBucket::Advanced));
    }
}
