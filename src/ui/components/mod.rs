//! Toolbox building blocks: input routing, the search box, and the
//! presentational tree leaves.

pub mod category_item;
pub mod toolbox_search;
pub mod toolbox_style;
pub mod trash_icon;
pub mod tree;
pub mod tree_row;

pub use category_item::{CategoryItem, InputContext};
pub use toolbox_search::ToolboxSearch;
pub use toolbox_style::{style_rules, CategoryStyleRule};
pub use trash_icon::ToolboxTrashIcon;
pub use tree::{TreeGroup, TreeItem, TreeSeparator};
pub use tree_row::TreeRow;
