//! Data model for the palette tree: categories, blocks, and the fixed set of
//! advanced overflow buckets.

pub mod buckets;
pub mod category;

pub use buckets::{AdvancedBucket, AdvancedVisibility};
pub use category::{BlockDescriptor, Category, CustomClick};
