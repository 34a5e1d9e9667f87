//! Blockpalette - a terminal category navigator for block palettes
//!
//! This library implements the category tree (the "toolbox") of a visual
//! block editor as a self-contained terminal component: selection and
//! expansion bookkeeping, advanced overflow buckets, debounced block
//! search, and a crash-contained render path. The embedding editor is
//! reached through the [`host::EditorHost`] seam; a demo surface under
//! [`ui::renderer`] shows the full wiring.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`host`] - Seam to the embedding editor (flyout, search index)
//! * [`model`] - Categories, block descriptors, and overflow buckets
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Color math and other helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Host editor seam: flyout control and the async block search
pub mod host;

/// Icon glyphs and namespace color defaults
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Category tree, block descriptors, and advanced bucket models
pub mod model;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for color handling and other helpers
pub mod utils;

// Re-export the model types most embedders need
pub use model::{AdvancedBucket, BlockDescriptor, Category};
