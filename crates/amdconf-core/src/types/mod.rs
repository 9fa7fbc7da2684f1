//! Canonical configuration model.
//!
//! This module provides the entities every accepted document shape decodes to:
//! - Path aliases
//! - Shim entries for scripts that do not declare their own dependencies
//! - Bundles and bundle items
//! - The configuration collection that owns all of them

pub mod bundle;
pub mod collection;
pub mod path;
pub mod shim;

// Re-export all public types
pub use bundle::{Bundle, BundleItem};
pub use collection::{
    AutoBundle, AutoBundleItem, CollectionOverride, ConfigurationCollection, MapElement,
    MapReplacement,
};
pub use path::PathAlias;
pub use shim::ShimEntry;
