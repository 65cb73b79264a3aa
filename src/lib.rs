//! # items-manifest
//!
//! A build-time asset indexer. Drop images into category folders, run the
//! tool, and ship the generated `items_structure.js` so the runtime can list
//! assets without touching the filesystem.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      items/    →  Manifest             (filesystem → category map)
//! 2. Generate  Manifest  →  items_structure.js   (`const itemsStructure = {...};`)
//! ```
//!
//! Scanning is a pure read of the tree; the single write happens in the
//! generate stage, once the whole manifest has been built. A failed scan
//! therefore never leaves a partial file behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the root directory and builds the [`types::Manifest`] |
//! | [`generate`] | Renders the manifest as a JavaScript constant and writes it |
//! | [`naming`] | Category names, the `items` exclusion, image extension matching |
//! | [`types`] | Ordered manifest map and the collision policy |
//! | [`config`] | Optional `items-manifest.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Known Quirk: Name Collisions
//!
//! Categories are keyed by directory name only. With the default
//! [`types::CollisionPolicy::Overwrite`], `items/heroes/` and
//! `items/villains/heroes/` share the `heroes` key and the directory scanned
//! last wins. Existing consumers depend on this, so it stays the default;
//! `collision = "merge"` concatenates the lists instead.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
