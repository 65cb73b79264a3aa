//! Shared test utilities for the items-manifest test suite.
//!
//! Trees are built on the fly inside a `TempDir` rather than copied from a
//! fixture directory, since the scanner only looks at names:
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let root = tmp.path().join("items");
//! touch(&root, &["weapons/sword.png", "weapons/notes.txt"]);
//!
//! let manifest = build(&root).unwrap();
//! assert_eq!(item_names(&manifest, "weapons"), vec!["sword.png"]);
//! ```

use std::path::Path;

use crate::types::Manifest;

// =========================================================================
// Tree setup
// =========================================================================

/// Create empty files at each relative path under `root`, creating parent
/// directories as needed. File contents are irrelevant to the scanner.
pub fn touch(root: &Path, files: &[&str]) {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, b"").unwrap();
    }
}

// =========================================================================
// Manifest lookups (panic with a clear message on miss)
// =========================================================================

/// Item filenames of a category. Panics if the category is missing.
pub fn item_names<'a>(manifest: &'a Manifest, category: &str) -> Vec<&'a str> {
    manifest
        .get(category)
        .map(|items| items.iter().map(String::as_str).collect())
        .unwrap_or_else(|| {
            let names = manifest.names();
            panic!("category '{category}' not found. Available: {names:?}")
        })
}

/// Every item filename across all categories, in manifest order.
pub fn all_items(manifest: &Manifest) -> Vec<&str> {
    manifest
        .categories()
        .iter()
        .flat_map(|c| c.items.iter().map(String::as_str))
        .collect()
}
