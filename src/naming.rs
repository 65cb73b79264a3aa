//! Name rules shared by the scanner: how a directory becomes a category and
//! which filenames count as items.
//!
//! ## Categories
//!
//! A category is the last path segment of a visited directory:
//! - `items/weapons/` → `"weapons"`
//! - `items/villains/heroes/` → `"heroes"` (parents are not part of the key)
//! - `items/` → excluded, see [`EXCLUDED_CATEGORY`]
//!
//! ## Items
//!
//! A file is an item when its lowercased name ends with one of the configured
//! extensions (default [`DEFAULT_EXTENSIONS`]). `Sword.PNG` matches `.png`.

use std::path::{Component, Path};

/// Directory name that never becomes a category, at any depth.
/// Its subdirectories are still walked.
pub const EXCLUDED_CATEGORY: &str = "items";

/// Image extensions indexed when no override is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// Derive the category name for a directory path.
///
/// Uses the final path segment. Paths without a normal final segment
/// (`.`, `..`, `/`) fall back to that segment's literal text.
pub fn category_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next_back() {
        Some(Component::RootDir) | None => path.to_string_lossy().into_owned(),
        Some(c) => c.as_os_str().to_string_lossy().into_owned(),
    }
}

/// Whether a directory with this category name is recorded in the manifest.
pub fn is_recorded_category(name: &str) -> bool {
    name != EXCLUDED_CATEGORY
}

/// Case-insensitive suffix match of `filename` against `extensions`.
///
/// Extensions are compared with their leading dot, so `"png"` with no dot
/// never matches `"png"` the filename.
pub fn is_item_filename<S: AsRef<str>>(filename: &str, extensions: &[S]) -> bool {
    let lower = filename.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.as_ref().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_last_segment() {
        assert_eq!(category_name(Path::new("items/weapons")), "weapons");
        assert_eq!(category_name(Path::new("items/villains/heroes")), "heroes");
    }

    #[test]
    fn category_ignores_trailing_slash() {
        assert_eq!(category_name(Path::new("items/weapons/")), "weapons");
    }

    #[test]
    fn category_of_current_dir_is_dot() {
        assert_eq!(category_name(Path::new(".")), ".");
    }

    #[test]
    fn category_of_filesystem_root() {
        assert_eq!(category_name(Path::new("/")), "/");
    }

    #[test]
    fn items_is_not_recorded() {
        assert!(!is_recorded_category("items"));
        assert!(is_recorded_category("Items"));
        assert!(is_recorded_category("weapons"));
    }

    #[test]
    fn default_extensions_match() {
        for name in ["a.png", "b.jpg", "c.jpeg", "d.gif"] {
            assert!(is_item_filename(name, DEFAULT_EXTENSIONS), "{name}");
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_item_filename("Sword.PNG", DEFAULT_EXTENSIONS));
        assert!(is_item_filename("shield.JpEg", DEFAULT_EXTENSIONS));
    }

    #[test]
    fn non_images_rejected() {
        for name in ["notes.txt", "layers.psd", "sprite.webp", "png", "gif"] {
            assert!(!is_item_filename(name, DEFAULT_EXTENSIONS), "{name}");
        }
    }

    #[test]
    fn dotfile_named_like_extension_matches() {
        // Suffix rule, not an extension parse.
        assert!(is_item_filename(".png", DEFAULT_EXTENSIONS));
    }

    #[test]
    fn custom_extension_list() {
        let exts = vec![".webp".to_string()];
        assert!(is_item_filename("a.WEBP", &exts));
        assert!(!is_item_filename("a.png", &exts));
    }
}
