//! Filesystem scanning and manifest building.
//!
//! Walks an asset tree and records, for every directory, the image files it
//! directly contains:
//!
//! ```text
//! items/                     # Root (named `items`, so not a category)
//! ├── weapons/               # "weapons": ["sword.png"]
//! │   ├── sword.png
//! │   └── notes.txt          # Not an image, leaves no trace
//! ├── armor/                 # "armor": [] (empty dirs still get a key)
//! └── villains/              # "villains": []
//!     └── heroes/            # "heroes": ["b.png"]
//!         └── b.png
//! ```
//!
//! ## Rules
//!
//! - Every directory is visited, the root included, parent before children.
//! - The category is the directory's own name; `items` is never a category,
//!   but its subdirectories are still walked.
//! - Only the directory's immediate files are listed, in listing order.
//! - Same-named directories collide on one key; see [`CollisionPolicy`].
//!
//! A root that does not exist yields an empty manifest. Any other I/O error,
//! including permission errors below the root, aborts the scan.

use crate::naming::{self, DEFAULT_EXTENSIONS};
use crate::types::{CollisionPolicy, Manifest};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Knobs for a scan. [`ScanOptions::default`] reproduces the stock behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub collision: CollisionPolicy,
    /// Sort directory and file listings by name instead of using the
    /// filesystem's listing order.
    pub sorted: bool,
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::default(),
            sorted: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Build the manifest for `root` with default options.
pub fn build(root: &Path) -> Result<Manifest, ScanError> {
    build_with(root, &ScanOptions::default())
}

/// Build the manifest for `root`.
///
/// Reads the filesystem only; nothing is written.
pub fn build_with(root: &Path, options: &ScanOptions) -> Result<Manifest, ScanError> {
    let mut manifest = Manifest::new();

    let mut walker = WalkDir::new(root);
    if options.sorted {
        walker = walker.sort_by_file_name();
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_missing_root(&err) => {
                tracing::debug!("root {} does not exist, nothing to index", root.display());
                break;
            }
            Err(err) => return Err(err.into()),
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        let category = naming::category_name(dir);
        if !naming::is_recorded_category(&category) {
            tracing::debug!("skipping {} (excluded category name)", dir.display());
            continue;
        }

        let items = list_items(dir, options)?;
        tracing::debug!(
            "{} -> {} ({} items)",
            dir.display(),
            category,
            items.len()
        );
        manifest.insert(category, items, options.collision);
    }

    Ok(manifest)
}

/// A missing root is reported by walkdir as a depth-0 `NotFound` error.
fn is_missing_root(err: &walkdir::Error) -> bool {
    err.depth() == 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// Image filenames directly inside `dir`.
///
/// Anything that is not a directory counts as a file, so symlinks to files
/// and dangling symlinks are matched by name like regular files.
fn list_items(dir: &Path, options: &ScanOptions) -> Result<Vec<String>, ScanError> {
    let mut items = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if naming::is_item_filename(&name, &options.extensions) {
            items.push(name);
        }
    }
    if options.sorted {
        items.sort();
    }
    Ok(items)
}
