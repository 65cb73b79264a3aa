//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Generate (default command)
//!
//! Exactly one line, so scripts can rely on it:
//!
//! ```text
//! items_structure.js has been generated.
//! ```
//!
//! ## Check
//!
//! ```text
//! Categories
//! 001 heroes (2 images)
//!     a.png
//!     b.png
//! 002 armor (0 images)
//!
//! 2 categories, 2 images in items
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::types::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Confirmation line printed after the manifest file is written.
pub fn format_success(output: &Path) -> String {
    format!("{} has been generated.", output.display())
}

pub fn print_success(output: &Path) {
    println!("{}", format_success(output));
}

/// Format the `check` listing: every category with its items, then totals.
pub fn format_check_output(manifest: &Manifest, root: &Path) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (i, category) in manifest.categories().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            category.name,
            plural(category.items.len(), "image", "images")
        ));
        for item in &category.items {
            lines.push(format!("{}{}", indent(1), item));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {} in {}",
        plural(manifest.len(), "category", "categories"),
        plural(manifest.item_count(), "image", "images"),
        root.display()
    ));
    lines
}

pub fn print_check_output(manifest: &Manifest, root: &Path) {
    for line in format_check_output(manifest, root) {
        println!("{}", line);
    }
}
