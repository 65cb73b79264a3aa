//! Manifest serialization and output.
//!
//! Renders a [`Manifest`] as a JavaScript constant declaration and writes it
//! to disk. The runtime loads the file as code, so the textual shape is the
//! contract:
//!
//! ```text
//! const itemsStructure = {
//!   "weapons": [
//!     "sword.png"
//!   ],
//!   "armor": []
//! };
//! ```
//!
//! - Two-space indentation, keys in manifest order.
//! - No trailing newline after the `;`.
//! - Non-ASCII characters are written as `\uXXXX` escapes, so the file is
//!   plain ASCII whatever the filenames contain.

use crate::types::Manifest;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the generated JavaScript constant.
pub const IDENTIFIER: &str = "itemsStructure";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the manifest as `const itemsStructure = {...};`.
pub fn serialize(manifest: &Manifest) -> Result<String, GenerateError> {
    let json = serde_json::to_string_pretty(manifest)?;
    Ok(format!("const {IDENTIFIER} = {};", escape_non_ascii(&json)))
}

/// Write generated text to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write(text: &str, path: &Path) -> Result<(), GenerateError> {
    fs::write(path, text)?;
    tracing::info!("wrote {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Replace every non-printable-ASCII char left by serde_json (anything
/// non-ASCII, plus DEL) with its JSON `\uXXXX` escape.
///
/// Only valid on serialized JSON: outside of strings JSON is printable ASCII,
/// so every char rewritten here sits inside a string literal. Chars above the
/// BMP become a UTF-16 surrogate pair.
fn escape_non_ascii(json: &str) -> String {
    if json.bytes().all(|b| b < 0x7f) {
        return json.to_string();
    }
    let mut out = String::with_capacity(json.len() + 16);
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() && c != '\x7f' {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        }
    }
    out
}
