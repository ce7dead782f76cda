//! Local file naming for assets.

use crate::error::{Error, Result};

/// Build the local file name `<asset_id>-<basename>`.
///
/// Rejects parts that could escape the output directory and replaces characters that
/// are not portable across filesystems with `_`.
pub fn asset_file_name(asset_id: &str, basename: &str) -> Result<String> {
    for part in [asset_id, basename] {
        if part.trim().is_empty() {
            return Err(Error::InvalidFilename(format!(
                "Empty path segment in '{}-{}'",
                asset_id, basename
            )));
        }
    }

    sanitize_filename(&format!("{}-{}", asset_id, basename))
}

/// Validate a single filename and replace non-portable characters.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let reason = if name.contains("..") {
        Some("path traversal")
    } else if name.contains(['/', '\\']) {
        Some("path separator")
    } else if name.contains('\0') {
        Some("null byte")
    } else {
        None
    };

    if let Some(reason) = reason {
        return Err(Error::InvalidFilename(format!("{} in '{}'", reason, name)));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename("empty filename".to_string()));
    }

    Ok(sanitized)
}
