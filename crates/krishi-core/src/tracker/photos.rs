//! Display URLs for photos picked from disk.

use std::path::Path;

use url::Url;

use crate::error::{KrishiError, Result};

/// Returns a `file://` URL for the photo at `path`.
///
/// The path is canonicalized first, so the photo must exist.
pub fn photo_url(path: &Path) -> Result<String> {
    let absolute = path.canonicalize().map_err(|e| KrishiError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| {
            KrishiError::invalid_input("photo")
                .with_reason(format!("cannot build a URL for '{}'", absolute.display()))
        })
}
