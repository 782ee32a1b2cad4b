use std::path::{Path, PathBuf};

use imgfetch_engine::key::validate_key;

use crate::error::AppError;

const MAX_STEM_LEN: usize = 30;

/// Creates `path` and any missing parents.
#[inline]
pub async fn create_dirs(path: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(path).await.map_err(AppError::Io)
}

/// Builds the PNG path for the `index`-th URL inside `dir`.
///
/// The stem is the last path segment of the URL without its extension,
/// reduced to filename-safe characters and truncated; `image` is used when
/// nothing usable is left.
pub fn output_path(dir: &Path, url_str: &str, index: usize) -> Result<PathBuf, AppError> {
    let url = validate_key(url_str).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let file_name = url
        .path_segments()
        .and_then(|mut s| s.next_back())
        .unwrap_or_default();

    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    };

    let mut stem: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .take(MAX_STEM_LEN)
        .collect();
    if stem.is_empty() {
        stem.push_str("image");
    }

    Ok(dir.join(format!("{index:03}_{stem}.png")))
}
