use anyhow::{Context, Result};
use framegen_engine::Download;
use std::path::Path;
use tracing::info;

use crate::presentation::view_models::ExportedFileViewModel;

/// Save downloads into `dir`, replacing files of the same name.
pub fn write_all(dir: &Path, downloads: Vec<Download>) -> Result<Vec<ExportedFileViewModel>> {
    if downloads.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(downloads.len());
    for download in downloads {
        let path = dir.join(&download.filename);
        std::fs::write(&path, &download.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = download.contents.len(), "export written");

        written.push(ExportedFileViewModel {
            filename: download.filename,
            path: path.display().to_string(),
            mime: download.mime.to_string(),
            bytes: download.contents.len(),
        });
    }
    Ok(written)
}
