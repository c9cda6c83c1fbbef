/**
 * Asset Reconciler
 *
 * Materializes face and evidence images returned by the model service
 * onto local disk, one directory per (user, category). Every
 * reconciliation is a full replace: the previous generation of image
 * files is deleted before the new one is written, so the directory
 * always reflects exactly the most recent response that carried assets.
 *
 * # Failure Policy
 *
 * - Cleanup failures (e.g. a permission error on one stale file) are
 *   logged and skipped; they never abort the write phase.
 * - A decode or write failure aborts the call and surfaces to the
 *   handler. Items already written in the same call stay on disk; the
 *   batch is not transactional.
 *
 * # Isolation
 *
 * Directories are keyed by user identifier and category, which is the
 * sole isolation mechanism. Two concurrent reconciliations for the same
 * user and category can interleave; callers accept that race.
 */

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use thiserror::Error;

/// File extensions treated as image files during cleanup
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Asset categories with a dedicated per-user directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    /// Face crops extracted by the model service
    SavedFaces,
    /// Retrieved memory photos backing a query answer
    Evidence,
}

impl AssetCategory {
    /// Directory name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SavedFaces => "saved_faces",
            Self::Evidence => "evidence",
        }
    }
}

/// One image to materialize: target filename plus encoded payload
#[derive(Debug, Clone)]
pub struct AssetItem {
    /// Target filename (reduced to its final path component)
    pub filename: String,
    /// Base64 payload, optionally prefixed with a data-URI marker
    pub base64_image: String,
}

/// Reconciliation failure modes
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("failed to decode image payload for {filename}: {source}")]
    Decode {
        filename: String,
        source: base64::DecodeError,
    },

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Replace the on-disk asset set for `(user_id, category)` with `items`
///
/// # Arguments
/// * `photos_root` - Root directory for all user photo assets
/// * `user_id` - Owning user identifier (directory key)
/// * `category` - Asset category (second directory key)
/// * `items` - New asset generation, written in order
///
/// # Returns
///
/// Relative paths (`photos/<user_id>/<category>/<filename>`) in the same
/// order as the input items. The frontend resolves these against the
/// static `/photos` mount.
pub async fn reconcile(
    photos_root: &Path,
    user_id: &str,
    category: AssetCategory,
    items: &[AssetItem],
) -> Result<Vec<String>, ReconcileError> {
    let dir = photos_root.join(user_id).join(category.as_str());
    tokio::fs::create_dir_all(&dir).await?;

    remove_existing_images(&dir).await?;

    let mut saved_paths = Vec::with_capacity(items.len());
    for item in items {
        let filename = sanitize_filename(&item.filename);
        let bytes = decode_image(&item.base64_image).map_err(|source| ReconcileError::Decode {
            filename: filename.clone(),
            source,
        })?;

        tokio::fs::write(dir.join(&filename), &bytes).await?;
        saved_paths.push(format!(
            "photos/{}/{}/{}",
            user_id,
            category.as_str(),
            filename
        ));
    }

    tracing::debug!(
        "Reconciled {} asset(s) under {}",
        saved_paths.len(),
        dir.display()
    );

    Ok(saved_paths)
}

/// Delete every image file in the directory
///
/// Listing errors abort; per-file deletion errors are logged and
/// skipped so a single stubborn file cannot block the new generation.
async fn remove_existing_images(dir: &Path) -> Result<(), std::io::Error> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_image_file(&path) {
            continue;
        }
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove stale asset {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Check a path against the known image extensions
fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduce a filename to its final path component
///
/// Upstream filenames are not trusted to be free of path separators.
fn sanitize_filename(filename: &str) -> String {
    PathBuf::from(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string())
}

/// Decode a base64 payload, stripping an optional data-URI prefix
/// (`data:image/<type>;base64,`)
fn decode_image(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = match payload.split_once(";base64,") {
        Some((scheme, rest)) if scheme.starts_with("data:") => rest,
        _ => payload,
    };
    BASE64.decode(data.trim())
}
