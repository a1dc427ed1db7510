//! Browser file glue for photo staging.
//!
//! SYSTEM CONTEXT
//! ==============
//! The file picker and the drop zone both hand over a `FileList`. Each file
//! that fits becomes a `StagedImage` with an object URL for its thumbnail; the
//! URL is revoked when the photo leaves the staging area.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::state::staging::StagedImage;

/// Convert up to `limit` files into staged images.
///
/// Files past `limit` are not touched, so no object URL is created for
/// photos the staging area would drop anyway.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stage_file_list(files: &web_sys::FileList, limit: usize) -> Vec<StagedImage> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .take(limit)
        .map(|file| {
            let preview = web_sys::Url::create_object_url_with_blob(&file).ok();
            StagedImage::new(file.name(), file.size() as u64, preview)
        })
        .collect()
}

/// Release the browser resources held by a removed photo.
pub fn release(image: &StagedImage) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(url) = image.preview_url.as_deref() {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
    }
}

/// Human-readable file size for thumbnails.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}
