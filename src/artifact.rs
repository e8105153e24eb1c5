use std::path::PathBuf;

use crate::models::UpdateDescriptor;

/// Name used when the download URL does not yield a usable package name.
pub const FALLBACK_PACKAGE_NAME: &str = "temp.apk";

/// Extension every cached update package carries.
pub const PACKAGE_EXTENSION: &str = ".apk";

/// Derive the local file name for a download URL.
///
/// Takes the segment after the last `/`; an empty URL or a segment that does
/// not end with the package extension (query strings, redirect endpoints)
/// falls back to [`FALLBACK_PACKAGE_NAME`].
#[must_use]
pub fn artifact_file_name(download_url: &str) -> String {
    if download_url.is_empty() {
        return FALLBACK_PACKAGE_NAME.to_owned();
    }
    let name = match download_url.rfind('/') {
        Some(idx) => &download_url[idx + 1..],
        None => download_url,
    };
    if name.ends_with(PACKAGE_EXTENSION) {
        name.to_owned()
    } else {
        FALLBACK_PACKAGE_NAME.to_owned()
    }
}

/// Expected on-disk location of the descriptor's package:
/// `cache_root_dir/version_name/file_name`.
///
/// Pure path arithmetic; no I/O happens and no directory is created.
#[must_use]
pub fn artifact_path(descriptor: &UpdateDescriptor) -> PathBuf {
    PathBuf::from(&descriptor.cache_root_dir)
        .join(&descriptor.version_name)
        .join(artifact_file_name(&descriptor.download_url))
}
