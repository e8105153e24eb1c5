use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::artifact::artifact_path;
use crate::models::UpdateDescriptor;

/// Compute the MD5 of a file's content as lowercase hex, streaming in 8 KiB
/// chunks. MD5 is pinned here because the download pipeline publishes MD5
/// checksums; it is used for integrity only.
///
/// Any read failure collapses to `None`; an unreadable file and a missing one
/// are indistinguishable at this layer.
#[must_use]
pub fn file_md5(path: &Path) -> Option<String> {
    let mut file = File::open(path).ok()?;
    let mut context = md5::Context::new();
    let mut buf = [0u8; 8192];
    loop {
        let read = file.read(&mut buf).ok()?;
        if read == 0 {
            break;
        }
        context.consume(&buf[..read]);
    }
    Some(format!("{:x}", context.compute()))
}

/// Whether the descriptor's package is already on disk with the expected
/// content, so a download can be skipped.
///
/// True only if the descriptor carries a checksum, the file exists at
/// [`artifact_path`] and its MD5 matches case-insensitively. Blocks the
/// calling thread for as long as hashing the file takes.
#[must_use]
pub fn is_artifact_ready(descriptor: &UpdateDescriptor) -> bool {
    if descriptor.checksum.is_empty() {
        return false;
    }
    let path = artifact_path(descriptor);
    if !path.exists() {
        return false;
    }
    match file_md5(&path) {
        Some(actual) => {
            let matches = actual.eq_ignore_ascii_case(&descriptor.checksum);
            if !matches {
                debug!(
                    "cached package rejected: expected {}, got {actual}",
                    descriptor.checksum
                );
            }
            matches
        }
        None => false,
    }
}
