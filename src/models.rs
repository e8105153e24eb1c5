use log::warn;
use serde::{Deserialize, Serialize};

/// Describes one candidate update as reported by an update-check endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDescriptor {
    /// Dot-delimited version name, e.g. "1.2.10".
    #[serde(default)]
    pub version_name: String,
    /// Absolute URL of the downloadable package.
    #[serde(default)]
    pub download_url: String,
    /// Expected MD5 of the package content as case-insensitive hex. Empty
    /// means the cached package can never be treated as verified.
    #[serde(default)]
    pub checksum: String,
    /// Base directory the host reserves for cached packages.
    #[serde(default)]
    pub cache_root_dir: String,
}

/// Deserialize a raw update-check response.
///
/// Malformed input is swallowed as `None` so callers treat it as "no result"
/// rather than a fault.
#[must_use]
pub fn parse_update_response(raw: &str) -> Option<UpdateDescriptor> {
    match serde_json::from_str(raw) {
        Ok(descriptor) => Some(descriptor),
        Err(err) => {
            warn!("update response parse error: {err}");
            None
        }
    }
}
