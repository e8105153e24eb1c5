use std::env;
use std::path::PathBuf;

/// Root data directory used when the host does not supply one (mirrors the
/// platform's per-user application data conventions).
#[must_use]
pub fn default_app_dir() -> PathBuf {
    let base = match env::consts::OS {
        "windows" => env::var_os("LOCALAPPDATA")
            .or_else(|| env::var_os("APPDATA"))
            .map(PathBuf::from),
        "macos" => env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join("Library").join("Application Support")),
        _ => env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(".local").join("share")),
    }
    .unwrap_or_else(|| PathBuf::from("."));

    base.join("updatekit")
}

/// Default root for cached update packages. The directory is not created
/// here; hosts that download into it are expected to prepare it first.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    default_app_dir().join("cache")
}
