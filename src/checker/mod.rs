use std::path::PathBuf;

use log::{debug, info, warn};

use crate::artifact::artifact_path;
use crate::integrity::is_artifact_ready;
use crate::models::{UpdateDescriptor, parse_update_response};
use crate::providers::{InstalledVersionProvider, NetworkProbe};
use crate::storage::{IgnoredVersionStore, PrefStore};
use crate::version::is_newer_version;

/// Outcome of evaluating one update-check result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateDecision {
    /// No usable network; the check was skipped entirely.
    Offline,
    /// The user already dismissed this exact version.
    Ignored { version: String },
    /// The remote version does not exceed the installed one.
    UpToDate,
    /// A newer version is available and its package is already cached and
    /// verified; no download is needed.
    ReadyToInstall {
        descriptor: UpdateDescriptor,
        artifact: PathBuf,
    },
    /// A newer version is available but its package must be downloaded first.
    DownloadRequired { descriptor: UpdateDescriptor },
}

/// Ties the decision pieces together behind injected platform collaborators.
///
/// Every call is synchronous; [`UpdateChecker::evaluate`] may block on file
/// I/O while probing the package cache.
pub struct UpdateChecker<P, V, S> {
    probe: P,
    versions: V,
    ignored: IgnoredVersionStore<S>,
}

impl<P, V, S> UpdateChecker<P, V, S>
where
    P: NetworkProbe,
    V: InstalledVersionProvider,
    S: PrefStore,
{
    pub fn new(probe: P, versions: V, store: S) -> Self {
        Self {
            probe,
            versions,
            ignored: IgnoredVersionStore::new(store),
        }
    }

    /// Record `version` as dismissed so later checks stop offering it.
    pub fn ignore(&self, version: &str) -> Result<(), String> {
        self.ignored.save(version)
    }

    /// Evaluate a raw update-check response.
    ///
    /// `None` means the response could not be understood, which callers can
    /// distinguish from "no update available".
    #[must_use]
    pub fn evaluate_response(&self, raw: &str) -> Option<UpdateDecision> {
        parse_update_response(raw).map(|descriptor| self.evaluate(&descriptor))
    }

    /// Decide what to do about one candidate update.
    pub fn evaluate(&self, descriptor: &UpdateDescriptor) -> UpdateDecision {
        if !self.probe.is_network_available() {
            warn!("update check skipped: no usable network");
            return UpdateDecision::Offline;
        }

        let remote = descriptor.version_name.as_str();
        if self.ignored.is_ignored(remote) {
            info!("update {remote} suppressed: previously dismissed");
            return UpdateDecision::Ignored {
                version: remote.to_owned(),
            };
        }

        let installed = self.versions.installed_version_name();
        if !is_newer_version(remote, &installed) {
            debug!("up to date: remote {remote}, installed {installed}");
            return UpdateDecision::UpToDate;
        }

        if is_artifact_ready(descriptor) {
            let artifact = artifact_path(descriptor);
            info!("update {remote} already cached at {}", artifact.display());
            return UpdateDecision::ReadyToInstall {
                descriptor: descriptor.clone(),
                artifact,
            };
        }

        info!("update {remote} available for download");
        UpdateDecision::DownloadRequired {
            descriptor: descriptor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Mutex;

    use super::*;
    use crate::providers::{AlwaysOnline, FixedVersion};

    struct OfflineProbe;

    impl NetworkProbe for OfflineProbe {
        fn is_network_available(&self) -> bool {
            false
        }

        fn is_unmetered(&self) -> bool {
            false
        }
    }

    #[derive(Default)]
    struct MemoryPrefStore {
        entries: Mutex<HashMap<String, String>>,
    }

    impl PrefStore for MemoryPrefStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    fn checker(
        installed: &str,
    ) -> UpdateChecker<AlwaysOnline, FixedVersion, MemoryPrefStore> {
        UpdateChecker::new(
            AlwaysOnline,
            FixedVersion(installed.into()),
            MemoryPrefStore::default(),
        )
    }

    fn descriptor(version: &str) -> UpdateDescriptor {
        UpdateDescriptor {
            version_name: version.into(),
            download_url: "http://x/y/app.apk".into(),
            checksum: "5eb63bbbe01eeed093cb22bb8f5acdc3".into(),
            cache_root_dir: "/nonexistent".into(),
        }
    }

    #[test]
    fn offline_short_circuits_everything() {
        let checker = UpdateChecker::new(
            OfflineProbe,
            FixedVersion("1.0.0".into()),
            MemoryPrefStore::default(),
        );
        // Even a dismissed version reports Offline first.
        checker.ignore("2.0.0").unwrap();
        assert_eq!(
            checker.evaluate(&descriptor("2.0.0")),
            UpdateDecision::Offline
        );
    }

    #[test]
    fn dismissed_version_is_checked_before_comparison() {
        let checker = checker("1.0.0");
        checker.ignore("2.0.0").unwrap();
        assert_eq!(
            checker.evaluate(&descriptor("2.0.0")),
            UpdateDecision::Ignored {
                version: "2.0.0".into()
            }
        );
        // Other versions still go through the normal flow.
        assert!(matches!(
            checker.evaluate(&descriptor("2.0.1")),
            UpdateDecision::DownloadRequired { .. }
        ));
    }

    #[test]
    fn equal_or_older_remote_is_up_to_date() {
        let checker = checker("1.2.0");
        assert_eq!(
            checker.evaluate(&descriptor("1.2.0")),
            UpdateDecision::UpToDate
        );
        assert_eq!(
            checker.evaluate(&descriptor("1.1.9")),
            UpdateDecision::UpToDate
        );
    }

    #[test]
    fn newer_remote_without_cached_package_requires_download() {
        let checker = checker("1.0.0");
        match checker.evaluate(&descriptor("1.0.1")) {
            UpdateDecision::DownloadRequired { descriptor } => {
                assert_eq!(descriptor.version_name, "1.0.1");
            }
            other => panic!("unexpected decision: {other:?}"),
        }
    }

    #[test]
    fn verified_cached_package_skips_the_download() {
        let tmp = tempfile::tempdir().unwrap();
        let version_dir = tmp.path().join("2.0");
        fs::create_dir_all(&version_dir).unwrap();
        fs::write(version_dir.join("app.apk"), b"hello world").unwrap();

        let mut candidate = descriptor("2.0");
        candidate.cache_root_dir = tmp.path().display().to_string();

        let checker = checker("1.0.0");
        match checker.evaluate(&candidate) {
            UpdateDecision::ReadyToInstall { artifact, .. } => {
                assert_eq!(artifact, version_dir.join("app.apk"));
            }
            other => panic!("unexpected decision: {other:?}"),
        }
    }

    #[test]
    fn response_evaluation_reports_undecidable_input() {
        let checker = checker("1.0.0");
        assert!(checker.evaluate_response("{ not json").is_none());

        let decision = checker
            .evaluate_response(r#"{"version_name": "0.1.0"}"#)
            .expect("well-formed response evaluates");
        assert_eq!(decision, UpdateDecision::UpToDate);
    }
}
