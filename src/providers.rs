//! Injected platform collaborators.
//!
//! Each trait carries a single capability so the decision core stays decoupled
//! from any concrete host runtime. Collaborator failures never cross into the
//! core as errors; they surface as neutral defaults.

/// Answers whether a usable network is present.
pub trait NetworkProbe {
    fn is_network_available(&self) -> bool;

    /// Whether the connection is suitable for large downloads (e.g. wifi
    /// rather than a metered link).
    fn is_unmetered(&self) -> bool;
}

/// Reports the version of the currently installed application.
pub trait InstalledVersionProvider {
    /// Lookup failures surface as an empty string, never as an error.
    fn installed_version_name(&self) -> String;
}

/// Probe for hosts without connectivity introspection; reports the network as
/// present and unmetered.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysOnline;

impl NetworkProbe for AlwaysOnline {
    fn is_network_available(&self) -> bool {
        true
    }

    fn is_unmetered(&self) -> bool {
        true
    }
}

/// Version provider fed a known version up front by the host.
#[derive(Clone, Debug, Default)]
pub struct FixedVersion(pub String);

impl InstalledVersionProvider for FixedVersion {
    fn installed_version_name(&self) -> String {
        self.0.clone()
    }
}
