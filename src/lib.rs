//! Decision core for an application self-update client.
//!
//! Given an update-check response describing a candidate update, this crate
//! decides whether the update is worth surfacing and whether its package is
//! already cached and intact on disk, so hosts never re-download what they
//! already have and never re-prompt for a version the user dismissed:
//!
//! - [`version`] orders dotted version names with the comparator the download
//!   pipeline has always used;
//! - [`artifact`] derives the canonical cache location of an update package;
//! - [`integrity`] verifies a cached package against its expected checksum;
//! - [`storage`] persists the single "ignored version" record;
//! - [`checker`] ties the pieces together behind the injected platform
//!   collaborators in [`providers`].
//!
//! Network transport, download scheduling and UI presentation stay with the
//! host.

pub mod artifact;
pub mod checker;
pub mod env;
pub mod integrity;
pub mod models;
pub mod providers;
pub mod storage;
pub mod version;

pub use checker::{UpdateChecker, UpdateDecision};
pub use models::{UpdateDescriptor, parse_update_response};
