//! The persisted portfolio snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Availability, Profile, Project, Service, Testimonial};

/// The full serialized state of all five entities plus the persist stamp,
/// exactly as stored in the durable slot.
///
/// Every field carries a serde default so that payloads written by older
/// builds, or hand-edited ones with fields removed, still decode: a missing
/// field merges in as its empty default rather than failing the whole load.
/// There is deliberately no version field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Profile,

    #[serde(default)]
    pub services: Vec<Service>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub testimonials: Vec<Testimonial>,

    #[serde(default)]
    pub availability: Availability,

    /// When the snapshot was written. Stamped by the store on every save.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
