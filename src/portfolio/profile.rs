//! The freelancer profile record.

use serde::{Deserialize, Serialize};

/// The single profile record filled in by the first wizard step.
///
/// The three required text fields default to empty strings, never to an
/// absent value; emptiness is what the completion predicate tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Opaque reference to an avatar image, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Display name. Required for the profile step to count as complete.
    #[serde(default)]
    pub full_name: String,

    /// Short tagline shown under the name. Also required for completion.
    #[serde(default)]
    pub tagline: String,

    /// Free-text location.
    #[serde(default)]
    pub location: String,

    /// Optional social profile URLs.
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Named social link slots. Absent links are omitted from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
