//! Weekly availability and contact preferences.

use serde::{Deserialize, Serialize};

/// The single availability record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// IANA timezone name or free text; empty until the step is filled in.
    #[serde(default)]
    pub timezone: String,

    /// Open slots, in display order.
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,

    #[serde(default)]
    pub preferred_communication: PreferredCommunication,
}

/// One open slot in the weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// How the freelancer prefers to be contacted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PreferredCommunication {
    #[default]
    Email,
    Call,
    Zoom,
}

impl std::fmt::Display for PreferredCommunication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferredCommunication::Email => write!(f, "email"),
            PreferredCommunication::Call => write!(f, "call"),
            PreferredCommunication::Zoom => write!(f, "zoom"),
        }
    }
}
