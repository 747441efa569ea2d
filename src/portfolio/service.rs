//! Service entries offered by the freelancer.

use serde::{Deserialize, Serialize};

/// One offered service.
///
/// Identity is the `id` string assigned by the caller at creation time. The
/// store performs no uniqueness check; a duplicate id shadows earlier
/// entries in id-based lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub pricing: Pricing,
    /// Free-text delivery estimate, e.g. "2 weeks".
    pub delivery_time: String,
}

/// Pricing for a service. Serialized with the model under a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(rename = "type")]
    pub kind: PricingKind,
    /// Amount in the user's currency. The store accepts any number; sign
    /// and range checks belong to the form layer.
    pub amount: f64,
}

/// Pricing model: a flat hourly rate or a per-project quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PricingKind {
    Hourly,
    Project,
}

impl std::fmt::Display for PricingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingKind::Hourly => write!(f, "hourly"),
            PricingKind::Project => write!(f, "project"),
        }
    }
}
