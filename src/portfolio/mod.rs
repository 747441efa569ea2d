//! The portfolio data store.
//!
//! This module is the single source of truth for all wizard state: the five
//! entity records, the per-step completion predicates, the derived
//! statistics shown by the preview, and the write-through persistence of the
//! whole snapshot to a storage slot.

pub mod availability;
pub mod profile;
pub mod project;
pub mod service;
pub mod snapshot;
pub mod stats;
pub mod store;
pub mod testimonial;

pub use availability::{Availability, AvailabilitySlot, PreferredCommunication};
pub use profile::{Profile, SocialLinks};
pub use project::Project;
pub use service::{Pricing, PricingKind, Service};
pub use snapshot::Snapshot;
pub use stats::PortfolioStats;
pub use store::PortfolioStore;
pub use testimonial::Testimonial;
