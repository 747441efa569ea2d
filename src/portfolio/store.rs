//! The portfolio store.
//!
//! Single source of truth for the wizard: holds the five entity records,
//! answers the per-step completion predicates, derives the preview
//! statistics, and writes the full snapshot through to the storage slot
//! after every mutation.

use chrono::{DateTime, Utc};

use crate::error::{FolioError, Result};
use crate::storage::StorageSlot;

use super::{
    Availability, PortfolioStats, Profile, Project, Service, Snapshot, Testimonial,
};

/// All wizard state plus its persistence handle.
///
/// One store is constructed per session via [`PortfolioStore::open`], which
/// loads any previously saved snapshot. Every mutator persists the whole
/// snapshot before returning (write-through, no batching). Reads hand out
/// borrows; mutators take fully-formed owned entities with caller-assigned
/// ids.
///
/// Known looseness, kept for parity with the wizard forms that grew around
/// it: `update_*` on an id that is not present is a silent no-op, and
/// duplicate ids are accepted unchecked (the first match shadows the rest
/// in id lookups).
pub struct PortfolioStore {
    profile: Profile,
    services: Vec<Service>,
    projects: Vec<Project>,
    testimonials: Vec<Testimonial>,
    availability: Availability,
    last_updated: Option<DateTime<Utc>>,
    draft_saved: bool,
    slot: Box<dyn StorageSlot>,
}

impl PortfolioStore {
    /// Open the store, loading any previously saved snapshot from the slot.
    ///
    /// An absent, unreadable, or undecodable snapshot degrades to empty
    /// defaults; opening never fails.
    pub fn open(slot: Box<dyn StorageSlot>) -> Self {
        let mut store = Self {
            profile: Profile::default(),
            services: Vec::new(),
            projects: Vec::new(),
            testimonials: Vec::new(),
            availability: Availability::default(),
            last_updated: None,
            draft_saved: false,
            slot,
        };
        store.load_saved_data();
        store
    }

    // --- Read Access ---

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// When the snapshot was last persisted, if ever.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// True once any mutation or load has occurred.
    pub fn draft_saved(&self) -> bool {
        self.draft_saved
    }

    /// Find a service by id (first match wins).
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Find a project by id (first match wins).
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find a testimonial by id (first match wins).
    pub fn testimonial(&self, id: &str) -> Option<&Testimonial> {
        self.testimonials.iter().find(|t| t.id == id)
    }

    // --- Profile & Availability ---

    /// Replace the profile wholesale.
    pub fn update_profile(&mut self, profile: Profile) -> Result<()> {
        self.profile = profile;
        self.save_data()
    }

    /// Replace the availability record wholesale.
    pub fn update_availability(&mut self, availability: Availability) -> Result<()> {
        self.availability = availability;
        self.save_data()
    }

    // --- Services ---

    /// Append a service. The id must be pre-assigned by the caller; no
    /// uniqueness check is performed.
    pub fn add_service(&mut self, service: Service) -> Result<()> {
        self.services.push(service);
        self.save_data()
    }

    /// Replace the first service whose id matches, preserving its position.
    /// An unmatched id is a silent no-op: no error, nothing persisted.
    pub fn update_service(&mut self, id: &str, service: Service) -> Result<()> {
        match self.services.iter().position(|s| s.id == id) {
            Some(index) => {
                self.services[index] = service;
                self.save_data()
            }
            None => Ok(()),
        }
    }

    /// Remove every service whose id matches. Persists even when nothing
    /// matched, so removal is safe to repeat.
    pub fn remove_service(&mut self, id: &str) -> Result<()> {
        self.services.retain(|s| s.id != id);
        self.save_data()
    }

    /// Replace the whole service sequence.
    pub fn set_services(&mut self, services: Vec<Service>) -> Result<()> {
        self.services = services;
        self.save_data()
    }

    // --- Projects ---

    /// Append a project. Ids are caller-assigned and unchecked.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        self.projects.push(project);
        self.save_data()
    }

    /// Replace the first project whose id matches; silent no-op otherwise.
    pub fn update_project(&mut self, id: &str, project: Project) -> Result<()> {
        match self.projects.iter().position(|p| p.id == id) {
            Some(index) => {
                self.projects[index] = project;
                self.save_data()
            }
            None => Ok(()),
        }
    }

    /// Remove every project whose id matches; always persists.
    pub fn remove_project(&mut self, id: &str) -> Result<()> {
        self.projects.retain(|p| p.id != id);
        self.save_data()
    }

    /// Replace the whole project sequence.
    pub fn set_projects(&mut self, projects: Vec<Project>) -> Result<()> {
        self.projects = projects;
        self.save_data()
    }

    // --- Testimonials ---

    /// Append a testimonial. Ids are caller-assigned and unchecked.
    pub fn add_testimonial(&mut self, testimonial: Testimonial) -> Result<()> {
        self.testimonials.push(testimonial);
        self.save_data()
    }

    /// Replace the first testimonial whose id matches; silent no-op
    /// otherwise.
    pub fn update_testimonial(&mut self, id: &str, testimonial: Testimonial) -> Result<()> {
        match self.testimonials.iter().position(|t| t.id == id) {
            Some(index) => {
                self.testimonials[index] = testimonial;
                self.save_data()
            }
            None => Ok(()),
        }
    }

    /// Remove every testimonial whose id matches; always persists.
    pub fn remove_testimonial(&mut self, id: &str) -> Result<()> {
        self.testimonials.retain(|t| t.id != id);
        self.save_data()
    }

    /// Replace the whole testimonial sequence.
    pub fn set_testimonials(&mut self, testimonials: Vec<Testimonial>) -> Result<()> {
        self.testimonials = testimonials;
        self.save_data()
    }

    // --- Completion Predicates ---

    /// Profile step: name and tagline are both filled in.
    pub fn is_profile_complete(&self) -> bool {
        !self.profile.full_name.is_empty() && !self.profile.tagline.is_empty()
    }

    /// Services step: at least one service exists.
    pub fn is_services_complete(&self) -> bool {
        !self.services.is_empty()
    }

    /// Projects step: at least one project exists.
    pub fn is_projects_complete(&self) -> bool {
        !self.projects.is_empty()
    }

    /// Testimonials step: at least one testimonial exists.
    pub fn is_testimonials_complete(&self) -> bool {
        !self.testimonials.is_empty()
    }

    /// Availability step: at least one slot and a timezone.
    pub fn is_availability_complete(&self) -> bool {
        !self.availability.slots.is_empty() && !self.availability.timezone.is_empty()
    }

    /// The preview has something to show: any section has content.
    pub fn is_preview_ready(&self) -> bool {
        self.is_profile_complete()
            || self.is_services_complete()
            || self.is_projects_complete()
            || self.is_testimonials_complete()
            || self.is_availability_complete()
    }

    // --- Derived Statistics ---

    /// Recompute counts and average rating from current entity state.
    pub fn stats(&self) -> PortfolioStats {
        let ratings: Vec<f64> = self.testimonials.iter().map(|t| t.rating).collect();

        PortfolioStats {
            services: self.services.len(),
            projects: self.projects.len(),
            testimonials: self.testimonials.len(),
            avg_rating: PortfolioStats::format_avg(&ratings),
        }
    }

    // --- Persistence ---

    /// Serialize the full snapshot to the slot and stamp `last_updated`.
    ///
    /// Called by every mutator; also usable directly to re-persist the
    /// current state.
    pub fn save_data(&mut self) -> Result<()> {
        let now = Utc::now();
        let snapshot = self.snapshot_at(Some(now));

        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| {
            FolioError::SnapshotEncodeError {
                message: e.to_string(),
            }
        })?;
        self.slot.write(&json)?;

        self.last_updated = Some(now);
        self.draft_saved = true;
        Ok(())
    }

    /// Read the slot and merge any decodable snapshot into the store.
    ///
    /// Missing snapshot fields keep their defaults, so older partial
    /// payloads load cleanly. A payload that is present but undecodable is
    /// treated as absent: logged at WARN and ignored. Returns whether
    /// anything was loaded.
    pub fn load_saved_data(&mut self) -> bool {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("Failed to read saved portfolio, starting empty: {}", e);
                return false;
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&contents) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Saved portfolio is not decodable, starting empty: {}", e);
                return false;
            }
        };

        self.profile = snapshot.profile;
        self.services = snapshot.services;
        self.projects = snapshot.projects;
        self.testimonials = snapshot.testimonials;
        self.availability = snapshot.availability;
        self.last_updated = snapshot.last_updated;
        self.draft_saved = true;
        true
    }

    /// Reset every entity to its empty default and delete the saved
    /// snapshot. The only destructive operation, and irreversible.
    pub fn clear_all(&mut self) -> Result<()> {
        self.profile = Profile::default();
        self.services.clear();
        self.projects.clear();
        self.testimonials.clear();
        self.availability = Availability::default();
        self.last_updated = None;
        self.draft_saved = false;
        self.slot.clear()
    }

    /// The current state as a snapshot, stamped with the given time.
    pub fn snapshot_at(&self, last_updated: Option<DateTime<Utc>>) -> Snapshot {
        Snapshot {
            profile: self.profile.clone(),
            services: self.services.clone(),
            projects: self.projects.clone(),
            testimonials: self.testimonials.clone(),
            availability: self.availability.clone(),
            last_updated,
        }
    }
}

impl std::fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStore")
            .field("services", &self.services.len())
            .field("projects", &self.projects.len())
            .field("testimonials", &self.testimonials.len())
            .field("draft_saved", &self.draft_saved)
            .finish_non_exhaustive()
    }
}
