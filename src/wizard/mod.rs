//! The ordered wizard step registry.
//!
//! Steps are presentation-side metadata over the store: titles, ordering,
//! and a completion lookup per step. The store itself never enforces
//! navigation order; forms consult these entries to decide whether "next"
//! is sensible.

use crate::portfolio::PortfolioStore;

/// One step of the portfolio builder wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Profile,
    Services,
    Projects,
    Testimonials,
    Availability,
    Preview,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Profile,
        WizardStep::Services,
        WizardStep::Projects,
        WizardStep::Testimonials,
        WizardStep::Availability,
        WizardStep::Preview,
    ];

    /// Human-readable step title.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Profile => "Profile setup",
            WizardStep::Services => "Services offered",
            WizardStep::Projects => "Project gallery",
            WizardStep::Testimonials => "Testimonials",
            WizardStep::Availability => "Availability",
            WizardStep::Preview => "Preview",
        }
    }

    /// The subcommand that edits or shows this step.
    pub fn command(self) -> &'static str {
        match self {
            WizardStep::Profile => "profile",
            WizardStep::Services => "services",
            WizardStep::Projects => "projects",
            WizardStep::Testimonials => "testimonials",
            WizardStep::Availability => "availability",
            WizardStep::Preview => "preview",
        }
    }

    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).map_or(0, |i| i + 1)
    }

    /// Whether this step has enough data in the store to count as done.
    pub fn is_complete(self, store: &PortfolioStore) -> bool {
        match self {
            WizardStep::Profile => store.is_profile_complete(),
            WizardStep::Services => store.is_services_complete(),
            WizardStep::Projects => store.is_projects_complete(),
            WizardStep::Testimonials => store.is_testimonials_complete(),
            WizardStep::Availability => store.is_availability_complete(),
            WizardStep::Preview => store.is_preview_ready(),
        }
    }

    /// The next step, if any.
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.iter().position(|s| *s == self).and_then(|i| {
            Self::ALL.get(i + 1).copied()
        })
    }

    /// The first data step that still needs input, skipping the preview.
    pub fn first_incomplete(store: &PortfolioStore) -> Option<WizardStep> {
        Self::ALL
            .iter()
            .copied()
            .filter(|s| *s != WizardStep::Preview)
            .find(|s| !s.is_complete(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Profile;
    use crate::storage::MemorySlot;

    fn empty_store() -> PortfolioStore {
        PortfolioStore::open(Box::new(MemorySlot::new()))
    }

    #[test]
    fn steps_are_numbered_in_wizard_order() {
        assert_eq!(WizardStep::Profile.number(), 1);
        assert_eq!(WizardStep::Preview.number(), 6);
    }

    #[test]
    fn next_walks_the_wizard_and_ends_at_preview() {
        assert_eq!(WizardStep::Profile.next(), Some(WizardStep::Services));
        assert_eq!(WizardStep::Preview.next(), None);
    }

    #[test]
    fn first_incomplete_starts_at_profile() {
        let store = empty_store();
        assert_eq!(
            WizardStep::first_incomplete(&store),
            Some(WizardStep::Profile)
        );
    }

    #[test]
    fn first_incomplete_advances_past_finished_steps() {
        let mut store = empty_store();
        store
            .update_profile(Profile {
                full_name: "Ada".into(),
                tagline: "Engineer".into(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            WizardStep::first_incomplete(&store),
            Some(WizardStep::Services)
        );
    }

    #[test]
    fn preview_step_tracks_preview_readiness() {
        let mut store = empty_store();
        assert!(!WizardStep::Preview.is_complete(&store));

        store
            .update_profile(Profile {
                full_name: "Ada".into(),
                tagline: "Engineer".into(),
                ..Default::default()
            })
            .unwrap();

        assert!(WizardStep::Preview.is_complete(&store));
    }

    #[test]
    fn every_step_has_a_title_and_command() {
        for step in WizardStep::ALL {
            assert!(!step.title().is_empty());
            assert!(!step.command().is_empty());
        }
    }
}
