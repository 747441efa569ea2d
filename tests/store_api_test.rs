//! Integration tests for the portfolio store against file-backed storage.

use folio::portfolio::{
    Availability, AvailabilitySlot, PortfolioStore, PreferredCommunication, Pricing, PricingKind,
    Profile, Project, Service, SocialLinks, Testimonial,
};
use folio::storage::FileSlot;
use tempfile::TempDir;

fn open(dir: &TempDir) -> PortfolioStore {
    PortfolioStore::open(Box::new(FileSlot::new(dir.path())))
}

fn full_profile() -> Profile {
    Profile {
        avatar: Some("avatar.png".into()),
        full_name: "Ada Lovelace".into(),
        tagline: "Analytical engineer".into(),
        location: "London".into(),
        social_links: SocialLinks {
            github: Some("https://github.com/ada".into()),
            ..Default::default()
        },
    }
}

fn service() -> Service {
    Service {
        id: "svc_1".into(),
        title: "Web development".into(),
        description: "Full-stack web apps".into(),
        pricing: Pricing {
            kind: PricingKind::Project,
            amount: 2500.0,
        },
        delivery_time: "6 weeks".into(),
    }
}

#[test]
fn fresh_store_starts_empty() {
    let temp = TempDir::new().unwrap();
    let store = open(&temp);

    assert_eq!(store.profile(), &Profile::default());
    assert!(store.services().is_empty());
    assert!(!store.draft_saved());
    assert!(!store.is_preview_ready());
}

#[test]
fn full_wizard_flow_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = open(&temp);
        store.update_profile(full_profile()).unwrap();
        store.add_service(service()).unwrap();
        store
            .add_project(Project {
                id: "prj_1".into(),
                name: "Difference engine".into(),
                images: vec!["engine.png".into()],
                tech_stack: vec!["brass".into(), "steam".into()],
                description: "A mechanical computer".into(),
            })
            .unwrap();
        store
            .add_testimonial(Testimonial {
                id: "tst_1".into(),
                client_name: "Charles".into(),
                company: "Babbage & Co".into(),
                feedback: "Visionary work".into(),
                rating: 5.0,
            })
            .unwrap();
        store
            .update_availability(Availability {
                timezone: "Europe/London".into(),
                slots: vec![AvailabilitySlot {
                    day: "Tuesday".into(),
                    start_time: "10:00".into(),
                    end_time: "14:00".into(),
                }],
                preferred_communication: PreferredCommunication::Call,
            })
            .unwrap();
    }

    let store = open(&temp);

    assert_eq!(store.profile(), &full_profile());
    assert_eq!(store.services(), &[service()]);
    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.testimonials().len(), 1);
    assert_eq!(store.availability().timezone, "Europe/London");
    assert!(store.draft_saved());
    assert!(store.last_updated().is_some());

    assert!(store.is_profile_complete());
    assert!(store.is_services_complete());
    assert!(store.is_projects_complete());
    assert!(store.is_testimonials_complete());
    assert!(store.is_availability_complete());
    assert!(store.is_preview_ready());

    let stats = store.stats();
    assert_eq!(stats.services, 1);
    assert_eq!(stats.avg_rating, "5.0");
}

#[test]
fn clear_all_leaves_nothing_for_the_next_session() {
    let temp = TempDir::new().unwrap();

    {
        let mut store = open(&temp);
        store.update_profile(full_profile()).unwrap();
        store.clear_all().unwrap();
    }

    let slot = FileSlot::new(temp.path());
    assert!(!slot.slot_file().exists());

    let store = open(&temp);
    assert_eq!(store.profile(), &Profile::default());
    assert!(!store.draft_saved());
}

#[test]
fn corrupt_slot_file_degrades_to_empty_store() {
    let temp = TempDir::new().unwrap();

    let slot = FileSlot::new(temp.path());
    std::fs::write(slot.slot_file(), "{ definitely not json").unwrap();

    let store = open(&temp);
    assert_eq!(store.profile(), &Profile::default());
    assert!(!store.draft_saved());
}

#[test]
fn older_partial_payload_merges_with_defaults() {
    let temp = TempDir::new().unwrap();

    let slot = FileSlot::new(temp.path());
    std::fs::write(
        slot.slot_file(),
        r#"{"profile":{"fullName":"Ada","tagline":"Engineer","location":"","socialLinks":{}},
            "services":[]}"#,
    )
    .unwrap();

    let store = open(&temp);
    assert_eq!(store.profile().full_name, "Ada");
    assert_eq!(store.availability(), &Availability::default());
    assert!(store.testimonials().is_empty());
    assert!(store.draft_saved());
}

#[test]
fn mutations_are_visible_to_a_parallel_fresh_store() {
    // Write-through means a second store opened afterwards sees the change
    // without any explicit save call.
    let temp = TempDir::new().unwrap();

    let mut writer = open(&temp);
    writer.add_service(service()).unwrap();

    let reader = open(&temp);
    assert_eq!(reader.services().len(), 1);
}
