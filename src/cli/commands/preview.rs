//! Preview command implementation.
//!
//! The `folio preview` command renders the sections that have content,
//! mirroring what the exported portfolio will contain.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The preview command implementation.
pub struct PreviewCommand {
    data_dir: PathBuf,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }
}

impl Command for PreviewCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let store = open_store(&self.data_dir);

        if !store.is_preview_ready() {
            out.hint("Nothing to preview yet. Run 'folio profile' to get started");
            return Ok(CommandResult::success());
        }

        let profile = store.profile();
        if store.is_profile_complete() {
            out.header(&profile.full_name);
            out.message(&profile.tagline);
            if !profile.location.is_empty() {
                out.message(&profile.location);
            }
            for (label, link) in [
                ("LinkedIn", &profile.social_links.linkedin),
                ("GitHub", &profile.social_links.github),
                ("Website", &profile.social_links.website),
            ] {
                if let Some(url) = link {
                    out.key_value(label, url);
                }
            }
            out.blank();
        }

        if store.is_services_complete() {
            out.header("Services");
            for service in store.services() {
                out.message(&format!(
                    "  {} - {} {} ({})",
                    service.title,
                    service.pricing.amount,
                    service.pricing.kind,
                    service.delivery_time
                ));
                if !service.description.is_empty() {
                    out.hint(&format!("    {}", service.description));
                }
            }
            out.blank();
        }

        if store.is_projects_complete() {
            out.header("Projects");
            for project in store.projects() {
                let tech = if project.tech_stack.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", project.tech_stack.join(", "))
                };
                out.message(&format!("  {}{tech}", project.name));
                if !project.description.is_empty() {
                    out.hint(&format!("    {}", project.description));
                }
            }
            out.blank();
        }

        if store.is_testimonials_complete() {
            out.header("Testimonials");
            for testimonial in store.testimonials() {
                out.message(&format!(
                    "  \"{}\" - {}, {} ({:.1}/5)",
                    testimonial.feedback,
                    testimonial.client_name,
                    testimonial.company,
                    testimonial.rating
                ));
            }
            out.blank();
        }

        if store.is_availability_complete() {
            let availability = store.availability();
            out.header("Availability");
            out.key_value("Timezone", &availability.timezone);
            for slot in &availability.slots {
                out.message(&format!(
                    "  {} {}-{}",
                    slot.day, slot.start_time, slot.end_time
                ));
            }
            out.key_value(
                "Preferred contact",
                &availability.preferred_communication.to_string(),
            );
            out.blank();
        }

        let stats = store.stats();
        out.hint(&format!(
            "{} services, {} projects, {} testimonials, avg rating {}",
            stats.services, stats.projects, stats.testimonials, stats.avg_rating
        ));

        Ok(CommandResult::success())
    }
}
