//! Export command implementation.
//!
//! The `folio export` command writes the assembled portfolio to a file,
//! either as Markdown for publishing or as the raw JSON snapshot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::{ExportArgs, ExportFormat};
use crate::error::{FolioError, Result};
use crate::portfolio::PortfolioStore;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The export command implementation.
pub struct ExportCommand {
    data_dir: PathBuf,
    args: ExportArgs,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(data_dir: &Path, args: ExportArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    fn default_output(&self) -> PathBuf {
        match self.args.format {
            ExportFormat::Markdown => PathBuf::from("portfolio.md"),
            ExportFormat::Json => PathBuf::from("portfolio.json"),
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let store = open_store(&self.data_dir);

        if !store.is_preview_ready() {
            out.error("Nothing to export yet; the portfolio is empty");
            return Ok(CommandResult::failure(1));
        }

        let contents = match self.args.format {
            ExportFormat::Markdown => render_markdown(&store),
            ExportFormat::Json => {
                let snapshot = store.snapshot_at(store.last_updated());
                serde_json::to_string_pretty(&snapshot).map_err(|e| {
                    FolioError::SnapshotEncodeError {
                        message: e.to_string(),
                    }
                })?
            }
        };

        let output = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| self.default_output());
        fs::write(&output, contents)?;

        out.success(&format!("Exported portfolio to {}", output.display()));
        Ok(CommandResult::success())
    }
}

/// Render the portfolio as a Markdown document, section by section,
/// skipping sections without content.
fn render_markdown(store: &PortfolioStore) -> String {
    let mut doc = String::new();
    let profile = store.profile();

    if store.is_profile_complete() {
        doc.push_str(&format!("# {}\n\n{}\n", profile.full_name, profile.tagline));
        if !profile.location.is_empty() {
            doc.push_str(&format!("\n{}\n", profile.location));
        }
        let links: Vec<String> = [
            ("LinkedIn", &profile.social_links.linkedin),
            ("GitHub", &profile.social_links.github),
            ("Website", &profile.social_links.website),
        ]
        .iter()
        .filter_map(|(label, link)| {
            link.as_ref().map(|url| format!("[{label}]({url})"))
        })
        .collect();
        if !links.is_empty() {
            doc.push_str(&format!("\n{}\n", links.join(" · ")));
        }
    }

    if store.is_services_complete() {
        doc.push_str("\n## Services\n\n");
        for service in store.services() {
            doc.push_str(&format!(
                "- **{}**: {} {} ({})\n",
                service.title,
                service.pricing.amount,
                service.pricing.kind,
                service.delivery_time
            ));
            if !service.description.is_empty() {
                doc.push_str(&format!("  {}\n", service.description));
            }
        }
    }

    if store.is_projects_complete() {
        doc.push_str("\n## Projects\n\n");
        for project in store.projects() {
            doc.push_str(&format!("### {}\n\n", project.name));
            if !project.description.is_empty() {
                doc.push_str(&format!("{}\n\n", project.description));
            }
            if !project.tech_stack.is_empty() {
                doc.push_str(&format!("Tech: {}\n\n", project.tech_stack.join(", ")));
            }
            for image in &project.images {
                doc.push_str(&format!("![{}]({})\n", project.name, image));
            }
        }
    }

    if store.is_testimonials_complete() {
        doc.push_str("\n## Testimonials\n\n");
        for testimonial in store.testimonials() {
            doc.push_str(&format!(
                "> {}\n>\n> - {}, {} ({:.1}/5)\n\n",
                testimonial.feedback,
                testimonial.client_name,
                testimonial.company,
                testimonial.rating
            ));
        }
    }

    if store.is_availability_complete() {
        let availability = store.availability();
        doc.push_str(&format!("\n## Availability\n\nTimezone: {}\n\n", availability.timezone));
        for slot in &availability.slots {
            doc.push_str(&format!("- {} {}-{}\n", slot.day, slot.start_time, slot.end_time));
        }
        doc.push_str(&format!(
            "\nPreferred contact: {}\n",
            availability.preferred_communication
        ));
    }

    doc
}
