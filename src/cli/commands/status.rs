//! Status command implementation.
//!
//! The `folio status` command shows the wizard checklist and the derived
//! portfolio statistics. `--json` emits the same data machine-readable.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ui::Output;
use crate::wizard::WizardStep;

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The status command implementation.
pub struct StatusCommand {
    data_dir: PathBuf,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(data_dir: &Path, args: StatusArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let store = open_store(&self.data_dir);
        let stats = store.stats();

        if self.args.json {
            let payload = serde_json::json!({
                "steps": {
                    "profile": store.is_profile_complete(),
                    "services": store.is_services_complete(),
                    "projects": store.is_projects_complete(),
                    "testimonials": store.is_testimonials_complete(),
                    "availability": store.is_availability_complete(),
                },
                "previewReady": store.is_preview_ready(),
                "stats": stats,
                "lastUpdated": store.last_updated(),
                "draftSaved": store.draft_saved(),
            });
            out.message(&serde_json::to_string_pretty(&payload).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        out.header("Portfolio builder");
        if let Some(last_updated) = store.last_updated() {
            out.message(&format!(
                "Last saved: {}",
                last_updated.format("%Y-%m-%d %H:%M")
            ));
        }
        out.blank();

        for step in WizardStep::ALL {
            out.step_line(step.number(), step.title(), step.is_complete(&store));
        }
        out.blank();

        out.key_value("Services", &stats.services.to_string());
        out.key_value("Projects", &stats.projects.to_string());
        out.key_value("Testimonials", &stats.testimonials.to_string());
        out.key_value("Average rating", &stats.avg_rating);

        if let Some(next) = WizardStep::first_incomplete(&store) {
            out.blank();
            out.hint(&format!("Next: folio {}", next.command()));
        }

        Ok(CommandResult::success())
    }
}
