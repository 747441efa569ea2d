//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::portfolio::{PreferredCommunication, PricingKind};

/// Folio - Portfolio builder wizard for the terminal.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the saved portfolio (overrides ~/.folio)
    #[arg(short, long, global = true, env = "FOLIO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in the profile step (default form is interactive)
    Profile(ProfileArgs),

    /// Manage the services step
    Services {
        #[command(subcommand)]
        action: ServicesAction,
    },

    /// Manage the project gallery step
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },

    /// Manage the testimonials step
    Testimonials {
        #[command(subcommand)]
        action: TestimonialsAction,
    },

    /// Fill in the availability step
    Availability(AvailabilityArgs),

    /// Show wizard progress and portfolio statistics (default command)
    Status(StatusArgs),

    /// Render the assembled portfolio in the terminal
    Preview,

    /// Write the assembled portfolio to a file
    Export(ExportArgs),

    /// Delete all portfolio data and the saved snapshot
    Clear(ClearArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `profile` command.
///
/// With no flags the command runs the interactive form. Any flag switches
/// to non-interactive mode: given fields are replaced, the rest keep their
/// current values.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProfileArgs {
    /// Full display name
    #[arg(long)]
    pub name: Option<String>,

    /// Short tagline shown under the name
    #[arg(long)]
    pub tagline: Option<String>,

    /// Location
    #[arg(long)]
    pub location: Option<String>,

    /// Avatar image reference
    #[arg(long)]
    pub avatar: Option<String>,

    /// LinkedIn URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// GitHub URL
    #[arg(long)]
    pub github: Option<String>,

    /// Website URL
    #[arg(long)]
    pub website: Option<String>,
}

impl ProfileArgs {
    /// Whether any field flag was given.
    pub fn has_flags(&self) -> bool {
        self.name.is_some()
            || self.tagline.is_some()
            || self.location.is_some()
            || self.avatar.is_some()
            || self.linkedin.is_some()
            || self.github.is_some()
            || self.website.is_some()
    }
}

/// Actions on the service sequence.
#[derive(Debug, Subcommand)]
pub enum ServicesAction {
    /// Add a service (interactive unless --title is given)
    Add(ServiceAddArgs),
    /// List services with their ids
    List,
    /// Edit a service by id
    Edit { id: String },
    /// Remove a service by id
    Remove { id: String },
}

/// Arguments for `services add`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServiceAddArgs {
    /// Service title; providing it skips the interactive form
    #[arg(long)]
    pub title: Option<String>,

    /// Service description
    #[arg(long)]
    pub description: Option<String>,

    /// Pricing model
    #[arg(long, value_enum)]
    pub pricing: Option<PricingKind>,

    /// Price amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// Delivery estimate, e.g. "2 weeks"
    #[arg(long)]
    pub delivery: Option<String>,
}

/// Actions on the project sequence.
#[derive(Debug, Subcommand)]
pub enum ProjectsAction {
    /// Add a project (interactive unless --name is given)
    Add(ProjectAddArgs),
    /// List projects with their ids
    List,
    /// Edit a project by id
    Edit { id: String },
    /// Remove a project by id
    Remove { id: String },
}

/// Arguments for `projects add`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProjectAddArgs {
    /// Project name; providing it skips the interactive form
    #[arg(long)]
    pub name: Option<String>,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Technologies used (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tech: Vec<String>,

    /// Image reference (repeatable)
    #[arg(long)]
    pub image: Vec<String>,
}

/// Actions on the testimonial sequence.
#[derive(Debug, Subcommand)]
pub enum TestimonialsAction {
    /// Add a testimonial (interactive unless --client is given)
    Add(TestimonialAddArgs),
    /// List testimonials with their ids
    List,
    /// Edit a testimonial by id
    Edit { id: String },
    /// Remove a testimonial by id
    Remove { id: String },
}

/// Arguments for `testimonials add`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TestimonialAddArgs {
    /// Client name; providing it skips the interactive form
    #[arg(long)]
    pub client: Option<String>,

    /// Client company
    #[arg(long)]
    pub company: Option<String>,

    /// Feedback text
    #[arg(long)]
    pub feedback: Option<String>,

    /// Rating, expected 1-5
    #[arg(long)]
    pub rating: Option<f64>,
}

/// Arguments for the `availability` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AvailabilityArgs {
    /// Timezone; providing it skips the interactive form
    #[arg(long)]
    pub timezone: Option<String>,

    /// Preferred way to be contacted
    #[arg(long, value_enum)]
    pub communication: Option<PreferredCommunication>,

    /// Open slot as "Day,start,end", e.g. "Monday,09:00,12:00" (repeatable)
    #[arg(long)]
    pub slot: Vec<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Emit machine-readable JSON instead of the checklist
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Output file (defaults to portfolio.md / portfolio.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
    pub format: ExportFormat,
}

/// Export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Markdown,
    Json,
}

/// Arguments for the `clear` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_status_json() {
        let cli = Cli::parse_from(["folio", "status", "--json"]);
        match cli.command {
            Some(Commands::Status(args)) => assert!(args.json),
            other => panic!("Expected Status command, got {other:?}"),
        }
    }

    #[test]
    fn parses_service_add_flags() {
        let cli = Cli::parse_from([
            "folio", "services", "add", "--title", "Web dev", "--pricing", "hourly", "--amount",
            "85",
        ]);
        match cli.command {
            Some(Commands::Services {
                action: ServicesAction::Add(args),
            }) => {
                assert_eq!(args.title.as_deref(), Some("Web dev"));
                assert_eq!(args.pricing, Some(PricingKind::Hourly));
                assert_eq!(args.amount, Some(85.0));
            }
            other => panic!("Expected services add, got {other:?}"),
        }
    }

    #[test]
    fn parses_global_data_dir_after_subcommand() {
        let cli = Cli::parse_from(["folio", "status", "--data-dir", "/tmp/folio"]);
        assert_eq!(cli.data_dir.as_deref(), Some(std::path::Path::new("/tmp/folio")));
    }

    #[test]
    fn profile_flags_switch_off_interactive_mode() {
        let args = ProfileArgs::default();
        assert!(!args.has_flags());

        let cli = Cli::parse_from(["folio", "profile", "--name", "Ada"]);
        match cli.command {
            Some(Commands::Profile(args)) => assert!(args.has_flags()),
            other => panic!("Expected profile, got {other:?}"),
        }
    }

    #[test]
    fn tech_flag_splits_on_commas() {
        let cli = Cli::parse_from(["folio", "projects", "add", "--name", "Folio", "--tech", "rust,clap"]);
        match cli.command {
            Some(Commands::Projects {
                action: ProjectsAction::Add(args),
            }) => assert_eq!(args.tech, vec!["rust".to_string(), "clap".into()]),
            other => panic!("Expected projects add, got {other:?}"),
        }
    }
}
