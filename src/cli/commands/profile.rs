//! Profile command implementation.
//!
//! The `folio profile` command fills in the profile step. With no flags it
//! runs the interactive form pre-filled from the current profile; with
//! flags it replaces just the given fields.

use std::path::{Path, PathBuf};

use crate::cli::args::ProfileArgs;
use crate::error::Result;
use crate::portfolio::{Profile, SocialLinks};
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The profile command implementation.
pub struct ProfileCommand {
    data_dir: PathBuf,
    args: ProfileArgs,
}

impl ProfileCommand {
    /// Create a new profile command.
    pub fn new(data_dir: &Path, args: ProfileArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ProfileCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);
        let current = store.profile().clone();

        let profile = if self.args.has_flags() {
            merge_flags(&self.args, current)
        } else {
            out.header("Profile setup");
            out.blank();
            prompt_profile(&current)?
        };

        store.update_profile(profile)?;

        out.success("Profile saved");
        if !store.is_profile_complete() {
            out.hint("Name and tagline are still needed to complete this step");
        }
        Ok(CommandResult::success())
    }
}

/// Apply the given flags over the current profile.
fn merge_flags(args: &ProfileArgs, current: Profile) -> Profile {
    Profile {
        avatar: args.avatar.clone().or(current.avatar),
        full_name: args.name.clone().unwrap_or(current.full_name),
        tagline: args.tagline.clone().unwrap_or(current.tagline),
        location: args.location.clone().unwrap_or(current.location),
        social_links: SocialLinks {
            linkedin: args.linkedin.clone().or(current.social_links.linkedin),
            github: args.github.clone().or(current.social_links.github),
            website: args.website.clone().or(current.social_links.website),
        },
    }
}

/// Run the interactive form, pre-filled from the current profile.
fn prompt_profile(current: &Profile) -> Result<Profile> {
    let full_name = prompts::input_allow_empty("Full name", some_nonempty(&current.full_name))?;
    let tagline = prompts::input_allow_empty("Tagline", some_nonempty(&current.tagline))?;
    let location = prompts::input_allow_empty("Location", some_nonempty(&current.location))?;
    let avatar = prompts::input_optional("Avatar image (optional)", current.avatar.as_deref())?;
    let linkedin = prompts::input_optional(
        "LinkedIn URL (optional)",
        current.social_links.linkedin.as_deref(),
    )?;
    let github = prompts::input_optional(
        "GitHub URL (optional)",
        current.social_links.github.as_deref(),
    )?;
    let website = prompts::input_optional(
        "Website URL (optional)",
        current.social_links.website.as_deref(),
    )?;

    Ok(Profile {
        avatar,
        full_name,
        tagline,
        location,
        social_links: SocialLinks {
            linkedin,
            github,
            website,
        },
    })
}

fn some_nonempty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
