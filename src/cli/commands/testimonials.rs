//! Testimonials command implementation.
//!
//! `folio testimonials add|list|edit|remove` manages client testimonials.
//! The rating is parsed as a number and stored as given; range checks are
//! deliberately left out to match the store contract.

use std::path::{Path, PathBuf};

use crate::cli::args::{TestimonialAddArgs, TestimonialsAction};
use crate::error::Result;
use crate::ids::{new_entry_id, TESTIMONIAL_PREFIX};
use crate::portfolio::Testimonial;
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The testimonials command implementation.
pub struct TestimonialsCommand<'a> {
    data_dir: PathBuf,
    action: &'a TestimonialsAction,
}

impl<'a> TestimonialsCommand<'a> {
    /// Create a new testimonials command.
    pub fn new(data_dir: &Path, action: &'a TestimonialsAction) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            action,
        }
    }
}

impl Command for TestimonialsCommand<'_> {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);

        match self.action {
            TestimonialsAction::Add(args) => {
                let testimonial = if args.client.is_some() {
                    from_flags(args)
                } else {
                    out.header("Add a testimonial");
                    out.blank();
                    prompt_testimonial(None)?
                };

                let client = testimonial.client_name.clone();
                store.add_testimonial(testimonial)?;
                out.success(&format!("Added testimonial from {client}"));
            }
            TestimonialsAction::List => {
                if store.testimonials().is_empty() {
                    out.hint("No testimonials yet. Add one with 'folio testimonials add'");
                    return Ok(CommandResult::success());
                }
                for testimonial in store.testimonials() {
                    out.message(&format!(
                        "{}  {} ({}) - {:.1}",
                        testimonial.id,
                        testimonial.client_name,
                        testimonial.company,
                        testimonial.rating
                    ));
                }
            }
            TestimonialsAction::Edit { id } => {
                let Some(current) = store.testimonial(id).cloned() else {
                    out.error(&format!("No testimonial with id {id}"));
                    return Ok(CommandResult::failure(1));
                };

                out.header("Edit testimonial");
                out.blank();
                let updated = prompt_testimonial(Some(&current))?;
                store.update_testimonial(id, updated)?;
                out.success("Testimonial updated");
            }
            TestimonialsAction::Remove { id } => {
                store.remove_testimonial(id)?;
                out.success(&format!("Removed testimonial {id}"));
            }
        }

        Ok(CommandResult::success())
    }
}

/// Build a testimonial from `add` flags without prompting.
fn from_flags(args: &TestimonialAddArgs) -> Testimonial {
    Testimonial {
        id: new_entry_id(TESTIMONIAL_PREFIX),
        client_name: args.client.clone().unwrap_or_default(),
        company: args.company.clone().unwrap_or_default(),
        feedback: args.feedback.clone().unwrap_or_default(),
        rating: args.rating.unwrap_or(5.0),
    }
}

/// Run the interactive form. Editing keeps the existing id.
fn prompt_testimonial(current: Option<&Testimonial>) -> Result<Testimonial> {
    let client_name = prompts::input("Client name", current.map(|t| t.client_name.as_str()))?;
    let company = prompts::input_allow_empty("Company", current.map(|t| t.company.as_str()))?;
    let feedback = prompts::input_allow_empty("Feedback", current.map(|t| t.feedback.as_str()))?;
    let rating = prompts::number("Rating (1-5)", current.map(|t| t.rating))?;

    Ok(Testimonial {
        id: current
            .map(|t| t.id.clone())
            .unwrap_or_else(|| new_entry_id(TESTIMONIAL_PREFIX)),
        client_name,
        company,
        feedback,
        rating,
    })
}
