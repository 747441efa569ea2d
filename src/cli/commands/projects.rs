//! Projects command implementation.
//!
//! `folio projects add|list|edit|remove` manages the project gallery.

use std::path::{Path, PathBuf};

use crate::cli::args::{ProjectAddArgs, ProjectsAction};
use crate::error::Result;
use crate::ids::{new_entry_id, PROJECT_PREFIX};
use crate::portfolio::Project;
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The projects command implementation.
pub struct ProjectsCommand<'a> {
    data_dir: PathBuf,
    action: &'a ProjectsAction,
}

impl<'a> ProjectsCommand<'a> {
    /// Create a new projects command.
    pub fn new(data_dir: &Path, action: &'a ProjectsAction) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            action,
        }
    }
}

impl Command for ProjectsCommand<'_> {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);

        match self.action {
            ProjectsAction::Add(args) => {
                let project = if args.name.is_some() {
                    from_flags(args)
                } else {
                    out.header("Add a project");
                    out.blank();
                    prompt_project(None)?
                };

                let name = project.name.clone();
                store.add_project(project)?;
                out.success(&format!("Added project \"{name}\""));
            }
            ProjectsAction::List => {
                if store.projects().is_empty() {
                    out.hint("No projects yet. Add one with 'folio projects add'");
                    return Ok(CommandResult::success());
                }
                for project in store.projects() {
                    out.message(&format!(
                        "{}  {} [{}]",
                        project.id,
                        project.name,
                        project.tech_stack.join(", ")
                    ));
                }
            }
            ProjectsAction::Edit { id } => {
                let Some(current) = store.project(id).cloned() else {
                    out.error(&format!("No project with id {id}"));
                    return Ok(CommandResult::failure(1));
                };

                out.header("Edit project");
                out.blank();
                let updated = prompt_project(Some(&current))?;
                store.update_project(id, updated)?;
                out.success("Project updated");
            }
            ProjectsAction::Remove { id } => {
                store.remove_project(id)?;
                out.success(&format!("Removed project {id}"));
            }
        }

        Ok(CommandResult::success())
    }
}

/// Build a project from `add` flags without prompting.
fn from_flags(args: &ProjectAddArgs) -> Project {
    Project {
        id: new_entry_id(PROJECT_PREFIX),
        name: args.name.clone().unwrap_or_default(),
        images: args.image.clone(),
        tech_stack: args.tech.clone(),
        description: args.description.clone().unwrap_or_default(),
    }
}

/// Run the interactive form. Editing keeps the existing id.
fn prompt_project(current: Option<&Project>) -> Result<Project> {
    let name = prompts::input("Name", current.map(|p| p.name.as_str()))?;
    let description =
        prompts::input_allow_empty("Description", current.map(|p| p.description.as_str()))?;
    let tech_stack = prompts::input_list(
        "Tech stack (comma-separated)",
        current.map(|p| p.tech_stack.as_slice()).unwrap_or(&[]),
    )?;
    let images = prompts::input_list(
        "Images (comma-separated paths)",
        current.map(|p| p.images.as_slice()).unwrap_or(&[]),
    )?;

    Ok(Project {
        id: current
            .map(|p| p.id.clone())
            .unwrap_or_else(|| new_entry_id(PROJECT_PREFIX)),
        name,
        images,
        tech_stack,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flags_carries_tech_and_images() {
        let project = from_flags(&ProjectAddArgs {
            name: Some("Folio".into()),
            tech: vec!["rust".into(), "clap".into()],
            image: vec!["shot.png".into()],
            ..Default::default()
        });

        assert_eq!(project.name, "Folio");
        assert_eq!(project.tech_stack.len(), 2);
        assert_eq!(project.images, vec!["shot.png".to_string()]);
        assert!(project.id.starts_with("prj_"));
    }
}
