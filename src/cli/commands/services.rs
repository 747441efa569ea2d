//! Services command implementation.
//!
//! `folio services add|list|edit|remove` manages the service sequence. The
//! forms only collect values; all state changes go through the store's
//! mutators.

use std::path::{Path, PathBuf};

use crate::cli::args::{ServiceAddArgs, ServicesAction};
use crate::error::Result;
use crate::ids::{new_entry_id, SERVICE_PREFIX};
use crate::portfolio::{Pricing, PricingKind, Service};
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

/// The services command implementation.
pub struct ServicesCommand<'a> {
    data_dir: PathBuf,
    action: &'a ServicesAction,
}

impl<'a> ServicesCommand<'a> {
    /// Create a new services command.
    pub fn new(data_dir: &Path, action: &'a ServicesAction) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            action,
        }
    }
}

impl Command for ServicesCommand<'_> {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);

        match self.action {
            ServicesAction::Add(args) => {
                let service = if args.title.is_some() {
                    from_flags(args)
                } else {
                    out.header("Add a service");
                    out.blank();
                    prompt_service(None)?
                };

                let title = service.title.clone();
                store.add_service(service)?;
                out.success(&format!("Added service \"{title}\""));
            }
            ServicesAction::List => {
                if store.services().is_empty() {
                    out.hint("No services yet. Add one with 'folio services add'");
                    return Ok(CommandResult::success());
                }
                for service in store.services() {
                    out.message(&format!(
                        "{}  {} ({} {}, {})",
                        service.id,
                        service.title,
                        service.pricing.amount,
                        service.pricing.kind,
                        service.delivery_time
                    ));
                }
            }
            ServicesAction::Edit { id } => {
                let Some(current) = store.service(id).cloned() else {
                    out.error(&format!("No service with id {id}"));
                    return Ok(CommandResult::failure(1));
                };

                out.header("Edit service");
                out.blank();
                let updated = prompt_service(Some(&current))?;
                store.update_service(id, updated)?;
                out.success("Service updated");
            }
            ServicesAction::Remove { id } => {
                store.remove_service(id)?;
                out.success(&format!("Removed service {id}"));
            }
        }

        Ok(CommandResult::success())
    }
}

/// Build a service from `add` flags without prompting.
fn from_flags(args: &ServiceAddArgs) -> Service {
    Service {
        id: new_entry_id(SERVICE_PREFIX),
        title: args.title.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        pricing: Pricing {
            kind: args.pricing.unwrap_or(PricingKind::Hourly),
            amount: args.amount.unwrap_or(0.0),
        },
        delivery_time: args.delivery.clone().unwrap_or_default(),
    }
}

/// Run the interactive form. Editing keeps the existing id.
fn prompt_service(current: Option<&Service>) -> Result<Service> {
    let title = prompts::input("Title", current.map(|s| s.title.as_str()))?;
    let description =
        prompts::input_allow_empty("Description", current.map(|s| s.description.as_str()))?;

    let kind_default = match current.map(|s| s.pricing.kind) {
        Some(PricingKind::Project) => 1,
        _ => 0,
    };
    let kind = match prompts::select("Pricing model", &["hourly", "project"], kind_default)? {
        0 => PricingKind::Hourly,
        _ => PricingKind::Project,
    };
    let amount = prompts::number("Amount", current.map(|s| s.pricing.amount))?;

    let delivery_time = prompts::input_allow_empty(
        "Delivery estimate",
        current.map(|s| s.delivery_time.as_str()),
    )?;

    Ok(Service {
        id: current
            .map(|s| s.id.clone())
            .unwrap_or_else(|| new_entry_id(SERVICE_PREFIX)),
        title,
        description,
        pricing: Pricing { kind, amount },
        delivery_time,
    })
}
