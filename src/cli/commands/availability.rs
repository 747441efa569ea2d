//! Availability command implementation.
//!
//! `folio availability` fills in the availability step: timezone, open
//! slots, and preferred communication channel. With `--timezone` the form
//! is skipped and flags are used as given.

use std::path::{Path, PathBuf};

use crate::cli::args::AvailabilityArgs;
use crate::error::{FolioError, Result};
use crate::portfolio::{Availability, AvailabilitySlot, PreferredCommunication};
use crate::ui::{prompts, Output};

use super::dispatcher::{Command, CommandResult};
use super::open_store;

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The availability command implementation.
pub struct AvailabilityCommand {
    data_dir: PathBuf,
    args: AvailabilityArgs,
}

impl AvailabilityCommand {
    /// Create a new availability command.
    pub fn new(data_dir: &Path, args: AvailabilityArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for AvailabilityCommand {
    fn execute(&self, out: &Output) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);
        let current = store.availability().clone();

        let availability = if self.args.timezone.is_some() {
            from_flags(&self.args)?
        } else {
            out.header("Availability");
            out.blank();
            prompt_availability(&current)?
        };

        store.update_availability(availability)?;

        out.success("Availability saved");
        if !store.is_availability_complete() {
            out.hint("A timezone and at least one slot are needed to complete this step");
        }
        Ok(CommandResult::success())
    }
}

/// Build the availability record from flags without prompting.
fn from_flags(args: &AvailabilityArgs) -> Result<Availability> {
    let slots = args
        .slot
        .iter()
        .map(|raw| parse_slot(raw))
        .collect::<Result<Vec<_>>>()?;

    Ok(Availability {
        timezone: args.timezone.clone().unwrap_or_default(),
        slots,
        preferred_communication: args.communication.unwrap_or_default(),
    })
}

/// Parse a `Day,start,end` slot flag.
fn parse_slot(raw: &str) -> Result<AvailabilitySlot> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(FolioError::InvalidInput {
            message: format!("slot '{raw}' is not of the form Day,start,end"),
        });
    }

    Ok(AvailabilitySlot {
        day: parts[0].to_string(),
        start_time: parts[1].to_string(),
        end_time: parts[2].to_string(),
    })
}

/// Run the interactive form, starting from the current record.
fn prompt_availability(current: &Availability) -> Result<Availability> {
    let timezone = prompts::input(
        "Timezone",
        if current.timezone.is_empty() {
            None
        } else {
            Some(current.timezone.as_str())
        },
    )?;

    let mut slots = current.slots.clone();
    if !slots.is_empty() {
        let keep = prompts::confirm(
            &format!("Keep the {} existing slot(s)?", slots.len()),
            true,
        )?;
        if !keep {
            slots.clear();
        }
    }

    while prompts::confirm("Add an open slot?", slots.is_empty())? {
        let day = DAYS[prompts::select("Day", &DAYS, 0)?].to_string();
        let start_time = prompts::input("Start time", Some("09:00"))?;
        let end_time = prompts::input("End time", Some("17:00"))?;
        slots.push(AvailabilitySlot {
            day,
            start_time,
            end_time,
        });
    }

    let channels = ["email", "call", "zoom"];
    let default_channel = match current.preferred_communication {
        PreferredCommunication::Email => 0,
        PreferredCommunication::Call => 1,
        PreferredCommunication::Zoom => 2,
    };
    let preferred_communication =
        match prompts::select("Preferred communication", &channels, default_channel)? {
            0 => PreferredCommunication::Email,
            1 => PreferredCommunication::Call,
            _ => PreferredCommunication::Zoom,
        };

    Ok(Availability {
        timezone,
        slots,
        preferred_communication,
    })
}
