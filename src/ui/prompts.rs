//! Interactive prompts.

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::error::{FolioError, Result};

/// Convert dialoguer errors to FolioError.
fn map_dialoguer_err(e: dialoguer::Error) -> FolioError {
    FolioError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt for a required text value, optionally pre-filled.
pub fn input(label: &str, default: Option<&str>) -> Result<String> {
    let theme = prompt_theme();
    let prompt = Input::<String>::with_theme(&theme).with_prompt(label);

    let result = if let Some(default) = default {
        prompt
            .default(default.to_string())
            .interact_text()
            .map_err(map_dialoguer_err)?
    } else {
        prompt.interact_text().map_err(map_dialoguer_err)?
    };

    Ok(result)
}

/// Prompt for an optional text value; an empty answer becomes `None`.
pub fn input_optional(label: &str, default: Option<&str>) -> Result<Option<String>> {
    let answer = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(label)
        .allow_empty(true)
        .with_initial_text(default.unwrap_or(""))
        .interact_text()
        .map_err(map_dialoguer_err)?;

    if answer.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer))
    }
}

/// Prompt for a text value that may stay empty.
pub fn input_allow_empty(label: &str, default: Option<&str>) -> Result<String> {
    Ok(input_optional(label, default)?.unwrap_or_default())
}

/// Prompt for a numeric value, optionally pre-filled.
pub fn number(label: &str, default: Option<f64>) -> Result<f64> {
    let theme = prompt_theme();
    let prompt = Input::<f64>::with_theme(&theme).with_prompt(label);

    let result = if let Some(default) = default {
        prompt
            .default(default)
            .interact_text()
            .map_err(map_dialoguer_err)?
    } else {
        prompt.interact_text().map_err(map_dialoguer_err)?
    };

    Ok(result)
}

/// Prompt for a choice among labels; returns the selected index.
pub fn select(label: &str, items: &[&str], default: usize) -> Result<usize> {
    Select::with_theme(&prompt_theme())
        .with_prompt(label)
        .items(items)
        .default(default)
        .interact()
        .map_err(map_dialoguer_err)
}

/// Prompt for a yes/no answer.
pub fn confirm(label: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(label)
        .default(default)
        .interact()
        .map_err(map_dialoguer_err)
}

/// Prompt for a comma-separated list; whitespace is trimmed, empties dropped.
pub fn input_list(label: &str, default: &[String]) -> Result<Vec<String>> {
    let joined = default.join(", ");
    let answer = input_allow_empty(label, if joined.is_empty() { None } else { Some(&joined) })?;

    Ok(split_list(&answer))
}

/// Split a comma-separated answer into trimmed, non-empty entries.
pub fn split_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("rust, vue , ,sqlite"),
            vec!["rust".to_string(), "vue".into(), "sqlite".into()]
        );
    }

    #[test]
    fn split_list_of_empty_string_is_empty() {
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}
