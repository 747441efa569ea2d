//! Styled terminal output.

use super::FolioTheme;

/// Writes themed output to stdout/stderr.
#[derive(Debug, Clone, Default)]
pub struct Output {
    theme: FolioTheme,
}

impl Output {
    /// Create an output writer with the given theme.
    pub fn new(theme: FolioTheme) -> Self {
        Self { theme }
    }

    /// The active theme.
    pub fn theme(&self) -> &FolioTheme {
        &self.theme
    }

    /// Print a section header.
    pub fn header(&self, text: &str) {
        println!("{}", self.theme.header.apply_to(text));
    }

    /// Print a plain message line.
    pub fn message(&self, text: &str) {
        println!("{text}");
    }

    /// Print an empty line.
    pub fn blank(&self) {
        println!();
    }

    /// Print a success line.
    pub fn success(&self, text: &str) {
        println!("{} {}", self.theme.success.apply_to("✔"), text);
    }

    /// Print an error line to stderr.
    pub fn error(&self, text: &str) {
        eprintln!("{}", self.theme.error.apply_to(text));
    }

    /// Print a dim contextual hint.
    pub fn hint(&self, text: &str) {
        println!("{}", self.theme.hint.apply_to(text));
    }

    /// Print an indented `key: value` line.
    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {} {}", self.theme.key.apply_to(format!("{key}:")), value);
    }

    /// Print one wizard checklist line.
    pub fn step_line(&self, number: usize, title: &str, complete: bool) {
        let mark = if complete {
            self.theme.success.apply_to("✔").to_string()
        } else {
            self.theme.dim.apply_to("○").to_string()
        };
        println!(
            "  {mark} {} {}",
            self.theme.dim.apply_to(format!("{number}.")),
            title
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_constructs_with_plain_theme() {
        let out = Output::new(FolioTheme::plain());
        assert_eq!(out.theme().error.apply_to("x").to_string(), "x");
    }
}
