//! Showcase project entries.

use serde::{Deserialize, Serialize};

/// One showcase project in the gallery step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Opaque image references, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Technology names, deduplicated by the form, ordered for display.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let project = Project {
            id: "prj_1".into(),
            name: "Folio".into(),
            images: vec!["shot.png".into()],
            tech_stack: vec!["rust".into()],
            description: "A portfolio builder".into(),
        };

        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"techStack\""));
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let project: Project =
            serde_json::from_str(r#"{"id":"p","name":"n","description":"d"}"#).unwrap();
        assert!(project.images.is_empty());
        assert!(project.tech_stack.is_empty());
    }
}
