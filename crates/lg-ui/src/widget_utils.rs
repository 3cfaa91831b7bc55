//! Widget utilities for managing IDs and small conversions
//!
//! Every page reuses the same sub-section titles pattern, so collapsing
//! headers get IDs built from the section title and their index instead of
//! their label.

use egui::Id;
use std::fmt::Display;
use std::path::Path;

/// Widget ID builder that ensures unique IDs by combining multiple components
pub struct WidgetId {
    components: Vec<String>,
}

impl WidgetId {
    /// Create a new widget ID builder
    pub fn new(base: impl Display) -> Self {
        Self {
            components: vec![base.to_string()],
        }
    }

    /// Add a component to the ID
    pub fn with(mut self, component: impl Display) -> Self {
        self.components.push(component.to_string());
        self
    }

    /// Add an index to the ID (useful in loops)
    pub fn index(self, idx: usize) -> Self {
        self.with(format!("idx_{}", idx))
    }

    /// Build the final ID string
    pub fn build(&self) -> String {
        self.components.join("_")
    }

    /// Create an egui ID from this widget ID
    pub fn id(&self) -> Id {
        Id::new(self.build())
    }
}

/// ID for the expandable block at `idx` on the page titled `section`
pub fn sub_section_id(section: &str, idx: usize) -> Id {
    WidgetId::new("sub_section").with(section).index(idx).id()
}

/// Combine a base name and suffix into a widget ID string
pub fn widget_id(base: impl Display, suffix: impl Display) -> String {
    format!("{}_{}", base, suffix)
}

/// File name to record for a picked attachment
pub fn attachment_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_builder() {
        let id = WidgetId::new("sub_section")
            .with("Glossary")
            .index(2)
            .build();
        assert_eq!(id, "sub_section_Glossary_idx_2");
    }

    #[test]
    fn test_sub_section_ids_differ_per_page() {
        assert_ne!(sub_section_id("Home", 0), sub_section_id("FAQs", 0));
        assert_eq!(sub_section_id("Home", 1), sub_section_id("Home", 1));
    }

    #[test]
    fn test_widget_id_helper() {
        assert_eq!(widget_id("feedback_table", 7), "feedback_table_7");
    }

    #[test]
    fn test_attachment_file_name() {
        let path = Path::new("/home/reader/Documents/notes.pdf");
        assert_eq!(attachment_file_name(path).as_deref(), Some("notes.pdf"));
        assert_eq!(attachment_file_name(Path::new("/")), None);
    }
}
