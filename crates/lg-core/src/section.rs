//! Guide sections and the ordered catalog that holds them

use std::collections::HashSet;
use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while assembling a section catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("a guide needs at least one section")]
    Empty,

    #[error("duplicate section title: {0}")]
    DuplicateTitle(String),
}

/// An expandable block of content inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSection {
    pub title: String,
    pub content: String,
}

/// One page of the guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Title shown in the sidebar, unique within a catalog
    pub title: String,

    /// 0-based display order, assigned by the catalog
    pub position: usize,

    /// Sidebar icon (emoji or symbol)
    pub icon: String,

    /// Heading rendered at the top of the page
    pub heading: String,

    /// Whether the page offers the expand all / collapse all buttons
    pub show_expand_controls: bool,

    /// Expandable blocks in display order
    pub sub_sections: Vec<SubSection>,
}

impl Section {
    /// Create a section with no sub-sections
    pub fn new(title: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: 0,
            icon: String::new(),
            heading: heading.into(),
            show_expand_controls: false,
            sub_sections: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_expand_controls(mut self) -> Self {
        self.show_expand_controls = true;
        self
    }

    /// Append an expandable sub-section
    pub fn sub_section(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.sub_sections.push(SubSection {
            title: title.into(),
            content: content.into(),
        });
        self
    }

    /// Title with its icon prefixed, for menus
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.title.clone()
        } else {
            format!("{} {}", self.icon, self.title)
        }
    }
}

/// Fixed, ordered list of sections built once at startup
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    sections: Arc<[Section]>,
}

impl SectionCatalog {
    /// Build a catalog, assigning positions from iteration order
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for (position, mut section) in sections.into_iter().enumerate() {
            if !seen.insert(section.title.clone()) {
                return Err(CatalogError::DuplicateTitle(section.title));
            }
            section.position = position;
            ordered.push(section);
        }

        if ordered.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            sections: ordered.into(),
        })
    }

    /// Number of sections (never zero)
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Position of the section with the given title
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}

impl Index<usize> for SectionCatalog {
    type Output = Section;

    fn index(&self, index: usize) -> &Section {
        &self.sections[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_order() {
        let catalog = SectionCatalog::new(vec![
            Section::new("Home", "Welcome"),
            Section::new("FAQs", "Questions"),
            Section::new("Feedback", "Tell us"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        for (idx, section) in catalog.iter().enumerate() {
            assert_eq!(section.position, idx);
        }
        assert_eq!(catalog.position_of("FAQs"), Some(1));
        assert_eq!(catalog.position_of("Missing"), None);
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let dup = SectionCatalog::new(vec![
            Section::new("Home", "a"),
            Section::new("Home", "b"),
        ]);
        assert_eq!(dup.unwrap_err(), CatalogError::DuplicateTitle("Home".to_string()));

        let empty = SectionCatalog::new(Vec::new());
        assert_eq!(empty.unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_label_includes_icon() {
        let section = Section::new("Glossary", "Terms").with_icon("📖");
        assert_eq!(section.label(), "📖 Glossary");
        assert_eq!(Section::new("Glossary", "Terms").label(), "Glossary");
    }
}
