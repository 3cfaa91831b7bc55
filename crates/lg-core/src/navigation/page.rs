//! Render model for the active section

use crate::section::Section;

/// One expandable block as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubSectionView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub expanded: bool,
}

/// Everything the UI needs to draw the current page
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    section: &'a Section,
    expanded: bool,
    total: usize,
}

impl<'a> PageView<'a> {
    pub(crate) fn new(section: &'a Section, expanded: bool, total: usize) -> Self {
        Self {
            section,
            expanded,
            total,
        }
    }

    pub fn section(&self) -> &'a Section {
        self.section
    }

    pub fn index(&self) -> usize {
        self.section.position
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn show_expand_controls(&self) -> bool {
        self.section.show_expand_controls
    }

    /// Whether a "Previous" button should be drawn
    pub fn has_previous(&self) -> bool {
        self.section.position > 0
    }

    /// Whether a "Next" button should be drawn
    pub fn has_next(&self) -> bool {
        self.section.position + 1 < self.total
    }

    /// Sub-sections with the expansion flag resolved, in display order
    pub fn sub_sections(&self) -> impl Iterator<Item = SubSectionView<'a>> + 'a {
        let section = self.section;
        let expanded = self.expanded;
        section.sub_sections.iter().map(move |sub| SubSectionView {
            title: &sub.title,
            content: &sub.content,
            expanded,
        })
    }
}
