//! Core functionality for the LLM guide
//!
//! This crate provides the section model, the navigation state machine
//! and the feedback data model shared by the store and the UI.

pub mod feedback;
pub mod navigation;
pub mod section;

// Re-export commonly used types
pub use feedback::{
    is_valid_email, validate, FeedbackEntry, FeedbackForm, SuggestedTopic, Validation,
    ValidationError,
};
pub use navigation::{
    Direction, Expansion, NavigationContext, NavigationEngine, NavigationSubscriber, PageView,
    SubSectionView,
};
pub use section::{CatalogError, Section, SectionCatalog, SubSection};
