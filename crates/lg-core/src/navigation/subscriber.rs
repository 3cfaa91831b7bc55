//! Navigation subscriber trait

use super::NavigationContext;

/// Trait for components that need to refresh when the active page changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after the section index or the expansion override changes
    fn on_navigation_change(&self, context: &NavigationContext);
}
