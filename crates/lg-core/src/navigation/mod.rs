use serde::{Deserialize, Serialize};

mod engine;
mod page;
mod subscriber;

pub use engine::NavigationEngine;
pub use page::{PageView, SubSectionView};
pub use subscriber::NavigationSubscriber;

/// Bulk expand/collapse state forced onto every expandable sub-section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expansion {
    Expanded,
    Collapsed,
}

impl Expansion {
    pub fn is_expanded(self) -> bool {
        matches!(self, Expansion::Expanded)
    }
}

/// Step direction for the previous/next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

/// Snapshot passed to subscribers after a navigation change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub index: usize,
    pub title: String,
    pub total: usize,
    /// `None` until expand all / collapse all is pressed
    pub expansion_override: Option<Expansion>,
}

impl NavigationContext {
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.total
    }

    /// Expansion applied to sub-sections; unset renders collapsed
    pub fn expanded(&self) -> bool {
        self.expansion_override
            .map(Expansion::is_expanded)
            .unwrap_or(false)
    }
}
