//! Navigation engine implementation

use super::{Direction, Expansion, NavigationContext, NavigationSubscriber, PageView};
use crate::section::{Section, SectionCatalog};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// Navigation state stored internally
#[derive(Debug, Clone, Copy, Default)]
struct NavigationState {
    current_index: usize,
    expansion_override: Option<Expansion>,
}

/// Moves through the fixed section list and tracks the expansion override.
///
/// No operation fails: out-of-range or redundant requests leave the state
/// untouched and report `false`. `current_index` always stays inside the
/// catalog and never wraps.
pub struct NavigationEngine {
    catalog: SectionCatalog,
    state: Arc<RwLock<NavigationState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl NavigationEngine {
    /// Create a navigation engine positioned on the first section
    pub fn new(catalog: SectionCatalog) -> Self {
        Self {
            catalog,
            state: Arc::new(RwLock::new(NavigationState::default())),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn catalog(&self) -> &SectionCatalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.state.read().current_index
    }

    pub fn current_section(&self) -> &Section {
        &self.catalog[self.current_index()]
    }

    pub fn expansion_override(&self) -> Option<Expansion> {
        self.state.read().expansion_override
    }

    /// Jump to a section by index; out-of-range values are ignored
    pub fn goto(&self, index: usize) -> bool {
        let total = self.catalog.len();
        self.update(|state| {
            if index >= total || index == state.current_index {
                return false;
            }
            state.current_index = index;
            true
        })
    }

    /// Jump to a section by title; unknown titles are ignored
    pub fn goto_title(&self, title: &str) -> bool {
        match self.catalog.position_of(title) {
            Some(index) => self.goto(index),
            None => {
                tracing::debug!("Ignoring jump to unknown section '{}'", title);
                false
            }
        }
    }

    /// Navigate forward by one section, stopping at the last one
    pub fn next(&self) -> bool {
        let total = self.catalog.len();
        self.update(|state| {
            if state.current_index + 1 < total {
                state.current_index += 1;
                true
            } else {
                false
            }
        })
    }

    /// Navigate backward by one section, stopping at the first one
    pub fn previous(&self) -> bool {
        self.update(|state| {
            if state.current_index > 0 {
                state.current_index -= 1;
                true
            } else {
                false
            }
        })
    }

    pub fn navigate(&self, direction: Direction) -> bool {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// Force every sub-section on this and later pages open or closed.
    ///
    /// The override is sticky across navigation until set again or reset.
    pub fn set_expansion(&self, expansion: Expansion) -> bool {
        self.update(|state| {
            if state.expansion_override == Some(expansion) {
                return false;
            }
            state.expansion_override = Some(expansion);
            true
        })
    }

    /// Return to the initial state: first section, no override
    pub fn reset(&self) -> bool {
        self.update(|state| {
            let fresh = NavigationState::default();
            if state.current_index == fresh.current_index
                && state.expansion_override == fresh.expansion_override
            {
                return false;
            }
            *state = fresh;
            true
        })
    }

    /// Get current navigation context
    pub fn context(&self) -> NavigationContext {
        let state = *self.state.read();
        NavigationContext {
            index: state.current_index,
            title: self.catalog[state.current_index].title.clone(),
            total: self.catalog.len(),
            expansion_override: state.expansion_override,
        }
    }

    /// Render model for the active section
    pub fn page(&self) -> PageView<'_> {
        let state = *self.state.read();
        let expanded = state
            .expansion_override
            .map(Expansion::is_expanded)
            .unwrap_or(false);
        PageView::new(
            &self.catalog[state.current_index],
            expanded,
            self.catalog.len(),
        )
    }

    /// Add a subscriber; it is held weakly and dropped once its owner goes away
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Apply a mutation and notify subscribers if it reported a change
    fn update<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut NavigationState) -> bool,
    {
        let mut state = self.state.write();
        let changed = mutate(&mut *state);
        let snapshot = *state;
        drop(state);

        if changed {
            tracing::debug!(
                "Navigation now at section {} (override: {:?})",
                snapshot.current_index,
                snapshot.expansion_override
            );
            self.notify_subscribers();
        }
        changed
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let context = self.context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(&context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn catalog() -> SectionCatalog {
        SectionCatalog::new(vec![
            Section::new("Home", "Welcome")
                .with_expand_controls()
                .sub_section("Why LLMs", "Because.")
                .sub_section("Getting started", "Start here."),
            Section::new("Prompt Engineering", "Prompt Like a Pro")
                .with_expand_controls()
                .sub_section("Be specific", "Say what you want."),
            Section::new("Feedback", "Tell us"),
        ])
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<NavigationContext>>,
    }

    impl NavigationSubscriber for Recorder {
        fn on_navigation_change(&self, context: &NavigationContext) {
            self.seen.lock().push(context.clone());
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = NavigationEngine::new(catalog());
        let context = engine.context();

        assert_eq!(context.index, 0);
        assert_eq!(context.title, "Home");
        assert_eq!(context.expansion_override, None);
        assert!(!context.has_previous());
        assert!(context.has_next());
    }

    #[test]
    fn test_next_and_previous_never_wrap() {
        let engine = NavigationEngine::new(catalog());

        assert!(!engine.previous());
        assert_eq!(engine.current_index(), 0);

        assert!(engine.next());
        assert!(engine.next());
        assert!(!engine.next());
        assert_eq!(engine.current_index(), 2);

        assert!(engine.previous());
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn test_arbitrary_step_sequence_stays_in_range() {
        let engine = NavigationEngine::new(catalog());
        let total = engine.catalog().len();

        // Deterministic pseudo-random walk
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let direction = if seed % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            let before = engine.current_index();
            engine.navigate(direction);
            let after = engine.current_index();

            assert!(after < total);
            assert!(after.abs_diff(before) <= 1);
        }
    }

    #[test]
    fn test_goto_out_of_range_is_ignored() {
        let engine = NavigationEngine::new(catalog());
        assert!(engine.goto(1));

        assert!(!engine.goto(3));
        assert!(!engine.goto(usize::MAX));
        assert_eq!(engine.current_index(), 1);

        assert!(!engine.goto(1));
        assert!(engine.goto(0));
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn test_goto_title() {
        let engine = NavigationEngine::new(catalog());

        assert!(engine.goto_title("Feedback"));
        assert_eq!(engine.current_section().title, "Feedback");

        assert!(!engine.goto_title("Not a section"));
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn test_expansion_is_sticky_across_pages() {
        let engine = NavigationEngine::new(catalog());
        assert!(engine.page().sub_sections().all(|s| !s.expanded));

        engine.set_expansion(Expansion::Expanded);
        assert!(engine.page().sub_sections().all(|s| s.expanded));

        engine.next();
        let page = engine.page();
        assert_eq!(page.section().title, "Prompt Engineering");
        assert!(page.expanded());
        assert!(page.sub_sections().all(|s| s.expanded));

        engine.previous();
        assert!(engine.page().sub_sections().all(|s| s.expanded));

        engine.set_expansion(Expansion::Collapsed);
        engine.next();
        assert!(engine.page().sub_sections().all(|s| !s.expanded));
    }

    #[test]
    fn test_page_view() {
        let engine = NavigationEngine::new(catalog());
        let page = engine.page();

        assert!(page.show_expand_controls());
        assert!(!page.has_previous());
        assert!(page.has_next());

        let subs: Vec<_> = page.sub_sections().collect();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].title, "Why LLMs");
        assert_eq!(subs[1].content, "Start here.");

        // Restartable
        assert_eq!(page.sub_sections().count(), 2);

        engine.goto(2);
        let last = engine.page();
        assert!(!last.show_expand_controls());
        assert!(!last.has_next());
        assert_eq!(last.sub_sections().count(), 0);
    }

    #[test]
    fn test_reset() {
        let engine = NavigationEngine::new(catalog());
        assert!(!engine.reset());

        engine.goto(2);
        engine.set_expansion(Expansion::Expanded);
        assert!(engine.reset());

        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.expansion_override(), None);
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let engine = NavigationEngine::new(catalog());
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        engine.previous();
        engine.next();
        engine.set_expansion(Expansion::Expanded);
        engine.set_expansion(Expansion::Expanded);
        engine.goto(9);

        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "Prompt Engineering");
        assert_eq!(seen[1].expansion_override, Some(Expansion::Expanded));
        assert!(seen[1].expanded());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let engine = NavigationEngine::new(catalog());
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());
        drop(recorder);

        engine.next();
        assert!(engine.subscribers.read().is_empty());
    }
}
