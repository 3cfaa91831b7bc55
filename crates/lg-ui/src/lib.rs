//! User interface components for the LLM guide
//!
//! This crate provides the session object the page drives and the
//! egui panels that draw it: the section sidebar, the page body with its
//! expandable blocks, the feedback form and the footer.

pub mod feedback_ui;
pub mod navigation_panel;
pub mod session;
pub mod shell;
pub mod theme;
pub mod widget_utils;

use std::time::{Duration, Instant};

use lg_core::{Expansion, NavigationContext};

/// Re-export commonly used types
pub use feedback_ui::FeedbackPanel;
pub use navigation_panel::{NavigationPanel, NavigationPanelConfig};
pub use session::{CommandOutcome, GuideCommand, GuideSession, Notice, NoticeLevel};
pub use shell::{central_panel, footer, sidebar, RepaintOnNavigate};
pub use theme::apply_theme;
pub use widget_utils::{widget_id, WidgetId};

/// How long an inline message stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(10);

/// UI state that persists across frames
#[derive(Default)]
pub struct UiState {
    /// Messages to display above the page
    pub notices: Vec<NoticeMessage>,

    /// Page and override the expandable blocks were last synced to
    applied_expansion: Option<(usize, Option<Expansion>)>,
}

/// A notice with the time it was raised
pub struct NoticeMessage {
    pub notice: Notice,
    pub timestamp: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(NoticeMessage {
            notice,
            timestamp: Instant::now(),
        });
    }

    /// Record what a command did; moving to another page drops old messages
    pub fn record_outcome(&mut self, outcome: CommandOutcome) {
        match outcome {
            CommandOutcome::Changed => self.notices.clear(),
            CommandOutcome::Notice(notice) | CommandOutcome::Submitted { notice, .. } => {
                self.push_notice(notice)
            }
            CommandOutcome::Unchanged | CommandOutcome::Feedback(_) => {}
        }
    }

    /// Drop messages older than [`NOTICE_TTL`]
    pub fn expire_notices(&mut self, now: Instant) {
        self.notices
            .retain(|msg| now.duration_since(msg.timestamp) < NOTICE_TTL);
    }

    /// Open state to force onto the page's blocks this frame.
    ///
    /// Returns `Some` once after the page or the override changes while an
    /// override is set; otherwise the blocks keep whatever the reader did.
    pub fn expansion_to_apply(&mut self, context: &NavigationContext) -> Option<bool> {
        let key = (context.index, context.expansion_override);
        if self.applied_expansion == Some(key) {
            return None;
        }
        self.applied_expansion = Some(key);
        context.expansion_override.map(Expansion::is_expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(index: usize, expansion_override: Option<Expansion>) -> NavigationContext {
        NavigationContext {
            index,
            title: format!("Section {index}"),
            total: 5,
            expansion_override,
        }
    }

    #[test]
    fn test_expansion_applied_once_per_change() {
        let mut state = UiState::new();

        assert_eq!(state.expansion_to_apply(&context(0, None)), None);
        assert_eq!(state.expansion_to_apply(&context(0, None)), None);

        let expanded = context(0, Some(Expansion::Expanded));
        assert_eq!(state.expansion_to_apply(&expanded), Some(true));
        assert_eq!(state.expansion_to_apply(&expanded), None);

        // Moving to another page re-applies the sticky override
        assert_eq!(
            state.expansion_to_apply(&context(1, Some(Expansion::Expanded))),
            Some(true)
        );
        assert_eq!(
            state.expansion_to_apply(&context(1, Some(Expansion::Collapsed))),
            Some(false)
        );
    }

    #[test]
    fn test_outcomes_drive_notices() {
        let mut state = UiState::new();
        state.record_outcome(CommandOutcome::Notice(Notice::warning("check the form")));
        state.record_outcome(CommandOutcome::Unchanged);
        assert_eq!(state.notices.len(), 1);

        let entry = lg_core::FeedbackForm::new("Jane", "", 4).into_entry(1);
        state.record_outcome(CommandOutcome::Submitted {
            entry,
            notice: Notice::success("Thanks Jane for your feedback!"),
        });
        assert_eq!(state.notices.len(), 2);

        state.record_outcome(CommandOutcome::Changed);
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_notices_expire() {
        let mut state = UiState::new();
        state.push_notice(Notice::success("saved"));
        let raised = state.notices[0].timestamp;

        state.expire_notices(raised + Duration::from_secs(1));
        assert_eq!(state.notices.len(), 1);

        state.expire_notices(raised + NOTICE_TTL);
        assert!(state.notices.is_empty());
    }
}
