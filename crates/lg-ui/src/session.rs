//! Per-session state and the commands the page can issue
//!
//! A [`GuideSession`] owns everything one reader's visit needs: the
//! navigation engine and the feedback store. Widgets never
//! mutate it directly; they return [`GuideCommand`]s which are applied
//! after the frame is drawn.

use std::sync::Arc;

use lg_core::{
    Direction, Expansion, FeedbackEntry, FeedbackForm, NavigationEngine, SectionCatalog,
};
use lg_data::{FeedbackStore, GuideConfig, StoreError};
use tracing::{error, info};
use uuid::Uuid;

/// Something the reader asked the page to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideCommand {
    Navigate(Direction),
    /// Jump by section title
    Goto(String),
    GotoIndex(usize),
    ToggleExpansion(Expansion),
    SubmitFeedback(FeedbackForm),
    ListFeedback,
    ReloadFeedback,
    AdminClearFeedback { passphrase: String, confirmed: bool },
}

/// Severity of an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Message shown inline on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Navigation state changed
    Changed,
    /// Nothing happened (e.g. "next" on the last page)
    Unchanged,
    /// Current feedback rows, oldest first
    Feedback(Vec<FeedbackEntry>),
    /// A submission was persisted
    Submitted { entry: FeedbackEntry, notice: Notice },
    Notice(Notice),
}

impl CommandOutcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            CommandOutcome::Notice(notice) | CommandOutcome::Submitted { notice, .. } => {
                Some(notice)
            }
            _ => None,
        }
    }
}

/// Everything one reader's visit needs
pub struct GuideSession {
    id: Uuid,
    navigation: Arc<NavigationEngine>,
    store: FeedbackStore,
}

impl GuideSession {
    pub fn new(catalog: SectionCatalog, store: FeedbackStore) -> Self {
        let id = Uuid::new_v4();
        info!(
            "Session {} started with {} sections and {} feedback entries",
            id,
            catalog.len(),
            store.len()
        );
        Self {
            id,
            navigation: Arc::new(NavigationEngine::new(catalog)),
            store,
        }
    }

    /// Open the configured store and start a session.
    ///
    /// An unreadable feedback file does not stop the guide; the session
    /// starts with an empty list and the returned notice explains why.
    pub fn start(config: &GuideConfig, catalog: SectionCatalog) -> (Self, Option<Notice>) {
        let (store, notice) = match FeedbackStore::open(&config.feedback_path) {
            Ok(store) => (store, None),
            Err(err) => {
                error!(
                    "Could not load {}: {}",
                    config.feedback_path.display(),
                    err
                );
                (
                    FeedbackStore::empty(&config.feedback_path),
                    Some(Notice::error(format!(
                        "Previous feedback could not be loaded: {err}"
                    ))),
                )
            }
        };
        let store = store.with_admin_passphrase(config.admin_passphrase.clone());
        (Self::new(catalog, store), notice)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn navigation(&self) -> &Arc<NavigationEngine> {
        &self.navigation
    }

    pub fn store(&self) -> &FeedbackStore {
        &self.store
    }

    /// Apply a command; failures become notices, never panics or exits
    pub fn apply(&mut self, command: GuideCommand) -> CommandOutcome {
        match command {
            GuideCommand::Navigate(direction) => changed(self.navigation.navigate(direction)),
            GuideCommand::Goto(title) => changed(self.navigation.goto_title(&title)),
            GuideCommand::GotoIndex(index) => changed(self.navigation.goto(index)),
            GuideCommand::ToggleExpansion(expansion) => {
                changed(self.navigation.set_expansion(expansion))
            }
            GuideCommand::SubmitFeedback(form) => self.submit_feedback(form),
            GuideCommand::ListFeedback => {
                CommandOutcome::Feedback(self.store.list_all().cloned().collect())
            }
            GuideCommand::ReloadFeedback => match self.store.reload() {
                Ok(count) => CommandOutcome::Notice(Notice::success(format!(
                    "Loaded {count} feedback entries"
                ))),
                Err(err) => CommandOutcome::Notice(Notice::error(format!(
                    "Could not read feedback: {err}"
                ))),
            },
            GuideCommand::AdminClearFeedback {
                passphrase,
                confirmed,
            } => self.clear_feedback(&passphrase, confirmed),
        }
    }

    fn submit_feedback(&mut self, form: FeedbackForm) -> CommandOutcome {
        match self.store.submit(form) {
            Ok(entry) => {
                let notice = Notice::success(format!("Thanks {} for your feedback!", entry.name));
                CommandOutcome::Submitted { entry, notice }
            }
            Err(StoreError::Validation(err)) => {
                CommandOutcome::Notice(Notice::warning(err.to_string()))
            }
            Err(err) => CommandOutcome::Notice(Notice::error(format!(
                "Could not save your feedback: {err}"
            ))),
        }
    }

    fn clear_feedback(&mut self, passphrase: &str, confirmed: bool) -> CommandOutcome {
        match self.store.clear_all(passphrase, confirmed) {
            Ok(removed) => CommandOutcome::Notice(Notice::success(format!(
                "All feedback deleted ({removed} entries)"
            ))),
            Err(err) if err.is_authorization() => {
                CommandOutcome::Notice(Notice::error(err.to_string()))
            }
            Err(err) => CommandOutcome::Notice(Notice::error(format!(
                "Could not delete feedback: {err}"
            ))),
        }
    }
}

fn changed(moved: bool) -> CommandOutcome {
    if moved {
        CommandOutcome::Changed
    } else {
        CommandOutcome::Unchanged
    }
}
