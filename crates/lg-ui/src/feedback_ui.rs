//! UI components for the feedback page

use egui::*;
use egui_extras::{Column, TableBuilder};
use lg_core::feedback::{ATTACHMENT_EXTENSIONS, MAX_RATING, MIN_RATING};
use lg_core::{FeedbackForm, SuggestedTopic};
use lg_data::{FeedbackStore, DISPLAY_COLUMNS};

use crate::session::{CommandOutcome, GuideCommand};
use crate::theme;
use crate::widget_utils::{attachment_file_name, widget_id};

/// Draft form, table toggle and admin inputs for the feedback page
#[derive(Default)]
pub struct FeedbackPanel {
    form: FeedbackForm,
    show_all: bool,
    admin_passphrase: String,
    admin_confirmed: bool,
}

impl FeedbackPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }

    /// Clear the draft once a submission went through
    pub fn on_outcome(&mut self, outcome: &CommandOutcome) {
        if let CommandOutcome::Submitted { .. } = outcome {
            self.form = FeedbackForm::default();
        }
    }

    pub fn show(&mut self, ui: &mut Ui, store: &FeedbackStore) -> Option<GuideCommand> {
        let mut command = None;

        if let Some(cmd) = self.show_form(ui) {
            command = Some(cmd);
        }

        if !store.is_empty() {
            ui.add_space(12.0);
            ui.checkbox(&mut self.show_all, "Show All Feedback");
            if self.show_all {
                show_feedback_table(ui, store);
            }
        }

        ui.add_space(12.0);
        if let Some(cmd) = self.show_admin(ui, store) {
            command = Some(cmd);
        }

        command
    }

    fn show_form(&mut self, ui: &mut Ui) -> Option<GuideCommand> {
        let mut command = None;

        ui.label("Your name *");
        ui.text_edit_singleline(&mut self.form.name);

        ui.label("Your email (optional)");
        ui.text_edit_singleline(&mut self.form.email);

        ui.add(
            Slider::new(&mut self.form.rating, MIN_RATING..=MAX_RATING)
                .text("How helpful was this guide?"),
        );

        ui.label("Your thoughts (optional)");
        ui.text_edit_multiline(&mut self.form.comment);

        ComboBox::from_label("What would you like to see next?")
            .selected_text(
                self.form
                    .suggested_topic
                    .map(SuggestedTopic::label)
                    .unwrap_or("None"),
            )
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.form.suggested_topic, None, "None");
                for topic in SuggestedTopic::ALL {
                    ui.selectable_value(&mut self.form.suggested_topic, Some(topic), topic.label());
                }
            });

        let mut clear_attachment = false;
        ui.horizontal(|ui| {
            if ui.button("📎 Attach a file (optional)").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Attachments", ATTACHMENT_EXTENSIONS)
                    .pick_file()
                {
                    self.form.attachment_name = attachment_file_name(&path);
                }
            }
            if let Some(name) = &self.form.attachment_name {
                ui.label(name);
                if ui.small_button("✖").on_hover_text("Remove attachment").clicked() {
                    clear_attachment = true;
                }
            }
        });
        if clear_attachment {
            self.form.attachment_name = None;
        }

        let validation = self.form.validation();
        if !validation.email_ok {
            ui.colored_label(
                theme::warning_color(),
                "⚠ Please enter a valid email address or leave it blank",
            );
        }

        let submit = ui
            .add_enabled(validation.is_valid(), Button::new("Submit Feedback"))
            .on_disabled_hover_text("Your name is required");
        if submit.clicked() {
            command = Some(GuideCommand::SubmitFeedback(self.form.clone()));
        }

        command
    }

    fn show_admin(&mut self, ui: &mut Ui, store: &FeedbackStore) -> Option<GuideCommand> {
        let mut command = None;

        CollapsingHeader::new("🔒 Admin")
            .id_source(widget_id("feedback", "admin"))
            .default_open(false)
            .show(ui, |ui| {
                if ui.button("🔄 Reload from disk").clicked() {
                    command = Some(GuideCommand::ReloadFeedback);
                }

                if !store.admin_enabled() {
                    ui.label(
                        RichText::new(
                            "Deleting feedback is disabled: no admin passphrase is configured.",
                        )
                        .weak(),
                    );
                    return;
                }

                ui.add(
                    TextEdit::singleline(&mut self.admin_passphrase)
                        .password(true)
                        .hint_text("Admin passphrase"),
                );
                ui.checkbox(
                    &mut self.admin_confirmed,
                    "I understand this permanently deletes all feedback",
                );
                if ui
                    .button(RichText::new("🗑 Delete all feedback").color(theme::error_color()))
                    .clicked()
                {
                    command = Some(GuideCommand::AdminClearFeedback {
                        passphrase: std::mem::take(&mut self.admin_passphrase),
                        confirmed: self.admin_confirmed,
                    });
                    self.admin_confirmed = false;
                }
            });

        command
    }
}

/// Every entry, numbered from 1, without the sequence column
fn show_feedback_table(ui: &mut Ui, store: &FeedbackStore) {
    ScrollArea::horizontal()
        .id_source(widget_id("feedback_table", store.len()))
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto())
                .columns(Column::auto().resizable(true), DISPLAY_COLUMNS.len())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    for name in DISPLAY_COLUMNS {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for row in store.display_rows() {
                        body.row(20.0, |mut table_row| {
                            table_row.col(|ui| {
                                ui.label(row.row_number.to_string());
                            });
                            for cell in row.cells() {
                                table_row.col(|ui| {
                                    ui.label(&*cell);
                                });
                            }
                        });
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GuideSession, Notice};
    use lg_data::{GuideConfig, Secret};

    fn drafted_panel() -> FeedbackPanel {
        let mut panel = FeedbackPanel::new();
        panel.form = FeedbackForm::new("Jane", "", 5).with_comment("half-typed draft");
        panel
    }

    #[test]
    fn test_submission_resets_draft() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig {
            feedback_path: dir.path().join("feedback.csv"),
            ..GuideConfig::default()
        };
        let (mut session, _) = GuideSession::start(&config, lg_content::guide_catalog().unwrap());
        let mut panel = drafted_panel();

        let outcome = session.apply(GuideCommand::SubmitFeedback(panel.form().clone()));
        panel.on_outcome(&outcome);
        assert_eq!(panel.form(), &FeedbackForm::default());
    }

    #[test]
    fn test_other_outcomes_keep_draft() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig {
            feedback_path: dir.path().join("feedback.csv"),
            admin_passphrase: Some(Secret::new("letmein")),
            api_key: None,
        };
        let (mut session, _) = GuideSession::start(&config, lg_content::guide_catalog().unwrap());
        let mut panel = drafted_panel();

        let reloaded = session.apply(GuideCommand::ReloadFeedback);
        assert_eq!(reloaded.notice().unwrap(), &Notice::success("Loaded 0 feedback entries"));
        panel.on_outcome(&reloaded);

        let cleared = session.apply(GuideCommand::AdminClearFeedback {
            passphrase: "letmein".to_string(),
            confirmed: true,
        });
        panel.on_outcome(&cleared);
        panel.on_outcome(&CommandOutcome::Notice(Notice::warning("fix the email")));

        assert_eq!(panel.form().name, "Jane");
        assert_eq!(panel.form().comment, "half-typed draft");
    }
}
