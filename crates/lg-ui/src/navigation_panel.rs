//! Section sidebar, previous/next buttons and the expand/collapse controls
//!
//! Widgets here only read the navigation engine; clicks come back as
//! [`GuideCommand`]s.

use egui::{Align, Layout, RichText, Ui};
use lg_core::{Direction, Expansion, NavigationEngine, PageView};

use crate::session::GuideCommand;

/// Navigation panel configuration
#[derive(Debug, Clone)]
pub struct NavigationPanelConfig {
    /// Width of the sidebar
    pub width: f32,

    /// Heading above the section list
    pub menu_title: String,

    /// Prefix entries with their icon
    pub show_icons: bool,
}

impl Default for NavigationPanelConfig {
    fn default() -> Self {
        Self {
            width: 240.0,
            menu_title: "📘 Guide Sections".to_string(),
            show_icons: true,
        }
    }
}

/// Navigation widgets for the guide
#[derive(Default)]
pub struct NavigationPanel {
    config: NavigationPanelConfig,
}

impl NavigationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: NavigationPanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &NavigationPanelConfig {
        &self.config
    }

    /// Section list; clicking another entry jumps to it
    pub fn show_sidebar(&self, ui: &mut Ui, navigation: &NavigationEngine) -> Option<GuideCommand> {
        let mut command = None;
        let current = navigation.current_index();

        ui.heading(&self.config.menu_title);
        ui.separator();

        for section in navigation.catalog().iter() {
            let selected = section.position == current;
            let label = if self.config.show_icons {
                section.label()
            } else {
                section.title.clone()
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                command = Some(GuideCommand::Goto(section.title.clone()));
            }
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Section {} of {}",
                current + 1,
                navigation.catalog().len()
            ))
            .small()
            .weak(),
        );

        command
    }

    /// Expand all / collapse all, drawn only on pages that offer them
    pub fn show_expand_controls(&self, ui: &mut Ui, page: &PageView<'_>) -> Option<GuideCommand> {
        if !page.show_expand_controls() {
            return None;
        }

        let mut command = None;
        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .button("➖ Collapse All")
                    .on_hover_text("Collapse all sections")
                    .clicked()
                {
                    command = Some(GuideCommand::ToggleExpansion(Expansion::Collapsed));
                }
                if ui
                    .button("➕ Expand All")
                    .on_hover_text("Expand all sections")
                    .clicked()
                {
                    command = Some(GuideCommand::ToggleExpansion(Expansion::Expanded));
                }
            });
        });
        command
    }

    /// Previous on the left, next on the right; hidden at either end
    pub fn show_step_buttons(&self, ui: &mut Ui, page: &PageView<'_>) -> Option<GuideCommand> {
        let mut command = None;
        ui.horizontal(|ui| {
            if page.has_previous() && ui.button("⬅ Previous").clicked() {
                command = Some(GuideCommand::Navigate(Direction::Previous));
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if page.has_next() && ui.button("Next ➡").clicked() {
                    command = Some(GuideCommand::Navigate(Direction::Next));
                }
            });
        });
        command
    }
}
