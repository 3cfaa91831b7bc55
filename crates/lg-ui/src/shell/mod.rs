use egui::{
    CentralPanel, CollapsingHeader, Context, Frame, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};
use lg_content::FEEDBACK_SECTION;
use lg_core::{NavigationContext, NavigationSubscriber};
use std::time::Instant;

use crate::widget_utils::sub_section_id;
use crate::{theme, FeedbackPanel, GuideCommand, GuideSession, NavigationPanel, UiState};

/// Repaints the window whenever the page or expansion changes
pub struct RepaintOnNavigate {
    ctx: Context,
}

impl RepaintOnNavigate {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

impl NavigationSubscriber for RepaintOnNavigate {
    fn on_navigation_change(&self, context: &NavigationContext) {
        tracing::trace!("Repaint for section {} ({})", context.index, context.title);
        self.ctx.request_repaint();
    }
}

/// Render the section sidebar
pub fn sidebar(
    ctx: &Context,
    session: &GuideSession,
    panel: &NavigationPanel,
) -> Option<GuideCommand> {
    let mut command = None;
    SidePanel::left("guide_sections")
        .resizable(false)
        .exact_width(panel.config().width)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                command = panel.show_sidebar(ui, session.navigation());
            });
        });
    command
}

/// Render the current page: notices, heading, blocks, feedback form and step buttons
pub fn central_panel(
    ctx: &Context,
    session: &GuideSession,
    navigation_panel: &NavigationPanel,
    feedback_panel: &mut FeedbackPanel,
    ui_state: &mut UiState,
) -> Vec<GuideCommand> {
    let mut commands = Vec::new();
    let navigation = session.navigation();
    let context = navigation.context();
    let page = navigation.page();
    let force_open = ui_state.expansion_to_apply(&context);

    ui_state.expire_notices(Instant::now());

    CentralPanel::default().show(ctx, |ui| {
        show_notices(ui, ui_state);

        ScrollArea::vertical()
            .id_source(("page", page.index()))
            .show(ui, |ui| {
                let section = page.section();
                ui.heading(&section.heading);
                ui.add_space(6.0);

                commands.extend(navigation_panel.show_expand_controls(ui, &page));

                for (idx, block) in page.sub_sections().enumerate() {
                    CollapsingHeader::new(RichText::new(block.title).strong())
                        .id_source(sub_section_id(&section.title, idx))
                        .default_open(block.expanded)
                        .open(force_open)
                        .show(ui, |ui| {
                            ui.label(block.content);
                        });
                }

                if section.title == FEEDBACK_SECTION {
                    ui.separator();
                    commands.extend(feedback_panel.show(ui, session.store()));
                }

                ui.add_space(16.0);
                ui.separator();
                commands.extend(navigation_panel.show_step_buttons(ui, &page));
            });
    });

    commands
}

fn show_notices(ui: &mut Ui, ui_state: &UiState) {
    for message in &ui_state.notices {
        let color = theme::notice_color(message.notice.level);
        Frame::none()
            .fill(color.linear_multiply(0.12))
            .stroke(egui::Stroke::new(1.0, color))
            .rounding(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(color, &message.notice.text);
            });
        ui.add_space(4.0);
    }
}

/// Copyright line with today's date
pub fn footer(ctx: &Context) {
    TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            let text = footer_text(chrono::Local::now().date_naive());
            ui.label(RichText::new(text).small().weak());
        });
    });
}

fn footer_text(date: chrono::NaiveDate) -> String {
    format!(
        "© 2025 LLM Startup Guide • Last updated {}",
        date.format("%Y-%m-%d")
    )
}
