//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lg_data::GuideConfig;
use lg_ui::{
    central_panel, footer, sidebar, FeedbackPanel, GuideCommand, GuideSession, NavigationPanel,
    Notice, RepaintOnNavigate, UiState,
};

/// Main application state
struct GuideApp {
    /// The reader's session
    session: GuideSession,

    /// Section list and step buttons
    navigation_panel: NavigationPanel,

    /// Feedback form draft
    feedback_panel: FeedbackPanel,

    /// Notices and expansion sync
    ui_state: UiState,

    /// Held here; the engine only keeps a weak reference
    _repaint: Arc<RepaintOnNavigate>,
}

impl GuideApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        session: GuideSession,
        notice: Option<Notice>,
    ) -> Self {
        lg_ui::apply_theme(&cc.egui_ctx);

        let repaint = Arc::new(RepaintOnNavigate::new(cc.egui_ctx.clone()));
        session.navigation().add_subscriber(repaint.clone());

        let mut ui_state = UiState::new();
        if let Some(notice) = notice {
            ui_state.push_notice(notice);
        }

        Self {
            session,
            navigation_panel: NavigationPanel::new(),
            feedback_panel: FeedbackPanel::new(),
            ui_state,
            _repaint: repaint,
        }
    }

    fn apply_commands(&mut self, commands: Vec<GuideCommand>) {
        for command in commands {
            let outcome = self.session.apply(command);
            self.feedback_panel.on_outcome(&outcome);
            self.ui_state.record_outcome(outcome);
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        // Side and bottom panels claim their space before the central panel
        commands.extend(sidebar(ctx, &self.session, &self.navigation_panel));
        footer(ctx);
        commands.extend(central_panel(
            ctx,
            &self.session,
            &self.navigation_panel,
            &mut self.feedback_panel,
            &mut self.ui_state,
        ));

        self.apply_commands(commands);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GuideConfig::load()?;
    info!(
        "Starting LLM guide (feedback file: {}, admin: {}, text generation key: {})",
        config.feedback_path.display(),
        config.admin_passphrase.is_some(),
        config.api_key.is_some()
    );

    let catalog = lg_content::guide_catalog()?;
    let (session, notice) = GuideSession::start(&config, catalog);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("LLM Guide for Startups")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 520.0]),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    eframe::run_native(
        "LLM Guide for Startups",
        options,
        Box::new(move |cc| Box::new(GuideApp::new(cc, session, notice))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
