//! Built-in guide content
//!
//! This crate provides the fixed, ordered section list the guide ships
//! with. The copy is deliberately short; every page is a set of
//! expandable sub-sections.

use lg_core::{CatalogError, Section, SectionCatalog};

/// Title of the page hosting the feedback form
pub const FEEDBACK_SECTION: &str = "Feedback";

/// Section titles in display order
pub const SECTION_TITLES: [&str; 11] = [
    "Home",
    "Prompt Engineering",
    "Temperature & Sampling",
    "Hallucinations",
    "API Cost Optimization",
    "Ethics & Bias",
    "FAQs",
    "Glossary",
    "Interactive Use Cases",
    "Download Toolkit",
    FEEDBACK_SECTION,
];

/// Build the catalog the application runs with
pub fn guide_catalog() -> Result<SectionCatalog, CatalogError> {
    SectionCatalog::new(guide_sections())
}

fn guide_sections() -> Vec<Section> {
    vec![
        Section::new("Home", "Smart Startups. Smart AI.")
            .with_icon("🏠")
            .with_expand_controls()
            .sub_section(
                "What is a large language model?",
                "A model trained on large amounts of text to predict the next token. \
                 That simple objective is enough to draft emails, summarise documents \
                 and answer questions about your product.",
            )
            .sub_section(
                "Why should a startup care?",
                "LLMs let a small team automate support, content and research work \
                 that used to need extra hires. The trick is knowing where they are \
                 reliable and where they are not.",
            )
            .sub_section(
                "How to use this guide",
                "Walk through the sections in order with the Next button, or jump \
                 around with the sidebar. Use Expand All to open every block at once.",
            ),
        Section::new("Prompt Engineering", "🧠 Prompt Like a Pro")
            .with_icon("✏")
            .with_expand_controls()
            .sub_section(
                "Be specific",
                "State the task, the audience and the format you want. \
                 \"Write a 3-bullet summary for investors\" beats \"summarise this\".",
            )
            .sub_section(
                "Give examples",
                "Show one or two input/output pairs. Models copy patterns far more \
                 reliably than they follow abstract instructions.",
            )
            .sub_section(
                "Assign a role",
                "Opening with \"You are a senior support agent\" nudges tone and \
                 vocabulary without extra rules.",
            ),
        Section::new("Temperature & Sampling", "🎛 Temperature & Sampling")
            .with_icon("🎚")
            .with_expand_controls()
            .sub_section(
                "What temperature does",
                "Temperature scales how adventurous token sampling is. Low values \
                 give repeatable, focused output; high values give variety.",
            )
            .sub_section(
                "Picking a value",
                "Use 0.0-0.3 for extraction and classification, around 0.7 for \
                 marketing copy, and above 1.0 only for brainstorming.",
            )
            .sub_section(
                "Top-p and friends",
                "Top-p keeps only the most likely tokens whose probabilities add up \
                 to p. Tune temperature or top-p, rarely both.",
            ),
        Section::new("Hallucinations", "🌀 When the Model Makes Things Up")
            .with_icon("❗")
            .with_expand_controls()
            .sub_section(
                "Why it happens",
                "The model optimises for plausible text, not true text. When it \
                 lacks facts it fills the gap with something that sounds right.",
            )
            .sub_section(
                "Reducing the risk",
                "Ground answers in documents you supply, ask for sources, and lower \
                 the temperature for factual tasks.",
            )
            .sub_section(
                "Keep a human in the loop",
                "Anything customer-facing, legal or financial should be reviewed \
                 before it ships.",
            ),
        Section::new("API Cost Optimization", "💸 Saving Money with LLM APIs")
            .with_icon("💰")
            .with_expand_controls()
            .sub_section(
                "You pay per token",
                "Both the prompt and the completion are billed. Long system prompts \
                 repeated on every call add up quickly.",
            )
            .sub_section(
                "Right-size the model",
                "Route simple classification to a small model and reserve the large \
                 one for reasoning-heavy requests.",
            )
            .sub_section(
                "Cache and batch",
                "Cache answers to repeated questions and batch offline jobs to take \
                 advantage of cheaper rates.",
            ),
        Section::new("Ethics & Bias", "⚖ Responsible AI Use for Startups")
            .with_icon("🛡")
            .with_expand_controls()
            .sub_section(
                "Where bias comes from",
                "Models inherit the skew of their training data. Outputs about \
                 people, hiring or lending deserve extra scrutiny.",
            )
            .sub_section(
                "Privacy",
                "Do not send personal data to a third-party API unless your terms \
                 and the provider's terms allow it.",
            )
            .sub_section(
                "Be transparent",
                "Tell users when they are talking to an AI and give them a way to \
                 reach a person.",
            ),
        Section::new("FAQs", "❓ Frequently Asked Questions")
            .with_icon("❔")
            .sub_section(
                "Do I need to fine-tune?",
                "Usually not at first. Good prompts plus retrieval over your own \
                 documents cover most early use cases.",
            )
            .sub_section(
                "Which provider should I pick?",
                "Prototype with whichever is quickest to set up, then compare cost \
                 and quality on your own examples.",
            )
            .sub_section(
                "Can I run a model myself?",
                "Open-weight models can run on your own hardware, trading setup \
                 effort for control over data and cost.",
            ),
        Section::new("Glossary", "📖 Glossary of Common Terms")
            .with_icon("📖")
            .sub_section("Token", "A chunk of text, roughly three quarters of a word.")
            .sub_section(
                "Context window",
                "The maximum number of tokens the model can consider at once.",
            )
            .sub_section(
                "Embedding",
                "A vector representation of text used for search and clustering.",
            )
            .sub_section(
                "Fine-tuning",
                "Further training of a model on your own examples.",
            ),
        Section::new("Interactive Use Cases", "🧪 AI Use Case Simulator")
            .with_icon("🛠")
            .sub_section(
                "Customer support",
                "Draft replies to incoming tickets and let an agent approve them.",
            )
            .sub_section(
                "Marketing",
                "Generate variations of ad copy and test which performs best.",
            )
            .sub_section(
                "Internal knowledge",
                "Answer employee questions from your wiki and handbooks.",
            ),
        Section::new("Download Toolkit", "📦 Downloadable Toolkit")
            .with_icon("⬇")
            .sub_section(
                "Prompt templates",
                "Reusable prompts for summaries, classification and drafting.",
            )
            .sub_section(
                "Evaluation checklist",
                "Questions to ask before putting an LLM feature in front of customers.",
            ),
        Section::new(FEEDBACK_SECTION, "💬 We Value Your Feedback").with_icon("💬"),
    ]
}
