pub mod csv_source;
pub mod feedback_store;

pub use feedback_store::{FeedbackRow, FeedbackStore, DISPLAY_COLUMNS};
