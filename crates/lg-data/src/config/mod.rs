//! Configuration consumed at startup

pub mod guide_config;
pub mod secret;

pub use guide_config::*;
pub use secret::*;
