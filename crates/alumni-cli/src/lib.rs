//! CLI library components for the alumni dashboard.

pub mod logging;
pub mod render;
pub mod session;
