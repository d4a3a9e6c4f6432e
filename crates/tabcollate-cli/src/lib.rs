//! CLI library components for tabcollate.

pub mod logging;
pub mod pipeline;
