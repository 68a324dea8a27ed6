//! CLI library components for the event manager.

pub mod logging;
pub mod pipeline;
pub mod processor;
pub mod report;
