//! Application startup error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Failed to read report: {0:#}")]
    Report(anyhow::Error),
}
