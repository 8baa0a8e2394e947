use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SensError {
    #[error("{0} not set in .env")]
    EnvKeyMissing(String),

    #[error("autoexec location does not exist: {}", .0.display())]
    TargetMissing(PathBuf),

    #[error("template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SensError>;
