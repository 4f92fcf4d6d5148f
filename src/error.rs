use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Input error for '{}': {message}", .path.display())]
    Input { path: PathBuf, message: String },

    #[error("Output error for '{}': {message}", .path.display())]
    Output { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScreenError {
    pub fn input(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        ScreenError::Input {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn output(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        ScreenError::Output {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ScreenError::Input { .. })
    }

    pub fn is_output(&self) -> bool {
        matches!(self, ScreenError::Output { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScreenError>;
