use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Terminal session failed: {}", .0)]
    Session(String),

    #[error("The session was cancelled before it finished.")]
    Cancelled,

    #[error("The session ended in an unexpected state: {}", .0)]
    UnexpectedFinalState(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Parameter `{}` for image `{}` has no candidate values.", .flag, .image)]
    EmptyCandidates { image: String, flag: String },

    #[error("Invalid catalog: image names may not be empty")]
    EmptyProfileName,
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn session(message: impl std::fmt::Display) -> Self {
        let message = message.to_string();
        error!("Session error: {message}");
        Self::Session(message)
    }
}
