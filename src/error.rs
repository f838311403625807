use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Result channel closed before all items were processed")]
    ChannelClosed,

    #[error("Processing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl DemoError {
    pub fn config(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for DemoError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        DemoError::ChannelClosed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DemoError::config("demo.toml", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "Failed to read config file demo.toml: gone");

        assert_eq!(
            DemoError::ChannelClosed.to_string(),
            "Result channel closed before all items were processed"
        );
    }

    #[test]
    fn test_send_error_maps_to_channel_closed() {
        let err: DemoError = tokio::sync::mpsc::error::SendError("line".to_string()).into();
        assert!(matches!(err, DemoError::ChannelClosed));
    }
}
