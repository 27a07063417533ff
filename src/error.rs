use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to {action} `{}`: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarnessError {
    /// This error followed by every distinct cause in its `source()` chain,
    /// e.g. `Request failed: ...: tcp connect error: Connection refused (os error 111)`.
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        text: &'static str,
        cause: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.text)
        }
    }

    impl std::error::Error for Layer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.cause.as_deref().map(|c| c as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn chain_message_appends_nested_causes() {
        let inner = Layer {
            text: "tcp connect error",
            cause: Some(Box::new(Layer {
                text: "Connection refused (os error 111)",
                cause: None,
            })),
        };
        let err = HarnessError::io(
            "write",
            "out.pdf",
            std::io::Error::new(std::io::ErrorKind::Other, inner),
        );

        assert_eq!(
            err.chain_message(),
            "Failed to write `out.pdf`: tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn chain_message_skips_causes_already_shown() {
        let err = HarnessError::io(
            "read",
            "table.html",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );

        assert_eq!(err.chain_message(), err.to_string());
        assert_eq!(err.chain_message(), "Failed to read `table.html`: No such file or directory");
    }
}
