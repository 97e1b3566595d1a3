use std::fmt;
use std::path::PathBuf;

/// Main error type for dashgen operations
#[derive(Debug)]
pub enum DashgenError {
    Io {
        source: std::io::Error,
        context: String,
    },
    Config {
        message: String,
        path: Option<PathBuf>,
    },
    Generic {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl fmt::Display for DashgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashgenError::Io { context, source } => {
                write!(f, "IO error during {}: {}", context, source)
            }
            DashgenError::Config { message, path } => {
                if let Some(path) = path {
                    write!(f, "Configuration error in {}: {}", path.display(), message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            DashgenError::Generic { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for DashgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashgenError::Io { source, .. } => Some(source),
            DashgenError::Generic { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashgenError>;

pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashgenError::Generic {
            message: f(),
            source: Some(Box::new(e)),
        })
    }

    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashgenError::Io {
            source: e,
            context: f(),
        })
    }
}

impl<T> ErrorContext<T> for std::result::Result<T, DashgenError> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DashgenError::Generic {
            message: f(),
            source: Some(Box::new(e)),
        })
    }

    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self
    }
}

// Conversion from anyhow::Error for backwards compatibility
impl From<anyhow::Error> for DashgenError {
    fn from(err: anyhow::Error) -> Self {
        DashgenError::Generic {
            message: err.to_string(),
            source: None,
        }
    }
}

// Conversion to anyhow::Error is provided by anyhow's blanket
// `impl<E: StdError + Send + Sync + 'static> From<E> for anyhow::Error`.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res
            .with_io_context(|| "writing src/app/globals.css".to_string())
            .unwrap_err();

        assert!(err.to_string().contains("writing src/app/globals.css"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_displays_path() {
        let err = DashgenError::Config {
            message: "bad toml".to_string(),
            path: Some(PathBuf::from("/tmp/config.toml")),
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
    }
}
