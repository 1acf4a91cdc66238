use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DirlsError {
    Io(io::Error),
    Parse(String),
    Config(ConfigErrorKind),
    DirectoryAccess { path: PathBuf, source: io::Error },
    Output { target: String, source: io::Error },
}

#[derive(Debug)]
pub enum ConfigErrorKind {
    InvalidFormat(String),
    InvalidPath(String),
}

impl fmt::Display for DirlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirlsError::Io(err) => write!(f, "{}", err),
            DirlsError::Parse(msg) => write!(f, "{}", msg),
            DirlsError::Config(kind) => write!(f, "{}", kind),
            DirlsError::DirectoryAccess { path, source } => {
                write!(f, "Cannot list '{}': {}", path.display(), source)
            }
            DirlsError::Output { target, source } => {
                write!(f, "Failed to write listing to {}: {}", target, source)
            }
        }
    }
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::InvalidFormat(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigErrorKind::InvalidPath(path) => write!(f, "Invalid configuration path: {}", path),
        }
    }
}

impl Error for DirlsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DirlsError::Io(err) => Some(err),
            DirlsError::DirectoryAccess { source, .. } => Some(source),
            DirlsError::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for DirlsError {
    fn from(err: io::Error) -> Self {
        DirlsError::Io(err)
    }
}

impl From<toml::de::Error> for DirlsError {
    fn from(err: toml::de::Error) -> Self {
        DirlsError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DirlsError>;
