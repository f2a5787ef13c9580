/// Contract violations surfaced to the caller.
///
/// All of these are detected synchronously and never retried: the
/// computation is deterministic, so a second attempt cannot succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter is missing, of the wrong kind, or out of range.
    Configuration(String),
    /// A state index outside `[0, len)`.
    InvalidIndex { index: usize, len: usize },
    /// A history or profile with the wrong dimensions or out-of-range actions.
    ShapeMismatch { expected: String, found: String },
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn shape(expected: impl ToString, found: impl ToString) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(s) => write!(f, "configuration error: {}", s),
            Self::InvalidIndex { index, len } => {
                write!(f, "invalid index: {} not in [0, {})", index, len)
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Configuration(e.to_string())
    }
}
