//! Error types for toolbar setup.
//!
//! Only mounting can fail. Runtime dispatch is best-effort and never
//! surfaces errors to the caller.

use crate::platform::PlatformError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolbarError {
    /// Expected markup is not on the page.
    #[error("missing {what} ({selector})")]
    MissingElement { what: String, selector: String },

    /// Element exists but is the wrong kind (e.g. font dropdown isn't a `<select>`).
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: String },

    #[error("invalid toolbar config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl ToolbarError {
    pub fn missing(what: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::MissingElement {
            what: what.into(),
            selector: selector.into(),
        }
    }
}
