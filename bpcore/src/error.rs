use thiserror::Error;

/// Raised by an object permission predicate to deny outright, rather
/// than merely reporting that the permission isn't held.
#[derive(Clone, Copy, Debug, Default, Error, PartialEq)]
#[error("permission denied")]
pub struct PermissionDenied;

/// The reason a permission code was rejected.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CodeError {
    #[error("missing namespace")]
    MissingNamespace,
    #[error("doesn't belong to namespace '{0}'")]
    NamespaceMismatch(String),
    #[error("not a permission for '{0}'")]
    UnknownCodename(String),
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("malformed permission code '{code}': {reason}")]
    MalformedPermissionCode {
        code: String,
        reason: CodeError,
    },
    #[error("malformed permission template '{0}'")]
    MalformedTemplate(String),
    #[error("method not allowed: {method}")]
    UnsupportedAction {
        method: String,
        action: Option<String>,
    },
    #[error(transparent)]
    PermissionDenied(#[from] PermissionDenied),
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn malformed(code: impl Into<String>, reason: CodeError) -> Self {
        Self::MalformedPermissionCode {
            code: code.into(),
            reason,
        }
    }

    /// Whether this is a denial signalled by a predicate, as opposed to
    /// a mistake in how the permissions were declared or requested.
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
