use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Access(#[from] bpcore::error::Error),
    #[error("unknown user '{0}'")]
    UnknownUser(String),
}
