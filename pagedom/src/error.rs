use thiserror::Error;

/// Errors raised by document queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id `{0}`")]
    NotFound(String),
    #[error("element `{0}` has no following sibling")]
    NoSibling(String),
}
