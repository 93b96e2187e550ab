use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Field '{0}' is not part of a comment submission")]
    UnknownField(String),
}
