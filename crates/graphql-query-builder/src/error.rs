use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryBuildError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error("root object must have _type or _fields")]
    InvalidRoot,
}
