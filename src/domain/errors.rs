use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("cannot place an empty order")]
    EmptyOrder,
}
