use thiserror::Error;

/// Errors a mutation or fetch can surface to the UI.
///
/// `Clone + PartialEq` so a rolled-back mutation can carry its cause in a
/// comparable outcome value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    /// Transport failure or a server-side error; local state was rolled back.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
