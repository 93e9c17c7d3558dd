use aws_sdk_honeycode::error::{BuildError, SdkError};
use aws_sdk_honeycode::operation::batch_update_table_rows::BatchUpdateTableRowsError;
use aws_sdk_honeycode::operation::query_table_rows::QueryTableRowsError;
use thiserror::Error;

/// Everything that can go wrong between receiving a shadow update and
/// marking the row cleaned. None of these turn into a response body; they
/// bubble out of the handler so the invocation is recorded as failed.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{0} environment variable is not set")]
    MissingConfig(&'static str),

    #[error("invalid Honeycode request: {0}")]
    BadRequest(#[from] BuildError),

    #[error("Honeycode row query failed: {0}")]
    Query(#[from] SdkError<QueryTableRowsError>),

    #[error("Honeycode row update failed: {0}")]
    Update(#[from] SdkError<BatchUpdateTableRowsError>),

    #[error("no table row matches reported client id {0:?}")]
    NoMatchingRow(String),
}
