//! Error taxonomy shared by the engine, the client and the backend.
//!
//! Nothing here is fatal. Validation errors abort an operation before any I/O,
//! fetch errors degrade to an empty result set, and persistence errors are
//! logged while local session state stays as it is.

use thiserror::Error;

/// A user input problem, reported inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("都道府県を選択してください")]
    MissingRegion,
    #[error("作物名を入力してください")]
    MissingCropName,
    #[error("空白の項目があるため登録できません: {0}")]
    MissingField(&'static str),
}

/// Reading crop records from the bundled dataset or the remote store failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("dataset is malformed: {0}")]
    Malformed(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Writing to or deleting from the remote store failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {status} for document {document_id}")]
    Status { status: u16, document_id: String },
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}
