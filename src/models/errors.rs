use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unknown payment format [{0}], expected 'dynamic' or 'static'")]
    Unknown(String)
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Bank directory could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bank directory is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Bank [{0}] was not found in the directory")]
    UnknownBank(String)
}
