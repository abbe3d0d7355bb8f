use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("ticket export is empty: no header line and no data")]
    EmptyPayload,
    #[error("ticket export has no header line: the first line is blank")]
    MissingHeader,
}

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to read ticket export: {0}")]
    Source(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read label file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid label file: {0}")]
    Json(#[from] serde_json::Error),
}
