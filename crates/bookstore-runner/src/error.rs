#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("decode error: {0}")]
    Decode(#[from] bson::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("explain response has no executionStats")]
    MissingExecutionStats,
}
