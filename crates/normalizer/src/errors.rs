#[derive(Debug, thiserror::Error)]
pub enum NormalizerError {
    #[error("malformed pull request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
