#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Movie document {id} could not be decoded: {reason}")]
    InvalidDocument { id: String, reason: String },

    #[error("Movie document has no usable _id")]
    MissingId,
}
