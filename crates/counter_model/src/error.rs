use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The registered handle does not resolve to anything that can receive `update`.
    #[error("observer must implement the update capability: {reason}")]
    TypeMismatch { reason: String },
}

impl ModelError {
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::TypeMismatch {
            reason: reason.into(),
        }
    }
}
