//! Error types for the Contrata Docentes marketplace.

use thiserror::Error;

use crate::proposal::ProposalId;
use crate::teacher::TeacherId;

/// Main error type for marketplace operations.
#[derive(Error, Debug, Clone)]
pub enum TutoriaError {
    /// A profile field failed validation.
    #[error("Invalid profile field '{field}': {message}")]
    InvalidProfile { field: String, message: String },

    /// A card field failed validation during checkout.
    #[error("Invalid card field '{field}': {message}")]
    InvalidCard { field: String, message: String },

    /// No catalog entry (or current teacher) matches the given id.
    #[error("Teacher not found: {id}")]
    TeacherNotFound { id: TeacherId },

    /// No proposal matches the given id.
    #[error("Proposal not found: {id}")]
    ProposalNotFound { id: ProposalId },

    /// A checkout session method was called out of order.
    #[error("Checkout rejected for teacher {teacher_id}: {reason}")]
    CheckoutRejected { teacher_id: TeacherId, reason: String },

    /// Preference storage failed.
    #[error("Preference storage error: {message}")]
    Preferences { message: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl TutoriaError {
    /// Returns true if this error is a missing-id lookup.
    ///
    /// Callers that want the legacy silent no-op behavior check this and
    /// drop the error instead of propagating it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TutoriaError::TeacherNotFound { .. } | TutoriaError::ProposalNotFound { .. }
        )
    }
}

/// Convenience Result type for marketplace operations.
pub type Result<T> = std::result::Result<T, TutoriaError>;

impl From<serde_json::Error> for TutoriaError {
    fn from(err: serde_json::Error) -> Self {
        TutoriaError::SerializationError(err.to_string())
    }
}
