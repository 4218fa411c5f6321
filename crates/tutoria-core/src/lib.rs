//! # Tutoria Core
//!
//! Domain primitives for the Contrata Docentes tutoring marketplace.
//!
//! This crate provides the fundamental building blocks:
//! - [`Teacher`] - A tutor listed in the public catalog
//! - [`Proposal`] - A class request from a student to a teacher
//! - [`UserProfile`] / [`TeacherProfile`] - Self-reported registration data
//! - [`WeeklySchedule`] - Bookable slots keyed by weekday
//! - [`TutoriaError`] - Marketplace error types

pub mod error;
pub mod profile;
pub mod proposal;
pub mod teacher;
pub mod types;

// Re-exports for convenience
pub use error::{Result, TutoriaError};
pub use profile::{TeacherProfile, UserProfile};
pub use proposal::{BookingDetails, Proposal, ProposalDraft, ProposalId, Requester};
pub use teacher::{Teacher, TeacherId, WeeklySchedule, TIME_SLOTS};
pub use types::*;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Result, TutoriaError};
    pub use crate::profile::{TeacherProfile, UserProfile};
    pub use crate::proposal::{BookingDetails, Proposal, ProposalDraft, ProposalId, Requester};
    pub use crate::teacher::{Teacher, TeacherId, WeeklySchedule};
    pub use crate::types::{
        ExperienceBand, InstitutionType, ProposalStatus, Role, StudentLevel, Weekday,
    };
}
