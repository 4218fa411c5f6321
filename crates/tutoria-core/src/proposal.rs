//! Class proposals sent from students to teachers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;
use crate::teacher::TeacherId;
use crate::types::ProposalStatus;

/// Identifier of a proposal.
///
/// Seeded demo records use `p_demo*` ids; proposals created at runtime get
/// sequential `p_{n}` ids from the store, so the two can never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId(String);

impl ProposalId {
    /// Create an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for the n-th proposal created at runtime.
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("p_{}", seq))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProposalId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProposalId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Contact snapshot of the person who sent a proposal.
///
/// Copied out of the user profile at creation time; later profile edits do
/// not rewrite old proposals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requester {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,
}

impl From<&UserProfile> for Requester {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }
}

/// Concrete slot request attached to a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// Requested class date.
    pub date: NaiveDate,

    /// Requested start slot ("08:00").
    pub time: String,

    /// Requested length of the class, in hours.
    pub duration_hours: u8,
}

/// A class proposal a student sent to a teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique identifier for this proposal.
    pub id: ProposalId,

    /// The teacher the proposal is addressed to.
    ///
    /// Not checked against the catalog: a proposal may outlive its teacher.
    pub teacher_id: TeacherId,

    /// Who sent the proposal.
    pub requester: Requester,

    /// Free-text message to the teacher.
    pub message: String,

    /// Where the proposal is in its lifecycle.
    pub status: ProposalStatus,

    /// Requested slot, when the student picked one.
    #[serde(default)]
    pub booking: Option<BookingDetails>,
}

/// Payload for creating a proposal. The store assigns id and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDraft {
    /// The teacher the proposal is addressed to.
    pub teacher_id: TeacherId,

    /// Who is sending the proposal.
    pub requester: Requester,

    /// Free-text message to the teacher.
    pub message: String,

    /// Requested slot, if the student picked one.
    #[serde(default)]
    pub booking: Option<BookingDetails>,
}

impl ProposalDraft {
    /// Create a draft without a slot request.
    pub fn new(
        teacher_id: impl Into<TeacherId>,
        requester: Requester,
        message: impl Into<String>,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            requester,
            message: message.into(),
            booking: None,
        }
    }

    /// Attach a requested slot.
    pub fn with_booking(mut self, date: NaiveDate, time: impl Into<String>, duration_hours: u8) -> Self {
        self.booking = Some(BookingDetails {
            date,
            time: time.into(),
            duration_hours,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_never_look_like_demo_ids() {
        let id = ProposalId::from_sequence(1);
        assert_eq!(id.as_str(), "p_1");
        assert_ne!(id, ProposalId::new("p_demo1"));
    }

    #[test]
    fn test_requester_snapshot_from_profile() {
        let profile = UserProfile {
            name: "Carla Fernández".to_string(),
            email: "carla.fernandez@example.com".to_string(),
            phone: "+593 98 765 4321".to_string(),
            address: "Av. Amazonas 123, Quito, Ecuador".to_string(),
        };

        let requester = Requester::from(&profile);
        assert_eq!(requester.name, profile.name);
        assert_eq!(requester.email, profile.email);
    }

    #[test]
    fn test_draft_with_booking() {
        let requester = Requester {
            name: "Carla Fernández".to_string(),
            email: "carla.fernandez@example.com".to_string(),
            phone: "+593 98 765 4321".to_string(),
        };

        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let draft = ProposalDraft::new("t1", requester, "Hola, quisiera clases dos veces por semana.")
            .with_booking(date, "08:00", 2);

        let booking = draft.booking.unwrap();
        assert_eq!(booking.time, "08:00");
        assert_eq!(booking.duration_hours, 2);
    }
}
