//! Actions the store understands.
//!
//! Actions are plain data describing one requested transition; the
//! reducer in [`crate::state::AppState::apply`] gives them meaning.

use serde::{Deserialize, Serialize};
use tutoria_core::{
    ProposalDraft, ProposalId, ProposalStatus, Role, Teacher, TeacherId, TeacherProfile,
    UserProfile, WeeklySchedule,
};

use crate::subscription::ChangeKind;

/// One requested state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Replace the active role, or drop it on sign-out.
    SetRole { role: Option<Role> },
    /// Replace the student registration profile.
    SaveUserProfile { profile: UserProfile },
    /// Replace the teacher onboarding profile.
    SaveTeacherProfile { profile: TeacherProfile },
    /// Replace the signed-in teacher's editable weekly schedule.
    UpdateTeacherSchedule { schedule: WeeklySchedule },
    /// Create a pending proposal at the head of the inbox.
    CreateProposal { draft: ProposalDraft },
    /// Move one proposal to a new status.
    UpdateProposalStatus { id: ProposalId, status: ProposalStatus },
    /// Flip the commission flag of a catalog entry and, when it carries
    /// the same id, of the teacher held in `current_teacher`.
    UpdateTeacherPaymentStatus { id: TeacherId, paid: bool },
    /// Replace the teacher going through onboarding.
    SetCurrentTeacher { teacher: Teacher },
    /// Drop the teacher profile, schedule and current teacher at once.
    ClearTeacherData,
}

impl Action {
    /// The change event this action produces once applied.
    pub fn kind(&self) -> ChangeKind {
        match self {
            Action::SetRole { .. } => ChangeKind::RoleChanged,
            Action::SaveUserProfile { .. } => ChangeKind::UserProfileSaved,
            Action::SaveTeacherProfile { .. } => ChangeKind::TeacherProfileSaved,
            Action::UpdateTeacherSchedule { .. } => ChangeKind::TeacherScheduleUpdated,
            Action::CreateProposal { .. } => ChangeKind::ProposalCreated,
            Action::UpdateProposalStatus { .. } => ChangeKind::ProposalStatusUpdated,
            Action::UpdateTeacherPaymentStatus { .. } => ChangeKind::TeacherPaymentUpdated,
            Action::SetCurrentTeacher { .. } => ChangeKind::CurrentTeacherSet,
            Action::ClearTeacherData => ChangeKind::TeacherDataCleared,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serde_tags() {
        let action = Action::SetRole {
            role: Some(Role::Teacher),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"set_role\""));
        assert!(json.contains("\"docente\""));

        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_action_kind_covers_every_variant() {
        let clear = Action::ClearTeacherData;
        assert_eq!(clear.kind(), ChangeKind::TeacherDataCleared);

        let status = Action::UpdateProposalStatus {
            id: "p_demo1".into(),
            status: ProposalStatus::Accepted,
        };
        assert_eq!(status.kind(), ChangeKind::ProposalStatusUpdated);
    }
}
