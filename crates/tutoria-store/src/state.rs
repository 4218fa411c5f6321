//! The application state snapshot and its reducer.
//!
//! [`AppState`] is an immutable value: applying an [`Action`] never
//! touches the receiver, it produces the next snapshot (or an error,
//! in which case the caller keeps the state it already had).

use serde::{Deserialize, Serialize};
use tutoria_core::{
    Proposal, ProposalId, ProposalStatus, Role, Teacher, TeacherId, TeacherProfile, TutoriaError,
    UserProfile, WeeklySchedule,
};

use crate::action::Action;
use crate::seed;

/// One immutable snapshot of everything the app knows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Role the person is currently acting under.
    pub role: Option<Role>,
    /// Student registration profile, once saved.
    pub user_profile: Option<UserProfile>,
    /// Teacher onboarding profile, once saved.
    pub teacher_profile: Option<TeacherProfile>,
    /// The signed-in teacher's editable weekly schedule, once saved.
    pub teacher_schedule: Option<WeeklySchedule>,
    /// Teacher currently going through onboarding and payment.
    ///
    /// This entry lives alongside the catalog and is never merged into
    /// it; a paid onboarding teacher still does not appear in search.
    pub current_teacher: Option<Teacher>,
    /// Public teacher catalog.
    pub teachers: Vec<Teacher>,
    /// Proposal inbox, newest first.
    pub proposals: Vec<Proposal>,
    /// Monotonic counter backing ids of proposals created at runtime.
    proposal_seq: u64,
}

impl AppState {
    /// Empty state: no role, no profiles, nothing listed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State preloaded with the demo catalog and proposal fixtures.
    pub fn seeded() -> Self {
        Self {
            teachers: seed::demo_teachers(),
            proposals: seed::demo_proposals(),
            ..Self::default()
        }
    }

    /// Look up a catalog entry by id.
    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|teacher| &teacher.id == id)
    }

    /// Look up a proposal by id.
    pub fn proposal(&self, id: &ProposalId) -> Option<&Proposal> {
        self.proposals.iter().find(|proposal| &proposal.id == id)
    }

    /// Apply one action, producing the next snapshot.
    pub fn apply(&self, action: Action) -> tutoria_core::Result<AppState> {
        let mut next = self.clone();
        match action {
            Action::SetRole { role } => next.role = role,
            Action::SaveUserProfile { profile } => next.user_profile = Some(profile),
            Action::SaveTeacherProfile { profile } => next.teacher_profile = Some(profile),
            Action::UpdateTeacherSchedule { schedule } => next.teacher_schedule = Some(schedule),
            Action::CreateProposal { draft } => {
                next.proposal_seq += 1;
                let proposal = Proposal {
                    id: ProposalId::from_sequence(next.proposal_seq),
                    teacher_id: draft.teacher_id,
                    requester: draft.requester,
                    message: draft.message,
                    status: ProposalStatus::Pending,
                    booking: draft.booking,
                };
                next.proposals.insert(0, proposal);
            }
            Action::UpdateProposalStatus { id, status } => {
                let proposal = next
                    .proposals
                    .iter_mut()
                    .find(|proposal| proposal.id == id)
                    .ok_or_else(|| TutoriaError::ProposalNotFound { id: id.clone() })?;
                proposal.status = status;
            }
            Action::UpdateTeacherPaymentStatus { id, paid } => {
                let mut touched = false;
                if let Some(teacher) = next.teachers.iter_mut().find(|teacher| teacher.id == id) {
                    teacher.paid = paid;
                    touched = true;
                }
                // An onboarding teacher is not in the catalog, so the
                // current entry is checked on its own.
                if let Some(current) = next.current_teacher.as_mut() {
                    if current.id == id {
                        current.paid = paid;
                        touched = true;
                    }
                }
                if !touched {
                    return Err(TutoriaError::TeacherNotFound { id });
                }
            }
            Action::SetCurrentTeacher { teacher } => next.current_teacher = Some(teacher),
            Action::ClearTeacherData => {
                next.teacher_profile = None;
                next.teacher_schedule = None;
                next.current_teacher = None;
            }
        }
        Ok(next)
    }
}
