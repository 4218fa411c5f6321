//! The dispatching store handle.
//!
//! A [`Store`] wraps the current [`AppState`] snapshot behind an
//! `Arc<RwLock<..>>`. Clones of the handle share the same state, so the
//! one built at startup gets passed to every unit that reads or
//! dispatches. Dispatches are serialized; snapshots handed out earlier
//! stay valid and unchanged.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;
use tutoria_core::{
    ProposalDraft, ProposalId, ProposalStatus, Result, Role, Teacher, TeacherId, TeacherProfile,
    UserProfile, WeeklySchedule,
};

use crate::action::Action;
use crate::state::AppState;
use crate::subscription::{ChangeFilter, StateChange, StoreSubscription};

/// Capacity of the change-event channel.
const CHANGE_CHANNEL_CAPACITY: usize = 1000;

struct Shared {
    snapshot: Arc<AppState>,
    revision: u64,
}

/// Handle to the application state store.
#[derive(Clone)]
pub struct Store {
    shared: Arc<RwLock<Shared>>,
    events: broadcast::Sender<StateChange>,
}

impl Store {
    /// Create a store over an initial state.
    pub fn new(initial: AppState) -> Self {
        let (events, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(RwLock::new(Shared {
                snapshot: Arc::new(initial),
                revision: 0,
            })),
            events,
        }
    }

    /// Store preloaded with the demo fixtures.
    pub fn seeded() -> Self {
        Self::new(AppState::seeded())
    }

    /// The current snapshot. Cheap to call; the returned `Arc` stays
    /// valid across later dispatches.
    pub async fn snapshot(&self) -> Arc<AppState> {
        self.shared.read().await.snapshot.clone()
    }

    /// Number of transitions applied so far.
    pub async fn revision(&self) -> u64 {
        self.shared.read().await.revision
    }

    /// Apply one action.
    ///
    /// On success the new snapshot replaces the current one and
    /// subscribers get a change event; on error nothing moves. The
    /// write lock is held across the reducer so transitions apply one
    /// at a time.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<AppState>> {
        let kind = action.kind();
        let mut shared = self.shared.write().await;
        let next = shared.snapshot.apply(action)?;
        shared.snapshot = Arc::new(next);
        shared.revision += 1;
        debug!("applied {:?}, store at revision {}", kind, shared.revision);

        let change = StateChange {
            revision: shared.revision,
            kind,
            timestamp: Utc::now(),
        };
        // A send with no live subscribers is fine.
        let _ = self.events.send(change);
        Ok(shared.snapshot.clone())
    }

    /// Subscribe to change events matching a filter.
    pub fn subscribe(&self, filter: ChangeFilter) -> StoreSubscription {
        StoreSubscription::new(filter, self.events.subscribe())
    }

    // Convenience dispatchers, one per operation.

    /// Replace the active role, or drop it on sign-out.
    pub async fn set_role(&self, role: Option<Role>) -> Result<Arc<AppState>> {
        self.dispatch(Action::SetRole { role }).await
    }

    /// Replace the student registration profile.
    pub async fn save_user_profile(&self, profile: UserProfile) -> Result<Arc<AppState>> {
        self.dispatch(Action::SaveUserProfile { profile }).await
    }

    /// Replace the teacher onboarding profile.
    pub async fn save_teacher_profile(&self, profile: TeacherProfile) -> Result<Arc<AppState>> {
        self.dispatch(Action::SaveTeacherProfile { profile }).await
    }

    /// Replace the signed-in teacher's weekly schedule.
    pub async fn update_teacher_schedule(&self, schedule: WeeklySchedule) -> Result<Arc<AppState>> {
        self.dispatch(Action::UpdateTeacherSchedule { schedule })
            .await
    }

    /// Create a pending proposal at the head of the inbox.
    pub async fn create_proposal(&self, draft: ProposalDraft) -> Result<Arc<AppState>> {
        self.dispatch(Action::CreateProposal { draft }).await
    }

    /// Move one proposal to a new status.
    pub async fn update_proposal_status(
        &self,
        id: ProposalId,
        status: ProposalStatus,
    ) -> Result<Arc<AppState>> {
        self.dispatch(Action::UpdateProposalStatus { id, status })
            .await
    }

    /// Flip the commission flag of the teacher with the given id.
    pub async fn update_teacher_payment_status(
        &self,
        id: TeacherId,
        paid: bool,
    ) -> Result<Arc<AppState>> {
        self.dispatch(Action::UpdateTeacherPaymentStatus { id, paid })
            .await
    }

    /// Replace the teacher going through onboarding.
    pub async fn set_current_teacher(&self, teacher: Teacher) -> Result<Arc<AppState>> {
        self.dispatch(Action::SetCurrentTeacher { teacher }).await
    }

    /// Drop the teacher profile, schedule and current teacher at once.
    pub async fn clear_teacher_data(&self) -> Result<Arc<AppState>> {
        self.dispatch(Action::ClearTeacherData).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::ChangeKind;
    use tutoria_core::Requester;

    fn demo_draft() -> ProposalDraft {
        ProposalDraft::new(
            "t1",
            Requester {
                name: "Carla Fernández".to_string(),
                email: "carla.fernandez@example.com".to_string(),
                phone: "+593 98 765 4321".to_string(),
            },
            "Hola, quisiera clases dos veces por semana.",
        )
    }

    #[tokio::test]
    async fn test_dispatch_advances_revision() {
        let store = Store::seeded();
        assert_eq!(store.revision().await, 0);

        store.set_role(Some(Role::User)).await.unwrap();
        assert_eq!(store.revision().await, 1);

        store.create_proposal(demo_draft()).await.unwrap();
        assert_eq!(store.revision().await, 2);
    }

    #[tokio::test]
    async fn test_failed_dispatch_moves_nothing() {
        let store = Store::seeded();
        let before = store.snapshot().await;

        let err = store
            .update_proposal_status("p_missing".into(), ProposalStatus::Accepted)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.revision().await, 0);
        assert_eq!(*store.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_old_snapshot_survives_dispatch() {
        let store = Store::seeded();
        let before = store.snapshot().await;

        store.create_proposal(demo_draft()).await.unwrap();

        assert_eq!(before.proposals.len(), 15);
        assert_eq!(store.snapshot().await.proposals.len(), 16);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::seeded();
        let other = store.clone();

        store.set_role(Some(Role::Teacher)).await.unwrap();
        assert_eq!(other.snapshot().await.role, Some(Role::Teacher));
    }

    #[tokio::test]
    async fn test_subscription_sees_matching_changes() {
        let store = Store::seeded();
        let mut subscription =
            store.subscribe(ChangeFilter::kinds(vec![ChangeKind::ProposalCreated]));

        store.set_role(Some(Role::User)).await.unwrap();
        store.create_proposal(demo_draft()).await.unwrap();

        let change = subscription.next().await.unwrap();
        assert_eq!(change.kind, ChangeKind::ProposalCreated);
        assert_eq!(change.revision, 2);
    }

    #[tokio::test]
    async fn test_subscription_ends_when_store_drops() {
        let store = Store::seeded();
        let mut subscription = store.subscribe(ChangeFilter::all());
        drop(store);
        assert!(subscription.next().await.is_none());
    }

    #[tokio::test]
    async fn test_stream_adapter_filters() {
        use tokio_stream::StreamExt;

        let store = Store::seeded();
        let mut stream = store
            .subscribe(ChangeFilter::kinds(vec![ChangeKind::TeacherPaymentUpdated]))
            .into_stream();

        store.set_role(Some(Role::Teacher)).await.unwrap();
        store
            .update_teacher_payment_status("t6".into(), true)
            .await
            .unwrap();
        drop(store);

        let change = stream.next().await.unwrap();
        assert_eq!(change.kind, ChangeKind::TeacherPaymentUpdated);
        assert!(stream.next().await.is_none());
    }
}
