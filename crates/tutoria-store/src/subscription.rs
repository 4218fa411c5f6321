//! Change-event subscriptions over the store.
//!
//! Every committed dispatch emits a [`StateChange`]; subscribers pick
//! the kinds they care about through a [`ChangeFilter`] and consume
//! events either by polling [`StoreSubscription::next`] or by adapting
//! the subscription into a [`Stream`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::warn;
use uuid::Uuid;

/// Which operation produced a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    RoleChanged,
    UserProfileSaved,
    TeacherProfileSaved,
    TeacherScheduleUpdated,
    ProposalCreated,
    ProposalStatusUpdated,
    TeacherPaymentUpdated,
    CurrentTeacherSet,
    TeacherDataCleared,
}

/// Event emitted after a dispatch commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// Revision the store reached with this change.
    pub revision: u64,
    /// Which operation ran.
    pub kind: ChangeKind,
    /// When the change committed.
    pub timestamp: DateTime<Utc>,
}

/// Filter deciding which change events a subscription sees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeFilter {
    /// Kinds to watch; `None` matches everything.
    pub kinds: Option<Vec<ChangeKind>>,
}

impl ChangeFilter {
    /// Match every change.
    pub fn all() -> Self {
        Self::default()
    }

    /// Match only the given kinds.
    pub fn kinds(kinds: Vec<ChangeKind>) -> Self {
        Self { kinds: Some(kinds) }
    }

    /// Check whether an event passes this filter.
    pub fn matches(&self, change: &StateChange) -> bool {
        match &self.kinds {
            Some(kinds) => kinds.contains(&change.kind),
            None => true,
        }
    }
}

/// A live subscription to store changes.
pub struct StoreSubscription {
    /// Unique id for this subscription, used in log lines.
    pub id: Uuid,
    /// Filter deciding which events this subscription sees.
    pub filter: ChangeFilter,
    receiver: broadcast::Receiver<StateChange>,
}

impl StoreSubscription {
    pub(crate) fn new(filter: ChangeFilter, receiver: broadcast::Receiver<StateChange>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filter,
            receiver,
        }
    }

    /// Wait for the next matching change.
    ///
    /// Returns `None` once the store has been dropped. A lagged receiver
    /// skips the missed events and keeps going.
    pub async fn next(&mut self) -> Option<StateChange> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if self.filter.matches(&change) => return Some(change),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("subscription {} lagged, skipped {} changes", self.id, missed);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Adapt the subscription into a stream of matching changes.
    pub fn into_stream(self) -> impl Stream<Item = StateChange> + Unpin {
        let filter = self.filter;
        BroadcastStream::new(self.receiver).filter_map(move |result| match result {
            Ok(change) if filter.matches(&change) => Some(change),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(kind: ChangeKind) -> StateChange {
        StateChange {
            revision: 1,
            kind,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter = ChangeFilter::all();
        assert!(filter.matches(&change(ChangeKind::RoleChanged)));
        assert!(filter.matches(&change(ChangeKind::TeacherDataCleared)));
    }

    #[test]
    fn test_filter_kinds_is_selective() {
        let filter = ChangeFilter::kinds(vec![
            ChangeKind::ProposalCreated,
            ChangeKind::ProposalStatusUpdated,
        ]);
        assert!(filter.matches(&change(ChangeKind::ProposalCreated)));
        assert!(!filter.matches(&change(ChangeKind::RoleChanged)));
    }

    #[test]
    fn test_change_kind_serde_tokens() {
        let json = serde_json::to_string(&ChangeKind::TeacherPaymentUpdated).unwrap();
        assert_eq!(json, "\"teacher_payment_updated\"");
    }
}
