//! # Tutoria Store
//!
//! Reducer-style application state store: immutable [`AppState`]
//! snapshots, a dispatching [`Store`] handle, change-event
//! subscriptions, the demo fixtures and the read-side queries built
//! on top, plus theme preference persistence.

pub mod action;
pub mod prefs;
pub mod queries;
pub mod seed;
pub mod state;
pub mod store;
pub mod subscription;

pub use action::Action;
pub use prefs::{
    FilePreferences, MemoryPreferences, PreferenceStore, ThemeController, ThemeMode, THEME_KEY,
};
pub use queries::{
    available_dates, available_times, filter_teachers, CatalogFilter, DashboardMetrics,
    ProposalStats, AVAILABILITY_OPTIONS, SESSION_DURATIONS_HOURS,
};
pub use state::AppState;
pub use store::Store;
pub use subscription::{ChangeFilter, ChangeKind, StateChange, StoreSubscription};
