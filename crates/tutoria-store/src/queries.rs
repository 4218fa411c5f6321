//! Read-side helpers over a state snapshot.
//!
//! Nothing here mutates; every function takes a snapshot (or a piece
//! of one) and derives what a screen would show: the filtered catalog,
//! dashboard counters, proposal stats and bookable dates.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tutoria_core::{InstitutionType, ProposalStatus, Teacher, Weekday};

use crate::state::AppState;

/// Availability picker options shown above the catalog.
pub const AVAILABILITY_OPTIONS: [&str; 3] = ["Mañana", "Tarde", "Noche"];

/// Class lengths offered in the booking form, in hours.
pub const SESSION_DURATIONS_HOURS: [u8; 3] = [1, 2, 3];

/// Criteria for narrowing the teacher catalog.
///
/// Empty criteria match everything; criteria combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Specialty that must appear verbatim in the teacher's list.
    pub specialty: Option<String>,
    /// Case-insensitive fragment of the availability text.
    pub availability: Option<String>,
    /// Institution type the teacher must teach at.
    pub institution: Option<InstitutionType>,
}

impl CatalogFilter {
    /// Filter that matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only teachers listing this specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    /// Keep only teachers whose availability text contains this fragment.
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Keep only teachers at this institution type.
    pub fn with_institution(mut self, institution: InstitutionType) -> Self {
        self.institution = Some(institution);
        self
    }

    /// Check one catalog entry against the criteria.
    pub fn matches(&self, teacher: &Teacher) -> bool {
        if let Some(specialty) = &self.specialty {
            if !teacher.specialties.iter().any(|s| s == specialty) {
                return false;
            }
        }
        if let Some(availability) = &self.availability {
            let haystack = teacher.availability.to_lowercase();
            if !haystack.contains(&availability.to_lowercase()) {
                return false;
            }
        }
        if let Some(institution) = self.institution {
            if teacher.institution != Some(institution) {
                return false;
            }
        }
        true
    }
}

/// The catalog entries matching a filter, in catalog order.
pub fn filter_teachers<'a>(state: &'a AppState, filter: &CatalogFilter) -> Vec<&'a Teacher> {
    state
        .teachers
        .iter()
        .filter(|teacher| filter.matches(teacher))
        .collect()
}

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// The single demo account counts as one once registered.
    pub registered_users: usize,
    pub registered_teachers: usize,
    pub total_proposals: usize,
    pub accepted_proposals: usize,
    pub rejected_proposals: usize,
}

impl DashboardMetrics {
    /// Derive the counters from a snapshot.
    pub fn collect(state: &AppState) -> Self {
        Self {
            registered_users: usize::from(state.user_profile.is_some()),
            registered_teachers: state.teachers.len(),
            total_proposals: state.proposals.len(),
            accepted_proposals: count_status(state, ProposalStatus::Accepted),
            rejected_proposals: count_status(state, ProposalStatus::Rejected),
        }
    }
}

/// Status breakdown shown at the top of the proposal inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalStats {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl ProposalStats {
    /// Derive the breakdown from a snapshot.
    pub fn collect(state: &AppState) -> Self {
        Self {
            pending: count_status(state, ProposalStatus::Pending),
            accepted: count_status(state, ProposalStatus::Accepted),
            rejected: count_status(state, ProposalStatus::Rejected),
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.accepted + self.rejected
    }
}

fn count_status(state: &AppState, status: ProposalStatus) -> usize {
    state
        .proposals
        .iter()
        .filter(|proposal| proposal.status == status)
        .count()
}

/// Dates within `horizon_days` of `from` (inclusive) on which the
/// teacher has at least one slot.
pub fn available_dates(teacher: &Teacher, from: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
    (0..i64::from(horizon_days))
        .filter_map(|offset| {
            let date = from + Duration::days(offset);
            let day = Weekday::from_chrono(date.weekday());
            if teacher.weekly_schedule.slots(day).is_empty() {
                None
            } else {
                Some(date)
            }
        })
        .collect()
}

/// The bookable slots for a teacher on one date.
pub fn available_times(teacher: &Teacher, date: NaiveDate) -> &[String] {
    teacher
        .weekly_schedule
        .slots(Weekday::from_chrono(date.weekday()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use tutoria_core::UserProfile;

    #[test]
    fn test_empty_filter_returns_whole_catalog() {
        let state = AppState::seeded();
        assert_eq!(filter_teachers(&state, &CatalogFilter::new()).len(), 25);
    }

    #[test]
    fn test_specialty_filter_is_exact_membership() {
        let state = AppState::seeded();
        let filter = CatalogFilter::new().with_specialty("Matemática");
        let hits = filter_teachers(&state, &filter);
        // t1, t14 and t16 list Matemática verbatim.
        let ids: Vec<&str> = hits.iter().map(|teacher| teacher.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t14", "t16"]);

        // A substring of a specialty is not a match.
        let partial = CatalogFilter::new().with_specialty("Matemátic");
        assert!(filter_teachers(&state, &partial).is_empty());
    }

    #[test]
    fn test_availability_filter_is_case_insensitive_substring() {
        let state = AppState::seeded();
        let filter = CatalogFilter::new().with_availability("mañana");
        let hits = filter_teachers(&state, &filter);
        // Matches both "Mañana" and "Mañana y tarde".
        assert!(hits.iter().any(|teacher| teacher.id.as_str() == "t3"));
        assert!(hits.iter().any(|teacher| teacher.id.as_str() == "t9"));
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let state = AppState::seeded();
        let filter = CatalogFilter::new()
            .with_specialty("Física")
            .with_institution(InstitutionType::HighSchool);
        let ids: Vec<&str> = filter_teachers(&state, &filter)
            .iter()
            .map(|teacher| teacher.id.as_str())
            .collect();
        // t1 lists Física second, t16 first; t17 is a university.
        assert_eq!(ids, vec!["t1", "t16"]);
    }

    #[test]
    fn test_dashboard_metrics_on_seeded_state() {
        let state = AppState::seeded();
        let metrics = DashboardMetrics::collect(&state);
        assert_eq!(metrics.registered_users, 0);
        assert_eq!(metrics.registered_teachers, 25);
        assert_eq!(metrics.total_proposals, 15);
        assert_eq!(metrics.accepted_proposals, 6);
        assert_eq!(metrics.rejected_proposals, 3);

        let registered = state
            .apply(Action::SaveUserProfile {
                profile: UserProfile {
                    name: "Carla Fernández".to_string(),
                    email: "carla.fernandez@example.com".to_string(),
                    phone: "+593 98 765 4321".to_string(),
                    address: "Av. Amazonas 123, Quito, Ecuador".to_string(),
                },
            })
            .unwrap();
        assert_eq!(DashboardMetrics::collect(&registered).registered_users, 1);
    }

    #[test]
    fn test_proposal_stats_add_up() {
        let state = AppState::seeded();
        let stats = ProposalStats::collect(&state);
        assert_eq!(stats.pending, 6);
        assert_eq!(stats.accepted, 6);
        assert_eq!(stats.rejected, 3);
        assert_eq!(stats.total(), 15);
    }

    #[test]
    fn test_available_dates_skip_empty_days() {
        let state = AppState::seeded();
        // t2 only teaches on weekends.
        let t2 = state.teacher(&"t2".into()).unwrap();
        // 2025-06-02 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let dates = available_dates(t2, monday, 14);
        assert_eq!(dates.len(), 4);
        for date in &dates {
            let day = Weekday::from_chrono(date.weekday());
            assert!(matches!(day, Weekday::Saturday | Weekday::Sunday));
        }
    }

    #[test]
    fn test_available_times_follow_the_weekday() {
        let state = AppState::seeded();
        let t1 = state.teacher(&"t1".into()).unwrap();
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(available_times(t1, monday).len(), 6);
        assert!(available_times(t1, saturday).is_empty());
    }
}
