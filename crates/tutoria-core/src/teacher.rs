//! Teacher catalog entities and weekly schedules.

use std::fmt;

use enum_map::EnumMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::TeacherProfile;
use crate::types::{InstitutionType, StudentLevel, Weekday};

/// Hour grid offered when editing a schedule.
pub const TIME_SLOTS: [&str; 16] = [
    "06:00", "07:00", "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00",
    "16:00", "17:00", "18:00", "19:00", "20:00", "21:00",
];

/// Identifier of a teacher.
///
/// Catalog entries use short ids (`t1`..), teachers still going through
/// onboarding get a `temp_` prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeacherId(String);

impl TeacherId {
    /// Create an id from a raw string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id for a teacher who has not been listed yet.
    pub fn onboarding() -> Self {
        Self(format!("temp_{}", Uuid::new_v4()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeacherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeacherId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TeacherId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Weekly availability: one list of "HH:MM" slots per weekday.
///
/// Every weekday key exists by construction, so a schedule can never be
/// missing a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule(EnumMap<Weekday, Vec<String>>);

impl WeeklySchedule {
    /// An empty schedule (all days without slots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schedule from one slot row per day, Monday first.
    pub fn from_rows(rows: [&[&str]; 7]) -> Self {
        Self(EnumMap::from_array(rows.map(|slots| {
            slots.iter().map(|slot| (*slot).to_string()).collect()
        })))
    }

    /// The template offered to teachers who have not set a schedule yet:
    /// weekday mornings and afternoons, Saturday mornings, Sunday off.
    pub fn default_template() -> Self {
        Self::from_rows([
            &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
            &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
            &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
            &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
            &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
            &["09:00", "10:00", "11:00"],
            &[],
        ])
    }

    /// The slots for one day.
    pub fn slots(&self, day: Weekday) -> &[String] {
        &self.0[day]
    }

    /// Replace the slots for one day.
    pub fn set_slots(&mut self, day: Weekday, slots: Vec<String>) {
        self.0[day] = slots;
    }

    /// Add the slot if absent, remove it if present. Slots stay sorted.
    pub fn toggle_slot(&mut self, day: Weekday, time: &str) {
        let slots = &mut self.0[day];
        if let Some(pos) = slots.iter().position(|slot| slot == time) {
            slots.remove(pos);
        } else {
            slots.push(time.to_string());
            slots.sort();
        }
    }

    /// Remove every slot for one day.
    pub fn clear_day(&mut self, day: Weekday) {
        self.0[day].clear();
    }

    /// Returns true if no day has any slot.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|slots| slots.is_empty())
    }

    /// Days that have at least one slot, in calendar order.
    pub fn active_days(&self) -> Vec<Weekday> {
        self.0
            .iter()
            .filter(|(_, slots)| !slots.is_empty())
            .map(|(day, _)| day)
            .collect()
    }
}

/// A tutor as listed in the public catalog.
///
/// Everything except the `paid` flag is immutable once listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier for this teacher.
    pub id: TeacherId,

    /// Full display name.
    pub name: String,

    /// Subjects the teacher offers.
    pub specialties: Vec<String>,

    /// Free-text experience summary ("5 años enseñando nivel secundario").
    pub experience: String,

    /// Free-text availability summary ("Lunes a Viernes").
    pub availability: String,

    /// City the teacher works from.
    pub location: String,

    /// Kind of institution the teacher works at, when declared.
    #[serde(default)]
    pub institution: Option<InstitutionType>,

    /// Student levels the teacher caters to, when declared.
    #[serde(default)]
    pub levels: Vec<StudentLevel>,

    /// Free-text presentation shown on the detail page.
    pub description: String,

    /// Price per hour of class, in USD.
    pub hourly_rate: f64,

    /// Whether the listing commission has been paid.
    #[serde(default)]
    pub paid: bool,

    /// Bookable weekly slots.
    pub weekly_schedule: WeeklySchedule,
}

impl Teacher {
    /// Build the not-yet-listed record for a teacher who just submitted the
    /// onboarding form. Payment is still owed, so `paid` starts false.
    pub fn pending(profile: &TeacherProfile, schedule: WeeklySchedule) -> Self {
        Self {
            id: TeacherId::onboarding(),
            name: profile.name.clone(),
            specialties: profile.specialties.clone(),
            experience: profile.experience.label().to_string(),
            availability: profile.availability.clone(),
            location: profile.location.clone(),
            institution: profile.institution,
            levels: Vec::new(),
            description: profile.description.clone(),
            hourly_rate: profile.hourly_rate,
            paid: false,
            weekly_schedule: schedule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_always_has_all_days() {
        let schedule = WeeklySchedule::new();
        for day in Weekday::ALL {
            assert!(schedule.slots(day).is_empty());
        }
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_toggle_slot_keeps_slots_sorted() {
        let mut schedule = WeeklySchedule::new();
        schedule.toggle_slot(Weekday::Monday, "14:00");
        schedule.toggle_slot(Weekday::Monday, "08:00");
        assert_eq!(schedule.slots(Weekday::Monday), ["08:00", "14:00"]);

        schedule.toggle_slot(Weekday::Monday, "14:00");
        assert_eq!(schedule.slots(Weekday::Monday), ["08:00"]);
    }

    #[test]
    fn test_default_template_shape() {
        let schedule = WeeklySchedule::default_template();
        assert_eq!(schedule.slots(Weekday::Monday).len(), 6);
        assert_eq!(schedule.slots(Weekday::Saturday), ["09:00", "10:00", "11:00"]);
        assert!(schedule.slots(Weekday::Sunday).is_empty());
        assert_eq!(schedule.active_days().len(), 6);
    }

    #[test]
    fn test_schedule_serializes_with_day_names() {
        let schedule = WeeklySchedule::from_rows([&["08:00"], &[], &[], &[], &[], &[], &[]]);
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["Lunes"][0], "08:00");
        assert!(json["Domingo"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_pending_teacher_is_unpaid() {
        let profile = TeacherProfile {
            name: "Juan Torres".to_string(),
            email: "juan.torres@example.com".to_string(),
            phone: "+593 99 988 8777".to_string(),
            specialties: vec!["Matemática".to_string()],
            experience: crate::types::ExperienceBand::Years3To5,
            description: "Apoyo escolar".to_string(),
            location: "Quito".to_string(),
            institution: Some(InstitutionType::HighSchool),
            hourly_rate: 25.0,
            availability: "Mañana y tarde".to_string(),
        };

        let teacher = Teacher::pending(&profile, WeeklySchedule::default_template());
        assert!(teacher.id.as_str().starts_with("temp_"));
        assert!(!teacher.paid);
        assert_eq!(teacher.experience, "3-5 años");
        assert!(teacher.levels.is_empty());
    }
}
