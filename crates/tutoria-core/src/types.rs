//! Common types used across the Contrata Docentes marketplace.

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Role a person is acting under in the app.
///
/// The active role lives in the application state as an `Option<Role>`;
/// `None` means no role has been chosen yet (or the selection was reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A student (or parent) looking for a tutor.
    #[serde(rename = "usuario")]
    User,
    /// A tutor offering classes.
    #[serde(rename = "docente")]
    Teacher,
    /// Back-office operator looking at aggregate metrics.
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// The role token as the app displays it.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "usuario",
            Role::Teacher => "docente",
            Role::Admin => "admin",
        }
    }
}

/// Lifecycle status of a class proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProposalStatus {
    /// Waiting for the teacher's decision.
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    /// The teacher accepted the proposal.
    #[serde(rename = "aceptada")]
    Accepted,
    /// The teacher rejected the proposal.
    #[serde(rename = "rechazada")]
    Rejected,
}

impl ProposalStatus {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalStatus::Accepted | ProposalStatus::Rejected)
    }

    /// Returns true if the proposal is still waiting for a decision.
    pub fn is_open(&self) -> bool {
        matches!(self, ProposalStatus::Pending)
    }

    /// The status badge text shown next to a proposal.
    pub fn label(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pendiente",
            ProposalStatus::Accepted => "aceptada",
            ProposalStatus::Rejected => "rechazada",
        }
    }
}

/// Day of the week, used as the key of a [`crate::WeeklySchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Lunes")]
    Monday,
    #[serde(rename = "Martes")]
    Tuesday,
    #[serde(rename = "Miércoles")]
    Wednesday,
    #[serde(rename = "Jueves")]
    Thursday,
    #[serde(rename = "Viernes")]
    Friday,
    #[serde(rename = "Sábado")]
    Saturday,
    #[serde(rename = "Domingo")]
    Sunday,
}

impl Weekday {
    /// All days in calendar order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// The day name as it appears in schedules.
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }

    /// Map from a `chrono` weekday (for date arithmetic over schedules).
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Kind of institution a teacher works at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstitutionType {
    /// Primary school ("escuela").
    #[serde(rename = "escuela")]
    School,
    /// Secondary school ("colegio").
    #[serde(rename = "colegio")]
    HighSchool,
    /// University ("universidad").
    #[serde(rename = "universidad")]
    University,
}

impl InstitutionType {
    /// The display name used in the institution dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            InstitutionType::School => "Escuela",
            InstitutionType::HighSchool => "Colegio",
            InstitutionType::University => "Universidad",
        }
    }
}

/// Student level a teacher caters to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudentLevel {
    #[serde(rename = "Primaria")]
    Primary,
    #[serde(rename = "Secundaria")]
    Secondary,
    #[serde(rename = "Bachillerato")]
    HighSchool,
    #[serde(rename = "Universidad")]
    University,
    #[serde(rename = "Postgrado")]
    Postgraduate,
    #[serde(rename = "Adultos")]
    Adults,
}

impl StudentLevel {
    /// The display name used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            StudentLevel::Primary => "Primaria",
            StudentLevel::Secondary => "Secundaria",
            StudentLevel::HighSchool => "Bachillerato",
            StudentLevel::University => "Universidad",
            StudentLevel::Postgraduate => "Postgrado",
            StudentLevel::Adults => "Adultos",
        }
    }
}

/// Experience bracket offered in the onboarding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExperienceBand {
    /// Up to two years (the form default).
    #[default]
    #[serde(rename = "0-2 años")]
    Years0To2,
    #[serde(rename = "3-5 años")]
    Years3To5,
    #[serde(rename = "6-9 años")]
    Years6To9,
    #[serde(rename = "10+ años")]
    Years10Plus,
}

impl ExperienceBand {
    /// The bracket text as the form shows it.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::Years0To2 => "0-2 años",
            ExperienceBand::Years3To5 => "3-5 años",
            ExperienceBand::Years6To9 => "6-9 años",
            ExperienceBand::Years10Plus => "10+ años",
        }
    }
}
