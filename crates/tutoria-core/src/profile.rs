//! Self-reported profiles and their validation rules.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TutoriaError};
use crate::types::{ExperienceBand, InstitutionType};

/// Registration data for a student (or parent) requesting classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,

    /// Street address for in-person classes.
    pub address: String,
}

impl UserProfile {
    /// Validate the registration form: every field is required.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(TutoriaError::InvalidProfile {
                    field: field.to_string(),
                    message: "Nombre, email, teléfono y dirección son obligatorios.".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Onboarding data a teacher fills in before paying the listing commission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    /// Full name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone.
    pub phone: String,

    /// Subjects offered, free-form tags.
    pub specialties: Vec<String>,

    /// Experience bracket chosen in the form.
    pub experience: ExperienceBand,

    /// Free-text presentation ("Cuéntanos sobre tu experiencia").
    pub description: String,

    /// City the teacher works from.
    pub location: String,

    /// Kind of institution the teacher works at, if any.
    #[serde(default)]
    pub institution: Option<InstitutionType>,

    /// Asking price per hour of class, in USD.
    pub hourly_rate: f64,

    /// Free-text availability summary ("Mañana y tarde").
    pub availability: String,
}

impl TeacherProfile {
    /// Validate the onboarding form.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "Nombre es obligatorio"));
        }
        if self.name.chars().count() < 2 {
            return Err(invalid("name", "Nombre debe tener al menos 2 caracteres"));
        }
        if self.email.trim().is_empty() {
            return Err(invalid("email", "Email es obligatorio"));
        }
        if !looks_like_email(&self.email) {
            return Err(invalid("email", "Formato de email inválido"));
        }
        if self.phone.trim().is_empty() {
            return Err(invalid("phone", "Teléfono es obligatorio"));
        }
        if self.phone.chars().count() < 10 {
            return Err(invalid("phone", "Teléfono debe tener al menos 10 dígitos"));
        }
        if !self.hourly_rate.is_finite() || self.hourly_rate < 0.0 {
            return Err(invalid("hourly_rate", "Precio debe ser un número válido"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> TutoriaError {
    TutoriaError::InvalidProfile {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Email shape check: one `@`, no whitespace, and a dotted domain.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_teacher_profile() -> TeacherProfile {
        TeacherProfile {
            name: "Juan Torres".to_string(),
            email: "juan.torres@example.com".to_string(),
            phone: "+593 99 988 8777".to_string(),
            specialties: vec!["Matemática".to_string(), "Física".to_string()],
            experience: ExperienceBand::Years3To5,
            description: "Docente con amplia experiencia en matemáticas y física.".to_string(),
            location: "Quito, Ecuador".to_string(),
            institution: Some(InstitutionType::HighSchool),
            hourly_rate: 25.0,
            availability: "Mañana y tarde".to_string(),
        }
    }

    #[test]
    fn test_user_profile_requires_every_field() {
        let profile = UserProfile {
            name: "Carla Fernández".to_string(),
            email: "carla.fernandez@example.com".to_string(),
            phone: "+593 98 765 4321".to_string(),
            address: "Av. Amazonas 123, Quito, Ecuador".to_string(),
        };
        assert!(profile.validate().is_ok());

        let mut missing_address = profile.clone();
        missing_address.address = "  ".to_string();
        assert!(missing_address.validate().is_err());
    }

    #[test]
    fn test_teacher_profile_valid() {
        assert!(valid_teacher_profile().validate().is_ok());
    }

    #[test]
    fn test_teacher_profile_rejects_bad_email() {
        let mut profile = valid_teacher_profile();
        profile.email = "juan.torres@example".to_string();
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, TutoriaError::InvalidProfile { ref field, .. } if field == "email"));
    }

    #[test]
    fn test_teacher_profile_rejects_short_phone() {
        let mut profile = valid_teacher_profile();
        profile.phone = "099".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_teacher_profile_rejects_negative_rate() {
        let mut profile = valid_teacher_profile();
        profile.hourly_rate = -1.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ana@example.com"));
        assert!(looks_like_email("a.b@sub.example.org"));
        assert!(!looks_like_email("ana@example"));
        assert!(!looks_like_email("ana example@x.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ana@.com"));
    }
}
