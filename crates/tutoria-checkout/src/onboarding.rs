//! Teacher onboarding: submit an application, then pay to get listed.

use tracing::info;
use tutoria_core::{
    ExperienceBand, InstitutionType, Result, Teacher, TeacherProfile, WeeklySchedule,
};
use tutoria_store::Store;

/// Validate and record a teacher application.
///
/// Persists the profile and schedule, then parks the applicant as the
/// current teacher under a provisional id. The entry stays out of the
/// catalog; paying the commission only flips its `paid` flag.
pub async fn submit_application(
    store: &Store,
    profile: TeacherProfile,
    schedule: WeeklySchedule,
) -> Result<Teacher> {
    profile.validate()?;

    let teacher = Teacher::pending(&profile, schedule.clone());
    store.save_teacher_profile(profile).await?;
    store.update_teacher_schedule(schedule).await?;
    store.set_current_teacher(teacher.clone()).await?;

    info!("📋 application recorded for {} ({})", teacher.name, teacher.id);
    Ok(teacher)
}

/// The profile the onboarding form's autofill button enters.
pub fn demo_application() -> TeacherProfile {
    TeacherProfile {
        name: "Juan Torres".to_string(),
        email: "juan.torres@example.com".to_string(),
        phone: "+593 99 988 8777".to_string(),
        specialties: vec!["Matemática".to_string(), "Física".to_string()],
        experience: ExperienceBand::Years3To5,
        description: "Docente con amplia experiencia en matemáticas y física. Especializado en preparación para exámenes universitarios y apoyo escolar.".to_string(),
        location: "Quito, Ecuador".to_string(),
        institution: Some(InstitutionType::HighSchool),
        hourly_rate: 25.0,
        availability: "Mañana y tarde".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_application_fills_three_state_slices() {
        let store = Store::seeded();
        let profile = demo_application();
        let schedule = WeeklySchedule::default_template();

        let teacher = submit_application(&store, profile.clone(), schedule.clone())
            .await
            .unwrap();
        assert!(teacher.id.as_str().starts_with("temp_"));
        assert!(!teacher.paid);
        assert_eq!(teacher.experience, "3-5 años");

        let state = store.snapshot().await;
        assert_eq!(state.teacher_profile, Some(profile));
        assert_eq!(state.teacher_schedule, Some(schedule));
        assert_eq!(state.current_teacher, Some(teacher));
        // Applying leaves the public catalog alone.
        assert_eq!(state.teachers.len(), 25);
    }

    #[tokio::test]
    async fn test_invalid_application_touches_nothing() {
        let store = Store::seeded();
        let mut profile = demo_application();
        profile.email = "sin-arroba".to_string();

        let err = submit_application(&store, profile, WeeklySchedule::default_template())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Formato de email inválido"));
        assert_eq!(store.revision().await, 0);
    }

    #[test]
    fn test_demo_application_is_valid() {
        assert!(demo_application().validate().is_ok());
    }
}
