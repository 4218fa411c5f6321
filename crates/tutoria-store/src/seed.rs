//! Demo fixtures: the seeded teacher catalog and proposal inbox.
//!
//! The catalog carries 25 entries (`t1`..`t25`); 18 have already paid
//! the listing commission, `t6`..`t12` have not. The inbox carries the
//! 15 proposals (`p_demo1`..`p_demo15`) a teacher finds on first
//! sign-in: 6 pending, 6 accepted, 3 rejected.

use tutoria_core::{
    InstitutionType, Proposal, ProposalStatus, Requester, StudentLevel, Teacher, WeeklySchedule,
};

/// The 25 demo catalog entries.
pub fn demo_teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: "t1".into(),
            name: "Ana García".into(),
            specialties: vec!["Matemática".into(), "Física".into()],
            experience: "5 años enseñando nivel secundario".into(),
            availability: "Lunes a Viernes".into(),
            location: "Quito".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Docente especializada en matemáticas y física con amplia experiencia en preparación para exámenes universitarios.".into(),
            hourly_rate: 25.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t2".into(),
            name: "Luis Pérez".into(),
            specialties: vec!["Inglés".into(), "Literatura".into()],
            experience: "8 años en academias".into(),
            availability: "Fines de semana".into(),
            location: "Guayaquil".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Adults],
            description: "Profesor de inglés nativo con certificación internacional y experiencia en preparación para exámenes TOEFL.".into(),
            hourly_rate: 30.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &[],
                &[],
                &[],
                &[],
                &[],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
            ]),
        },
        Teacher {
            id: "t3".into(),
            name: "María Rodríguez".into(),
            specialties: vec!["Química".into(), "Biología".into()],
            experience: "3 años en laboratorios".into(),
            availability: "Mañana y tarde".into(),
            location: "Quito".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Postgraduate],
            description: "Química farmacéutica con experiencia en investigación y docencia universitaria.".into(),
            hourly_rate: 22.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["09:00", "10:00", "14:00", "15:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t4".into(),
            name: "Carlos Mendoza".into(),
            specialties: vec!["Historia".into(), "Geografía".into()],
            experience: "10 años en colegios".into(),
            availability: "Lunes a Jueves".into(),
            location: "Guayaquil".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Primary, StudentLevel::Secondary],
            description: "Historiador con maestría en educación y especialización en historia latinoamericana.".into(),
            hourly_rate: 20.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t5".into(),
            name: "Sofia Herrera".into(),
            specialties: vec!["Arte".into(), "Dibujo".into()],
            experience: "6 años como artista".into(),
            availability: "Fines de semana".into(),
            location: "Cuenca".into(),
            institution: Some(InstitutionType::School),
            levels: vec![
                StudentLevel::Primary,
                StudentLevel::Secondary,
                StudentLevel::Adults,
            ],
            description: "Artista plástica con experiencia en técnicas tradicionales y digitales.".into(),
            hourly_rate: 18.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &[],
                &[],
                &[],
                &[],
                &[],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
            ]),
        },
        Teacher {
            id: "t6".into(),
            name: "Roberto Silva".into(),
            specialties: vec!["Música".into(), "Piano".into()],
            experience: "12 años como músico".into(),
            availability: "Tarde y noche".into(),
            location: "Ambato".into(),
            institution: None,
            levels: vec![],
            description: "Pianista profesional con formación clásica y experiencia en composición.".into(),
            hourly_rate: 35.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t7".into(),
            name: "Elena Vargas".into(),
            specialties: vec!["Francés".into(), "Español".into()],
            experience: "4 años en institutos".into(),
            availability: "Lunes a Viernes".into(),
            location: "Loja".into(),
            institution: None,
            levels: vec![],
            description: "Lingüista con certificación DELF y experiencia en enseñanza de idiomas.".into(),
            hourly_rate: 28.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00", "17:00"],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t8".into(),
            name: "Diego Morales".into(),
            specialties: vec!["Informática".into(), "Programación".into()],
            experience: "7 años en desarrollo".into(),
            availability: "Fines de semana".into(),
            location: "Machala".into(),
            institution: None,
            levels: vec![],
            description: "Ingeniero en sistemas con experiencia en desarrollo web y móvil.".into(),
            hourly_rate: 40.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &[],
                &[],
                &[],
                &[],
                &[],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
            ]),
        },
        Teacher {
            id: "t9".into(),
            name: "Patricia Cruz".into(),
            specialties: vec!["Psicología".into(), "Orientación".into()],
            experience: "9 años clínica".into(),
            availability: "Mañana".into(),
            location: "Portoviejo".into(),
            institution: None,
            levels: vec![],
            description: "Psicóloga clínica especializada en terapia cognitivo-conductual.".into(),
            hourly_rate: 32.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t10".into(),
            name: "Fernando Torres".into(),
            specialties: vec!["Economía".into(), "Contabilidad".into()],
            experience: "11 años en empresas".into(),
            availability: "Noche".into(),
            location: "Riobamba".into(),
            institution: None,
            levels: vec![],
            description: "Economista con MBA y experiencia en consultoría financiera.".into(),
            hourly_rate: 38.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t11".into(),
            name: "Carmen Jiménez".into(),
            specialties: vec!["Filosofía".into(), "Ética".into()],
            experience: "15 años universidad".into(),
            availability: "Lunes a Miércoles".into(),
            location: "Ibarra".into(),
            institution: None,
            levels: vec![],
            description: "Filósofa con doctorado y experiencia en investigación académica.".into(),
            hourly_rate: 26.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t12".into(),
            name: "Andrés López".into(),
            specialties: vec!["Educación Física".into(), "Deportes".into()],
            experience: "8 años en colegios".into(),
            availability: "Tarde".into(),
            location: "Esmeraldas".into(),
            institution: None,
            levels: vec![],
            description: "Profesor de educación física con certificación en entrenamiento deportivo.".into(),
            hourly_rate: 24.0,
            paid: false,
            weekly_schedule: WeeklySchedule::from_rows([
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t13".into(),
            name: "Gabriela Mendoza".into(),
            specialties: vec!["Biología".into(), "Ciencias Naturales".into()],
            experience: "5 años en laboratorios".into(),
            availability: "Lunes a Viernes".into(),
            location: "Sangolquí".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Bióloga con especialización en ciencias naturales y experiencia en laboratorios.".into(),
            hourly_rate: 23.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t14".into(),
            name: "Ricardo Vásquez".into(),
            specialties: vec!["Matemática".into(), "Estadística".into()],
            experience: "8 años en universidades".into(),
            availability: "Tarde y noche".into(),
            location: "Milagro".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Postgraduate],
            description: "Matemático con maestría en estadística y experiencia en investigación.".into(),
            hourly_rate: 35.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00", "18:00", "19:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t15".into(),
            name: "Valentina Castro".into(),
            specialties: vec!["Literatura".into(), "Redacción".into()],
            experience: "6 años en academias".into(),
            availability: "Mañana".into(),
            location: "Gualaceo".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Licenciada en literatura con experiencia en técnicas de redacción y análisis.".into(),
            hourly_rate: 21.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t16".into(),
            name: "Miguel Herrera".into(),
            specialties: vec!["Física".into(), "Matemática".into()],
            experience: "10 años en colegios".into(),
            availability: "Lunes a Jueves".into(),
            location: "Daule".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Físico con experiencia en preparación para exámenes de admisión universitaria.".into(),
            hourly_rate: 28.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t17".into(),
            name: "Isabel Ramírez".into(),
            specialties: vec!["Química".into(), "Física".into()],
            experience: "7 años en laboratorios".into(),
            availability: "Fines de semana".into(),
            location: "Samborondón".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Postgraduate],
            description: "Química con doctorado y experiencia en investigación científica.".into(),
            hourly_rate: 42.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &[],
                &[],
                &[],
                &[],
                &[],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
            ]),
        },
        Teacher {
            id: "t18".into(),
            name: "Carlos Benítez".into(),
            specialties: vec!["Historia".into(), "Geografía".into()],
            experience: "12 años en colegios".into(),
            availability: "Tarde".into(),
            location: "Paute".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Primary, StudentLevel::Secondary],
            description: "Historiador con especialización en geografía del Ecuador y América Latina.".into(),
            hourly_rate: 22.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t19".into(),
            name: "Lucía Fernández".into(),
            specialties: vec!["Inglés".into(), "Francés".into()],
            experience: "9 años en institutos".into(),
            availability: "Mañana y tarde".into(),
            location: "Jipijapa".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Adults],
            description: "Lingüista con certificaciones internacionales en inglés y francés.".into(),
            hourly_rate: 33.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["09:00", "10:00", "14:00", "15:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t20".into(),
            name: "Oscar Delgado".into(),
            specialties: vec!["Programación".into(), "Informática".into()],
            experience: "11 años en desarrollo".into(),
            availability: "Noche".into(),
            location: "Pedernales".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Postgraduate],
            description: "Ingeniero en sistemas con experiencia en desarrollo de software y aplicaciones móviles.".into(),
            hourly_rate: 45.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["18:00", "19:00", "20:00", "21:00"],
                &["18:00", "19:00", "20:00", "21:00"],
                &["18:00", "19:00", "20:00", "21:00"],
                &["18:00", "19:00", "20:00", "21:00"],
                &["18:00", "19:00", "20:00", "21:00"],
                &["18:00", "19:00", "20:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t21".into(),
            name: "Adriana Morales".into(),
            specialties: vec!["Psicología".into(), "Orientación".into()],
            experience: "8 años clínica".into(),
            availability: "Lunes a Viernes".into(),
            location: "Huaquillas".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Psicóloga educativa especializada en orientación vocacional y desarrollo adolescente.".into(),
            hourly_rate: 29.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &["08:00", "09:00", "10:00", "14:00", "15:00", "16:00"],
                &[],
                &[],
            ]),
        },
        Teacher {
            id: "t22".into(),
            name: "Javier Rojas".into(),
            specialties: vec!["Economía".into(), "Contabilidad".into()],
            experience: "13 años en empresas".into(),
            availability: "Fines de semana".into(),
            location: "Cevallos".into(),
            institution: Some(InstitutionType::University),
            levels: vec![StudentLevel::University, StudentLevel::Postgraduate],
            description: "Economista con MBA y experiencia en consultoría empresarial y análisis financiero.".into(),
            hourly_rate: 40.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &[],
                &[],
                &[],
                &[],
                &[],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
                &["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"],
            ]),
        },
        Teacher {
            id: "t23".into(),
            name: "Monica Salazar".into(),
            specialties: vec!["Arte".into(), "Dibujo".into()],
            experience: "7 años como artista".into(),
            availability: "Tarde".into(),
            location: "Chambo".into(),
            institution: Some(InstitutionType::School),
            levels: vec![StudentLevel::Primary, StudentLevel::Secondary],
            description: "Artista visual con experiencia en técnicas de dibujo y pintura para niños y jóvenes.".into(),
            hourly_rate: 19.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00", "17:00"],
                &["14:00", "15:00", "16:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t24".into(),
            name: "Roberto Paz".into(),
            specialties: vec!["Música".into(), "Guitarra".into()],
            experience: "14 años como músico".into(),
            availability: "Noche".into(),
            location: "Cotacachi".into(),
            institution: Some(InstitutionType::School),
            levels: vec![
                StudentLevel::Primary,
                StudentLevel::Secondary,
                StudentLevel::Adults,
            ],
            description: "Guitarrista profesional con experiencia en música clásica y popular.".into(),
            hourly_rate: 32.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00", "20:00"],
                &["18:00", "19:00"],
                &[],
            ]),
        },
        Teacher {
            id: "t25".into(),
            name: "Patricia Vega".into(),
            specialties: vec!["Biología".into(), "Ciencias Naturales".into()],
            experience: "6 años en laboratorios".into(),
            availability: "Mañana".into(),
            location: "Otavalo".into(),
            institution: Some(InstitutionType::HighSchool),
            levels: vec![StudentLevel::Secondary, StudentLevel::HighSchool],
            description: "Bióloga con especialización en ciencias ambientales y conservación.".into(),
            hourly_rate: 24.0,
            paid: true,
            weekly_schedule: WeeklySchedule::from_rows([
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00", "11:00"],
                &["08:00", "09:00", "10:00"],
                &[],
            ]),
        },
    ]
}

/// The 15 demo proposals a teacher finds on first sign-in.
pub fn demo_proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: "p_demo1".into(),
            teacher_id: "t1".into(),
            requester: Requester {
                name: "Carlos Ruiz".into(),
                email: "carlos@example.com".into(),
                phone: "+593 99 911 1222".into(),
            },
            message: "Clases de Matemática para mi hijo los sábados.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo2".into(),
            teacher_id: "t2".into(),
            requester: Requester {
                name: "María López".into(),
                email: "maria@example.com".into(),
                phone: "+593 98 833 3444".into(),
            },
            message: "Inglés conversacional 2 veces por semana.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
        Proposal {
            id: "p_demo3".into(),
            teacher_id: "t3".into(),
            requester: Requester {
                name: "Ana Martínez".into(),
                email: "ana@example.com".into(),
                phone: "+593 987 654 321".into(),
            },
            message: "Necesito ayuda con química orgánica para la universidad.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo4".into(),
            teacher_id: "t4".into(),
            requester: Requester {
                name: "Luis González".into(),
                email: "luis@example.com".into(),
                phone: "+593 912 345 678".into(),
            },
            message: "Clases de historia del Ecuador para preparar examen.".into(),
            status: ProposalStatus::Rejected,
            booking: None,
        },
        Proposal {
            id: "p_demo5".into(),
            teacher_id: "t5".into(),
            requester: Requester {
                name: "Sofia Herrera".into(),
                email: "sofia@example.com".into(),
                phone: "+593 923 456 789".into(),
            },
            message: "Quiero aprender técnicas de dibujo y pintura.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
        Proposal {
            id: "p_demo6".into(),
            teacher_id: "t6".into(),
            requester: Requester {
                name: "Roberto Silva".into(),
                email: "roberto@example.com".into(),
                phone: "+593 934 567 890".into(),
            },
            message: "Clases de piano para mi hija de 8 años.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo7".into(),
            teacher_id: "t7".into(),
            requester: Requester {
                name: "Elena Vargas".into(),
                email: "elena@example.com".into(),
                phone: "+593 945 678 901".into(),
            },
            message: "Necesito prepararme para el examen DELF de francés.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
        Proposal {
            id: "p_demo8".into(),
            teacher_id: "t8".into(),
            requester: Requester {
                name: "Diego Morales".into(),
                email: "diego@example.com".into(),
                phone: "+593 956 789 012".into(),
            },
            message: "Quiero aprender programación en Python desde cero.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo9".into(),
            teacher_id: "t9".into(),
            requester: Requester {
                name: "Patricia Cruz".into(),
                email: "patricia@example.com".into(),
                phone: "+593 967 890 123".into(),
            },
            message: "Busco orientación psicológica para mi hijo adolescente.".into(),
            status: ProposalStatus::Rejected,
            booking: None,
        },
        Proposal {
            id: "p_demo10".into(),
            teacher_id: "t10".into(),
            requester: Requester {
                name: "Fernando Torres".into(),
                email: "fernando@example.com".into(),
                phone: "+593 978 901 234".into(),
            },
            message: "Clases de contabilidad para mi negocio.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
        Proposal {
            id: "p_demo11".into(),
            teacher_id: "t11".into(),
            requester: Requester {
                name: "Carmen Jiménez".into(),
                email: "carmen@example.com".into(),
                phone: "+593 989 012 345".into(),
            },
            message: "Estudio de filosofía para preparar tesis de grado.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo12".into(),
            teacher_id: "t12".into(),
            requester: Requester {
                name: "Andrés López".into(),
                email: "andres@example.com".into(),
                phone: "+593 990 123 456".into(),
            },
            message: "Entrenamiento personal para mejorar condición física.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
        Proposal {
            id: "p_demo13".into(),
            teacher_id: "t1".into(),
            requester: Requester {
                name: "Isabel Moreno".into(),
                email: "isabel@example.com".into(),
                phone: "+593 901 234 567".into(),
            },
            message: "Clases de física para preparar examen de admisión.".into(),
            status: ProposalStatus::Accepted,
            booking: None,
        },
        Proposal {
            id: "p_demo14".into(),
            teacher_id: "t2".into(),
            requester: Requester {
                name: "Miguel Ángel".into(),
                email: "miguel@example.com".into(),
                phone: "+593 912 345 678".into(),
            },
            message: "Inglés para negocios y presentaciones.".into(),
            status: ProposalStatus::Rejected,
            booking: None,
        },
        Proposal {
            id: "p_demo15".into(),
            teacher_id: "t3".into(),
            requester: Requester {
                name: "Valentina Ruiz".into(),
                email: "valentina@example.com".into(),
                phone: "+593 923 456 789".into(),
            },
            message: "Biología celular para estudiantes de medicina.".into(),
            status: ProposalStatus::Pending,
            booking: None,
        },
    ]
}
