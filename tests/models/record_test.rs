#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use med_records::models::{Gender, HealthGroup, Profession, Rhesus};
    use med_records::{EntityKind, IdSequence, Loader, Record, RecordError, Role};

    use crate::utils::{empty_line, sample_fields, sample_line};

    fn parse(kind: EntityKind, line: &str) -> Record {
        Loader::default()
            .parse_line(kind, line)
            .expect("Line should have the right field count")
    }

    #[test]
    fn test_hospital_patient_rendering_order() {
        let record = parse(EntityKind::HospitalPatient, &sample_line(EntityKind::HospitalPatient));
        let lines = record.lines();

        assert_eq!(lines[0], "Номер: 1");
        assert_eq!(lines[1], "ФИО: Иванов");
        assert_eq!(lines[2], "Пол: муж.");
        assert_eq!(lines[3], "Дата рождения: 01.01.1980");
        assert!(record.is_clean(), "unexpected rejections: {:?}", record.rejections());

        let position = |line: &str| lines.iter().position(|l| l == line);
        let phone = position("Телефон: +7(900)123-45-67").expect("phone rendered");
        let blood = position("Группа крови: 2(+)").expect("blood rendered");
        let room = position("Палата: 12").expect("room rendered");
        assert!(phone < blood && blood < room);
        assert_eq!(lines.last().map(String::as_str), Some("Клинический диагноз: Стенокардия"));
    }

    #[test]
    fn test_doctor_fields() {
        let record = parse(EntityKind::Doctor, &sample_line(EntityKind::Doctor));

        let employment = record.employment().expect("doctor has employment data");
        assert_eq!(employment.profession(), Some(Profession::Doctor));
        assert_eq!(employment.graduation_year(), Some(2003));
        assert_eq!(employment.work_experience(), Some(20));

        let details = record.doctor_details().expect("doctor has details");
        assert_eq!(details.academic_degree(), Some(true));
        assert_eq!(details.academic_rank(), Some(false));
        assert_eq!(details.medical_errors(), Some("Нет"));
        assert!(record.nurse_duties().is_none());
        assert!(record.medical().is_none());

        let text = record.to_string();
        assert!(text.contains("Профессия: врач"));
        assert!(text.contains("Стаж: 20"));
        assert!(text.contains("Категория: первая"));
        assert!(text.contains("Ученая степень: да"));
        assert!(text.contains("Ученое звание: нет"));
    }

    #[test]
    fn test_invalid_values_become_absent() {
        let mut fields = sample_fields(EntityKind::Nurse);
        fields[1] = "male";
        fields[8] = "89001234567";
        fields[11] = "1949";
        let line = fields.join(";");

        let record = parse(EntityKind::Nurse, &line);

        assert_eq!(record.person().gender(), None);
        assert_eq!(record.person().phone(), None);
        assert_eq!(record.employment().and_then(|e| e.graduation_year()), None);
        assert_eq!(record.person().full_name(), Some("Иванов"));

        let rejected: Vec<&str> = record.rejections().iter().map(|r| r.field).collect();
        assert_eq!(rejected, vec!["gender", "phone", "graduation_year"]);

        let text = record.to_string();
        assert!(!text.contains("Пол:"));
        assert!(!text.contains("Телефон:"));
        assert!(!text.contains("Год окончания:"));
    }

    #[test]
    fn test_enumerations_are_case_insensitive() {
        let mut fields = sample_fields(EntityKind::AmbulatoryPatient);
        fields[1] = "ЖЕН.";
        fields[13] = "-";
        fields[17] = "iii";
        let record = parse(EntityKind::AmbulatoryPatient, &fields.join(";"));

        assert_eq!(record.person().gender(), Some(Gender::Female));
        assert_eq!(record.medical().and_then(|m| m.rhesus()), Some(Rhesus::Negative));
        assert_eq!(
            record.ambulatory_care().and_then(|c| c.health_group()),
            Some(HealthGroup::III)
        );
        let text = record.to_string();
        assert!(text.contains("Пол: жен."));
        assert!(text.contains("Группа здоровья: III"));
    }

    #[test]
    fn test_ambulatory_rendering_skips_sentinels() {
        let mut fields = sample_fields(EntityKind::AmbulatoryPatient);
        fields[16] = "0";
        fields[18] = "Не выявлено";
        let record = parse(EntityKind::AmbulatoryPatient, &fields.join(";"));

        let care = record.ambulatory_care().expect("ambulatory data");
        assert_eq!(care.disability(), Some(0));
        assert_eq!(care.chronic_diagnosis(), Some("Не выявлено"));

        let text = record.to_string();
        assert!(text.contains("Участок: 5"));
        assert!(!text.contains("Группа инвалидности"));
        assert!(!text.contains("Хронический диагноз"));

        fields[16] = "2";
        let record = parse(EntityKind::AmbulatoryPatient, &fields.join(";"));
        assert!(record.to_string().contains("Группа инвалидности: 2 группа"));
    }

    #[test]
    fn test_all_absent_record_renders_only_id() {
        let record = parse(EntityKind::Doctor, &empty_line(EntityKind::Doctor));

        assert_eq!(record.to_string(), "Номер: 1");
        assert!(record.is_clean());
        assert_eq!(record.summary(), "1.");
    }

    #[test]
    fn test_arity_mismatch_consumes_no_id() {
        let mut ids = IdSequence::new();
        let fields = sample_fields(EntityKind::Nurse);

        let err = Record::from_fields(EntityKind::HospitalPatient, &mut ids, &fields).unwrap_err();
        match err {
            RecordError::Arity { kind, expected, found } => {
                assert_eq!(kind, EntityKind::HospitalPatient);
                assert_eq!(expected, 18);
                assert_eq!(found, 19);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ids.issued(), 0);

        let record = Record::from_fields(EntityKind::Nurse, &mut ids, &fields).unwrap();
        assert_eq!(record.id().get(), 1);
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn test_setters_clear_rejected_values() {
        let mut record = parse(EntityKind::HospitalPatient, &sample_line(EntityKind::HospitalPatient));

        if let Role::HospitalPatient { stay, .. } = record.role_mut() {
            assert!(stay.set_room_number("-1").is_err());
            assert_eq!(stay.room_number(), None);
            assert!(stay.set_room_number("40").is_ok());
            assert_eq!(stay.room_number(), Some(40));
        } else {
            panic!("expected a hospital patient role");
        }

        let person = record.person_mut();
        let rejection = person.set_phone("+7 900 123 45 67").unwrap_err();
        assert_eq!(rejection.field, "phone");
        assert_eq!(person.phone(), None);
    }

    #[test]
    fn test_typed_dates() {
        let record = parse(EntityKind::Nurse, &sample_line(EntityKind::Nurse));
        let person = record.person();

        assert_eq!(person.birth_date(), NaiveDate::from_ymd_opt(1980, 1, 1));
        assert_eq!(person.passport_issue_date(), NaiveDate::from_ymd_opt(2020, 1, 1));
        let reference = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        assert_eq!(person.age_at(&reference), Some(40));
        assert_eq!(record.summary(), "1. Иванов");
    }
}
