#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use med_records::{EntityKind, LoadSummary, Loader, LoaderConfig};

    use crate::utils::{empty_line, sample_fields, sample_line, write_temp_file};

    #[test]
    fn test_wrong_arity_line_is_skipped() {
        let short = sample_fields(EntityKind::Nurse)[..10].join(";");
        let file = write_temp_file(&[
            sample_line(EntityKind::Nurse),
            short,
            sample_line(EntityKind::Nurse),
        ]);
        let mut loader = Loader::default();

        let (records, summary) = loader.load_file_with_summary(EntityKind::Nurse, file.path());

        assert_eq!(records.len(), 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.lines, 3);
        let ids: Vec<u64> = records.iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_undecodable_line_is_skipped() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "{}", sample_line(EntityKind::Nurse)).unwrap();
        file.write_all(b"\xff\xfe;bad\n").unwrap();
        writeln!(file, "{}", sample_line(EntityKind::Nurse)).unwrap();
        writeln!(file, "{}", sample_line(EntityKind::Nurse)).unwrap();
        file.flush().unwrap();
        let mut loader = Loader::default();

        let (records, summary) = loader.load_file_with_summary(EntityKind::Nurse, file.path());

        assert_eq!(records.len(), 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.lines, 4);
        let ids: Vec<u64> = records.iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_kind_mismatch_is_an_arity_failure() {
        // A hospital patient line has one field fewer than an ambulatory one
        let file = write_temp_file(&[sample_line(EntityKind::HospitalPatient)]);
        let mut loader = Loader::default();

        let records = loader.load_ambulatory_patients(file.path());

        assert!(records.is_empty());
        assert_eq!(loader.ids().issued(), 0);
    }

    #[test]
    fn test_missing_file_gives_empty_result() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("absent.txt");
        let mut loader = Loader::default();

        let (records, summary) = loader.load_file_with_summary(EntityKind::Doctor, &path);

        assert!(records.is_empty());
        assert_eq!(summary, LoadSummary::default());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let file = write_temp_file(&[
            String::new(),
            format!("{}\r", sample_line(EntityKind::HospitalPatient)),
            "   ".to_string(),
            empty_line(EntityKind::HospitalPatient),
        ]);
        let mut loader = Loader::default();

        let (records, summary) =
            loader.load_file_with_summary(EntityKind::HospitalPatient, file.path());

        assert_eq!(records.len(), 2);
        assert_eq!(
            summary,
            LoadSummary { lines: 4, loaded: 2, skipped: 0, blank: 2, rejected_fields: 0 }
        );
        assert_eq!(
            records[0].hospital_stay().and_then(|s| s.clinical_diagnosis()),
            Some("Стенокардия")
        );
    }

    #[test]
    fn test_identifiers_continue_across_files() {
        let doctors = write_temp_file(&[sample_line(EntityKind::Doctor)]);
        let patients = write_temp_file(&[
            sample_line(EntityKind::AmbulatoryPatient),
            sample_line(EntityKind::AmbulatoryPatient),
        ]);
        let mut loader = Loader::default();

        let doctors = loader.load_doctors(doctors.path());
        let patients = loader.load_ambulatory_patients(patients.path());

        assert_eq!(doctors[0].id().get(), 1);
        assert_eq!(patients[0].id().get(), 2);
        assert_eq!(patients[1].id().get(), 3);
        assert_eq!(loader.ids().peek().get(), 4);
    }

    #[test]
    fn test_rejected_fields_are_counted() {
        let mut fields = sample_fields(EntityKind::HospitalPatient);
        fields[12] = "5";
        fields[16] = "двенадцать";
        let file = write_temp_file(&[fields.join(";")]);
        let mut loader = Loader::new(LoaderConfig::default().with_rejection_warnings(true));

        let (records, summary) =
            loader.load_file_with_summary(EntityKind::HospitalPatient, file.path());

        assert_eq!(summary.rejected_fields, 2);
        let record = &records[0];
        assert_eq!(record.medical().and_then(|m| m.blood_type()), None);
        assert_eq!(record.hospital_stay().and_then(|s| s.room_number()), None);
        let text = record.to_string();
        assert!(!text.contains("Группа крови"));
        assert!(text.contains("Отделение: Кардиология"));
    }

    #[test]
    fn test_custom_delimiter_from_json_config() {
        let config = LoaderConfig::from_json_str(r#"{ "delimiter": "|" }"#).unwrap();
        assert!(config.trim_trailing_separator);
        let line = format!("{}|", sample_fields(EntityKind::Nurse).join("|"));
        let file = write_temp_file(&[line]);
        let mut loader = Loader::new(config);

        let records = loader.load_nurses(file.path());

        assert_eq!(records.len(), 1);
        assert!(records[0].is_clean());
    }

    #[test]
    fn test_try_load_reports_io_error() {
        let mut loader = Loader::default();
        let result = loader.try_load_file(EntityKind::Nurse, Path::new("/nonexistent/nurses.txt"));
        assert!(result.is_err());
    }
}
