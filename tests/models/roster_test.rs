#[cfg(test)]
mod tests {
    use med_records::{EntityKind, Loader, LoaderConfig, Record, Roster};

    use crate::utils::{sample_line, write_temp_file};

    #[test]
    fn test_roster_holds_every_kind() {
        let mut loader = Loader::new(LoaderConfig::default());
        let mut roster = Roster::new();

        for kind in EntityKind::ALL {
            let file = write_temp_file(&[sample_line(kind), sample_line(kind)]);
            let summary = loader.load_into(&mut roster, kind, file.path());
            assert_eq!(summary.loaded, 2);
        }

        assert_eq!(roster.len(), 8);
        assert_eq!(roster.doctors().len(), 2);
        assert_eq!(roster.nurses().len(), 2);
        assert_eq!(roster.hospital_patients().len(), 2);
        assert_eq!(roster.ambulatory_patients().len(), 2);

        let ids: Vec<u64> = roster.iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());

        let nurse = roster.nurses()[1].id();
        assert_eq!(roster.find(nurse).map(Record::kind), Some(EntityKind::Nurse));
    }

    #[test]
    fn test_reload_replaces_one_kind() {
        let mut loader = Loader::default();
        let mut roster = Roster::new();

        let doctors = write_temp_file(&[sample_line(EntityKind::Doctor)]);
        let nurses = write_temp_file(&[sample_line(EntityKind::Nurse)]);
        loader.load_into(&mut roster, EntityKind::Doctor, doctors.path());
        loader.load_into(&mut roster, EntityKind::Nurse, nurses.path());
        let first_doctor = roster.doctors()[0].id();

        loader.load_into(&mut roster, EntityKind::Doctor, doctors.path());

        assert_eq!(roster.doctors().len(), 1);
        assert_ne!(roster.doctors()[0].id(), first_doctor);
        assert!(roster.find(first_doctor).is_none());
        assert_eq!(roster.nurses().len(), 1);
    }

    #[test]
    fn test_second_sequence_cannot_shadow_identifiers() {
        let doctors = write_temp_file(&[sample_line(EntityKind::Doctor)]);
        let nurses = write_temp_file(&[sample_line(EntityKind::Nurse)]);
        let mut roster = Roster::new();

        Loader::default().load_into(&mut roster, EntityKind::Doctor, doctors.path());
        Loader::default().load_into(&mut roster, EntityKind::Nurse, nurses.path());

        let doctor_id = roster.doctors()[0].id();
        assert_eq!(roster.find(doctor_id).map(Record::kind), Some(EntityKind::Doctor));
        assert!(roster.nurses().is_empty());
        assert_eq!(roster.len(), roster.iter().count());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_render_kind() {
        let mut loader = Loader::default();
        let mut roster = Roster::new();
        let file = write_temp_file(&[sample_line(EntityKind::HospitalPatient)]);
        loader.load_into(&mut roster, EntityKind::HospitalPatient, file.path());

        let rendered = roster.render_kind(EntityKind::HospitalPatient);
        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].starts_with("Номер: 1\nФИО: Иванов\nПол: муж."));
        assert!(roster.render_kind(EntityKind::Doctor).is_empty());
    }
}
