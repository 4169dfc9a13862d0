//! Collections of loaded records
//!
//! A [`Roster`] keeps one list per entity kind, in load order, and indexes all
//! records by identifier.

use rustc_hash::FxHashMap;

use super::identity::RecordId;
use super::record::{EntityKind, Record};

/// Loaded records, one list per entity kind
#[derive(Debug, Clone, Default)]
pub struct Roster {
    doctors: Vec<Record>,
    nurses: Vec<Record>,
    hospital_patients: Vec<Record>,
    ambulatory_patients: Vec<Record>,
    /// Position of each record by identifier
    index: FxHashMap<RecordId, (EntityKind, usize)>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of one kind, in load order
    #[must_use]
    pub fn records(&self, kind: EntityKind) -> &[Record] {
        match kind {
            EntityKind::Doctor => &self.doctors,
            EntityKind::Nurse => &self.nurses,
            EntityKind::HospitalPatient => &self.hospital_patients,
            EntityKind::AmbulatoryPatient => &self.ambulatory_patients,
        }
    }

    fn records_mut(&mut self, kind: EntityKind) -> &mut Vec<Record> {
        match kind {
            EntityKind::Doctor => &mut self.doctors,
            EntityKind::Nurse => &mut self.nurses,
            EntityKind::HospitalPatient => &mut self.hospital_patients,
            EntityKind::AmbulatoryPatient => &mut self.ambulatory_patients,
        }
    }

    /// Loaded doctors
    #[must_use]
    pub fn doctors(&self) -> &[Record] {
        &self.doctors
    }

    /// Loaded nurses
    #[must_use]
    pub fn nurses(&self) -> &[Record] {
        &self.nurses
    }

    /// Loaded hospital patients
    #[must_use]
    pub fn hospital_patients(&self) -> &[Record] {
        &self.hospital_patients
    }

    /// Loaded ambulatory patients
    #[must_use]
    pub fn ambulatory_patients(&self) -> &[Record] {
        &self.ambulatory_patients
    }

    /// Add one record to the list of its kind.
    ///
    /// Identifiers are unique only within one `IdSequence`. A record whose
    /// identifier is already held is not added; a warning is logged and
    /// `false` returned.
    pub fn push(&mut self, record: Record) -> bool {
        let id = record.id();
        if let Some((held_kind, _)) = self.index.get(&id) {
            log::warn!(
                "Not adding {} record {}: identifier already held by a {} record",
                record.kind(),
                id,
                held_kind
            );
            return false;
        }
        let kind = record.kind();
        let list = self.records_mut(kind);
        let position = list.len();
        list.push(record);
        self.index.insert(id, (kind, position));
        true
    }

    /// Replace the list of one kind.
    ///
    /// Records whose kind differs from `kind` are ignored with a warning.
    pub fn replace(&mut self, kind: EntityKind, records: Vec<Record>) {
        self.index.retain(|_, (indexed_kind, _)| *indexed_kind != kind);
        self.records_mut(kind).clear();
        for record in records {
            if record.kind() == kind {
                self.push(record);
            } else {
                log::warn!(
                    "Skipping {} record {} while replacing {} list",
                    record.kind(),
                    record.id(),
                    kind
                );
            }
        }
    }

    /// Look up a record by identifier
    #[must_use]
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        let (kind, position) = self.index.get(&id)?;
        self.records(*kind).get(*position)
    }

    /// Total number of records
    #[must_use]
    pub fn len(&self) -> usize {
        EntityKind::ALL
            .into_iter()
            .map(|kind| self.records(kind).len())
            .sum()
    }

    /// Whether no records are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records, kind by kind
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        EntityKind::ALL
            .into_iter()
            .flat_map(move |kind| self.records(kind).iter())
    }

    /// Rendered text of every record of one kind
    #[must_use]
    pub fn render_kind(&self, kind: EntityKind) -> Vec<String> {
        self.records(kind).iter().map(ToString::to_string).collect()
    }
}
