//! Per-subject measurement table.

use crate::error::IoResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Named numeric measurements per subject, persisted as pretty JSON.
///
/// Every pipeline run records figures like the minimum joint space, the
/// cartilage area per side, and the mean thickness with and without gap.
/// The table is read-update-write so repeated runs over a cohort accumulate
/// into one file. `BTreeMap` keeps the file diffable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementTable {
    subjects: BTreeMap<String, BTreeMap<String, f64>>,
}

impl MeasurementTable {
    /// Load a table, returning an empty one if the file does not exist.
    ///
    /// # Errors
    ///
    /// Filesystem errors other than absence, and malformed JSON.
    pub fn load(path: &Path) -> IoResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Record one measurement, overwriting any previous value.
    pub fn record(&mut self, subject: &str, name: &str, value: f64) {
        self.subjects
            .entry(subject.to_owned())
            .or_default()
            .insert(name.to_owned(), value);
    }

    /// Look up one measurement.
    #[must_use]
    pub fn get(&self, subject: &str, name: &str) -> Option<f64> {
        self.subjects.get(subject)?.get(name).copied()
    }

    /// All measurements of one subject.
    #[must_use]
    pub fn subject(&self, subject: &str) -> Option<&BTreeMap<String, f64>> {
        self.subjects.get(subject)
    }

    /// Write the table as pretty JSON.
    ///
    /// # Errors
    ///
    /// Filesystem or serialization errors.
    pub fn save(&self, path: &Path) -> IoResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        info!(path = %path.display(), subjects = self.subjects.len(), "saved measurements");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_read_back() {
        let mut table = MeasurementTable::default();
        table.record("subject_01", "min_joint_space_mm", 2.75);
        table.record("subject_01", "acetabular_area_mm2", 1431.0);
        assert_eq!(table.get("subject_01", "min_joint_space_mm"), Some(2.75));
        assert_eq!(table.get("subject_01", "missing"), None);
        assert_eq!(table.get("subject_02", "min_joint_space_mm"), None);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("measurements.json");

        let mut table = MeasurementTable::default();
        table.record("subject_07", "femoral_area_mm2", 1890.5);
        table.save(&path).unwrap();

        let back = MeasurementTable::load(&path).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn update_preserves_other_subjects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("measurements.json");

        let mut table = MeasurementTable::default();
        table.record("a", "x", 1.0);
        table.save(&path).unwrap();

        let mut again = MeasurementTable::load(&path).unwrap();
        again.record("b", "x", 2.0);
        again.save(&path).unwrap();

        let final_table = MeasurementTable::load(&path).unwrap();
        assert_eq!(final_table.get("a", "x"), Some(1.0));
        assert_eq!(final_table.get("b", "x"), Some(2.0));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let table = MeasurementTable::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(table, MeasurementTable::default());
    }
}
