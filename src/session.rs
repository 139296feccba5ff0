//! Caller-held session state: the last result of each kind, plus export
//! and clear.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{BiogasRecord, CoatingResult};

/// File name offered for exports when none is given
pub const DEFAULT_EXPORT_FILE: &str = "ediblecoating_biogas_result.json";

/// A result together with the instant it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recorded<T> {
    /// RFC 3339, millisecond precision, `Z` suffix
    pub time: String,
    pub data: T,
}

impl<T> Recorded<T> {
    pub fn at(time: DateTime<Utc>, data: T) -> Self {
        Recorded {
            time: time.to_rfc3339_opts(SecondsFormat::Millis, true),
            data,
        }
    }
}

/// Shape of the exported JSON document. Both keys are always present.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub simulation: Option<&'a Recorded<CoatingResult>>,
    pub biogas: Option<&'a Recorded<BiogasRecord>>,
}

#[derive(Debug, Default, Clone)]
pub struct Session {
    coating: Option<Recorded<CoatingResult>>,
    biogas: Option<Recorded<BiogasRecord>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_coating(&mut self, result: CoatingResult) {
        self.record_coating_at(Utc::now(), result);
    }

    pub fn record_coating_at(&mut self, time: DateTime<Utc>, result: CoatingResult) {
        self.coating = Some(Recorded::at(time, result));
    }

    pub fn record_biogas(&mut self, record: BiogasRecord) {
        self.record_biogas_at(Utc::now(), record);
    }

    pub fn record_biogas_at(&mut self, time: DateTime<Utc>, record: BiogasRecord) {
        self.biogas = Some(Recorded::at(time, record));
    }

    pub fn last_coating(&self) -> Option<&Recorded<CoatingResult>> {
        self.coating.as_ref()
    }

    pub fn last_biogas(&self) -> Option<&Recorded<BiogasRecord>> {
        self.biogas.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.coating.is_none() && self.biogas.is_none()
    }

    pub fn clear(&mut self) {
        self.coating = None;
        self.biogas = None;
        info!("session cleared");
    }

    pub fn export_document(&self) -> ExportDocument<'_> {
        ExportDocument {
            simulation: self.coating.as_ref(),
            biogas: self.biogas.as_ref(),
        }
    }

    /// Pretty-printed export document
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.export_document())
            .context("Failed to encode export document")
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            path = %path.display(),
            simulation = self.coating.is_some(),
            biogas = self.biogas.is_some(),
            "session exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biogas::estimate_biogas;
    use crate::coating::estimate_coating;
    use crate::models::{CoatingRequest, WasteType};
    use chrono::TimeZone;
    use serde_json::Value;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    fn sample_coating() -> CoatingResult {
        estimate_coating(&CoatingRequest {
            object: "apple".into(),
            coating: "wax".into(),
            method: "dip".into(),
            concentration_percent: 5.0,
            volume_ml: 10.0,
        })
    }

    fn sample_biogas() -> BiogasRecord {
        BiogasRecord {
            result: estimate_biogas(&WasteType::Food, 100.0),
            retention_days: Some(20.0),
        }
    }

    #[test]
    fn test_empty_export_has_both_keys() {
        let session = Session::new();
        let doc: Value = serde_json::from_str(&session.export_json().unwrap()).unwrap();
        assert_eq!(doc["simulation"], Value::Null);
        assert_eq!(doc["biogas"], Value::Null);
        assert_eq!(doc.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_export_contents() {
        let mut session = Session::new();
        session.record_coating_at(fixed_time(), sample_coating());
        session.record_biogas_at(fixed_time(), sample_biogas());

        let doc: Value = serde_json::from_str(&session.export_json().unwrap()).unwrap();
        assert_eq!(doc["simulation"]["time"], "2026-03-04T05:06:07.000Z");
        assert_eq!(doc["simulation"]["data"]["object"], "apple");
        assert_eq!(doc["simulation"]["data"]["solids_grams"], 0.5);
        assert_eq!(doc["simulation"]["data"]["estimated_extension_days"], 2);

        let biogas = &doc["biogas"]["data"];
        assert_eq!(biogas["waste_type"], "food");
        assert_eq!(biogas["methane_m3"], 27.0);
        assert_eq!(biogas["biogas_m3"], 45.0);
        assert_eq!(biogas["retention_days"], 20.0);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let json = Session::new().export_json().unwrap();
        assert_eq!(json, "{\n  \"simulation\": null,\n  \"biogas\": null\n}");
    }

    #[test]
    fn test_record_replaces_previous() {
        let mut session = Session::new();
        session.record_biogas(sample_biogas());
        let replacement = BiogasRecord {
            result: estimate_biogas(&WasteType::Green, 40.0),
            retention_days: None,
        };
        session.record_biogas(replacement.clone());
        assert_eq!(session.last_biogas().unwrap().data, replacement);
        assert!(session.last_coating().is_none());
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.record_coating(sample_coating());
        session.record_biogas(sample_biogas());
        assert!(!session.is_empty());

        session.clear();
        assert!(session.is_empty());
        let doc: Value = serde_json::from_str(&session.export_json().unwrap()).unwrap();
        assert_eq!(doc["simulation"], Value::Null);
        assert_eq!(doc["biogas"], Value::Null);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILE);

        let mut session = Session::new();
        session.record_coating_at(fixed_time(), sample_coating());
        session.export_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.export_json().unwrap());
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(Session::new().export_to(&path).is_err());
    }
}
