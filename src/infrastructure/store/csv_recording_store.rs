use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{RecordingStore, StoreError};
use crate::domain::RecordingEntry;

const FIELDNAMES: [&str; 9] = [
    "id",
    "patient_name",
    "doctor_name",
    "date",
    "duration",
    "transcription",
    "doctor_notes",
    "patient_summary",
    "status",
];

/// Flat-file CSV store with one header row. The nested note records are
/// stored as serialized JSON inside their columns and parsed back on every
/// read. Every mutation rewrites the entire file from the full in-memory
/// set, serialized behind a single coarse lock.
pub struct CsvRecordingStore {
    path: PathBuf,
    lock: Mutex<()>,
}

/// On-disk row shape; keeps the note columns as raw JSON text.
#[derive(Serialize, Deserialize)]
struct CsvRow {
    id: String,
    patient_name: String,
    doctor_name: String,
    date: String,
    duration: f64,
    transcription: String,
    doctor_notes: String,
    patient_summary: String,
    status: String,
}

impl CsvRow {
    fn from_entry(entry: &RecordingEntry) -> Result<Self, StoreError> {
        Ok(Self {
            id: entry.id.clone(),
            patient_name: entry.patient_name.clone(),
            doctor_name: entry.doctor_name.clone(),
            date: entry.date.clone(),
            duration: entry.duration,
            transcription: entry.transcription.clone(),
            doctor_notes: serde_json::to_string(&entry.doctor_notes)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
            patient_summary: serde_json::to_string(&entry.patient_summary)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
            status: entry.status.clone(),
        })
    }

    fn into_entry(self) -> Result<RecordingEntry, StoreError> {
        let doctor_notes = serde_json::from_str(&self.doctor_notes)
            .map_err(|e| StoreError::Malformed(format!("doctor_notes column: {}", e)))?;
        let patient_summary = serde_json::from_str(&self.patient_summary)
            .map_err(|e| StoreError::Malformed(format!("patient_summary column: {}", e)))?;
        Ok(RecordingEntry {
            id: self.id,
            patient_name: self.patient_name,
            doctor_name: self.doctor_name,
            date: self.date,
            duration: self.duration,
            transcription: self.transcription,
            doctor_notes,
            patient_summary,
            status: self.status,
        })
    }
}

impl CsvRecordingStore {
    /// Open the store, creating the backing file with its header row when it
    /// does not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        if !store.path.exists() {
            store.write_all_sync(&[])?;
        }
        Ok(store)
    }

    fn read_all_sync(&self) -> Result<Vec<RecordingEntry>, StoreError> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        let mut entries = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| StoreError::Malformed(e.to_string()))?;
            entries.push(row.into_entry()?);
        }
        Ok(entries)
    }

    fn write_all_sync(&self, entries: &[RecordingEntry]) -> Result<(), StoreError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        writer
            .write_record(FIELDNAMES)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        for entry in entries {
            writer
                .serialize(CsvRow::from_entry(entry)?)
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[async_trait]
impl RecordingStore for CsvRecordingStore {
    async fn save(&self, entry: &RecordingEntry) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all_sync()?;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                tracing::debug!(id = %entry.id, "Replacing existing recording");
                *existing = entry.clone();
            }
            None => entries.push(entry.clone()),
        }
        self.write_all_sync(&entries)
    }

    async fn get(&self, id: &str) -> Result<Option<RecordingEntry>, StoreError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all_sync()?;
        Ok(entries.into_iter().find(|e| e.id == id))
    }

    async fn get_all(&self) -> Result<Vec<RecordingEntry>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read_all_sync()
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all_sync()?;
        let before = entries.len();
        let remaining: Vec<RecordingEntry> =
            entries.into_iter().filter(|e| e.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }
        self.write_all_sync(&remaining)?;
        Ok(true)
    }
}
