mod csv_recording_store;

pub use csv_recording_store::CsvRecordingStore;
