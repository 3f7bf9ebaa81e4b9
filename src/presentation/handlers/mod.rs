mod health;
mod notes;
mod recordings;
mod transcribe;

pub use health::health_handler;
pub use notes::generate_notes_handler;
pub use recordings::{
    delete_recording_handler, get_recording_handler, list_recordings_handler,
    save_recording_handler,
};
pub use transcribe::transcribe_handler;
