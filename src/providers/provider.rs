use anyhow::Result;

use crate::note::Note;

/// Seam between the UI and whatever serves the notes. The production
/// implementation talks to the REST backend; tests substitute an in-memory
/// fake.
pub trait NotesProvider {
    fn fetch_notes(&self) -> Result<Vec<Note>>;
    fn create_note(&self, note: &Note) -> Result<Note>;
    fn update_note(&self, note: &Note) -> Result<Note>;
    fn delete_note(&self, id: &str) -> Result<()>;
}
