use anyhow::{Context, Result};
use log::{debug, error};

use crate::dates::today_display;
use crate::note::Note;
use crate::providers::provider::NotesProvider;
use crate::session::EditSession;
use crate::store::NoteStore;

/// Send the whole draft to the backend and reconcile the store with the
/// response. The server's representation wins after a write. On error the
/// store is left untouched and the caller decides what to do with the draft
/// (in practice: keep it and log).
pub fn flush_draft<T: NotesProvider>(
    session: &EditSession,
    notes_provider: &T,
    store: &mut NoteStore,
) -> Result<()> {
    debug!("flushing draft for note {}", session.note_id());
    let updated = notes_provider
        .update_note(session.draft())
        .context("could not save note changes")?;
    let id = updated.id.clone();
    store.replace(&id, updated);
    Ok(())
}

/// Flush only if the draft actually differs from its store entry. Returns
/// true when a flush happened. A draft whose note vanished from the store
/// (deleted under us) has nothing to reconcile and is dropped silently.
pub fn flush_if_dirty<T: NotesProvider>(
    session: &EditSession,
    notes_provider: &T,
    store: &mut NoteStore,
) -> Result<bool> {
    match store.get(session.note_id()) {
        Some(original) if session.is_dirty(original) => {
            flush_draft(session, notes_provider, store)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Selection change: flush the outgoing draft if it has unsaved differences,
/// then snapshot the newly selected note. A failed flush is logged and the
/// switch happens anyway, matching the fire-and-forget save model.
pub fn select_note<T: NotesProvider>(
    outgoing: Option<&EditSession>,
    new_id: &str,
    notes_provider: &T,
    store: &mut NoteStore,
) -> Option<EditSession> {
    if let Some(outgoing) = outgoing {
        if let Err(e) = flush_if_dirty(outgoing, notes_provider, store) {
            error!("failed to save changes: {:#}", e);
        }
    }

    store.get(new_id).map(EditSession::open)
}

/// Create a note with a count-based guessed identifier, today's date, and an
/// empty title. The guess only lives until the backend answers; the
/// server-returned note is what lands in the store.
pub fn create_note<T: NotesProvider>(
    notes_provider: &T,
    store: &mut NoteStore,
    desc: String,
) -> Result<Note> {
    let guess = Note::new(
        (store.len() + 1).to_string(),
        String::new(),
        desc,
        today_display(),
    );

    debug!("creating note with guessed id {}", guess.id);
    let created = notes_provider
        .create_note(&guess)
        .context("could not create note")?;
    store.add(created.clone());
    Ok(created)
}

pub fn delete_note<T: NotesProvider>(
    id: &str,
    notes_provider: &T,
    store: &mut NoteStore,
) -> Result<()> {
    debug!("deleting note {}", id);
    notes_provider
        .delete_note(id)
        .context("could not delete note")?;
    store.remove(id);
    Ok(())
}
