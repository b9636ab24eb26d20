use crate::note::Note;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FocusField {
    Title,
    Desc,
}

/// The one-at-a-time edit buffer behind the detail pane. Opening a session
/// snapshots the selected note wholesale; edits land on the snapshot and only
/// reach the store through an autosave flush.
pub struct EditSession {
    draft: Note,
    focus: FocusField,
}

impl EditSession {
    pub fn open(note: &Note) -> Self {
        EditSession {
            draft: note.clone(),
            focus: FocusField::Title,
        }
    }

    pub fn note_id(&self) -> &str {
        &self.draft.id
    }

    pub fn draft(&self) -> &Note {
        &self.draft
    }

    pub fn focus(&self) -> FocusField {
        self.focus
    }

    /// A blur in terminal terms: focus moves from one field to the other.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FocusField::Title => FocusField::Desc,
            FocusField::Desc => FocusField::Title,
        };
    }

    /// Dirty means the draft's title or description no longer match the
    /// originating note. The date is not editable here, so it never counts.
    pub fn is_dirty(&self, original: &Note) -> bool {
        self.draft.title != original.title || self.draft.desc != original.desc
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FocusField::Title => self.draft.title.push(c),
            FocusField::Desc => self.draft.desc.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FocusField::Title => self.draft.title.pop(),
            FocusField::Desc => self.draft.desc.pop(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note::new(
            "3".to_string(),
            "Errands".to_string(),
            "old".to_string(),
            "01.01.2024".to_string(),
        )
    }

    #[test]
    fn open_takes_a_full_snapshot() {
        let original = note();
        let session = EditSession::open(&original);
        assert_eq!(*session.draft(), original);
        assert!(!session.is_dirty(&original));
    }

    #[test]
    fn edits_mutate_only_the_draft() {
        let original = note();
        let mut session = EditSession::open(&original);
        session.push_char('!');
        assert_eq!(session.draft().title, "Errands!");
        assert_eq!(original.title, "Errands");
        assert!(session.is_dirty(&original));
    }

    #[test]
    fn focus_cycles_between_fields() {
        let original = note();
        let mut session = EditSession::open(&original);
        assert_eq!(session.focus(), FocusField::Title);
        session.focus_next();
        assert_eq!(session.focus(), FocusField::Desc);
        session.push_char('x');
        session.backspace();
        session.backspace();
        assert_eq!(session.draft().desc, "ol");
        session.focus_next();
        assert_eq!(session.focus(), FocusField::Title);
    }

    #[test]
    fn date_changes_do_not_count_as_dirty() {
        let mut original = note();
        let session = EditSession::open(&original);
        original.date = "15.03.2024".to_string();
        assert!(!session.is_dirty(&original));
    }
}
