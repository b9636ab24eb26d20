use crate::navigation_state::SortDir;
use crate::note::Note;

/// In-memory note list, the single source of truth for the list view.
/// Identifier uniqueness is caller discipline; the store does not enforce it.
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new(notes: Vec<Note>) -> Self {
        NoteStore { notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Swap the stored note for `id` with `note`. Returns false if no entry
    /// matched, in which case the store is unchanged.
    pub fn replace(&mut self, id: &str, note: Note) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                *entry = note;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() < before
    }

    /// Read projection for the list view, ordered by display date. Storage
    /// order is untouched; ties keep insertion order (stable sort).
    pub fn sorted(&self, dir: &SortDir) -> Vec<&Note> {
        let mut projection: Vec<&Note> = self.notes.iter().collect();
        projection.sort_by(|a, b| {
            let ord = a.sort_key().cmp(&b.sort_key());
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
        projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, date: &str) -> Note {
        Note::new(id.to_string(), format!("note {id}"), String::new(), date.to_string())
    }

    #[test]
    fn add_then_remove_restores_size() {
        let mut store = NoteStore::new(vec![note("1", "01.01.2024")]);
        let before = store.len();
        store.add(note("2", "02.01.2024"));
        assert!(store.remove("2"));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn empty_store_reports_empty() {
        let mut store = NoteStore::new(vec![note("1", "01.01.2024")]);
        assert!(!store.is_empty());
        store.remove("1");
        assert!(store.is_empty());
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let mut store = NoteStore::new(vec![note("1", "01.01.2024")]);
        assert!(!store.remove("9"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_swaps_matching_entry() {
        let mut store = NoteStore::new(vec![note("1", "01.01.2024")]);
        let mut updated = note("1", "01.01.2024");
        updated.title = "renamed".to_string();
        assert!(store.replace("1", updated));
        assert_eq!(store.get("1").unwrap().title, "renamed");
    }

    #[test]
    fn ascending_puts_oldest_first() {
        let store = NoteStore::new(vec![note("a", "15.03.2024"), note("b", "01.01.2024")]);
        let sorted = store.sorted(&SortDir::Asc);
        assert_eq!(sorted[0].date, "01.01.2024");
        assert_eq!(sorted[1].date, "15.03.2024");
    }

    #[test]
    fn descending_puts_newest_first() {
        let store = NoteStore::new(vec![note("a", "15.03.2024"), note("b", "01.01.2024")]);
        let sorted = store.sorted(&SortDir::Desc);
        assert_eq!(sorted[0].date, "15.03.2024");
    }

    #[test]
    fn desc_is_reverse_of_asc_without_ties() {
        let store = NoteStore::new(vec![
            note("a", "15.03.2024"),
            note("b", "01.01.2024"),
            note("c", "07.06.2023"),
        ]);
        let ids = |dir: &SortDir| -> Vec<String> {
            store.sorted(dir).iter().map(|n| n.id.clone()).collect()
        };
        let asc = ids(&SortDir::Asc);
        let mut desc = ids(&SortDir::Desc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn malformed_dates_group_first_ascending() {
        let store = NoteStore::new(vec![note("a", "15.03.2024"), note("b", "junk")]);
        let sorted = store.sorted(&SortDir::Asc);
        assert_eq!(sorted[0].id, "b");
    }
}
