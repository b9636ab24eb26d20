#[derive(Debug, Eq, PartialEq)]
pub enum AppState {
    Browsing,
    Editing,
    Quitting,
}

#[derive(Debug, Eq, PartialEq)]
pub enum SortDir {
    Asc,
    Desc,
}

pub struct NavigationState {
    selected_index: usize,
    list_size: usize,
    sort_dir: SortDir,
    mode: AppState,
}

impl NavigationState {
    pub fn new(selected_index: usize) -> Self {
        NavigationState {
            selected_index,
            list_size: 0,
            sort_dir: SortDir::Desc,
            mode: AppState::Browsing,
        }
    }

    pub fn get_selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn increment_selected_index(&mut self) {
        if self.selected_index + 1 < self.list_size {
            self.selected_index = self.selected_index.saturating_add(1);
        }
    }

    pub fn decrement_selected_index(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Clamp the cursor after the list shrinks, e.g. following a delete.
    pub fn clamp_selected_index(&mut self) {
        if self.list_size == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= self.list_size {
            self.selected_index = self.list_size - 1;
        }
    }

    pub fn set_selected_index(&mut self, new_index: usize) {
        self.selected_index = new_index;
        self.clamp_selected_index();
    }

    pub fn get_list_size(&self) -> usize {
        self.list_size
    }

    pub fn set_list_size(&mut self, list_size: usize) {
        self.list_size = list_size;
        self.clamp_selected_index();
    }

    pub fn get_sort_dir(&self) -> &SortDir {
        &self.sort_dir
    }

    pub fn toggle_sort_dir(&mut self) {
        self.sort_dir = match self.sort_dir {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        };
    }

    pub fn mode(&self) -> &AppState {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: AppState) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_list_bounds() {
        let mut state = NavigationState::new(0);
        state.set_list_size(2);
        state.increment_selected_index();
        state.increment_selected_index();
        assert_eq!(state.get_selected_index(), 1);
        state.decrement_selected_index();
        state.decrement_selected_index();
        assert_eq!(state.get_selected_index(), 0);
    }

    #[test]
    fn shrinking_list_pulls_cursor_back() {
        let mut state = NavigationState::new(0);
        state.set_list_size(3);
        state.increment_selected_index();
        state.increment_selected_index();
        state.set_list_size(1);
        assert_eq!(state.get_list_size(), 1);
        assert_eq!(state.get_selected_index(), 0);
    }

    #[test]
    fn set_selected_index_clamps_to_list() {
        let mut state = NavigationState::new(0);
        state.set_list_size(2);
        state.set_selected_index(7);
        assert_eq!(state.get_selected_index(), 1);
    }

    #[test]
    fn sort_dir_toggles_between_directions() {
        let mut state = NavigationState::new(0);
        assert_eq!(*state.get_sort_dir(), SortDir::Desc);
        state.toggle_sort_dir();
        assert_eq!(*state.get_sort_dir(), SortDir::Asc);
        state.toggle_sort_dir();
        assert_eq!(*state.get_sort_dir(), SortDir::Desc);
    }
}
