use termion::{color, cursor};

use crate::navigation_state::{AppState, NavigationState, SortDir};
use crate::note::Note;
use crate::session::{EditSession, FocusField};

/// Layout breakpoint. Narrower than this and the detail pane takes over the
/// whole screen while a note is open.
pub const COMPACT_WIDTH_COLS: u16 = 120;

const SIDEBAR_WIDTH: u16 = 56;
const DESC_PREVIEW_LEN: usize = 20;

pub enum Field {
    Title,
    Desc,
    Date,
}

pub struct Column {
    pub field: Field,
    pub name: String,
}

impl Column {
    pub fn get_field(&self) -> &Field {
        &self.field
    }

    pub fn get_name(&self) -> &String {
        &self.name
    }
}

pub fn list_columns() -> Vec<Column> {
    vec![
        Column {
            field: Field::Title,
            name: String::from("Title"),
        },
        Column {
            field: Field::Desc,
            name: String::from("Description"),
        },
        Column {
            field: Field::Date,
            name: String::from("Date"),
        },
    ]
}

fn truncate_desc(desc: &str, max_length: usize) -> String {
    if desc.chars().count() > max_length {
        let truncated: String = desc.chars().take(max_length).collect();
        format!("{truncated}...")
    } else {
        desc.to_string()
    }
}

fn cell_value(note: &Note, column: &Column) -> String {
    match column.get_field() {
        Field::Title => note.title.clone(),
        Field::Desc => truncate_desc(&note.desc, DESC_PREVIEW_LEN),
        Field::Date => note.date.clone(),
    }
}

/// Sidebar list of notes as a column table. `rows` is the sorted projection,
/// so row index == cursor index.
pub struct ListDisplay<'a> {
    pub rows: Vec<&'a Note>,
    pub columns: Vec<Column>,
    pub state: &'a NavigationState,
}

impl ListDisplay<'_> {
    fn get_column_width(&self, column: &Column) -> usize {
        let mut width = column.get_name().len() + 4;
        for row in &self.rows {
            let col_w = cell_value(row, column).chars().count() + 4;
            if col_w > width {
                width = col_w;
            }
        }
        width
    }

    fn draw_header(&self) -> String {
        let sort_indicator = match self.state.get_sort_dir() {
            SortDir::Desc => "↓",
            SortDir::Asc => "↑",
        };

        let mut header_str = format!(
            "{goto}{color}",
            goto = cursor::Goto(1, 1),
            color = color::Fg(color::Yellow),
        );

        for column in &self.columns {
            // Only the date is sortable, so only its header gets the arrow.
            if matches!(column.get_field(), Field::Date) {
                header_str = format!(
                    "{header_str}{value:<width$}",
                    value = format!("{} {}", column.get_name(), sort_indicator),
                    width = self.get_column_width(column),
                );
            } else {
                header_str = format!(
                    "{header_str}{value:<width$}",
                    value = column.get_name(),
                    width = self.get_column_width(column),
                );
            }
        }

        format!("{header_str}{reset}", reset = color::Fg(color::Reset))
    }

    /// Render header plus the window of rows that fits in `height` lines.
    /// The scroll window is recomputed from the cursor every draw.
    pub fn draw(&self, height: u16) -> String {
        let mut table_str = self.draw_header();

        let visible_rows = height.saturating_sub(2) as usize; // header + footer
        let selected = self.state.get_selected_index();
        let window_start = if selected >= visible_rows {
            selected - visible_rows + 1
        } else {
            0
        };

        for (screen_row, (index, row)) in self
            .rows
            .iter()
            .enumerate()
            .skip(window_start)
            .take(visible_rows)
            .enumerate()
        {
            let mut row_str = String::new();

            if selected == index {
                row_str = format!(
                    "{highlight}{fontcolor}",
                    highlight = color::Bg(color::White),
                    fontcolor = color::Fg(color::Black),
                );
            }

            row_str = format!(
                "{row_str}{goto}",
                goto = cursor::Goto(1, (screen_row + 2) as u16),
            );

            for column in &self.columns {
                row_str = format!(
                    "{row_str}{value:<width$}",
                    value = cell_value(row, column),
                    width = self.get_column_width(column)
                );
            }

            table_str = format!(
                "{table_str}{row_str}{reset_highlight}{reset_fontcolor}",
                reset_highlight = color::Bg(color::Reset),
                reset_fontcolor = color::Fg(color::Reset)
            );
        }

        table_str
    }
}

fn field_marker(focused: bool) -> String {
    if focused {
        format!(
            "{bg} {reset}",
            bg = color::Bg(color::White),
            reset = color::Bg(color::Reset)
        )
    } else {
        String::new()
    }
}

/// Detail pane for the open note: title line, date line, then the
/// description body. The focused field shows a block cursor at its end.
pub fn draw_detail(session: &EditSession, origin_x: u16, width: u16) -> String {
    let draft = session.draft();
    let wrap_width = width.saturating_sub(2).max(10) as usize;

    let mut pane = format!(
        "{goto}{color}{title}{reset}{marker}",
        goto = cursor::Goto(origin_x, 1),
        color = color::Fg(color::Yellow),
        title = draft.title,
        reset = color::Fg(color::Reset),
        marker = field_marker(session.focus() == FocusField::Title),
    );

    pane = format!(
        "{pane}{goto}{date}",
        goto = cursor::Goto(origin_x, 2),
        date = draft.date,
    );

    let mut line_no: u16 = 4;
    for chunk in wrap_lines(&draft.desc, wrap_width) {
        pane = format!(
            "{pane}{goto}{chunk}",
            goto = cursor::Goto(origin_x, line_no),
        );
        line_no += 1;
    }
    if session.focus() == FocusField::Desc {
        // Marker sits after the last body line, or on the empty body line.
        let marker_line = line_no.saturating_sub(1).max(4);
        let last_len = wrap_lines(&draft.desc, wrap_width)
            .last()
            .map(|l| l.chars().count())
            .unwrap_or(0) as u16;
        pane = format!(
            "{pane}{goto}{marker}",
            goto = cursor::Goto(origin_x + last_len, marker_line),
            marker = field_marker(true),
        );
    }

    pane
}

fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    for chunk in chars.chunks(width.max(1)) {
        lines.push(chunk.iter().collect());
    }
    lines
}

fn footer(editing: bool, height: u16) -> String {
    let hints = if editing {
        "Tab: switch field; Enter: save; ↑/↓: other note; Esc: close"
    } else {
        "Enter: open; n: new; D: delete; s: sort; q: quit"
    };
    format!(
        "{hide}{goto}{hints}",
        hide = cursor::Hide,
        goto = cursor::Goto(1, height),
    )
}

/// Full-screen repaint. Layout is picked from the terminal size measured
/// here, so a resize takes effect on the next key event.
pub fn draw_screen(
    rows: Vec<&Note>,
    state: &NavigationState,
    session: Option<&EditSession>,
    width: u16,
    height: u16,
) -> String {
    let compact = width < COMPACT_WIDTH_COLS;
    let mut screen = format!("{}", termion::clear::All);

    match session {
        Some(session) if compact => {
            // Narrow terminal: the open note takes over the whole screen.
            screen = format!("{screen}{}", draw_detail(session, 1, width));
        }
        Some(session) => {
            let list = ListDisplay {
                rows,
                columns: list_columns(),
                state,
            };
            screen = format!("{screen}{}", list.draw(height));
            screen = format!(
                "{screen}{}",
                draw_detail(session, SIDEBAR_WIDTH + 2, width - SIDEBAR_WIDTH - 2)
            );
        }
        None => {
            let list = ListDisplay {
                rows,
                columns: list_columns(),
                state,
            };
            screen = format!("{screen}{}", list.draw(height));
        }
    }

    // Hints follow the mode: a session left open while browsing still gets
    // the list keys.
    let editing = matches!(state.mode(), AppState::Editing);
    format!("{screen}{}", footer(editing, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_descriptions_with_ellipsis() {
        assert_eq!(
            truncate_desc("a very long description indeed", DESC_PREVIEW_LEN),
            "a very long descript..."
        );
        assert_eq!(truncate_desc("short", DESC_PREVIEW_LEN), "short");
    }

    #[test]
    fn wraps_body_text_at_width() {
        let lines = wrap_lines("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
        assert!(wrap_lines("", 4).is_empty());
    }

    #[test]
    fn footer_hints_follow_the_mode() {
        let note = Note::new(
            "1".to_string(),
            "a".to_string(),
            "b".to_string(),
            "01.01.2024".to_string(),
        );
        let session = EditSession::open(&note);
        let mut state = NavigationState::new(0);
        state.set_list_size(1);

        // Session open but focus back on the list: browse keys are live.
        let screen = draw_screen(vec![&note], &state, Some(&session), 150, 40);
        assert!(screen.contains("q: quit"));
        assert!(!screen.contains("Esc: close"));

        state.set_mode(AppState::Editing);
        let screen = draw_screen(vec![&note], &state, Some(&session), 150, 40);
        assert!(screen.contains("Esc: close"));
    }

    #[test]
    fn header_carries_sort_arrow_on_date_only() {
        let state = NavigationState::new(0);
        let list = ListDisplay {
            rows: vec![],
            columns: list_columns(),
            state: &state,
        };
        let header = list.draw_header();
        assert!(header.contains("Date ↓"));
        assert!(!header.contains("Title ↓"));
    }
}
