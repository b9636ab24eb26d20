mod actions;
mod config;
mod dates;
mod navigation_state;
mod note;
mod prompt;
mod providers;
mod render;
mod session;
mod store;

use std::fs;
use std::io::{stdin, stdout, Stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, LevelFilter};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::{IntoRawMode, RawTerminal};
use toml::Table;

use crate::config::Config;
use crate::navigation_state::{AppState, NavigationState};
use crate::providers::provider::NotesProvider;
use crate::providers::rest_provider::RestNotesProvider;
use crate::session::EditSession;
use crate::store::NoteStore;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Backend base URL, overriding the config file.
    #[arg(short, long)]
    base_url: Option<String>,

    /// Print a default config file to stdout and exit.
    #[arg(long, default_value_t = false)]
    print_config: bool,

    /// Trailing words become the description of a new note, created without
    /// entering the UI.
    #[arg(last = true)]
    quick_note: Vec<String>,
}

fn load_config() -> Result<Config> {
    let mut config_file =
        home::home_dir().context("Unable to find home directory. Something is very wrong :(")?;
    config_file.push(".restnotes.toml");

    let table = match fs::read_to_string(&config_file) {
        Ok(contents) => contents
            .parse::<Table>()
            .context("Unable to parse config file. Make sure it is valid toml.")?,
        _ => Table::new(),
    };

    Ok(Config::new(table))
}

fn selected_note_id(store: &NoteStore, state: &NavigationState) -> Option<String> {
    store
        .sorted(state.get_sort_dir())
        .get(state.get_selected_index())
        .map(|note| note.id.clone())
}

fn redraw(
    stdout: &mut RawTerminal<Stdout>,
    store: &NoteStore,
    state: &NavigationState,
    session: Option<&EditSession>,
) -> Result<()> {
    let (width, height) = termion::terminal_size().context("could not read terminal size")?;
    let screen = render::draw_screen(
        store.sorted(state.get_sort_dir()),
        state,
        session,
        width,
        height,
    );
    write!(stdout, "{}", screen)?;
    stdout.flush()?;
    Ok(())
}

fn run_ui<T: NotesProvider>(
    notes_provider: &T,
    stdout: &mut RawTerminal<Stdout>,
    stdin: &std::io::Stdin,
) -> Result<()> {
    let mut store = NoteStore::new(
        notes_provider
            .fetch_notes()
            .context("could not load notes from backend")?,
    );
    let mut state = NavigationState::new(0);
    state.set_list_size(store.len());
    let mut session: Option<EditSession> = None;

    redraw(stdout, &store, &state, session.as_ref())?;

    for event in stdin.keys() {
        let key = event.with_context(|| "Error evaluating keystroke event")?;

        // Escape clears the selection from anywhere, discarding the draft.
        if key == Key::Esc {
            debug!("escape pressed, clearing selection");
            session = None;
            state.set_mode(AppState::Browsing);
        } else {
            match state.mode() {
                AppState::Browsing => match key {
                    Key::Char('j') | Key::Down => state.increment_selected_index(),
                    Key::Char('k') | Key::Up => state.decrement_selected_index(),
                    Key::Char('s') => state.toggle_sort_dir(),
                    Key::Char('q') => {
                        if let Some(outgoing) = session.as_ref() {
                            if let Err(e) =
                                actions::flush_if_dirty(outgoing, notes_provider, &mut store)
                            {
                                error!("failed to save changes: {:#}", e);
                            }
                        }
                        state.set_mode(AppState::Quitting);
                    }
                    Key::Char('n') => {
                        match actions::create_note(notes_provider, &mut store, String::new()) {
                            Ok(created) => {
                                session = actions::select_note(
                                    session.as_ref(),
                                    &created.id,
                                    notes_provider,
                                    &mut store,
                                );
                                // Put the cursor on the new note in the current projection.
                                state.set_list_size(store.len());
                                let sorted = store.sorted(state.get_sort_dir());
                                let position =
                                    sorted.iter().position(|n| n.id == created.id);
                                if let Some(index) = position {
                                    state.set_selected_index(index);
                                }
                                state.set_mode(AppState::Editing);
                            }
                            Err(e) => error!("failed to add new note: {:#}", e),
                        }
                    }
                    Key::Char('D') => {
                        if let Some(id) = selected_note_id(&store, &state) {
                            let affirmative = prompt::prompt_yesno(
                                stdout,
                                stdin,
                                format!("Are you sure you want to delete note {}? [y/N] ", id),
                            )?;
                            if affirmative {
                                match actions::delete_note(&id, notes_provider, &mut store) {
                                    Ok(()) => {
                                        let deleted_open = session.as_ref().map(|s| s.note_id())
                                            == Some(id.as_str());
                                        if deleted_open {
                                            session = None;
                                        }
                                    }
                                    Err(e) => error!("failed to delete note: {:#}", e),
                                }
                            }
                        }
                    }
                    Key::Char('\n') => {
                        if let Some(id) = selected_note_id(&store, &state) {
                            session = actions::select_note(
                                session.as_ref(),
                                &id,
                                notes_provider,
                                &mut store,
                            );
                            if session.is_some() {
                                state.set_mode(AppState::Editing);
                            }
                        }
                    }
                    _ => {}
                },
                AppState::Editing => match key {
                    // Shift-Tab hands focus back to the list, a blur.
                    Key::BackTab => {
                        if let Some(current) = session.as_ref() {
                            if let Err(e) =
                                actions::flush_if_dirty(current, notes_provider, &mut store)
                            {
                                error!("failed to save changes: {:#}", e);
                            }
                        }
                        state.set_mode(AppState::Browsing);
                    }
                    // Tab blurs one field into the other.
                    Key::Char('\t') => {
                        if let Some(current) = session.as_mut() {
                            if let Err(e) =
                                actions::flush_if_dirty(current, notes_provider, &mut store)
                            {
                                error!("failed to save changes: {:#}", e);
                            }
                            current.focus_next();
                        }
                    }
                    Key::Char('\n') => {
                        if let Some(current) = session.as_ref() {
                            if let Err(e) =
                                actions::flush_if_dirty(current, notes_provider, &mut store)
                            {
                                error!("failed to save changes: {:#}", e);
                            }
                        }
                    }
                    Key::Up | Key::Down => {
                        if key == Key::Up {
                            state.decrement_selected_index();
                        } else {
                            state.increment_selected_index();
                        }
                        if let Some(id) = selected_note_id(&store, &state) {
                            session = actions::select_note(
                                session.as_ref(),
                                &id,
                                notes_provider,
                                &mut store,
                            );
                        }
                    }
                    Key::Backspace => {
                        if let Some(current) = session.as_mut() {
                            current.backspace();
                        }
                    }
                    Key::Char(c) => {
                        if let Some(current) = session.as_mut() {
                            current.push_char(c);
                        }
                    }
                    _ => {}
                },
                AppState::Quitting => {}
            }
        }

        if *state.mode() == AppState::Quitting {
            break;
        }

        state.set_list_size(store.len());
        redraw(stdout, &store, &state, session.as_ref())?;
    }

    prompt::clear(stdout)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        println!("{}", Config::generate());
        return Ok(());
    }

    let mut config = load_config()?;
    if let Some(base_url) = args.base_url {
        config.set_backend_url(base_url);
    }

    if let Some(log_file) = config.get_log_file() {
        simple_logging::log_to_file(log_file, LevelFilter::Debug)
            .context("could not open log file")?;
    }

    let notes_provider = RestNotesProvider::new(&config)?;

    // Quick-note path: create straight from the command line and exit.
    if !args.quick_note.is_empty() {
        let mut store = NoteStore::new(
            notes_provider
                .fetch_notes()
                .context("could not load notes from backend")?,
        );
        let created =
            actions::create_note(&notes_provider, &mut store, args.quick_note.join(" "))?;
        println!("Created note {} dated {}", created.id, created.date);
        return Ok(());
    }

    let mut stdout = stdout()
        .into_raw_mode()
        .context("could not put terminal into raw mode")?;
    let stdin = stdin();

    run_ui(&notes_provider, &mut stdout, &stdin)
}
