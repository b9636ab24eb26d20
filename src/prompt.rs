use anyhow::{Context, Result};
use std::io::{Stdout, Write};
use termion::cursor;
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::RawTerminal;

pub fn clear<W: Write>(stdout: &mut W) -> Result<()> {
    write!(
        stdout,
        "{}{}{}",
        termion::clear::All,
        cursor::Goto(1, 1),
        cursor::Show
    )?;

    Ok(())
}

/// Full-screen y/N confirmation. Enter and Escape answer no, the default.
pub fn prompt_yesno(
    stdout: &mut RawTerminal<Stdout>,
    stdin: &std::io::Stdin,
    prompt_string: String,
) -> Result<bool> {
    clear(stdout)?;
    write!(stdout, "{}", prompt_string)?;
    stdout.flush()?;

    for event in stdin.keys() {
        let key = event.with_context(|| "Error evaluating keystroke event")?;
        let value = match key {
            Key::Char('y') | Key::Char('Y') => true,
            Key::Char('n') | Key::Char('N') => false,
            Key::Char('\n') | Key::Esc => false,
            _ => continue,
        };

        return Ok(value);
    }

    Ok(false)
}
