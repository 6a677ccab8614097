#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Byte offset into a source text, tagged with the name of that text.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line's text (including its trailing
/// newline, if any) and the byte column of `position` within that line.
/// An offset at the very end of the text maps onto the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: after a trailing newline it sits on a fresh, empty line.
    if source.is_empty() || source.ends_with('\n') {
        Some((line_number, String::new(), 0))
    } else {
        let last = source.rsplit('\n').next().unwrap_or_default();
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Renders a diagnostic with the offending line and a caret under it.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnrecognisedToken (unrecognised character `#`)
        -> final.house
           |
        20 | tile a = #;
           | ---------^
    */

    let mut out = String::new();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // The caret is placed by characters, not bytes.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (&string[start..], start)
}
