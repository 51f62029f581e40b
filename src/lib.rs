#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Where a token begins: the 0-based index of its first character and the
/// line the cursor was on at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub line: u32,
}

impl Position {
    pub fn new(index: usize, line: u32) -> Self {
        Position { index, line }
    }

    pub fn start() -> Self {
        Position { index: 0, line: 1 }
    }
}

/// Finds the line containing the character at `index`.
///
/// Returns the 1-based line number, the text of that line and the column of
/// `index` inside it, or `None` when `index` is outside `source`.
pub fn get_line_at_position(source: &str, index: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (line_number, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&index) {
            return Some((line_number + 1, line.to_string(), index - start));
        }

        start = end;
    }

    None
}


pub fn display_error(error: &Error, source: &str, name: &str) {
    /*
        error: message
        -> input
           |
        20 | let a = ½;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", name);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().index) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
