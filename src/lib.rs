#![allow(clippy::module_inception)]

use std::{fs, path::PathBuf, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantic;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing a byte position: (line number, line text,
/// offset within the line). Positions at or past end of input (the EOF
/// token's span) clamp to the last byte, so errors reported there still
/// point at the final line. Returns `None` if the file cannot be read or
/// is empty.
pub fn get_line_at_position(file: PathBuf, position: u32) -> Option<(usize, String, usize)> {
    let content = fs::read_to_string(&file).ok()?;
    if content.is_empty() {
        return None;
    }

    let pos = (position as usize).min(content.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


pub fn display_error(error: Error, file: PathBuf) {
    /*
        lexical error: message
        -> demo.pas
           |
        20 | x := #;
           | -----^
    */

    if let ErrorTip::None = error.get_tip() {
        println!("{} error: {}", error.stage(), error);
    } else {
        println!("{} error: {} ({})", error.stage(), error, error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    // Without a readable source line the header above is all we can show.
    let position = error.get_position();
    let Some((line, line_text, line_pos)) = get_line_at_position(file, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

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

    (String::from(&string[start..]), start)
}
