use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Tried in order: `{` comments before everything else, `:=` before `:`.
            patterns: vec![
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: comment_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(":=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RealDiv, "/") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos as usize] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[(self.pos as usize)..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // The regex only consumes a `.` when a digit follows, so `3.` stays an
    // integer and the dot is lexed separately.
    let kind = if matched.contains('.') {
        TokenKind::RealConst
    } else {
        TokenKind::IntegerConst
    };

    lexer.push(MK_TOKEN!(
        kind,
        matched.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position(
                (lexer.pos + matched.len() as i32) as u32,
                Rc::clone(&lexer.file)
            ),
        }
    ));
    lexer.advance_n(matched.len() as i32);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
    Ok(())
}

/// Skips a `{ ... }` comment, honouring arbitrary nesting by counting braces.
fn comment_handler(lexer: &mut Lexer, _regex: Regex) -> Result<(), Error> {
    let open_position = lexer.position();
    let mut depth = 0;
    let mut consumed = 0;

    for ch in lexer.remainder().chars() {
        consumed += ch.len_utf8() as i32;
        if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth -= 1;
            if depth == 0 {
                lexer.advance_n(consumed);
                return Ok(());
            }
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedComment, open_position))
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // A leading underscore must be followed by a letter or digit.
    if matched.starts_with('_') {
        let next = matched.chars().nth(1);
        if !next.is_some_and(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::new(
                ErrorImpl::InvalidIdentifier {
                    identifier: matched,
                },
                lexer.position(),
            ));
        }
    }

    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position(
            (lexer.pos + matched.len() as i32) as u32,
            Rc::clone(&lexer.file),
        ),
    };

    let normalized = matched.to_uppercase();
    if let Some(kind) = RESERVED_LOOKUP.get(normalized.as_str()) {
        lexer.push(MK_TOKEN!(*kind, normalized, span));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            matched.to_lowercase(),
            span
        ));
    }

    lexer.advance_n(matched.len() as i32);
    Ok(())
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone())?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.file)),
            end: Position(lex.pos as u32, Rc::clone(&lex.file)),
        }
    ));
    Ok(lex.tokens)
}
