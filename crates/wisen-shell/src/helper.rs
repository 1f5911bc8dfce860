//! rustyline helper: completion, highlighting and hints for commands.
//!
//! Completion walks the command grammar word by word, so `/admin ch<TAB>`
//! offers `chart` and `/admin chart <TAB>` offers its actions.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::next_words;

#[derive(Clone, Default)]
pub struct ShellHelper;

/// The word under the cursor and the words before it.
struct Cursor<'l> {
    path: Vec<&'l str>,
    word: &'l str,
    start: usize,
}

impl<'l> Cursor<'l> {
    fn at(line: &'l str, pos: usize) -> Self {
        let line = &line[..pos];
        let start = line
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        Self {
            path: line[..start].split_whitespace().collect(),
            word: &line[start..],
            start,
        }
    }

    fn candidates(&self) -> impl Iterator<Item = &'static str> + '_ {
        next_words(&self.path)
            .iter()
            .copied()
            .filter(|w| w.starts_with(self.word))
    }
}

impl ShellHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let cursor = Cursor::at(line, pos);
        let candidates = cursor
            .candidates()
            .map(|w| Pair {
                display: w.to_string(),
                replacement: w.to_string(),
            })
            .collect();
        Ok((cursor.start, candidates))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let head_end = line.find(char::is_whitespace).unwrap_or(line.len());
        let (head, rest) = line.split_at(head_end);
        Owned(format!("{}{}", head.bright_cyan(), rest))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    /// Suggests the rest of the word only when one candidate remains.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let cursor = Cursor::at(line, pos);
        if cursor.word.is_empty() {
            return None;
        }
        let mut candidates = cursor.candidates();
        match (candidates.next(), candidates.next()) {
            (Some(only), None) if only.len() > cursor.word.len() => {
                Some(only[cursor.word.len()..].bright_black().to_string())
            }
            _ => None,
        }
    }
}

impl Validator for ShellHelper {}
