use crate::engine::builtins;
use lazy_static::lazy_static;
use owo_colors::OwoColorize;
use regex::Regex;
use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline_derive::{Helper, Hinter, Validator};
use std::borrow::Cow::{self, Borrowed, Owned};

lazy_static! {
    static ref STRING_RE: Regex = Regex::new(r#""[^"]*"?"#).unwrap();
    static ref INTEGER_RE: Regex = Regex::new(r"\d+").unwrap();
    static ref KEYWORD_RE: Regex = Regex::new(r"\blet\b").unwrap();
    static ref BUILTIN_RE: Regex =
        Regex::new(&format!(r"\b({})\b", builtins::names().join("|"))).unwrap();
    static ref BRACKETS_RE: Regex = Regex::new(r"[()\[\]]").unwrap();
    // Plain identifiers, so builtin names inside longer names stay unstyled.
    static ref IDENT_RE: Regex = Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap();
}

#[derive(Clone, Copy)]
enum TokenStyle {
    String,
    Integer,
    Keyword,
    Builtin,
    Bracket,
    Plain,
}

impl TokenStyle {
    fn paint(self, text: &str) -> String {
        match self {
            TokenStyle::String => text.green().to_string(),
            TokenStyle::Integer => text.magenta().to_string(),
            TokenStyle::Keyword => text.cyan().bold().to_string(),
            TokenStyle::Builtin => text.yellow().to_string(),
            TokenStyle::Bracket => text.blue().to_string(),
            TokenStyle::Plain => text.to_string(),
        }
    }
}

/// Colors Monkey source using regex tokens tried in order at each position.
#[derive(Default)]
pub struct MonkeyHighlighter;

impl MonkeyHighlighter {
    pub fn colorize(&self, line: &str) -> String {
        let tokens_with_styles: [(&Regex, TokenStyle); 6] = [
            (&*STRING_RE, TokenStyle::String),
            (&*KEYWORD_RE, TokenStyle::Keyword),
            (&*BUILTIN_RE, TokenStyle::Builtin),
            (&*IDENT_RE, TokenStyle::Plain),
            (&*INTEGER_RE, TokenStyle::Integer),
            (&*BRACKETS_RE, TokenStyle::Bracket),
        ];

        let mut styled = String::with_capacity(line.len());
        let mut current_pos = 0;
        while current_pos < line.len() {
            let mut found_match = false;
            for (regex, style) in &tokens_with_styles {
                if let Some(mat) = regex.find_at(line, current_pos) {
                    if mat.start() == current_pos && mat.end() > current_pos {
                        styled.push_str(&style.paint(mat.as_str()));
                        current_pos = mat.end();
                        found_match = true;
                        break;
                    }
                }
            }

            if !found_match {
                // Copy a single unstyled character and move on.
                let end_of_plain = line[current_pos..]
                    .chars()
                    .next()
                    .map_or(line.len(), |c| current_pos + c.len_utf8());
                styled.push_str(&line[current_pos..end_of_plain]);
                current_pos = end_of_plain;
            }
        }
        styled
    }
}

/// Completes builtin names at the cursor, inserting `name(`.
#[derive(Default)]
pub struct BuiltinCompleter;

impl Completer for BuiltinCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl BuiltinCompleter {
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let before_cursor = &line[..pos];
        let start = before_cursor
            .char_indices()
            .rev()
            .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
            .map_or(0, |(i, c)| i + c.len_utf8());
        let prefix = &before_cursor[start..];
        if prefix.is_empty() {
            return (pos, Vec::new());
        }
        let matches = builtins::names()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{}(", name),
            })
            .collect();
        (start, matches)
    }
}

#[derive(Helper, Hinter, Validator, Default)]
pub struct ReplHelper {
    highlighter: MonkeyHighlighter,
    completer: BuiltinCompleter,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() {
            return Borrowed(line);
        }
        Owned(self.highlighter.colorize(line))
    }
}
