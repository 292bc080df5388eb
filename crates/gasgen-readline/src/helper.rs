use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use gasgen_core::category::Category;
use gasgen_core::feature::FEATURES;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::command::COMMAND_NAMES;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<&'static str>,
    categories: Vec<String>,
    features: Vec<&'static str>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.to_vec(),
            categories: Category::iter().map(|c| c.to_string()).collect(),
            features: FEATURES.iter().map(|f| f.id).collect(),
        }
    }

    /// Candidates for the argument of `command`, if it takes a known set.
    fn argument_candidates(&self, command: &str) -> Vec<String> {
        match command {
            "/category" => self.categories.clone(),
            "/feature" => self.features.iter().map(|f| f.to_string()).collect(),
            "/copy" => vec!["script".to_string(), "explanation".to_string()],
            _ => Vec::new(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        match line.split_once(' ') {
            None => {
                let candidates = self
                    .commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(line))
                    .map(|cmd| Pair {
                        display: cmd.to_string(),
                        replacement: cmd.to_string(),
                    })
                    .collect();
                Ok((0, candidates))
            }
            Some((command, partial)) => {
                let start = command.len() + 1;
                let candidates = self
                    .argument_candidates(command)
                    .into_iter()
                    .filter(|arg| arg.starts_with(partial))
                    .map(|arg| Pair {
                        display: arg.clone(),
                        replacement: arg,
                    })
                    .collect();
                Ok((start, candidates))
            }
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}
