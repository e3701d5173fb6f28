use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::shell::command_parser::{COMMANDS, MATERIAL_COMMANDS};

/// Tab completion for command words and dataset material names.
pub struct CompletionEngine {
    materials: Vec<String>,
}

impl CompletionEngine {
    pub fn new(materials: Vec<String>) -> Self {
        CompletionEngine { materials }
    }

    /// Byte offset where the replacement starts, and the candidates.
    pub fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let word_end = match line.find(char::is_whitespace) {
            Some(i) => i,
            None => return (0, self.complete_command(line)),
        };

        let word = line[..word_end].to_lowercase();
        if !MATERIAL_COMMANDS.contains(&word.as_str()) {
            return (line.len(), Vec::new());
        }

        // `show` takes a `;`-separated selection, so complete the last item.
        let arg_start = if word == "show" {
            line.rfind(';').map(|i| i + 1).unwrap_or(word_end)
        } else {
            word_end
        };
        let rest = &line[arg_start..];
        let start = arg_start + (rest.len() - rest.trim_start().len());

        (start, self.complete_material(&line[start..]))
    }

    fn complete_command(&self, partial: &str) -> Vec<String> {
        let partial = partial.to_lowercase();
        COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&partial))
            .map(|cmd| cmd.to_string())
            .collect()
    }

    fn complete_material(&self, partial: &str) -> Vec<String> {
        let partial = partial.to_lowercase();
        self.materials
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .cloned()
            .collect()
    }
}

impl Completer for CompletionEngine {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CompletionEngine {
    type Hint = String;
}

impl Highlighter for CompletionEngine {}

impl Validator for CompletionEngine {}

impl Helper for CompletionEngine {}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CompletionEngine {
        CompletionEngine::new(vec![
            "Concreto".to_string(),
            "Concreto celular".to_string(),
            "Ladrillo rojo".to_string(),
        ])
    }

    #[test]
    fn test_completes_command_words() {
        let (start, found) = engine().candidates("ca");
        assert_eq!(start, 0);
        assert_eq!(found, vec!["cache"]);

        let (_, found) = engine().candidates("l");
        assert_eq!(found, vec!["list", "ls", "lookup"]);
    }

    #[test]
    fn test_completes_material_after_command() {
        let (start, found) = engine().candidates("ask conc");
        assert_eq!(start, 4);
        assert_eq!(found, vec!["Concreto", "Concreto celular"]);
    }

    #[test]
    fn test_completes_last_item_of_selection() {
        let line = "show Concreto; Lad";
        let (start, found) = engine().candidates(line);
        assert_eq!(&line[start..], "Lad");
        assert_eq!(found, vec!["Ladrillo rojo"]);
    }

    #[test]
    fn test_no_material_completion_for_list() {
        let (_, found) = engine().candidates("list Con");
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_argument_offers_every_material() {
        let (start, found) = engine().candidates("other ");
        assert_eq!(start, 6);
        assert_eq!(found.len(), 3);
    }
}
