use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::errors::{SolverError, SolverResult};
use crate::wordlist::WordList;

/// Wildcard marker in a hint string
const WILDCARD: char = '?';

/// A compiled hint pattern for partially-known words.
///
/// Literal positions must match exactly (case-insensitively). Each `?`
/// matches any single character that is *not* one of the hint's literal
/// characters: a letter already placed somewhere in the hint is known not
/// to belong in an unknown position. This pass shares nothing with the
/// letter-bag matcher.
#[derive(Debug, Clone)]
pub struct HintPattern {
    regex: Regex,
}

impl HintPattern {
    /// Compiles a hint string into a matching pattern.
    pub fn new(hint: &str) -> SolverResult<Self> {
        if hint.is_empty() {
            return Err(SolverError::invalid_hint("hint must not be empty"));
        }

        let literals: Vec<char> = hint
            .chars()
            .filter(|&c| c != WILDCARD)
            .flat_map(char::to_lowercase)
            .collect();

        let wildcard_class = if literals.is_empty() {
            ".".to_string()
        } else {
            let mut class = String::from("[^");
            for c in &literals {
                class.push_str(&regex::escape(&c.to_string()));
            }
            class.push(']');
            class
        };

        let mut pattern = String::from("^");
        for ch in hint.chars() {
            if ch == WILDCARD {
                pattern.push_str(&wildcard_class);
            } else {
                for lc in ch.to_lowercase() {
                    pattern.push_str(&regex::escape(&lc.to_string()));
                }
            }
        }
        pattern.push('$');

        let regex = Regex::new(&pattern).map_err(|e| SolverError::invalid_hint(e.to_string()))?;
        Ok(Self { regex })
    }

    /// Tests a single candidate word against the pattern
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(&candidate.to_lowercase())
    }

    /// Tests every candidate in the list, returning matches in list order
    pub fn filter(&self, wordlist: &WordList) -> Vec<String> {
        let matches: Vec<String> = wordlist
            .words()
            .par_iter()
            .filter(|word| self.matches(word))
            .cloned()
            .collect();

        debug!(
            "Hint matched {} of {} candidates",
            matches.len(),
            wordlist.len()
        );
        matches
    }
}
