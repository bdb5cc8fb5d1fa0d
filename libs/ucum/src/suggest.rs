//! Suggestion index for unrecognised tokens
//!
//! When the parser cannot resolve a token it asks this index for catalog
//! atoms whose names or synonyms share words with the token. The index is
//! derived from the atom table on first use and cached; the cache is
//! write-once.

use crate::atom::Atom;
use crate::table::AtomTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum number of candidate units returned per unrecognised token
pub const MAX_SUGGESTIONS: usize = 3;

/// One block of suggestions for one unrecognised token
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBlock {
    pub msg: String,
    pub invalid_unit: String,
    /// Candidate units as `[code, name, guidance]` triples
    pub units: Vec<(String, String, String)>,
}

/// Word index over atom names, synonyms and properties
pub struct SuggestionIndex {
    words: HashMap<String, Vec<String>>,
}

impl SuggestionIndex {
    pub(crate) fn build(table: &AtomTable) -> Self {
        let mut words: HashMap<String, Vec<String>> = HashMap::new();
        for atom in table.atoms() {
            let mut texts: Vec<&str> = vec![&atom.name, &atom.property];
            texts.extend(atom.synonyms.iter().map(String::as_str));
            for text in texts {
                for word in split_words(text) {
                    let codes = words.entry(word).or_default();
                    if !codes.contains(&atom.cs_code) {
                        codes.push(atom.cs_code.clone());
                    }
                }
            }
        }
        SuggestionIndex { words }
    }

    /// Candidate atoms for `term`, ranked by number of matching words
    pub fn suggest<'t>(&self, table: &'t AtomTable, term: &str) -> Vec<&'t Atom> {
        let mut hits: HashMap<&str, usize> = HashMap::new();
        for word in split_words(term) {
            if let Some(codes) = self.words.get(&word) {
                for code in codes {
                    *hits.entry(code.as_str()).or_insert(0) += 1;
                }
            }
        }
        let mut ranked: Vec<(&str, usize)> = hits.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .filter_map(|(code, _)| table.atom_by_cs(code))
            .collect()
    }
}

/// Lowercased alphanumeric words of `text`
fn split_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

/// Build a suggestion block for one unrecognised token, or `None` when the
/// index has nothing to offer
pub(crate) fn block_for(table: &AtomTable, token: &str) -> Option<SuggestionBlock> {
    let candidates = table.suggestion_index().suggest(table, token);
    if candidates.is_empty() {
        return None;
    }
    Some(SuggestionBlock {
        msg: format!("{token} is not a valid UCUM code. Did you mean one of the following units?"),
        invalid_unit: token.to_owned(),
        units: candidates
            .into_iter()
            .map(|atom| {
                (
                    atom.cs_code.clone(),
                    atom.name.clone(),
                    atom.guidance.clone().unwrap_or_default(),
                )
            })
            .collect(),
    })
}
