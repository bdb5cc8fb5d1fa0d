//! In-memory catalog of prefixes and unit atoms
//!
//! The table is populated once at start-up and read-only afterwards; every
//! lookup the parser and engine perform goes through here. Case-sensitive
//! lookup is primary. A case-insensitive lookup succeeds only when the
//! query maps to a distinct case-insensitive code; colliding ci codes are
//! poisoned unless the colliding atoms are true synonyms (`l` and `L`).

use crate::atom::{Atom, Prefix};
use crate::dimension::{Dimension, DIM_LEN};
use crate::suggest::SuggestionIndex;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::warn;

enum CiEntry {
    Unique(String),
    Ambiguous,
}

/// Catalog of unit atoms and prefixes with lookup indexes
pub struct AtomTable {
    atoms: HashMap<String, Atom>,
    ci_atoms: HashMap<String, CiEntry>,
    names: HashMap<String, Vec<String>>,
    prefixes: HashMap<String, Prefix>,
    ci_prefixes: HashMap<String, CiEntry>,
    base_codes: [Option<String>; DIM_LEN],
    suggestions: OnceCell<SuggestionIndex>,
}

impl AtomTable {
    /// An empty table; callers populate it with [`insert_atom`] and
    /// [`insert_prefix`]
    ///
    /// [`insert_atom`]: AtomTable::insert_atom
    /// [`insert_prefix`]: AtomTable::insert_prefix
    pub fn new() -> Self {
        AtomTable {
            atoms: HashMap::new(),
            ci_atoms: HashMap::new(),
            names: HashMap::new(),
            prefixes: HashMap::new(),
            ci_prefixes: HashMap::new(),
            base_codes: Default::default(),
            suggestions: OnceCell::new(),
        }
    }

    /// A table populated with the built-in catalog
    pub fn with_catalog() -> Self {
        let mut table = AtomTable::new();
        crate::catalog::populate(&mut table);
        table
    }

    pub fn insert_atom(&mut self, atom: Atom) {
        if atom.def_error {
            warn!(code = %atom.cs_code, "atom definition did not parse cleanly");
        }
        if atom.is_base {
            if let Some(dim) = &atom.dim {
                for (index, exp) in dim.nonzero() {
                    if exp == 1 {
                        self.base_codes[index] = Some(atom.cs_code.clone());
                    }
                }
            }
        }

        let ci_key = atom.ci_code.to_ascii_uppercase();
        match self.ci_atoms.get(&ci_key) {
            None => {
                self.ci_atoms
                    .insert(ci_key, CiEntry::Unique(atom.cs_code.clone()));
            }
            Some(CiEntry::Unique(existing)) => {
                // True synonyms (same magnitude and dimension) keep the
                // first entry; anything else poisons the ci code.
                let same = self
                    .atoms
                    .get(existing)
                    .map(|e| e.magnitude == atom.magnitude && e.dim == atom.dim)
                    .unwrap_or(false);
                if !same {
                    self.ci_atoms.insert(ci_key, CiEntry::Ambiguous);
                }
            }
            Some(CiEntry::Ambiguous) => {}
        }

        self.names
            .entry(atom.name.clone())
            .or_default()
            .push(atom.cs_code.clone());
        self.atoms.insert(atom.cs_code.clone(), atom);
    }

    pub fn insert_prefix(&mut self, prefix: Prefix) {
        let ci_key = prefix.ci_code.to_ascii_uppercase();
        match self.ci_prefixes.get(&ci_key) {
            None => {
                self.ci_prefixes
                    .insert(ci_key, CiEntry::Unique(prefix.cs_code.clone()));
            }
            Some(CiEntry::Unique(_)) => {
                self.ci_prefixes.insert(ci_key, CiEntry::Ambiguous);
            }
            Some(CiEntry::Ambiguous) => {}
        }
        self.prefixes.insert(prefix.cs_code.clone(), prefix);
    }

    /// Exact case-sensitive atom lookup; the primary lookup
    pub fn atom_by_cs(&self, code: &str) -> Option<&Atom> {
        self.atoms.get(code)
    }

    /// Case-insensitive atom lookup; fails on poisoned codes
    pub fn atom_by_ci(&self, code: &str) -> Option<&Atom> {
        match self.ci_atoms.get(&code.to_ascii_uppercase())? {
            CiEntry::Unique(cs) => self.atoms.get(cs),
            CiEntry::Ambiguous => None,
        }
    }

    /// Lookup by display name; the first atom registered under it
    pub fn atom_by_name(&self, name: &str) -> Option<&Atom> {
        self.names
            .get(name)
            .and_then(|codes| codes.first())
            .and_then(|code| self.atoms.get(code))
    }

    /// Exact case-sensitive prefix lookup
    pub fn prefix_by_cs(&self, code: &str) -> Option<&Prefix> {
        self.prefixes.get(code)
    }

    /// Case-insensitive prefix lookup; fails on poisoned codes
    pub fn prefix_by_ci(&self, code: &str) -> Option<&Prefix> {
        match self.ci_prefixes.get(&code.to_ascii_uppercase())? {
            CiEntry::Unique(cs) => self.prefixes.get(cs),
            CiEntry::Ambiguous => None,
        }
    }

    /// Atoms whose name or synonym list contains `term` (case-insensitive)
    pub fn atoms_by_synonym(&self, term: &str) -> Vec<&Atom> {
        let needle = term.to_ascii_lowercase();
        let mut found: Vec<&Atom> = self
            .atoms
            .values()
            .filter(|atom| {
                atom.name.to_ascii_lowercase().contains(&needle)
                    || atom
                        .synonyms
                        .iter()
                        .any(|s| s.to_ascii_lowercase().contains(&needle))
            })
            .collect();
        found.sort_by(|a, b| a.cs_code.cmp(&b.cs_code));
        found
    }

    /// Atoms whose dimension vector equals `dim`
    pub fn atoms_by_dimension(&self, dim: &Dimension) -> Vec<&Atom> {
        let mut found: Vec<&Atom> = self
            .atoms
            .values()
            .filter(|atom| atom.dim.as_ref() == Some(dim))
            .collect();
        found.sort_by(|a, b| a.cs_code.cmp(&b.cs_code));
        found
    }

    /// Code of the base atom for a base-dimension index
    pub fn base_atom_code(&self, index: usize) -> Option<&str> {
        self.base_codes[index].as_deref()
    }

    /// Iterate over every prefix; used for prefix/atom splitting
    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> {
        self.prefixes.values()
    }

    /// Iterate over every atom
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.values()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// The lazily-built, write-once suggestion index
    pub(crate) fn suggestion_index(&self) -> &SuggestionIndex {
        self.suggestions.get_or_init(|| SuggestionIndex::build(self))
    }
}

impl Default for AtomTable {
    fn default() -> Self {
        AtomTable::with_catalog()
    }
}
