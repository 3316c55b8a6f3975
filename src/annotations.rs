//! Per-sentence annotation side-table
//!
//! All mutable state produced while processing a sentence lives here,
//! never on the sentence itself. A fresh table is built for every run,
//! so repeated runs over the same sentence are independent.

use crate::sentence::TokenId;

/// Verb classification stamped by the first triple pattern to claim a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbType {
    Being,
    Transitive,
    Passive,
    Intransitive,
}

/// Side-table of per-token annotations, indexed by token id
#[derive(Debug, Clone)]
pub struct Annotations {
    verb_types: Vec<Option<VerbType>>,
    dates: Vec<bool>,
    antecedents: Vec<Option<TokenId>>,
    quantified: Vec<Vec<TokenId>>,
}

impl Annotations {
    /// Empty table for a sentence of `len` tokens
    pub fn new(len: usize) -> Self {
        Self {
            verb_types: vec![None; len],
            dates: vec![false; len],
            antecedents: vec![None; len],
            quantified: vec![Vec::new(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn verb_type(&self, id: TokenId) -> Option<VerbType> {
        self.verb_types[id]
    }

    pub fn set_verb_type(&mut self, id: TokenId, verb_type: VerbType) {
        self.verb_types[id] = Some(verb_type);
    }

    pub fn is_date(&self, id: TokenId) -> bool {
        self.dates[id]
    }

    pub fn mark_date(&mut self, id: TokenId) {
        self.dates[id] = true;
    }

    /// Antecedent recorded for a relative pronoun
    pub fn antecedent(&self, id: TokenId) -> Option<TokenId> {
        self.antecedents[id]
    }

    /// Overwrite the antecedent; the last writer wins
    pub fn set_antecedent(&mut self, id: TokenId, antecedent: TokenId) {
        self.antecedents[id] = Some(antecedent);
    }

    /// Objects quantified by a quantifier token
    pub fn quantified(&self, id: TokenId) -> &[TokenId] {
        &self.quantified[id]
    }

    /// Append an object to the quantifier's list
    pub fn add_quantified(&mut self, id: TokenId, object: TokenId) {
        self.quantified[id].push(object);
    }
}
