//! Inverted indices for anchor candidate lookup
//!
//! Maps each attribute value to the tokens carrying it, in token order.
//! The matcher consults the index when an anchor predicate pins a lemma,
//! part of speech, tag, or dependency label, and falls back to scanning
//! the whole sentence otherwise.

use rustc_hash::FxHashMap;

use crate::pattern::Field;
use crate::sentence::{Sentence, TokenId};

/// Per-sentence index over lemma, pos, tag, and dep values
#[derive(Debug, Default)]
pub struct SentenceIndex {
    by_lemma: FxHashMap<String, Vec<TokenId>>,
    by_pos: FxHashMap<String, Vec<TokenId>>,
    by_tag: FxHashMap<String, Vec<TokenId>>,
    by_dep: FxHashMap<String, Vec<TokenId>>,
}

impl SentenceIndex {
    /// Build the index in a single pass; posting lists stay in token order
    pub fn build(sentence: &Sentence) -> Self {
        let mut index = Self::default();
        for (id, token) in sentence.tokens().iter().enumerate() {
            index.by_lemma.entry(token.lemma.clone()).or_default().push(id);
            index.by_pos.entry(token.pos.clone()).or_default().push(id);
            index.by_tag.entry(token.tag.clone()).or_default().push(id);
            index.by_dep.entry(token.dep.clone()).or_default().push(id);
        }
        index
    }

    pub fn by_lemma(&self, lemma: &str) -> Option<&[TokenId]> {
        self.by_lemma.get(lemma).map(Vec::as_slice)
    }

    pub fn by_pos(&self, pos: &str) -> Option<&[TokenId]> {
        self.by_pos.get(pos).map(Vec::as_slice)
    }

    pub fn by_tag(&self, tag: &str) -> Option<&[TokenId]> {
        self.by_tag.get(tag).map(Vec::as_slice)
    }

    pub fn by_dep(&self, dep: &str) -> Option<&[TokenId]> {
        self.by_dep.get(dep).map(Vec::as_slice)
    }

    /// Lookup by field; `None` for fields the index does not cover
    pub fn lookup(&self, field: Field, value: &str) -> Option<&[TokenId]> {
        match field {
            Field::Lemma => self.by_lemma(value),
            Field::Pos => self.by_pos(value),
            Field::Tag => self.by_tag(value),
            Field::Dep => self.by_dep(value),
            _ => None,
        }
    }

    /// Whether the field is covered by the index at all
    pub fn covers(field: Field) -> bool {
        matches!(field, Field::Lemma | Field::Pos | Field::Tag | Field::Dep)
    }
}
