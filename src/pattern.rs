//! Pattern data model
//!
//! Patterns are data, not code: tree patterns are ordered node lists with
//! backward relations, sequence templates are quantified token-predicate
//! lists, and triple patterns are records naming the roles of a compiled
//! tree pattern. Everything here is built once at registration and only
//! read during matching.

use regex::Regex;
use rustc_hash::FxHashSet;

use crate::annotations::{Annotations, VerbType};
use crate::sentence::{Sentence, TokenId, is_title};

/// A test against a single string attribute
#[derive(Debug, Clone)]
pub enum StrPred {
    Eq(String),
    In(FxHashSet<String>),
    NotIn(FxHashSet<String>),
    /// Anchored regular expression: the whole attribute must match
    Matches(Regex),
}

impl StrPred {
    pub fn eq(value: &str) -> Self {
        Self::Eq(value.to_string())
    }

    pub fn any_of(values: &[&str]) -> Self {
        Self::In(values.iter().map(|v| v.to_string()).collect())
    }

    pub fn none_of(values: &[&str]) -> Self {
        Self::NotIn(values.iter().map(|v| v.to_string()).collect())
    }

    /// Compile `pattern` wrapped as `^(?:pattern)$`
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Matches(Regex::new(&format!("^(?:{pattern})$"))?))
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Eq(expected) => value == expected,
            Self::In(set) => set.contains(value),
            Self::NotIn(set) => !set.contains(value),
            Self::Matches(regex) => regex.is_match(value),
        }
    }
}

/// The token attribute a predicate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Lemma,
    Pos,
    Tag,
    Dep,
    /// Text of the preceding token; absent at the sentence start
    LeftText,
    /// Text of the following token; absent at the sentence end
    RightText,
}

impl Field {
    fn value<'a>(&self, sentence: &'a Sentence, id: TokenId) -> Option<&'a str> {
        match self {
            Self::Text => Some(sentence.token(id).text.as_str()),
            Self::Lemma => Some(sentence.token(id).lemma.as_str()),
            Self::Pos => Some(sentence.token(id).pos.as_str()),
            Self::Tag => Some(sentence.token(id).tag.as_str()),
            Self::Dep => Some(sentence.token(id).dep.as_str()),
            Self::LeftText => id.checked_sub(1).map(|left| sentence.token(left).text.as_str()),
            Self::RightText => sentence.get(id + 1).map(|t| t.text.as_str()),
        }
    }
}

/// Conjunction of checks against one token
#[derive(Debug, Clone, Default)]
pub struct TokenPred {
    pub checks: Vec<(Field, StrPred)>,
    pub is_title: Option<bool>,
    pub is_date: Option<bool>,
    pub space_after: Option<bool>,
}

impl TokenPred {
    /// The empty predicate, which matches every token
    pub fn any() -> Self {
        Self::default()
    }

    pub fn check(mut self, field: Field, pred: StrPred) -> Self {
        self.checks.push((field, pred));
        self
    }

    pub fn title(mut self, want: bool) -> Self {
        self.is_title = Some(want);
        self
    }

    pub fn date(mut self, want: bool) -> Self {
        self.is_date = Some(want);
        self
    }

    pub fn spaced(mut self, want: bool) -> Self {
        self.space_after = Some(want);
        self
    }

    /// Evaluate against one token. A check on an absent neighbor attribute
    /// fails unless it is `NotIn`, which passes vacuously.
    pub fn matches(&self, sentence: &Sentence, ann: &Annotations, id: TokenId) -> bool {
        for (field, pred) in &self.checks {
            match field.value(sentence, id) {
                Some(value) => {
                    if !pred.matches(value) {
                        return false;
                    }
                }
                None => {
                    if !matches!(pred, StrPred::NotIn(_)) {
                        return false;
                    }
                }
            }
        }
        if let Some(want) = self.is_title
            && is_title(&sentence.token(id).text) != want
        {
            return false;
        }
        if let Some(want) = self.is_date
            && ann.is_date(id) != want
        {
            return false;
        }
        if let Some(want) = self.space_after
            && sentence.token(id).space_after != want
        {
            return false;
        }
        true
    }
}

/// Relation between a node being placed (A) and an earlier node (B)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// `A > B`: A's head is B
    Child,
    /// `A < B`: B's head is A
    Parent,
    /// `A << B`: A lies on the head chain above B
    Ancestor,
    /// `A >> B`: B lies on the head chain above A
    Descendant,
}

/// One node of a tree pattern
#[derive(Debug, Clone)]
pub struct PatternNode {
    pub name: String,
    pub pred: TokenPred,
    /// Relation to an earlier node, by index; `None` only for the anchor
    pub relation: Option<(RelOp, usize)>,
}

/// Ordered node list; the first node is the anchor
#[derive(Debug, Clone)]
pub struct TreePattern {
    pub nodes: Vec<PatternNode>,
}

impl TreePattern {
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.name == name)
    }
}

/// Quantifier on a sequence template item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quant {
    One,
    Opt,
    Star,
    Plus,
}

/// One alternative of a sequence span pattern
#[derive(Debug, Clone)]
pub struct SpanTemplate {
    pub items: Vec<(TokenPred, Quant)>,
}

impl SpanTemplate {
    pub fn new(items: Vec<(TokenPred, Quant)>) -> Self {
        Self { items }
    }
}

/// Source form of a triple pattern, compiled into a [`TripleRule`]
#[derive(Debug, Clone, Copy)]
pub struct TripleDef {
    /// Stable identifier carried on every emitted triple
    pub kind: &'static str,
    /// Tree pattern DSL source
    pub query: &'static str,
    /// Edge label template with positional `{}` slots
    pub edge_template: &'static str,
    pub src: &'static str,
    pub dst: &'static str,
    /// Node names whose lowercased lemmas fill the template slots, in order
    pub edge: &'static [&'static str],
    /// Verb role and the type it stamps on claimed verbs
    pub verb: Option<(&'static str, VerbType)>,
    /// Node names that participate in conjunct expansion
    pub conjuncts: &'static [&'static str],
    /// Node names bound during matching but absent from the output
    pub hidden: &'static [&'static str],
}

/// Compiled triple pattern with roles resolved to node indices
#[derive(Debug, Clone)]
pub struct TripleRule {
    pub kind: String,
    pub pattern: TreePattern,
    pub edge_template: String,
    pub src: usize,
    pub dst: usize,
    pub edge: Vec<usize>,
    pub verb: Option<(usize, VerbType)>,
    /// Per-node conjunct-expansion flags, parallel to the pattern nodes
    pub expand: Vec<bool>,
}
