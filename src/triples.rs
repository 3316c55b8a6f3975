//! Relation triple extraction
//!
//! Rules run in catalog order. Each match expands through coordination
//! before emitting: every conjunct-participating role substitutes its
//! token's conjuncts, and the cartesian product of the substitution sets
//! becomes the emitted tuples. Verb-bearing rules stamp the verbs they
//! emit through, and later rules drop matches whose verb is already
//! claimed, so one reading per verb survives.

use rustc_hash::FxHashSet;

use crate::annotations::Annotations;
use crate::index::SentenceIndex;
use crate::matcher::find_matches;
use crate::pattern::TripleRule;
use crate::sentence::{Sentence, TokenId};

/// One extracted relation between two tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub kind: String,
    pub src: TokenId,
    pub edge: String,
    pub dst: TokenId,
}

/// Triples plus the count of expansions dropped by the cap
#[derive(Debug, Clone, Default)]
pub struct TripleRun {
    pub triples: Vec<Triple>,
    pub skipped: usize,
}

/// Run every rule over the sentence, expanding conjuncts up to `cap`
/// tuples per match
pub fn build_triples(
    rules: &[TripleRule],
    sentence: &Sentence,
    index: &SentenceIndex,
    ann: &mut Annotations,
    cap: usize,
) -> TripleRun {
    let mut triples = Vec::new();
    let mut skipped = 0usize;

    for rule in rules {
        let matches = find_matches(&rule.pattern, sentence, index, ann);
        let mut stamped: Vec<TokenId> = Vec::new();

        for binding in &matches {
            if let Some((verb_node, _)) = rule.verb
                && ann.verb_type(binding[verb_node]).is_some()
            {
                continue;
            }

            let mut subs: Vec<Vec<TokenId>> = Vec::with_capacity(binding.len());
            for (node, &bound) in binding.iter().enumerate() {
                let mut set = vec![bound];
                if rule.expand[node] {
                    set.extend(sentence.conjuncts(bound));
                }
                subs.push(set);
            }
            // a conjunct of the verb may already be claimed even though
            // the bound verb is not; matches of the same rule never block
            // each other because stamps land after the loop
            if let Some((verb_node, _)) = rule.verb {
                subs[verb_node].retain(|&v| ann.verb_type(v).is_none());
                if subs[verb_node].is_empty() {
                    continue;
                }
            }

            let total: usize = subs.iter().map(Vec::len).product();
            skipped += total.saturating_sub(cap);

            for tuple in Product::new(&subs).take(cap) {
                let edge = render_edge(&rule.edge_template, &rule.edge, &tuple, sentence);
                triples.push(Triple {
                    kind: rule.kind.clone(),
                    src: tuple[rule.src],
                    edge,
                    dst: tuple[rule.dst],
                });
                if let Some((verb_node, _)) = rule.verb {
                    stamped.push(tuple[verb_node]);
                }
            }
        }

        if let Some((_, verb_type)) = rule.verb {
            for id in stamped {
                ann.set_verb_type(id, verb_type);
            }
        }
    }

    TripleRun { triples, skipped }
}

/// Rewrite endpoints through the side-table: relative pronouns become
/// their antecedent, quantifiers fan out to their objects, and duplicates
/// after rewriting are dropped
pub fn resolve_triples(triples: Vec<Triple>, ann: &Annotations, cap: usize) -> TripleRun {
    let mut resolved = Vec::new();
    let mut seen: FxHashSet<Triple> = FxHashSet::default();
    let mut skipped = 0usize;

    for triple in triples {
        let srcs = endpoint_substitutions(triple.src, ann);
        let dsts = endpoint_substitutions(triple.dst, ann);
        skipped += (srcs.len() * dsts.len()).saturating_sub(cap);

        let mut emitted = 0usize;
        'pairs: for &src in &srcs {
            for &dst in &dsts {
                if emitted == cap {
                    break 'pairs;
                }
                emitted += 1;
                // a triple that collapses onto one token says nothing
                if src == dst {
                    continue;
                }
                let candidate = Triple {
                    kind: triple.kind.clone(),
                    src,
                    edge: triple.edge.clone(),
                    dst,
                };
                if seen.insert(candidate.clone()) {
                    resolved.push(candidate);
                }
            }
        }
    }

    TripleRun { triples: resolved, skipped }
}

fn endpoint_substitutions(id: TokenId, ann: &Annotations) -> Vec<TokenId> {
    if let Some(antecedent) = ann.antecedent(id) {
        return vec![antecedent];
    }
    let quantified = ann.quantified(id);
    if !quantified.is_empty() {
        return quantified.to_vec();
    }
    vec![id]
}

/// Substitute lowercased lemmas into the `{}` slots of the template
fn render_edge(
    template: &str,
    slots: &[usize],
    tuple: &[TokenId],
    sentence: &Sentence,
) -> String {
    let mut parts = template.split("{}");
    let mut edge = String::new();
    if let Some(head) = parts.next() {
        edge.push_str(head);
    }
    for (piece, &node) in parts.zip(slots) {
        edge.push_str(&sentence.token(tuple[node]).lemma.to_lowercase());
        edge.push_str(piece);
    }
    edge
}

/// Lazy cartesian product over the substitution sets, rightmost set
/// varying fastest
struct Product<'a> {
    sets: &'a [Vec<TokenId>],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Product<'a> {
    fn new(sets: &'a [Vec<TokenId>]) -> Self {
        let done = sets.iter().any(|set| set.is_empty());
        Self {
            sets,
            indices: vec![0; sets.len()],
            done,
        }
    }
}

impl Iterator for Product<'_> {
    type Item = Vec<TokenId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tuple: Vec<TokenId> = self
            .indices
            .iter()
            .zip(self.sets)
            .map(|(&i, set)| set[i])
            .collect();
        self.done = true;
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                self.done = false;
                break;
            }
            self.indices[pos] = 0;
        }
        Some(tuple)
    }
}
