//! Backtracking matcher for tree relation patterns
//!
//! Nodes bind in declaration order. Anchor candidates come from the
//! sentence index when the anchor predicate pins an indexed attribute;
//! later nodes scan tokens in index order and test their relation against
//! the already-bound referent. Every total assignment is returned, so
//! callers see all matches, not just the first.

use crate::annotations::Annotations;
use crate::index::SentenceIndex;
use crate::pattern::{RelOp, StrPred, TokenPred, TreePattern};
use crate::sentence::{Sentence, TokenId};

/// All total assignments of pattern nodes to tokens, as id vectors
/// parallel to the node list
pub fn find_matches(
    pattern: &TreePattern,
    sentence: &Sentence,
    index: &SentenceIndex,
    ann: &Annotations,
) -> Vec<Vec<TokenId>> {
    let mut matches = Vec::new();
    if pattern.nodes.is_empty() || sentence.is_empty() {
        return matches;
    }

    let mut binding = Vec::with_capacity(pattern.nodes.len());
    for id in anchor_candidates(&pattern.nodes[0].pred, sentence, index) {
        if pattern.nodes[0].pred.matches(sentence, ann, id) {
            binding.push(id);
            bind_rest(pattern, sentence, ann, &mut binding, &mut matches);
            binding.pop();
        }
    }
    matches
}

fn bind_rest(
    pattern: &TreePattern,
    sentence: &Sentence,
    ann: &Annotations,
    binding: &mut Vec<TokenId>,
    matches: &mut Vec<Vec<TokenId>>,
) {
    let position = binding.len();
    if position == pattern.nodes.len() {
        matches.push(binding.clone());
        return;
    }

    let node = &pattern.nodes[position];
    let Some((op, target)) = node.relation else { return };
    let referent = binding[target];
    for candidate in 0..sentence.len() {
        if relation_holds(op, candidate, referent, sentence)
            && node.pred.matches(sentence, ann, candidate)
        {
            binding.push(candidate);
            bind_rest(pattern, sentence, ann, binding, matches);
            binding.pop();
        }
    }
}

/// Candidate tokens for the anchor. The first equality or membership
/// check on an indexed field narrows the scan; otherwise every token is
/// a candidate. The full predicate is still applied afterwards.
fn anchor_candidates(pred: &TokenPred, sentence: &Sentence, index: &SentenceIndex) -> Vec<TokenId> {
    for (field, check) in &pred.checks {
        if !SentenceIndex::covers(*field) {
            continue;
        }
        match check {
            StrPred::Eq(value) => {
                return index.lookup(*field, value).map(<[TokenId]>::to_vec).unwrap_or_default();
            }
            StrPred::In(values) => {
                // posting lists for distinct values of one field are disjoint
                let mut ids: Vec<TokenId> = values
                    .iter()
                    .filter_map(|value| index.lookup(*field, value))
                    .flatten()
                    .copied()
                    .collect();
                ids.sort_unstable();
                return ids;
            }
            _ => continue,
        }
    }
    (0..sentence.len()).collect()
}

fn relation_holds(op: RelOp, candidate: TokenId, referent: TokenId, sentence: &Sentence) -> bool {
    match op {
        RelOp::Child => candidate != referent && sentence.token(candidate).head == referent,
        RelOp::Parent => candidate != referent && sentence.token(referent).head == candidate,
        RelOp::Ancestor => on_head_chain(sentence, candidate, referent),
        RelOp::Descendant => on_head_chain(sentence, referent, candidate),
    }
}

/// Whether `ancestor` lies on the head chain strictly above `descendant`.
/// The walk stops at the root and is bounded by the sentence length.
fn on_head_chain(sentence: &Sentence, ancestor: TokenId, descendant: TokenId) -> bool {
    let mut current = descendant;
    let mut steps = 0;
    while steps < sentence.len() {
        let head = sentence.token(current).head;
        if head == current {
            return false;
        }
        if head == ancestor {
            return true;
        }
        current = head;
        steps += 1;
    }
    false
}
