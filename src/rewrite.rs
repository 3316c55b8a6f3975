//! Side-table rewriters
//!
//! Two passes run between date tagging and triple extraction. The
//! quantifier pass maps a quantifying token to the objects of its
//! `of`-phrase, so "one of the cakes" can later stand for "cakes". The
//! relative pronoun pass maps "who", "which", and friends back to the
//! noun their clause modifies. Both write into the annotation side-table;
//! the resolver applies the substitutions after triples are built.

use crate::annotations::Annotations;
use crate::index::SentenceIndex;
use crate::matcher::find_matches;
use crate::pattern::TreePattern;
use crate::sentence::Sentence;

/// Append each matched object and its conjuncts to the quantifier's list
pub fn apply_quantifiers(
    pattern: &TreePattern,
    sentence: &Sentence,
    index: &SentenceIndex,
    ann: &mut Annotations,
) {
    let (Some(quantifier), Some(object)) =
        (pattern.node_index("quantifier"), pattern.node_index("object"))
    else {
        return;
    };
    for binding in find_matches(pattern, sentence, index, ann) {
        let target = binding[object];
        ann.add_quantified(binding[quantifier], target);
        for conjunct in sentence.conjuncts(target) {
            ann.add_quantified(binding[quantifier], conjunct);
        }
    }
}

/// Point each matched pronoun at its antecedent; a later match overwrites
/// an earlier one
pub fn apply_relative_pronouns(
    pattern: &TreePattern,
    sentence: &Sentence,
    index: &SentenceIndex,
    ann: &mut Annotations,
) {
    let (Some(pronoun), Some(antecedent)) =
        (pattern.node_index("pronoun"), pattern.node_index("antecedent"))
    else {
        return;
    };
    for binding in find_matches(pattern, sentence, index, ann) {
        ann.set_antecedent(binding[pronoun], binding[antecedent]);
    }
}
