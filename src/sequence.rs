//! Greedy sequence matching over token templates
//!
//! A template consumes tokens left to right. Variable quantifiers are
//! greedy but give tokens back when a later item cannot be placed, so the
//! result for a given start offset is the longest span the template can
//! cover there.

use crate::annotations::Annotations;
use crate::pattern::{Quant, SpanTemplate};
use crate::sentence::Sentence;

/// Match the template against the sentence at `start`. Returns the end of
/// the matched range (exclusive), which may equal `start` when every item
/// is optional.
pub fn match_at(
    template: &SpanTemplate,
    sentence: &Sentence,
    ann: &Annotations,
    start: usize,
) -> Option<usize> {
    if start > sentence.len() {
        return None;
    }
    match_items(&template.items, sentence, ann, start)
}

fn match_items(
    items: &[(crate::pattern::TokenPred, Quant)],
    sentence: &Sentence,
    ann: &Annotations,
    position: usize,
) -> Option<usize> {
    let Some(((pred, quant), rest)) = items.split_first() else {
        return Some(position);
    };

    match quant {
        Quant::One => {
            if position < sentence.len() && pred.matches(sentence, ann, position) {
                match_items(rest, sentence, ann, position + 1)
            } else {
                None
            }
        }
        Quant::Opt => {
            if position < sentence.len()
                && pred.matches(sentence, ann, position)
                && let Some(end) = match_items(rest, sentence, ann, position + 1)
            {
                return Some(end);
            }
            match_items(rest, sentence, ann, position)
        }
        Quant::Star | Quant::Plus => {
            let mut run = 0;
            while position + run < sentence.len() && pred.matches(sentence, ann, position + run) {
                run += 1;
            }
            let min = if *quant == Quant::Plus { 1 } else { 0 };
            let mut take = run;
            loop {
                if take < min {
                    return None;
                }
                if let Some(end) = match_items(rest, sentence, ann, position + take) {
                    return Some(end);
                }
                if take == min {
                    return None;
                }
                take -= 1;
            }
        }
    }
}
