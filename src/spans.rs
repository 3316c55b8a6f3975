//! Span extraction and overlap resolution
//!
//! Spans are half-open token ranges. Each template set is a disjunction:
//! every template is tried at every start offset, all candidates are
//! collected, post-match adjustments run per candidate, and the overlap
//! resolver picks the surviving set. Date templates run first and tag
//! their tokens so later rules can test the date flag.

use rustc_hash::FxHashSet;

use crate::annotations::Annotations;
use crate::pattern::SpanTemplate;
use crate::sentence::{Sentence, is_title};
use crate::sequence::match_at;

/// Half-open token index range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Greedy overlap resolution: longest first, earlier start on ties,
/// accept anything that does not overlap an accepted span. The result is
/// sorted by start.
pub fn resolve_spans(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));
    let mut accepted: Vec<Span> = Vec::new();
    for candidate in candidates {
        if !accepted.iter().any(|span| span.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|span| span.start);
    accepted
}

/// Longest match for each template and start offset, dropping empty
/// matches
fn collect_candidates(
    templates: &[SpanTemplate],
    sentence: &Sentence,
    ann: &Annotations,
) -> Vec<Span> {
    let mut candidates = Vec::new();
    for template in templates {
        for start in 0..sentence.len() {
            if let Some(end) = match_at(template, sentence, ann, start)
                && end > start
            {
                candidates.push(Span::new(start, end));
            }
        }
    }
    candidates
}

/// Run the date templates, tag every matched token in the side-table, and
/// return the resolved date spans
pub fn extract_dates(
    templates: &[SpanTemplate],
    sentence: &Sentence,
    ann: &mut Annotations,
) -> Vec<Span> {
    let candidates = collect_candidates(templates, sentence, ann);
    for span in &candidates {
        for id in span.start..span.end {
            ann.mark_date(id);
        }
    }
    resolve_spans(candidates)
}

/// Nominal span extraction with per-candidate adjustments
pub fn extract_nominals(
    templates: &[SpanTemplate],
    sentence: &Sentence,
    ann: &Annotations,
    speech_verbs: &FxHashSet<String>,
    roles: &FxHashSet<String>,
) -> Vec<Span> {
    let candidates = collect_candidates(templates, sentence, ann)
        .into_iter()
        .filter_map(|span| adjust_nominal(sentence, ann, speech_verbs, roles, span))
        .collect();
    resolve_spans(candidates)
}

/// Modifier span extraction; only the date gate applies
pub fn extract_modifiers(
    templates: &[SpanTemplate],
    sentence: &Sentence,
    ann: &Annotations,
    roles: &FxHashSet<String>,
) -> Vec<Span> {
    let candidates = collect_candidates(templates, sentence, ann)
        .into_iter()
        .filter(|span| date_gate(sentence, ann, roles, *span))
        .collect();
    resolve_spans(candidates)
}

/// Quote trimming, speech-verb and nested-quote rejection, titlecase
/// ratio, trailing level/concentration trim, then the date gate.
fn adjust_nominal(
    sentence: &Sentence,
    ann: &Annotations,
    speech_verbs: &FxHashSet<String>,
    roles: &FxHashSet<String>,
    span: Span,
) -> Option<Span> {
    let length = span.len();
    let mut start = span.start;
    let mut end = span.end;

    if sentence.token(start).tag == "``" && sentence.token(end - 1).tag == "''" {
        start += 1;
        end -= 1;
        let mut titlecased = 0;
        for id in start..end {
            let token = sentence.token(id);
            let head = sentence.token(token.head);
            if head.pos == "VERB" && speech_verbs.contains(&head.lemma) {
                return None;
            }
            if token.tag == "``" || token.tag == "''" {
                return None;
            }
            if is_title(&token.text) {
                titlecased += 1;
            }
        }
        let total = end - start;
        if total > 5 && titlecased * 2 < total {
            return None;
        }
    } else if length > 1
        && sentence.tokens()[start..end - 1].iter().all(|t| t.tag == "NN" || t.tag == "NNS")
    {
        let last = sentence.token(end - 1);
        if last.lemma == "level" || last.lemma == "concentration" {
            end -= 1;
        }
    }

    let trimmed = Span::new(start, end);
    if trimmed.is_empty() || !date_gate(sentence, ann, roles, trimmed) {
        return None;
    }
    Some(trimmed)
}

/// A span touching date-flagged tokens survives only when it covers the
/// whole run of flags and fills one of the allowed inbound roles
fn date_gate(sentence: &Sentence, ann: &Annotations, roles: &FxHashSet<String>, span: Span) -> bool {
    let has_date = (span.start..span.end).any(|id| ann.is_date(id));
    if !has_date {
        return true;
    }
    if span.start > 0 && ann.is_date(span.start - 1) {
        return false;
    }
    if span.end < sentence.len() && ann.is_date(span.end) {
        return false;
    }
    sentence
        .inbound_deps(span.start, span.end)
        .iter()
        .any(|dep| roles.contains(*dep))
}
