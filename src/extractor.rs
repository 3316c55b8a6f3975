//! The end-to-end extraction pipeline
//!
//! An `Extractor` owns a compiled catalog and drives one sentence at a
//! time: date tagging, the quantifier and relative pronoun rewriters,
//! triple building and resolution, then nominal and modifier span
//! extraction. All cross-stage state lives in a per-call side-table, so
//! repeated calls on the same sentence are independent.

use crate::annotations::Annotations;
use crate::catalog::Catalog;
use crate::index::SentenceIndex;
use crate::parse::PatternError;
use crate::rewrite::{apply_quantifiers, apply_relative_pronouns};
use crate::sentence::Sentence;
use crate::spans::{Span, extract_dates, extract_modifiers, extract_nominals};
use crate::triples::{Triple, build_triples, resolve_triples};

/// Limits for a single extraction run
#[derive(Debug, Clone, Copy)]
pub struct ExtractorConfig {
    /// Upper bound on tuples emitted per rule match and on the fan-out of
    /// a single resolved triple
    pub max_expansion: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self { max_expansion: 64 }
    }
}

/// Everything one sentence produced
#[derive(Debug, Clone)]
pub struct Extraction {
    pub triples: Vec<Triple>,
    pub nominals: Vec<Span>,
    pub modifiers: Vec<Span>,
    pub dates: Vec<Span>,
    /// Side-table state after the run
    pub annotations: Annotations,
    /// Tuples dropped by the expansion cap
    pub skipped: usize,
}

/// A compiled catalog plus run limits
#[derive(Debug, Clone)]
pub struct Extractor {
    catalog: Catalog,
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(catalog: Catalog, config: ExtractorConfig) -> Self {
        Self { catalog, config }
    }

    /// The standard catalog under default limits
    pub fn standard() -> Result<Self, PatternError> {
        Ok(Self::new(Catalog::standard()?, ExtractorConfig::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the full pipeline over one sentence. Dates are tagged before
    /// anything else so every later stage can test the date flag; the
    /// rewriters run before triple building so resolution sees their
    /// endpoint maps.
    pub fn process(&self, sentence: &Sentence) -> Extraction {
        let cap = self.config.max_expansion;
        let mut ann = Annotations::new(sentence.len());
        let index = SentenceIndex::build(sentence);

        let dates = extract_dates(&self.catalog.date_templates, sentence, &mut ann);
        apply_quantifiers(&self.catalog.quantifier, sentence, &index, &mut ann);
        apply_relative_pronouns(&self.catalog.relative_pronoun, sentence, &index, &mut ann);

        let built = build_triples(&self.catalog.triples, sentence, &index, &mut ann, cap);
        let resolved = resolve_triples(built.triples, &ann, cap);

        let nominals = extract_nominals(
            &self.catalog.nominal_templates,
            sentence,
            &ann,
            &self.catalog.speech_verbs,
            &self.catalog.nominal_roles,
        );
        let modifiers = extract_modifiers(
            &self.catalog.modifier_templates,
            sentence,
            &ann,
            &self.catalog.modifier_roles,
        );

        Extraction {
            triples: resolved.triples,
            nominals,
            modifiers,
            dates,
            annotations: ann,
            skipped: built.skipped + resolved.skipped,
        }
    }
}
