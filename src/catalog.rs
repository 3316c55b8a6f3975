//! The standard extraction rule catalog
//!
//! Everything data-driven lives here: shared vocabularies, the thirteen
//! relation records in priority order, the quantifier and relative
//! pronoun queries, and the span template sets for dates, nominals, and
//! modifiers. `Catalog::standard` compiles the lot up front and fails
//! closed, so a catalog in hand is known-good.

use rustc_hash::FxHashSet;

use crate::annotations::VerbType;
use crate::parse::{PatternError, Vocabularies, compile, compile_triple};
use crate::pattern::{
    Field, Quant, SpanTemplate, StrPred, TokenPred, TreePattern, TripleDef, TripleRule,
};

use Quant::{One, Opt, Plus, Star};

/// Lemmas that quantify an `of`-phrase object
pub const QUANTIFIERS: &[&str] = &[
    "all",
    "another",
    "any",
    "anything",
    "both",
    "each",
    "either",
    "enough",
    "every",
    "few",
    "half",
    "lot",
    "many",
    "most",
    "much",
    "neither",
    "no",
    "none",
    "nothing",
    "one",
    "plenty",
    "scores",
    "series",
    "set",
    "several",
    "some",
    "something",
    "string",
    "thing",
    "things",
    "whatever",
    "variety",
    "kind",
    "level",
    "number",
    "amount",
    "portion",
    "proportion",
    "concentration",
    "ratio",
    "frequency",
    "%",
    "percent",
    "percentage",
    "tenth",
    "tenths",
    "ten",
    "tens",
    "dozen",
    "dozens",
    "hundredth",
    "hundredths",
    "hundred",
    "hundreds",
    "thousandth",
    "thousandths",
    "thousand",
    "thousands",
    "millionth",
    "millionths",
    "million",
    "millions",
    "billionth",
    "billionths",
    "billion",
    "billions",
];

/// Hyphen code points that join chained spans
pub const HYPHENS: &[&str] = &[
    "\u{2010}", // hyphen
    "-",        // hyphen-minus
    "\u{058A}", // armenian hyphen
    "\u{2011}", // no-break hyphen
    "\u{FE63}", // small hyphen-minus
    "\u{2012}", // figure dash
    "\u{2013}", // en dash
];

/// Dependency roles a noun may fill inside a nominal chain
pub const NOMINAL_DEPS: &[&str] = &[
    "ROOT",
    "nsubj",
    "nsubjpass",
    "dobj",
    "pobj",
    "agent",
    "appos",
    "dative",
    "attr",
    "compound",
];

pub const NOMINAL_DEPS_NO_COMPOUND: &[&str] = &[
    "ROOT",
    "nsubj",
    "nsubjpass",
    "dobj",
    "pobj",
    "agent",
    "appos",
    "dative",
    "attr",
];

/// Month names and their abbreviations, as token text
pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "Jan",
    "Feb",
    "Mar",
    "Apr",
    "Jun",
    "Jul",
    "Aug",
    "Sep",
    "Oct",
    "Nov",
    "Dec",
];

/// Verbs of speech; a quoted span governed by one is reported speech, not
/// a name
pub const SPEECH_VERBS: &[&str] = &[
    "say", "tell", "assert", "state", "confess", "claim", "express", "admit", "ask",
];

/// Common-noun lemmas that close a proper chain ("the Acme Corp founder")
pub const NOMINALIZED_VERBS: &[&str] =
    &["producer", "maker", "owner", "founder", "leader", "winner"];

const VERB_TAGS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];
const BEING_LEMMAS: &[&str] = &["be", "become", "remain"];
const NOMINAL_POS: &[&str] = &["NOUN", "PROPN", "PRON", "NUM"];
const COMMON_TAGS: &[&str] = &["NN", "NNS"];
const PROPER_TAGS: &[&str] = &["NNP", "NNPS"];

/// Sentence punctuation that ends a hyphenated run-on; every ASCII
/// punctuation character except the hyphen
const RUN_ON_STOP: &[&str] = &[
    "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", ".", "/", ":", ";", "<", "=",
    ">", "?", "@", "[", "\\", "]", "^", "_", "`", "{", "|", "}", "~",
];

/// Inbound roles that let a nominal span keep its date tokens
const NOMINAL_DATE_ROLES: &[&str] =
    &["nsubj", "nsubjpass", "dobj", "pobj", "agent", "appos", "dative"];

/// Inbound roles that let a modifier span keep its date tokens
const MODIFIER_DATE_ROLES: &[&str] = &["amod", "nummod", "nmod", "compound"];

const MODIFIER_DEPS: &[&str] = &["amod", "nummod", "nmod"];

const YEAR: &str = r"[1-2][0-9]{3}";
const ANCIENT_YEAR: &str = r"([0-9]{2})|([1-2]?[0-9]{3})";
const DAY: &str =
    r"(((1[0-9])|(2[04-9])|30|([04-9]))th)|(2?2nd)|(2?3rd)|([2-3]?1st)|(((3[0-1])|([1-2]?[0-9])))";
const ERA: &str = r"([Aa](\.?)([D](\.?)|(d\.)))|([Bb](\.?)[Cc](\.?)[Ee]?(\.?))";
const ORDINAL: &str = r"[0-9]+(st|nd|rd|th)";
const ABBREVIATION: &str = r"[A-Z][A-Za-z]*\.";

/// Relation records in priority order. Order matters: the first record to
/// emit through a verb stamps its type, and later records drop matches
/// whose verb is already claimed.
pub const TRIPLE_DEFS: [TripleDef; 13] = [
    TripleDef {
        kind: "be_noun_prep",
        query: r#"
            verb [tag in $verb_tags, lemma in $being_lemmas];
            src > verb [dep = "nsubj", pos in ["NOUN", "PROPN"]];
            noun > verb [dep = "attr", pos in $nominal_pos];
            prep > noun [dep = "prep"];
            dst > prep [dep = "pobj", pos in ["NOUN", "PROPN"]];
        "#,
        edge_template: "be_{}_{}",
        src: "src",
        dst: "dst",
        edge: &["noun", "prep"],
        verb: Some(("verb", VerbType::Being)),
        conjuncts: &["src", "noun"],
        hidden: &[],
    },
    TripleDef {
        kind: "being_verb",
        query: r#"
            verb [tag in $verb_tags, lemma in $being_lemmas];
            src > verb [dep = "nsubj"];
            dst > verb [dep = "attr"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["verb"],
        verb: Some(("verb", VerbType::Being)),
        conjuncts: &["src", "dst"],
        hidden: &[],
    },
    TripleDef {
        kind: "verbed-prep",
        query: r#"
            verb [tag in $verb_tags];
            src > verb [dep = "dobj"];
            prep > verb [dep = "prep"];
            dst > prep [dep = "pobj"];
        "#,
        edge_template: "be-{}-{}",
        src: "src",
        dst: "dst",
        edge: &["verb", "prep"],
        verb: Some(("verb", VerbType::Transitive)),
        conjuncts: &[],
        hidden: &[],
    },
    TripleDef {
        kind: "active_transitive_verb",
        query: r#"
            verb [tag in $verb_tags];
            src > verb [dep = "nsubj"];
            dst > verb [dep = "dobj"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["verb"],
        verb: Some(("verb", VerbType::Transitive)),
        conjuncts: &["src", "dst"],
        hidden: &[],
    },
    TripleDef {
        // "Alice greeted and thanked Bob": the conjoined verb keeps the
        // governor's subject
        kind: "active_transitive_verb_conjuncts",
        query: r#"
            governor [tag in $verb_tags];
            src > governor [dep = "nsubj"];
            verb >> governor [tag in $verb_tags, dep = "conj"];
            dst > verb [dep = "dobj"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["verb"],
        verb: Some(("verb", VerbType::Transitive)),
        conjuncts: &["src", "verb", "dst"],
        hidden: &["governor"],
    },
    TripleDef {
        kind: "passive_transitive_verb",
        query: r#"
            verb [tag in $verb_tags];
            agent_prep > verb [dep = "agent"];
            src > agent_prep [dep = "pobj"];
            dst > verb [dep = "nsubjpass"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["verb"],
        verb: Some(("verb", VerbType::Passive)),
        conjuncts: &["src", "dst"],
        hidden: &["agent_prep"],
    },
    TripleDef {
        kind: "passive_transitive_verb_conjuncts",
        query: r#"
            governor [tag in $verb_tags];
            verb >> governor [tag in $verb_tags, dep = "conj"];
            dst > governor [dep = "nsubjpass"];
            agent_prep > verb [dep = "agent"];
            src > agent_prep [dep = "pobj"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["verb"],
        verb: Some(("verb", VerbType::Passive)),
        conjuncts: &["verb", "dst", "src"],
        hidden: &["governor", "agent_prep"],
    },
    TripleDef {
        kind: "intransitive_verb_prep",
        query: r#"
            verb [tag in $verb_tags];
            src > verb [dep = "nsubj"];
            prep > verb [dep = "prep"];
            dst > prep [dep = "pobj"];
        "#,
        edge_template: "{}-{}",
        src: "src",
        dst: "dst",
        edge: &["verb", "prep"],
        verb: Some(("verb", VerbType::Intransitive)),
        conjuncts: &["src", "dst"],
        hidden: &[],
    },
    TripleDef {
        // "a glass of water" -> (glass)-[of]->(water)
        kind: "prep",
        query: r#"
            src [pos in $nominal_pos];
            prep > src [dep = "prep"];
            dst > prep [dep = "pobj"];
        "#,
        edge_template: "{}",
        src: "src",
        dst: "dst",
        edge: &["prep"],
        verb: None,
        conjuncts: &[],
        hidden: &[],
    },
    TripleDef {
        kind: "appos_noun_prep",
        query: r#"
            src [pos in ["NOUN", "PROPN"]];
            noun > src [dep = "appos", pos = "NOUN"];
            prep > noun [dep = "prep"];
            dst > prep [dep = "pobj", pos in ["NOUN", "PROPN"]];
        "#,
        edge_template: "appos_{}_{}",
        src: "src",
        dst: "dst",
        edge: &["noun", "prep"],
        verb: None,
        conjuncts: &["src"],
        hidden: &[],
    },
    TripleDef {
        kind: "poss_noun_appos",
        query: r#"
            noun [pos = "NOUN"];
            src > noun [dep = "poss", pos in ["NOUN", "PROPN"]];
            dst > noun [dep = "appos", pos in ["NOUN", "PROPN"]];
        "#,
        edge_template: "poss_{}_appos",
        src: "src",
        dst: "dst",
        edge: &["noun"],
        verb: None,
        conjuncts: &["noun"],
        hidden: &[],
    },
    TripleDef {
        kind: "poss_noun_prep",
        query: r#"
            noun [pos in $nominal_pos];
            src > noun [dep = "poss", pos in ["NOUN", "PROPN"]];
            prep > noun [dep = "prep"];
            dst > prep [dep = "pobj", pos in ["NOUN", "PROPN"]];
        "#,
        edge_template: "poss_{}_{}",
        src: "src",
        dst: "dst",
        edge: &["noun", "prep"],
        verb: None,
        conjuncts: &["noun"],
        hidden: &[],
    },
    TripleDef {
        // "CNN reporter Bob" -> (CNN)-[compound_reporter_compound]->(Bob)
        kind: "compound_noun_compound",
        query: r#"
            src [pos = "PROPN", dep = "compound"];
            noun < src [dep = "compound", pos = "NOUN"];
            dst < noun [pos = "PROPN"];
        "#,
        edge_template: "compound_{}_compound",
        src: "src",
        dst: "dst",
        edge: &["noun"],
        verb: None,
        conjuncts: &[],
        hidden: &[],
    },
];

const QUANTIFIER_QUERY: &str = r#"
    quantifier [lemma in $quantifiers];
    of > quantifier [lemma = "of", dep = "prep"];
    object > of [dep = "pobj", pos in ["NOUN", "PRON", "PROPN"]];
"#;

const RELATIVE_PRONOUN_QUERY: &str = r#"
    pronoun [lemma in ["which", "that", "whom", "who", "whose"]];
    verb << pronoun [tag in $verb_tags, dep = "relcl"];
    antecedent < verb [pos in ["NOUN", "PRON", "PROPN"]];
"#;

/// Named token sets referenced from queries as `$name`
pub fn vocabularies() -> Vocabularies {
    let mut vocabs = Vocabularies::default();
    vocabs.insert("verb_tags".to_string(), to_set(VERB_TAGS));
    vocabs.insert("being_lemmas".to_string(), to_set(BEING_LEMMAS));
    vocabs.insert("nominal_pos".to_string(), to_set(NOMINAL_POS));
    vocabs.insert("quantifiers".to_string(), to_set(QUANTIFIERS));
    vocabs
}

fn to_set(values: &[&str]) -> FxHashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn tag(value: &str) -> TokenPred {
    TokenPred::any().check(Field::Tag, StrPred::eq(value))
}

fn tag_in(values: &[&str]) -> TokenPred {
    TokenPred::any().check(Field::Tag, StrPred::any_of(values))
}

fn dep(value: &str) -> TokenPred {
    TokenPred::any().check(Field::Dep, StrPred::eq(value))
}

fn date_templates() -> Result<Vec<SpanTemplate>, PatternError> {
    let year = TokenPred::any().check(Field::Text, StrPred::regex(YEAR)?);
    let ancient_year = TokenPred::any().check(Field::Text, StrPred::regex(ANCIENT_YEAR)?);
    let day = TokenPred::any().check(Field::Text, StrPred::regex(DAY)?);
    let era = TokenPred::any().check(Field::Text, StrPred::regex(ERA)?);
    let month = TokenPred::any().check(Field::Text, StrPred::any_of(MONTHS));
    let comma = tag(",");

    Ok(vec![
        SpanTemplate::new(vec![(ancient_year, One), (era, One)]),
        SpanTemplate::new(vec![(day.clone(), One), (month.clone(), One), (year.clone(), One)]),
        SpanTemplate::new(vec![
            (day.clone(), One),
            (month.clone(), One),
            (comma.clone(), One),
            (year.clone(), One),
        ]),
        SpanTemplate::new(vec![(month.clone(), One), (day.clone(), One)]),
        SpanTemplate::new(vec![(month.clone(), One), (day.clone(), One), (year.clone(), One)]),
        SpanTemplate::new(vec![
            (month.clone(), One),
            (day, One),
            (comma.clone(), One),
            (year.clone(), One),
        ]),
        SpanTemplate::new(vec![(month.clone(), One), (year.clone(), One)]),
        SpanTemplate::new(vec![(month, One), (comma, One), (year.clone(), One)]),
        SpanTemplate::new(vec![(year, One)]),
    ])
}

fn nominal_templates() -> Result<Vec<SpanTemplate>, PatternError> {
    let date_run = TokenPred::any().date(true);
    let ordinal = TokenPred::any()
        .check(Field::Pos, StrPred::eq("ADJ"))
        .check(Field::Lemma, StrPred::regex(ORDINAL)?);
    // a chain head may not continue a hyphenation or act as a unit symbol
    let noun_head = tag_in(COMMON_TAGS)
        .check(Field::Text, StrPred::none_of(&["%"]))
        .check(Field::LeftText, StrPred::none_of(HYPHENS));
    let noun_run = tag_in(COMMON_TAGS)
        .check(Field::Text, StrPred::none_of(&["%"]))
        .check(Field::Dep, StrPred::any_of(NOMINAL_DEPS));
    let hyphen_tag = tag("HYPH").spaced(false);
    let hyphen_lemma = TokenPred::any()
        .check(Field::Lemma, StrPred::any_of(HYPHENS))
        .spaced(false);
    let run_on = TokenPred::any()
        .spaced(false)
        .check(Field::RightText, StrPred::none_of(RUN_ON_STOP));
    let number = tag("CD");
    let one_nominal = tag_in(COMMON_TAGS).check(Field::Dep, StrPred::any_of(NOMINAL_DEPS));
    let propn = tag_in(PROPER_TAGS);
    let nondate_propn = tag_in(PROPER_TAGS).check(Field::Text, StrPred::none_of(MONTHS));
    let nominalized = TokenPred::any().check(Field::Lemma, StrPred::any_of(NOMINALIZED_VERBS));
    let title_adj = TokenPred::any().check(Field::Pos, StrPred::eq("ADJ")).title(true);
    let abbreviation =
        tag_in(PROPER_TAGS).check(Field::Text, StrPred::regex(ABBREVIATION)?);
    let measure = tag_in(COMMON_TAGS)
        .check(Field::Lemma, StrPred::any_of(&["level", "concentration"]));
    let nominal_number = tag("CD").check(Field::Dep, StrPred::any_of(NOMINAL_DEPS));
    let percent = TokenPred::any()
        .check(Field::Text, StrPred::eq("%"))
        .check(Field::Dep, StrPred::any_of(NOMINAL_DEPS_NO_COMPOUND));

    Ok(vec![
        // date runs always win over anything they overlap
        SpanTemplate::new(vec![(date_run, Plus)]),
        // common noun chains, optionally led by an ordinal like "1st"
        SpanTemplate::new(vec![
            (ordinal.clone(), Opt),
            (noun_head.clone(), One),
            (noun_run.clone(), Star),
        ]),
        SpanTemplate::new(vec![(noun_head.clone(), One), (noun_run.clone(), Star)]),
        // hyphen-joined chains run on to the next whitespace break
        SpanTemplate::new(vec![
            (noun_head.clone(), One),
            (noun_run.clone(), Star),
            (hyphen_tag.clone(), One),
            (run_on.clone(), Star),
            (TokenPred::any(), One),
        ]),
        SpanTemplate::new(vec![
            (noun_head, One),
            (noun_run, Star),
            (hyphen_lemma.clone(), One),
            (run_on.clone(), Star),
            (TokenPred::any(), One),
        ]),
        // fractions like "one-tenth"
        SpanTemplate::new(vec![
            (number.clone(), One),
            (hyphen_tag.clone(), One),
            (one_nominal.clone(), One),
        ]),
        SpanTemplate::new(vec![
            (number.clone(), One),
            (hyphen_lemma.clone(), One),
            (one_nominal, One),
        ]),
        // proper chains, optionally closed by a nominalized verb
        SpanTemplate::new(vec![
            (ordinal.clone(), Opt),
            (propn.clone(), Plus),
            (nominalized, Opt),
        ]),
        // possessives survive only in "Something's Day"
        SpanTemplate::new(vec![
            (propn.clone(), Plus),
            (tag("POS"), One),
            (TokenPred::any().check(Field::Text, StrPred::eq("Day")), One),
        ]),
        SpanTemplate::new(vec![
            (ordinal.clone(), Opt),
            (propn.clone(), Plus),
            (hyphen_tag, One),
            (propn.clone(), Plus),
        ]),
        SpanTemplate::new(vec![
            (ordinal.clone(), Opt),
            (propn.clone(), Plus),
            (hyphen_lemma, One),
            (propn.clone(), Plus),
        ]),
        // non-English particles inside names ("de", "del", "la")
        SpanTemplate::new(vec![
            (ordinal, Opt),
            (propn.clone(), Plus),
            (tag("FW"), One),
            (propn.clone(), Plus),
        ]),
        // numbers inside a proper span, but never leading a date word
        SpanTemplate::new(vec![
            (nondate_propn, Plus),
            (number.clone(), One),
            (propn.clone(), Star),
        ]),
        SpanTemplate::new(vec![(title_adj, Plus), (propn.clone(), Plus)]),
        // "Birmingham , Ala ."
        SpanTemplate::new(vec![(propn, Plus), (tag(","), One), (abbreviation, One)]),
        // quoted names need at least one titlecased token
        SpanTemplate::new(vec![
            (tag("``"), One),
            (TokenPred::any(), Star),
            (TokenPred::any().title(true), One),
            (TokenPred::any(), Star),
            (tag("''"), One),
        ]),
        SpanTemplate::new(vec![(measure, One)]),
        // monetary values and percentages
        SpanTemplate::new(vec![
            (tag("$"), Opt),
            (number.clone(), Star),
            (nominal_number, One),
        ]),
        SpanTemplate::new(vec![(number, Star), (percent, One)]),
        SpanTemplate::new(vec![(tag_in(&["PRP", "PRP$"]), One)]),
    ])
}

fn modifier_templates() -> Result<Vec<SpanTemplate>, PatternError> {
    let date_run = TokenPred::any().date(true);
    let modifier = TokenPred::any().check(Field::Dep, StrPred::any_of(MODIFIER_DEPS));
    let proper_modifier = modifier.clone().title(true);
    let hyphen_tag = tag("HYPH").spaced(false);
    let hyphen_lemma = TokenPred::any()
        .check(Field::Lemma, StrPred::any_of(HYPHENS))
        .spaced(false);
    // "3 year old": a leading count over a time unit
    let time_count = tag("CD")
        .check(Field::Dep, StrPred::eq("nummod"))
        .check(Field::RightText, StrPred::any_of(&["day", "month", "year"]));
    let npadvmod = dep("npadvmod");
    let run_on = TokenPred::any()
        .spaced(false)
        .check(Field::RightText, StrPred::none_of(RUN_ON_STOP));

    Ok(vec![
        SpanTemplate::new(vec![(date_run, Plus)]),
        SpanTemplate::new(vec![(modifier.clone(), One)]),
        // counts with an optional currency symbol
        SpanTemplate::new(vec![
            (tag("$"), Opt),
            (tag("CD"), Plus),
            (modifier.clone(), One),
        ]),
        // runs of titlecased modifiers, optionally hyphen-joined
        SpanTemplate::new(vec![
            (proper_modifier.clone(), Plus),
            (hyphen_tag.clone(), Opt),
            (proper_modifier.clone(), Plus),
        ]),
        SpanTemplate::new(vec![
            (proper_modifier.clone(), Plus),
            (hyphen_lemma.clone(), Opt),
            (proper_modifier.clone(), Plus),
        ]),
        // npadvmod compounds like "European Union-funded"
        SpanTemplate::new(vec![
            (time_count.clone(), Opt),
            (npadvmod.clone(), Plus),
            (hyphen_tag.clone(), Opt),
            (modifier.clone(), One),
        ]),
        SpanTemplate::new(vec![
            (time_count.clone(), Opt),
            (npadvmod.clone(), Plus),
            (hyphen_lemma.clone(), Opt),
            (modifier.clone(), One),
        ]),
        SpanTemplate::new(vec![
            (proper_modifier.clone(), Plus),
            (npadvmod.clone(), Plus),
            (hyphen_tag.clone(), Opt),
            (modifier.clone(), One),
        ]),
        SpanTemplate::new(vec![
            (proper_modifier, Plus),
            (npadvmod, Plus),
            (hyphen_lemma.clone(), Opt),
            (modifier.clone(), One),
        ]),
        // adverbs only count when hyphen-joined to a modifier
        SpanTemplate::new(vec![
            (time_count.clone(), Opt),
            (dep("advmod"), One),
            (hyphen_tag.clone(), One),
            (modifier.clone(), One),
        ]),
        SpanTemplate::new(vec![
            (time_count, Opt),
            (dep("advmod"), One),
            (hyphen_lemma.clone(), One),
            (modifier.clone(), One),
        ]),
        // verbal modifiers with a particle ("broken down")
        SpanTemplate::new(vec![
            (modifier.clone(), One),
            (tag("HYPH"), Opt),
            (dep("prt"), One),
        ]),
        SpanTemplate::new(vec![
            (modifier.clone(), One),
            (hyphen_tag, One),
            (run_on.clone(), Star),
            (TokenPred::any(), One),
        ]),
        SpanTemplate::new(vec![
            (modifier, One),
            (hyphen_lemma, One),
            (run_on, Star),
            (TokenPred::any(), One),
        ]),
    ])
}

/// A compiled rule set ready to run over sentences
#[derive(Debug, Clone)]
pub struct Catalog {
    pub nominal_templates: Vec<SpanTemplate>,
    pub modifier_templates: Vec<SpanTemplate>,
    pub date_templates: Vec<SpanTemplate>,
    pub triples: Vec<TripleRule>,
    pub quantifier: TreePattern,
    pub relative_pronoun: TreePattern,
    pub speech_verbs: FxHashSet<String>,
    pub nominal_roles: FxHashSet<String>,
    pub modifier_roles: FxHashSet<String>,
}

impl Catalog {
    /// Compile the standard rule set. Any malformed query or template
    /// fails the whole catalog.
    pub fn standard() -> Result<Self, PatternError> {
        let vocabs = vocabularies();
        let triples = TRIPLE_DEFS
            .iter()
            .map(|def| compile_triple(def, &vocabs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            nominal_templates: nominal_templates()?,
            modifier_templates: modifier_templates()?,
            date_templates: date_templates()?,
            triples,
            quantifier: compile(QUANTIFIER_QUERY, &vocabs)?,
            relative_pronoun: compile(RELATIVE_PRONOUN_QUERY, &vocabs)?,
            speech_verbs: to_set(SPEECH_VERBS),
            nominal_roles: to_set(NOMINAL_DATE_ROLES),
            modifier_roles: to_set(MODIFIER_DATE_ROLES),
        })
    }
}
