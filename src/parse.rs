//! Compiler for the tree pattern DSL
//!
//! The grammar lives in `pattern.pest`. Compilation resolves node
//! references and vocabularies and fails closed: any unknown name, bad
//! regex, or malformed declaration is an error at registration time, so a
//! catalog either loads completely or not at all.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::pattern::{
    Field, PatternNode, RelOp, StrPred, TokenPred, TreePattern, TripleDef, TripleRule,
};

#[derive(Parser)]
#[grammar = "pattern.pest"]
struct PatternParser;

/// Named string sets referenced from patterns as `$name`
pub type Vocabularies = FxHashMap<String, FxHashSet<String>>;

/// Error raised while compiling a pattern or triple record
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("{0}")]
    Parse(#[from] pest::error::Error<Rule>),
    #[error("pattern declares no nodes")]
    Empty,
    #[error("duplicate node `{0}`")]
    DuplicateNode(String),
    #[error("node `{node}` references unknown node `{referent}`")]
    UnknownNode { node: String, referent: String },
    #[error("anchor node `{0}` must not declare a relation")]
    AnchorRelation(String),
    #[error("node `{0}` must declare a relation to an earlier node")]
    MissingRelation(String),
    #[error("unknown vocabulary `${0}`")]
    UnknownVocab(String),
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),
    #[error("edge template `{template}` has {slots} slots but {roles} edge roles")]
    TemplateArity { template: String, slots: usize, roles: usize },
    #[error("triple pattern `{kind}` names unknown role `{role}`")]
    UnknownRole { kind: String, role: String },
}

/// Compile DSL source into a validated tree pattern
pub fn compile(source: &str, vocabs: &Vocabularies) -> Result<TreePattern, PatternError> {
    let mut parsed = PatternParser::parse(Rule::pattern, source)?;
    let pattern = parsed.next().unwrap();

    let mut nodes: Vec<PatternNode> = Vec::new();
    let mut by_name: FxHashMap<String, usize> = FxHashMap::default();
    for decl in pattern.into_inner() {
        if decl.as_rule() == Rule::EOI {
            continue;
        }
        let node = compile_node(decl, &by_name, nodes.len(), vocabs)?;
        if by_name.contains_key(&node.name) {
            return Err(PatternError::DuplicateNode(node.name));
        }
        by_name.insert(node.name.clone(), nodes.len());
        nodes.push(node);
    }
    if nodes.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(TreePattern { nodes })
}

fn compile_node(
    decl: Pair<Rule>,
    by_name: &FxHashMap<String, usize>,
    position: usize,
    vocabs: &Vocabularies,
) -> Result<PatternNode, PatternError> {
    let mut inner = decl.into_inner();
    let name = inner.next().unwrap().as_str().to_string();
    let mut relation = None;
    let mut pred = TokenPred::any();

    for pair in inner {
        match pair.as_rule() {
            Rule::relation => {
                if position == 0 {
                    return Err(PatternError::AnchorRelation(name));
                }
                let mut parts = pair.into_inner();
                let op = match parts.next().unwrap().as_str() {
                    ">" => RelOp::Child,
                    "<" => RelOp::Parent,
                    "<<" => RelOp::Ancestor,
                    ">>" => RelOp::Descendant,
                    _ => unreachable!(),
                };
                let referent = parts.next().unwrap().as_str();
                let target = *by_name.get(referent).ok_or_else(|| PatternError::UnknownNode {
                    node: name.clone(),
                    referent: referent.to_string(),
                })?;
                relation = Some((op, target));
            }
            Rule::check => compile_check(pair, &mut pred, vocabs)?,
            _ => unreachable!(),
        }
    }

    if position > 0 && relation.is_none() {
        return Err(PatternError::MissingRelation(name));
    }
    Ok(PatternNode { name, pred, relation })
}

fn compile_check(
    check: Pair<Rule>,
    pred: &mut TokenPred,
    vocabs: &Vocabularies,
) -> Result<(), PatternError> {
    let inner = check.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::flag => match inner.as_str() {
            "is_title" => pred.is_title = Some(true),
            "is_date" => pred.is_date = Some(true),
            "no_space_after" => pred.space_after = Some(false),
            _ => unreachable!(),
        },
        Rule::key_check => {
            let mut parts = inner.into_inner();
            let field = match parts.next().unwrap().as_str() {
                "text" => Field::Text,
                "lemma" => Field::Lemma,
                "pos" => Field::Pos,
                "tag" => Field::Tag,
                "dep" => Field::Dep,
                "left_text" => Field::LeftText,
                "right_text" => Field::RightText,
                _ => unreachable!(),
            };
            let op = parts.next().unwrap();
            let str_pred = match op.as_rule() {
                Rule::eq_op => StrPred::Eq(unquote(op)),
                Rule::match_op => StrPred::regex(&unquote(op))?,
                Rule::in_op => StrPred::In(resolve_set(op, vocabs)?),
                Rule::not_in_op => StrPred::NotIn(resolve_set(op, vocabs)?),
                _ => unreachable!(),
            };
            pred.checks.push((field, str_pred));
        }
        _ => unreachable!(),
    }
    Ok(())
}

/// Extract the inner text of the single string under an eq/match op
fn unquote(op: Pair<Rule>) -> String {
    let string = op.into_inner().next().unwrap();
    string.into_inner().next().unwrap().as_str().to_string()
}

fn resolve_set(op: Pair<Rule>, vocabs: &Vocabularies) -> Result<FxHashSet<String>, PatternError> {
    let set = op.into_inner().next().unwrap();
    match set.as_rule() {
        Rule::string_list => Ok(set
            .into_inner()
            .map(|s| s.into_inner().next().unwrap().as_str().to_string())
            .collect()),
        Rule::vocab_ref => {
            let name = set.into_inner().next().unwrap().as_str();
            vocabs
                .get(name)
                .cloned()
                .ok_or_else(|| PatternError::UnknownVocab(name.to_string()))
        }
        _ => unreachable!(),
    }
}

/// Compile a triple record: compile its query, then resolve every role
/// name against the pattern's nodes and check the template slot count.
pub fn compile_triple(def: &TripleDef, vocabs: &Vocabularies) -> Result<TripleRule, PatternError> {
    let pattern = compile(def.query, vocabs)?;
    let resolve = |role: &str| {
        pattern.node_index(role).ok_or_else(|| PatternError::UnknownRole {
            kind: def.kind.to_string(),
            role: role.to_string(),
        })
    };

    let src = resolve(def.src)?;
    let dst = resolve(def.dst)?;
    let edge = def.edge.iter().map(|role| resolve(role)).collect::<Result<Vec<_>, _>>()?;
    let verb = match def.verb {
        Some((role, verb_type)) => Some((resolve(role)?, verb_type)),
        None => None,
    };
    for role in def.hidden {
        resolve(role)?;
    }
    let mut expand = vec![false; pattern.nodes.len()];
    for role in def.conjuncts {
        expand[resolve(role)?] = true;
    }

    let slots = def.edge_template.matches("{}").count();
    if slots != edge.len() {
        return Err(PatternError::TemplateArity {
            template: def.edge_template.to_string(),
            slots,
            roles: edge.len(),
        });
    }

    Ok(TripleRule {
        kind: def.kind.to_string(),
        pattern,
        edge_template: def.edge_template.to_string(),
        src,
        dst,
        edge,
        verb,
        expand,
    })
}
