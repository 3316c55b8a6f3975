//! Sentence and token model for dependency parses
//!
//! A sentence is a flat vector of tokens whose `head` fields encode the
//! dependency tree. The root token is self-headed. Construction validates
//! the tree shape; derived structure (children, conjunct chains) is built
//! once and shared by the matchers.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Token position within a sentence
pub type TokenId = usize;

/// A single parsed token
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface form
    pub text: String,
    /// Lemma
    pub lemma: String,
    /// Coarse part of speech (NOUN, VERB, ADJ, ...)
    pub pos: String,
    /// Fine-grained tag (NN, VBD, HYPH, ...)
    pub tag: String,
    /// Dependency label (nsubj, dobj, prep, ...)
    pub dep: String,
    /// Absolute index of the syntactic head; the root is self-headed
    pub head: TokenId,
    /// Whether whitespace follows the token in the surface text
    pub space_after: bool,
}

impl Token {
    /// Create a token with the given attributes, assuming trailing whitespace
    pub fn new(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: TokenId) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
            tag: tag.to_string(),
            dep: dep.to_string(),
            head,
            space_after: true,
        }
    }
}

/// Error describing a malformed dependency tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentenceError {
    #[error("token {id} has head {head} but the sentence has {len} tokens")]
    HeadOutOfRange { id: TokenId, head: TokenId, len: usize },
    #[error("sentence has no self-headed root")]
    MissingRoot,
    #[error("tokens {first} and {second} are both self-headed")]
    MultipleRoots { first: TokenId, second: TokenId },
    #[error("head chain from token {id} never reaches the root")]
    HeadCycle { id: TokenId },
}

/// A validated dependency-parsed sentence
#[derive(Debug, Clone)]
pub struct Sentence {
    tokens: Vec<Token>,
    children: Vec<Vec<TokenId>>,
    root: Option<TokenId>,
}

impl Sentence {
    /// Validate the head structure and build the children index.
    ///
    /// Requires every head in range, exactly one self-headed root, and no
    /// head cycles. An empty sentence is valid and has no root.
    pub fn new(tokens: Vec<Token>) -> Result<Self, SentenceError> {
        let len = tokens.len();
        if len == 0 {
            return Ok(Self { tokens, children: Vec::new(), root: None });
        }

        let mut root = None;
        for (id, token) in tokens.iter().enumerate() {
            if token.head >= len {
                return Err(SentenceError::HeadOutOfRange { id, head: token.head, len });
            }
            if token.head == id {
                match root {
                    None => root = Some(id),
                    Some(first) => {
                        return Err(SentenceError::MultipleRoots { first, second: id });
                    }
                }
            }
        }
        let root = root.ok_or(SentenceError::MissingRoot)?;

        // A head chain longer than the sentence must revisit a token.
        for id in 0..len {
            let mut current = id;
            let mut steps = 0;
            while current != root {
                current = tokens[current].head;
                steps += 1;
                if steps > len {
                    return Err(SentenceError::HeadCycle { id });
                }
            }
        }

        let mut children = vec![Vec::new(); len];
        for (id, token) in tokens.iter().enumerate() {
            if token.head != id {
                children[token.head].push(id);
            }
        }

        Ok(Self { tokens, children, root: Some(root) })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `id`. Panics if out of range.
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id]
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The self-headed root, if the sentence is non-empty
    pub fn root(&self) -> Option<TokenId> {
        self.root
    }

    /// Dependents of `id`, in token order
    pub fn children(&self, id: TokenId) -> &[TokenId] {
        &self.children[id]
    }

    /// Tokens coordinated with `id`, in token order, excluding `id` itself.
    ///
    /// Climbs `conj` arcs to the head of the coordination chain, then
    /// collects every token reachable downward through `conj` arcs.
    pub fn conjuncts(&self, id: TokenId) -> Vec<TokenId> {
        let mut chain_head = id;
        let mut steps = 0;
        while self.tokens[chain_head].dep == "conj" && steps < self.len() {
            let head = self.tokens[chain_head].head;
            if head == chain_head {
                break;
            }
            chain_head = head;
            steps += 1;
        }

        let mut found = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack = vec![chain_head];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current != id {
                found.push(current);
            }
            for &child in self.children(current) {
                if self.tokens[child].dep == "conj" {
                    stack.push(child);
                }
            }
        }
        found.sort_unstable();
        found
    }

    /// Dependency labels of tokens in `[start, end)` whose head lies
    /// outside the range. The self-headed root never counts as inbound.
    pub fn inbound_deps(&self, start: usize, end: usize) -> FxHashSet<&str> {
        let mut deps = FxHashSet::default();
        for id in start..end.min(self.len()) {
            let head = self.tokens[id].head;
            if head < start || head >= end {
                deps.insert(self.tokens[id].dep.as_str());
            }
        }
        deps
    }
}

/// Surface titlecase test: at least one cased character, and every maximal
/// run of cased characters is an uppercase letter followed only by
/// lowercase letters.
pub fn is_title(text: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for ch in text.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent(tokens: &[(&str, &str, &str, &str, &str, usize)]) -> Sentence {
        let tokens = tokens
            .iter()
            .map(|&(text, lemma, pos, tag, dep, head)| Token::new(text, lemma, pos, tag, dep, head))
            .collect();
        Sentence::new(tokens).unwrap()
    }

    #[test]
    fn test_empty_sentence() {
        let sentence = Sentence::new(Vec::new()).unwrap();
        assert!(sentence.is_empty());
        assert_eq!(sentence.root(), None);
    }

    #[test]
    fn test_single_token_root() {
        let sentence = sent(&[("Go", "go", "VERB", "VB", "ROOT", 0)]);
        assert_eq!(sentence.root(), Some(0));
        assert!(sentence.children(0).is_empty());
    }

    #[test]
    fn test_children_in_token_order() {
        // threw
        // ├── Alice (nsubj)
        // └── ball (dobj)
        //     └── the (det)
        let sentence = sent(&[
            ("Alice", "alice", "PROPN", "NNP", "nsubj", 1),
            ("threw", "throw", "VERB", "VBD", "ROOT", 1),
            ("the", "the", "DET", "DT", "det", 3),
            ("ball", "ball", "NOUN", "NN", "dobj", 1),
        ]);
        assert_eq!(sentence.root(), Some(1));
        assert_eq!(sentence.children(1), &[0, 3]);
        assert_eq!(sentence.children(3), &[2]);
    }

    #[test]
    fn test_head_out_of_range() {
        let err = Sentence::new(vec![Token::new("a", "a", "DET", "DT", "det", 7)]).unwrap_err();
        assert_eq!(err, SentenceError::HeadOutOfRange { id: 0, head: 7, len: 1 });
    }

    #[test]
    fn test_missing_root() {
        // 0 -> 1 -> 0 is a cycle with no self-headed token
        let err = Sentence::new(vec![
            Token::new("a", "a", "DET", "DT", "det", 1),
            Token::new("b", "b", "NOUN", "NN", "nsubj", 0),
        ])
        .unwrap_err();
        assert_eq!(err, SentenceError::MissingRoot);
    }

    #[test]
    fn test_multiple_roots() {
        let err = Sentence::new(vec![
            Token::new("a", "a", "NOUN", "NN", "ROOT", 0),
            Token::new("b", "b", "NOUN", "NN", "ROOT", 1),
        ])
        .unwrap_err();
        assert_eq!(err, SentenceError::MultipleRoots { first: 0, second: 1 });
    }

    #[test]
    fn test_head_cycle() {
        // 1 and 2 point at each other; 0 is a valid root
        let err = Sentence::new(vec![
            Token::new("a", "a", "VERB", "VBD", "ROOT", 0),
            Token::new("b", "b", "NOUN", "NN", "nsubj", 2),
            Token::new("c", "c", "NOUN", "NN", "dobj", 1),
        ])
        .unwrap_err();
        assert_eq!(err, SentenceError::HeadCycle { id: 1 });
    }

    #[test]
    fn test_conjuncts_of_chain_head() {
        // "Alice bought pizza and chips"
        // bought
        // ├── Alice (nsubj)
        // └── pizza (dobj)
        //     ├── and (cc)
        //     └── chips (conj)
        let sentence = sent(&[
            ("Alice", "alice", "PROPN", "NNP", "nsubj", 1),
            ("bought", "buy", "VERB", "VBD", "ROOT", 1),
            ("pizza", "pizza", "NOUN", "NN", "dobj", 1),
            ("and", "and", "CCONJ", "CC", "cc", 2),
            ("chips", "chip", "NOUN", "NNS", "conj", 2),
        ]);
        assert_eq!(sentence.conjuncts(2), vec![4]);
        assert_eq!(sentence.conjuncts(4), vec![2]);
        assert!(sentence.conjuncts(0).is_empty());
    }

    #[test]
    fn test_conjuncts_three_way_chain() {
        // "red, white and blue": white and blue are conj under red
        let sentence = sent(&[
            ("red", "red", "ADJ", "JJ", "ROOT", 0),
            ("white", "white", "ADJ", "JJ", "conj", 0),
            ("and", "and", "CCONJ", "CC", "cc", 0),
            ("blue", "blue", "ADJ", "JJ", "conj", 0),
        ]);
        assert_eq!(sentence.conjuncts(0), vec![1, 3]);
        assert_eq!(sentence.conjuncts(1), vec![0, 3]);
        assert_eq!(sentence.conjuncts(3), vec![0, 1]);
    }

    #[test]
    fn test_inbound_deps() {
        // the head of "Alice" and "ball" is "threw", outside either span
        let sentence = sent(&[
            ("Alice", "alice", "PROPN", "NNP", "nsubj", 1),
            ("threw", "throw", "VERB", "VBD", "ROOT", 1),
            ("the", "the", "DET", "DT", "det", 3),
            ("ball", "ball", "NOUN", "NN", "dobj", 1),
        ]);
        let inbound = sentence.inbound_deps(2, 4);
        assert!(inbound.contains("dobj"));
        assert!(!inbound.contains("det"));

        // a span containing the root has no inbound arc from the root
        let inbound = sentence.inbound_deps(0, 2);
        assert!(inbound.contains("nsubj"));
        assert!(!inbound.contains("ROOT"));
    }

    #[test]
    fn test_is_title() {
        assert!(is_title("Hello"));
        assert!(is_title("A"));
        assert!(is_title("Antwerp2000"));
        assert!(!is_title("hello"));
        assert!(!is_title("HELLO"));
        assert!(!is_title("McDonald"));
        assert!(!is_title("al-Awlaki"));
        assert!(!is_title("123"));
        assert!(!is_title(""));
        // each cased run is checked separately
        assert!(is_title("New-York"));
        assert!(!is_title("New-york"));
    }
}
