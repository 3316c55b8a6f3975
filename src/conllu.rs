//! CoNLL-U file parsing
//!
//! Reads the ten-column CoNLL-U format into validated sentences. Only
//! plain token rows are kept: multiword ranges (`1-2`) and empty nodes
//! (`1.1`) are skipped, comments are ignored, and a blank line closes
//! the sentence. Heads are rebased from 1-based ids to absolute indices,
//! with the root made self-headed.
//!
//! CoNLL-U format: https://universaldependencies.org/format.html

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use thiserror::Error;

use crate::sentence::{Sentence, SentenceError, Token};

/// Error for one unreadable row or sentence
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("sentence ending at line {line}: {source}")]
    Tree { line: usize, source: SentenceError },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Streaming reader over the sentences of one CoNLL-U document
pub struct Reader<R: BufRead> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), line: 0 }
    }

    fn malformed(&self, message: String) -> ParseError {
        ParseError::Malformed { line: self.line, message }
    }

    /// Parse one token row. Multiword and empty-node rows are dropped
    /// without touching the sentence.
    fn push_row(&self, row: &str, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() != 10 {
            return Err(self.malformed(format!("expected 10 columns, found {}", fields.len())));
        }

        let id = fields[0];
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }
        let id: usize = id
            .parse()
            .map_err(|_| self.malformed(format!("bad token id `{id}`")))?;
        if id != tokens.len() + 1 {
            return Err(self.malformed(format!(
                "token id {} out of order, expected {}",
                id,
                tokens.len() + 1
            )));
        }

        let head: usize = fields[6]
            .parse()
            .map_err(|_| self.malformed(format!("bad head `{}`", fields[6])))?;
        let head = if head == 0 { id - 1 } else { head - 1 };

        let mut token = Token::new(
            fields[1],
            field(fields[2]),
            field(fields[3]),
            field(fields[4]),
            field(fields[7]),
            head,
        );
        if fields[9].split('|').any(|pair| pair == "SpaceAfter=No") {
            token.space_after = false;
        }
        tokens.push(token);
        Ok(())
    }

    /// Consume the rest of the current sentence after a bad row, so the
    /// next call starts clean at the following sentence.
    fn drain_sentence(&mut self) {
        loop {
            self.line += 1;
            match self.lines.next() {
                None => return,
                Some(Err(_)) => return,
                Some(Ok(line)) => {
                    if line.trim().is_empty() {
                        return;
                    }
                }
            }
        }
    }
}

impl Reader<BufReader<File>> {
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl Reader<io::Cursor<String>> {
    pub fn from_text(text: &str) -> Self {
        Self::new(io::Cursor::new(text.to_string()))
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Sentence, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut tokens: Vec<Token> = Vec::new();
        loop {
            self.line += 1;
            let line = match self.lines.next() {
                None if tokens.is_empty() => return None,
                None => break,
                Some(Err(e)) => return Some(Err(e.into())),
                Some(Ok(line)) => line,
            };
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                if tokens.is_empty() {
                    continue;
                }
                break;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Err(err) = self.push_row(line, &mut tokens) {
                self.drain_sentence();
                return Some(Err(err));
            }
        }

        let line = self.line;
        Some(Sentence::new(tokens).map_err(|source| ParseError::Tree { line, source }))
    }
}

fn field(s: &str) -> &str {
    if s == "_" { "" } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_a_sentence() {
        let doc = "# sent_id = 1
# text = The dog barked.
1\tThe\tthe\tDET\tDT\t_\t3\tdet\t_\t_
2\tdog\tdog\tNOUN\tNN\tNumber=Sing\t3\tnsubj\t_\t_
3\tbarked\tbark\tVERB\tVBD\t_\t0\troot\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\t_

";
        let mut reader = Reader::from_text(doc);
        let sentence = reader.next().unwrap().unwrap();
        assert!(reader.next().is_none());

        assert_eq!(sentence.len(), 4);
        assert_eq!(sentence.root(), Some(2));
        let dog = sentence.token(1);
        assert_eq!(dog.text, "dog");
        assert_eq!(dog.lemma, "dog");
        assert_eq!(dog.pos, "NOUN");
        assert_eq!(dog.tag, "NN");
        assert_eq!(dog.dep, "nsubj");
        assert_eq!(dog.head, 2);
        assert!(dog.space_after);
        assert!(!sentence.token(2).space_after);
    }

    #[test]
    fn test_blank_lines_split_sentences() {
        let doc = "1\tAlice\tAlice\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\twon\twin\tVERB\tVBD\t_\t0\troot\t_\t_


# the second sentence has no trailing blank line
1\tBob\tBob\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tlost\tlose\tVERB\tVBD\t_\t0\troot\t_\t_";
        let sentences: Vec<_> = Reader::from_text(doc).collect::<Result<_, _>>().unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].token(0).text, "Alice");
        assert_eq!(sentences[1].token(0).text, "Bob");
    }

    #[test]
    fn test_multiword_and_empty_ids_skipped() {
        let doc = "1-2\tcannot\t_\t_\t_\t_\t_\t_\t_\t_
1\tcan\tcan\tAUX\tMD\t_\t3\taux\t_\t_
2\tnot\tnot\tPART\tRB\t_\t3\tneg\t_\t_
2.1\tghost\tghost\tNOUN\tNN\t_\t_\t_\t_\t_
3\tstay\tstay\tVERB\tVB\t_\t0\troot\t_\t_

";
        let sentence = Reader::from_text(doc).next().unwrap().unwrap();
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.token(0).text, "can");
        assert_eq!(sentence.token(2).text, "stay");
        assert_eq!(sentence.root(), Some(2));
    }

    #[test]
    fn test_underscore_fields_are_empty() {
        let doc = "1\tfoo\t_\t_\t_\t_\t0\t_\t_\t_

";
        let sentence = Reader::from_text(doc).next().unwrap().unwrap();
        let token = sentence.token(0);
        assert_eq!(token.text, "foo");
        assert_eq!(token.lemma, "");
        assert_eq!(token.pos, "");
        assert_eq!(token.tag, "");
        assert_eq!(token.dep, "");
    }

    #[test]
    fn test_head_out_of_range_is_an_error() {
        let doc = "1\tThe\tthe\tDET\tDT\t_\t9\tdet\t_\t_
2\tdog\tdog\tNOUN\tNN\t_\t0\troot\t_\t_

";
        let err = Reader::from_text(doc).next().unwrap().unwrap_err();
        assert!(matches!(err, ParseError::Tree { .. }));
    }

    #[test]
    fn test_bad_row_skips_to_the_next_sentence() {
        let doc = "1\ttruncated\trow
2\tnever\tseen\tX\tX\t_\t0\troot\t_\t_

1\tok\tok\tADJ\tJJ\t_\t0\troot\t_\t_

";
        let mut reader = Reader::from_text(doc);
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }));
        let sentence = reader.next().unwrap().unwrap();
        assert_eq!(sentence.token(0).text, "ok");
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_out_of_order_id_is_an_error() {
        let doc = "1\ta\ta\tDET\tDT\t_\t0\troot\t_\t_
3\tdog\tdog\tNOUN\tNN\t_\t1\tnsubj\t_\t_

";
        let err = Reader::from_text(doc).next().unwrap().unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }));
    }
}
