//! Corpus iteration
//!
//! Provides collection interfaces for iterating sentences from a string,
//! a file, explicit paths, or a glob pattern. Gzipped files are decoded
//! transparently by extension. Errors (file open, parse errors) are
//! logged to stderr and skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::conllu::Reader;
use crate::sentence::Sentence;

/// Source of sentences for a corpus
#[derive(Debug, Clone)]
enum CorpusSource {
    /// In-memory CoNLL-U text
    Text(String),
    /// Single file path
    File(PathBuf),
    /// Multiple file paths (from glob or explicit paths)
    Files(Vec<PathBuf>),
}

/// Collection of sentences from a string, file, or glob pattern
///
/// # Examples
///
/// ```no_run
/// use relex::{Corpus, Extractor};
///
/// let extractor = Extractor::standard().unwrap();
/// for sentence in Corpus::from_file("data.conllu") {
///     let extraction = extractor.process(&sentence);
///     println!("{} triples", extraction.triples.len());
/// }
/// ```
#[derive(Clone)]
pub struct Corpus {
    source: CorpusSource,
}

impl Corpus {
    /// Create from an in-memory CoNLL-U string
    pub fn from_text(text: &str) -> Self {
        Self { source: CorpusSource::Text(text.to_string()) }
    }

    /// Create from a single file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self { source: CorpusSource::File(path.as_ref().to_path_buf()) }
    }

    /// Create from a glob pattern
    ///
    /// Files are processed in sorted order for deterministic results.
    pub fn from_glob(pattern: &str) -> Result<Self, glob::PatternError> {
        let mut paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
        paths.sort();
        Ok(Self::from_paths(paths))
    }

    /// Create from explicit file paths
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { source: CorpusSource::Files(paths) }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = Sentence>> {
        self.clone().into_iter()
    }
}

impl IntoIterator for Corpus {
    type Item = Sentence;
    type IntoIter = Box<dyn Iterator<Item = Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        match self.source {
            CorpusSource::Text(text) => Box::new(drop_errors(Reader::from_text(&text), None)),
            CorpusSource::File(path) => open_file_sentences(path),
            CorpusSource::Files(paths) => {
                Box::new(paths.into_iter().flat_map(open_file_sentences))
            }
        }
    }
}

/// Open a file and return an iterator over its sentences
///
/// Logs file open errors to stderr and returns an empty iterator on
/// error. Files with a `.gz` extension are decompressed on the fly.
fn open_file_sentences(path: PathBuf) -> Box<dyn Iterator<Item = Sentence>> {
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to open {:?}: {}", path, e);
            return Box::new(std::iter::empty());
        }
    };
    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Box::new(drop_errors(Reader::new(reader), Some(path)))
}

/// Keep parsed sentences, log parse errors to stderr and skip them
fn drop_errors<R: BufRead>(
    reader: Reader<R>,
    path: Option<PathBuf>,
) -> impl Iterator<Item = Sentence> {
    reader.filter_map(move |result| match result {
        Ok(sentence) => Some(sentence),
        Err(e) => {
            match &path {
                Some(path) => eprintln!("Warning: skipping sentence in {:?}: {}", path, e),
                None => eprintln!("Warning: skipping sentence: {}", e),
            }
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SENTENCE_CONLLU: &str = "# text = The dog barked.
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2\tdog\tdog\tNOUN\tNN\t_\t3\tnsubj\t_\t_
3\tbarked\tbark\tVERB\tVBD\t_\t0\troot\t_\t_

# text = Cats sleep.
1\tCats\tcat\tNOUN\tNNS\t_\t2\tnsubj\t_\t_
2\tsleep\tsleep\tVERB\tVBP\t_\t0\troot\t_\t_

";

    #[test]
    fn test_corpus_from_text() {
        let sentences: Vec<_> = Corpus::from_text(TWO_SENTENCE_CONLLU).into_iter().collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 3);
        assert_eq!(sentences[1].len(), 2);
        assert_eq!(sentences[1].token(0).text, "Cats");
    }

    #[test]
    fn test_bad_sentences_are_skipped() {
        let doc = "1\tok\tok\tADJ\tJJ\t_\t0\troot\t_\t_

1\tbad\tbad\tADJ\tJJ\t_\t9\tamod\t_\t_

1\tfine\tfine\tADJ\tJJ\t_\t0\troot\t_\t_

";
        let sentences: Vec<_> = Corpus::from_text(doc).into_iter().collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].token(0).text, "ok");
        assert_eq!(sentences[1].token(0).text, "fine");
    }

    #[cfg(test)]
    mod multi_file {
        use super::*;
        use std::fs;
        use std::io::Write;
        use std::path::PathBuf;

        use flate2::Compression;
        use flate2::write::GzEncoder;
        use tempfile::{TempDir, tempdir};

        /// Helper to create test files with given content
        fn create_test_files(contents: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
            let dir = tempdir().unwrap();
            let mut paths = Vec::new();

            for (filename, content) in contents {
                let path = dir.path().join(filename);
                let mut file = fs::File::create(&path).unwrap();
                write!(file, "{}", content).unwrap();
                paths.push(path);
            }

            (dir, paths)
        }

        #[test]
        fn test_corpus_from_paths() {
            let (_dir, paths) = create_test_files(&[
                (
                    "file1.conllu",
                    "1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_\n2\tdog\tdog\tNOUN\tNN\t_\t0\troot\t_\t_\n",
                ),
                (
                    "file2.conllu",
                    "1\tCats\tcat\tNOUN\tNNS\t_\t2\tnsubj\t_\t_\n2\tsleep\tsleep\tVERB\tVBP\t_\t0\troot\t_\t_\n",
                ),
            ]);

            let sentences: Vec<_> = Corpus::from_paths(paths).into_iter().collect();

            assert_eq!(sentences.len(), 2);
            assert_eq!(sentences[0].token(1).text, "dog");
            assert_eq!(sentences[1].token(1).text, "sleep");
        }

        #[test]
        fn test_corpus_from_glob_is_sorted() {
            let (dir, _paths) = create_test_files(&[
                ("b.conllu", "1\tsecond\tsecond\tADJ\tJJ\t_\t0\troot\t_\t_\n"),
                ("a.conllu", "1\tfirst\tfirst\tADJ\tJJ\t_\t0\troot\t_\t_\n"),
                ("other.txt", "ignored"),
            ]);

            let pattern = format!("{}/*.conllu", dir.path().display());
            let sentences: Vec<_> = Corpus::from_glob(&pattern).unwrap().into_iter().collect();

            assert_eq!(sentences.len(), 2);
            assert_eq!(sentences[0].token(0).text, "first");
            assert_eq!(sentences[1].token(0).text, "second");
        }

        #[test]
        fn test_corpus_from_empty_glob() {
            let dir = tempdir().unwrap();
            let pattern = format!("{}/*.conllu", dir.path().display());
            assert_eq!(Corpus::from_glob(&pattern).unwrap().into_iter().count(), 0);
        }

        #[test]
        fn test_gzip_files_are_decoded() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("corpus.conllu.gz");
            let file = fs::File::create(&path).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder
                .write_all(b"1\truns\trun\tVERB\tVBZ\t_\t0\troot\t_\t_\n")
                .unwrap();
            encoder.finish().unwrap();

            let sentences: Vec<_> = Corpus::from_file(&path).into_iter().collect();

            assert_eq!(sentences.len(), 1);
            assert_eq!(sentences[0].token(0).text, "runs");
        }

        #[test]
        fn test_skips_bad_files() {
            let (dir, mut paths) = create_test_files(&[(
                "good.conllu",
                "1\truns\trun\tVERB\tVBZ\t_\t0\troot\t_\t_\n",
            )]);

            let good_file = paths[0].clone();
            let bad_file = dir.path().join("nonexistent.conllu");
            paths = vec![good_file.clone(), bad_file, good_file];

            let sentences: Vec<_> = Corpus::from_paths(paths).into_iter().collect();

            assert_eq!(sentences.len(), 2);
        }
    }
}
