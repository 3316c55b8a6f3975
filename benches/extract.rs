use divan::AllocProfiler;
use divan::{Bencher, black_box};
use relex::conllu::Reader;
use relex::{Catalog, Extractor, Sentence, Token};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn sent(tokens: &[(&str, &str, &str, &str, &str, usize)]) -> Sentence {
    let tokens = tokens
        .iter()
        .map(|&(text, lemma, pos, tag, dep, head)| Token::new(text, lemma, pos, tag, dep, head))
        .collect();
    Sentence::new(tokens).unwrap()
}

/// A small mix of sentences that exercise triples, rewrites, and spans
fn sentences() -> Vec<Sentence> {
    vec![
        sent(&[
            ("The", "the", "DET", "DT", "det", 1),
            ("U.S.", "U.S.", "PROPN", "NNP", "nsubj", 4),
            ("and", "and", "CCONJ", "CC", "cc", 1),
            ("Canada", "Canada", "PROPN", "NNP", "conj", 1),
            ("are", "be", "AUX", "VBP", "ROOT", 4),
            ("countries", "country", "NOUN", "NNS", "attr", 4),
            ("in", "in", "ADP", "IN", "prep", 5),
            ("NATO", "NATO", "PROPN", "NNP", "pobj", 6),
            (".", ".", "PUNCT", ".", "punct", 4),
        ]),
        sent(&[
            ("Alice", "Alice", "PROPN", "NNP", "nsubj", 1),
            ("sold", "sell", "VERB", "VBD", "ROOT", 1),
            ("the", "the", "DET", "DT", "det", 3),
            ("car", "car", "NOUN", "NN", "dobj", 1),
            ("and", "and", "CCONJ", "CC", "cc", 1),
            ("bought", "buy", "VERB", "VBD", "conj", 1),
            ("a", "a", "DET", "DT", "det", 7),
            ("truck", "truck", "NOUN", "NN", "dobj", 5),
            (".", ".", "PUNCT", ".", "punct", 1),
        ]),
        sent(&[
            ("Bob", "Bob", "PROPN", "NNP", "nsubjpass", 2),
            ("was", "be", "AUX", "VBD", "auxpass", 2),
            ("born", "bear", "VERB", "VBN", "ROOT", 2),
            ("on", "on", "ADP", "IN", "prep", 2),
            ("June", "June", "PROPN", "NNP", "pobj", 3),
            ("16", "16", "NUM", "CD", "nummod", 4),
            (",", ",", "PUNCT", ",", "punct", 4),
            ("2022", "2022", "NUM", "CD", "nummod", 4),
            (".", ".", "PUNCT", ".", "punct", 2),
        ]),
        sent(&[
            ("Bob", "Bob", "PROPN", "NNP", "nsubj", 1),
            ("ate", "eat", "VERB", "VBD", "ROOT", 1),
            ("one", "one", "NUM", "CD", "dobj", 1),
            ("of", "of", "ADP", "IN", "prep", 2),
            ("the", "the", "DET", "DT", "det", 5),
            ("cakes", "cake", "NOUN", "NNS", "pobj", 3),
            (".", ".", "PUNCT", ".", "punct", 1),
        ]),
    ]
}

fn conllu_doc() -> String {
    let sentence = "1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2\tdog\tdog\tNOUN\tNN\t_\t3\tnsubj\t_\t_
3\tchased\tchase\tVERB\tVBD\t_\t0\troot\t_\t_
4\tthe\tthe\tDET\tDT\t_\t5\tdet\t_\t_
5\tcat\tcat\tNOUN\tNN\t_\t3\tdobj\t_\t_
6\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\tSpaceAfter=No

";
    sentence.repeat(500)
}

#[divan::bench]
fn compile_catalog(bencher: Bencher) {
    bencher.bench_local(|| black_box(Catalog::standard().unwrap()));
}

#[divan::bench]
fn parse_conllu(bencher: Bencher) {
    let doc = conllu_doc();
    bencher.bench_local(|| {
        for result in Reader::from_text(black_box(&doc)) {
            black_box(result.unwrap());
        }
    });
}

#[divan::bench]
fn process_sentences(bencher: Bencher) {
    let extractor = Extractor::standard().unwrap();
    let sentences = sentences();
    bencher.bench_local(|| {
        for sentence in &sentences {
            black_box(extractor.process(black_box(sentence)));
        }
    });
}
