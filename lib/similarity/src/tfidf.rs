//! TF-IDF vectorizer
//!
//! Builds a fresh vocabulary for every corpus it is given. There is no
//! fitted state kept between calls: the vector space of one request never
//! leaks into another.

use crate::tokenizer::analyze;
use ahash::AHashMap;
use shelfmatch_core::Vector;
use std::collections::BTreeMap;

/// Vectors produced for one corpus, one per input document
#[derive(Debug, Clone, Default)]
pub struct TfidfMatrix {
    /// Terms in column order (lexicographic)
    pub vocabulary: Vec<String>,
    /// Smoothed inverse document frequency per column
    pub idf: Vec<f64>,
    /// L2-normalized rows in input order
    pub vectors: Vec<Vector>,
}

impl TfidfMatrix {
    #[inline]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Column index of a term, if it made it into the vocabulary
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }
}

/// Turns one request's corpus into vectors sharing a single space
pub trait TextVectorizer {
    fn vectorize(&self, documents: &[&str]) -> TfidfMatrix;
}

/// Term-frequency × inverse-document-frequency vectorizer
///
/// - term frequency is the raw count of a token in a document
/// - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
/// - rows are L2-normalized
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self
    }

    /// Fit a vocabulary on `documents` and return their vectors
    ///
    /// If every token is a stop word the vocabulary is empty and each row is
    /// a zero-dimensional vector.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfidfMatrix {
        if documents.is_empty() {
            return TfidfMatrix::default();
        }

        // Per-document term counts
        let counts: Vec<AHashMap<String, u32>> = documents
            .iter()
            .map(|doc| {
                let mut tf: AHashMap<String, u32> = AHashMap::new();
                for token in analyze(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Document frequencies, ordered by term
        let mut dfs: BTreeMap<&str, u32> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *dfs.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let vocabulary: Vec<String> = dfs.keys().map(|t| t.to_string()).collect();
        let idf: Vec<f64> = dfs
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        let columns: AHashMap<&str, usize> = dfs
            .keys()
            .enumerate()
            .map(|(idx, term)| (*term, idx))
            .collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let mut row = vec![0.0f64; vocabulary.len()];
                for (term, &count) in tf {
                    let col = columns[term.as_str()];
                    row[col] = count as f64 * idf[col];
                }
                let mut vector = Vector::new(row);
                vector.normalize();
                vector
            })
            .collect();

        TfidfMatrix {
            vocabulary,
            idf,
            vectors,
        }
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn vectorize(&self, documents: &[&str]) -> TfidfMatrix {
        self.fit_transform(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sorted_without_stop_words() {
        let matrix = TfidfVectorizer::new().fit_transform(&[
            "The red kettle",
            "A blue kettle and a red mug",
        ]);
        assert_eq!(matrix.vocabulary, vec!["blue", "kettle", "mug", "red"]);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.vectors[0].dim(), 4);
        assert_eq!(matrix.term_index("mug"), Some(2));
        assert_eq!(matrix.term_index("the"), None);
    }

    #[test]
    fn test_smoothed_idf() {
        let matrix = TfidfVectorizer::new().fit_transform(&["kettle red", "kettle blue", "kettle"]);
        let kettle = matrix.term_index("kettle").unwrap();
        let red = matrix.term_index("red").unwrap();
        // present everywhere: ln(4/4) + 1
        assert!((matrix.idf[kettle] - 1.0).abs() < 1e-12);
        // present once: ln(4/2) + 1
        assert!((matrix.idf[red] - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_normalized_and_weighted() {
        let matrix = TfidfVectorizer::new().fit_transform(&["kettle kettle red", "kettle"]);
        let row = &matrix.vectors[0];
        assert!((row.norm() - 1.0).abs() < 1e-12);

        // raw weights: kettle = 2 * 1.0, red = 1 * (ln(3/2) + 1)
        let red_w = (1.5f64).ln() + 1.0;
        let norm = (4.0 + red_w * red_w).sqrt();
        let kettle = matrix.term_index("kettle").unwrap();
        assert!((row.as_slice()[kettle] - 2.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_hand_computed_cosine() {
        let matrix = TfidfVectorizer::new().fit_transform(&["kettle steel", "kettle glass", "kettle"]);
        // idf: kettle = 1, steel = glass = ln(4/2) + 1
        let rare = 2.0f64.ln() + 1.0;
        let expected = 1.0 / (1.0 + rare * rare);
        let sim = matrix.vectors[0].cosine_similarity(&matrix.vectors[1]);
        assert!((sim - expected).abs() < 1e-12, "expected {}, got {}", expected, sim);

        let to_query = matrix.vectors[0].cosine_similarity(&matrix.vectors[2]);
        assert!((to_query - 1.0 / (1.0 + rare * rare).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_only_stop_words() {
        let matrix = TfidfVectorizer::new().fit_transform(&["the and of", "a an"]);
        assert!(matrix.vocabulary.is_empty());
        assert_eq!(matrix.len(), 2);
        assert!(matrix.vectors.iter().all(|v| v.is_empty()));
    }

    #[test]
    fn test_empty_corpus() {
        let docs: [&str; 0] = [];
        assert!(TfidfVectorizer::new().fit_transform(&docs).is_empty());
    }
}
