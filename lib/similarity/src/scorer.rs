use shelfmatch_core::Vector;

/// Cosine similarity of one query against many candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// One score per candidate, in candidate order
    ///
    /// TF-IDF weights are non-negative so the cosine lands in [0, 1]; the
    /// clamp only absorbs float rounding. Zero vectors score 0.
    pub fn score(&self, query: &Vector, candidates: &[Vector]) -> Vec<f64> {
        candidates
            .iter()
            .map(|candidate| query.cosine_similarity(candidate).clamp(0.0, 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_in_candidate_order() {
        let query = Vector::new(vec![1.0, 0.0, 0.0]);
        let candidates = vec![
            Vector::new(vec![0.0, 1.0, 0.0]),
            Vector::new(vec![1.0, 0.0, 0.0]),
            Vector::new(vec![1.0, 1.0, 0.0]),
            Vector::new(vec![0.0; 3]),
        ];
        let scores = SimilarityScorer::new().score(&query, &candidates);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-12);
        assert!((scores[2] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(scores[3], 0.0);
    }

    #[test]
    fn test_no_candidates() {
        let query = Vector::new(vec![1.0]);
        assert!(SimilarityScorer::new().score(&query, &[]).is_empty());
    }
}
