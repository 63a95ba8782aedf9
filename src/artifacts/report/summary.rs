use crate::artifacts::diff::diff_result::DiffResult;

/// Aggregate statistics over a comparison run.
///
/// Degraded pairs count as different. The mean similarity is 0 when no
/// pairs were compared.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub identical: usize,
    pub different: usize,
    pub average_similarity: f64,
}

impl Summary {
    pub fn from_results(results: &[DiffResult]) -> Self {
        let total = results.len();
        let identical = results.iter().filter(|result| result.identical).count();
        let average_similarity = if total > 0 {
            results.iter().map(|result| result.similarity).sum::<f64>() / total as f64
        } else {
            0.0
        };

        Summary {
            total,
            identical,
            different: total - identical,
            average_similarity,
        }
    }
}
