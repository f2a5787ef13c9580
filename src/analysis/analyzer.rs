use super::Stable;
use super::Stationary;
use crate::dynamics::Matrix;

/// long-run structure of a finite Markov chain.
///
/// implementations must not mutate the matrix and must order their
/// output deterministically: the i-th stationary distribution belongs
/// to the i-th recurrent class.
pub trait Analyzer {
    /// one stationary distribution per recurrent class. never empty
    /// for a non-empty stochastic matrix.
    fn stationary_distributions(&self, matrix: &Matrix) -> Vec<Stationary>;
    /// the recurrent communication classes, each listed ascending
    fn recurrent_classes(&self, matrix: &Matrix) -> Vec<Vec<usize>>;

    /// one representative state index per recurrent class
    fn recurrent_indices(&self, matrix: &Matrix) -> Vec<usize> {
        self.recurrent_classes(matrix)
            .into_iter()
            .filter_map(|class| class.first().copied())
            .collect()
    }
    /// stochastically stable states of the first stationary distribution
    fn stable_states(&self, matrix: &Matrix) -> Stable {
        let distributions = self.stationary_distributions(matrix);
        if distributions.len() > 1 {
            log::warn!(
                "{} stationary distributions, keeping the first",
                distributions.len()
            );
        }
        distributions
            .first()
            .map(Stable::from)
            .unwrap_or_default()
    }
}
