use crate::Probability;

/// generalization of any probability distribution over
/// a finite set of state indices.
///
/// currently implemented by
/// - Stationary, the long-run law of a transition matrix
/// - Visits, the empirical law of a simulated sample path
pub trait Density {
    fn density(&self, x: usize) -> Probability;
    fn support(&self) -> impl Iterator<Item = usize>;

    /// states carrying strictly more than `threshold` mass, ascending
    fn above(&self, threshold: Probability) -> Vec<(usize, Probability)> {
        self.support()
            .map(|x| (x, self.density(x)))
            .filter(|(_, p)| *p > threshold)
            .collect()
    }
}
