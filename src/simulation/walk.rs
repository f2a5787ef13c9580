use super::Visits;
use crate::Error;
use crate::Probability;
use crate::dynamics::Matrix;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// a seeded sample path of a transition matrix.
pub struct Walk<'a> {
    matrix: &'a Matrix,
    state: usize,
    rng: SmallRng,
}

impl<'a> Walk<'a> {
    pub fn new(matrix: &'a Matrix, start: usize, seed: u64) -> Result<Self, Error> {
        match start < matrix.len() {
            false => Err(Error::InvalidIndex {
                index: start,
                len: matrix.len(),
            }),
            true => Ok(Self {
                matrix,
                state: start,
                rng: SmallRng::seed_from_u64(seed),
            }),
        }
    }
    pub fn state(&self) -> usize {
        self.state
    }
    /// inverse-cdf draw from the current row. rounding shortfall
    /// lands on the last reachable successor.
    fn step(&mut self) -> usize {
        let u = self.rng.random::<Probability>();
        let mut cdf = 0.;
        let mut last = self.state;
        for (j, p) in self.matrix.successors(self.state) {
            cdf += p;
            last = j;
            if u < cdf {
                return j;
            }
        }
        last
    }
    /// visit frequencies over the next `periods` steps
    pub fn visits(mut self, periods: usize) -> Visits {
        let mut counts = vec![0usize; self.matrix.len()];
        for state in self.by_ref().take(periods) {
            counts[state] += 1;
        }
        Visits::from(counts)
    }
}

impl Iterator for Walk<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        self.state = self.step();
        Some(self.state)
    }
}
