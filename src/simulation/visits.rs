use crate::Probability;
use crate::analysis::Density;

/// empirical state frequencies of a sample path
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Visits {
    counts: Vec<usize>,
    total: usize,
}

impl Visits {
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    pub fn total(&self) -> usize {
        self.total
    }
}

impl From<Vec<usize>> for Visits {
    fn from(counts: Vec<usize>) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }
}

impl Density for Visits {
    fn density(&self, x: usize) -> Probability {
        match self.total {
            0 => 0.,
            n => self.counts.get(x).copied().unwrap_or(0) as Probability / n as Probability,
        }
    }
    fn support(&self) -> impl Iterator<Item = usize> {
        0..self.counts.len()
    }
}
