use super::Density;
use crate::Probability;
use crate::STABILITY_THRESHOLD;

/// one stochastically stable state and its long-run mass
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Mass {
    pub state: usize,
    pub probability: Probability,
}

/// states holding more than [`STABILITY_THRESHOLD`] of the stationary
/// mass, ascending by state index. may be empty.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Stable(Vec<Mass>);

impl Stable {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn masses(&self) -> &[Mass] {
        &self.0
    }
    pub fn indices(&self) -> Vec<usize> {
        self.0.iter().map(|m| m.state).collect()
    }
    pub fn get(&self, state: usize) -> Option<Probability> {
        self.0
            .binary_search_by_key(&state, |m| m.state)
            .ok()
            .map(|i| self.0[i].probability)
    }
}

impl<D> From<&D> for Stable
where
    D: Density,
{
    fn from(distribution: &D) -> Self {
        Self(
            distribution
                .above(STABILITY_THRESHOLD)
                .into_iter()
                .map(|(state, probability)| Mass { state, probability })
                .collect(),
        )
    }
}
