use crate::Error;
use crate::Probability;
use crate::history::History;
use crate::history::Space;

/// one-step transition law over play histories.
///
/// `probability` is the hot path: it assumes both histories come from
/// a [`Space`] the model accepts and must return exactly 0 for
/// infeasible pairs without consulting any best-response oracle.
pub trait Transition: Sync {
    fn probability(&self, pre: &History, suc: &History) -> Probability;

    /// whether this model can be evaluated over `space`
    fn check(&self, space: &Space) -> Result<(), Error>;

    /// shape-checked entry point for caller-supplied histories
    fn transition(&self, space: &Space, pre: &History, suc: &History) -> Result<Probability, Error> {
        self.check(space)?;
        space.check(pre)?;
        space.check(suc)?;
        Ok(self.probability(pre, suc))
    }
}
