use super::Cases;
use super::Transition;
use super::Unperturbed;
use crate::Error;
use crate::Probability;
use crate::game::Player;
use crate::history::History;
use crate::history::Space;
use crate::response::BestResponse;
use crate::response::Sampling;

/// adaptive play with mistakes: each player independently ignores
/// the best-response rule with probability ε and picks an action
/// uniformly at random instead.
///
/// any full-support experimentation law gives the same stochastically
/// stable states; uniform is the one used here.
#[derive(Debug, Clone)]
pub struct Perturbed<B = Sampling>
where
    B: BestResponse,
{
    epsilon: Probability,
    inner: Unperturbed<B>,
}

impl<B> Perturbed<B>
where
    B: BestResponse,
{
    /// `epsilon` must be a probability; 0 recovers the unperturbed process.
    pub fn new(inner: Unperturbed<B>, epsilon: Probability) -> Result<Self, Error> {
        match (0. ..=1.).contains(&epsilon) {
            true => Ok(Self { epsilon, inner }),
            false => Err(Error::configuration(format!(
                "epsilon must lie in [0, 1], found {}",
                epsilon
            ))),
        }
    }
    pub fn epsilon(&self) -> Probability {
        self.epsilon
    }
    pub fn unperturbed(&self) -> &Unperturbed<B> {
        &self.inner
    }
    /// the four-way decomposition of a feasible transition, or None
    /// if `suc` cannot follow `pre`
    pub fn cases(&self, pre: &History, suc: &History) -> Option<Cases> {
        match pre.precedes(suc) {
            false => None,
            true => Some(Cases::new(
                self.inner.response(pre, suc, Player::P1),
                self.inner.response(pre, suc, Player::P2),
                self.epsilon,
                self.inner.payoffs().num_act(),
            )),
        }
    }
}

impl<B> Transition for Perturbed<B>
where
    B: BestResponse,
{
    fn probability(&self, pre: &History, suc: &History) -> Probability {
        self.cases(pre, suc).map(|c| c.total()).unwrap_or(0.)
    }
    fn check(&self, space: &Space) -> Result<(), Error> {
        self.inner.check(space)
    }
}
