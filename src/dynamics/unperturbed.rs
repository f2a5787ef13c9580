use super::Transition;
use crate::Error;
use crate::MAX_MEMORY;
use crate::Probability;
use crate::game::Payoffs;
use crate::game::Player;
use crate::history::History;
use crate::history::Space;
use crate::response::BestResponse;
use crate::response::Sampling;

/// mistake-free adaptive play: both players best-respond
/// independently every period.
#[derive(Debug, Clone)]
pub struct Unperturbed<B = Sampling>
where
    B: BestResponse,
{
    k: usize,
    payoffs: Payoffs,
    oracle: B,
}

impl Unperturbed<Sampling> {
    pub fn new(k: usize, payoffs: Payoffs) -> Self {
        Self::with(Sampling, k, payoffs)
    }
}

impl<B> Unperturbed<B>
where
    B: BestResponse,
{
    pub fn with(oracle: B, k: usize, payoffs: Payoffs) -> Self {
        Self { k, payoffs, oracle }
    }
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn payoffs(&self) -> &Payoffs {
        &self.payoffs
    }
    /// probability that `player` best-responds to `pre` with the action
    /// they are recorded as taking in the newest period of `suc`
    pub fn response(&self, pre: &History, suc: &History, player: Player) -> Probability {
        self.oracle.probability(
            pre,
            suc.newest().action(player),
            player,
            self.k,
            &self.payoffs,
        )
    }
}

impl<B> Transition for Unperturbed<B>
where
    B: BestResponse,
{
    fn probability(&self, pre: &History, suc: &History) -> Probability {
        match pre.precedes(suc) {
            false => 0.,
            true => Player::all()
                .iter()
                .map(|&player| self.response(pre, suc, player))
                .product(),
        }
    }

    /// samples of size `k` must exist in every history of `space`,
    /// and the payoff table must cover its actions
    fn check(&self, space: &Space) -> Result<(), Error> {
        if space.m() > MAX_MEMORY {
            return Err(Error::configuration(format!(
                "m must be at most {}, found {}",
                MAX_MEMORY,
                space.m()
            )));
        }
        if self.k == 0 || self.k > space.m() {
            return Err(Error::configuration(format!(
                "k must lie in [1, m], found k={} m={}",
                self.k,
                space.m()
            )));
        }
        if self.payoffs.num_act() != space.num_act() {
            return Err(Error::shape(
                format!("{} actions", space.num_act()),
                format!("{} actions", self.payoffs.num_act()),
            ));
        }
        Ok(())
    }
}
