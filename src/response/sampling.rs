use super::BestResponse;
use super::Samples;
use crate::Action;
use crate::Probability;
use crate::TIE_TOLERANCE;
use crate::Utility;
use crate::game::Payoffs;
use crate::game::Player;
use crate::history::History;

/// k-sample best response (adaptive play).
///
/// the player draws `k` of the `m` recorded periods, every subset of
/// positions equally likely, and looks at what the opponent did in them.
/// it then plays a best reply to those empirical frequencies, splitting
/// ties uniformly among all maximisers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampling;

impl Sampling {
    /// actions maximising expected payoff against the opponent actions
    /// selected by `mask`
    fn replies(history: &History, mask: u64, player: Player, payoffs: &Payoffs) -> Vec<Action> {
        let tally = history
            .opponent(player)
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << *i) != 0)
            .fold(vec![0usize; payoffs.num_act()], |mut tally, (_, other)| {
                tally[other] += 1;
                tally
            });
        let values = (0..payoffs.num_act())
            .map(|own| {
                tally
                    .iter()
                    .enumerate()
                    .map(|(other, &n)| n as Utility * payoffs.utility(player, own, other))
                    .sum::<Utility>()
            })
            .collect::<Vec<_>>();
        let best = values.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
        values
            .iter()
            .enumerate()
            .filter(|(_, v)| best - **v <= TIE_TOLERANCE)
            .map(|(a, _)| a)
            .collect()
    }
}

impl BestResponse for Sampling {
    fn probability(
        &self,
        history: &History,
        action: Action,
        player: Player,
        k: usize,
        payoffs: &Payoffs,
    ) -> Probability {
        let samples = Samples::from((history.memory(), k));
        let n = samples.combinations();
        if n == 0 || action >= payoffs.num_act() {
            return 0.;
        }
        samples
            .map(|mask| Self::replies(history, mask, player, payoffs))
            .filter(|replies| replies.contains(&action))
            .map(|replies| 1. / replies.len() as Probability)
            .sum::<Probability>()
            / n as Probability
    }

    fn distribution(
        &self,
        history: &History,
        player: Player,
        k: usize,
        payoffs: &Payoffs,
    ) -> Vec<Probability> {
        let samples = Samples::from((history.memory(), k));
        let n = samples.combinations();
        let mut mass = vec![0.; payoffs.num_act()];
        if n == 0 {
            return mass;
        }
        for replies in samples.map(|mask| Self::replies(history, mask, player, payoffs)) {
            let share = 1. / (replies.len() * n) as Probability;
            replies.into_iter().for_each(|a| mass[a] += share);
        }
        mass
    }
}
